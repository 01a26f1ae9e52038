//! Event types and observers.
//!
//! - [`input`] – logical input actions emitted by the input system
//! - [`spin`] – observer that starts and stops the wheel
pub mod input;
pub mod spin;
