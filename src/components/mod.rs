//! ECS components for wheel entities.
//!
//! Submodules overview:
//! - [`dynamictext`] – pre-wrapped message text and the wrap algorithm
//! - [`tint`] – fill color of a wedge
//! - [`wedge`] – wedge position on the wheel and its angles

pub mod dynamictext;
pub mod tint;
pub mod wedge;
