//! ECS resources made available to systems.
//!
//! Overview
//! - `fontstore` – loaded fonts keyed by string IDs
//! - `gameconfig` – window and text settings from `config.ini`
//! - `input` – per-frame keyboard state of the spin key
//! - `screensize` – framebuffer dimensions and center
//! - `wheelstate` – rotation, spin speed, spin flag, marker angle and RNG
pub mod fontstore;
pub mod gameconfig;
pub mod input;
pub mod screensize;
pub mod wheelstate;
