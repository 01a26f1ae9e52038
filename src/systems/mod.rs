//! Per-frame systems.
//!
//! Submodules overview
//! - [`gameconfig`] – apply target FPS and vsync when the config changes
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`render`] – draw the wheel, messages and marker using Raylib
//! - [`spin`] – advance the wheel rotation while spinning

pub mod gameconfig;
pub mod input;
pub mod render;
pub mod spin;
