//! Input action events.
//!
//! [`InputEvent`] is triggered when a recognized key is pressed or released.
//! Observers react to these instead of reading
//! [`InputState`](crate::resources::input::InputState) directly.

use bevy_ecs::prelude::*;

/// Logical input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Start or stop the wheel (default: Space).
    ToggleSpin,
}

/// Event emitted when an input action is pressed or released.
#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    /// The input action that triggered this event.
    pub action: InputAction,
    /// Whether the action was pressed (true) or released (false).
    pub pressed: bool,
}
