//! Per-frame keyboard input resource.
//!
//! The wheel only reacts to one key: the spin toggle, bound to the space bar.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    /// Inactive state bound to `key`.
    pub fn bound_to(key: KeyboardKey) -> Self {
        Self {
            key_binding: key,
            ..Self::default()
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

/// Resource capturing the keyboard state relevant to the wheel.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub toggle_spin: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            toggle_spin: BoolState::bound_to(KeyboardKey::KEY_SPACE),
        }
    }
}
