//! Input system.
//!
//! [`update_input_state`] reads the keyboard from Raylib each frame, writes
//! the results into [`InputState`] and triggers an [`InputEvent`] on each
//! press or release of the spin key.
use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;

use crate::events::input::{InputAction, InputEvent};
use crate::resources::input::{BoolState, InputState};

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let is_key_down = |key: KeyboardKey| rl.is_key_down(key);
    let is_key_pressed = |key: KeyboardKey| rl.is_key_pressed(key);
    let is_key_released = |key: KeyboardKey| rl.is_key_released(key);

    let key = input.toggle_spin.key_binding;
    record_key(
        &mut input.toggle_spin,
        is_key_down(key),
        is_key_pressed(key),
        is_key_released(key),
    );

    if input.toggle_spin.just_pressed {
        commands.trigger(InputEvent {
            action: InputAction::ToggleSpin,
            pressed: true,
        });
    }
    if input.toggle_spin.just_released {
        commands.trigger(InputEvent {
            action: InputAction::ToggleSpin,
            pressed: false,
        });
    }
}

fn record_key(state: &mut BoolState, down: bool, pressed: bool, released: bool) {
    state.active = down;
    state.just_pressed = pressed;
    state.just_released = released;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_key_overwrites_previous_frame() {
        let mut state = BoolState::bound_to(KeyboardKey::KEY_SPACE);
        record_key(&mut state, true, true, false);
        assert!(state.active && state.just_pressed && !state.just_released);

        record_key(&mut state, false, false, true);
        assert!(!state.active && !state.just_pressed && state.just_released);
        assert_eq!(state.key_binding, KeyboardKey::KEY_SPACE);
    }
}
