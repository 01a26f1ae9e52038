//! Spin toggle observer.
//!
//! Reacts to [`InputAction::ToggleSpin`] presses by flipping the
//! [`WheelState`] between idle and spinning. Releases are ignored.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::events::input::{InputAction, InputEvent};
use crate::resources::wheelstate::{SpinPhase, SpinRng, WheelState};

pub fn spin_toggle_observer(
    trigger: On<InputEvent>,
    mut wheel: ResMut<WheelState>,
    mut rng: ResMut<SpinRng>,
) {
    let event = trigger.event();
    if event.action != InputAction::ToggleSpin || !event.pressed {
        return;
    }

    match wheel.toggle(&mut rng.0) {
        SpinPhase::Spinning => debug!(
            "Spin started: speed={:.2} deg/frame, marker={:.2} deg",
            wheel.spin_speed, wheel.marker_degrees
        ),
        SpinPhase::Idle => debug!("Spin stopped at {:.2} deg", wheel.rotation_degrees),
    }
}
