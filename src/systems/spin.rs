//! Wheel rotation system.
use bevy_ecs::prelude::*;

use crate::resources::wheelstate::WheelState;

/// Advance the wheel by its spin speed once per frame while spinning.
///
/// Rotation is frame-based, not time-based: the speed is in degrees per
/// frame and the frame rate is capped by the main loop.
pub fn advance_wheel_rotation(mut wheel: ResMut<WheelState>) {
    if wheel.spinning {
        wheel.advance();
    }
}
