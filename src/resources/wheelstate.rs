//! Wheel state resources.
//!
//! [`WheelState`] is the single mutable record of the animation: rotation,
//! per-spin speed, spinning flag and marker angle. It is written only by the
//! spin toggle observer and the rotation advance system.
//!
//! [`SpinRng`] is the random source sampled when a spin starts. It is seeded
//! from OS entropy by default; tests insert a seeded one.

use std::ops::Range;

use bevy_ecs::prelude::Resource;

/// Range the per-frame spin speed is drawn from, in degrees per frame.
pub const SPIN_SPEED_RANGE: Range<f32> = 20.0..40.0;

/// Range the marker angle is drawn from, in degrees.
pub const MARKER_ANGLE_RANGE: Range<f32> = 0.0..360.0;

/// High-level spin phase derived from [`WheelState::spinning`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinPhase {
    Idle,
    Spinning,
}

/// Current animation state of the wheel.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct WheelState {
    /// Wheel rotation in degrees, kept in `[0, 360)`.
    pub rotation_degrees: f32,
    /// Degrees added to the rotation each frame while spinning.
    pub spin_speed: f32,
    pub spinning: bool,
    /// Angle of the indicator marker in degrees. Fixed while spinning.
    pub marker_degrees: f32,
}

impl WheelState {
    pub fn phase(&self) -> SpinPhase {
        if self.spinning {
            SpinPhase::Spinning
        } else {
            SpinPhase::Idle
        }
    }

    /// Flip between idle and spinning.
    ///
    /// Starting a spin samples a fresh speed and marker angle from `rng`.
    /// Stopping freezes the wheel where it is. Returns the new phase.
    pub fn toggle(&mut self, rng: &mut fastrand::Rng) -> SpinPhase {
        if self.spinning {
            self.spinning = false;
        } else {
            self.spinning = true;
            self.spin_speed = sample(rng, SPIN_SPEED_RANGE);
            self.marker_degrees = sample(rng, MARKER_ANGLE_RANGE);
        }
        self.phase()
    }

    /// Add one frame's worth of rotation if spinning.
    pub fn advance(&mut self) {
        if self.spinning {
            self.rotation_degrees = wrap_degrees(self.rotation_degrees + self.spin_speed);
        }
    }
}

/// Single-step wraparound: speeds are below 360 so one subtraction suffices.
pub fn wrap_degrees(degrees: f32) -> f32 {
    if degrees >= 360.0 {
        degrees - 360.0
    } else {
        degrees
    }
}

fn sample(rng: &mut fastrand::Rng, range: Range<f32>) -> f32 {
    let v = range.start + rng.f32() * (range.end - range.start);
    // f32 rounding can land exactly on the open end
    if v >= range.end { range.start } else { v }
}

/// Random source for spin parameters.
#[derive(Resource, Debug, Clone)]
pub struct SpinRng(pub fastrand::Rng);

impl SpinRng {
    pub fn with_seed(seed: u64) -> Self {
        Self(fastrand::Rng::with_seed(seed))
    }
}

impl Default for SpinRng {
    fn default() -> Self {
        Self(fastrand::Rng::new())
    }
}
