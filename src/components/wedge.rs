//! Wheel wedge component.
//!
//! Every wedge of the fortune wheel is an entity carrying a [`Wedge`], a
//! [`Tint`](crate::components::tint::Tint) fill and a
//! [`DynamicText`](crate::components::dynamictext::DynamicText) message.
//! The render system draws wedges ordered by [`Wedge::index`].

use bevy_ecs::prelude::Component;

/// Number of wedges on the wheel. Matches the number of fortune messages.
pub const WEDGE_COUNT: usize = 6;

/// Angular width of a single wedge in degrees.
pub const WEDGE_WIDTH_DEGREES: f32 = 360.0 / WEDGE_COUNT as f32;

/// Number of palette entries actually used when coloring wedges.
pub const COLOR_CYCLE: usize = 3;

/// Position of a wedge on the wheel, counted from the rotation origin.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Wedge {
    pub index: usize,
}

impl Wedge {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// Start angle of this wedge in degrees for the given wheel rotation.
    pub fn start_angle(&self, rotation_degrees: f32) -> f32 {
        rotation_degrees + self.index as f32 * WEDGE_WIDTH_DEGREES
    }

    /// End angle of this wedge in degrees for the given wheel rotation.
    pub fn end_angle(&self, rotation_degrees: f32) -> f32 {
        self.start_angle(rotation_degrees) + WEDGE_WIDTH_DEGREES
    }

    /// Angular midpoint of this wedge, where its message is anchored.
    pub fn mid_angle(&self, rotation_degrees: f32) -> f32 {
        self.start_angle(rotation_degrees) + WEDGE_WIDTH_DEGREES / 2.0
    }

    /// Index into the palette used to fill this wedge.
    ///
    /// Only the first [`COLOR_CYCLE`] palette entries are ever used, so
    /// opposite wedges share a color.
    pub fn color_index(&self) -> usize {
        self.index % COLOR_CYCLE
    }
}
