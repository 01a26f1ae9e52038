//! Fill color component for wheel wedges.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Solid fill color used when drawing a wedge.
#[derive(Component, Clone, Debug, Copy)]
pub struct Tint {
    pub color: Color,
}

impl Tint {
    /// Create an opaque tint from RGB values.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            color: Color::new(r, g, b, 255),
        }
    }
}

impl From<(u8, u8, u8)> for Tint {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_is_opaque() {
        let t = Tint::rgb(255, 69, 0);
        assert_eq!(t.color.r, 255);
        assert_eq!(t.color.g, 69);
        assert_eq!(t.color.b, 0);
        assert_eq!(t.color.a, 255);
    }

    #[test]
    fn test_from_tuple() {
        let t: Tint = (0, 128, 0).into();
        assert_eq!(t.color.g, 128);
        assert_eq!(t.color.a, 255);
    }
}
