//! Screen size resource.
//!
//! Stores the framebuffer dimensions in pixels. The wheel is centered on
//! the middle of the screen.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Screen size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    /// Center of the screen; (250, 250) for the default 500x500 window.
    pub fn center(&self) -> Vector2 {
        Vector2 {
            x: self.w as f32 / 2.0,
            y: self.h as f32 / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_of_default_window() {
        let c = ScreenSize { w: 500, h: 500 }.center();
        assert_eq!(c.x, 250.0);
        assert_eq!(c.y, 250.0);
    }
}
