//! Wheel rendering.
//!
//! [`render_system`] draws one full frame: white background, black wheel
//! disc, the colored wedges with their messages, then the golden marker.
//! Ending the draw scope presents the frame and waits for the target FPS.
//!
//! Angles are in degrees. Wedges and messages are placed with negated
//! cosine/sine, the marker with plain cosine/sine. Screen Y grows downward.

use std::ffi::CString;

use bevy_ecs::prelude::*;
use log::warn;
use raylib::ffi;
use raylib::prelude::*;

use crate::components::dynamictext::DynamicText;
use crate::components::tint::Tint;
use crate::components::wedge::Wedge;
use crate::resources::fontstore::FontStore;
use crate::resources::screensize::ScreenSize;
use crate::resources::wheelstate::WheelState;

/// Radius of the black background disc.
pub const WHEEL_RADIUS: f32 = 200.0;
/// Distance from the center to the outer corners of each wedge.
pub const WEDGE_RADIUS: f32 = 150.0;
/// Distance from the center to the first line of a wedge's message.
pub const MESSAGE_RADIUS: f32 = 90.0;
/// Half length of the marker line.
pub const MARKER_LENGTH: f32 = 50.0;
pub const MARKER_THICKNESS: f32 = 5.0;
/// Distance from the center to the arrowhead's back corners.
pub const ARROW_BASE_RADIUS: f32 = 15.0;
/// Distance from the center to the arrowhead's tip.
pub const ARROW_TIP_RADIUS: f32 = MARKER_LENGTH + 5.0;
/// Angular offset of the arrowhead's back corners from the marker angle.
pub const ARROW_SPREAD_DEGREES: f32 = 150.0;
/// Text spacing passed to raylib, in pixels.
pub const TEXT_SPACING: f32 = 1.0;

pub const MARKER_COLOR: Color = Color {
    r: 255,
    g: 223,
    b: 0,
    a: 255,
};

/// Point at `radius` from `center` in direction `degrees`.
///
/// A negative radius points the opposite way.
pub fn polar(center: Vector2, radius: f32, degrees: f32) -> Vector2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vector2 {
        x: center.x + radius * cos,
        y: center.y + radius * sin,
    }
}

/// Reorder a triangle so raylib does not cull it.
///
/// Raylib expects counter-clockwise winding as seen on screen, which with
/// Y pointing down means a non-positive cross product.
pub fn counter_clockwise(tri: [Vector2; 3]) -> [Vector2; 3] {
    let [a, b, c] = tri;
    let cross = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
    if cross > 0.0 { [a, c, b] } else { tri }
}

/// Triangle of a wedge spanning `start_degrees..end_degrees`.
pub fn wedge_triangle(center: Vector2, start_degrees: f32, end_degrees: f32) -> [Vector2; 3] {
    counter_clockwise([
        center,
        polar(center, -WEDGE_RADIUS, start_degrees),
        polar(center, -WEDGE_RADIUS, end_degrees),
    ])
}

/// Endpoints of the marker line, passing through the center.
pub fn marker_line(center: Vector2, marker_degrees: f32) -> (Vector2, Vector2) {
    (
        polar(center, -MARKER_LENGTH, marker_degrees),
        polar(center, MARKER_LENGTH, marker_degrees),
    )
}

/// Arrowhead triangle at the positive end of the marker line.
pub fn marker_arrowhead(center: Vector2, marker_degrees: f32) -> [Vector2; 3] {
    counter_clockwise([
        polar(center, ARROW_BASE_RADIUS, marker_degrees + ARROW_SPREAD_DEGREES),
        polar(center, ARROW_TIP_RADIUS, marker_degrees),
        polar(center, ARROW_BASE_RADIUS, marker_degrees - ARROW_SPREAD_DEGREES),
    ])
}

/// Center points for each line of a wedge message.
///
/// The first line sits at [`MESSAGE_RADIUS`] along the wedge's mid angle.
/// Following lines always stack straight down by `line_height`, whatever
/// the wedge orientation.
pub fn message_line_anchors(
    center: Vector2,
    mid_degrees: f32,
    line_count: usize,
    line_height: f32,
) -> Vec<Vector2> {
    let first = polar(center, -MESSAGE_RADIUS, mid_degrees);
    (0..line_count)
        .map(|i| Vector2 {
            x: first.x,
            y: first.y + line_height * i as f32,
        })
        .collect()
}

/// Draw the whole wheel for the current [`WheelState`].
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    fonts: NonSend<FontStore>,
    wheel: Res<WheelState>,
    screen: Res<ScreenSize>,
    wedges: Query<(&Wedge, &Tint, &DynamicText)>,
) {
    let center = screen.center();

    let mut ordered: Vec<(&Wedge, &Tint, &DynamicText)> = wedges.iter().collect();
    ordered.sort_by_key(|(wedge, _, _)| **wedge);

    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::WHITE);
    d.draw_circle_v(center, WHEEL_RADIUS, Color::BLACK);

    for (wedge, tint, text) in ordered {
        let rotation = wheel.rotation_degrees;
        let [a, b, c] = wedge_triangle(
            center,
            wedge.start_angle(rotation),
            wedge.end_angle(rotation),
        );
        d.draw_triangle(a, b, c, tint.color);

        let anchors = message_line_anchors(
            center,
            wedge.mid_angle(rotation),
            text.lines.len(),
            text.font_size,
        );
        draw_centered_lines(&mut d, &fonts, text, &anchors);
    }

    let (from, to) = marker_line(center, wheel.marker_degrees);
    d.draw_line_ex(from, to, MARKER_THICKNESS, MARKER_COLOR);
    let [a, b, c] = marker_arrowhead(center, wheel.marker_degrees);
    d.draw_triangle(a, b, c, MARKER_COLOR);
}

fn draw_centered_lines(
    d: &mut RaylibDrawHandle,
    fonts: &FontStore,
    text: &DynamicText,
    anchors: &[Vector2],
) {
    let Some(font) = fonts.get(&text.font) else {
        warn!("Font '{}' not found in FontStore, skipping text", text.font);
        return;
    };

    for (line, anchor) in text.lines.iter().zip(anchors) {
        let Ok(c_line) = CString::new(line.as_bytes()) else {
            continue;
        };
        let raw: &ffi::Font = font.as_ref();
        let size =
            unsafe { ffi::MeasureTextEx(*raw, c_line.as_ptr(), text.font_size, TEXT_SPACING) };
        let pos = Vector2 {
            x: anchor.x - size.x / 2.0,
            y: anchor.y - size.y / 2.0,
        };
        d.draw_text_ex(font, line, pos, text.font_size, TEXT_SPACING, text.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Vector2 = Vector2 { x: 250.0, y: 250.0 };
    const EPS: f32 = 1e-3;

    fn close(a: Vector2, x: f32, y: f32) -> bool {
        (a.x - x).abs() < EPS && (a.y - y).abs() < EPS
    }

    fn cross(t: [Vector2; 3]) -> f32 {
        let [a, b, c] = t;
        (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
    }

    fn contains(t: &[Vector2; 3], x: f32, y: f32) -> bool {
        t.iter().any(|p| close(*p, x, y))
    }

    #[test]
    fn test_polar_negative_radius_flips_direction() {
        assert!(close(polar(CENTER, 150.0, 0.0), 400.0, 250.0));
        assert!(close(polar(CENTER, -150.0, 0.0), 100.0, 250.0));
        assert!(close(polar(CENTER, -150.0, 90.0), 250.0, 100.0));
    }

    #[test]
    fn test_first_wedge_at_zero_rotation() {
        let tri = wedge_triangle(CENTER, 0.0, 60.0);
        assert!(contains(&tri, 250.0, 250.0));
        assert!(contains(&tri, 100.0, 250.0));
        let (s, c) = 60f32.to_radians().sin_cos();
        assert!(contains(&tri, 250.0 - 150.0 * c, 250.0 - 150.0 * s));
        assert!(cross(tri) <= 0.0);
    }

    #[test]
    fn test_all_wedges_wound_for_raylib() {
        for rot in [0.0, 17.0, 123.4, 359.9] {
            for i in 0..6 {
                let start = rot + i as f32 * 60.0;
                let tri = wedge_triangle(CENTER, start, start + 60.0);
                assert!(cross(tri) <= 0.0);
            }
        }
    }

    #[test]
    fn test_marker_line_is_symmetric_about_center() {
        let (from, to) = marker_line(CENTER, 30.0);
        assert!(close(
            Vector2 {
                x: (from.x + to.x) / 2.0,
                y: (from.y + to.y) / 2.0
            },
            250.0,
            250.0
        ));
        let (s, c) = 30f32.to_radians().sin_cos();
        assert!(close(to, 250.0 + 50.0 * c, 250.0 + 50.0 * s));
    }

    #[test]
    fn test_arrowhead_tip_beyond_line_end() {
        let tri = marker_arrowhead(CENTER, 0.0);
        assert!(contains(&tri, 305.0, 250.0));
        let (s, c) = 150f32.to_radians().sin_cos();
        assert!(contains(&tri, 250.0 + 15.0 * c, 250.0 + 15.0 * s));
        assert!(contains(&tri, 250.0 + 15.0 * c, 250.0 - 15.0 * s));
        assert!(cross(tri) <= 0.0);
    }

    #[test]
    fn test_message_lines_stack_downward() {
        let anchors = message_line_anchors(CENTER, 30.0, 3, 18.0);
        let (s, c) = 30f32.to_radians().sin_cos();
        let (x0, y0) = (250.0 - 90.0 * c, 250.0 - 90.0 * s);
        assert_eq!(anchors.len(), 3);
        assert!(close(anchors[0], x0, y0));
        assert!(close(anchors[1], x0, y0 + 18.0));
        assert!(close(anchors[2], x0, y0 + 36.0));
    }

    #[test]
    fn test_counter_clockwise_keeps_valid_order() {
        let tri = [
            Vector2 { x: 0.0, y: 0.0 },
            Vector2 { x: 0.0, y: 10.0 },
            Vector2 { x: 10.0, y: 10.0 },
        ];
        let out = counter_clockwise(tri);
        assert!(close(out[1], 0.0, 10.0));
        let swapped = counter_clockwise([tri[0], tri[2], tri[1]]);
        assert!(close(swapped[1], 0.0, 10.0));
    }
}
