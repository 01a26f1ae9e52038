//! Wrapped text component for fortune messages.
//!
//! Messages are wrapped once when the wedge is spawned. Wrapping counts
//! characters, not pixels: a line grows word by word while its length
//! (spaces included) stays within the limit, and a single word longer than
//! the limit is kept whole on its own line.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Maximum characters per wrapped line.
pub const MAX_LINE_CHARS: usize = 20;

/// Pre-wrapped text attached to an entity.
#[derive(Component, Clone, Debug)]
pub struct DynamicText {
    /// Original, unwrapped text.
    pub text: String,
    /// Wrapped lines, top to bottom.
    pub lines: Vec<String>,
    /// Key of the font in the [`FontStore`](crate::resources::fontstore::FontStore).
    pub font: String,
    /// Font size in pixels. Also used as the line spacing.
    pub font_size: f32,
    pub color: Color,
}

impl DynamicText {
    /// Creates a new DynamicText, wrapping `text` at [`MAX_LINE_CHARS`].
    pub fn new(
        text: impl Into<String>,
        font: impl Into<String>,
        font_size: f32,
        color: Color,
    ) -> Self {
        let text = text.into();
        let lines = wrap_text(&text, MAX_LINE_CHARS);
        Self {
            text,
            lines,
            font: font.into(),
            font_size,
            color,
        }
    }
}

/// Greedy word wrap by character count.
///
/// Whitespace-only input produces no lines.
pub fn wrap_text(text: &str, max_len: usize) -> Vec<String> {
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    let mut current = first.to_string();
    for word in words {
        if current.chars().count() + word.chars().count() + 1 <= max_len {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    lines.push(current);
    lines
}
