//! Wheel setup and teardown.
//!
//! Opens the window, loads the message font, spawns one entity per wedge
//! and releases graphics resources in a safe order on exit.

use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::*;

use crate::components::dynamictext::DynamicText;
use crate::components::tint::Tint;
use crate::components::wedge::{WEDGE_COUNT, Wedge};
use crate::resources::fontstore::{FontStore, MESSAGE_FONT, StoredFont};
use crate::resources::gameconfig::GameConfig;

pub const WINDOW_TITLE: &str = "Fortune Wheel";

/// Message font size in pixels, also the line spacing.
pub const MESSAGE_FONT_SIZE: f32 = 18.0;

/// Wedge palette. Wedges pick `PALETTE[index % 3]`, so only the first
/// three entries are visible.
pub const PALETTE: [(u8, u8, u8); WEDGE_COUNT] = [
    (255, 69, 0),   // red
    (0, 128, 0),    // green
    (0, 0, 255),    // blue
    (255, 255, 0),  // yellow
    (255, 0, 255),  // magenta
    (0, 255, 255),  // cyan
];

pub const FORTUNE_MESSAGES: [&str; WEDGE_COUNT] = [
    "Good luck is coming your way!",
    "A surprise is waiting for you!",
    "You will have a great day!",
    "Expect good news very soon!",
    "Your future looks bright!",
    "A new opportunity is on the horizon!",
];

/// Open the (non-resizable) window described by `config`.
pub fn init_window(config: &GameConfig) -> Result<(RaylibHandle, RaylibThread), String> {
    let (width, height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(width as i32, height as i32)
        .title(WINDOW_TITLE)
        .build();

    if !rl.is_window_ready() {
        return Err(format!("Failed to open {}x{} window", width, height));
    }

    // Only the window close gesture quits
    rl.set_exit_key(None);
    rl.set_target_fps(config.target_fps);

    info!("Window opened: {}x{}", width, height);
    Ok((rl, thread))
}

/// Load the message font into a new [`FontStore`].
///
/// Uses the configured font file if any, raylib's built-in font otherwise.
pub fn load_fonts(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    config: &GameConfig,
) -> Result<FontStore, String> {
    let mut fonts = FontStore::new();

    let font = match &config.font_path {
        Some(path) => {
            let font = rl
                .load_font(th, &path.to_string_lossy())
                .map_err(|e| format!("Failed to load font '{}': {}", path.display(), e))?;
            info!("Loaded message font from {}", path.display());
            StoredFont::Loaded(font)
        }
        None => {
            info!("Using built-in message font");
            StoredFont::Builtin(rl.get_font_default())
        }
    };
    fonts.add(MESSAGE_FONT, font);

    Ok(fonts)
}

/// Spawn one entity per wedge with its fill color and wrapped message.
pub fn spawn_wedges(mut commands: Commands) {
    for (index, message) in FORTUNE_MESSAGES.iter().enumerate() {
        let wedge = Wedge::new(index);
        commands.spawn((
            wedge,
            Tint::from(PALETTE[wedge.color_index()]),
            DynamicText::new(*message, MESSAGE_FONT, MESSAGE_FONT_SIZE, Color::WHITE),
        ));
    }
}

/// Release graphics resources before the window closes.
///
/// Fonts must be unloaded while the raylib context is still alive, so the
/// font store is dropped before the world (and the window handle with it).
pub fn shutdown(mut world: World) {
    if let Some(fonts) = world.remove_non_send_resource::<FontStore>() {
        info!("Releasing {} font(s)", fonts.len());
        drop(fonts);
    }
    drop(world);
    info!("Window closed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::dynamictext::MAX_LINE_CHARS;
    use bevy_ecs::system::RunSystemOnce;

    #[test]
    fn test_one_message_per_wedge() {
        assert_eq!(FORTUNE_MESSAGES.len(), WEDGE_COUNT);
        assert_eq!(PALETTE.len(), WEDGE_COUNT);
    }

    #[test]
    fn test_spawn_wedges_assigns_cycled_colors() {
        let mut world = World::new();
        world.run_system_once(spawn_wedges).unwrap();

        let mut query = world.query::<(&Wedge, &Tint, &DynamicText)>();
        let mut wedges: Vec<_> = query
            .iter(&world)
            .map(|(w, t, d)| (*w, t.color, d.clone()))
            .collect();
        wedges.sort_by_key(|(w, _, _)| *w);

        assert_eq!(wedges.len(), WEDGE_COUNT);
        for (wedge, color, text) in &wedges {
            let expected = PALETTE[wedge.index % 3];
            assert_eq!((color.r, color.g, color.b), expected);
            assert_eq!(text.text, FORTUNE_MESSAGES[wedge.index]);
            assert_eq!(text.font, MESSAGE_FONT);
            assert_eq!(text.font_size, MESSAGE_FONT_SIZE);
        }
        assert_eq!(wedges[0].1.r, wedges[3].1.r);
        assert_eq!(wedges[2].1.b, wedges[5].1.b);
    }

    #[test]
    fn test_all_messages_wrap_within_limit() {
        let mut world = World::new();
        world.run_system_once(spawn_wedges).unwrap();

        let mut query = world.query::<&DynamicText>();
        for text in query.iter(&world) {
            assert!(!text.lines.is_empty());
            assert!(text.lines.iter().all(|l| l.chars().count() <= MAX_LINE_CHARS));
            assert_eq!(text.lines.join(" "), text.text);
        }
    }
}
