//! Game configuration resource.
//!
//! Window and text settings loaded from an optional INI file. Every value
//! has a default, so a missing file is not an error for startup.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 500
//! height = 500
//! target_fps = 60
//! vsync = false
//!
//! [text]
//! font = ./assets/fonts/message.ttf
//! ```
//!
//! An empty or absent `font` selects raylib's built-in font.

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_WINDOW_WIDTH: u32 = 500;
const DEFAULT_WINDOW_HEIGHT: u32 = 500;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Changes are applied to the window by
/// [`apply_gameconfig_changes`](crate::systems::gameconfig::apply_gameconfig_changes).
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second. The wheel advances once per frame.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Font file for fortune messages; `None` uses the built-in font.
    pub font_path: Option<PathBuf>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            font_path: None,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, font={:?}",
            self.window_width, self.window_height, self.target_fps, self.vsync, self.font_path
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, contents: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(contents.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [text] section
        if let Some(font) = config.get("text", "font") {
            let font = font.trim();
            self.font_path = (!font.is_empty()).then(|| PathBuf::from(font));
        }
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_canonical_window() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (500, 500));
        assert_eq!(config.target_fps, 60);
        assert!(!config.vsync);
        assert!(config.font_path.is_none());
    }

    #[test]
    fn test_load_from_str_overrides_present_keys() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[window]\ntarget_fps = 30\nvsync = true\n[text]\nfont = fonts/a.ttf\n")
            .unwrap();
        assert_eq!(config.target_fps, 30);
        assert!(config.vsync);
        assert_eq!(config.window_size(), (500, 500));
        assert_eq!(config.font_path, Some(PathBuf::from("fonts/a.ttf")));
    }

    #[test]
    fn test_empty_font_means_builtin() {
        let mut config = GameConfig::new();
        config.load_from_str("[text]\nfont =\n").unwrap();
        assert!(config.font_path.is_none());
    }

    #[test]
    fn test_missing_file_is_error_and_keeps_defaults() {
        let mut config = GameConfig::with_path("./definitely/not/here.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_size(), (500, 500));
    }
}
