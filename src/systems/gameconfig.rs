//! Game configuration change detection system.
//!
//! Applies [`GameConfig`] frame pacing settings to the window when the
//! resource is added or modified.

use crate::resources::gameconfig::GameConfig;
use bevy_ecs::prelude::*;
use log::info;
use raylib::ffi;

/// System that applies target FPS and vsync from [`GameConfig`].
pub fn apply_gameconfig_changes(
    maybe_config: Option<Res<GameConfig>>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
) {
    let Some(config) = maybe_config else {
        return;
    };

    if config.is_changed() || config.is_added() {
        unsafe {
            if config.vsync {
                ffi::SetWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
            } else {
                ffi::ClearWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
            }
        }

        rl.set_target_fps(config.target_fps);

        info!(
            "GameConfig applied: target_fps={}, vsync={}",
            config.target_fps, config.vsync
        );
    }
}
