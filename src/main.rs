//! Fortune wheel entry point.
//!
//! A single-window animation written in Rust using:
//! - **raylib** for windowing, drawing and frame pacing
//! - **bevy_ecs** to hold the wheel state and wedge entities
//!
//! Press space to start spinning the wheel; press it again to stop.
//! Close the window to quit.
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (optional), open the window, load the message font
//! 2. Insert resources, register the spin observer, spawn the wedges
//! 3. Every frame: poll input, toggle/advance the wheel, render and present
//! 4. Release fonts, then the window
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use fortunewheel::events::spin::spin_toggle_observer;
use fortunewheel::resources::gameconfig::GameConfig;
use fortunewheel::resources::input::InputState;
use fortunewheel::resources::screensize::ScreenSize;
use fortunewheel::resources::wheelstate::{SpinRng, WheelState};
use fortunewheel::systems::gameconfig::apply_gameconfig_changes;
use fortunewheel::systems::input::update_input_state;
use fortunewheel::systems::render::render_system;
use fortunewheel::systems::spin::advance_wheel_rotation;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use bevy_ecs::system::RunSystemOnce;
use clap::Parser;
use fortunewheel::game;
use log::{error, info};

/// Fortune Wheel
#[derive(Parser)]
#[command(version, about = "A spinning fortune wheel. Space starts and stops the spin.")]
struct Cli {}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let _cli = Cli::parse();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut config = GameConfig::new();
    if let Err(e) = config.load_from_file() {
        info!("{}; using defaults", e);
    }

    // --------------- Raylib window & assets ---------------
    let (mut rl, thread) = game::init_window(&config)?;
    let fonts = game::load_fonts(&mut rl, &thread, &config)?;

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(ScreenSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(WheelState::default());
    world.insert_resource(SpinRng::default());
    world.insert_resource(InputState::default());
    world.insert_resource(config);
    world.insert_non_send_resource(fonts);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(spin_toggle_observer));
    // Ensure the observer is registered before input systems trigger events.
    world.flush();

    world
        .run_system_once(game::spawn_wedges)
        .map_err(|e| format!("Failed to spawn wedges: {}", e))?;

    // Commands from the input system are applied before the advance step,
    // so a spin started this frame already moves the wheel.
    let mut update = Schedule::default();
    update.add_systems(apply_gameconfig_changes);
    update.add_systems(update_input_state.after(apply_gameconfig_changes));
    update.add_systems(advance_wheel_rotation.after(update_input_state));
    update.add_systems(render_system.after(advance_wheel_rotation));

    update
        .initialize(&mut world)
        .map_err(|e| format!("Failed to initialize schedule: {}", e))?;

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        update.run(&mut world);
    }

    game::shutdown(world);
    Ok(())
}
