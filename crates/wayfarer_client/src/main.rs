//! Wayfarer client
//!
//! Окно + Rapier physics + motor из wayfarer_simulation.
//! Клавиатура/геймпад → MoveAction / JumpAction для entity с Player.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use wayfarer_simulation::{log_warning, set_log_level, LogLevel, MotorSet, SimulationPlugin};

mod animation;
mod camera;
mod input;
mod scene;

fn main() {
    wayfarer_simulation::init_logger();
    set_log_level(log_level_from_env());

    App::new()
        .add_plugins((
            DefaultPlugins,
            RapierPhysicsPlugin::<NoUserData>::default(),
            SimulationPlugin,
        ))
        .add_systems(Startup, scene::spawn_scene)
        .add_systems(
            Update,
            (input::turn_player, input::emit_player_actions)
                .chain()
                .before(MotorSet::Input),
        )
        .add_systems(
            Update,
            (animation::reflect_animator_parameters, camera::follow_player).after(MotorSet::Step),
        )
        .run();
}

/// WAYFARER_LOG=debug|info|warning|error (по умолчанию info)
fn log_level_from_env() -> LogLevel {
    let Ok(value) = std::env::var("WAYFARER_LOG") else {
        return LogLevel::Info;
    };

    match value.as_str() {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warning" => LogLevel::Warning,
        "error" => LogLevel::Error,
        other => {
            log_warning(&format!("WAYFARER_LOG={:?} не распознан, используем info", other));
            LogLevel::Info
        }
    }
}
