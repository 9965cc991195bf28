//! Wayfarer Simulation Core
//!
//! Character motor игрока на Bevy 0.16:
//! - input actions → MoveAxis
//! - pure step_motor (velocity, gravity, jump) каждый rendered frame
//! - physics body: headless пол или Rapier KinematicCharacterController
//! - animation parameters для animation graph движка

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

pub mod animation;
pub mod config;
pub mod input;
pub mod logger;
pub mod motor;
pub mod physics;
pub mod player;

pub use animation::AnimatorParameters;
pub use config::MovementConfig;
pub use input::{JumpAction, MoveAction, MoveAxis, ScriptedInput};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, LogLevel, LogPrinter,
};
pub use motor::{
    step_motor, CharacterMotor, MotorDisabled, MotorError, MotorFrame, MotorReport, MotorSet,
    MotorVelocity,
};
pub use physics::{spawn_rapier_character, CharacterBody, FlatGroundBody};
pub use player::{spawn_headless_player, Player};

/// Частота headless прогонов (rendered frames в секунду)
pub const HEADLESS_FRAME_RATE: f64 = 60.0;

/// Главный plugin симуляции
///
/// Rapier plugin НЕ добавляется: headless работает без него,
/// client добавляет RapierPhysicsPlugin сам.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Headless app кладёт свой seed до plugin'а
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app.init_resource::<MovementConfig>()
            .add_event::<MoveAction>()
            .add_event::<JumpAction>()
            .register_type::<MovementConfig>()
            .register_type::<CharacterMotor>()
            .register_type::<MotorVelocity>()
            .register_type::<MoveAxis>()
            .register_type::<AnimatorParameters>()
            .register_type::<FlatGroundBody>()
            .register_type::<Player>()
            .configure_sets(
                Update,
                (MotorSet::Input, MotorSet::Validate, MotorSet::Step).chain(),
            )
            .add_systems(
                Update,
                (
                    input::release_disabled_input,
                    input::drive_scripted_input,
                    input::bind_input_actions,
                )
                    .chain()
                    .in_set(MotorSet::Input),
            )
            .add_systems(
                Update,
                motor::validate_character_bodies.in_set(MotorSet::Validate),
            )
            .add_systems(
                Update,
                (motor::drive_flat_ground_motors, motor::drive_rapier_motors).in_set(MotorSet::Step),
            );
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Time шагает ровно на 1/60 sec за `app.update()` (первый update — dt = 0).
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / HEADLESS_FRAME_RATE,
        )))
        .insert_resource(DeterministicRng::new(seed))
        .add_plugins(SimulationPlugin);

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
