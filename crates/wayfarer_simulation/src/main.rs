//! Headless симуляция Wayfarer
//!
//! Гоняет игрока со scripted input по плоскому полу без рендера.

use bevy::prelude::*;
use wayfarer_simulation::{
    create_headless_app, log_info, spawn_headless_player, AnimatorParameters, MotorVelocity,
    ScriptedInput,
};

fn main() {
    let seed = 42;
    let mut app = create_headless_app(seed);
    log_info(&format!("Starting Wayfarer headless simulation (seed: {})", seed));

    let player = spawn_headless_player(app.world_mut(), Vec3::ZERO);
    app.world_mut()
        .entity_mut(player)
        .insert(ScriptedInput::default());

    // 1000 frames ≈ 16.7 секунд
    for frame in 0..1000 {
        app.update();

        if frame % 100 == 0 {
            let world = app.world();
            let position = world.get::<Transform>(player).map(|t| t.translation);
            let velocity = world.get::<MotorVelocity>(player).map(|v| v.0);
            let animator = world.get::<AnimatorParameters>(player).copied();
            log_info(&format!(
                "Frame {}: position {:?}, velocity {:?}, animator {:?}",
                frame, position, velocity, animator
            ));
        }
    }

    log_info("Simulation complete!");
}
