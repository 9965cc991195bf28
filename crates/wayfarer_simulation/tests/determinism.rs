//! Тесты детерминизма
//!
//! Scripted input с одинаковым seed должен давать идентичную траекторию

use bevy::prelude::*;
use wayfarer_simulation::{
    create_headless_app, spawn_headless_player, world_snapshot, MotorVelocity, ScriptedInput,
};

#[test]
fn test_determinism_same_seed() {
    const SEED: u64 = 12345;
    const PLAYER_COUNT: usize = 10;
    const FRAME_COUNT: usize = 600;

    let transforms1 = run_simulation::<Transform>(SEED, PLAYER_COUNT, FRAME_COUNT);
    let transforms2 = run_simulation::<Transform>(SEED, PLAYER_COUNT, FRAME_COUNT);

    assert_eq!(
        transforms1, transforms2,
        "Симуляция с одинаковым seed ({}) дала разные результаты!",
        SEED
    );
}

#[test]
fn test_determinism_multiple_runs() {
    const SEED: u64 = 42;

    let snapshots: Vec<_> = (0..3)
        .map(|_| run_simulation::<MotorVelocity>(SEED, 5, 600))
        .collect();

    for (i, snapshot) in snapshots.iter().enumerate().skip(1) {
        assert_eq!(
            snapshots[0], *snapshot,
            "Прогон {} дал результат отличный от прогона 0",
            i
        );
    }
}

#[test]
fn test_different_seeds_diverge() {
    let a = run_simulation::<Transform>(1, 3, 600);
    let b = run_simulation::<Transform>(2, 3, 600);

    assert_ne!(a, b);
}

/// Запускает симуляцию и возвращает snapshot компонента T
fn run_simulation<T: Component + std::fmt::Debug>(
    seed: u64,
    player_count: usize,
    frame_count: usize,
) -> Vec<u8> {
    let mut app = create_headless_app(seed);

    for i in 0..player_count {
        let player = spawn_headless_player(app.world_mut(), Vec3::new(i as f32 * 3.0, 0.0, 0.0));
        app.world_mut()
            .entity_mut(player)
            .insert(ScriptedInput::default());
    }

    for _ in 0..frame_count {
        app.update();
    }

    world_snapshot::<T>(app.world_mut())
}
