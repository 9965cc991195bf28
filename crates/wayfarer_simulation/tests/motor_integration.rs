//! Интеграционные тесты motor'а: headless App, реальные системы и события

use bevy::prelude::*;
use bevy_rapier3d::prelude::KinematicCharacterController;
use wayfarer_simulation::{
    create_headless_app, spawn_headless_player, AnimatorParameters, CharacterMotor, FlatGroundBody,
    JumpAction, MotorDisabled, MotorVelocity, MoveAction, MoveAxis, MovementConfig,
};

/// App + игрок на полу; первый update (dt = 0) уже прогнан
fn setup() -> (App, Entity) {
    let mut app = create_headless_app(7);
    app.update();

    let player = spawn_headless_player(app.world_mut(), Vec3::ZERO);
    (app, player)
}

fn velocity(app: &App, entity: Entity) -> Vec3 {
    app.world().get::<MotorVelocity>(entity).map(|v| v.0).unwrap()
}

fn animator(app: &App, entity: Entity) -> AnimatorParameters {
    *app.world().get::<AnimatorParameters>(entity).unwrap()
}

fn position(app: &App, entity: Entity) -> Vec3 {
    app.world().get::<Transform>(entity).unwrap().translation
}

#[test]
fn test_idle_on_ground_keeps_ground_bias() {
    let (mut app, player) = setup();

    for _ in 0..10 {
        app.update();

        let v = velocity(&app, player);
        assert_eq!(v, Vec3::new(0.0, -0.5, 0.0));

        let params = animator(&app, player);
        assert!(params.is_grounded);
        assert_eq!(params.speed, 0.0);
    }

    // Пол не пропускает вниз
    assert_eq!(position(&app, player).y, 0.9);
}

#[test]
fn test_move_performed_then_canceled() {
    let (mut app, player) = setup();

    app.world_mut().send_event(MoveAction::Performed {
        entity: player,
        axis: Vec2::Y,
    });
    app.update();

    let v = velocity(&app, player);
    assert!((v.z + 5.0).abs() < 1e-4, "velocity.z = {}", v.z);
    assert!((animator(&app, player).speed - 5.0).abs() < 1e-4);

    // Axis держится между frames без новых событий
    app.update();
    assert!(position(&app, player).z < -0.1);

    app.world_mut().send_event(MoveAction::Canceled { entity: player });
    app.update();

    let v = velocity(&app, player);
    assert_eq!(v.x, 0.0);
    assert_eq!(v.z, 0.0);
    assert_eq!(animator(&app, player).speed, 0.0);
    assert_eq!(app.world().get::<MoveAxis>(player).unwrap().axis, Vec2::ZERO);
}

#[test]
fn test_jump_arc_applies_jump_force_once() {
    let (mut app, player) = setup();
    app.update();

    app.world_mut().send_event(JumpAction { entity: player });
    app.update();

    assert_eq!(velocity(&app, player).y, 7.0);
    assert!(animator(&app, player).jump_triggered);

    let mut jump_frames = 1;
    let mut previous = 7.0;
    let mut landed = false;

    for _ in 0..120 {
        app.update();
        let v = velocity(&app, player);

        assert!(!animator(&app, player).jump_triggered, "trigger живёт один frame");

        if v.y == 7.0 {
            jump_frames += 1;
        }

        if animator(&app, player).is_grounded {
            assert_eq!(v.y, -0.5);
            landed = true;
            break;
        }

        // В воздухе velocity.y строго убывает
        assert!(v.y < previous, "{} !< {}", v.y, previous);
        previous = v.y;
    }

    assert!(landed, "персонаж не приземлился");
    assert_eq!(jump_frames, 1);
}

#[test]
fn test_jump_request_while_airborne_is_dropped() {
    let (mut app, player) = setup();
    app.update();

    app.world_mut().send_event(JumpAction { entity: player });
    app.update();
    app.update(); // уже в воздухе

    app.world_mut().send_event(JumpAction { entity: player });
    app.update();

    assert!(velocity(&app, player).y < 7.0);
    assert!(!animator(&app, player).jump_triggered);
    assert!(!app.world().get::<MoveAxis>(player).unwrap().jump_requested);
}

#[test]
fn test_missing_body_disables_motor_forever() {
    let mut app = create_headless_app(7);
    app.update();

    let start = Vec3::new(1.0, 5.0, 1.0);
    let orphan = app
        .world_mut()
        .spawn((CharacterMotor::default(), Transform::from_translation(start)))
        .id();
    app.update();

    assert!(app.world().get::<MotorDisabled>(orphan).is_some());

    // Body добавлен позже — motor всё равно выключен
    app.world_mut()
        .entity_mut(orphan)
        .insert(FlatGroundBody::default());
    app.world_mut().send_event(MoveAction::Performed {
        entity: orphan,
        axis: Vec2::X,
    });
    app.world_mut().send_event(JumpAction { entity: orphan });

    for _ in 0..10 {
        app.update();
    }

    assert_eq!(velocity(&app, orphan), Vec3::ZERO);
    assert_eq!(position(&app, orphan), start);
    assert_eq!(*app.world().get::<MoveAxis>(orphan).unwrap(), MoveAxis::default());
}

#[test]
fn test_entity_config_overrides_defaults() {
    let (mut app, player) = setup();
    app.world_mut().entity_mut(player).insert(MovementConfig {
        speed: 2.0,
        ..default()
    });

    app.world_mut().send_event(MoveAction::Performed {
        entity: player,
        axis: Vec2::X,
    });
    app.update();

    let v = velocity(&app, player);
    assert!((v.x - 2.0).abs() < 1e-5, "velocity.x = {}", v.x);
}

#[test]
fn test_rapier_motor_writes_controller_translation() {
    let mut app = create_headless_app(7);
    app.update();

    let entity = app
        .world_mut()
        .spawn((
            CharacterMotor::default(),
            Transform::default(),
            KinematicCharacterController::default(),
        ))
        .id();

    app.world_mut().send_event(MoveAction::Performed {
        entity,
        axis: Vec2::X,
    });
    app.update();

    assert!(app.world().get::<MotorDisabled>(entity).is_none());

    // Без physics step output'а нет → персонаж в воздухе
    let controller = app.world().get::<KinematicCharacterController>(entity).unwrap();
    let translation = controller.translation.unwrap();
    assert!(translation.x > 0.0);
    assert!(translation.y < 0.0);
    assert!(!animator(&app, entity).is_grounded);
}

#[test]
fn test_disable_releases_held_axis() {
    let (mut app, player) = setup();

    app.world_mut().send_event(MoveAction::Performed {
        entity: player,
        axis: Vec2::Y,
    });
    app.update();
    assert!(velocity(&app, player).z < 0.0);

    // Выключаем motor, стик отпускают пока он выключен
    app.world_mut().entity_mut(player).insert(MotorDisabled);
    app.world_mut().send_event(MoveAction::Canceled { entity: player });
    app.update();

    assert_eq!(*app.world().get::<MoveAxis>(player).unwrap(), MoveAxis::default());

    app.world_mut().entity_mut(player).remove::<MotorDisabled>();
    let start = position(&app, player);

    for _ in 0..10 {
        app.update();
        let v = velocity(&app, player);
        assert_eq!(v.x, 0.0);
        assert_eq!(v.z, 0.0);
    }

    let end = position(&app, player);
    assert_eq!(end.x, start.x);
    assert_eq!(end.z, start.z);
}

#[test]
fn test_jump_on_zero_length_frame_waits_for_next_frame() {
    // Без прогретого update: первый frame имеет dt = 0
    let mut app = create_headless_app(7);
    let player = spawn_headless_player(app.world_mut(), Vec3::ZERO);

    app.world_mut().send_event(JumpAction { entity: player });
    app.update();

    assert_eq!(velocity(&app, player).y, -0.5);
    assert!(!animator(&app, player).jump_triggered);
    assert!(app.world().get::<MoveAxis>(player).unwrap().jump_requested);

    app.update();

    assert_eq!(velocity(&app, player).y, 7.0);
    assert!(animator(&app, player).jump_triggered);
    assert!(position(&app, player).y > 0.9);

    // Прыжок реально оторвал от пола
    app.update();
    assert!(!animator(&app, player).is_grounded);
}
