//! Device input → logical actions
//!
//! Move: WASD / стрелки / левый стик геймпада. Events пишутся только на
//! изменение axis (performed / canceled), как у action-based input систем.
//! Jump: Space / South (just_pressed).

use bevy::prelude::*;
use wayfarer_simulation::{JumpAction, MoveAction, Player};

/// Скорость поворота персонажа (рад/сек)
const TURN_SPEED: f32 = 2.5;

/// Axis ниже этого порога считается отпущенной
const STICK_DEADZONE: f32 = 0.1;

fn keyboard_axis(keys: &ButtonInput<KeyCode>) -> Vec2 {
    let mut axis = Vec2::ZERO;

    if keys.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]) {
        axis.y += 1.0;
    }
    if keys.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]) {
        axis.y -= 1.0;
    }
    if keys.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        axis.x -= 1.0;
    }
    if keys.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        axis.x += 1.0;
    }

    axis
}

/// Клавиатура + геймпады → MoveAction / JumpAction
pub fn emit_player_actions(
    keys: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    player_query: Query<Entity, With<Player>>,
    mut last_axis: Local<Vec2>,
    mut move_events: EventWriter<MoveAction>,
    mut jump_events: EventWriter<JumpAction>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };

    let mut axis = keyboard_axis(&keys);
    let mut jump = keys.just_pressed(KeyCode::Space);

    for gamepad in gamepads.iter() {
        let stick = gamepad.left_stick();
        if stick.length() > STICK_DEADZONE {
            axis += stick;
        }
        jump |= gamepad.just_pressed(GamepadButton::South);
    }

    let axis = axis.clamp(Vec2::NEG_ONE, Vec2::ONE);
    if axis != *last_axis {
        if axis == Vec2::ZERO {
            move_events.write(MoveAction::Canceled { entity: player });
        } else {
            move_events.write(MoveAction::Performed {
                entity: player,
                axis,
            });
        }
        *last_axis = axis;
    }

    if jump {
        jump_events.write(JumpAction { entity: player });
    }
}

/// Q/E (или правый стик) поворачивают персонажа вокруг Y
pub fn turn_player(
    keys: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    time: Res<Time>,
    mut player_query: Query<&mut Transform, With<Player>>,
) {
    let Ok(mut transform) = player_query.single_mut() else {
        return;
    };

    let mut turn = 0.0;
    if keys.pressed(KeyCode::KeyQ) {
        turn += 1.0;
    }
    if keys.pressed(KeyCode::KeyE) {
        turn -= 1.0;
    }
    for gamepad in gamepads.iter() {
        let stick = gamepad.right_stick();
        if stick.x.abs() > STICK_DEADZONE {
            turn -= stick.x;
        }
    }

    if turn != 0.0 {
        transform.rotate_y(turn * TURN_SPEED * time.delta_secs());
    }
}
