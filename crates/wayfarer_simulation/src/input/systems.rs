//! Input binding systems (ECS)

use bevy::prelude::*;

use super::events::{JumpAction, MoveAction};
use crate::motor::{CharacterMotor, MotorDisabled};

/// Текущее состояние input'а персонажа
///
/// - `axis`: последнее значение MoveAction (держится между frames)
/// - `jump_requested`: latch, сбрасывается motor'ом после каждого step (кроме frame с dt = 0)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MoveAxis {
    pub axis: Vec2,
    pub jump_requested: bool,
}

/// MoveAction / JumpAction → MoveAxis
///
/// Отключённые motors (MotorDisabled) input не получают.
pub fn bind_input_actions(
    mut move_events: EventReader<MoveAction>,
    mut jump_events: EventReader<JumpAction>,
    mut inputs: Query<&mut MoveAxis, (With<CharacterMotor>, Without<MotorDisabled>)>,
) {
    for action in move_events.read() {
        let Ok(mut input) = inputs.get_mut(action.entity()) else {
            continue;
        };
        input.axis = action.axis();
    }

    for action in jump_events.read() {
        let Ok(mut input) = inputs.get_mut(action.entity) else {
            continue;
        };
        input.jump_requested = true;
    }
}

/// Отключение motor'а отпускает input
///
/// Всё, что было зажато в момент MotorDisabled, сбрасывается (axis = ZERO,
/// jump latch снят). После снятия marker'а персонаж стоит, пока не придёт
/// новый MoveAction.
pub fn release_disabled_input(mut inputs: Query<&mut MoveAxis, Added<MotorDisabled>>) {
    for mut input in inputs.iter_mut() {
        *input = MoveAxis::default();
    }
}
