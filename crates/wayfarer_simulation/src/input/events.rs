//! Logical input actions
//!
//! Источник не важен: client пишет их из клавиатуры/геймпада,
//! headless симуляция — из scripted input.

use bevy::prelude::*;

/// Move action (2D axis)
///
/// - `Performed`: axis изменилась (значение НЕ нормализуется)
/// - `Canceled`: input отпущен → axis = ZERO
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum MoveAction {
    Performed { entity: Entity, axis: Vec2 },
    Canceled { entity: Entity },
}

impl MoveAction {
    pub fn entity(&self) -> Entity {
        match self {
            MoveAction::Performed { entity, .. } | MoveAction::Canceled { entity } => *entity,
        }
    }

    /// Значение axis после применения action
    pub fn axis(&self) -> Vec2 {
        match self {
            MoveAction::Performed { axis, .. } => *axis,
            MoveAction::Canceled { .. } => Vec2::ZERO,
        }
    }
}

/// Jump action (edge trigger, just_pressed)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpAction {
    pub entity: Entity,
}
