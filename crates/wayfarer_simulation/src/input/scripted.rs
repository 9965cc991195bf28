//! Scripted input для headless прогонов
//!
//! Детерминированно (через DeterministicRng) генерирует MoveAction / JumpAction
//! для entities со ScriptedInput. Одинаковый seed → одинаковая траектория.

use bevy::prelude::*;
use rand::Rng;

use super::events::{JumpAction, MoveAction};
use crate::DeterministicRng;

/// "Бот" для headless симуляции
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ScriptedInput {
    /// Сколько frames держать axis перед сменой направления
    pub hold_frames: u32,
    /// Вероятность прыжка на каждой смене направления
    pub jump_chance: f64,
    pub frames_left: u32,
}

impl Default for ScriptedInput {
    fn default() -> Self {
        Self {
            hold_frames: 30,
            jump_chance: 0.25,
            frames_left: 0,
        }
    }
}

pub fn drive_scripted_input(
    mut rng: ResMut<DeterministicRng>,
    mut bots: Query<(Entity, &mut ScriptedInput)>,
    mut move_events: EventWriter<MoveAction>,
    mut jump_events: EventWriter<JumpAction>,
) {
    for (entity, mut script) in bots.iter_mut() {
        if script.frames_left > 0 {
            script.frames_left -= 1;
            continue;
        }
        script.frames_left = script.hold_frames;

        // Каждая пятая смена — отпускаем стик
        if rng.rng.gen_ratio(1, 5) {
            move_events.write(MoveAction::Canceled { entity });
        } else {
            let axis = Vec2::new(rng.rng.gen_range(-1.0..=1.0), rng.rng.gen_range(-1.0..=1.0));
            move_events.write(MoveAction::Performed { entity, axis });
        }

        if rng.rng.gen_bool(script.jump_chance) {
            jump_events.write(JumpAction { entity });
        }
    }
}
