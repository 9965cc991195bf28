//! AnimatorParameters → визуал игрока
//!
//! Настоящего animation graph нет: капсула наклоняется по Speed,
//! сплющивается на Jump trigger и подсвечивается в воздухе.

use bevy::prelude::*;
use wayfarer_simulation::animation::{GROUNDED_PARAM, JUMP_TRIGGER, SPEED_PARAM};
use wayfarer_simulation::AnimatorParameters;

/// Наклон вперёд на единицу скорости (рад на m/s)
const LEAN_PER_SPEED: f32 = 0.04;
/// Squash на старте прыжка
const JUMP_SQUASH: f32 = 0.7;
/// Скорость возврата scale к 1.0 (1/сек)
const SQUASH_RECOVERY: f32 = 8.0;

/// Визуал, повторяющий transform и параметры animator'а владельца
#[derive(Component, Debug, Clone, Copy)]
pub struct PlayerVisual {
    pub owner: Entity,
    pub was_grounded: bool,
}

impl PlayerVisual {
    pub fn new(owner: Entity) -> Self {
        Self {
            owner,
            was_grounded: true,
        }
    }
}

pub fn reflect_animator_parameters(
    time: Res<Time>,
    owners: Query<(&Transform, &AnimatorParameters), Without<PlayerVisual>>,
    mut visuals: Query<(
        &mut PlayerVisual,
        &mut Transform,
        &MeshMaterial3d<StandardMaterial>,
    )>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let recovery = (time.delta_secs() * SQUASH_RECOVERY).min(1.0);

    for (mut visual, mut transform, material) in visuals.iter_mut() {
        let Ok((owner_transform, params)) = owners.get(visual.owner) else {
            continue;
        };

        let speed = params.float(SPEED_PARAM).unwrap_or(0.0);
        let grounded = params.flag(GROUNDED_PARAM).unwrap_or(true);

        transform.translation = owner_transform.translation;
        transform.rotation = owner_transform.rotation * Quat::from_rotation_x(-speed * LEAN_PER_SPEED);

        if params.flag(JUMP_TRIGGER).unwrap_or(false) {
            transform.scale = Vec3::new(1.15, JUMP_SQUASH, 1.15);
        } else {
            transform.scale = transform.scale.lerp(Vec3::ONE, recovery);
        }

        if grounded != visual.was_grounded {
            if let Some(material) = materials.get_mut(&material.0) {
                material.emissive = if grounded {
                    LinearRgba::BLACK
                } else {
                    LinearRgba::rgb(0.4, 0.2, 0.0)
                };
            }
            visual.was_grounded = grounded;
        }
    }
}
