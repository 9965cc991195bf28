//! Player control marker + spawn helpers

use bevy::prelude::*;

use crate::motor::CharacterMotor;
use crate::physics::FlatGroundBody;

/// Marker component для player-controlled entity
///
/// Client input systems используют `With<Player>` filter, чтобы найти,
/// куда адресовать MoveAction / JumpAction.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Player;

/// Spawn helper для headless игрока на плоском полу
///
/// Персонаж ставится ступнями на пол (grounded с первого frame).
pub fn spawn_headless_player(world: &mut World, position: Vec3) -> Entity {
    let body = FlatGroundBody {
        floor_height: position.y,
        ..default()
    };

    world
        .spawn((
            Player,
            CharacterMotor::default(),
            Transform::from_xyz(position.x, body.rest_height(), position.z),
            body,
        ))
        .id()
}
