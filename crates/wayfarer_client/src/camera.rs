//! Камера за спиной игрока

use bevy::prelude::*;
use wayfarer_simulation::Player;

#[derive(Component, Debug, Clone, Copy)]
pub struct FollowCamera {
    /// Смещение в локальном пространстве игрока (+Z = за спиной)
    pub offset: Vec3,
    /// Скорость догоняния (1/сек)
    pub stiffness: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 3.0, 7.0),
            stiffness: 6.0,
        }
    }
}

pub fn follow_player(
    time: Res<Time>,
    player_query: Query<&Transform, (With<Player>, Without<FollowCamera>)>,
    mut camera_query: Query<(&FollowCamera, &mut Transform)>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };

    for (follow, mut transform) in camera_query.iter_mut() {
        let target = player.translation + player.rotation * follow.offset;
        let blend = (time.delta_secs() * follow.stiffness).min(1.0);
        transform.translation = transform.translation.lerp(target, blend);
        transform.look_at(player.translation + Vec3::Y, Vec3::Y);
    }
}
