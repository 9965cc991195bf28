//! Тестовая сцена: пол, пара ступенек, игрок-капсула

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use wayfarer_simulation::{log_info, spawn_rapier_character, Player};

use crate::animation::PlayerVisual;
use crate::camera::FollowCamera;

pub fn spawn_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Пол 100x100
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(100.0, 100.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.3, 0.35, 0.3),
            ..default()
        })),
        Transform::default(),
        RigidBody::Fixed,
        Collider::cuboid(50.0, 0.01, 50.0),
    ));

    // Платформы для прыжков
    let step_mesh = meshes.add(Cuboid::new(2.0, 0.6, 2.0));
    let step_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.5, 0.45, 0.4),
        ..default()
    });
    for (i, height) in [0.3_f32, 0.9, 1.5].into_iter().enumerate() {
        commands.spawn((
            Mesh3d(step_mesh.clone()),
            MeshMaterial3d(step_material.clone()),
            Transform::from_xyz(4.0 + i as f32 * 2.5, height, -4.0),
            RigidBody::Fixed,
            Collider::cuboid(1.0, 0.3, 1.0),
        ));
    }

    // Игрок: motor + Rapier controller, визуал отдельным entity
    let player = spawn_rapier_character(&mut commands, Vec3::new(0.0, 1.0, 0.0));
    commands.entity(player).insert(Player);

    commands.spawn((
        PlayerVisual::new(player),
        Mesh3d(meshes.add(Capsule3d::new(0.4, 1.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.8, 0.55, 0.2),
            ..default()
        })),
        Transform::from_xyz(0.0, 1.0, 0.0),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 20.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        Camera3d::default(),
        FollowCamera::default(),
        Transform::from_xyz(0.0, 4.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    log_info("Scene ready: WASD/stick to move, Q/E to turn, Space/South to jump");
}
