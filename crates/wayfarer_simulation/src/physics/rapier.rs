//! Rapier kinematic character controller как CharacterBody
//!
//! Архитектура:
//! - Motor пишет `KinematicCharacterController::translation` (desired delta)
//! - Rapier двигает тело в PostUpdate с учётом коллизий
//! - `KinematicCharacterControllerOutput::grounded` читаем в следующем frame

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::motor::CharacterMotor;

/// Адаптер над компонентами Rapier одного entity
pub struct RapierMover<'a> {
    pub controller: &'a mut KinematicCharacterController,
    /// grounded из последнего physics step (output отсутствует до первого step)
    pub grounded: bool,
}

impl<'a> RapierMover<'a> {
    pub fn new(
        controller: &'a mut KinematicCharacterController,
        output: Option<&KinematicCharacterControllerOutput>,
    ) -> Self {
        Self {
            controller,
            grounded: output.map(|o| o.grounded).unwrap_or(false),
        }
    }
}

impl crate::physics::CharacterBody for RapierMover<'_> {
    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn move_by(&mut self, delta: Vec3) {
        // Один move за frame — перезаписываем, не накапливаем
        self.controller.translation = Some(delta);
    }
}

/// Spawn helper для персонажа с Rapier controller
///
/// Создает entity с полным набором компонентов:
/// - Transform
/// - CharacterMotor (+ required MotorVelocity, MoveAxis, AnimatorParameters)
/// - Rapier: RigidBody + Collider (capsule) + KinematicCharacterController
pub fn spawn_rapier_character(commands: &mut Commands, position: Vec3) -> Entity {
    commands
        .spawn((
            Transform::from_translation(position),
            CharacterMotor::default(),
            RigidBody::KinematicPositionBased,
            Collider::capsule_y(0.5, 0.4), // Высота 1.8m (0.5 + 0.5 + 2 * 0.4)
            KinematicCharacterController {
                snap_to_ground: Some(CharacterLength::Absolute(0.2)),
                ..default()
            },
        ))
        .id()
}
