//! Motor systems (ECS)
//!
//! Порядок внутри frame (MotorSet, chained):
//! 1. Input — bind_input_actions
//! 2. Validate — validate_character_bodies (только что добавленные motors)
//! 3. Step — drive_flat_ground_motors / drive_rapier_motors
//!
//! Все системы в Update: один step на rendered frame, dt = Time::delta_secs().

use bevy::prelude::*;
use bevy_rapier3d::prelude::{KinematicCharacterController, KinematicCharacterControllerOutput};

use super::components::{CharacterMotor, MotorDisabled, MotorVelocity};
use super::error::MotorError;
use super::step::{step_motor, MotorFrame, MotorReport};
use crate::animation::AnimatorParameters;
use crate::config::MovementConfig;
use crate::input::MoveAxis;
use crate::logger;
use crate::physics::{FlatGroundBody, FlatGroundMover, RapierMover};

/// Порядок систем motor'а внутри Update
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotorSet {
    Input,
    Validate,
    Step,
}

/// Проверка physics body у новых motors
///
/// Нет ни FlatGroundBody, ни KinematicCharacterController → ERROR в лог
/// и MotorDisabled навсегда (добавление body позже не включает motor).
pub fn validate_character_bodies(
    mut commands: Commands,
    new_motors: Query<
        (Entity, Has<FlatGroundBody>, Has<KinematicCharacterController>),
        Added<CharacterMotor>,
    >,
) {
    for (entity, has_flat_ground, has_rapier) in new_motors.iter() {
        if let Err(error) = require_character_body(entity, has_flat_ground, has_rapier) {
            logger::log_error(&error.to_string());
            commands.entity(entity).insert(MotorDisabled);
        }
    }
}

fn require_character_body(
    entity: Entity,
    has_flat_ground: bool,
    has_rapier: bool,
) -> Result<(), MotorError> {
    if has_flat_ground || has_rapier {
        Ok(())
    } else {
        Err(MotorError::MissingCharacterBody { entity })
    }
}

/// Motor поверх headless пола (без Rapier)
pub fn drive_flat_ground_motors(
    time: Res<Time>,
    defaults: Res<MovementConfig>,
    mut query: Query<
        (
            Entity,
            &mut CharacterMotor,
            &mut MotorVelocity,
            &mut MoveAxis,
            &mut AnimatorParameters,
            &FlatGroundBody,
            &mut Transform,
            Option<&MovementConfig>,
        ),
        (Without<MotorDisabled>, Without<KinematicCharacterController>),
    >,
) {
    let delta = time.delta_secs();

    for (entity, mut motor, mut velocity, mut input, mut animator, body, mut transform, config) in
        query.iter_mut()
    {
        let frame = MotorFrame::from_transform(&transform, input.axis, input.jump_requested, delta);
        let mut mover = FlatGroundMover {
            body,
            transform: &mut *transform,
        };

        let report = step_motor(
            &mut velocity.0,
            &frame,
            config.unwrap_or(&*defaults),
            &mut mover,
        );
        finish_frame(entity, &frame, &report, &mut motor, &mut input, &mut animator);
    }
}

/// Motor поверх Rapier KinematicCharacterController
pub fn drive_rapier_motors(
    time: Res<Time>,
    defaults: Res<MovementConfig>,
    mut query: Query<
        (
            Entity,
            &mut CharacterMotor,
            &mut MotorVelocity,
            &mut MoveAxis,
            &mut AnimatorParameters,
            &mut KinematicCharacterController,
            Option<&KinematicCharacterControllerOutput>,
            &Transform,
            Option<&MovementConfig>,
        ),
        Without<MotorDisabled>,
    >,
) {
    let delta = time.delta_secs();

    for (
        entity,
        mut motor,
        mut velocity,
        mut input,
        mut animator,
        mut controller,
        output,
        transform,
        config,
    ) in query.iter_mut()
    {
        let frame = MotorFrame::from_transform(transform, input.axis, input.jump_requested, delta);
        let mut mover = RapierMover::new(&mut *controller, output);

        let report = step_motor(
            &mut velocity.0,
            &frame,
            config.unwrap_or(&*defaults),
            &mut mover,
        );
        finish_frame(entity, &frame, &report, &mut motor, &mut input, &mut animator);
    }
}

/// Общий хвост frame: latch, animator, логирование переходов
fn finish_frame(
    entity: Entity,
    frame: &MotorFrame,
    report: &MotorReport,
    motor: &mut CharacterMotor,
    input: &mut MoveAxis,
    animator: &mut AnimatorParameters,
) {
    // Jump request живёт ровно один step (в воздухе просто теряется).
    // Frame с dt = 0 не считается: request ждёт следующего.
    input.jump_requested = frame.jump_requested && frame.delta == 0.0 && !report.jumped;

    animator.push(report);

    if report.jumped {
        logger::log(&format!("Entity {:?}: jump! displacement.y = {:.3}", entity, report.displacement.y));
    }

    if report.grounded != motor.grounded {
        let state = if report.grounded { "landed" } else { "airborne" };
        logger::log(&format!("Entity {:?}: {}", entity, state));
        motor.grounded = report.grounded;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_character_body() {
        let entity = Entity::from_raw(7);

        assert!(require_character_body(entity, true, false).is_ok());
        assert!(require_character_body(entity, false, true).is_ok());
        assert_eq!(
            require_character_body(entity, false, false),
            Err(MotorError::MissingCharacterBody { entity })
        );
    }
}
