use bevy::prelude::Entity;
use std::fmt;

/// Ошибки настройки motor'а
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorError {
    /// У entity с CharacterMotor нет ни FlatGroundBody, ни KinematicCharacterController
    MissingCharacterBody { entity: Entity },
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::MissingCharacterBody { entity } => write!(
                f,
                "Character body is missing on {:?}! Add FlatGroundBody or KinematicCharacterController to the player.",
                entity
            ),
        }
    }
}

impl std::error::Error for MotorError {}
