//! Animation parameters
//!
//! Motor пушит параметры каждый frame, client (или любой другой потребитель)
//! читает их и двигает animation graph. Сам graph — забота движка.

use bevy::prelude::*;

use crate::motor::MotorReport;

/// Имя float параметра планарной скорости
pub const SPEED_PARAM: &str = "Speed";
/// Имя bool параметра grounded
pub const GROUNDED_PARAM: &str = "IsGrounded";
/// Имя trigger'а прыжка
pub const JUMP_TRIGGER: &str = "Jump";

/// Параметры animator'а персонажа
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AnimatorParameters {
    /// Планарная скорость (0 если ≤ 0.01)
    pub speed: f32,
    pub is_grounded: bool,
    /// Trigger: true ровно один frame после старта прыжка
    pub jump_triggered: bool,
}

impl AnimatorParameters {
    pub fn push(&mut self, report: &MotorReport) {
        self.speed = report.planar_speed;
        self.is_grounded = report.grounded;
        self.jump_triggered = report.jumped;
    }

    /// Float параметр по имени
    pub fn float(&self, name: &str) -> Option<f32> {
        (name == SPEED_PARAM).then_some(self.speed)
    }

    /// Bool параметр (или trigger) по имени
    pub fn flag(&self, name: &str) -> Option<bool> {
        match name {
            GROUNDED_PARAM => Some(self.is_grounded),
            JUMP_TRIGGER => Some(self.jump_triggered),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec3;

    #[test]
    fn test_push_copies_report() {
        let mut params = AnimatorParameters::default();
        params.push(&MotorReport {
            grounded: true,
            jumped: true,
            displacement: Vec3::ZERO,
            planar_speed: 4.0,
        });

        assert_eq!(params.float(SPEED_PARAM), Some(4.0));
        assert_eq!(params.flag(GROUNDED_PARAM), Some(true));
        assert_eq!(params.flag(JUMP_TRIGGER), Some(true));
        assert_eq!(params.flag("Crouch"), None);
    }
}
