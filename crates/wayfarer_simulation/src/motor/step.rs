//! Pure шаг motor'а
//!
//! Всё, что приходит от движка (input, orientation, dt, physics body),
//! передаётся аргументами. ECS системы только собирают аргументы и
//! раскладывают результат по компонентам.

use bevy::prelude::*;

use crate::config::MovementConfig;
use crate::physics::CharacterBody;

/// Вход одного frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorFrame {
    /// Axis input в [-1, 1]² (x — strafe, y — forward). НЕ нормализуется
    pub axis: Vec2,
    /// Был ли jump request с прошлого frame
    pub jump_requested: bool,
    /// Правый вектор персонажа (world space)
    pub right: Vec3,
    /// Forward вектор персонажа (world space)
    pub forward: Vec3,
    /// Длительность frame (секунды)
    pub delta: f32,
}

impl MotorFrame {
    /// Frame с orientation из Transform (Bevy: forward = -Z)
    pub fn from_transform(transform: &Transform, axis: Vec2, jump_requested: bool, delta: f32) -> Self {
        Self {
            axis,
            jump_requested,
            right: *transform.right(),
            forward: *transform.forward(),
            delta,
        }
    }
}

/// Результат одного frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorReport {
    /// grounded, которым пользовался этот frame (до move)
    pub grounded: bool,
    /// Прыжок стартовал в этом frame
    pub jumped: bool,
    /// Сдвиг, переданный в physics body
    pub displacement: Vec3,
    /// Модуль планарной скорости для animator'а (0 если ≤ 0.01)
    pub planar_speed: f32,
}

/// Порог планарной скорости для animator'а
pub const ANIMATION_SPEED_THRESHOLD: f32 = 0.01;

/// Планарная velocity (x, z) из axis input
///
/// Ниже deadzone — ровно ноль. Выше — axis проецируется на orientation,
/// вертикальная компонента проекции отбрасывается.
pub fn planar_velocity(axis: Vec2, right: Vec3, forward: Vec3, config: &MovementConfig) -> Vec2 {
    if axis.length() <= config.input_deadzone {
        return Vec2::ZERO;
    }

    let direction = right * axis.x + forward * axis.y;
    Vec2::new(direction.x * config.speed, direction.z * config.speed)
}

/// Вертикальная velocity: ground bias / jump / gravity
///
/// Возвращает новую y и флаг "прыжок стартовал".
/// При `delta == 0` прыжок не стартует: нулевой сдвиг не отрывает персонажа
/// от пола, и следующий frame перезаписал бы jump_force ground bias'ом.
pub fn vertical_velocity(
    current: f32,
    grounded: bool,
    jump_requested: bool,
    delta: f32,
    config: &MovementConfig,
) -> (f32, bool) {
    if grounded {
        if jump_requested && delta > 0.0 {
            (config.jump_force, true)
        } else {
            (config.ground_bias, false)
        }
    } else {
        let falling = current - config.gravity * delta;
        let clamped = match config.terminal_velocity {
            Some(limit) => falling.max(-limit),
            None => falling,
        };
        (clamped, false)
    }
}

/// Модуль планарной скорости для animator'а
pub fn animation_speed(velocity: Vec3) -> f32 {
    let magnitude = Vec3::new(velocity.x, 0.0, velocity.z).length();
    if magnitude > ANIMATION_SPEED_THRESHOLD {
        magnitude
    } else {
        0.0
    }
}

/// Один frame движения персонажа
///
/// 1. axis → velocity.x/z
/// 2. grounded → jump / ground bias, airborne → gravity
/// 3. body.move_by(velocity * dt)
pub fn step_motor<B: CharacterBody + ?Sized>(
    velocity: &mut Vec3,
    frame: &MotorFrame,
    config: &MovementConfig,
    body: &mut B,
) -> MotorReport {
    let planar = planar_velocity(frame.axis, frame.right, frame.forward, config);
    velocity.x = planar.x;
    velocity.z = planar.y;

    let grounded = body.is_grounded();
    let (vertical, jumped) =
        vertical_velocity(velocity.y, grounded, frame.jump_requested, frame.delta, config);
    velocity.y = vertical;

    let displacement = *velocity * frame.delta;
    body.move_by(displacement);

    MotorReport {
        grounded,
        jumped,
        displacement,
        planar_speed: animation_speed(*velocity),
    }
}
