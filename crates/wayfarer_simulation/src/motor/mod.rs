//! Character motor — per-frame движение игрока
//!
//! Содержит:
//! - step_motor (pure функция одного frame: input → velocity → move)
//! - CharacterMotor / MotorVelocity / MotorDisabled (компоненты)
//! - ECS системы для headless пола и Rapier controller'а
//! - MotorError (единственная ошибка: нет physics body)

pub mod components;
pub mod error;
pub mod step;
pub mod systems;


pub use components::*;
pub use error::MotorError;
pub use step::*;
pub use systems::*;
