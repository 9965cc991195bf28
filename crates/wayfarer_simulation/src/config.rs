//! Настройки motor'а персонажа
//!
//! MovementConfig живёт в двух местах:
//! - Resource: значения по умолчанию для всех персонажей
//! - Component: override для конкретного entity (имеет приоритет)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Tunables движения персонажа
#[derive(Component, Resource, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component, Resource)]
#[serde(default)]
pub struct MovementConfig {
    /// Скорость ходьбы (m/s)
    pub speed: f32,
    /// Вертикальная скорость в момент прыжка (m/s)
    pub jump_force: f32,
    /// Ускорение свободного падения (m/s², положительное)
    pub gravity: f32,
    /// Вертикальная скорость на земле без прыжка (держит контакт с полом)
    pub ground_bias: f32,
    /// Порог |axis|, ниже которого input считается нулевым
    pub input_deadzone: f32,
    /// Ограничение скорости падения (m/s, положительное). None = без ограничения
    pub terminal_velocity: Option<f32>,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: 5.0,
            jump_force: 7.0,
            gravity: 9.8,
            ground_bias: -0.5,
            input_deadzone: 0.01,
            terminal_velocity: None,
        }
    }
}

impl MovementConfig {
    pub fn with_terminal_velocity(mut self, limit: f32) -> Self {
        self.terminal_velocity = Some(limit.abs());
        self
    }
}
