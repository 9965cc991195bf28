//! Motor компоненты

use bevy::prelude::*;

use crate::animation::AnimatorParameters;
use crate::input::MoveAxis;

/// Персонаж, которым двигает motor
///
/// Автоматически добавляет MotorVelocity, MoveAxis и AnimatorParameters
/// через Required Components. Physics body (FlatGroundBody или Rapier
/// KinematicCharacterController) добавляется отдельно — без него motor
/// отключается навсегда.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(MotorVelocity, MoveAxis, AnimatorParameters)]
pub struct CharacterMotor {
    /// grounded из последнего frame (для логирования переходов)
    pub grounded: bool,
}

/// Velocity персонажа: x — lateral, y — vertical (gravity), z — forward
///
/// Живёт между frames (gravity накапливается в y).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MotorVelocity(pub Vec3);

/// Marker: motor отключён
///
/// Ставится навсегда, если при старте нет physics body. Можно ставить и
/// снимать вручную: при постановке MoveAxis сбрасывается (release_disabled_input),
/// пока marker стоит — input и step игнорируются (`Without<MotorDisabled>`).
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct MotorDisabled;
