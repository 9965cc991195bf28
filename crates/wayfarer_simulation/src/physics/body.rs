//! CharacterBody trait + headless реализация

use bevy::prelude::*;

/// Physics controller персонажа: grounded query + "move by delta" primitive
pub trait CharacterBody {
    /// Касается ли персонаж walkable поверхности
    fn is_grounded(&self) -> bool;

    /// Сдвинуть персонажа на `delta` (world space, метры)
    fn move_by(&mut self, delta: Vec3);
}

/// Headless тело: бесконечный пол на `floor_height`
///
/// Используется когда Rapier не подключен (headless симуляция, тесты).
/// Центр персонажа находится на `half_height` над ступнями.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct FlatGroundBody {
    /// Высота пола (world Y)
    pub floor_height: f32,
    /// Расстояние от центра до ступней
    pub half_height: f32,
    /// Допуск для grounded проверки (numerical errors)
    pub skin: f32,
}

impl Default for FlatGroundBody {
    fn default() -> Self {
        Self {
            floor_height: 0.0,
            half_height: 0.9, // capsule 1.8m
            skin: 0.01,
        }
    }
}

impl FlatGroundBody {
    /// Минимальная высота центра персонажа (стоит на полу)
    pub fn rest_height(&self) -> f32 {
        self.floor_height + self.half_height
    }
}

/// Адаптер: FlatGroundBody + Transform конкретного entity
pub struct FlatGroundMover<'a> {
    pub body: &'a FlatGroundBody,
    pub transform: &'a mut Transform,
}

impl CharacterBody for FlatGroundMover<'_> {
    fn is_grounded(&self) -> bool {
        self.transform.translation.y <= self.body.rest_height() + self.body.skin
    }

    fn move_by(&mut self, delta: Vec3) {
        let translation = &mut self.transform.translation;
        *translation += delta;

        // Пол не пропускает вниз
        let rest = self.body.rest_height();
        if translation.y < rest {
            translation.y = rest;
        }
    }
}
