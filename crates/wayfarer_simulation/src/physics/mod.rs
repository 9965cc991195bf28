//! Physics seam для motor'а
//!
//! Motor не знает, кто двигает тело. Он видит только `CharacterBody`:
//! - `FlatGroundBody` — headless пол на фиксированной высоте (тесты, симуляция)
//! - Rapier `KinematicCharacterController` — реальные коллизии в client

pub mod body;
pub mod rapier;

pub use body::{CharacterBody, FlatGroundBody, FlatGroundMover};
pub use rapier::{spawn_rapier_character, RapierMover};
