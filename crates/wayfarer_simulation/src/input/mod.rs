//! Input binding
//!
//! # Архитектура
//!
//! ```text
//! Device input (keyboard / gamepad / scripted)
//!     ↓
//! MoveAction / JumpAction (ECS events) - events.rs
//!     ↓
//! bind_input_actions (ECS system) - systems.rs
//!     ↓
//! MoveAxis (component, читается motor'ом)
//! ```

pub mod events;
pub mod scripted;
pub mod systems;

pub use events::*;
pub use scripted::*;
pub use systems::*;
