//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering
//! dependencies. The engine is synchronous and driven entirely by its
//! caller, so it can run headlessly in tests or a non-graphical harness.

pub mod action;
pub mod config;
pub mod engine;
pub mod events;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::{Difficulty, GameConfig};
pub use engine::{GameEngine, TickResult};
pub use events::GameEvent;
pub use state::{CollisionType, GameState, Position, RoundState, Snake};
