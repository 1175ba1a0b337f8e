//! Arcade Snake - a fixed-timestep snake game with a headless engine
//!
//! This library provides:
//! - Core game logic with no I/O dependencies (game module)
//! - High score persistence behind a small store trait (score module)
//! - TUI rendering (render module)
//! - Keyboard input translation (input module)
//! - Interactive play mode wiring it all together (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod score;
