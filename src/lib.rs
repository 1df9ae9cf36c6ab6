//! UFAZ the Snake - a block-grid Snake game
//!
//! This library provides:
//! - Core game logic (game module)
//! - Keyboard translation and turn buffering (input module)
//! - Window rendering (render module)
//! - Session metrics and the game-over summary (metrics module)
//! - The game-loop driver (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
