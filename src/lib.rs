//! Grid Snake - a discrete-tick snake simulation with a terminal UI
//!
//! This library provides:
//! - Core simulation logic (game module): grid model, tick engine,
//!   heading arbitration, food placement
//! - Keyboard input mapping (input module)
//! - TUI rendering (render module)
//! - Session metrics (metrics module)
//! - The interactive play mode (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
