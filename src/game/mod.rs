//! Core simulation logic
//!
//! Everything in here is pure state-machine code with no I/O or rendering
//! dependencies: a [`GridModel`] holding the board state and a
//! [`SimulationEngine`] that advances it one tick at a time. The host event
//! loop and the renderer live elsewhere and only touch the public surface.

pub mod config;
pub mod engine;
pub mod heading;
pub mod model;

// Re-export commonly used types
pub use config::{ConfigError, GridConfig};
pub use engine::SimulationEngine;
pub use heading::Heading;
pub use model::{GridModel, Position};
