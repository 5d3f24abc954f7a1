//! # Tilecaster
//!
//! A real-time raycasting renderer over a fixed grid of axis-aligned tiles.
//!
//! ## Architecture Overview
//!
//! Every frame flows through the same strictly sequential pipeline:
//!
//! - **Input**: held keys are reduced to walk/turn intents
//! - **Movement**: the player pose is integrated against the grid
//! - **Ray Casting**: one ray per screen strip walks the grid lines
//! - **Projection**: ray distances become textured wall strips
//! - **Overlay**: a minimap of grid, rays and player is drawn on top
//!
//! The core (`game`, `rendering::raycaster`, `rendering::projection`) is pure
//! and has no window dependency. Only `rendering::display`, `rendering::ui`
//! and `input` talk to macroquad.

pub mod config;
pub mod game;
pub mod input;
pub mod rendering;
pub mod utils;

// Core module re-exports
pub use game::*;
pub use input::*;
pub use rendering::*;
pub use utils::*;

pub use config::RaycasterConfig;

/// Core error type for the Tilecaster engine.
#[derive(thiserror::Error, Debug)]
pub enum TilecasterError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Static configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Grid contents violate the closed-border invariant or are malformed
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),
}

/// Result type used throughout the Tilecaster codebase.
pub type TilecasterResult<T> = Result<T, TilecasterError>;

/// Version information for the renderer.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
