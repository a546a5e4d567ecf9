// Domain layer - grid, patterns, transition rule, colors
pub mod domain;

// Application layer - simulation state machine and tick cadence
pub mod application;

pub mod config;
pub mod error;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, ColorMap, GridBuffer, PatternId, assign_colors, seed, seed_named, step};
pub use application::{Intent, Mode, SimulationController, Snapshot};
pub use config::LifeConfig;
pub use error::{LifeError, LifeResult};
