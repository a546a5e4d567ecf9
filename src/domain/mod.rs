mod cell;
mod color;
mod grid;
mod patterns;
mod transition;

pub use cell::Cell;
pub use color::{ColorMap, Hsl, Rgb, assign_colors, NEON_LIGHTNESS, NEON_SATURATION};
pub use grid::GridBuffer;
pub use patterns::{Anchor, Pattern, PatternId, RANDOM_DENSITY, presets, seed, seed_named};
pub use transition::{neighbor_count, step, step_parallel};
