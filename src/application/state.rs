use std::fmt;

use crate::domain::{ColorMap, GridBuffer, PatternId};

/// Controller mode. Running and editing are distinct variants, so the
/// simulation can never tick while cells are being edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Running,
    Editing,
}

impl Mode {
    pub const fn is_running(self) -> bool {
        matches!(self, Mode::Running)
    }

    pub const fn is_editing(self) -> bool {
        matches!(self, Mode::Editing)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Idle => "idle",
            Mode::Running => "running",
            Mode::Editing => "editing",
        })
    }
}

/// Everything the controller owns about the current simulation.
/// Replaced wholesale when a pattern is (re)seeded.
#[derive(Clone, Debug)]
pub struct SimulationState {
    pub grid: GridBuffer,
    pub colors: ColorMap,
    /// Automatic steps since the grid was seeded
    pub generation: u64,
    pub mode: Mode,
    pub tick_interval_ms: u32,
    pub active_pattern: PatternId,
    /// Whether the front-end shows its control panel
    pub controls_visible: bool,
}

/// Read-only view handed to the presentation layer
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub grid: &'a GridBuffer,
    pub colors: &'a ColorMap,
    pub generation: u64,
    pub running: bool,
    pub edit_mode: bool,
    pub speed_ms: u32,
    pub active_pattern: PatternId,
    pub controls_visible: bool,
}

impl Snapshot<'_> {
    /// Number of live cells in the published grid
    pub fn population(&self) -> usize {
        self.grid.live_count()
    }
}

impl<'a> From<&'a SimulationState> for Snapshot<'a> {
    fn from(state: &'a SimulationState) -> Self {
        Self {
            grid: &state.grid,
            colors: &state.colors,
            generation: state.generation,
            running: state.mode.is_running(),
            edit_mode: state.mode.is_editing(),
            speed_ms: state.tick_interval_ms,
            active_pattern: state.active_pattern,
            controls_visible: state.controls_visible,
        }
    }
}
