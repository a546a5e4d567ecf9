use std::time::Duration;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{debug, info};

use super::{Mode, SimulationState, Snapshot, TickTimer, TimerHandle};
use crate::config::LifeConfig;
use crate::domain::{PatternId, assign_colors, seed, step, step_parallel};
use crate::error::{LifeError, LifeResult};

/// User intents the presentation layer forwards to the controller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Start,
    Pause,
    /// Start when idle, pause when running
    TogglePlay,
    /// Re-seed the active pattern
    Reset,
    SelectPattern(PatternId),
    SetSpeed(u32),
    /// Shift the tick interval by a signed number of milliseconds
    AdjustSpeed(i32),
    ToggleEdit,
    ToggleCell { row: isize, col: isize },
    /// Show or hide the front-end control panel
    ToggleControls,
}

/// SimulationController owns the simulation state and is the only place the
/// grid is mutated: automatically through ticks while running, or one cell at
/// a time while editing.
///
/// The tick cadence comes from outside. A frame loop calls [`advance`] with
/// elapsed time, or a timer callback calls [`fire`] with the handle it was
/// given. The schedule is armed on entering `Running` and dropped in the same
/// call that leaves it, so no tick lands after `pause`, `enter_edit` or
/// `select` returns.
///
/// [`advance`]: SimulationController::advance
/// [`fire`]: SimulationController::fire
pub struct SimulationController<R = SmallRng> {
    config: LifeConfig,
    state: SimulationState,
    rng: R,
    timer: Option<TickTimer>,
    timers_armed: u64,
}

impl SimulationController<SmallRng> {
    /// Build from config, seeding the rng from `rng_seed` or from entropy
    pub fn new(config: LifeConfig) -> LifeResult<Self> {
        let seed = config.rng_seed.unwrap_or_else(rand::random::<u64>);
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SimulationController<R> {
    /// Build with an explicit random source for pattern and color draws
    pub fn with_rng(config: LifeConfig, mut rng: R) -> LifeResult<Self> {
        config.validate()?;
        let speed = config.clamp_speed(config.initial_speed_ms);
        let state = Self::seeded_state(&config, config.initial_pattern, speed, &mut rng);
        info!(
            grid_size = config.grid_size,
            pattern = %config.initial_pattern,
            speed_ms = speed,
            "Simulation created"
        );

        Ok(Self {
            config,
            state,
            rng,
            timer: None,
            timers_armed: 0,
        })
    }

    fn seeded_state(
        config: &LifeConfig,
        pattern: PatternId,
        speed_ms: u32,
        rng: &mut R,
    ) -> SimulationState {
        let grid = seed(pattern, config.grid_size, rng);
        let colors = assign_colors(config.grid_size, rng);
        SimulationState {
            grid,
            colors,
            generation: 0,
            mode: Mode::Idle,
            tick_interval_ms: speed_ms,
            active_pattern: pattern,
            controls_visible: true,
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::from(&self.state)
    }

    pub const fn state(&self) -> &SimulationState {
        &self.state
    }

    pub const fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub const fn mode(&self) -> Mode {
        self.state.mode
    }

    pub const fn generation(&self) -> u64 {
        self.state.generation
    }

    /// Handle of the armed schedule, present only while running
    pub fn timer_handle(&self) -> Option<TimerHandle> {
        self.timer.as_ref().map(TickTimer::handle)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.state.tick_interval_ms))
    }

    /// Switch mode, arming a fresh schedule on entering `Running` and
    /// dropping it on leaving
    fn set_mode(&mut self, mode: Mode) {
        if mode == self.state.mode {
            return;
        }
        self.timer = if mode.is_running() {
            self.timers_armed += 1;
            Some(TickTimer::arm(self.timers_armed))
        } else {
            None
        };
        debug!(from = %self.state.mode, to = %mode, "Mode change");
        self.state.mode = mode;
    }

    /// Flip control panel visibility. Returns the new value.
    pub fn toggle_controls(&mut self) -> bool {
        self.state.controls_visible = !self.state.controls_visible;
        self.state.controls_visible
    }

    /// Idle → Running. Returns false (no-op) when running or editing.
    pub fn start(&mut self) -> bool {
        if self.state.mode != Mode::Idle {
            return false;
        }
        self.set_mode(Mode::Running);
        true
    }

    /// Running → Idle
    pub fn pause(&mut self) -> bool {
        if !self.state.mode.is_running() {
            return false;
        }
        self.set_mode(Mode::Idle);
        true
    }

    /// Play/pause toggle; does nothing while editing
    pub fn toggle_running(&mut self) -> bool {
        match self.state.mode {
            Mode::Idle => self.start(),
            Mode::Running => self.pause(),
            Mode::Editing => false,
        }
    }

    /// Idle or Running → Editing. Stops the schedule first.
    pub fn enter_edit(&mut self) -> bool {
        if self.state.mode.is_editing() {
            return false;
        }
        self.set_mode(Mode::Editing);
        true
    }

    /// Editing → Idle
    pub fn exit_edit(&mut self) -> bool {
        if !self.state.mode.is_editing() {
            return false;
        }
        self.set_mode(Mode::Idle);
        true
    }

    pub fn toggle_edit(&mut self) -> Mode {
        if !self.exit_edit() {
            self.enter_edit();
        }
        self.state.mode
    }

    /// One automatic generation step. Rejected unless running.
    pub fn tick(&mut self) -> LifeResult<u64> {
        if !self.state.mode.is_running() {
            return Err(LifeError::InvalidState {
                operation: "tick",
                mode: self.state.mode,
            });
        }

        let grid = &self.state.grid;
        self.state.grid = if grid.size() * grid.size() >= self.config.parallel_threshold {
            step_parallel(grid)
        } else {
            step(grid)
        };
        self.state.generation += 1;
        debug!(generation = self.state.generation, "Tick");
        Ok(self.state.generation)
    }

    /// Feed frame time to the armed schedule. Performs at most one tick and
    /// returns the new generation when it does.
    pub fn advance(&mut self, delta: Duration) -> Option<u64> {
        let interval = self.tick_interval();
        let due = self
            .timer
            .as_mut()
            .is_some_and(|timer| timer.advance(delta, interval));
        if due { self.tick().ok() } else { None }
    }

    /// Timer callback entry point. Handles from a cancelled schedule are
    /// rejected without touching the grid.
    pub fn fire(&mut self, handle: TimerHandle) -> LifeResult<u64> {
        match self.timer_handle() {
            Some(armed) if armed == handle => self.tick(),
            _ => Err(LifeError::StaleTimer(handle)),
        }
    }

    /// Flip one cell while editing. Returns its new liveness.
    pub fn toggle_cell(&mut self, row: isize, col: isize) -> LifeResult<bool> {
        if !self.state.mode.is_editing() {
            return Err(LifeError::InvalidState {
                operation: "toggle_cell",
                mode: self.state.mode,
            });
        }
        if !self.state.grid.contains(row, col) {
            return Err(LifeError::OutOfRangeCell {
                row,
                col,
                size: self.state.grid.size(),
            });
        }
        Ok(self.state.grid.toggle(row, col))
    }

    /// Seed a new simulation from a pattern id string
    pub fn select_pattern(&mut self, id: &str) -> LifeResult<()> {
        let pattern = id.parse::<PatternId>()?;
        self.select(pattern);
        Ok(())
    }

    /// Replace the whole simulation: fresh grid and colors, generation 0,
    /// Idle. The tick interval carries over.
    pub fn select(&mut self, pattern: PatternId) {
        self.set_mode(Mode::Idle);
        let speed = self.state.tick_interval_ms;
        let controls_visible = self.state.controls_visible;
        self.state = Self::seeded_state(&self.config, pattern, speed, &mut self.rng);
        self.state.controls_visible = controls_visible;
        info!(
            pattern = %pattern,
            population = self.state.grid.live_count(),
            "Seeded pattern"
        );
    }

    /// Re-seed the active pattern
    pub fn reset(&mut self) {
        self.select(self.state.active_pattern);
    }

    /// Set the tick interval, clamped to the configured range. Returns the
    /// effective value; it applies from the next scheduled tick.
    pub fn set_speed(&mut self, ms: u32) -> u32 {
        self.state.tick_interval_ms = self.config.clamp_speed(ms);
        debug!(speed_ms = self.state.tick_interval_ms, "Speed change");
        self.state.tick_interval_ms
    }

    pub fn adjust_speed(&mut self, delta_ms: i32) -> u32 {
        self.set_speed(self.state.tick_interval_ms.saturating_add_signed(delta_ms))
    }

    /// Dispatch one user intent
    pub fn apply(&mut self, intent: Intent) -> LifeResult<()> {
        match intent {
            Intent::Start => {
                self.start();
            }
            Intent::Pause => {
                self.pause();
            }
            Intent::TogglePlay => {
                self.toggle_running();
            }
            Intent::Reset => self.reset(),
            Intent::SelectPattern(pattern) => self.select(pattern),
            Intent::SetSpeed(ms) => {
                self.set_speed(ms);
            }
            Intent::AdjustSpeed(delta) => {
                self.adjust_speed(delta);
            }
            Intent::ToggleEdit => {
                self.toggle_edit();
            }
            Intent::ToggleCell { row, col } => {
                self.toggle_cell(row, col)?;
            }
            Intent::ToggleControls => {
                self.toggle_controls();
            }
        }
        Ok(())
    }
}
