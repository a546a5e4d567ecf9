mod controller;
mod state;
mod timer;

pub use controller::{Intent, SimulationController};
pub use state::{Mode, SimulationState, Snapshot};
pub use timer::{TickTimer, TimerHandle};
