use std::time::Duration;

/// Identifies one armed schedule. A new handle is issued every time the
/// simulation starts running, so callbacks from an older schedule can be
/// told apart and dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Frame-driven tick cadence for one armed schedule.
#[derive(Debug)]
pub struct TickTimer {
    handle: TimerHandle,
    elapsed: Duration,
}

impl TickTimer {
    pub(crate) const fn arm(id: u64) -> Self {
        Self {
            handle: TimerHandle(id),
            elapsed: Duration::ZERO,
        }
    }

    pub const fn handle(&self) -> TimerHandle {
        self.handle
    }

    /// Time accumulated toward the next tick
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Accumulate frame time. Returns true once `interval` has passed and
    /// restarts the count, so at most one tick is due per call.
    pub fn advance(&mut self, delta: Duration, interval: Duration) -> bool {
        self.elapsed += delta;
        if self.elapsed >= interval {
            self.elapsed = Duration::ZERO;
            true
        } else {
            false
        }
    }
}
