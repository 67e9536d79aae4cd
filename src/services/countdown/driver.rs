use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running { next_due: Instant },
    Stopped,
}

/// Repeating one-shot-per-period tick source for the countdown.
///
/// Lifecycle is `Idle -> Running -> Stopped`; a stopped driver never
/// restarts. Ticks are sampled, not counted: after a long pause only one
/// tick is due and the schedule resumes from that sample.
#[derive(Debug, Clone)]
pub struct RefreshDriver {
    state: DriverState,
    period: Duration,
    ticks: u64,
}

impl RefreshDriver {
    pub fn new(period: Duration) -> Self {
        Self {
            state: DriverState::Idle,
            period,
            ticks: 0,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, DriverState::Running { .. })
    }

    /// Mount: the first tick is due immediately.
    pub fn start(&mut self, at: Instant) -> bool {
        match self.state {
            DriverState::Idle => {
                self.state = DriverState::Running { next_due: at };
                log::debug!("Refresh driver started (period {:?})", self.period);
                true
            }
            other => {
                log::debug!("Ignoring start request in state {:?}", other);
                false
            }
        }
    }

    /// Unmount. Only a running driver can stop.
    pub fn stop(&mut self) -> bool {
        match self.state {
            DriverState::Running { .. } => {
                self.state = DriverState::Stopped;
                log::debug!("Refresh driver stopped after {} tick(s)", self.ticks);
                true
            }
            other => {
                log::debug!("Ignoring stop request in state {:?}", other);
                false
            }
        }
    }

    /// Returns true when a tick is due at `at`, and schedules the next one.
    pub fn poll(&mut self, at: Instant) -> bool {
        let DriverState::Running { next_due } = self.state else {
            return false;
        };

        if at < next_due {
            return false;
        }

        self.ticks += 1;
        self.state = DriverState::Running {
            next_due: at + self.period,
        };
        true
    }

    /// How long the frame loop may sleep before the next tick, if running.
    pub fn time_until_next(&self, at: Instant) -> Option<Duration> {
        match self.state {
            DriverState::Running { next_due } => Some(next_due.saturating_duration_since(at)),
            _ => None,
        }
    }
}
