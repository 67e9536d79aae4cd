use chrono::{DateTime, Utc};

use crate::models::countdown::{Deadline, RemainingTime};

/// Holds the published countdown value for the hero section.
#[derive(Debug, Clone)]
pub struct CountdownService {
    deadline: Deadline,
    remaining: RemainingTime,
    refreshes: u64,
    expired: bool,
}

impl CountdownService {
    pub fn new(deadline: Deadline) -> Self {
        Self {
            deadline,
            remaining: RemainingTime::ZERO,
            refreshes: 0,
            expired: false,
        }
    }

    pub fn deadline(&self) -> &Deadline {
        &self.deadline
    }

    pub fn remaining(&self) -> RemainingTime {
        self.remaining
    }

    /// Number of ticks applied so far.
    pub fn refreshes(&self) -> u64 {
        self.refreshes
    }

    pub fn has_expired(&self) -> bool {
        self.expired
    }

    /// Recomputes the remaining time from a fresh wall-clock sample.
    /// Returns true when the published value changed.
    pub fn refresh(&mut self, now: DateTime<Utc>) -> bool {
        let computed = self.deadline.remaining_at(now);
        self.refreshes += 1;

        if computed.is_zero() && !self.expired {
            self.expired = true;
            log::info!(
                "Countdown reached zero (deadline {})",
                self.deadline.local().format("%Y-%m-%d %H:%M:%S %Z")
            );
        }

        if computed == self.remaining {
            return false;
        }

        self.remaining = computed;
        true
    }
}
