use std::time::{Duration, Instant};

/// Debounce lock for wheel gestures. Holding the lock suppresses further
/// section changes until the cooldown has elapsed.
#[derive(Debug, Clone)]
pub struct ScrollGate {
    locked_at: Option<Instant>,
    cooldown: Duration,
}

impl ScrollGate {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            locked_at: None,
            cooldown,
        }
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    pub fn is_locked(&self, at: Instant) -> bool {
        self.locked_at
            .is_some_and(|locked_at| at.saturating_duration_since(locked_at) < self.cooldown)
    }

    /// Takes the lock at `at`. Returns false if it is still held.
    pub fn try_acquire(&mut self, at: Instant) -> bool {
        if self.is_locked(at) {
            return false;
        }
        self.locked_at = Some(at);
        true
    }

    /// Drops an expired lock so `locked_at` does not linger.
    pub fn release_if_expired(&mut self, at: Instant) {
        if self.locked_at.is_some() && !self.is_locked(at) {
            self.locked_at = None;
        }
    }

    pub fn remaining(&self, at: Instant) -> Option<Duration> {
        let locked_at = self.locked_at?;
        self.cooldown
            .checked_sub(at.saturating_duration_since(locked_at))
            .filter(|left| !left.is_zero())
    }
}
