use std::time::{Duration, Instant};

const LOGO_PHASE_END: Duration = Duration::from_millis(2000);
const TAGLINE_PHASE_END: Duration = Duration::from_millis(4500);
const INTRO_END: Duration = Duration::from_millis(6000);
const PROGRESS_DURATION: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPhase {
    Logo,
    Tagline,
    Settling,
    Complete,
}

/// Loading-screen sequence shown once when the site opens.
#[derive(Debug, Clone, Copy)]
pub struct IntroSequence {
    started_at: Instant,
    enabled: bool,
}

impl IntroSequence {
    pub fn new(started_at: Instant, enabled: bool) -> Self {
        Self {
            started_at,
            enabled,
        }
    }

    pub fn phase(&self, at: Instant) -> IntroPhase {
        if !self.enabled {
            return IntroPhase::Complete;
        }

        let elapsed = at.saturating_duration_since(self.started_at);
        if elapsed < LOGO_PHASE_END {
            IntroPhase::Logo
        } else if elapsed < TAGLINE_PHASE_END {
            IntroPhase::Tagline
        } else if elapsed < INTRO_END {
            IntroPhase::Settling
        } else {
            IntroPhase::Complete
        }
    }

    pub fn is_complete(&self, at: Instant) -> bool {
        self.phase(at) == IntroPhase::Complete
    }

    /// Loading bar fill in `0.0..=1.0`.
    pub fn progress(&self, at: Instant) -> f32 {
        if !self.enabled {
            return 1.0;
        }
        let elapsed = at.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / PROGRESS_DURATION.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Fraction of the current phase already shown, for fade-ins.
    pub fn phase_fraction(&self, at: Instant) -> f32 {
        let elapsed = at.saturating_duration_since(self.started_at);
        let (start, end) = match self.phase(at) {
            IntroPhase::Logo => (Duration::ZERO, LOGO_PHASE_END),
            IntroPhase::Tagline => (LOGO_PHASE_END, TAGLINE_PHASE_END),
            IntroPhase::Settling => (TAGLINE_PHASE_END, INTRO_END),
            IntroPhase::Complete => return 1.0,
        };
        let span = (end - start).as_secs_f32();
        (elapsed.saturating_sub(start).as_secs_f32() / span).clamp(0.0, 1.0)
    }
}
