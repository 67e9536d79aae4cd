use crate::models::countdown::Deadline;
use crate::models::settings::SiteSettings;
use crate::utils::date::{date_badge, Clock, DateBadge, SystemClock};

/// Read-only inputs shared by the app modules: settings, the wall clock
/// and values derived once from the deadline.
pub struct AppContext {
    settings: SiteSettings,
    clock: Box<dyn Clock>,
    date_badge: DateBadge,
}

impl AppContext {
    pub fn new(settings: SiteSettings, deadline: &Deadline) -> Self {
        Self::with_clock(settings, deadline, Box::new(SystemClock))
    }

    pub fn with_clock(settings: SiteSettings, deadline: &Deadline, clock: Box<dyn Clock>) -> Self {
        Self {
            date_badge: date_badge(&deadline.local()),
            settings,
            clock,
        }
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn date_badge(&self) -> &DateBadge {
        &self.date_badge
    }
}
