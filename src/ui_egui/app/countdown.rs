use std::time::Instant;

use super::HackathonApp;
use crate::services::site::SiteEvent;
use crate::utils::date::Clock;

impl HackathonApp {
    /// Polls the refresh driver; a due tick samples the wall clock once.
    pub(super) fn refresh_countdown(&mut self, at: Instant) {
        let now = self.context.clock().now();
        let before = self.state.countdown().remaining();

        self.dispatch(SiteEvent::Frame { at, now });

        let after = self.state.countdown().remaining();
        if before != after {
            log::trace!(
                "Countdown {}d {}h {}m {}s",
                after.days,
                after.hours,
                after.minutes,
                after.seconds
            );
        }
    }

    /// Sleeps the frame loop until the next tick is due.
    pub(super) fn schedule_repaint(&self, ctx: &egui::Context, at: Instant) {
        if let Some(wait) = self.state.driver().time_until_next(at) {
            ctx.request_repaint_after(wait);
        }
    }
}
