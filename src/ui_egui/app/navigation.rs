use std::time::Instant;

use super::HackathonApp;
use crate::services::site::SiteEvent;

const SCROLL_ANIMATION_SECS: f32 = 0.6;

impl HackathonApp {
    /// Feeds this frame's wheel movement to the section navigator.
    pub(super) fn handle_wheel_input(&mut self, ctx: &egui::Context, at: Instant) {
        if !self.state.accepts_wheel(at) {
            return;
        }

        // egui reports positive y when content should move down; flip it so
        // positive means scrolling toward later sections
        let delta_y = -ctx.input(|i| i.raw_scroll_delta.y);
        if delta_y == 0.0 {
            return;
        }

        self.dispatch(SiteEvent::Wheel { delta_y, at });
    }

    /// Resolves any pending scroll request against the measured layout and
    /// returns the offset to render this frame.
    pub(super) fn animated_scroll_offset(&mut self, ctx: &egui::Context) -> f32 {
        self.apply_pending_scroll();
        ctx.animate_value_with_time(
            egui::Id::new("home_scroll_offset"),
            self.scroll_target,
            SCROLL_ANIMATION_SECS,
        )
    }

    fn apply_pending_scroll(&mut self) {
        let reset = self.state.scroll_to_top();
        let pending = self.state.pending_scroll();
        if !reset && pending.is_none() {
            return;
        }

        if reset {
            self.scroll_target = 0.0;
        }

        if let Some(request) = pending {
            match self.layout.top_of(request.section) {
                Some(top) => self.scroll_target = request.target_offset(top),
                // Not laid out yet; retry next frame
                None => return,
            }
        }

        self.dispatch(SiteEvent::ScrollApplied);
    }
}
