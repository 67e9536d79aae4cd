// Page-level state for the hackathon site
// One value per frame; the shell swaps in whatever `update` returns

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::models::section::SectionId;
use crate::models::settings::{SettingsError, SiteSettings};
use crate::services::countdown::{CountdownService, RefreshDriver};
use crate::services::intro::IntroSequence;
use crate::services::navigation::{ScrollRequest, SectionNavigator, WheelOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    ProblemStatements,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SiteEvent {
    /// Once per rendered frame: polls the refresh driver.
    Frame { at: Instant, now: DateTime<Utc> },
    /// Wheel delta in page direction (positive scrolls down).
    Wheel { delta_y: f32, at: Instant },
    NavigateTo(SectionId),
    NavigateToAnchor(String),
    ShowView { view: View, at: Instant },
    /// The shell has moved the viewport for the pending request.
    ScrollApplied,
    Teardown,
}

#[derive(Debug, Clone)]
pub struct SiteState {
    view: View,
    intro: IntroSequence,
    countdown: CountdownService,
    navigator: SectionNavigator,
    driver: RefreshDriver,
    pending_scroll: Option<ScrollRequest>,
    scroll_to_top: bool,
    tick_interval: Duration,
}

impl SiteState {
    /// Mounts the home view at `at`: intro starts and the first tick is due.
    pub fn new(settings: &SiteSettings, at: Instant) -> Result<Self, SettingsError> {
        let deadline = settings.deadline()?;
        let navigator = SectionNavigator::new(
            settings.section_list()?,
            settings.wheel_threshold,
            settings.scroll_cooldown(),
            settings.header_height,
        );

        let tick_interval = settings.tick_interval();
        let mut driver = RefreshDriver::new(tick_interval);
        driver.start(at);

        Ok(Self {
            view: View::Home,
            intro: IntroSequence::new(at, settings.intro_enabled),
            countdown: CountdownService::new(deadline),
            navigator,
            driver,
            pending_scroll: None,
            scroll_to_top: false,
            tick_interval,
        })
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn intro(&self) -> &IntroSequence {
        &self.intro
    }

    pub fn countdown(&self) -> &CountdownService {
        &self.countdown
    }

    pub fn navigator(&self) -> &SectionNavigator {
        &self.navigator
    }

    pub fn driver(&self) -> &RefreshDriver {
        &self.driver
    }

    pub fn current_section(&self) -> SectionId {
        self.navigator.current()
    }

    pub fn pending_scroll(&self) -> Option<ScrollRequest> {
        self.pending_scroll
    }

    /// Set after a view switch; the shell should jump to offset zero.
    pub fn scroll_to_top(&self) -> bool {
        self.scroll_to_top
    }

    /// Wheel input only counts on the home view once the intro is done.
    pub fn accepts_wheel(&self, at: Instant) -> bool {
        self.view == View::Home && self.intro.is_complete(at)
    }

    pub fn update(&self, event: SiteEvent) -> SiteState {
        let mut next = self.clone();

        match event {
            SiteEvent::Frame { at, now } => {
                if next.driver.poll(at) {
                    next.countdown.refresh(now);
                }
            }
            SiteEvent::Wheel { delta_y, at } => {
                if !next.accepts_wheel(at) {
                    return next;
                }
                match next.navigator.handle_wheel(delta_y, at) {
                    WheelOutcome::Moved(request) => next.pending_scroll = Some(request),
                    WheelOutcome::AtBoundary => {
                        log::debug!("Wheel at boundary section {}", next.current_section())
                    }
                    WheelOutcome::Suppressed | WheelOutcome::BelowThreshold => {}
                }
            }
            SiteEvent::NavigateTo(section) => {
                if next.view != View::Home {
                    return next;
                }
                match next.navigator.scroll_to_section(section) {
                    Ok(request) => next.pending_scroll = Some(request),
                    Err(err) => log::warn!("Navigation ignored: {}", err),
                }
            }
            SiteEvent::NavigateToAnchor(anchor) => {
                if next.view != View::Home {
                    return next;
                }
                match next.navigator.scroll_to_anchor(&anchor) {
                    Ok(request) => next.pending_scroll = Some(request),
                    Err(err) => log::warn!("Navigation ignored: {}", err),
                }
            }
            SiteEvent::ShowView { view, at } => next.switch_view(view, at),
            SiteEvent::ScrollApplied => {
                next.pending_scroll = None;
                next.scroll_to_top = false;
            }
            SiteEvent::Teardown => {
                next.driver.stop();
                next.pending_scroll = None;
            }
        }

        next
    }

    fn switch_view(&mut self, view: View, at: Instant) {
        if view == self.view {
            return;
        }
        log::info!("Switching view: {:?} -> {:?}", self.view, view);

        match view {
            View::ProblemStatements => {
                self.driver.stop();
            }
            View::Home => {
                // Remount: fresh driver, first section, intro not replayed
                self.navigator.reset();
                self.driver = RefreshDriver::new(self.tick_interval);
                self.driver.start(at);
            }
        }

        self.view = view;
        self.pending_scroll = None;
        self.scroll_to_top = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::countdown::DriverState;
    use crate::utils::date::{Clock, MockClock};
    use chrono::TimeZone;

    fn settings() -> SiteSettings {
        SiteSettings {
            intro_enabled: false,
            ..SiteSettings::default()
        }
    }

    fn utc(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 28, h, m, s).unwrap()
    }

    #[test]
    fn first_frame_ticks_immediately() {
        let t0 = Instant::now();
        let state = SiteState::new(&settings(), t0).unwrap();
        assert_eq!(state.countdown().refreshes(), 0);

        let mut clock = MockClock::new();
        clock.expect_now().times(1).return_const(utc(0, 0, 0));

        let state = state.update(SiteEvent::Frame {
            at: t0,
            now: clock.now(),
        });
        assert_eq!(state.countdown().refreshes(), 1);
        // 2025-03-29 06:30 UTC is the deadline
        assert_eq!(state.countdown().remaining().days, 1);
        assert_eq!(state.countdown().remaining().hours, 6);
        assert_eq!(state.countdown().remaining().minutes, 30);
    }

    #[test]
    fn update_leaves_previous_state_untouched() {
        let t0 = Instant::now();
        let before = SiteState::new(&settings(), t0).unwrap();
        let after = before.update(SiteEvent::Wheel {
            delta_y: 120.0,
            at: t0,
        });

        assert_eq!(before.current_section(), SectionId::Home);
        assert_eq!(after.current_section(), SectionId::About);
        assert_eq!(after.pending_scroll().map(|r| r.section), Some(SectionId::About));
    }

    #[test]
    fn wheel_ignored_during_intro() {
        let t0 = Instant::now();
        let with_intro = SiteSettings::default();
        let state = SiteState::new(&with_intro, t0).unwrap();

        let state = state.update(SiteEvent::Wheel {
            delta_y: 300.0,
            at: t0 + Duration::from_secs(1),
        });
        assert_eq!(state.current_section(), SectionId::Home);
        assert!(state.pending_scroll().is_none());

        let state = state.update(SiteEvent::Wheel {
            delta_y: 300.0,
            at: t0 + Duration::from_secs(7),
        });
        assert_eq!(state.current_section(), SectionId::About);
    }

    #[test]
    fn scroll_applied_clears_request() {
        let state = SiteState::new(&settings(), Instant::now()).unwrap();
        let state = state.update(SiteEvent::NavigateTo(SectionId::Faq));
        assert!(state.pending_scroll().is_some());

        let state = state.update(SiteEvent::ScrollApplied);
        assert!(state.pending_scroll().is_none());
        assert_eq!(state.current_section(), SectionId::Faq);
    }

    #[test]
    fn unknown_anchor_is_absorbed() {
        let state = SiteState::new(&settings(), Instant::now()).unwrap();
        let state = state.update(SiteEvent::NavigateToAnchor("sponsors".into()));
        assert_eq!(state.current_section(), SectionId::Home);
        assert!(state.pending_scroll().is_none());
    }

    #[test]
    fn leaving_home_stops_driver_and_return_remounts() {
        let t0 = Instant::now();
        let state = SiteState::new(&settings(), t0)
            .unwrap()
            .update(SiteEvent::NavigateTo(SectionId::Contact));

        let away = state.update(SiteEvent::ShowView {
            view: View::ProblemStatements,
            at: t0,
        });
        assert_eq!(away.driver().state(), DriverState::Stopped);
        assert!(away.scroll_to_top());
        assert!(!away.accepts_wheel(t0));

        let back_at = t0 + Duration::from_secs(5);
        let home = away.update(SiteEvent::ShowView {
            view: View::Home,
            at: back_at,
        });
        assert_eq!(home.current_section(), SectionId::Home);
        assert_eq!(
            home.driver().state(),
            DriverState::Running { next_due: back_at }
        );
    }

    #[test]
    fn teardown_stops_ticks() {
        let t0 = Instant::now();
        let state = SiteState::new(&settings(), t0)
            .unwrap()
            .update(SiteEvent::Teardown);

        let state = state.update(SiteEvent::Frame {
            at: t0,
            now: utc(0, 0, 0),
        });
        assert_eq!(state.countdown().refreshes(), 0);
    }
}
