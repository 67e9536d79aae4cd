use std::time::{Duration, Instant};

use super::gate::ScrollGate;
use super::NavigationError;
use crate::models::section::{SectionId, SectionList};

/// Request for the page shell to bring a section into view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub section: SectionId,
    /// Height of the fixed top bar the section must clear.
    pub header_offset: f32,
}

impl ScrollRequest {
    /// Scroll offset that puts `section_top` just below the header.
    pub fn target_offset(&self, section_top: f32) -> f32 {
        (section_top - self.header_offset).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelOutcome {
    /// Dropped because the gate is still held from an earlier gesture.
    Suppressed,
    /// Too small to count as a deliberate scroll.
    BelowThreshold,
    /// Already at the first/last section; the gate was still taken.
    AtBoundary,
    Moved(ScrollRequest),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Next,
    Previous,
}

#[derive(Debug, Clone)]
pub struct SectionNavigator {
    sections: SectionList,
    current: SectionId,
    gate: ScrollGate,
    wheel_threshold: f32,
    header_offset: f32,
}

impl SectionNavigator {
    pub fn new(
        sections: SectionList,
        wheel_threshold: f32,
        cooldown: Duration,
        header_offset: f32,
    ) -> Self {
        let current = sections.first();
        Self {
            sections,
            current,
            gate: ScrollGate::new(cooldown),
            wheel_threshold,
            header_offset,
        }
    }

    pub fn sections(&self) -> &SectionList {
        &self.sections
    }

    pub fn current(&self) -> SectionId {
        self.current
    }

    pub fn gate(&self) -> &ScrollGate {
        &self.gate
    }

    pub fn header_offset(&self) -> f32 {
        self.header_offset
    }

    /// Back to the first section with a released gate, as on a fresh mount.
    pub fn reset(&mut self) {
        self.current = self.sections.first();
        self.gate = ScrollGate::new(self.gate.cooldown());
    }

    pub fn scroll_to_section(&mut self, id: SectionId) -> Result<ScrollRequest, NavigationError> {
        if !self.sections.contains(id) {
            return Err(NavigationError::NotInList(id));
        }

        self.current = id;
        Ok(ScrollRequest {
            section: id,
            header_offset: self.header_offset,
        })
    }

    pub fn scroll_to_anchor(&mut self, anchor: &str) -> Result<ScrollRequest, NavigationError> {
        let id = anchor
            .parse::<SectionId>()
            .map_err(|_| NavigationError::UnknownAnchor(anchor.to_string()))?;
        self.scroll_to_section(id)
    }

    /// Turns one wheel event into at most one section transition.
    /// Positive `delta_y` scrolls toward content further down the page.
    pub fn handle_wheel(&mut self, delta_y: f32, at: Instant) -> WheelOutcome {
        if self.gate.is_locked(at) {
            return WheelOutcome::Suppressed;
        }
        self.gate.release_if_expired(at);

        if delta_y.is_nan() || delta_y.abs() < self.wheel_threshold {
            return WheelOutcome::BelowThreshold;
        }

        let direction = if delta_y > 0.0 {
            Direction::Next
        } else {
            Direction::Previous
        };

        self.gate.try_acquire(at);

        let target = match direction {
            Direction::Next => self.sections.next(self.current),
            Direction::Previous => self.sections.previous(self.current),
        };

        match target {
            Some(id) => {
                log::debug!("Wheel {:?}: {} -> {}", direction, self.current, id);
                self.current = id;
                WheelOutcome::Moved(ScrollRequest {
                    section: id,
                    header_offset: self.header_offset,
                })
            }
            None => WheelOutcome::AtBoundary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator() -> SectionNavigator {
        SectionNavigator::new(
            SectionList::default(),
            50.0,
            Duration::from_millis(1000),
            72.0,
        )
    }

    #[test]
    fn starts_at_first_section() {
        assert_eq!(navigator().current(), SectionId::Home);
    }

    #[test]
    fn target_offset_clears_header_and_clamps_at_top() {
        let request = ScrollRequest {
            section: SectionId::About,
            header_offset: 72.0,
        };
        assert_eq!(request.target_offset(800.0), 728.0);
        assert_eq!(request.target_offset(10.0), 0.0);
    }

    #[test]
    fn below_threshold_leaves_gate_open() {
        let mut nav = navigator();
        let t0 = Instant::now();

        assert_eq!(nav.handle_wheel(49.9, t0), WheelOutcome::BelowThreshold);
        assert!(!nav.gate().is_locked(t0));
        assert!(matches!(nav.handle_wheel(50.0, t0), WheelOutcome::Moved(_)));
        assert_eq!(nav.current(), SectionId::About);
    }

    #[test]
    fn nan_delta_is_ignored() {
        let mut nav = navigator();
        assert_eq!(
            nav.handle_wheel(f32::NAN, Instant::now()),
            WheelOutcome::BelowThreshold
        );
        assert_eq!(nav.current(), SectionId::Home);
    }

    #[test]
    fn burst_is_collapsed_to_first_event() {
        let mut nav = navigator();
        let t0 = Instant::now();

        assert!(matches!(nav.handle_wheel(120.0, t0), WheelOutcome::Moved(_)));
        for step in 1..10 {
            let at = t0 + Duration::from_millis(step * 50);
            assert_eq!(nav.handle_wheel(800.0, at), WheelOutcome::Suppressed);
        }
        assert_eq!(nav.current(), SectionId::About);

        let after = t0 + Duration::from_millis(1000);
        assert!(matches!(nav.handle_wheel(-120.0, after), WheelOutcome::Moved(_)));
        assert_eq!(nav.current(), SectionId::Home);
    }

    #[test]
    fn boundary_attempt_still_takes_gate() {
        let mut nav = navigator();
        let t0 = Instant::now();

        assert_eq!(nav.handle_wheel(-200.0, t0), WheelOutcome::AtBoundary);
        assert!(nav.gate().is_locked(t0 + Duration::from_millis(10)));
        assert_eq!(
            nav.handle_wheel(200.0, t0 + Duration::from_millis(10)),
            WheelOutcome::Suppressed
        );
    }

    #[test]
    fn scroll_to_section_outside_list_is_rejected() {
        let list = SectionList::new(vec![SectionId::Home, SectionId::About]).unwrap();
        let mut nav = SectionNavigator::new(list, 50.0, Duration::from_secs(1), 72.0);

        assert_eq!(
            nav.scroll_to_section(SectionId::Contact),
            Err(NavigationError::NotInList(SectionId::Contact))
        );
        assert_eq!(nav.current(), SectionId::Home);
    }

    #[test]
    fn scroll_to_anchor_parses_and_moves() {
        let mut nav = navigator();
        let request = nav.scroll_to_anchor("#prize-pool").unwrap();
        assert_eq!(request.section, SectionId::PrizePool);
        assert_eq!(nav.current(), SectionId::PrizePool);

        assert_eq!(
            nav.scroll_to_anchor("sponsors"),
            Err(NavigationError::UnknownAnchor("sponsors".into()))
        );
        assert_eq!(nav.current(), SectionId::PrizePool);
    }

    #[test]
    fn programmatic_scroll_does_not_touch_gate() {
        let mut nav = navigator();
        let t0 = Instant::now();
        nav.scroll_to_section(SectionId::Faq).unwrap();
        assert!(!nav.gate().is_locked(t0));
    }

    #[test]
    fn reset_returns_to_first_and_releases_gate() {
        let mut nav = navigator();
        let t0 = Instant::now();
        nav.handle_wheel(100.0, t0);
        nav.reset();
        assert_eq!(nav.current(), SectionId::Home);
        assert!(!nav.gate().is_locked(t0));
    }
}
