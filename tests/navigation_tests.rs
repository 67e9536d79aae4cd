// Integration tests for wheel-driven section navigation

mod fixtures;

use std::time::{Duration, Instant};

use heal_o_code::models::section::SectionId;
use heal_o_code::services::navigation::{SectionNavigator, WheelOutcome};
use pretty_assertions::assert_eq;
use test_case::test_case;

const COOLDOWN: Duration = Duration::from_millis(1000);

fn navigator_at(section: SectionId) -> SectionNavigator {
    let mut nav = SectionNavigator::new(fixtures::sections::four(), 50.0, COOLDOWN, 72.0);
    nav.scroll_to_section(section).unwrap();
    nav
}

#[test_case(SectionId::About, 200.0, SectionId::Timeline ; "down from about")]
#[test_case(SectionId::Timeline, -200.0, SectionId::About ; "up from timeline")]
#[test_case(SectionId::Home, -200.0, SectionId::Home ; "up from first stays")]
#[test_case(SectionId::Faq, 200.0, SectionId::Faq ; "down from last stays")]
#[test_case(SectionId::About, 30.0, SectionId::About ; "small delta ignored")]
#[test_case(SectionId::About, -49.0, SectionId::About ; "small negative delta ignored")]
fn single_wheel_event(start: SectionId, delta_y: f32, expected: SectionId) {
    let mut nav = navigator_at(start);
    nav.handle_wheel(delta_y, Instant::now());
    assert_eq!(nav.current(), expected);
}

#[test]
fn second_event_inside_cooldown_is_dropped() {
    let mut nav = navigator_at(SectionId::About);
    let t0 = Instant::now();

    let first = nav.handle_wheel(200.0, t0);
    assert!(matches!(first, WheelOutcome::Moved(r) if r.section == SectionId::Timeline));

    let second = nav.handle_wheel(200.0, t0 + Duration::from_millis(300));
    assert_eq!(second, WheelOutcome::Suppressed);
    assert_eq!(nav.current(), SectionId::Timeline);
}

#[test]
fn event_after_cooldown_moves_again() {
    let mut nav = navigator_at(SectionId::About);
    let t0 = Instant::now();

    nav.handle_wheel(200.0, t0);
    nav.handle_wheel(200.0, t0 + COOLDOWN);
    assert_eq!(nav.current(), SectionId::Faq);
}

#[test]
fn boundary_attempts_keep_the_gate_for_a_full_cooldown() {
    let mut nav = navigator_at(SectionId::Home);
    let t0 = Instant::now();

    assert_eq!(nav.handle_wheel(-500.0, t0), WheelOutcome::AtBoundary);
    assert_eq!(
        nav.handle_wheel(500.0, t0 + Duration::from_millis(999)),
        WheelOutcome::Suppressed
    );
    assert!(matches!(
        nav.handle_wheel(500.0, t0 + COOLDOWN),
        WheelOutcome::Moved(_)
    ));
    assert_eq!(nav.current(), SectionId::About);
}

#[test]
fn a_gesture_burst_moves_exactly_one_section() {
    let mut nav = navigator_at(SectionId::Home);
    let t0 = Instant::now();

    let moved = (0..40)
        .map(|i| nav.handle_wheel(120.0, t0 + Duration::from_millis(i * 16)))
        .filter(|outcome| matches!(outcome, WheelOutcome::Moved(_)))
        .count();

    assert_eq!(moved, 1);
    assert_eq!(nav.current(), SectionId::About);
}

#[test]
fn scroll_request_offsets_by_header() {
    let mut nav = navigator_at(SectionId::Home);
    let request = nav.scroll_to_anchor("#timeline").unwrap();

    assert_eq!(request.section, SectionId::Timeline);
    assert_eq!(request.target_offset(1600.0), 1528.0);
}

#[test]
fn anchor_not_on_this_page_is_rejected() {
    let mut nav = navigator_at(SectionId::About);
    assert!(nav.scroll_to_anchor("contact").is_err());
    assert_eq!(nav.current(), SectionId::About);
}
