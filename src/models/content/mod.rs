//! Static copy rendered by the page sections.
//!
//! Everything here is `'static` data; nothing is loaded at runtime.

mod catalog;

pub use catalog::{
    ABOUT_BLURBS, FAQ_ENTRIES, PRIZE_TIERS, PROBLEM_STATEMENTS, TIMELINE, WHY_PARTICIPATE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutBlurb {
    pub icon: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub icon: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub when: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrizeTier {
    pub icon: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemStatement {
    pub icon: &'static str,
    pub title: &'static str,
    pub domain: &'static str,
    pub summary: &'static str,
    pub requirements: &'static [&'static str],
    /// Open-ended track rendered as a full-width card
    pub highlighted: bool,
}

impl ProblemStatement {
    pub fn requirements_heading(&self) -> &'static str {
        if self.highlighted {
            "Submission Requirements"
        } else {
            "Key Requirements:"
        }
    }
}

/// Tracks shown in the landing-page teaser, highlighted track excluded.
pub fn featured_tracks(limit: usize) -> impl Iterator<Item = &'static ProblemStatement> {
    PROBLEM_STATEMENTS
        .iter()
        .filter(|statement| !statement.highlighted)
        .take(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_highlighted_track_and_it_is_last() {
        let highlighted: Vec<_> = PROBLEM_STATEMENTS
            .iter()
            .filter(|statement| statement.highlighted)
            .collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(
            PROBLEM_STATEMENTS.last().map(|statement| statement.title),
            Some("Open Innovation")
        );
    }

    #[test]
    fn every_statement_lists_requirements() {
        for statement in PROBLEM_STATEMENTS {
            assert!(
                !statement.requirements.is_empty(),
                "{} has no requirements",
                statement.title
            );
        }
    }

    #[test]
    fn featured_tracks_skip_open_innovation() {
        let titles: Vec<_> = featured_tracks(usize::MAX).map(|s| s.title).collect();
        assert!(!titles.contains(&"Open Innovation"));
        assert_eq!(featured_tracks(3).count(), 3);
    }
}
