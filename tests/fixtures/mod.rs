// Test fixtures - reusable test data
// Shared by the integration test files; not every file uses every helper

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Asia::Kolkata;
use chrono_tz::Tz;

/// Sample instants around the hackathon
pub mod dates {
    use super::*;

    /// Final submission deadline, 29 March 2025 12:00 IST
    pub fn deadline() -> DateTime<Tz> {
        Kolkata.with_ymd_and_hms(2025, 3, 29, 12, 0, 0).unwrap()
    }

    /// Hackathon start, 28 March 2025 00:00 IST
    pub fn kickoff() -> DateTime<Tz> {
        Kolkata.with_ymd_and_hms(2025, 3, 28, 0, 0, 0).unwrap()
    }

    /// Same wall time as the deadline, but in UTC
    pub fn deadline_wall_time_utc() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 29, 12, 0, 0).unwrap()
    }
}

/// Sample section orders
pub mod sections {
    use heal_o_code::models::section::{SectionId, SectionList};

    /// `[home, about, timeline, faq]`
    pub fn four() -> SectionList {
        SectionList::new(vec![
            SectionId::Home,
            SectionId::About,
            SectionId::Timeline,
            SectionId::Faq,
        ])
        .unwrap()
    }
}

/// Settings tuned for deterministic tests
pub mod settings {
    use heal_o_code::models::settings::SiteSettings;

    /// Defaults with the intro skipped, so wheel input is accepted at once
    pub fn without_intro() -> SiteSettings {
        SiteSettings {
            intro_enabled: false,
            ..SiteSettings::default()
        }
    }

    /// Four-section page with the intro skipped
    pub fn four_sections() -> SiteSettings {
        SiteSettings {
            sections: ["home", "about", "timeline", "faq"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ..without_intro()
        }
    }
}
