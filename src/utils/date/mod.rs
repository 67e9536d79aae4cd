// Date utility functions

use chrono::{DateTime, Datelike, TimeZone, Utc};

/// Wall-clock source sampled on every countdown tick.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// English ordinal suffix for a day of the month (`st`, `nd`, `rd`, `th`).
pub fn ordinal_suffix(day: u32) -> &'static str {
    match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// Pieces of the hero date badge, e.g. `29`, `th`, `March 2025`, `12:00 PM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateBadge {
    pub day: String,
    pub suffix: &'static str,
    pub month_year: String,
    pub time: String,
}

impl DateBadge {
    pub fn text(&self) -> String {
        format!("{}{} {} {}", self.day, self.suffix, self.month_year, self.time)
    }
}

pub fn date_badge<Tz>(at: &DateTime<Tz>) -> DateBadge
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    DateBadge {
        day: at.day().to_string(),
        suffix: ordinal_suffix(at.day()),
        month_year: at.format("%B %Y").to_string(),
        time: at.format("%-I:%M %p").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Asia::Kolkata;

    #[test]
    fn ordinal_suffixes() {
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(2), "nd");
        assert_eq!(ordinal_suffix(3), "rd");
        assert_eq!(ordinal_suffix(4), "th");
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(13), "th");
        assert_eq!(ordinal_suffix(21), "st");
        assert_eq!(ordinal_suffix(22), "nd");
        assert_eq!(ordinal_suffix(29), "th");
        assert_eq!(ordinal_suffix(31), "st");
    }

    #[test]
    fn badge_for_final_deadline() {
        let at = Kolkata.with_ymd_and_hms(2025, 3, 29, 12, 0, 0).unwrap();
        let badge = date_badge(&at);
        assert_eq!(badge.day, "29");
        assert_eq!(badge.suffix, "th");
        assert_eq!(badge.month_year, "March 2025");
        assert_eq!(badge.time, "12:00 PM");
        assert_eq!(badge.text(), "29th March 2025 12:00 PM");
    }

    #[test]
    fn badge_uses_twelve_hour_clock() {
        let at = Kolkata.with_ymd_and_hms(2025, 3, 24, 23, 59, 59).unwrap();
        assert_eq!(date_badge(&at).time, "11:59 PM");
    }

    #[test]
    fn mocked_clock_returns_fixed_instant() {
        let fixed = Utc.with_ymd_and_hms(2025, 3, 28, 0, 0, 0).unwrap();
        let mut clock = MockClock::new();
        clock.expect_now().times(2).return_const(fixed);

        assert_eq!(clock.now(), fixed);
        assert_eq!(clock.now(), fixed);
    }
}
