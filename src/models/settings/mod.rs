// Site settings
// Compiled-in defaults with optional overrides from site.toml

use std::time::Duration;

use chrono::{NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::countdown::Deadline;
use crate::models::section::{SectionId, SectionList, SectionListError, UnknownSection};

pub const DEADLINE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid deadline '{value}': {reason}")]
    InvalidDeadline { value: String, reason: String },
    #[error("unknown timezone '{0}'")]
    UnknownTimezone(String),
    #[error(transparent)]
    UnknownSection(#[from] UnknownSection),
    #[error("invalid section list: {0}")]
    InvalidSectionList(#[from] SectionListError),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteSettings {
    pub event_name: String,
    pub presenter: String,
    pub tagline: String,
    pub countdown_label: String,
    /// Local wall time in `timezone`, formatted as `YYYY-MM-DDTHH:MM:SS`
    pub deadline: String,
    pub timezone: String,
    pub registration_url: String,
    pub contact_email: String,
    pub contact_phone: String,
    /// Section anchors in page order
    pub sections: Vec<String>,
    /// Height of the fixed navigation bar; scroll targets are offset by it
    pub header_height: f32,
    /// Minimum |deltaY| for a wheel event to move between sections
    pub wheel_threshold: f32,
    pub scroll_cooldown_ms: u64,
    pub tick_interval_ms: u64,
    pub intro_enabled: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            event_name: "HEAL-O-CODE 2.0".to_string(),
            presenter: "WEAL".to_string(),
            tagline: "Code, Create, Cure: Where Tech Meets Wellness".to_string(),
            countdown_label: "Hackathon ends in:".to_string(),
            deadline: "2025-03-29T12:00:00".to_string(),
            timezone: "Asia/Kolkata".to_string(),
            registration_url: "https://heal-o-code.example.com/register".to_string(),
            contact_email: "weal.club@example.com".to_string(),
            contact_phone: "+91 98765 43210".to_string(),
            sections: SectionId::ALL
                .iter()
                .map(|section| section.anchor().to_string())
                .collect(),
            header_height: 72.0,
            wheel_threshold: 50.0,
            scroll_cooldown_ms: 1000,
            tick_interval_ms: 1000,
            intro_enabled: true,
        }
    }
}

impl SiteSettings {
    pub fn timezone(&self) -> Result<Tz, SettingsError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| SettingsError::UnknownTimezone(self.timezone.clone()))
    }

    /// Resolve the configured wall time to a fixed instant.
    pub fn deadline(&self) -> Result<Deadline, SettingsError> {
        let tz = self.timezone()?;
        let naive = NaiveDateTime::parse_from_str(self.deadline.trim(), DEADLINE_FORMAT)
            .map_err(|err| SettingsError::InvalidDeadline {
                value: self.deadline.clone(),
                reason: err.to_string(),
            })?;

        let local = tz
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| SettingsError::InvalidDeadline {
                value: self.deadline.clone(),
                reason: format!("does not exist in {}", tz.name()),
            })?;

        Ok(Deadline::new(local))
    }

    pub fn section_list(&self) -> Result<SectionList, SettingsError> {
        let sections = self
            .sections
            .iter()
            .map(|anchor| anchor.parse::<SectionId>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SectionList::new(sections)?)
    }

    pub fn scroll_cooldown(&self) -> Duration {
        Duration::from_millis(self.scroll_cooldown_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.deadline()?;
        self.section_list()?;

        check_non_negative("header_height", self.header_height)?;
        check_non_negative("wheel_threshold", self.wheel_threshold)?;

        if self.tick_interval_ms == 0 {
            return Err(SettingsError::InvalidValue {
                field: "tick_interval_ms",
                reason: "must be greater than zero".to_string(),
            });
        }

        if self.scroll_cooldown_ms == 0 {
            return Err(SettingsError::InvalidValue {
                field: "scroll_cooldown_ms",
                reason: "must be greater than zero".to_string(),
            });
        }

        if self.registration_url.trim().is_empty() {
            return Err(SettingsError::InvalidValue {
                field: "registration_url",
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

fn check_non_negative(field: &'static str, value: f32) -> Result<(), SettingsError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SettingsError::InvalidValue {
            field,
            reason: format!("expected a finite non-negative number, got {value}"),
        })
    }
}
