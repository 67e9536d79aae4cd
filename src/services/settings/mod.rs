mod service;

pub use service::{parse_settings, SettingsService};
