use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::SiteSettings;

const SETTINGS_FILE: &str = "site.toml";

/// Loads site settings from an optional TOML override file.
pub struct SettingsService {
    path: Option<PathBuf>,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Uses `site.toml` in the platform config directory, if one resolves.
    pub fn from_project_dirs() -> Self {
        let path = ProjectDirs::from("edu", "WEAL", "HealOCode")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE));
        if path.is_none() {
            log::warn!("Unable to resolve config directory; using built-in settings");
        }
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Reads and validates the override file. A missing file yields the
    /// built-in defaults.
    pub fn load(&self) -> Result<SiteSettings> {
        let Some(path) = self.path.as_deref() else {
            return Ok(SiteSettings::default());
        };

        if !path.exists() {
            log::debug!("No settings file at {}; using defaults", path.display());
            return Ok(SiteSettings::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings = parse_settings(&data)
            .with_context(|| format!("invalid settings in {}", path.display()))?;

        log::info!("Loaded site settings from {}", path.display());
        Ok(settings)
    }

    /// Like [`load`](Self::load) but never fails: problems are logged and
    /// the built-in defaults are returned.
    pub fn load_or_default(&self) -> SiteSettings {
        match self.load() {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{err:#}; falling back to built-in settings");
                SiteSettings::default()
            }
        }
    }
}

pub fn parse_settings(data: &str) -> Result<SiteSettings> {
    let settings: SiteSettings = toml::from_str(data).context("failed to parse TOML")?;
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("site.toml"));
        assert_eq!(service.load().unwrap(), SiteSettings::default());
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(
            &path,
            "wheel_threshold = 80.0\nsections = [\"home\", \"about\", \"faq\"]\n",
        )
        .unwrap();

        let settings = SettingsService::new(&path).load().unwrap();
        assert_eq!(settings.wheel_threshold, 80.0);
        assert_eq!(settings.section_list().unwrap().len(), 3);
        assert_eq!(settings.deadline, SiteSettings::default().deadline);
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, "timezone = \"Nowhere/Special\"\n").unwrap();

        let service = SettingsService::new(&path);
        assert!(service.load().is_err());
        assert_eq!(service.load_or_default(), SiteSettings::default());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(parse_settings("deadline = ").is_err());
    }
}
