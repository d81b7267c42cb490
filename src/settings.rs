//! User settings for the HUD
//!
//! Settings are a single JSON file in the platform config directory. Every
//! field has a default, so a missing file or a file written by an older
//! version loads cleanly.

use crate::keystroke::SectionKind;
use crate::save::SaveError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name used under the platform config directory.
pub const APP_DIR_NAME: &str = "keystroke-hud";

/// When the mouse widgets show clicks-per-second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CpsDisplay {
    /// Button name and rate on two lines
    #[default]
    Always,
    /// Rate while non-zero, otherwise the button name
    OnClick,
    Never,
}

impl CpsDisplay {
    /// The next option, wrapping around (for a cycling toggle).
    pub fn next(self) -> Self {
        match self {
            CpsDisplay::Always => CpsDisplay::OnClick,
            CpsDisplay::OnClick => CpsDisplay::Never,
            CpsDisplay::Never => CpsDisplay::Always,
        }
    }
}

/// How the default overlay labels movement keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyDisplay {
    /// Key names, e.g. "W"
    #[default]
    Letters,
    /// Arrow glyphs
    Arrows,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudSettings {
    pub show_movement: bool,
    pub show_mouse: bool,
    pub show_spacebar: bool,
    pub cps_display: CpsDisplay,
    pub key_display: KeyDisplay,
    /// Render every overlay with the default overlay's colors
    pub sync_colors: bool,
    /// Cycle text and click colors through the rainbow
    pub rainbow: bool,
    pub text_shadow: bool,
    /// Initialise logging at debug level (and honour `RUST_LOG`)
    pub debug_logging: bool,
}

impl Default for HudSettings {
    fn default() -> Self {
        HudSettings {
            show_movement: true,
            show_mouse: true,
            show_spacebar: true,
            cps_display: CpsDisplay::Always,
            key_display: KeyDisplay::Letters,
            sync_colors: false,
            rainbow: false,
            text_shadow: false,
            debug_logging: false,
        }
    }
}

impl HudSettings {
    /// Default location: `<config_dir>/keystroke-hud/settings.json`.
    pub fn default_path() -> PathBuf {
        app_dir().join("settings.json")
    }

    /// Loads settings, falling back to defaults when the file doesn't exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SaveError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Writes settings as pretty JSON, creating the parent directory.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Whether a section of the default overlay is switched on.
    pub fn shows(&self, section: SectionKind) -> bool {
        match section {
            SectionKind::Movement => self.show_movement,
            SectionKind::Mouse => self.show_mouse,
            SectionKind::Jump => self.show_spacebar,
        }
    }
}

/// Per-user directory holding settings and saved overlays.
pub fn app_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(".").join(APP_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = HudSettings::load(dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, HudSettings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = HudSettings {
            show_mouse: false,
            cps_display: CpsDisplay::OnClick,
            key_display: KeyDisplay::Arrows,
            ..HudSettings::default()
        };
        settings.save(&path).unwrap();

        assert_eq!(HudSettings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "show_spacebar": false, "cps_display": "never" }"#).unwrap();

        let settings = HudSettings::load(&path).unwrap();
        assert!(!settings.show_spacebar);
        assert!(settings.show_movement);
        assert_eq!(settings.cps_display, CpsDisplay::Never);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(HudSettings::load(&path), Err(SaveError::Serialization(_))));
    }

    #[test]
    fn test_shows_and_cycle() {
        let settings = HudSettings {
            show_spacebar: false,
            ..HudSettings::default()
        };
        assert!(settings.shows(SectionKind::Movement));
        assert!(!settings.shows(SectionKind::Jump));
        assert_eq!(CpsDisplay::Never.next(), CpsDisplay::Always);
    }
}
