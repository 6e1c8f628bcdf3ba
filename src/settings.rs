//! User settings stored as settings.json in the app data directory
//!
//! Theme mode is not stored; every launch starts in light mode.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Assets
    pub portrait_path: Option<String>,
    pub resume_path: Option<String>,
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    pub fn portrait_path(&self) -> Option<PathBuf> {
        self.portrait_path.as_ref().map(PathBuf::from)
    }

    pub fn resume_path(&self) -> Option<PathBuf> {
        self.resume_path.as_ref().map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let settings = Settings {
            window_x: Some(10.0),
            window_y: Some(20.0),
            window_w: Some(1200.0),
            window_h: Some(800.0),
            portrait_path: Some("/home/shiva/shiva.jpg".into()),
            resume_path: None,
        };
        settings.save(dir.path());
        assert!(dir.path().join("settings.json").exists());

        let loaded = Settings::load(dir.path());
        assert_eq!(loaded, settings);
        assert_eq!(loaded.portrait_path(), Some(PathBuf::from("/home/shiva/shiva.jpg")));
        assert_eq!(loaded.resume_path(), None);
    }

    #[test]
    fn corrupt_file_falls_back() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("settings.json"), r#"{"resume_path":"/tmp/cv.pdf"}"#).unwrap();
        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.resume_path(), Some(PathBuf::from("/tmp/cv.pdf")));
        assert_eq!(loaded.window_w, None);
    }

    #[test]
    fn save_into_missing_dir_only_warns() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("not-created");
        Settings::default().save(&gone);
        assert!(!gone.exists());
    }
}
