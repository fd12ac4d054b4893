//! Runtime settings
//!
//! Defaults can be stored in a YAML file and overridden from the command line:
//!
//! ```yaml
//! direction: down
//! tones: 1.5
//! show_notes: false
//! ```

use crate::error::{ChordError, Result};
use crate::transpose::{Direction, TransposeRequest};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Largest transposition accepted, in tones
pub const MAX_TONES: f64 = 12.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Default direction
    pub direction: Direction,
    /// Default magnitude in tones
    pub tones: f64,
    /// Print enharmonic notes after a chord sequence
    pub show_notes: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            direction: Direction::Up,
            tones: 1.0,
            show_notes: true,
        }
    }
}

impl Settings {
    /// Parse settings from YAML text
    pub fn from_yaml(source: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }

    /// Load settings from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        let settings = Self::from_yaml(&source).map_err(|source| ChordError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// Apply command line overrides
    pub fn with_overrides(mut self, direction: Option<Direction>, tones: Option<f64>) -> Self {
        if let Some(direction) = direction {
            self.direction = direction;
        }
        if let Some(tones) = tones {
            self.tones = tones;
        }
        self
    }

    /// Check the magnitude is usable
    pub fn validate(&self) -> Result<()> {
        if !self.tones.is_finite() || self.tones < 0.0 {
            return Err(ChordError::Config(format!(
                "tones must be a non-negative number, got {}",
                self.tones
            )));
        }
        if self.tones > MAX_TONES {
            return Err(ChordError::Config(format!(
                "tones must be at most {}, got {}",
                MAX_TONES, self.tones
            )));
        }
        Ok(())
    }

    pub fn request(&self) -> TransposeRequest {
        TransposeRequest::new(self.direction, self.tones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.request().shift(), 2);
        assert!(settings.show_notes);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let settings = Settings::from_yaml("direction: down").unwrap();
        assert_eq!(settings.direction, Direction::Down);
        assert_eq!(settings.tones, 1.0);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(Settings::from_yaml("semitones: 3").is_err());
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::default().with_overrides(Some(Direction::Down), Some(0.5));
        assert_eq!(settings.request().shift(), -1);
        let unchanged = Settings::default().with_overrides(None, None);
        assert_eq!(unchanged, Settings::default());
    }

    #[test]
    fn test_validation() {
        let negative = Settings::default().with_overrides(None, Some(-1.0));
        assert!(matches!(negative.validate(), Err(ChordError::Config(_))));
        let huge = Settings::default().with_overrides(None, Some(12.5));
        assert!(huge.validate().is_err());
        let nan = Settings::default().with_overrides(None, Some(f64::NAN));
        assert!(nan.validate().is_err());
        let zero = Settings::default().with_overrides(None, Some(0.0));
        assert!(zero.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "direction: down\ntones: 2.5\nshow_notes: false").unwrap();
        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.request().shift(), -5);
        assert!(!settings.show_notes);
    }

    #[test]
    fn test_load_bad_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tones: [1, 2]").unwrap();
        let err = Settings::load(file.path()).unwrap_err();
        assert!(matches!(err, ChordError::ConfigFile { .. }));
    }
}
