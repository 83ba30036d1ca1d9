//! Board configuration.

use crate::board::Mode;
use crate::brush::{clamp_brush_width, DEFAULT_BRUSH_COLOR, DEFAULT_BRUSH_WIDTH};
use crate::color::InkColor;
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings a board starts with. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub surface_width: f64,
    pub surface_height: f64,
    /// Where newly placed stickers and text land.
    pub placement: Point,
    pub brush_color: InkColor,
    pub brush_width: f64,
    pub initial_mode: Mode,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            surface_width: 1280.0,
            surface_height: 800.0,
            placement: Point::new(200.0, 200.0),
            brush_color: DEFAULT_BRUSH_COLOR,
            brush_width: DEFAULT_BRUSH_WIDTH,
            initial_mode: Mode::Idle,
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Surface size, with non-positive dimensions replaced by the defaults.
    pub fn surface_size(&self) -> Size {
        let defaults = Self::default();
        let sane = |v: f64, fallback: f64| if v.is_finite() && v > 0.0 { v } else { fallback };
        Size::new(
            sane(self.surface_width, defaults.surface_width),
            sane(self.surface_height, defaults.surface_height),
        )
    }

    pub fn brush_width(&self) -> f64 {
        clamp_brush_width(self.brush_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = BoardConfig::from_json("{}").unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config = BoardConfig::from_json(
            r##"{"brush_color":"#ff0000","placement":{"x":10.0,"y":20.0},"initial_mode":"drawing"}"##,
        )
        .unwrap();

        assert_eq!(config.brush_color, InkColor::rgb(255, 0, 0));
        assert_eq!(config.placement, Point::new(10.0, 20.0));
        assert_eq!(config.initial_mode, Mode::Drawing);
        assert!((config.surface_width - 1280.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bad_color_rejected() {
        let err = BoardConfig::from_json(r#"{"brush_color":"blue"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_sanitized_values() {
        let config = BoardConfig {
            surface_width: -1.0,
            surface_height: 0.0,
            brush_width: 900.0,
            ..BoardConfig::default()
        };
        assert_eq!(config.surface_size(), Size::new(1280.0, 800.0));
        assert!((config.brush_width() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"surface_width": 640, "surface_height": 480}}"#).unwrap();

        let config = BoardConfig::load(file.path()).unwrap();
        assert_eq!(config.surface_size(), Size::new(640.0, 480.0));
    }

    #[test]
    fn test_load_missing_file() {
        let err = BoardConfig::load("/nonexistent/peepy/config.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
