use face_core::ClockStyle;
use face_theme::Shape;
use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `watchface.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FaceConfig {
    /// Face display settings.
    pub face: FaceSettings,
}

/// Settings for the face itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceSettings {
    /// Device face shape — `"rectangular"` or `"round"`.
    pub shape: Shape,
    /// Clock display style — `"24h"` or `"12h"`.
    pub clock: ClockStyle,
    /// Dump an ASCII rendering of each presented frame to stderr.
    pub ascii_preview: bool,
}

impl Default for FaceSettings {
    fn default() -> Self {
        Self {
            shape: Shape::Rectangular,
            clock: ClockStyle::H24,
            ascii_preview: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: FaceConfig = toml::from_str("").unwrap();
        assert_eq!(config.face.shape, Shape::Rectangular);
        assert_eq!(config.face.clock, ClockStyle::H24);
        assert!(!config.face.ascii_preview);
    }

    #[test]
    fn parses_round_twelve_hour_face() {
        let raw = r#"
            [face]
            shape = "round"
            clock = "12h"
            ascii_preview = true
        "#;
        let config: FaceConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.face.shape, Shape::Round);
        assert_eq!(config.face.clock, ClockStyle::H12);
        assert!(config.face.ascii_preview);
    }
}
