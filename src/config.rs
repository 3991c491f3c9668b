// keycloud-core/src/config.rs
//
// Rendering configuration for the keyword cloud, plus the weight and color
// constants that encode the matched/missing distinction.

use serde::{Deserialize, Serialize};

/// Weight assigned to keywords found in both resume and job description
pub const MATCHED_WEIGHT: u32 = 30;

/// Weight assigned to keywords expected but absent from the resume
pub const MISSING_WEIGHT: u32 = 15;

/// Color for matched keywords (green)
pub const MATCHED_COLOR: &str = "#28a745";

/// Color for missing keywords (red)
pub const MISSING_COLOR: &str = "#dc3545";

/// Default id of the container element carrying the data attributes
pub const DEFAULT_CONTAINER_ID: &str = "keywordCloud";

/// Data attribute holding the matched keyword list
pub const MATCHED_ATTR: &str = "data-matched";

/// Data attribute holding the missing keyword list
pub const MISSING_ATTR: &str = "data-missing";

/// Map a keyword weight to its display color.
///
/// Matched weight gets green; everything else falls through to red, matching
/// the two-color scheme of the original page (`weight === 30 ? green : red`).
pub fn color_for_weight(weight: u32) -> &'static str {
    if weight == MATCHED_WEIGHT {
        MATCHED_COLOR
    } else {
        MISSING_COLOR
    }
}

/// Rendering options passed through to wordcloud2.js.
///
/// Field names serialize in camelCase so the struct maps 1:1 onto the option
/// names the library recognizes (`gridSize`, `weightFactor`, ...). The `list`
/// and `color` options are attached separately at render time since one is
/// per-call data and the other is a JS callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CloudConfig {
    /// Pixel density of the layout grid
    pub grid_size: u32,

    /// Multiplier from keyword weight to font size
    pub weight_factor: f64,

    /// CSS font family for rendered words
    pub font_family: String,

    /// Fraction of words rotated (0.0 = none, 1.0 = all)
    pub rotate_ratio: f64,

    /// Number of discrete rotation angles
    pub rotation_steps: u32,

    /// CSS background color of the cloud canvas
    pub background_color: String,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            grid_size: 8,
            weight_factor: 2.0,
            font_family: "Arial, sans-serif".to_string(),
            rotate_ratio: 0.5,
            rotation_steps: 2,
            background_color: "#f8f9fa".to_string(),
        }
    }
}

impl CloudConfig {
    /// Builder: set grid size
    pub fn with_grid_size(mut self, size: u32) -> Self {
        self.grid_size = size;
        self
    }

    /// Builder: set weight factor
    pub fn with_weight_factor(mut self, factor: f64) -> Self {
        self.weight_factor = factor;
        self
    }

    /// Builder: set font family
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Builder: set background color
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CloudConfig::default();
        assert_eq!(config.grid_size, 8);
        assert_eq!(config.weight_factor, 2.0);
        assert_eq!(config.font_family, "Arial, sans-serif");
        assert_eq!(config.rotate_ratio, 0.5);
        assert_eq!(config.rotation_steps, 2);
        assert_eq!(config.background_color, "#f8f9fa");
    }

    #[test]
    fn test_color_mapping() {
        assert_eq!(color_for_weight(MATCHED_WEIGHT), "#28a745");
        assert_eq!(color_for_weight(MISSING_WEIGHT), "#dc3545");
        // Anything that is not the matched weight renders red
        assert_eq!(color_for_weight(0), "#dc3545");
        assert_eq!(color_for_weight(99), "#dc3545");
    }

    #[test]
    fn test_serializes_to_wordcloud2_option_names() {
        let value = serde_json::to_value(CloudConfig::default()).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj["gridSize"], 8);
        assert_eq!(obj["weightFactor"], 2.0);
        assert_eq!(obj["fontFamily"], "Arial, sans-serif");
        assert_eq!(obj["rotateRatio"], 0.5);
        assert_eq!(obj["rotationSteps"], 2);
        assert_eq!(obj["backgroundColor"], "#f8f9fa");
    }

    #[test]
    fn test_deserialize_partial_override() {
        // withConfig accepts partial objects; unspecified fields keep defaults
        let config: CloudConfig = serde_json::from_str(r#"{"gridSize": 16}"#).unwrap();
        assert_eq!(config.grid_size, 16);
        assert_eq!(config.weight_factor, 2.0);
    }

    #[test]
    fn test_builders() {
        let config = CloudConfig::default()
            .with_grid_size(4)
            .with_weight_factor(3.5)
            .with_font_family("Georgia, serif")
            .with_background_color("#ffffff");
        assert_eq!(config.grid_size, 4);
        assert_eq!(config.weight_factor, 3.5);
        assert_eq!(config.font_family, "Georgia, serif");
        assert_eq!(config.background_color, "#ffffff");
    }
}
