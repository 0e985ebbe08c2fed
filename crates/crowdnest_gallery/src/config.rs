//! Gallery construction parameters

use serde::{Deserialize, Serialize};

use crate::caption::CaptionStyle;
use crate::error::{GalleryError, Result};
use crate::strip::GalleryItem;

/// Gallery configuration
///
/// Every field has a default, so an empty `[gallery]` table is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Items to show; empty means the built-in defaults
    #[serde(default)]
    pub items: Vec<GalleryItem>,

    /// Arc depth at the viewport edges (0 = flat, negative = curve up)
    #[serde(default = "default_bend")]
    pub bend: f32,

    #[serde(default = "default_text_color")]
    pub text_color: String,

    /// Corner radius in UV units, 0..=0.5
    #[serde(default = "default_border_radius")]
    pub border_radius: f32,

    /// Caption font shorthand
    #[serde(default = "default_font")]
    pub font: String,

    /// Wheel step and drag sensitivity multiplier
    #[serde(default = "default_scroll_speed")]
    pub scroll_speed: f32,

    /// Fraction of the remaining distance covered per frame, (0, 1]
    #[serde(default = "default_scroll_ease")]
    pub scroll_ease: f32,

    /// Inactivity before a wheel gesture snaps to the nearest item
    #[serde(default = "default_wheel_settle_ms")]
    pub wheel_settle_ms: u64,

    /// Delay between pointer release and snapping (0 = next frame)
    #[serde(default)]
    pub release_settle_ms: u64,
}

fn default_bend() -> f32 {
    3.0
}

fn default_text_color() -> String {
    "#ffffff".to_string()
}

fn default_border_radius() -> f32 {
    0.05
}

fn default_font() -> String {
    "bold 30px Figtree".to_string()
}

fn default_scroll_speed() -> f32 {
    2.0
}

fn default_scroll_ease() -> f32 {
    0.05
}

fn default_wheel_settle_ms() -> u64 {
    200
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            bend: default_bend(),
            text_color: default_text_color(),
            border_radius: default_border_radius(),
            font: default_font(),
            scroll_speed: default_scroll_speed(),
            scroll_ease: default_scroll_ease(),
            wheel_settle_ms: default_wheel_settle_ms(),
            release_settle_ms: 0,
        }
    }
}

impl GalleryConfig {
    pub fn with_items(mut self, items: Vec<GalleryItem>) -> Self {
        self.items = items;
        self
    }

    pub fn bend(mut self, bend: f32) -> Self {
        self.bend = bend;
        self
    }

    pub fn scroll_ease(mut self, ease: f32) -> Self {
        self.scroll_ease = ease;
        self
    }

    pub fn scroll_speed(mut self, speed: f32) -> Self {
        self.scroll_speed = speed;
        self
    }

    /// Check ranges and parse the caption style
    pub fn validate(&self) -> Result<CaptionStyle> {
        for (field, value) in [("bend", self.bend), ("scroll_speed", self.scroll_speed)] {
            if !value.is_finite() {
                return Err(GalleryError::NonFinite { field, value });
            }
        }
        if !(self.scroll_ease > 0.0 && self.scroll_ease <= 1.0) {
            return Err(GalleryError::InvalidEase(self.scroll_ease));
        }
        if !(0.0..=0.5).contains(&self.border_radius) {
            return Err(GalleryError::InvalidBorderRadius(self.border_radius));
        }
        CaptionStyle::parse(&self.font, &self.text_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let style = GalleryConfig::default().validate().unwrap();
        assert_eq!(style.font.size_px, 30.0);
        assert_eq!(style.color.to_array(), [1.0; 4]);
    }

    #[test]
    fn test_range_checks() {
        let bad_ease = GalleryConfig::default().scroll_ease(0.0);
        assert_eq!(bad_ease.validate(), Err(GalleryError::InvalidEase(0.0)));
        assert!(GalleryConfig::default().scroll_ease(1.5).validate().is_err());
        assert!(GalleryConfig::default().scroll_ease(f32::NAN).validate().is_err());
        assert!(GalleryConfig::default().scroll_ease(1.0).validate().is_ok());

        let radius = GalleryConfig {
            border_radius: 0.6,
            ..Default::default()
        };
        assert_eq!(radius.validate(), Err(GalleryError::InvalidBorderRadius(0.6)));

        assert!(matches!(
            GalleryConfig::default().bend(f32::INFINITY).validate(),
            Err(GalleryError::NonFinite { field: "bend", .. })
        ));
        assert!(matches!(
            GalleryConfig::default().scroll_speed(f32::NAN).validate(),
            Err(GalleryError::NonFinite { field: "scroll_speed", .. })
        ));
    }

    #[test]
    fn test_style_strings_checked() {
        let color = GalleryConfig {
            text_color: "white".into(),
            ..Default::default()
        };
        assert!(matches!(color.validate(), Err(GalleryError::InvalidColor(_))));

        let font = GalleryConfig {
            font: "Figtree".into(),
            ..Default::default()
        };
        assert!(matches!(font.validate(), Err(GalleryError::InvalidFont(_))));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: GalleryConfig = serde_json::from_str(r#"{"bend": -1.5}"#).unwrap();
        assert_eq!(config.bend, -1.5);
        assert_eq!(config.scroll_ease, 0.05);
        assert_eq!(config.wheel_settle_ms, 200);
        assert_eq!(config.release_settle_ms, 0);
        assert!(config.items.is_empty());
    }
}
