//! Caption text under each plane
//!
//! A caption is rasterised into its own texture (text width plus a 10 px
//! margin on each side) and shown on a small plane hanging below the image.
//! Only the geometry lives here; rasterisation is the renderer's job.

use std::fmt;

use crate::error::{GalleryError, Result};

/// Margin around the rasterised text, per axis, in texture pixels
pub const CAPTION_MARGIN_PX: u32 = 20;
/// Line height as a multiple of the font size
pub const LINE_HEIGHT: f32 = 1.2;
/// Caption plane height relative to the image plane height
pub const CAPTION_HEIGHT_RATIO: f32 = 0.15;
/// Gap between the image plane and its caption, in world units
pub const CAPTION_GAP: f32 = 0.05;

// ============================================================================
// Font
// ============================================================================

/// Parsed CSS-style font shorthand, e.g. `bold 30px Figtree`
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    /// Style and weight keywords preceding the size (`bold`, `italic`, `600`)
    pub modifiers: Vec<String>,
    pub size_px: f32,
    pub family: String,
}

impl FontSpec {
    pub fn parse(font: &str) -> Result<Self> {
        let invalid = || GalleryError::InvalidFont(font.to_string());
        let tokens: Vec<&str> = font.split_whitespace().collect();

        let size_at = tokens
            .iter()
            .position(|t| t.ends_with("px"))
            .ok_or_else(invalid)?;
        let size_px: f32 = tokens[size_at]
            .trim_end_matches("px")
            .parse()
            .map_err(|_| invalid())?;
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(invalid());
        }

        let family = tokens[size_at + 1..].join(" ");
        if family.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            modifiers: tokens[..size_at].iter().map(|t| t.to_string()).collect(),
            size_px,
            family,
        })
    }

    pub fn is_bold(&self) -> bool {
        self.modifiers.iter().any(|m| {
            m.eq_ignore_ascii_case("bold")
                || m.eq_ignore_ascii_case("bolder")
                || m.parse::<u16>().is_ok_and(|w| w >= 600)
        })
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{modifier} ")?;
        }
        write!(f, "{}px {}", self.size_px, self.family)
    }
}

// ============================================================================
// Color
// ============================================================================

/// Straight-alpha RGBA color with components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`
    pub fn parse_hex(color: &str) -> Result<Self> {
        let invalid = || GalleryError::InvalidColor(color.to_string());
        let hex = color.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map(|v| v as f32 / 255.0);
        let (r, g, b, a) = match hex.len() {
            3 => {
                let expand = |i: usize| channel(&hex[i..=i].repeat(2));
                (expand(0), expand(1), expand(2), Ok(1.0))
            }
            6 => (
                channel(&hex[0..2]),
                channel(&hex[2..4]),
                channel(&hex[4..6]),
                Ok(1.0),
            ),
            8 => (
                channel(&hex[0..2]),
                channel(&hex[2..4]),
                channel(&hex[4..6]),
                channel(&hex[6..8]),
            ),
            _ => return Err(invalid()),
        };

        match (r, g, b, a) {
            (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(Self { r, g, b, a }),
            _ => Err(invalid()),
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

// ============================================================================
// Measurement
// ============================================================================

/// Text width provider for caption textures
pub trait TextMeasurer: Send + Sync {
    /// Advance width of `text` in pixels when drawn with `font`
    fn measure_width(&self, text: &str, font: &FontSpec) -> f32;
}

/// Font-less fallback: a fixed advance per character
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTextMeasurer;

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure_width(&self, text: &str, font: &FontSpec) -> f32 {
        // ~0.55em per glyph, a little wider for bold faces
        let advance = if font.is_bold() { 0.58 } else { 0.55 };
        text.chars().count() as f32 * font.size_px * advance
    }
}

/// Pixel size of a rasterised caption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaptionTexture {
    pub width: u32,
    pub height: u32,
}

impl CaptionTexture {
    pub fn measure(text: &str, font: &FontSpec, measurer: &dyn TextMeasurer) -> Self {
        // Float to int casts saturate; the margin must too
        let text_width = measurer.measure_width(text, font).max(0.0).ceil() as u32;
        let text_height = (font.size_px * LINE_HEIGHT).ceil() as u32;
        Self {
            width: text_width.saturating_add(CAPTION_MARGIN_PX),
            height: text_height.saturating_add(CAPTION_MARGIN_PX),
        }
    }

    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            0.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// World-space placement of a caption relative to its plane's centre
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CaptionMesh {
    pub width: f32,
    pub height: f32,
    pub offset_y: f32,
}

impl CaptionMesh {
    pub fn fit(texture: &CaptionTexture, plane_height: f32) -> Self {
        let height = plane_height * CAPTION_HEIGHT_RATIO;
        Self {
            width: height * texture.aspect(),
            height,
            offset_y: -plane_height * 0.5 - height * 0.5 - CAPTION_GAP,
        }
    }
}

/// Resolved caption appearance shared by all items
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionStyle {
    pub font: FontSpec,
    pub color: Rgba,
}

impl CaptionStyle {
    pub fn parse(font: &str, color: &str) -> Result<Self> {
        Ok(Self {
            font: FontSpec::parse(font)?,
            color: Rgba::parse_hex(color)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_font_shorthand() {
        let font = FontSpec::parse("bold 30px Figtree").unwrap();
        assert_eq!(font.size_px, 30.0);
        assert_eq!(font.family, "Figtree");
        assert!(font.is_bold());
        assert_eq!(font.to_string(), "bold 30px Figtree");

        let font = FontSpec::parse("italic 600 18.5px Open Sans").unwrap();
        assert_eq!(font.size_px, 18.5);
        assert_eq!(font.family, "Open Sans");
        assert!(font.is_bold());

        assert!(!FontSpec::parse("30px sans-serif").unwrap().is_bold());
    }

    #[test]
    fn test_reject_bad_fonts() {
        for font in ["", "bold Figtree", "30px", "-4px Figtree", "abcpx Figtree"] {
            assert!(
                matches!(FontSpec::parse(font), Err(GalleryError::InvalidFont(_))),
                "{font:?}"
            );
        }
    }

    #[test]
    fn test_parse_colors() {
        assert_eq!(Rgba::parse_hex("#ffffff").unwrap(), Rgba::WHITE);
        assert_eq!(Rgba::parse_hex("#fff").unwrap(), Rgba::WHITE);
        let c = Rgba::parse_hex("#54505080").unwrap();
        assert!((c.r - 0x54 as f32 / 255.0).abs() < 1e-6);
        assert!((c.a - 0x80 as f32 / 255.0).abs() < 1e-6);

        for bad in ["ffffff", "#ffff", "#gggggg", "#"] {
            assert!(Rgba::parse_hex(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn test_caption_geometry() {
        struct Fixed;
        impl TextMeasurer for Fixed {
            fn measure_width(&self, _: &str, _: &FontSpec) -> f32 {
                99.2
            }
        }

        let font = FontSpec::parse("bold 30px Figtree").unwrap();
        let texture = CaptionTexture::measure("TinkerHub", &font, &Fixed);
        assert_eq!(texture, CaptionTexture { width: 120, height: 56 });

        let mesh = CaptionMesh::fit(&texture, 10.0);
        assert!((mesh.height - 1.5).abs() < 1e-6);
        assert!((mesh.width - 1.5 * 120.0 / 56.0).abs() < 1e-5);
        assert!((mesh.offset_y - (-5.0 - 0.75 - 0.05)).abs() < 1e-6);
    }

    #[test]
    fn test_estimated_measurer_scales_with_length() {
        let font = FontSpec::parse("30px sans-serif").unwrap();
        let short = EstimatedTextMeasurer.measure_width("GDG", &font);
        let long = EstimatedTextMeasurer.measure_width("CodeCatalyst", &font);
        assert!((short - 3.0 * 30.0 * 0.55).abs() < 1e-4);
        assert!(long > short);
    }

    #[test]
    fn test_oversized_font_saturates() {
        let font = FontSpec::parse("bold 1e12px Figtree").unwrap();
        let texture = CaptionTexture::measure("TinkerHub", &font, &EstimatedTextMeasurer);
        assert_eq!(texture.width, u32::MAX);
        assert_eq!(texture.height, u32::MAX);
        assert!((texture.aspect() - 1.0).abs() < 1e-6);
    }
}
