//! Headline text fader
//!
//! Cycles through a list of texts. Each text stays fully visible for the
//! configured interval, fades out, and is replaced by the next text which
//! fades back in. The very first text appears without a fade.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;

/// Visibility phase of the current text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase {
    /// Text is shown (fading in during the first `fade_ms` after a change)
    Visible,
    /// Text is fading out ahead of the next change
    FadingOut,
}

/// Text fader configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFaderConfig {
    /// Texts to cycle through
    #[serde(default = "default_texts")]
    pub texts: Vec<String>,
    /// How long each text stays visible before fading out
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u32,
    /// Duration of the fade-out (and the following fade-in)
    #[serde(default = "default_fade_ms")]
    pub fade_ms: u32,
    /// Opacity curve applied to fades
    #[serde(default = "default_easing")]
    pub easing: Easing,
}

fn default_texts() -> Vec<String> {
    ["Digitilized.", "Simplified.", "Scalable."]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_interval_ms() -> u32 {
    1000
}

fn default_fade_ms() -> u32 {
    400
}

fn default_easing() -> Easing {
    Easing::TAILWIND_IN_OUT
}

impl Default for TextFaderConfig {
    fn default() -> Self {
        Self {
            texts: default_texts(),
            interval_ms: default_interval_ms(),
            fade_ms: default_fade_ms(),
            easing: default_easing(),
        }
    }
}

/// Time-driven text cycle
#[derive(Debug, Clone)]
pub struct TextFader {
    config: TextFaderConfig,
    index: usize,
    /// Time spent on the current text
    elapsed_ms: f32,
    /// Completed text changes
    changes: u64,
}

impl TextFader {
    pub fn new(config: TextFaderConfig) -> Self {
        Self {
            config,
            index: 0,
            elapsed_ms: 0.0,
            changes: 0,
        }
    }

    /// Length of one full text slot (visible + fade out)
    fn cycle_ms(&self) -> f32 {
        (self.config.interval_ms + self.config.fade_ms) as f32
    }

    /// Advance by `dt_ms`. Returns true if the displayed text changed.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if self.config.texts.is_empty() || dt_ms.is_nan() || dt_ms <= 0.0 {
            return false;
        }

        let cycle = self.cycle_ms();
        self.elapsed_ms += dt_ms;

        if cycle <= 0.0 {
            self.advance();
            self.elapsed_ms = 0.0;
            return true;
        }

        let mut changed = false;
        while self.elapsed_ms >= cycle {
            self.elapsed_ms -= cycle;
            self.advance();
            changed = true;
        }
        changed
    }

    fn advance(&mut self) {
        self.index = (self.index + 1) % self.config.texts.len();
        self.changes += 1;
        tracing::trace!(index = self.index, "text fader advanced");
    }

    /// Text currently on screen (empty when there are no texts)
    pub fn display_text(&self) -> &str {
        self.config
            .texts
            .get(self.index)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> FadePhase {
        if self.elapsed_ms < self.config.interval_ms as f32 {
            FadePhase::Visible
        } else {
            FadePhase::FadingOut
        }
    }

    /// Eased opacity of the current text in [0, 1]
    pub fn opacity(&self) -> f32 {
        if self.config.texts.is_empty() {
            return 0.0;
        }
        let fade = self.config.fade_ms as f32;
        match self.phase() {
            FadePhase::Visible => {
                if self.changes == 0 || fade <= 0.0 || self.elapsed_ms >= fade {
                    1.0
                } else {
                    self.config.easing.apply(self.elapsed_ms / fade)
                }
            }
            FadePhase::FadingOut => {
                if fade <= 0.0 {
                    return 0.0;
                }
                let progress = (self.elapsed_ms - self.config.interval_ms as f32) / fade;
                1.0 - self.config.easing.apply(progress)
            }
        }
    }

    /// Milliseconds until the next text change
    pub fn time_to_change_ms(&self) -> f32 {
        (self.cycle_ms() - self.elapsed_ms).max(0.0)
    }
}

impl Default for TextFader {
    fn default() -> Self {
        Self::new(TextFaderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_fader() -> TextFader {
        TextFader::new(TextFaderConfig {
            easing: Easing::Linear,
            ..Default::default()
        })
    }

    #[test]
    fn test_first_text_shows_immediately() {
        let fader = TextFader::default();
        assert_eq!(fader.display_text(), "Digitilized.");
        assert_eq!(fader.phase(), FadePhase::Visible);
        assert_eq!(fader.opacity(), 1.0);
    }

    #[test]
    fn test_fade_out_then_change() {
        let mut fader = linear_fader();

        assert!(!fader.tick(1000.0));
        assert_eq!(fader.phase(), FadePhase::FadingOut);
        assert_eq!(fader.opacity(), 1.0);

        fader.tick(200.0);
        assert!((fader.opacity() - 0.5).abs() < 1e-6);
        assert_eq!(fader.display_text(), "Digitilized.");

        assert!(fader.tick(200.0));
        assert_eq!(fader.display_text(), "Simplified.");
        assert_eq!(fader.phase(), FadePhase::Visible);
        assert_eq!(fader.opacity(), 0.0);

        fader.tick(100.0);
        assert!((fader.opacity() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_cycle_wraps_around() {
        let mut fader = TextFader::default();
        for _ in 0..3 {
            fader.tick(1400.0);
        }
        assert_eq!(fader.index(), 0);
        assert_eq!(fader.display_text(), "Digitilized.");
    }

    #[test]
    fn test_large_step_skips_multiple_texts() {
        let mut fader = TextFader::default();
        assert!(fader.tick(2810.0));
        assert_eq!(fader.index(), 2);
        assert!((fader.time_to_change_ms() - 1390.0).abs() < 1e-3);
    }

    #[test]
    fn test_empty_texts_never_cycle() {
        let mut fader = TextFader::new(TextFaderConfig {
            texts: Vec::new(),
            ..Default::default()
        });
        assert!(!fader.tick(10_000.0));
        assert_eq!(fader.display_text(), "");
        assert_eq!(fader.opacity(), 0.0);
    }
}
