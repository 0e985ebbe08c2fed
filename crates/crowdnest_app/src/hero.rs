//! Hero headline timeline

use std::fmt;

use crowdnest_animation::{FadePhase, TextFader, TextFaderConfig};
use serde::Serialize;

/// The fader's state at one point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaderSample {
    pub time_ms: u64,
    pub index: usize,
    pub text: String,
    pub fading_out: bool,
    pub opacity: f32,
}

impl fmt::Display for FaderSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = if self.fading_out { "fading-out" } else { "visible" };
        write!(
            f,
            "{:>7}ms  {:<10}  {:>5.2}  {}",
            self.time_ms, phase, self.opacity, self.text
        )
    }
}

/// Sample the fader every `step_ms` over `cycles` passes through the texts
pub fn fader_timeline(config: &TextFaderConfig, cycles: u32, step_ms: u32) -> Vec<FaderSample> {
    let mut fader = TextFader::new(config.clone());
    let slot_ms = u64::from(config.interval_ms) + u64::from(config.fade_ms);
    let total_ms = slot_ms * config.texts.len() as u64 * u64::from(cycles);
    let step_ms = u64::from(step_ms.max(1));

    let sample = |fader: &TextFader, time_ms: u64| FaderSample {
        time_ms,
        index: fader.index(),
        text: fader.display_text().to_string(),
        fading_out: fader.phase() == FadePhase::FadingOut,
        opacity: fader.opacity(),
    };

    let mut samples = vec![sample(&fader, 0)];
    let mut time_ms = 0;
    while time_ms + step_ms <= total_ms {
        fader.tick(step_ms as f32);
        time_ms += step_ms;
        samples.push(sample(&fader, time_ms));
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_visits_every_text() {
        let samples = fader_timeline(&TextFaderConfig::default(), 1, 100);
        // 3 texts * 1400ms, sampled every 100ms plus the start
        assert_eq!(samples.len(), 43);
        assert_eq!(samples[0].text, "Digitilized.");
        assert_eq!(samples[0].opacity, 1.0);

        let at = |ms: u64| samples.iter().find(|s| s.time_ms == ms).unwrap();
        assert!(!at(900).fading_out);
        assert!(at(1000).fading_out);
        assert_eq!(at(1400).text, "Simplified.");
        assert_eq!(at(2800).text, "Scalable.");
        assert_eq!(samples.last().unwrap().text, "Digitilized.");
    }

    #[test]
    fn test_no_texts_gives_a_single_empty_sample() {
        let config = TextFaderConfig {
            texts: Vec::new(),
            ..Default::default()
        };
        let samples = fader_timeline(&config, 5, 100);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].text, "");
        assert_eq!(samples[0].opacity, 0.0);
    }

    #[test]
    fn test_sample_display() {
        let sample = FaderSample {
            time_ms: 1200,
            index: 1,
            text: "Simplified.".into(),
            fading_out: true,
            opacity: 0.5,
        };
        assert_eq!(sample.to_string(), "   1200ms  fading-out   0.50  Simplified.");
    }
}
