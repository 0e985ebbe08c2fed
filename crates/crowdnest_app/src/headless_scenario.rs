//! Scenario definition for headless gallery runs.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Sequence of headless steps.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlessScenario {
    #[serde(default)]
    pub name: Option<String>,
    pub steps: Vec<ScenarioStep>,
}

impl HeadlessScenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).context("Failed to parse scenario")
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&raw)
    }

    /// Whether any step checks gallery state
    pub fn has_assertions(&self) -> bool {
        self.steps.iter().any(ScenarioStep::is_assertion)
    }
}

/// One scenario step. Coordinates are in CSS pixels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    Resize {
        width: u32,
        height: u32,
    },
    PointerDown {
        x: f32,
        #[serde(default)]
        y: f32,
        #[serde(default)]
        touch: bool,
    },
    PointerMove {
        x: f32,
        #[serde(default)]
        y: f32,
        #[serde(default)]
        touch: bool,
    },
    PointerUp,
    /// Press at `from`, move to `to` in `moves` steps, release
    Drag {
        from: f32,
        to: f32,
        #[serde(default = "default_drag_moves")]
        moves: u32,
    },
    Wheel {
        delta: f32,
    },
    Tick {
        frames: u32,
    },
    Wait {
        ms: u64,
    },
    /// Compare scroll values; `items` is `current` in item widths
    AssertScroll {
        #[serde(default)]
        current: Option<f32>,
        #[serde(default)]
        target: Option<f32>,
        #[serde(default)]
        items: Option<f32>,
        #[serde(default = "default_tolerance")]
        tolerance: f32,
    },
    /// Bounds on the total number of recycles so far
    AssertRecycled {
        #[serde(default)]
        min: Option<u64>,
        #[serde(default)]
        max: Option<u64>,
    },
    /// Every item slot inside the viewport is occupied
    AssertCovered,
    AssertSettled {
        #[serde(default = "default_tolerance")]
        tolerance: f32,
    },
}

fn default_drag_moves() -> u32 {
    4
}

fn default_tolerance() -> f32 {
    1e-2
}

impl ScenarioStep {
    pub fn is_assertion(&self) -> bool {
        matches!(
            self,
            ScenarioStep::AssertScroll { .. }
                | ScenarioStep::AssertRecycled { .. }
                | ScenarioStep::AssertCovered
                | ScenarioStep::AssertSettled { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_tagged_steps() {
        let scenario = HeadlessScenario::from_json(
            r#"{
                "name": "drag",
                "steps": [
                    {"type": "resize", "width": 800, "height": 600},
                    {"type": "drag", "from": 500, "to": 300},
                    {"type": "pointer_down", "x": 10, "touch": true},
                    {"type": "pointer_up"},
                    {"type": "wait", "ms": 250},
                    {"type": "assert_scroll", "items": 1},
                    {"type": "assert_covered"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(scenario.name.as_deref(), Some("drag"));
        assert_eq!(scenario.steps.len(), 7);
        assert_eq!(
            scenario.steps[1],
            ScenarioStep::Drag {
                from: 500.0,
                to: 300.0,
                moves: 4
            }
        );
        assert_eq!(
            scenario.steps[2],
            ScenarioStep::PointerDown {
                x: 10.0,
                y: 0.0,
                touch: true
            }
        );
        assert!(matches!(
            scenario.steps[5],
            ScenarioStep::AssertScroll { items: Some(i), tolerance, .. } if i == 1.0 && tolerance == 1e-2
        ));
        assert!(scenario.has_assertions());
    }

    #[test]
    fn test_unknown_step_is_an_error() {
        let error = HeadlessScenario::from_json(r#"{"steps": [{"type": "teleport"}]}"#).unwrap_err();
        assert!(error.to_string().contains("Failed to parse scenario"));
    }
}
