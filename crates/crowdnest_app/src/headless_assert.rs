//! Assertion helpers for headless gallery runs.

use crowdnest_gallery::GallerySnapshot;

/// Positions closer than this count as the same slot
const POSITION_EPSILON: f32 = 1e-3;

/// Assertion result with structured failure details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed { code: String, message: String },
}

impl AssertionResult {
    fn failed(code: &str, message: String) -> Self {
        AssertionResult::Failed {
            code: code.to_string(),
            message,
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, AssertionResult::Passed)
    }
}

fn check_value(name: &str, actual: f32, expected: Option<f32>, tolerance: f32) -> Option<String> {
    let expected = expected?;
    ((actual - expected).abs() > tolerance)
        .then(|| format!("{name}: expected {expected} ± {tolerance}, got {actual}"))
}

pub fn evaluate_assert_scroll(
    snapshot: &GallerySnapshot,
    current: Option<f32>,
    target: Option<f32>,
    items: Option<f32>,
    tolerance: f32,
) -> AssertionResult {
    let scroll = &snapshot.scroll;
    let item_width = snapshot.layout.item_width;
    let failures: Vec<String> = [
        check_value("current", scroll.current, current, tolerance),
        check_value("target", scroll.target, target, tolerance),
        check_value(
            "current (item widths)",
            if item_width > 0.0 {
                scroll.current / item_width
            } else {
                0.0
            },
            items,
            tolerance,
        ),
    ]
    .into_iter()
    .flatten()
    .collect();

    if failures.is_empty() {
        AssertionResult::Passed
    } else {
        AssertionResult::failed("scroll_mismatch", failures.join("; "))
    }
}

pub fn evaluate_assert_recycled(
    snapshot: &GallerySnapshot,
    min: Option<u64>,
    max: Option<u64>,
) -> AssertionResult {
    let recycles = snapshot.stats.recycles;
    if min.is_some_and(|min| recycles < min) || max.is_some_and(|max| recycles > max) {
        let range = match (min, max) {
            (Some(min), Some(max)) => format!("{min}..={max}"),
            (Some(min), None) => format!(">= {min}"),
            (None, max) => format!("<= {}", max.unwrap_or_default()),
        };
        return AssertionResult::failed(
            "recycle_count",
            format!("expected {range} recycles, got {recycles}"),
        );
    }
    AssertionResult::Passed
}

pub fn evaluate_assert_settled(snapshot: &GallerySnapshot, tolerance: f32) -> AssertionResult {
    if snapshot.scroll.is_settled(tolerance) {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "not_settled",
            format!(
                "current {} is still moving towards {}",
                snapshot.scroll.current, snapshot.scroll.target
            ),
        )
    }
}

/// Every rendered position sits on `base - current + k * loop_width`
pub fn evaluate_loop_lattice(snapshot: &GallerySnapshot) -> AssertionResult {
    let drift = snapshot.max_loop_drift();
    if drift < POSITION_EPSILON {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "loop_drift",
            format!("an item is {drift} off the loop lattice"),
        )
    }
}

/// Every slot `k * item_width - current` within the viewport has an item
pub fn evaluate_assert_covered(snapshot: &GallerySnapshot) -> AssertionResult {
    let item_width = snapshot.layout.item_width;
    let half = snapshot.viewport.half_width();
    if item_width <= 0.0 || half <= 0.0 {
        return AssertionResult::Passed;
    }
    let current = snapshot.scroll.current;
    let first = ((current - half) / item_width).ceil() as i64;
    let last = ((current + half) / item_width).floor() as i64;

    let missing: Vec<String> = (first..=last)
        .map(|k| k as f32 * item_width - current)
        .filter(|slot| {
            !snapshot
                .media
                .iter()
                .any(|media| (media.position - slot).abs() < POSITION_EPSILON)
        })
        .map(|slot| format!("{slot:.3}"))
        .collect();

    if missing.is_empty() {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "viewport_hole",
            format!("no item at x = {} (current {current})", missing.join(", ")),
        )
    }
}
