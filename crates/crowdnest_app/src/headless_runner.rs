//! Scenario runner that drives a headless gallery.

use anyhow::Result;
use crowdnest_core::PointerKind;

use crate::config::CrowdnestConfig;
use crate::headless_assert::{
    evaluate_assert_covered, evaluate_assert_recycled, evaluate_assert_scroll,
    evaluate_assert_settled, evaluate_loop_lattice, AssertionResult,
};
use crate::headless_report::{GallerySummary, HeadlessReport};
use crate::headless_runtime::HeadlessRuntime;
use crate::headless_scenario::{HeadlessScenario, ScenarioStep};

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: HeadlessReport },
    Failed { report: HeadlessReport },
}

impl RunOutcome {
    pub fn report(&self) -> &HeadlessReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Execute scenario JSON against a gallery built from `config`.
pub fn run_scenario(input: &str, config: &CrowdnestConfig) -> Result<RunOutcome> {
    let scenario = HeadlessScenario::from_json(input)?;
    run_loaded_scenario(&scenario, config)
}

/// Execute a pre-loaded scenario.
///
/// Besides the explicit assertion steps, the loop lattice is checked every
/// `probe_every_frames` frames while ticking; a drift fails the step that
/// was running.
pub fn run_loaded_scenario(
    scenario: &HeadlessScenario,
    config: &CrowdnestConfig,
) -> Result<RunOutcome> {
    let runtime_cfg = config.headless;
    let probe_every = runtime_cfg.probe_every_frames.max(1);
    let mut runtime = HeadlessRuntime::mount(config.gallery.clone(), runtime_cfg)?;

    for (step_index, step) in scenario.steps.iter().enumerate() {
        tracing::debug!(step_index, ?step, "scenario step");
        let (assertion, result) = match *step {
            ScenarioStep::Resize { width, height } => {
                runtime.resize(width, height);
                continue;
            }
            ScenarioStep::PointerDown { x, y, touch } => {
                runtime.pointer_down(x, y, pointer_kind(touch));
                continue;
            }
            ScenarioStep::PointerMove { x, y, touch } => {
                runtime.pointer_move(x, y, pointer_kind(touch));
                continue;
            }
            ScenarioStep::PointerUp => {
                runtime.pointer_up();
                continue;
            }
            ScenarioStep::Drag { from, to, moves } => {
                drag(&mut runtime, from, to, moves);
                continue;
            }
            ScenarioStep::Wheel { delta } => {
                runtime.wheel(delta);
                continue;
            }
            ScenarioStep::Tick { frames } => {
                let tick_ms = runtime_cfg.tick_ms;
                let result = run_sampled_frames(&mut runtime, frames, probe_every, || tick_ms);
                ("loop_lattice", result)
            }
            ScenarioStep::Wait { ms } => {
                let frames = wait_frames(ms, runtime_cfg.tick_ms);
                let mut remaining_ms = ms;
                let result = run_sampled_frames(&mut runtime, frames, probe_every, || {
                    let step_ms = remaining_ms.min(runtime_cfg.tick_ms);
                    remaining_ms = remaining_ms.saturating_sub(step_ms);
                    step_ms
                });
                ("loop_lattice", result)
            }
            ScenarioStep::AssertScroll {
                current,
                target,
                items,
                tolerance,
            } => (
                "assert_scroll",
                evaluate_assert_scroll(&runtime.snapshot(), current, target, items, tolerance),
            ),
            ScenarioStep::AssertRecycled { min, max } => (
                "assert_recycled",
                evaluate_assert_recycled(&runtime.snapshot(), min, max),
            ),
            ScenarioStep::AssertCovered => (
                "assert_covered",
                evaluate_assert_covered(&runtime.snapshot()),
            ),
            ScenarioStep::AssertSettled { tolerance } => (
                "assert_settled",
                evaluate_assert_settled(&runtime.snapshot(), tolerance),
            ),
        };

        if let AssertionResult::Failed { code, message } = result {
            tracing::warn!(step_index, assertion, %code, %message, "scenario step failed");
            let report = HeadlessReport::failed(
                assertion,
                step_index,
                code,
                message,
                runtime.elapsed_frames(),
                runtime.elapsed_ms(),
                GallerySummary::from(&runtime.snapshot()),
            )
            .with_scenario(scenario.name.clone());
            return Ok(RunOutcome::Failed { report });
        }
    }

    let report = HeadlessReport::passed(
        runtime.elapsed_frames(),
        runtime.elapsed_ms(),
        GallerySummary::from(&runtime.snapshot()),
    )
    .with_scenario(scenario.name.clone());
    tracing::info!(
        frames = report.elapsed_frames,
        recycles = report.gallery.recycles,
        "scenario passed"
    );
    runtime.teardown();
    Ok(RunOutcome::Passed { report })
}

fn pointer_kind(touch: bool) -> PointerKind {
    if touch {
        PointerKind::Touch
    } else {
        PointerKind::Mouse
    }
}

fn drag(runtime: &mut HeadlessRuntime, from: f32, to: f32, moves: u32) {
    let moves = moves.max(1);
    let y = runtime.config().height as f32 / 2.0;
    runtime.pointer_down(from, y, PointerKind::Mouse);
    for step in 1..=moves {
        let x = from + (to - from) * step as f32 / moves as f32;
        runtime.pointer_move(x, y, PointerKind::Mouse);
    }
    runtime.pointer_up();
}

fn run_sampled_frames<A>(
    runtime: &mut HeadlessRuntime,
    frames: u32,
    probe_every: u32,
    mut advance_ms: A,
) -> AssertionResult
where
    A: FnMut() -> u64,
{
    for sampled in 1..=frames {
        runtime.frame(advance_ms());
        if sampled % probe_every == 0 || sampled == frames {
            let result = evaluate_loop_lattice(&runtime.snapshot());
            if !result.is_passed() {
                return result;
            }
        }
    }
    AssertionResult::Passed
}

fn wait_frames(wait_ms: u64, tick_ms: u64) -> u32 {
    if wait_ms == 0 {
        return 0;
    }
    let tick = tick_ms.max(1);
    let frames = wait_ms.saturating_add(tick.saturating_sub(1)) / tick;
    frames.min(u32::MAX as u64) as u32
}
