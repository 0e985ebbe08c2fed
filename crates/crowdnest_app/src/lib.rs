//! Crowdnest application layer
//!
//! Configuration loading and the tooling behind the `crowdnest` binary:
//!
//! - **Headless runs**: mount the gallery without a window, replay a JSON
//!   scenario of pointer, wheel and resize input, and report the outcome
//! - **Registration checks**: validate a registration submission file
//! - **Hero timeline**: sample the headline fader over time

pub mod config;
pub mod headless_assert;
pub mod headless_report;
pub mod headless_runner;
pub mod headless_runtime;
pub mod headless_scenario;
pub mod hero;
pub mod register;

pub use config::{CrowdnestConfig, CONFIG_FILE_NAME};
pub use headless_report::{GallerySummary, HeadlessReport, ReportStatus};
pub use headless_runner::{run_loaded_scenario, run_scenario, RunOutcome};
pub use headless_runtime::{HeadlessContext, HeadlessRunConfig, HeadlessRuntime};
pub use headless_scenario::{HeadlessScenario, ScenarioStep};
pub use hero::{fader_timeline, FaderSample};
pub use register::{check_submission, check_submission_file, Submission, SubmissionReport};
