//! Report output model for headless gallery runs.

use std::io::Write;
use std::path::{Component, Path};

use anyhow::{bail, Context, Result};
use crowdnest_gallery::GallerySnapshot;
use serde::{Deserialize, Serialize};

/// Report status for a headless run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Failed,
}

/// Gallery state at the end of a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GallerySummary {
    pub current: f32,
    pub target: f32,
    pub item_width: f32,
    pub loop_width: f32,
    pub frames: u64,
    pub recycles: u64,
    pub images_loaded: u32,
    pub images_failed: u32,
}

impl From<&GallerySnapshot> for GallerySummary {
    fn from(snapshot: &GallerySnapshot) -> Self {
        Self {
            current: snapshot.scroll.current,
            target: snapshot.scroll.target,
            item_width: snapshot.layout.item_width,
            loop_width: snapshot.layout.loop_width(),
            frames: snapshot.stats.frames,
            recycles: snapshot.stats.recycles,
            images_loaded: snapshot.stats.images_loaded,
            images_failed: snapshot.stats.images_failed,
        }
    }
}

/// Machine-readable result of a headless run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlessReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    pub status: ReportStatus,
    pub failed_step_index: Option<usize>,
    pub assertion: Option<String>,
    pub code: Option<String>,
    pub message: Option<String>,
    pub elapsed_frames: u64,
    pub elapsed_ms: u64,
    pub gallery: GallerySummary,
}

impl HeadlessReport {
    pub fn passed(elapsed_frames: u64, elapsed_ms: u64, gallery: GallerySummary) -> Self {
        Self {
            scenario: None,
            status: ReportStatus::Passed,
            failed_step_index: None,
            assertion: None,
            code: None,
            message: None,
            elapsed_frames,
            elapsed_ms,
            gallery,
        }
    }

    pub fn failed(
        assertion: &str,
        failed_step_index: usize,
        code: String,
        message: String,
        elapsed_frames: u64,
        elapsed_ms: u64,
        gallery: GallerySummary,
    ) -> Self {
        Self {
            scenario: None,
            status: ReportStatus::Failed,
            failed_step_index: Some(failed_step_index),
            assertion: Some(assertion.to_string()),
            code: Some(code),
            message: Some(message),
            elapsed_frames,
            elapsed_ms,
            gallery,
        }
    }

    pub fn with_scenario(mut self, name: Option<String>) -> Self {
        self.scenario = name;
        self
    }

    pub fn is_passed(&self) -> bool {
        self.status == ReportStatus::Passed
    }

    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        if path.is_absolute() || path.has_root() {
            bail!("report path must be relative and must not start with a separator");
        }
        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            bail!("report path cannot contain '..' or drive prefixes");
        }
        let payload = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }
        std::fs::write(path, payload)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        writer.write_all(payload.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_escaping_paths() {
        let report = HeadlessReport::passed(1, 16, GallerySummary::default());
        assert!(report.write_to_path(Path::new("/tmp/report.json")).is_err());
        assert!(report.write_to_path(Path::new("../report.json")).is_err());
    }

    #[test]
    fn test_failed_report_json() {
        let report = HeadlessReport::failed(
            "assert_covered",
            3,
            "viewport_hole".into(),
            "no item at x = 1.000".into(),
            10,
            160,
            GallerySummary::default(),
        )
        .with_scenario(Some("holes".into()));

        let mut out = Vec::new();
        report.write_to_writer(&mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["scenario"], "holes");
        assert_eq!(json["failed_step_index"], 3);
        assert_eq!(json["code"], "viewport_hole");
        assert_eq!(json["gallery"]["recycles"], 0);
    }
}
