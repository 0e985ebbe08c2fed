//! Registration submissions from JSON files
//!
//! A submission carries the form's text fields plus optional upload paths,
//! resolved relative to the submission file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use crowdnest_forms::{
    FieldErrors, Registration, RegistrationDraft, RegistrationForm, UploadFile, UploadSlot,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(flatten)]
    pub draft: RegistrationDraft,
    #[serde(default)]
    pub organization_logo: Option<PathBuf>,
    #[serde(default)]
    pub event_banner: Option<PathBuf>,
}

impl Submission {
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).context("Failed to parse registration")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&raw)
    }
}

/// Outcome printed by `crowdnest register`
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReport {
    pub valid: bool,
    pub errors: FieldErrors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration: Option<Registration>,
}

/// Fill a form from `submission` the way a user would, then submit it.
///
/// Upload rejections are reported alongside the validation errors.
pub fn check_submission(submission: &Submission, base_dir: &Path) -> Result<SubmissionReport> {
    let mut form = RegistrationForm::from_draft(submission.draft.clone());

    let uploads = [
        (UploadSlot::OrganizationLogo, &submission.organization_logo),
        (UploadSlot::EventBanner, &submission.event_banner),
    ];
    let mut rejected = Vec::new();
    for (slot, path) in uploads {
        let Some(path) = path else {
            continue;
        };
        let file = UploadFile::from_path(base_dir.join(path))?;
        if !form.upload_file(slot, &file) {
            rejected.push(slot.field());
        }
    }
    let upload_errors: Vec<_> = rejected
        .into_iter()
        .filter_map(|field| Some((field, form.errors().get(field)?.to_string())))
        .collect();

    let registration = form.submit();
    let mut errors = form.errors().clone();
    for (field, message) in upload_errors {
        errors.insert(field, message);
    }
    let valid = registration.is_some() && errors.is_empty();

    Ok(SubmissionReport {
        valid,
        errors,
        registration: registration.filter(|_| valid),
    })
}

/// Load a submission file and check it
pub fn check_submission_file(path: &Path) -> Result<SubmissionReport> {
    let submission = Submission::from_path(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    check_submission(&submission, base_dir)
}
