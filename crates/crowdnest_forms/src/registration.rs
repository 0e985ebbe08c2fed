//! Event registration form
//!
//! [`RegistrationForm`] holds the raw text the user typed, the accepted
//! uploads and the current per-field error messages. Errors are replaced
//! wholesale by [`RegistrationForm::validate`] and cleared one field at a
//! time as the user edits.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{FormError, Result};
use crate::field::{Field, UploadSlot};
use crate::upload::{UploadFile, UploadedImage};

/// Date format of the date inputs
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// Event mode
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventMode {
    #[default]
    InPerson,
    Virtual,
    Hybrid,
}

impl EventMode {
    pub fn as_str(self) -> &'static str {
        match self {
            EventMode::InPerson => "in-person",
            EventMode::Virtual => "virtual",
            EventMode::Hybrid => "hybrid",
        }
    }
}

impl FromStr for EventMode {
    type Err = FormError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "in-person" => Ok(EventMode::InPerson),
            "virtual" => Ok(EventMode::Virtual),
            "hybrid" => Ok(EventMode::Hybrid),
            other => Err(FormError::UnknownMode(other.to_string())),
        }
    }
}

// ============================================================================
// Draft and field errors
// ============================================================================

/// The text inputs as typed, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationDraft {
    pub organizer: String,
    pub event_name: String,
    pub description: String,
    pub location_name: String,
    pub mode: EventMode,
    pub event_date: String,
    pub registration_deadline: String,
}

/// Error message per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(FxHashMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Errors in form order
    pub fn sorted(&self) -> BTreeMap<Field, &str> {
        self.0
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
            .collect()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.sorted().serialize(serializer)
    }
}

/// A submission that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub organizer: String,
    pub event_name: String,
    pub description: String,
    pub location_name: String,
    pub mode: EventMode,
    pub event_date: NaiveDate,
    pub registration_deadline: NaiveDate,
    pub organization_logo: Option<UploadedImage>,
    pub event_banner: Option<UploadedImage>,
}

// ============================================================================
// Form
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    draft: RegistrationDraft,
    organization_logo: Option<UploadedImage>,
    event_banner: Option<UploadedImage>,
    errors: FieldErrors,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_draft(draft: RegistrationDraft) -> Self {
        Self {
            draft,
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn upload(&self, slot: UploadSlot) -> Option<&UploadedImage> {
        match slot {
            UploadSlot::OrganizationLogo => self.organization_logo.as_ref(),
            UploadSlot::EventBanner => self.event_banner.as_ref(),
        }
    }

    /// Preview data URI of an accepted upload
    pub fn preview(&self, slot: UploadSlot) -> Option<&str> {
        self.upload(slot).map(|image| image.preview.as_str())
    }

    /// Update a text input or the mode select, clearing its error
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        let draft = &mut self.draft;
        match field {
            Field::Organizer => draft.organizer = value,
            Field::EventName => draft.event_name = value,
            Field::Description => draft.description = value,
            Field::LocationName => draft.location_name = value,
            Field::Mode => draft.mode = value.parse()?,
            Field::EventDate => draft.event_date = value,
            Field::RegistrationDeadline => draft.registration_deadline = value,
            Field::OrganizationLogo | Field::EventBanner => {
                return Err(FormError::NotTextField(field))
            }
        }
        self.errors.clear(field);
        Ok(())
    }

    /// Offer a file for an upload slot.
    ///
    /// A rejected file leaves the previous upload in place and records the
    /// reason as the field error. Returns whether the file was accepted.
    pub fn upload_file(&mut self, slot: UploadSlot, file: &UploadFile) -> bool {
        let field = slot.field();
        match UploadedImage::accept(file) {
            Ok(image) => {
                tracing::debug!(%field, name = %image.name, size = image.size, "upload accepted");
                *self.slot_mut(slot) = Some(image);
                self.errors.clear(field);
                true
            }
            Err(error) => {
                tracing::debug!(%field, name = %file.name, %error, "upload rejected");
                self.errors.insert(field, error.to_string());
                false
            }
        }
    }

    /// Drop the upload and its preview
    pub fn remove_file(&mut self, slot: UploadSlot) {
        *self.slot_mut(slot) = None;
    }

    fn slot_mut(&mut self, slot: UploadSlot) -> &mut Option<UploadedImage> {
        match slot {
            UploadSlot::OrganizationLogo => &mut self.organization_logo,
            UploadSlot::EventBanner => &mut self.event_banner,
        }
    }

    /// Recompute every field error. Returns whether the form is valid.
    pub fn validate(&mut self) -> bool {
        self.errors = check_draft(&self.draft);
        self.errors.is_empty()
    }

    /// Validate and, when valid, produce the registration
    pub fn submit(&mut self) -> Option<Registration> {
        if !self.validate() {
            tracing::debug!(errors = self.errors.len(), "registration rejected");
            return None;
        }
        let draft = &self.draft;
        let registration = Registration {
            organizer: draft.organizer.trim().to_string(),
            event_name: draft.event_name.trim().to_string(),
            description: draft.description.trim().to_string(),
            location_name: draft.location_name.trim().to_string(),
            mode: draft.mode,
            event_date: parse_date(&draft.event_date)?,
            registration_deadline: parse_date(&draft.registration_deadline)?,
            organization_logo: self.organization_logo.clone(),
            event_banner: self.event_banner.clone(),
        };
        tracing::info!(
            event = %registration.event_name,
            date = %registration.event_date,
            "event registered"
        );
        Some(registration)
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

fn check_draft(draft: &RegistrationDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let required = [
        (Field::Organizer, &draft.organizer, "Organizer name is required"),
        (Field::EventName, &draft.event_name, "Event name is required"),
        (Field::Description, &draft.description, "Description is required"),
        (Field::LocationName, &draft.location_name, "Location is required"),
        (Field::EventDate, &draft.event_date, "Event date is required"),
        (
            Field::RegistrationDeadline,
            &draft.registration_deadline,
            "Registration deadline is required",
        ),
    ];
    for (field, value, message) in required {
        if value.trim().is_empty() {
            errors.insert(field, message);
        }
    }

    let mut date = |field: Field, value: &str| {
        if value.trim().is_empty() {
            return None;
        }
        let parsed = parse_date(value);
        if parsed.is_none() {
            errors.insert(field, "Enter a valid date (YYYY-MM-DD)");
        }
        parsed
    };
    let event_date = date(Field::EventDate, &draft.event_date);
    let deadline = date(Field::RegistrationDeadline, &draft.registration_deadline);

    if let (Some(event_date), Some(deadline)) = (event_date, deadline) {
        if deadline >= event_date {
            errors.insert(
                Field::RegistrationDeadline,
                "Registration deadline must be before event date",
            );
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegistrationDraft {
        RegistrationDraft {
            organizer: "TinkerHub".into(),
            event_name: "Build Night".into(),
            description: "Ship something small".into(),
            location_name: "Kochi".into(),
            mode: EventMode::Hybrid,
            event_date: "2026-11-20".into(),
            registration_deadline: "2026-11-13".into(),
        }
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let mut form = RegistrationForm::new();
        assert!(!form.validate());

        let errors = form.errors();
        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get(Field::Organizer), Some("Organizer name is required"));
        assert_eq!(errors.get(Field::LocationName), Some("Location is required"));
        assert_eq!(
            errors.get(Field::RegistrationDeadline),
            Some("Registration deadline is required")
        );
        assert!(!errors.contains(Field::Mode));
    }

    #[test]
    fn test_whitespace_only_text_is_missing() {
        let mut form = RegistrationForm::from_draft(RegistrationDraft {
            event_name: "   ".into(),
            ..filled()
        });
        assert!(!form.validate());
        assert_eq!(form.errors().get(Field::EventName), Some("Event name is required"));
        assert_eq!(form.errors().len(), 1);
    }

    #[test]
    fn test_deadline_must_precede_event() {
        for deadline in ["2026-11-20", "2026-12-01"] {
            let mut form = RegistrationForm::from_draft(RegistrationDraft {
                registration_deadline: deadline.into(),
                ..filled()
            });
            assert!(!form.validate(), "{deadline}");
            assert_eq!(
                form.errors().get(Field::RegistrationDeadline),
                Some("Registration deadline must be before event date")
            );
        }
    }

    #[test]
    fn test_unparseable_date_is_reported() {
        let mut form = RegistrationForm::from_draft(RegistrationDraft {
            event_date: "20 Nov".into(),
            ..filled()
        });
        assert!(!form.validate());
        assert_eq!(
            form.errors().get(Field::EventDate),
            Some("Enter a valid date (YYYY-MM-DD)")
        );
        assert!(!form.errors().contains(Field::RegistrationDeadline));
    }

    #[test]
    fn test_editing_clears_only_that_error() {
        let mut form = RegistrationForm::new();
        form.validate();
        form.set_field(Field::Organizer, "IEDC").unwrap();

        assert!(!form.errors().contains(Field::Organizer));
        assert!(form.errors().contains(Field::EventName));
        assert_eq!(form.draft().organizer, "IEDC");
    }

    #[test]
    fn test_mode_is_parsed() {
        let mut form = RegistrationForm::new();
        assert_eq!(form.draft().mode, EventMode::InPerson);
        form.set_field(Field::Mode, "virtual").unwrap();
        assert_eq!(form.draft().mode, EventMode::Virtual);

        assert!(matches!(
            form.set_field(Field::Mode, "remote"),
            Err(FormError::UnknownMode(_))
        ));
        assert!(matches!(
            form.set_field(Field::EventBanner, "x"),
            Err(FormError::NotTextField(Field::EventBanner))
        ));
    }

    #[test]
    fn test_submit_trims_and_parses() {
        let mut form = RegistrationForm::from_draft(RegistrationDraft {
            organizer: "  GDG ".into(),
            ..filled()
        });
        let registration = form.submit().unwrap();
        assert_eq!(registration.organizer, "GDG");
        assert_eq!(registration.event_date, NaiveDate::from_ymd_opt(2026, 11, 20).unwrap());
        assert_eq!(registration.mode, EventMode::Hybrid);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_upload_replaces_and_removes() {
        let mut form = RegistrationForm::new();
        let png = UploadFile::new("logo.png", "image/png", b"png".to_vec());
        assert!(form.upload_file(UploadSlot::OrganizationLogo, &png));
        assert_eq!(
            form.preview(UploadSlot::OrganizationLogo),
            Some("data:image/png;base64,cG5n")
        );

        let svg = UploadFile::new("logo.svg", "image/svg+xml", b"<svg/>".to_vec());
        assert!(!form.upload_file(UploadSlot::OrganizationLogo, &svg));
        assert_eq!(form.upload(UploadSlot::OrganizationLogo).unwrap().name, "logo.png");
        assert!(form.errors().contains(Field::OrganizationLogo));

        assert!(form.upload_file(UploadSlot::OrganizationLogo, &png));
        assert!(!form.errors().contains(Field::OrganizationLogo));

        form.remove_file(UploadSlot::OrganizationLogo);
        assert!(form.upload(UploadSlot::OrganizationLogo).is_none());
        assert!(form.preview(UploadSlot::OrganizationLogo).is_none());
    }

    #[test]
    fn test_field_errors_serialize_in_form_order() {
        let mut form = RegistrationForm::from_draft(RegistrationDraft {
            organizer: String::new(),
            registration_deadline: "2027-01-01".into(),
            ..filled()
        });
        form.validate();
        let json = serde_json::to_string(form.errors()).unwrap();
        assert_eq!(
            json,
            r#"{"organizer":"Organizer name is required","registrationDeadline":"Registration deadline must be before event date"}"#
        );
    }
}
