//! Registration form walkthrough
//!
//! Drives the form the way a user does: submit empty, fix fields one by
//! one, attach uploads from disk, then submit. Verifies:
//! - errors appear on submit and disappear as fields are edited
//! - upload rejections keep the previous file
//! - the accepted registration serializes with parsed dates

use crowdnest_forms::{
    EventMode, Field, RegistrationDraft, RegistrationForm, UploadFile, UploadSlot,
    MAX_UPLOAD_BYTES,
};

#[test]
fn test_fix_errors_then_submit() {
    let mut form = RegistrationForm::new();
    assert!(form.submit().is_none());
    assert_eq!(form.errors().len(), 6);

    let inputs = [
        (Field::Organizer, "IEEE SB"),
        (Field::EventName, "Signal Day"),
        (Field::Description, "Talks and demos"),
        (Field::LocationName, "Main auditorium"),
        (Field::Mode, "in-person"),
        (Field::EventDate, "2026-09-10"),
        (Field::RegistrationDeadline, "2026-09-10"),
    ];
    for (field, value) in inputs {
        form.set_field(field, value).unwrap();
        assert!(!form.errors().contains(field));
    }
    assert!(form.errors().is_empty());

    // Same-day deadline is rejected on submit
    assert!(form.submit().is_none());
    assert_eq!(form.errors().len(), 1);

    form.set_field(Field::RegistrationDeadline, "2026-09-01").unwrap();
    let registration = form.submit().expect("valid form");
    assert_eq!(registration.mode, EventMode::InPerson);

    let json = serde_json::to_value(&registration).unwrap();
    assert_eq!(json["eventDate"], "2026-09-10");
    assert_eq!(json["registrationDeadline"], "2026-09-01");
    assert_eq!(json["mode"], "in-person");
    assert!(json["organizationLogo"].is_null());
}

#[test]
fn test_uploads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let logo = dir.path().join("logo.png");
    let huge = dir.path().join("banner.gif");
    let text = dir.path().join("notes.txt");
    std::fs::write(&logo, b"\x89PNG").unwrap();
    std::fs::write(&huge, vec![0u8; MAX_UPLOAD_BYTES as usize + 10]).unwrap();
    std::fs::write(&text, b"hello").unwrap();

    let mut form = RegistrationForm::from_draft(RegistrationDraft {
        organizer: "Core.ai".into(),
        event_name: "Model Night".into(),
        description: "Evals".into(),
        location_name: "Online".into(),
        mode: EventMode::Virtual,
        event_date: "2026-12-05".into(),
        registration_deadline: "2026-11-30".into(),
    });

    assert!(form.upload_file(UploadSlot::OrganizationLogo, &UploadFile::from_path(&logo).unwrap()));
    assert!(!form.upload_file(UploadSlot::EventBanner, &UploadFile::from_path(&huge).unwrap()));
    assert_eq!(
        form.errors().get(Field::EventBanner),
        Some("File size must be less than 5MB")
    );
    assert!(!form.upload_file(UploadSlot::EventBanner, &UploadFile::from_path(&text).unwrap()));
    assert_eq!(
        form.errors().get(Field::EventBanner),
        Some("Please upload a valid image file (JPG, PNG, or GIF)")
    );

    // Submitting recomputes errors from the text fields only
    let registration = form.submit().expect("valid form");
    assert_eq!(registration.organization_logo.unwrap().mime, "image/png");
    assert!(registration.event_banner.is_none());
    assert!(form.errors().is_empty());
}
