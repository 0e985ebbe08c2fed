//! Crowdnest Forms
//!
//! Client-side model of the event registration form: text inputs, the
//! event mode select, two image uploads with previews, and the validation
//! rules applied on submit.
//!
//! ```rust
//! use crowdnest_forms::{Field, RegistrationForm};
//!
//! let mut form = RegistrationForm::new();
//! form.set_field(Field::EventDate, "2026-03-01")?;
//! form.set_field(Field::RegistrationDeadline, "2026-03-01")?;
//! assert!(!form.validate());
//! assert_eq!(
//!     form.errors().get(Field::RegistrationDeadline),
//!     Some("Registration deadline must be before event date"),
//! );
//! # Ok::<(), crowdnest_forms::FormError>(())
//! ```

pub mod error;
pub mod field;
pub mod registration;
pub mod upload;

pub use error::{FormError, Result};
pub use field::{Field, UploadSlot};
pub use registration::{
    EventMode, FieldErrors, Registration, RegistrationDraft, RegistrationForm, DATE_FORMAT,
};
pub use upload::{UploadFile, UploadedImage, ACCEPTED_MIME_TYPES, MAX_UPLOAD_BYTES};
