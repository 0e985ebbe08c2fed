//! Form field names

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// A field of the registration form, named as in submitted JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Organizer,
    EventName,
    Description,
    LocationName,
    Mode,
    EventDate,
    RegistrationDeadline,
    OrganizationLogo,
    EventBanner,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Organizer,
        Field::EventName,
        Field::Description,
        Field::LocationName,
        Field::Mode,
        Field::EventDate,
        Field::RegistrationDeadline,
        Field::OrganizationLogo,
        Field::EventBanner,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Organizer => "organizer",
            Field::EventName => "eventName",
            Field::Description => "description",
            Field::LocationName => "locationName",
            Field::Mode => "mode",
            Field::EventDate => "eventDate",
            Field::RegistrationDeadline => "registrationDeadline",
            Field::OrganizationLogo => "organizationLogo",
            Field::EventBanner => "eventBanner",
        }
    }

    pub fn is_upload(self) -> bool {
        matches!(self, Field::OrganizationLogo | Field::EventBanner)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }
}

/// The two image upload slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadSlot {
    OrganizationLogo,
    EventBanner,
}

impl UploadSlot {
    pub fn field(self) -> Field {
        match self {
            UploadSlot::OrganizationLogo => Field::OrganizationLogo,
            UploadSlot::EventBanner => Field::EventBanner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_parse() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>().unwrap(), field);
        }
        assert!(matches!(
            "venue".parse::<Field>(),
            Err(FormError::UnknownField(name)) if name == "venue"
        ));
    }

    #[test]
    fn test_serde_names_match_display() {
        let json = serde_json::to_string(&Field::RegistrationDeadline).unwrap();
        assert_eq!(json, "\"registrationDeadline\"");
        assert!(UploadSlot::EventBanner.field().is_upload());
        assert!(!Field::Mode.is_upload());
    }
}
