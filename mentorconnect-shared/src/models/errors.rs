use chrono::NaiveDate;
use thiserror::Error;

/// A persisted role string that is neither `"mentor"` nor `"mentee"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role `{0}`")]
pub struct RoleParseError(pub String);

/// Input-level validation failures surfaced to the user as a toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required form field was left blank.
    #[error("{0} is required")]
    MissingField(&'static str),
    /// Scheduling was attempted without a date or a time slot.
    #[error("Please select both a date and time.")]
    MissingDateOrTime,
    /// Scheduling was attempted for a day that has already passed.
    #[error("{0} is in the past")]
    DateInPast(NaiveDate),
    /// The email field does not look like an address.
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

impl ValidationError {
    /// Short toast title for the error.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::MissingField(_) | Self::MissingDateOrTime => "Missing information",
            Self::DateInPast(_) => "Invalid date",
            Self::InvalidEmail => "Invalid email",
        }
    }
}

/// Typed navigation payload could not be used by the receiving page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The transition carried no payload (direct visit or full reload).
    #[error("no navigation context was provided")]
    Missing,
    /// The payload was built for another page.
    #[error("navigation context targets {found}, expected {expected}")]
    WrongDestination {
        expected: &'static str,
        found: &'static str,
    },
    /// A required payload field was empty.
    #[error("navigation context field `{0}` is empty")]
    EmptyField(&'static str),
}

/// Browser storage could not be read or written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_titles() {
        assert_eq!(
            ValidationError::MissingDateOrTime.title(),
            "Missing information"
        );
        assert_eq!(
            ValidationError::MissingField("Email").title(),
            "Missing information"
        );
        assert_eq!(ValidationError::InvalidEmail.title(), "Invalid email");
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::MissingField("Email").to_string(),
            "Email is required"
        );
        let date = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        assert_eq!(
            ValidationError::DateInPast(date).to_string(),
            "2025-04-01 is in the past"
        );
    }

    #[test]
    fn test_navigation_error_display() {
        let err = NavigationError::WrongDestination {
            expected: "messages",
            found: "meeting room",
        };
        assert_eq!(
            err.to_string(),
            "navigation context targets meeting room, expected messages"
        );
        assert_eq!(
            NavigationError::EmptyField("mentor_id").to_string(),
            "navigation context field `mentor_id` is empty"
        );
    }

    #[test]
    fn test_role_parse_error_display() {
        assert_eq!(
            RoleParseError("admin".into()).to_string(),
            "unknown role `admin`"
        );
    }
}
