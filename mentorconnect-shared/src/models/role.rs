use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum::EnumIter;

use super::RoleParseError;

/// The platform persona of the signed-in user.
///
/// The role decides which fixture sets and navigation items are rendered. It is
/// never used for access control.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Mentor,
    #[default]
    Mentee,
}

impl Role {
    /// Return the canonical string persisted under the `userRole` key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mentor => "mentor",
            Self::Mentee => "mentee",
        }
    }

    /// Capitalized label used for badges.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mentor => "Mentor",
            Self::Mentee => "Mentee",
        }
    }

    /// Lowercase plural used in copy such as "Communicate with your mentees".
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Mentor => "mentors",
            Self::Mentee => "mentees",
        }
    }

    /// The role of the people on the other side of a conversation or session.
    #[must_use]
    pub const fn counterpart(self) -> Self {
        match self {
            Self::Mentor => Self::Mentee,
            Self::Mentee => Self::Mentor,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "mentor" => Ok(Self::Mentor),
            "mentee" => Ok(Self::Mentee),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    #[test_case("mentor", Role::Mentor ; "mentor")]
    #[test_case("mentee", Role::Mentee ; "mentee")]
    fn test_role_parses_persisted_value(raw: &str, expected: Role) {
        assert_eq!(raw.parse::<Role>().unwrap(), expected);
        assert_eq!(expected.as_str(), raw);
    }

    #[test_case("Mentor" ; "capitalized")]
    #[test_case("admin" ; "unknown")]
    #[test_case("" ; "empty")]
    fn test_role_rejects_unknown_value(raw: &str) {
        let err = raw.parse::<Role>().unwrap_err();
        assert_eq!(err.0, raw);
    }

    #[test]
    fn test_counterpart_is_an_involution() {
        for role in Role::iter() {
            assert_ne!(role.counterpart(), role);
            assert_eq!(role.counterpart().counterpart(), role);
        }
    }

    #[test]
    fn test_default_role_is_mentee() {
        assert_eq!(Role::default(), Role::Mentee);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Mentor).unwrap(), "\"mentor\"");
        let role: Role = serde_json::from_str("\"mentee\"").unwrap();
        assert_eq!(role, Role::Mentee);
    }
}
