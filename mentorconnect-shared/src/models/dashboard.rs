use serde::{Deserialize, Serialize};

use super::initials;

/// A headline number on the dashboard overview.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardStat {
    pub label: String,
    pub value: String,
}

impl DashboardStat {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// A learning resource recommended on the overview.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resource {
    pub title: String,
    pub description: String,
    pub link: String,
}

/// The signed-in user's display profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

impl UserProfile {
    pub fn initials(&self) -> String {
        initials(&self.name)
    }

    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Vikram Sharma".to_string(),
            email: "vikram.sharma@example.com".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = UserProfile::default();
        assert_eq!(profile.initials(), "VS");
        assert_eq!(profile.first_name(), "Vikram");
        assert!(profile.email.ends_with("@example.com"));
    }
}
