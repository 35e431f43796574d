use serde::{Deserialize, Serialize};

/// An entry in the header notification menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub description: String,
    pub time: String,
    pub read: bool,
}

impl Notification {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            time: time.into(),
            read: false,
        }
    }
}

/// A toggle in the notification section of the settings page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationPreference {
    pub id: String,
    pub title: String,
    pub description: String,
    pub enabled: bool,
}
