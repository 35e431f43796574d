use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Lightweight pointer to a person in another fixture set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SessionKind {
    Video,
    InPerson,
    Chat,
}

impl SessionKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Video => "Video Call",
            Self::InPerson => "In Person",
            Self::Chat => "Chat",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl SessionStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Upcoming => "badge-primary",
            Self::Completed => "badge-success",
            Self::Cancelled => "badge-error",
        }
    }
}

/// A booked mentoring session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MentoringSession {
    pub id: String,
    pub counterpart: PersonRef,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub duration_minutes: u32,
    pub topic: String,
    pub kind: SessionKind,
    pub status: SessionStatus,
    pub notes: Option<String>,
}

impl MentoringSession {
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.start)
    }

    pub fn is_upcoming(&self) -> bool {
        self.status == SessionStatus::Upcoming
    }

    /// "Tue, Apr 15".
    pub fn date_label(&self) -> String {
        self.date.format("%a, %b %-d").to_string()
    }

    /// "14:00 - 15:00".
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> MentoringSession {
        MentoringSession {
            id: "1".into(),
            counterpart: PersonRef {
                id: "1".into(),
                name: "Sarah Johnson".into(),
            },
            date: NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
            start: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
            duration_minutes: 60,
            topic: "Career Development Discussion".into(),
            kind: SessionKind::Video,
            status: SessionStatus::Upcoming,
            notes: None,
        }
    }

    #[test]
    fn test_session_labels() {
        let session = session();
        assert_eq!(session.date_label(), "Tue, Apr 15");
        assert_eq!(session.time_range(), "14:00 - 15:00");
        assert_eq!(session.starts_at().to_string(), "2025-04-15 14:00:00");
    }

    #[test]
    fn test_session_status() {
        let mut session = session();
        assert!(session.is_upcoming());
        session.status = SessionStatus::Completed;
        assert!(!session.is_upcoming());
        assert_eq!(session.status.label(), "Completed");
    }

    #[test]
    fn test_session_kind_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&SessionKind::InPerson).unwrap(),
            "\"in-person\""
        );
    }
}
