use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::initials;

/// A mentor listed in the public directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mentor {
    pub id: String,
    pub name: String,
    pub title: String,
    pub company: Option<String>,
    pub skills: Vec<String>,
    /// Average review score on a five point scale.
    pub rating: f32,
    pub review_count: u32,
    pub featured: bool,
    pub location: String,
    /// Session price in whole dollars per hour.
    pub hourly_rate: u32,
    /// Free-form availability label ("Evenings & Weekends").
    pub availability: String,
}

impl Mentor {
    pub fn initials(&self) -> String {
        initials(&self.name)
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|own| own == skill)
    }

    /// "Product Design Lead at Google", or just the title without a company.
    pub fn headline(&self) -> String {
        match &self.company {
            Some(company) => format!("{} at {company}", self.title),
            None => self.title.clone(),
        }
    }

    /// Number of filled stars in the five star widget.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn full_stars(&self) -> usize {
        self.rating.floor().clamp(0.0, 5.0) as usize
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub year: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AvailabilityDay {
    pub day: String,
    pub slots: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    pub id: String,
    pub author: String,
    pub rating: u8,
    pub date: String,
    pub text: String,
}

/// Long-form profile shown on `/mentors/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MentorDetails {
    pub mentor_id: String,
    pub bio: String,
    pub languages: Vec<String>,
    pub expertise: Vec<String>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub mentorship_areas: Vec<String>,
    pub weekly_availability: Vec<AvailabilityDay>,
    pub timezone: String,
    pub reviews: Vec<Review>,
    pub session_length_minutes: u32,
    pub completed_sessions: u32,
}

/// A mentee in a mentor's roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Mentee {
    pub id: String,
    pub name: String,
    pub title: String,
    pub skills: Vec<String>,
    pub bio: String,
    pub last_session: String,
}

impl Mentee {
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MentorshipStatus {
    Active,
    Pending,
    Completed,
}

impl MentorshipStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }

    /// daisyUI badge modifier.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Active => "badge-success",
            Self::Pending => "badge-warning",
            Self::Completed => "badge-ghost",
        }
    }
}

/// A mentee's relationship with one mentor from the directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Mentorship {
    pub mentor_id: String,
    pub name: String,
    pub title: String,
    pub company: String,
    pub expertise: Vec<String>,
    pub next_session: Option<NaiveDateTime>,
    pub status: MentorshipStatus,
}

impl Mentorship {
    /// "Tue, Apr 15, 2:00 PM" or "Not scheduled".
    pub fn next_session_label(&self) -> String {
        self.next_session.map_or_else(
            || "Not scheduled".to_string(),
            |at| at.format("%a, %b %-d, %-I:%M %p").to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn mentor(rating: f32, company: Option<&str>) -> Mentor {
        Mentor {
            id: "1".into(),
            name: "Sarah Johnson".into(),
            title: "Product Design Lead".into(),
            company: company.map(str::to_string),
            skills: vec!["UI/UX Design".into(), "Leadership".into()],
            rating,
            review_count: 42,
            featured: true,
            location: "San Francisco, CA".into(),
            hourly_rate: 75,
            availability: "Evenings & Weekends".into(),
        }
    }

    #[test]
    fn test_mentor_headline_with_and_without_company() {
        assert_eq!(
            mentor(4.9, Some("Google")).headline(),
            "Product Design Lead at Google"
        );
        assert_eq!(mentor(4.9, None).headline(), "Product Design Lead");
    }

    #[test]
    fn test_mentor_skill_lookup_is_exact() {
        let mentor = mentor(4.9, None);
        assert!(mentor.has_skill("Leadership"));
        assert!(!mentor.has_skill("leadership"));
    }

    #[test]
    fn test_full_stars_floor_the_rating() {
        assert_eq!(mentor(4.9, None).full_stars(), 4);
        assert_eq!(mentor(5.0, None).full_stars(), 5);
        assert_eq!(mentor(0.4, None).full_stars(), 0);
    }

    #[test]
    fn test_next_session_label() {
        let mut mentorship = Mentorship {
            mentor_id: "1".into(),
            name: "Sarah Johnson".into(),
            title: "Product Design Lead".into(),
            company: "Google".into(),
            expertise: vec![],
            next_session: None,
            status: MentorshipStatus::Pending,
        };
        assert_eq!(mentorship.next_session_label(), "Not scheduled");

        mentorship.next_session = NaiveDate::from_ymd_opt(2025, 4, 15)
            .and_then(|date| date.and_hms_opt(14, 0, 0));
        assert_eq!(mentorship.next_session_label(), "Tue, Apr 15, 2:00 PM");
    }
}
