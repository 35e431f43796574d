pub mod conversation;
pub mod dashboard;
pub mod errors;
pub mod forum;
pub mod mentor;
pub mod mentoring_session;
pub mod message;
pub mod notification;
pub mod role;

pub use conversation::Conversation;
pub use dashboard::{DashboardStat, Resource, UserProfile};
pub use errors::{NavigationError, RoleParseError, StorageError, ValidationError};
pub use forum::{ForumCategory, ForumTopic, filter_topics};
pub use mentor::{
    AvailabilityDay, Education, Experience, Mentee, Mentor, MentorDetails, Mentorship,
    MentorshipStatus, Review,
};
pub use mentoring_session::{MentoringSession, PersonRef, SessionKind, SessionStatus};
pub use message::{CURRENT_USER_SENDER, Message};
pub use notification::{Notification, NotificationPreference};
pub use role::Role;

/// Builds the avatar initials shown in place of profile pictures ("Sarah Johnson" -> "SJ").
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::initials;

    #[test]
    fn test_initials_two_words() {
        assert_eq!(initials("Sarah Johnson"), "SJ");
    }

    #[test]
    fn test_initials_ignores_extra_spaces() {
        assert_eq!(initials("  Dr.  Michael   Chen "), "DMC");
        assert_eq!(initials(""), "");
    }
}
