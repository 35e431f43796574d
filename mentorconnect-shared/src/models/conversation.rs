use serde::{Deserialize, Serialize};

use super::{Role, initials};

/// Summary row of a thread between the current user and one counterpart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conversation {
    /// Key into the message log.
    pub id: String,

    /// Display name of the counterpart.
    pub participant: String,

    /// Preview of the most recent message; rewritten on every send.
    pub last_message: String,

    /// Display-only activity label ("2 hours ago", "Just now").
    pub timestamp: String,

    /// Messages the current user has not seen yet.
    pub unread: u32,

    /// Role of the counterpart, the opposite of the current user's role.
    pub role: Role,
}

impl Conversation {
    pub fn initials(&self) -> String {
        initials(&self.participant)
    }

    pub const fn has_unread(&self) -> bool {
        self.unread > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Conversation {
        Conversation {
            id: "1".into(),
            participant: "Neha Gupta".into(),
            last_message: "Looking forward to our session next week!".into(),
            timestamp: "2 hours ago".into(),
            unread: 1,
            role: Role::Mentor,
        }
    }

    #[test]
    fn test_conversation_initials() {
        assert_eq!(sample().initials(), "NG");
    }

    #[test]
    fn test_conversation_unread_flag() {
        let mut conversation = sample();
        assert!(conversation.has_unread());
        conversation.unread = 0;
        assert!(!conversation.has_unread());
    }

    #[test]
    fn test_conversation_equality() {
        let first = sample();
        let mut second = sample();
        assert_eq!(first, second);
        second.id = "2".into();
        assert_ne!(first, second);
    }
}
