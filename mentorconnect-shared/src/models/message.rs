use serde::{Deserialize, Serialize};

use super::Role;

/// Sender literal that marks a message as written by the current user.
pub const CURRENT_USER_SENDER: &str = "You";

/// A single entry in a conversation's message log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Unique within the owning conversation's log.
    pub id: String,

    /// Display name of the author, or [`CURRENT_USER_SENDER`].
    pub sender: String,

    /// Free-form message body.
    pub content: String,

    /// Display-only label such as "2 hours ago".
    pub timestamp: String,

    /// Whether the current user has seen the message.
    pub read: bool,

    /// Role badge of the author.
    pub role: Role,
}

impl Message {
    /// Builds a message authored by the current user. Outgoing messages are
    /// always created already read.
    pub fn from_current_user(
        id: impl Into<String>,
        content: impl Into<String>,
        timestamp: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            sender: CURRENT_USER_SENDER.to_string(),
            content: content.into(),
            timestamp: timestamp.into(),
            read: true,
            role,
        }
    }

    /// Builds a message written by the other participant.
    pub fn from_counterpart(
        id: impl Into<String>,
        sender: impl Into<String>,
        content: impl Into<String>,
        timestamp: impl Into<String>,
        read: bool,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            sender: sender.into(),
            content: content.into(),
            timestamp: timestamp.into(),
            read,
            role,
        }
    }

    pub fn is_from_current_user(&self) -> bool {
        self.sender == CURRENT_USER_SENDER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outgoing_message_is_read_and_sent_by_you() {
        let message = Message::from_current_user("1-4", "Hello", "Just now", Role::Mentee);
        assert!(message.read);
        assert_eq!(message.sender, "You");
        assert!(message.is_from_current_user());
        assert_eq!(message.role, Role::Mentee);
    }

    #[test]
    fn test_counterpart_message_keeps_read_flag() {
        let message = Message::from_counterpart(
            "1-3",
            "Neha Gupta",
            "See you soon",
            "30 minutes ago",
            false,
            Role::Mentor,
        );
        assert!(!message.read);
        assert!(!message.is_from_current_user());
    }

    #[test]
    fn test_message_serialization() {
        let message = Message::from_current_user("2-3", "Thanks!", "Just now", Role::Mentor);
        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains("\"sender\":\"You\""));
        assert!(json.contains("\"role\":\"mentor\""));
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, message);
    }
}
