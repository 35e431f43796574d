use crate::models::Conversation;

/// Ordered conversation summaries shown in the left-hand list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationStore {
    conversations: Vec<Conversation>,
}

impl ConversationStore {
    pub fn new(conversations: Vec<Conversation>) -> Self {
        Self { conversations }
    }

    pub fn get(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|conversation| conversation.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Conversation> {
        self.conversations
            .iter_mut()
            .find(|conversation| conversation.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Conversation> {
        self.conversations.iter()
    }

    pub fn first_id(&self) -> Option<&str> {
        self.conversations.first().map(|conversation| conversation.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    /// Sum of unread counters across every conversation.
    pub fn total_unread(&self) -> u32 {
        self.conversations.iter().map(|conversation| conversation.unread).sum()
    }

    /// Zeroes the unread counter. Returns `true` when the counter changed.
    pub fn reset_unread(&mut self, id: &str) -> bool {
        match self.get_mut(id) {
            Some(conversation) if conversation.unread > 0 => {
                conversation.unread = 0;
                true
            }
            _ => false,
        }
    }

    /// Rewrites the preview and activity label after a successful send.
    ///
    /// Only the summary projection changes; the message log remains the
    /// source of truth for what was sent.
    pub fn record_sent(&mut self, id: &str, text: &str, marker: &str) -> bool {
        let Some(conversation) = self.get_mut(id) else {
            return false;
        };
        conversation.last_message = text.to_string();
        conversation.timestamp = marker.to_string();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn conversation(id: &str, unread: u32) -> Conversation {
        Conversation {
            id: id.into(),
            participant: format!("Person {id}"),
            last_message: "Hi".into(),
            timestamp: "1 day ago".into(),
            unread,
            role: Role::Mentor,
        }
    }

    fn store() -> ConversationStore {
        ConversationStore::new(vec![conversation("1", 2), conversation("2", 0)])
    }

    #[test]
    fn test_lookup_and_order() {
        let store = store();
        assert_eq!(store.first_id(), Some("1"));
        assert!(store.contains("2"));
        assert!(!store.contains("9"));
        let ids: Vec<_> = store.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn test_reset_unread_reports_changes_once() {
        let mut store = store();
        assert_eq!(store.total_unread(), 2);
        assert!(store.reset_unread("1"));
        assert!(!store.reset_unread("1"));
        assert!(!store.reset_unread("missing"));
        assert_eq!(store.total_unread(), 0);
    }

    #[test]
    fn test_record_sent_updates_summary_only_for_known_ids() {
        let mut store = store();
        assert!(store.record_sent("2", "Hello", "Just now"));
        let updated = store.get("2").unwrap();
        assert_eq!(updated.last_message, "Hello");
        assert_eq!(updated.timestamp, "Just now");
        assert_eq!(updated.unread, 0);

        assert!(!store.record_sent("9", "Hello", "Just now"));
        assert_eq!(store.len(), 2);
    }
}
