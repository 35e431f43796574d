use std::collections::HashMap;

use crate::models::{Message, Role};

/// Per-conversation message sequences, append-only apart from read flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageLog {
    threads: HashMap<String, Vec<Message>>,
}

impl MessageLog {
    pub fn new(threads: impl IntoIterator<Item = (String, Vec<Message>)>) -> Self {
        Self {
            threads: threads.into_iter().collect(),
        }
    }

    /// Creates an empty sequence for `id` unless one already exists.
    pub fn ensure_thread(&mut self, id: &str) {
        self.threads.entry(id.to_string()).or_default();
    }

    /// Messages of one conversation in insertion order; empty for unknown ids.
    pub fn thread(&self, id: &str) -> &[Message] {
        self.threads.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self, id: &str) -> usize {
        self.thread(id).len()
    }

    pub fn unread(&self, id: &str) -> usize {
        self.thread(id).iter().filter(|message| !message.read).count()
    }

    /// Appends an outgoing message from the current user.
    ///
    /// Blank content and unknown conversations are rejected with `None`.
    pub fn append(
        &mut self,
        conversation_id: &str,
        content: &str,
        timestamp: &str,
        role: Role,
    ) -> Option<&Message> {
        if content.trim().is_empty() {
            return None;
        }
        let thread = self.threads.get_mut(conversation_id)?;
        let id = next_message_id(conversation_id, thread);
        thread.push(Message::from_current_user(id, content, timestamp, role));
        thread.last()
    }

    /// Flips every existing message to read and returns how many changed.
    pub fn mark_all_read(&mut self, conversation_id: &str) -> usize {
        let Some(thread) = self.threads.get_mut(conversation_id) else {
            return 0;
        };
        let mut flipped = 0;
        for message in thread.iter_mut().filter(|message| !message.read) {
            message.read = true;
            flipped += 1;
        }
        flipped
    }
}

/// `{prefix}-{n}` with `n` starting after the thread length and skipping ids already taken.
pub(crate) fn next_message_id(prefix: &str, thread: &[Message]) -> String {
    let mut n = thread.len() + 1;
    loop {
        let candidate = format!("{prefix}-{n}");
        if thread.iter().all(|message| message.id != candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log() -> MessageLog {
        MessageLog::new([(
            "1".to_string(),
            vec![
                Message::from_counterpart("1-1", "Neha", "Hi", "10:00 AM", true, Role::Mentor),
                Message::from_counterpart("1-2", "Neha", "Ping", "10:05 AM", false, Role::Mentor),
            ],
        )])
    }

    #[test]
    fn test_append_builds_read_outgoing_message() {
        let mut log = log();
        let message = log.append("1", "Hello", "Just now", Role::Mentee).unwrap();
        assert_eq!(message.id, "1-3");
        assert_eq!(message.sender, "You");
        assert!(message.read);
        assert_eq!(message.role, Role::Mentee);
        assert_eq!(log.thread("1").last().unwrap().content, "Hello");
    }

    #[test]
    fn test_append_rejects_blank_content() {
        let mut log = log();
        assert!(log.append("1", "", "Just now", Role::Mentee).is_none());
        assert!(log.append("1", " \n\t", "Just now", Role::Mentee).is_none());
        assert_eq!(log.len("1"), 2);
    }

    #[test]
    fn test_append_to_unknown_conversation_is_rejected() {
        let mut log = log();
        assert!(log.append("7", "Hello", "Just now", Role::Mentee).is_none());
        assert!(log.thread("7").is_empty());
    }

    #[test]
    fn test_message_ids_skip_existing_ids() {
        let mut log = MessageLog::new([(
            "2".to_string(),
            vec![Message::from_counterpart("2-2", "Raj", "Hi", "", true, Role::Mentor)],
        )]);
        let first = log.append("2", "a", "Just now", Role::Mentee).unwrap().id.clone();
        let second = log.append("2", "b", "Just now", Role::Mentee).unwrap().id.clone();
        assert_eq!(first, "2-3");
        assert_eq!(second, "2-4");
    }

    #[test]
    fn test_mark_all_read_counts_transitions() {
        let mut log = log();
        assert_eq!(log.unread("1"), 1);
        assert_eq!(log.mark_all_read("1"), 1);
        assert_eq!(log.mark_all_read("1"), 0);
        assert_eq!(log.mark_all_read("missing"), 0);
        assert_eq!(log.unread("1"), 0);
    }

    #[test]
    fn test_ensure_thread_keeps_existing_messages() {
        let mut log = log();
        log.ensure_thread("1");
        log.ensure_thread("5");
        assert_eq!(log.len("1"), 2);
        assert_eq!(log.len("5"), 0);
    }
}
