//! Client-side messaging state: conversation summaries, message logs,
//! selection and the compose box.
//!
//! [`Inbox`] is the aggregate the messages page renders. Every user action is
//! an [`InboxAction`] fed through [`Inbox::apply`], so the web crate can wrap
//! it in a reducer without duplicating any of the rules here.

mod compose;
mod log;
mod store;

pub use compose::Compose;
pub use log::MessageLog;
pub(crate) use log::next_message_id;
pub use store::ConversationStore;

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::models::{Conversation, Message, Role};

/// Activity label written on a conversation after the current user sends.
pub const JUST_NOW: &str = "Just now";

/// Fixture data an inbox is initialized from on every mount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboxSeed {
    pub conversations: Vec<Conversation>,
    pub threads: Vec<(String, Vec<Message>)>,
}

/// Tabs above the conversation list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum InboxTab {
    #[default]
    All,
    Unread,
}

impl InboxTab {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Unread => "Unread",
        }
    }
}

/// Search box and tab state for the conversation list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationFilter {
    pub query: String,
    pub tab: InboxTab,
}

impl ConversationFilter {
    /// Case-insensitive match on participant name or preview text, restricted
    /// to conversations with unread messages on the `Unread` tab.
    pub fn matches(&self, conversation: &Conversation) -> bool {
        if self.tab == InboxTab::Unread && !conversation.has_unread() {
            return false;
        }
        let needle = self.query.to_lowercase();
        needle.is_empty()
            || conversation.participant.to_lowercase().contains(&needle)
            || conversation.last_message.to_lowercase().contains(&needle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboxAction {
    Select(String),
    UpdateDraft(String),
    Send,
    Search(String),
    ShowTab(InboxTab),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbox {
    role: Role,
    conversations: ConversationStore,
    log: MessageLog,
    selected: Option<String>,
    compose: Compose,
    filter: ConversationFilter,
}

impl Inbox {
    /// Builds the inbox for the current user's `role` and selects either the
    /// preselected conversation (from navigation) or the first one.
    pub fn open(seed: InboxSeed, role: Role, preselected: Option<&str>) -> Self {
        let conversations = ConversationStore::new(seed.conversations);
        let mut log = MessageLog::new(seed.threads);
        for conversation in conversations.iter() {
            log.ensure_thread(&conversation.id);
        }

        let initial = preselected
            .filter(|id| !id.is_empty())
            .or_else(|| conversations.first_id())
            .map(str::to_string);

        let mut inbox = Self {
            role,
            conversations,
            log,
            selected: None,
            compose: Compose::default(),
            filter: ConversationFilter::default(),
        };
        if let Some(id) = initial {
            inbox.select_conversation(&id);
        }
        inbox
    }

    pub const fn role(&self) -> Role {
        self.role
    }

    pub const fn conversations(&self) -> &ConversationStore {
        &self.conversations
    }

    pub const fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub const fn compose(&self) -> &Compose {
        &self.compose
    }

    pub const fn filter(&self) -> &ConversationFilter {
        &self.filter
    }

    /// Makes `id` the active conversation and marks its messages read.
    ///
    /// Unknown ids are still selected; the thread is then empty and the view
    /// shows its empty state. Returns the number of messages flipped to read.
    pub fn select_conversation(&mut self, id: &str) -> usize {
        self.selected = Some(id.to_string());
        self.conversations.reset_unread(id);
        let flipped = self.log.mark_all_read(id);
        tracing::debug!(conversation = id, flipped, "conversation selected");
        flipped
    }

    /// Summary of the active conversation, if the selection exists.
    pub fn active_conversation(&self) -> Option<&Conversation> {
        self.selected
            .as_deref()
            .and_then(|id| self.conversations.get(id))
    }

    /// Messages of the active conversation; empty without a valid selection.
    pub fn active_thread(&self) -> &[Message] {
        self.selected
            .as_deref()
            .map(|id| self.log.thread(id))
            .unwrap_or_default()
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.compose.set_text(text);
    }

    /// Sends the draft to the active conversation.
    ///
    /// Without a known selection, or with a blank draft, nothing changes and
    /// `None` is returned.
    pub fn send(&mut self) -> Option<Message> {
        let id = self.selected.clone()?;
        if !self.conversations.contains(&id) {
            tracing::trace!(conversation = %id, "send ignored, conversation not found");
            return None;
        }
        let Some(text) = self.compose.take_submission() else {
            tracing::trace!(conversation = %id, "send ignored, draft is blank");
            return None;
        };
        let message = self.log.append(&id, &text, JUST_NOW, self.role)?.clone();
        self.conversations.record_sent(&id, &text, JUST_NOW);
        tracing::debug!(conversation = %id, message = %message.id, "message sent");
        Some(message)
    }

    /// Conversations passing the current search text and tab, in store order.
    pub fn visible_conversations(&self) -> Vec<&Conversation> {
        self.conversations
            .iter()
            .filter(|conversation| self.filter.matches(conversation))
            .collect()
    }

    pub fn unread_total(&self) -> u32 {
        self.conversations.total_unread()
    }

    pub fn apply(&mut self, action: InboxAction) {
        match action {
            InboxAction::Select(id) => {
                self.select_conversation(&id);
            }
            InboxAction::UpdateDraft(text) => self.set_draft(text),
            InboxAction::Send => {
                self.send();
            }
            InboxAction::Search(query) => self.filter.query = query,
            InboxAction::ShowTab(tab) => self.filter.tab = tab,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conversation(id: &str, participant: &str, preview: &str, unread: u32) -> Conversation {
        Conversation {
            id: id.into(),
            participant: participant.into(),
            last_message: preview.into(),
            timestamp: "1 day ago".into(),
            unread,
            role: Role::Mentor,
        }
    }

    fn seed() -> InboxSeed {
        InboxSeed {
            conversations: vec![
                conversation("1", "Neha Gupta", "See you soon", 1),
                conversation("2", "Rajesh Kumar", "Thanks for the resources", 2),
                conversation("3", "Deepa Reddy", "Great session", 0),
            ],
            threads: vec![
                (
                    "1".into(),
                    vec![Message::from_counterpart("1-1", "Neha Gupta", "See you soon", "", false, Role::Mentor)],
                ),
                (
                    "2".into(),
                    vec![
                        Message::from_counterpart("2-1", "Rajesh Kumar", "Hi", "", false, Role::Mentor),
                        Message::from_counterpart("2-2", "Rajesh Kumar", "Thanks", "", false, Role::Mentor),
                    ],
                ),
            ],
        }
    }

    /// The first conversation is selected and read on open.
    #[test]
    fn test_open_selects_first_conversation() {
        let inbox = Inbox::open(seed(), Role::Mentee, None);
        assert_eq!(inbox.selected_id(), Some("1"));
        assert_eq!(inbox.active_conversation().unwrap().unread, 0);
        assert!(inbox.active_thread().iter().all(|m| m.read));
        assert_eq!(inbox.unread_total(), 2);
    }

    #[test]
    fn test_open_honors_preselected_conversation() {
        let inbox = Inbox::open(seed(), Role::Mentee, Some("2"));
        assert_eq!(inbox.selected_id(), Some("2"));
        assert_eq!(inbox.conversations().get("1").unwrap().unread, 1);
        assert_eq!(inbox.conversations().get("2").unwrap().unread, 0);
    }

    #[test]
    fn test_open_ignores_empty_preselection() {
        let inbox = Inbox::open(seed(), Role::Mentee, Some(""));
        assert_eq!(inbox.selected_id(), Some("1"));
    }

    #[test]
    fn test_open_without_conversations_has_no_selection() {
        let inbox = Inbox::open(InboxSeed::default(), Role::Mentor, None);
        assert_eq!(inbox.selected_id(), None);
        assert!(inbox.active_thread().is_empty());
    }

    /// A conversation without seeded messages still owns an empty thread.
    #[test]
    fn test_every_conversation_has_a_thread() {
        let mut inbox = Inbox::open(seed(), Role::Mentee, Some("3"));
        inbox.set_draft("Hello Deepa");
        assert!(inbox.send().is_some());
        assert_eq!(inbox.active_thread().len(), 1);
        assert_eq!(inbox.active_thread()[0].id, "3-1");
    }

    #[test]
    fn test_select_unknown_conversation_shows_empty_thread() {
        let mut inbox = Inbox::open(seed(), Role::Mentee, None);
        assert_eq!(inbox.select_conversation("42"), 0);
        assert_eq!(inbox.selected_id(), Some("42"));
        assert!(inbox.active_conversation().is_none());
        assert!(inbox.active_thread().is_empty());
    }

    #[test]
    fn test_send_to_unknown_conversation_keeps_draft() {
        let mut inbox = Inbox::open(seed(), Role::Mentee, Some("42"));
        inbox.set_draft("Hello");
        assert!(inbox.send().is_none());
        assert_eq!(inbox.compose().text(), "Hello");
    }

    #[test]
    fn test_send_records_preview_and_clears_draft() {
        let mut inbox = Inbox::open(seed(), Role::Mentor, Some("2"));
        inbox.apply(InboxAction::UpdateDraft("On my way".into()));
        inbox.apply(InboxAction::Send);

        let conversation = inbox.active_conversation().unwrap();
        assert_eq!(conversation.last_message, "On my way");
        assert_eq!(conversation.timestamp, JUST_NOW);
        let last = inbox.active_thread().last().unwrap();
        assert_eq!(last.role, Role::Mentor);
        assert!(last.is_from_current_user());
        assert_eq!(inbox.compose(), &Compose::Idle);
    }

    #[test]
    fn test_draft_survives_selection_change() {
        let mut inbox = Inbox::open(seed(), Role::Mentee, None);
        inbox.set_draft("half written");
        inbox.apply(InboxAction::Select("2".into()));
        assert_eq!(inbox.compose().text(), "half written");
    }

    #[test]
    fn test_filter_by_text_and_tab() {
        let mut inbox = Inbox::open(seed(), Role::Mentee, Some("3"));
        inbox.apply(InboxAction::Search("RAJ".into()));
        let ids: Vec<_> = inbox.visible_conversations().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["2"]);

        inbox.apply(InboxAction::Search("session".into()));
        let ids: Vec<_> = inbox.visible_conversations().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["3"]);

        inbox.apply(InboxAction::Search(" raj".into()));
        assert!(inbox.visible_conversations().is_empty());

        inbox.apply(InboxAction::Search(String::new()));
        inbox.apply(InboxAction::ShowTab(InboxTab::Unread));
        let ids: Vec<_> = inbox.visible_conversations().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
        assert_eq!(inbox.selected_id(), Some("3"));
    }
}
