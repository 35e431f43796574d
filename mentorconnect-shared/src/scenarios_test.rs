//! End-to-end behavior of the messaging and search flows over the seeded
//! catalog.

use crate::catalog::Catalog;
use crate::inbox::{Inbox, InboxAction, InboxTab};
use crate::models::{CURRENT_USER_SENDER, Role};
use crate::search::{MentorFilter, MentorQuery, search_mentors};

fn inbox(role: Role, preselected: Option<&str>) -> Inbox {
    Inbox::open(Catalog::seeded().inbox_seed(role), role, preselected)
}

/// Unread counters never go negative and are zero for the selection.
#[test]
fn test_selected_conversation_has_no_unread() {
    let mut inbox = inbox(Role::Mentee, Some("2"));
    for id in ["1", "2", "3", "1"] {
        inbox.apply(InboxAction::Select(id.into()));
        assert_eq!(inbox.active_conversation().unwrap().unread, 0);
    }
    assert_eq!(inbox.unread_total(), 0);
}

/// Selecting the same conversation twice flips nothing the second time.
#[test]
fn test_selection_is_idempotent() {
    let mut inbox = inbox(Role::Mentor, Some("2"));
    assert_eq!(inbox.select_conversation("1"), 1);
    let snapshot = inbox.clone();
    assert_eq!(inbox.select_conversation("1"), 0);
    assert_eq!(inbox, snapshot);
}

/// A non-blank send appends exactly one read message from the current user.
#[test]
fn test_send_appends_one_message_at_the_end() {
    let mut inbox = inbox(Role::Mentee, None);
    let before: Vec<_> = inbox.active_thread().to_vec();

    inbox.apply(InboxAction::UpdateDraft("  See you Thursday  ".into()));
    inbox.apply(InboxAction::Send);

    let after = inbox.active_thread();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after[..before.len()], before.as_slice());
    let sent = after.last().unwrap();
    assert!(sent.read);
    assert_eq!(sent.sender, CURRENT_USER_SENDER);
    assert_eq!(sent.content, "  See you Thursday  ");
}

/// Empty and whitespace-only sends leave the log unchanged.
#[test]
fn test_blank_send_is_a_no_op() {
    let mut inbox = inbox(Role::Mentee, None);
    let len = inbox.active_thread().len();
    for draft in ["", " ", "\n\t  "] {
        inbox.apply(InboxAction::UpdateDraft(draft.into()));
        inbox.apply(InboxAction::Send);
        assert_eq!(inbox.active_thread().len(), len);
    }
}

/// An empty query returns every mentor; a query matching nothing returns none.
#[test]
fn test_search_query_bounds() {
    let catalog = Catalog::seeded();
    let everyone = search_mentors(&catalog.mentors, "", &MentorFilter::default());
    assert_eq!(everyone.len(), catalog.mentors.len());
    assert!(search_mentors(&catalog.mentors, "zzz-no-such-mentor", &MentorFilter::default()).is_empty());
}

#[test]
fn test_rating_and_skill_filters_on_catalog() {
    let catalog = Catalog::seeded();

    let by_rating = MentorFilter {
        min_rating: Some(4.8),
        ..MentorFilter::default()
    };
    let found = search_mentors(&catalog.mentors, "", &by_rating);
    assert!(!found.is_empty());
    assert!(found.iter().all(|mentor| mentor.rating >= 4.8));
    assert_eq!(found.len(), 4);

    let mut by_skill = MentorFilter::default();
    by_skill.toggle_skill("React");
    let names: Vec<_> = search_mentors(&catalog.mentors, "", &by_skill)
        .iter()
        .map(|mentor| mentor.name.as_str())
        .collect();
    assert_eq!(names, ["Michael Chen", "James Wilson"]);
}

/// Conversation "1" has three seeded messages, the last unread.
#[test]
fn test_selecting_conversation_one_marks_everything_read() {
    let mut inbox = inbox(Role::Mentee, Some("2"));
    let thread = inbox.log().thread("1");
    assert_eq!(thread.len(), 3);
    assert!(!thread[2].read);
    assert_eq!(inbox.conversations().get("1").unwrap().unread, 1);

    inbox.apply(InboxAction::Select("1".into()));

    assert!(inbox.active_thread().iter().all(|message| message.read));
    assert_eq!(inbox.active_conversation().unwrap().unread, 0);
}

#[test]
fn test_sending_hello_to_conversation_two() {
    let mut inbox = inbox(Role::Mentor, None);
    inbox.apply(InboxAction::Select("2".into()));
    let before = inbox.active_thread().len();

    inbox.apply(InboxAction::UpdateDraft("Hello".into()));
    inbox.apply(InboxAction::Send);

    assert_eq!(inbox.conversations().get("2").unwrap().last_message, "Hello");
    assert_eq!(inbox.log().len("2"), before + 1);
}

/// Narrowing the list never moves the selection.
#[test]
fn test_unread_tab_keeps_selection() {
    let mut inbox = inbox(Role::Mentee, Some("3"));
    inbox.apply(InboxAction::ShowTab(InboxTab::Unread));
    let visible: Vec<_> = inbox
        .visible_conversations()
        .iter()
        .map(|conversation| conversation.id.as_str())
        .collect();
    assert_eq!(visible, ["1"]);
    assert_eq!(inbox.selected_id(), Some("3"));
}

#[test]
fn test_category_and_text_query_on_catalog() {
    let catalog = Catalog::seeded();
    let mut query = MentorQuery {
        text: "react".into(),
        ..MentorQuery::default()
    };
    query.toggle_category(crate::search::Category::SoftwareDevelopment);
    let found = query.run(&catalog.mentors);
    assert_eq!(found.len(), 2);
    assert_eq!(
        query.results_summary(found.len()),
        "Showing 2 mentors for \"react\" in Software Development"
    );
}
