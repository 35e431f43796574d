//! Local state of the mock video meeting room.

use serde::{Deserialize, Serialize};

use crate::inbox::{Compose, next_message_id};
use crate::models::{Message, Role, initials};

/// Elapsed call time, advanced once per second by the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingClock {
    seconds: u32,
}

impl MeetingClock {
    pub const fn seconds(self) -> u32 {
        self.seconds
    }

    pub fn tick(&mut self) {
        self.seconds = self.seconds.saturating_add(1);
    }

    /// `mm:ss`, minutes zero-padded to two digits and unbounded above.
    pub fn display(self) -> String {
        format!("{:02}:{:02}", self.seconds / 60, self.seconds % 60)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SidePanel {
    #[default]
    Closed,
    Chat,
    Participants,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub role: Role,
}

impl Participant {
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeetingAction {
    Tick,
    ToggleMic,
    ToggleVideo,
    ToggleChat,
    ToggleParticipants,
    UpdateDraft(String),
    /// Sends the chat draft stamped with the caller's local time label.
    SendChat { timestamp: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingRoom {
    meeting_id: String,
    role: Role,
    pub mic_on: bool,
    pub video_on: bool,
    pub panel: SidePanel,
    participants: Vec<Participant>,
    chat: Vec<Message>,
    draft: Compose,
    clock: MeetingClock,
}

impl MeetingRoom {
    pub fn new(
        meeting_id: impl Into<String>,
        role: Role,
        participants: Vec<Participant>,
        chat: Vec<Message>,
    ) -> Self {
        Self {
            meeting_id: meeting_id.into(),
            role,
            mic_on: true,
            video_on: true,
            panel: SidePanel::Closed,
            participants,
            chat,
            draft: Compose::default(),
            clock: MeetingClock::default(),
        }
    }

    pub fn meeting_id(&self) -> &str {
        &self.meeting_id
    }

    pub const fn role(&self) -> Role {
        self.role
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn chat(&self) -> &[Message] {
        &self.chat
    }

    pub const fn draft(&self) -> &Compose {
        &self.draft
    }

    pub const fn clock(&self) -> MeetingClock {
        self.clock
    }

    /// Opens the chat panel, or closes it when it is already open.
    pub fn toggle_chat(&mut self) {
        self.panel = if self.panel == SidePanel::Chat {
            SidePanel::Closed
        } else {
            SidePanel::Chat
        };
    }

    pub fn toggle_participants(&mut self) {
        self.panel = if self.panel == SidePanel::Participants {
            SidePanel::Closed
        } else {
            SidePanel::Participants
        };
    }

    /// Appends the draft to the in-room chat. Blank drafts are ignored.
    pub fn send_chat(&mut self, timestamp: &str) -> bool {
        let Some(text) = self.draft.take_submission() else {
            return false;
        };
        let id = next_message_id("chat", &self.chat);
        self.chat
            .push(Message::from_current_user(id, text, timestamp, self.role));
        true
    }

    /// Toast text shown when the call ends.
    pub fn end_summary(&self) -> String {
        format!("Meeting duration: {}", self.clock.display())
    }

    pub fn apply(&mut self, action: MeetingAction) {
        match action {
            MeetingAction::Tick => self.clock.tick(),
            MeetingAction::ToggleMic => self.mic_on = !self.mic_on,
            MeetingAction::ToggleVideo => self.video_on = !self.video_on,
            MeetingAction::ToggleChat => self.toggle_chat(),
            MeetingAction::ToggleParticipants => self.toggle_participants(),
            MeetingAction::UpdateDraft(text) => self.draft.set_text(text),
            MeetingAction::SendChat { timestamp } => {
                self.send_chat(&timestamp);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn room() -> MeetingRoom {
        MeetingRoom::new(
            "m-1",
            Role::Mentee,
            vec![
                Participant {
                    id: "1".into(),
                    name: "John Smith".into(),
                    role: Role::Mentee,
                },
                Participant {
                    id: "2".into(),
                    name: "Sarah Johnson".into(),
                    role: Role::Mentor,
                },
            ],
            vec![Message::from_counterpart(
                "chat-1",
                "Sarah Johnson",
                "Hello, how are you today?",
                "2:01 PM",
                true,
                Role::Mentor,
            )],
        )
    }

    #[test_case(0, "00:00" ; "start")]
    #[test_case(59, "00:59" ; "under a minute")]
    #[test_case(61, "01:01" ; "over a minute")]
    #[test_case(6000, "100:00" ; "past ninety nine minutes")]
    fn test_clock_display(seconds: u32, expected: &str) {
        assert_eq!(MeetingClock { seconds }.display(), expected);
    }

    #[test]
    fn test_clock_ticks_and_saturates() {
        let mut clock = MeetingClock::default();
        clock.tick();
        clock.tick();
        assert_eq!(clock.seconds(), 2);
        let mut clock = MeetingClock { seconds: u32::MAX };
        clock.tick();
        assert_eq!(clock.seconds(), u32::MAX);
    }

    #[test]
    fn test_panels_are_exclusive() {
        let mut room = room();
        room.apply(MeetingAction::ToggleParticipants);
        assert_eq!(room.panel, SidePanel::Participants);
        room.apply(MeetingAction::ToggleChat);
        assert_eq!(room.panel, SidePanel::Chat);
        room.apply(MeetingAction::ToggleChat);
        assert_eq!(room.panel, SidePanel::Closed);
    }

    #[test]
    fn test_media_toggles() {
        let mut room = room();
        assert!(room.mic_on && room.video_on);
        room.apply(MeetingAction::ToggleMic);
        room.apply(MeetingAction::ToggleVideo);
        assert!(!room.mic_on);
        assert!(!room.video_on);
    }

    #[test]
    fn test_chat_send_follows_compose_rules() {
        let mut room = room();
        room.apply(MeetingAction::UpdateDraft("   ".into()));
        room.apply(MeetingAction::SendChat {
            timestamp: "2:05 PM".into(),
        });
        assert_eq!(room.chat().len(), 1);

        room.apply(MeetingAction::UpdateDraft("Doing well, thanks!".into()));
        room.apply(MeetingAction::SendChat {
            timestamp: "2:05 PM".into(),
        });
        let last = room.chat().last().unwrap();
        assert_eq!(last.id, "chat-2");
        assert!(last.is_from_current_user());
        assert_eq!(room.draft(), &Compose::Idle);
    }

    #[test]
    fn test_chat_ids_skip_taken_ids() {
        let mut room = MeetingRoom::new(
            "m-2",
            Role::Mentor,
            Vec::new(),
            vec![Message::from_counterpart("chat-2", "Alex", "Hi", "9:00 AM", true, Role::Mentee)],
        );
        room.apply(MeetingAction::UpdateDraft("Hello Alex".into()));
        room.apply(MeetingAction::SendChat {
            timestamp: "9:01 AM".into(),
        });
        assert_eq!(room.chat().last().unwrap().id, "chat-3");
    }

    #[test]
    fn test_end_summary_uses_clock() {
        let mut room = room();
        for _ in 0..75 {
            room.apply(MeetingAction::Tick);
        }
        assert_eq!(room.end_summary(), "Meeting duration: 01:15");
        assert_eq!(room.participants()[1].initials(), "SJ");
    }
}
