//! Typed payloads carried alongside client-side route transitions.
//!
//! Each destination that accepts context has its own variant. Receiving pages
//! validate the payload with the matching accessor and fall back to defaults
//! when it is missing or malformed.

use serde::{Deserialize, Serialize};

use crate::models::{NavigationError, Role};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSessionContext {
    pub mentor_id: String,
    pub mentor_name: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagesContext {
    pub conversation_id: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRoomContext {
    pub meeting_id: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteContext {
    NewSession(NewSessionContext),
    Messages(MessagesContext),
    MeetingRoom(MeetingRoomContext),
    Dashboard { role: Role },
    ScheduleMeeting { role: Role },
}

impl RouteContext {
    /// Human-readable destination name used in navigation errors.
    #[must_use]
    pub const fn destination(&self) -> &'static str {
        match self {
            Self::NewSession(_) => "new session",
            Self::Messages(_) => "messages",
            Self::MeetingRoom(_) => "meeting room",
            Self::Dashboard { .. } => "dashboard",
            Self::ScheduleMeeting { .. } => "schedule meeting",
        }
    }

    /// Role the sender of the transition was acting as.
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::NewSession(ctx) => ctx.role,
            Self::Messages(ctx) => ctx.role,
            Self::MeetingRoom(ctx) => ctx.role,
            Self::Dashboard { role } | Self::ScheduleMeeting { role } => *role,
        }
    }

    pub fn new_session(context: Option<&Self>) -> Result<&NewSessionContext, NavigationError> {
        match context.ok_or(NavigationError::Missing)? {
            Self::NewSession(ctx) if ctx.mentor_id.trim().is_empty() => {
                Err(NavigationError::EmptyField("mentor_id"))
            }
            Self::NewSession(ctx) if ctx.mentor_name.trim().is_empty() => {
                Err(NavigationError::EmptyField("mentor_name"))
            }
            Self::NewSession(ctx) => Ok(ctx),
            other => Err(wrong_destination("new session", other)),
        }
    }

    pub fn messages(context: Option<&Self>) -> Result<&MessagesContext, NavigationError> {
        match context.ok_or(NavigationError::Missing)? {
            Self::Messages(ctx) if ctx.conversation_id.trim().is_empty() => {
                Err(NavigationError::EmptyField("conversation_id"))
            }
            Self::Messages(ctx) => Ok(ctx),
            other => Err(wrong_destination("messages", other)),
        }
    }

    pub fn meeting_room(context: Option<&Self>) -> Result<&MeetingRoomContext, NavigationError> {
        match context.ok_or(NavigationError::Missing)? {
            Self::MeetingRoom(ctx) if ctx.meeting_id.trim().is_empty() => {
                Err(NavigationError::EmptyField("meeting_id"))
            }
            Self::MeetingRoom(ctx) => Ok(ctx),
            other => Err(wrong_destination("meeting room", other)),
        }
    }

    /// Role hint for pages that only need to know who navigated to them.
    pub fn role_hint(context: Option<&Self>) -> Result<Role, NavigationError> {
        context.map(Self::role).ok_or(NavigationError::Missing)
    }
}

const fn wrong_destination(expected: &'static str, found: &RouteContext) -> NavigationError {
    NavigationError::WrongDestination {
        expected,
        found: found.destination(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_session(id: &str, name: &str) -> RouteContext {
        RouteContext::NewSession(NewSessionContext {
            mentor_id: id.into(),
            mentor_name: name.into(),
            role: Role::Mentee,
        })
    }

    #[test]
    fn test_new_session_context_is_accepted() {
        let context = new_session("2", "Michael Chen");
        let ctx = RouteContext::new_session(Some(&context)).unwrap();
        assert_eq!(ctx.mentor_name, "Michael Chen");
    }

    #[test]
    fn test_missing_context_is_reported() {
        assert_eq!(
            RouteContext::new_session(None).unwrap_err(),
            NavigationError::Missing
        );
        assert_eq!(RouteContext::role_hint(None), Err(NavigationError::Missing));
    }

    #[test]
    fn test_empty_fields_are_rejected() {
        let context = new_session(" ", "Michael Chen");
        assert_eq!(
            RouteContext::new_session(Some(&context)).unwrap_err(),
            NavigationError::EmptyField("mentor_id")
        );
        let context = new_session("2", "");
        assert_eq!(
            RouteContext::new_session(Some(&context)).unwrap_err(),
            NavigationError::EmptyField("mentor_name")
        );
    }

    #[test]
    fn test_context_for_another_page_is_rejected() {
        let context = RouteContext::MeetingRoom(MeetingRoomContext {
            meeting_id: "m-1".into(),
            role: Role::Mentor,
        });
        assert_eq!(
            RouteContext::messages(Some(&context)).unwrap_err(),
            NavigationError::WrongDestination {
                expected: "messages",
                found: "meeting room",
            }
        );
        assert_eq!(RouteContext::role_hint(Some(&context)), Ok(Role::Mentor));
        assert_eq!(
            RouteContext::meeting_room(Some(&context)).unwrap().meeting_id,
            "m-1"
        );
    }

    #[test]
    fn test_role_hint_for_plain_variants() {
        let context = RouteContext::Dashboard { role: Role::Mentor };
        assert_eq!(RouteContext::role_hint(Some(&context)), Ok(Role::Mentor));
        let context = RouteContext::Messages(MessagesContext {
            conversation_id: String::new(),
            role: Role::Mentee,
        });
        assert_eq!(
            RouteContext::messages(Some(&context)).unwrap_err(),
            NavigationError::EmptyField("conversation_id")
        );
    }
}
