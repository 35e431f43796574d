/// Pending outgoing text for the active conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Compose {
    #[default]
    Idle,
    Composing(String),
}

impl Compose {
    /// Replaces the draft. An empty string returns to `Idle`.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        *self = if text.is_empty() {
            Self::Idle
        } else {
            Self::Composing(text)
        };
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Idle => "",
            Self::Composing(text) => text,
        }
    }

    /// Whether a submit would produce a message.
    pub fn can_submit(&self) -> bool {
        !self.text().trim().is_empty()
    }

    /// Hands out the draft and returns to `Idle`.
    ///
    /// Whitespace-only drafts yield `None` and are left in place.
    pub fn take_submission(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        match std::mem::take(self) {
            Self::Composing(text) => Some(text),
            Self::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_text_moves_between_states() {
        let mut compose = Compose::default();
        compose.set_text("Hel");
        assert_eq!(compose, Compose::Composing("Hel".into()));
        compose.set_text("");
        assert_eq!(compose, Compose::Idle);
    }

    #[test]
    fn test_take_submission_clears_draft() {
        let mut compose = Compose::default();
        compose.set_text("Hello ");
        assert_eq!(compose.take_submission().as_deref(), Some("Hello "));
        assert_eq!(compose, Compose::Idle);
        assert_eq!(compose.take_submission(), None);
    }

    #[test]
    fn test_whitespace_draft_is_not_submitted() {
        let mut compose = Compose::default();
        compose.set_text("   ");
        assert!(!compose.can_submit());
        assert_eq!(compose.take_submission(), None);
        assert_eq!(compose.text(), "   ");
    }
}
