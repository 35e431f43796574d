use yewdux::{Dispatch, Store};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastLevel {
    pub const fn alert_class(self) -> &'static str {
        match self {
            Self::Info => "alert-info",
            Self::Success => "alert-success",
            Self::Error => "alert-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub level: ToastLevel,
}

/// Transient notifications, newest last.
#[derive(Debug, Default, Clone, PartialEq, Eq, Store)]
pub struct ToastState {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    pub fn push(
        &mut self,
        level: ToastLevel,
        title: impl Into<String>,
        description: Option<String>,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            title: title.into(),
            description,
            level,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Convenience used by pages: `notify(&dispatch, ToastLevel::Success, "Saved", None)`.
pub fn notify(
    dispatch: &Dispatch<ToastState>,
    level: ToastLevel,
    title: impl Into<String>,
    description: Option<String>,
) {
    let title = title.into();
    dispatch.reduce_mut(move |state| {
        state.push(level, title, description);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut state = ToastState::default();
        let first = state.push(ToastLevel::Info, "Logged out", None);
        let second = state.push(ToastLevel::Error, "Missing information", None);
        assert!(second > first);
        assert_eq!(state.toasts().len(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_matching_toast() {
        let mut state = ToastState::default();
        let first = state.push(ToastLevel::Success, "Saved", None);
        state.push(ToastLevel::Info, "Role switched", Some("Now a mentor".into()));
        state.dismiss(first);
        assert_eq!(state.toasts().len(), 1);
        assert_eq!(state.toasts()[0].title, "Role switched");

        state.dismiss(999);
        assert_eq!(state.toasts().len(), 1);
    }

    #[test]
    fn test_ids_are_not_reused_after_dismiss() {
        let mut state = ToastState::default();
        let first = state.push(ToastLevel::Info, "a", None);
        state.dismiss(first);
        let second = state.push(ToastLevel::Info, "b", None);
        assert_ne!(first, second);
    }
}
