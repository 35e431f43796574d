use std::rc::Rc;

use shared::inbox::{Inbox, InboxAction};
use yew::Reducible;

/// `use_reducer` wrapper around the shared [`Inbox`].
#[derive(Debug, Clone, PartialEq)]
pub struct InboxState(pub Inbox);

impl Reducible for InboxState {
    type Action = InboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut inbox = self.0.clone();
        inbox.apply(action);
        Rc::new(Self(inbox))
    }
}
