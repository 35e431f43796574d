use std::rc::Rc;

use shared::meeting::{MeetingAction, MeetingRoom};
use yew::Reducible;

/// `use_reducer` wrapper around the shared [`MeetingRoom`].
#[derive(Debug, Clone, PartialEq)]
pub struct MeetingState(pub MeetingRoom);

impl Reducible for MeetingState {
    type Action = MeetingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut room = self.0.clone();
        room.apply(action);
        Rc::new(Self(room))
    }
}
