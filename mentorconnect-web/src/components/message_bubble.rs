use shared::models::Message;
use yew::{AttrValue, Html, Properties, classes, function_component, html};

use crate::components::avatar::Avatar;

#[derive(Properties, PartialEq, Clone)]
pub struct MessageBubbleProps {
    pub message: Message,
    /// Initials shown next to messages from the other participant.
    pub counterpart_initials: AttrValue,
}

#[function_component(MessageBubble)]
pub fn message_bubble(props: &MessageBubbleProps) -> Html {
    let mine = props.message.is_from_current_user();
    let (alignment, bubble) = if mine {
        ("chat-end", "chat-bubble-primary")
    } else {
        ("chat-start", "")
    };

    html! {
        <div class={classes!("chat", alignment)}>
            {
                if mine {
                    Html::default()
                } else {
                    html! {
                        <div class="chat-image">
                            <Avatar initials={props.counterpart_initials.to_string()} size="w-8" />
                        </div>
                    }
                }
            }
            <div class={classes!("chat-bubble", "whitespace-pre-wrap", bubble)}>
                { props.message.content.clone() }
            </div>
            <div class="chat-footer text-xs opacity-60 mt-1">
                { props.message.timestamp.clone() }
            </div>
        </div>
    }
}
