use i18nrs::yew::use_translation;
use shared::models::{Conversation, Message};
use web_sys::Element;
use yew::{
    AttrValue, Callback, Html, NodeRef, Properties, function_component, html, use_effect_with,
    use_node_ref,
};
use yew_icons::{Icon, IconId};

use crate::components::avatar::Avatar;
use crate::components::message_bubble::MessageBubble;
use crate::components::message_composer::MessageComposer;

#[derive(Properties, PartialEq)]
pub struct MessageThreadProps {
    /// `None` renders the empty state.
    pub conversation: Option<Conversation>,
    pub messages: Vec<Message>,
    pub draft: AttrValue,
    pub on_draft: Callback<String>,
    pub on_send: Callback<()>,
}

fn scroll_to_bottom(node: &NodeRef) {
    if let Some(element) = node.cast::<Element>() {
        element.set_scroll_top(element.scroll_height());
    }
}

#[function_component(MessageThread)]
pub fn message_thread(props: &MessageThreadProps) -> Html {
    let (i18n, ..) = use_translation();
    let scroller = use_node_ref();

    {
        let scroller = scroller.clone();
        use_effect_with(props.messages.len(), move |_| {
            scroll_to_bottom(&scroller);
            || ()
        });
    }

    let Some(conversation) = props.conversation.as_ref() else {
        return html! {
            <div class="flex flex-col items-center justify-center h-full p-8 text-center text-base-content/70">
                <Icon icon_id={IconId::HeroiconsOutlineChatBubbleLeftRight} class="h-12 w-12 mb-4" />
                <h3 class="text-lg font-semibold">{i18n.t("messages.empty_title")}</h3>
                <p class="text-sm">{i18n.t("messages.empty_description")}</p>
            </div>
        };
    };

    let initials = conversation.initials();

    html! {
        <div class="flex flex-col h-full">
            <div class="flex items-center gap-3 p-4 border-b border-base-300">
                <Avatar initials={initials.clone()} size="w-10" />
                <div>
                    <div class="font-semibold">{ &conversation.participant }</div>
                    <div class="text-xs text-base-content/60">{ conversation.role.label() }</div>
                </div>
            </div>
            <div ref={scroller} class="flex-1 overflow-y-auto p-4 space-y-2">
                { for props.messages.iter().map(|message| html! {
                    <MessageBubble
                        key={message.id.clone()}
                        message={message.clone()}
                        counterpart_initials={initials.clone()}
                    />
                }) }
            </div>
            <div class="p-4 border-t border-base-300">
                <MessageComposer
                    text={props.draft.clone()}
                    on_text_change={props.on_draft.clone()}
                    on_submit={props.on_send.clone()}
                    placeholder={i18n.t("messages.placeholder")}
                    send_label={i18n.t("messages.send")}
                />
            </div>
        </div>
    }
}
