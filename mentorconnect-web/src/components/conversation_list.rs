use i18nrs::yew::use_translation;
use shared::models::Conversation;
use yew::{AttrValue, Callback, Html, Properties, classes, function_component, html};

use crate::components::avatar::Avatar;

#[derive(Properties, PartialEq)]
pub struct ConversationListProps {
    pub conversations: Vec<Conversation>,
    #[prop_or_default]
    pub selected: Option<AttrValue>,
    pub on_select: Callback<String>,
}

#[function_component(ConversationList)]
pub fn conversation_list(props: &ConversationListProps) -> Html {
    let (i18n, ..) = use_translation();

    if props.conversations.is_empty() {
        return html! {
            <div class="p-4 text-sm text-base-content/70">
                {i18n.t("messages.no_conversations")}
            </div>
        };
    }

    html! {
        <ul class="divide-y divide-base-300">
            { for props.conversations.iter().map(|conversation| {
                let is_selected = props
                    .selected
                    .as_ref()
                    .is_some_and(|id| id.as_str() == conversation.id);
                let id = conversation.id.clone();
                let on_select = props.on_select.clone();
                let class = if is_selected {
                    classes!("p-3", "bg-base-300", "cursor-pointer")
                } else {
                    classes!("p-3", "hover:bg-base-200", "cursor-pointer")
                };
                html! {
                    <li
                        class={class}
                        onclick={Callback::from(move |_| on_select.emit(id.clone()))}
                    >
                        <div class="flex items-start gap-3">
                            <Avatar initials={conversation.initials()} size="w-10" />
                            <div class="flex-1 min-w-0">
                                <div class="flex items-center justify-between gap-2">
                                    <span class="text-sm font-medium truncate">{ &conversation.participant }</span>
                                    <span class="text-xs text-base-content/60 whitespace-nowrap">{ &conversation.timestamp }</span>
                                </div>
                                <div class="flex items-center justify-between gap-2 mt-1">
                                    <span class="text-xs text-base-content/70 truncate">{ &conversation.last_message }</span>
                                    {
                                        if conversation.has_unread() {
                                            html! { <span class="badge badge-primary badge-sm">{ conversation.unread }</span> }
                                        } else {
                                            Html::default()
                                        }
                                    }
                                </div>
                            </div>
                        </div>
                    </li>
                }
            })}
        </ul>
    }
}
