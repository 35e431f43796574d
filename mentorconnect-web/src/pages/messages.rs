use std::rc::Rc;

use i18nrs::yew::use_translation;
use shared::catalog::Catalog;
use shared::inbox::{Inbox, InboxAction, InboxTab};
use shared::models::{Conversation, Role};
use shared::navigation::RouteContext;
use strum::IntoEnumIterator;
use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::use_location;

use crate::components::conversation_list::ConversationList;
use crate::components::message_thread::MessageThread;
use crate::models::inbox_state::InboxState;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[derive(Properties, PartialEq)]
pub struct MessagesPageProps {
    pub role: Role,
    /// Conversation named in the URL; wins over navigation state.
    #[prop_or_default]
    pub conversation_id: Option<AttrValue>,
}

#[function_component(MessagesPage)]
pub fn messages_page(props: &MessagesPageProps) -> Html {
    let (i18n, ..) = use_translation();
    let catalog = use_context::<Rc<Catalog>>();
    let location = use_location();

    let preselected = props.conversation_id.as_ref().map(ToString::to_string).or_else(|| {
        let state = location.as_ref().and_then(|location| location.state::<RouteContext>());
        match RouteContext::messages(state.as_deref()) {
            Ok(context) => Some(context.conversation_id.clone()),
            Err(err) => {
                log(&format!("Messages opened without a conversation: {err}"));
                None
            }
        }
    });

    let inbox = {
        let role = props.role;
        let preselected = preselected.clone();
        use_reducer(move || {
            let seed = catalog.map(|catalog| catalog.inbox_seed(role)).unwrap_or_default();
            InboxState(Inbox::open(seed, role, preselected.as_deref()))
        })
    };

    {
        let dispatcher = inbox.dispatcher();
        use_effect_with(preselected, move |preselected| {
            if let Some(id) = preselected {
                dispatcher.dispatch(InboxAction::Select(id.clone()));
            }
            || ()
        });
    }

    let on_select = {
        let dispatcher = inbox.dispatcher();
        Callback::from(move |id: String| dispatcher.dispatch(InboxAction::Select(id)))
    };
    let on_draft = {
        let dispatcher = inbox.dispatcher();
        Callback::from(move |text: String| dispatcher.dispatch(InboxAction::UpdateDraft(text)))
    };
    let on_send = {
        let dispatcher = inbox.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(InboxAction::Send))
    };
    let on_search = {
        let dispatcher = inbox.dispatcher();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            dispatcher.dispatch(InboxAction::Search(input.value()));
        })
    };

    let state = &inbox.0;
    let visible: Vec<Conversation> = state.visible_conversations().into_iter().cloned().collect();
    let unread_total = state.unread_total();

    let tabs = InboxTab::iter().map(|tab| {
        let dispatcher = inbox.dispatcher();
        let onclick = Callback::from(move |_: MouseEvent| dispatcher.dispatch(InboxAction::ShowTab(tab)));
        let active = state.filter().tab == tab;
        let label = i18n.t(&format!("messages.tabs.{}", tab.label().to_lowercase()));
        html! {
            <a role="tab" class={classes!("tab", "gap-2", active.then_some("tab-active"))} {onclick}>
                {label}
                {
                    if tab == InboxTab::Unread && unread_total > 0 {
                        html! { <span class="badge badge-primary badge-sm">{ unread_total }</span> }
                    } else {
                        Html::default()
                    }
                }
            </a>
        }
    });

    html! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold">{i18n.t("messages.title")}</h1>
                <p class="text-base-content/70">
                    {format!("{} {}", i18n.t("messages.subtitle"), props.role.counterpart().plural())}
                </p>
            </div>
            <div class="card bg-base-100 border border-base-300 shadow-sm overflow-hidden">
                <div class="grid md:grid-cols-3 h-[70vh]">
                    <div class="border-r border-base-300 flex flex-col min-h-0">
                        <div class="p-3 space-y-3 border-b border-base-300">
                            <label class="input input-bordered input-sm flex items-center gap-2">
                                <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="h-4 w-4 opacity-60" />
                                <input
                                    type="text"
                                    class="grow"
                                    placeholder={i18n.t("messages.search")}
                                    value={state.filter().query.clone()}
                                    oninput={on_search}
                                />
                            </label>
                            <div role="tablist" class="tabs tabs-boxed tabs-sm">
                                { for tabs }
                            </div>
                        </div>
                        <div class="flex-1 overflow-y-auto">
                            <ConversationList
                                conversations={visible}
                                selected={state.selected_id().map(|id| AttrValue::from(id.to_string()))}
                                {on_select}
                            />
                        </div>
                    </div>
                    <div class="md:col-span-2 min-h-0">
                        <MessageThread
                            conversation={state.active_conversation().cloned()}
                            messages={state.active_thread().to_vec()}
                            draft={state.compose().text().to_string()}
                            {on_draft}
                            {on_send}
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
