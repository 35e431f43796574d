use std::rc::Rc;

use chrono::Local;
use gloo_timers::callback::Interval;
use i18nrs::yew::use_translation;
use shared::catalog::Catalog;
use shared::meeting::{MeetingAction, MeetingRoom, Participant, SidePanel};
use shared::models::{Role, initials};
use shared::navigation::RouteContext;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::{use_location, use_navigator};
use yewdux::prelude::use_dispatch;

use crate::components::avatar::Avatar;
use crate::components::message_bubble::MessageBubble;
use crate::components::message_composer::MessageComposer;
use crate::models::meeting_state::MeetingState;
use crate::models::toast_state::{ToastLevel, ToastState, notify};
use crate::routes::DashboardRoute;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

const DEMO_MEETING_ID: &str = "demo";
const TICK_MS: u32 = 1_000;

#[derive(Properties, PartialEq)]
pub struct MeetingRoomPageProps {
    pub role: Role,
}

#[derive(Properties, PartialEq)]
struct ParticipantTileProps {
    participant: Participant,
    camera_on: bool,
}

#[function_component(ParticipantTile)]
fn participant_tile(props: &ParticipantTileProps) -> Html {
    let (i18n, ..) = use_translation();
    html! {
        <div class="relative aspect-video rounded-box bg-neutral flex items-center justify-center">
            {
                if props.camera_on {
                    html! { <Avatar initials={props.participant.initials()} size="w-24" /> }
                } else {
                    html! {
                        <div class="flex flex-col items-center gap-2 text-neutral-content/70">
                            <Icon icon_id={IconId::HeroiconsOutlineVideoCameraSlash} class="h-10 w-10" />
                            <span class="text-sm">{i18n.t("meeting.camera_off")}</span>
                        </div>
                    }
                }
            }
            <span class="absolute bottom-2 left-2 badge badge-ghost bg-black/50 text-white border-0">
                { format!("{} ({})", props.participant.name, props.participant.role.label()) }
            </span>
        </div>
    }
}

#[function_component(MeetingRoomPage)]
pub fn meeting_room_page(props: &MeetingRoomPageProps) -> Html {
    let (i18n, ..) = use_translation();
    let navigator = use_navigator();
    let location = use_location();
    let toasts = use_dispatch::<ToastState>();
    let catalog = use_context::<Rc<Catalog>>();

    let state = location.as_ref().and_then(|location| location.state::<RouteContext>());
    let (meeting_id, role) = match RouteContext::meeting_room(state.as_deref()) {
        Ok(context) => (context.meeting_id.clone(), context.role),
        Err(err) => {
            log(&format!("Meeting room opened without a meeting: {err}"));
            (DEMO_MEETING_ID.to_string(), props.role)
        }
    };

    let room = use_reducer(move || {
        let (participants, chat) = catalog.as_deref().map_or_else(Default::default, |catalog| {
            (catalog.meeting_participants(role), catalog.meeting_chat(role))
        });
        MeetingState(MeetingRoom::new(meeting_id, role, participants, chat))
    });

    {
        let dispatcher = room.dispatcher();
        use_effect_with((), move |()| {
            let interval = Interval::new(TICK_MS, move || dispatcher.dispatch(MeetingAction::Tick));
            move || drop(interval)
        });
    }

    let action = |action: MeetingAction| {
        let dispatcher = room.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action.clone()))
    };
    let on_draft = {
        let dispatcher = room.dispatcher();
        Callback::from(move |text: String| dispatcher.dispatch(MeetingAction::UpdateDraft(text)))
    };
    let on_send = {
        let dispatcher = room.dispatcher();
        Callback::from(move |()| {
            let timestamp = Local::now().format("%-I:%M %p").to_string();
            dispatcher.dispatch(MeetingAction::SendChat { timestamp });
        })
    };
    let on_end = {
        let summary = room.0.end_summary();
        let title = i18n.t("meeting.ended");
        Callback::from(move |_: MouseEvent| {
            notify(&toasts, ToastLevel::Info, title.clone(), Some(summary.clone()));
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&DashboardRoute::Overview);
            }
        })
    };

    let meeting = &room.0;
    let control = |on: bool| {
        if on {
            classes!("btn", "btn-circle", "btn-neutral")
        } else {
            classes!("btn", "btn-circle", "btn-error")
        }
    };
    let panel_toggle = |panel: SidePanel| {
        if meeting.panel == panel {
            classes!("btn", "btn-circle", "btn-primary")
        } else {
            classes!("btn", "btn-circle", "btn-neutral")
        }
    };

    let side_panel = match meeting.panel {
        SidePanel::Closed => Html::default(),
        SidePanel::Chat => html! {
            <aside class="w-80 bg-base-100 text-base-content flex flex-col">
                <h2 class="p-4 font-semibold border-b border-base-300">{i18n.t("meeting.chat")}</h2>
                <div class="flex-1 overflow-y-auto p-4 space-y-2">
                    { for meeting.chat().iter().map(|message| html! {
                        <MessageBubble
                            key={message.id.clone()}
                            message={message.clone()}
                            counterpart_initials={initials(&message.sender)}
                        />
                    }) }
                </div>
                <MessageComposer
                    text={meeting.draft().text().to_string()}
                    on_text_change={on_draft}
                    on_submit={on_send}
                    placeholder={i18n.t("meeting.chat_placeholder")}
                    send_label={i18n.t("messages.send")}
                />
            </aside>
        },
        SidePanel::Participants => html! {
            <aside class="w-80 bg-base-100 text-base-content flex flex-col">
                <h2 class="p-4 font-semibold border-b border-base-300">
                    { format!("{} ({})", i18n.t("meeting.participants"), meeting.participants().len()) }
                </h2>
                <ul class="menu p-2">
                    { for meeting.participants().iter().map(|participant| html! {
                        <li key={participant.id.clone()}>
                            <div class="flex items-center gap-3">
                                <Avatar initials={participant.initials()} size="w-8" />
                                <span class="flex-1">{ &participant.name }</span>
                                <span class="badge badge-outline badge-sm">{ participant.role.label() }</span>
                            </div>
                        </li>
                    }) }
                </ul>
            </aside>
        },
    };

    html! {
        <div class="min-h-screen flex flex-col bg-gray-900 text-white">
            <header class="flex items-center justify-between px-6 py-3 bg-black/40">
                <div>
                    <h1 class="font-semibold">{i18n.t("meeting.title")}</h1>
                    <p class="text-xs opacity-70">{ format!("{}: {}", i18n.t("meeting.id"), meeting.meeting_id()) }</p>
                </div>
                <div class="flex items-center gap-2 font-mono">
                    <Icon icon_id={IconId::HeroiconsOutlineClock} class="h-4 w-4" />
                    <span>{ meeting.clock().display() }</span>
                </div>
            </header>
            <div class="flex flex-1 overflow-hidden">
                <main class="flex-1 p-6 grid gap-4 md:grid-cols-2 content-start">
                    { for meeting.participants().iter().map(|participant| {
                        let camera_on = participant.role != meeting.role() || meeting.video_on;
                        html! {
                            <ParticipantTile key={participant.id.clone()} participant={participant.clone()} {camera_on} />
                        }
                    }) }
                </main>
                { side_panel }
            </div>
            <footer class="flex items-center justify-center gap-4 py-4 bg-black/40">
                <button class={control(meeting.mic_on)} aria-label={i18n.t("meeting.toggle_mic")}
                    onclick={action(MeetingAction::ToggleMic)}>
                    <Icon icon_id={IconId::HeroiconsOutlineMicrophone} class="h-5 w-5" />
                </button>
                <button class={control(meeting.video_on)} aria-label={i18n.t("meeting.toggle_video")}
                    onclick={action(MeetingAction::ToggleVideo)}>
                    {
                        if meeting.video_on {
                            html! { <Icon icon_id={IconId::HeroiconsOutlineVideoCamera} class="h-5 w-5" /> }
                        } else {
                            html! { <Icon icon_id={IconId::HeroiconsOutlineVideoCameraSlash} class="h-5 w-5" /> }
                        }
                    }
                </button>
                <button class={panel_toggle(SidePanel::Chat)} aria-label={i18n.t("meeting.chat")}
                    onclick={action(MeetingAction::ToggleChat)}>
                    <Icon icon_id={IconId::HeroiconsOutlineChatBubbleLeftRight} class="h-5 w-5" />
                </button>
                <button class={panel_toggle(SidePanel::Participants)} aria-label={i18n.t("meeting.participants")}
                    onclick={action(MeetingAction::ToggleParticipants)}>
                    <Icon icon_id={IconId::HeroiconsOutlineUsers} class="h-5 w-5" />
                </button>
                <button class="btn btn-error gap-2" onclick={on_end}>
                    <Icon icon_id={IconId::HeroiconsOutlinePhoneXMark} class="h-5 w-5" />
                    {i18n.t("meeting.end")}
                </button>
            </footer>
        </div>
    }
}
