use chrono::{Local, NaiveDate};
use i18nrs::yew::use_translation;
use shared::models::{PersonRef, Role};
use shared::scheduling::{
    BookingKind, MeetingDuration, MeetingKind, MeetingRequest, ScheduledMeeting, TIME_SLOTS,
};
use strum::IntoEnumIterator;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yewdux::prelude::use_dispatch;

use crate::components::avatar::Avatar;
use crate::models::toast_state::{ToastLevel, ToastState, notify};

/// Returns a setter that applies `change` to a copy of the request.
fn edit<F>(request: &UseStateHandle<MeetingRequest>, change: F) -> impl Fn(String) + 'static
where
    F: Fn(&mut MeetingRequest, String) + 'static,
{
    let request = request.clone();
    move |value: String| {
        let mut next = (*request).clone();
        change(&mut next, value);
        request.set(next);
    }
}

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    pub booking: BookingKind,
    pub role: Role,
    /// Person fixed by the page that opened the form.
    #[prop_or_default]
    pub counterpart: Option<PersonRef>,
    /// People offered in a picker when no counterpart is fixed.
    #[prop_or_default]
    pub choices: Vec<PersonRef>,
    pub on_booked: Callback<ScheduledMeeting>,
}

/// Date / slot / duration / kind / topic form shared by both booking pages.
#[function_component(BookingForm)]
pub fn booking_form(props: &BookingFormProps) -> Html {
    let (i18n, ..) = use_translation();
    let toasts = use_dispatch::<ToastState>();
    let request = {
        let booking = props.booking;
        let role = props.role;
        let counterpart = props.counterpart.clone();
        use_state(move || MeetingRequest {
            counterpart,
            ..MeetingRequest::new(booking, role)
        })
    };

    let on_date = {
        let apply = edit(&request, |request, value| {
            request.date = NaiveDate::parse_from_str(&value, "%Y-%m-%d").ok();
        });
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            apply(input.value());
        })
    };
    let on_duration = {
        let apply = edit(&request, |request, value| {
            if let Some(duration) = value.parse().ok().and_then(MeetingDuration::from_minutes) {
                request.duration = duration;
            }
        });
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            apply(select.value());
        })
    };
    let on_topic = {
        let apply = edit(&request, |request, value| request.topic = value);
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            apply(input.value());
        })
    };
    let on_agenda = {
        let apply = edit(&request, |request, value| request.agenda = value);
        Callback::from(move |event: InputEvent| {
            let input: HtmlTextAreaElement = event.target_unchecked_into();
            apply(input.value());
        })
    };
    let on_choice = {
        let choices = props.choices.clone();
        let apply = edit(&request, move |request, value| {
            request.counterpart = choices.iter().find(|person| person.id == value).cloned();
        });
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            apply(select.value());
        })
    };

    let on_submit = {
        let request = request.clone();
        let on_booked = props.on_booked.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            match request.submit(Local::now().date_naive()) {
                Ok(scheduled) => {
                    notify(&toasts, ToastLevel::Success, scheduled.title(), Some(scheduled.confirmation()));
                    if let Some(follow_up) = scheduled.follow_up() {
                        notify(&toasts, ToastLevel::Info, "Video meeting info", Some(follow_up.to_string()));
                    }
                    on_booked.emit(scheduled);
                }
                Err(err) => notify(&toasts, ToastLevel::Error, err.title(), Some(err.to_string())),
            }
        })
    };

    let slots = TIME_SLOTS.iter().map(|slot| {
        let selected = request.time_slot.as_deref() == Some(*slot);
        let onclick = {
            let request = request.clone();
            let slot = (*slot).to_string();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*request).clone();
                next.time_slot = Some(slot.clone());
                request.set(next);
            })
        };
        html! {
            <button
                type="button"
                class={classes!("btn", "btn-sm", if selected { "btn-primary" } else { "btn-outline" })}
                {onclick}
            >
                { *slot }
            </button>
        }
    });

    let kinds = MeetingKind::iter().map(|kind| {
        let onchange = {
            let request = request.clone();
            Callback::from(move |_: Event| {
                let mut next = (*request).clone();
                next.kind = kind;
                request.set(next);
            })
        };
        html! {
            <label class="label cursor-pointer justify-start gap-2">
                <input type="radio" name="meeting-kind" class="radio radio-primary radio-sm" checked={request.kind == kind} {onchange} />
                <span class="label-text">{i18n.t(&format!("booking.kind.{}", kind.as_str()))}</span>
            </label>
        }
    });

    let noun = props.booking.noun();
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let selected_date = request.date.map(|date| date.format("%Y-%m-%d").to_string()).unwrap_or_default();

    let counterpart_block = match (&props.counterpart, props.choices.is_empty()) {
        (Some(person), _) => html! {
            <div class="flex items-center gap-3 p-3 bg-base-200 rounded-md">
                <Avatar initials={shared::models::initials(&person.name)} />
                <div>
                    <p class="font-medium">{ &person.name }</p>
                    <p class="text-xs text-base-content/60">{ props.role.counterpart().label() }</p>
                </div>
            </div>
        },
        (None, false) => html! {
            <div class="form-control">
                <label class="label" for="counterpart">
                    <span class="label-text">{ format!("{} {}", i18n.t("booking.select"), props.role.counterpart().label()) }</span>
                </label>
                <select id="counterpart" class="select select-bordered" onchange={on_choice}>
                    <option value="" selected={request.counterpart.is_none()}>{"—"}</option>
                    { for props.choices.iter().map(|person| html! {
                        <option
                            value={person.id.clone()}
                            selected={request.counterpart.as_ref().is_some_and(|chosen| chosen.id == person.id)}
                        >
                            { &person.name }
                        </option>
                    }) }
                </select>
            </div>
        },
        (None, true) => Html::default(),
    };

    html! {
        <form onsubmit={on_submit}>
            <div class="grid md:grid-cols-2 gap-6">
                <div class="card bg-base-100 border border-base-300 shadow-sm">
                    <div class="card-body space-y-4">
                        <h2 class="card-title">{i18n.t("booking.date_time")}</h2>
                        <input
                            type="date"
                            class="input input-bordered w-full"
                            min={today}
                            value={selected_date}
                            onchange={on_date}
                        />
                        <div>
                            <span class="label-text mb-2 block">{i18n.t("booking.slots")}</span>
                            <div class="grid grid-cols-2 sm:grid-cols-3 gap-2">{ for slots }</div>
                        </div>
                        <div class="form-control">
                            <label class="label" for="duration"><span class="label-text">{i18n.t("booking.duration")}</span></label>
                            <select id="duration" class="select select-bordered" onchange={on_duration}>
                                { for MeetingDuration::iter().map(|duration| html! {
                                    <option
                                        value={duration.minutes().to_string()}
                                        selected={request.duration == duration}
                                    >
                                        { format!("{} minutes", duration.minutes()) }
                                    </option>
                                }) }
                            </select>
                        </div>
                    </div>
                </div>
                <div class="card bg-base-100 border border-base-300 shadow-sm">
                    <div class="card-body space-y-4">
                        <h2 class="card-title">{ format!("{} {}", i18n.t("booking.details"), noun) }</h2>
                        <div class="form-control">
                            <label class="label" for="topic"><span class="label-text">{i18n.t("booking.topic")}</span></label>
                            <input
                                id="topic"
                                type="text"
                                class="input input-bordered"
                                placeholder={i18n.t("booking.topic_placeholder")}
                                value={request.topic.clone()}
                                oninput={on_topic}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="agenda"><span class="label-text">{i18n.t("booking.agenda")}</span></label>
                            <textarea
                                id="agenda"
                                rows="4"
                                class="textarea textarea-bordered"
                                placeholder={i18n.t("booking.agenda_placeholder")}
                                value={request.agenda.clone()}
                                oninput={on_agenda}
                            />
                        </div>
                        <div>
                            <span class="label-text">{i18n.t("booking.kind.title")}</span>
                            <div class="flex gap-4">{ for kinds }</div>
                        </div>
                        {counterpart_block}
                        <button type="submit" class="btn btn-primary w-full">
                            { format!("{} {}", i18n.t("booking.submit"), noun) }
                        </button>
                    </div>
                </div>
            </div>
        </form>
    }
}
