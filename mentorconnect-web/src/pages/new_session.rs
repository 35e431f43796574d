use gloo_timers::callback::Timeout;
use i18nrs::yew::use_translation;
use shared::models::{PersonRef, Role};
use shared::navigation::RouteContext;
use shared::scheduling::{BookingKind, ScheduledMeeting};
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::{use_location, use_navigator};

use crate::components::booking_form::BookingForm;
use crate::routes::DashboardRoute;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Delay before returning to the schedule so the confirmation toast is seen.
const RETURN_DELAY_MS: u32 = 1_500;

#[derive(Properties, PartialEq)]
pub struct NewSessionPageProps {
    pub role: Role,
}

#[function_component(NewSessionPage)]
pub fn new_session_page(props: &NewSessionPageProps) -> Html {
    let (i18n, ..) = use_translation();
    let navigator = use_navigator();
    let location = use_location();

    let state = location.as_ref().and_then(|location| location.state::<RouteContext>());
    let (counterpart, role) = match RouteContext::new_session(state.as_deref()) {
        Ok(context) => (
            Some(PersonRef {
                id: context.mentor_id.clone(),
                name: context.mentor_name.clone(),
            }),
            context.role,
        ),
        Err(err) => {
            log(&format!("New session opened without a counterpart: {err}"));
            (None, props.role)
        }
    };

    let on_booked = Callback::from(move |_: ScheduledMeeting| {
        let navigator = navigator.clone();
        Timeout::new(RETURN_DELAY_MS, move || {
            if let Some(navigator) = navigator {
                navigator.push_with_state(&DashboardRoute::Schedule, RouteContext::Dashboard { role });
            }
        })
        .forget();
    });

    let subtitle = counterpart.as_ref().map_or_else(
        || format!("{} {}", i18n.t("booking.book_time_with"), role.counterpart().plural()),
        |person| format!("{} {}", i18n.t("booking.session_with"), person.name),
    );

    html! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold">{i18n.t("nav.new_session")}</h1>
                <p class="text-base-content/70">{subtitle}</p>
            </div>
            <BookingForm booking={BookingKind::Session} {role} {counterpart} {on_booked} />
        </div>
    }
}
