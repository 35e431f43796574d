use std::rc::Rc;

use i18nrs::yew::use_translation;
use shared::catalog::Catalog;
use shared::models::{MentoringSession, Role};
use shared::navigation::RouteContext;
use shared::scheduling::{BookingKind, ScheduledMeeting};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::{Link, use_location};

use crate::components::booking_form::BookingForm;
use crate::routes::DashboardRoute;

const TIP_KEYS: [&str; 4] = ["equipment", "quiet", "connection", "on_time"];

#[derive(Properties, PartialEq)]
pub struct ScheduleMeetingPageProps {
    pub role: Role,
}

#[function_component(ScheduleMeetingPage)]
pub fn schedule_meeting_page(props: &ScheduleMeetingPageProps) -> Html {
    let (i18n, ..) = use_translation();
    let location = use_location();
    let booked = use_state(|| None::<ScheduledMeeting>);
    let Some(catalog) = use_context::<Rc<Catalog>>() else {
        return Html::default();
    };

    let state = location.as_ref().and_then(|location| location.state::<RouteContext>());
    let role = RouteContext::role_hint(state.as_deref()).unwrap_or(props.role);

    let on_booked = {
        let booked = booked.clone();
        Callback::from(move |scheduled: ScheduledMeeting| booked.set(Some(scheduled)))
    };

    let upcoming: Vec<&MentoringSession> = catalog.upcoming_sessions().take(3).collect();

    html! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold">{i18n.t("nav.schedule_meeting")}</h1>
                <p class="text-base-content/70">
                    { format!("{} {}", i18n.t("booking.book_time_with"), role.counterpart().plural()) }
                </p>
            </div>
            <div class="grid lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2 space-y-6">
                    <BookingForm
                        booking={BookingKind::Meeting}
                        {role}
                        choices={catalog.booking_counterparts(role)}
                        {on_booked}
                    />
                    {
                        booked.as_ref().map_or_else(Html::default, |meeting| html! {
                            <div role="alert" class="alert alert-success">
                                <Icon icon_id={IconId::HeroiconsOutlineCheck} class="h-5 w-5" />
                                <div>
                                    <div class="font-semibold">{ meeting.title() }</div>
                                    <div class="text-sm">{ meeting.confirmation() }</div>
                                </div>
                            </div>
                        })
                    }
                </div>
                <div class="space-y-6">
                    <div class="card bg-base-100 border border-base-300 shadow-sm">
                        <div class="card-body">
                            <h2 class="card-title">{i18n.t("dashboard.upcoming_sessions")}</h2>
                            { for upcoming.iter().map(|session| html! {
                                <div class="border-b border-base-300 pb-2 last:border-0">
                                    <div class="font-medium">{ &session.topic }</div>
                                    <div class="text-sm text-base-content/70">
                                        { format!("{} · {}", session.date_label(), session.time_range()) }
                                    </div>
                                </div>
                            }) }
                            <Link<DashboardRoute> to={DashboardRoute::Schedule} classes="link link-primary text-sm text-center">
                                {i18n.t("booking.view_all_meetings")}
                            </Link<DashboardRoute>>
                        </div>
                    </div>
                    <div class="card bg-base-100 border border-base-300 shadow-sm">
                        <div class="card-body space-y-3 text-sm">
                            <h2 class="card-title">{i18n.t("booking.tips.title")}</h2>
                            { for TIP_KEYS.iter().map(|key| html! {
                                <div>
                                    <p class="font-medium">{i18n.t(&format!("booking.tips.{key}.title"))}</p>
                                    <p class="text-base-content/70">{i18n.t(&format!("booking.tips.{key}.description"))}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
