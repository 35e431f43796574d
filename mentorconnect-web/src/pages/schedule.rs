use std::rc::Rc;

use chrono::{Local, NaiveDate};
use i18nrs::yew::use_translation;
use shared::catalog::Catalog;
use shared::models::{MentoringSession, Role, SessionStatus};
use shared::navigation::{MeetingRoomContext, RouteContext};
use shared::scheduling::{CalendarView, ScheduleCalendar, Step, sessions_in_order};
use strum::IntoEnumIterator;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::{Link, use_navigator};

use crate::routes::{DashboardRoute, MainRoute};

/// The calendar opens on the first upcoming session so seeded data is visible.
fn initial_anchor(catalog: &Catalog) -> NaiveDate {
    catalog
        .upcoming_sessions()
        .map(|session| session.date)
        .min()
        .unwrap_or_else(|| Local::now().date_naive())
}

#[derive(Properties, PartialEq)]
pub struct SchedulePageProps {
    pub role: Role,
}

#[function_component(SchedulePage)]
pub fn schedule_page(props: &SchedulePageProps) -> Html {
    let (i18n, ..) = use_translation();
    let navigator = use_navigator();
    let catalog = use_context::<Rc<Catalog>>();
    let calendar = {
        let catalog = catalog.clone();
        use_state(move || {
            ScheduleCalendar::new(catalog.as_deref().map_or_else(
                || Local::now().date_naive(),
                initial_anchor,
            ))
        })
    };
    let Some(catalog) = catalog else {
        return Html::default();
    };
    let role = props.role;

    let step = |step: Step| {
        let calendar = calendar.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *calendar;
            next.navigate(step);
            calendar.set(next);
        })
    };

    let view_buttons = CalendarView::iter().map(|view| {
        let calendar = calendar.clone();
        let active = calendar.view == view;
        let onclick = Callback::from(move |_: MouseEvent| {
            calendar.set(ScheduleCalendar { view, ..*calendar });
        });
        html! {
            <button class={classes!("btn", "btn-sm", "join-item", active.then_some("btn-active"))} {onclick}>
                { view.label() }
            </button>
        }
    });

    let ordered = sessions_in_order(&catalog.sessions);
    let visible: Vec<&MentoringSession> = ordered
        .into_iter()
        .filter(|session| calendar.shows(session.date))
        .collect();

    let join = |session: &MentoringSession| {
        let navigator = navigator.clone();
        let context = RouteContext::MeetingRoom(MeetingRoomContext {
            meeting_id: session.id.clone(),
            role,
        });
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = navigator.as_ref() {
                navigator.push_with_state(&MainRoute::MeetingRoom, context.clone());
            }
        })
    };

    let week_grid = if calendar.view == CalendarView::Week {
        html! {
            <div class="grid grid-cols-7 gap-2">
                { for calendar.week_days().into_iter().map(|day| {
                    let sessions: Vec<&&MentoringSession> =
                        visible.iter().filter(|session| session.date == day).collect();
                    html! {
                        <div class="rounded-box border border-base-300 p-2 min-h-24">
                            <div class="text-xs font-semibold text-base-content/70">
                                { day.format("%a %-d").to_string() }
                            </div>
                            { for sessions.into_iter().map(|session| html! {
                                <div class="mt-1 rounded bg-primary/10 text-primary text-xs p-1 truncate">
                                    { format!("{} {}", session.start.format("%-I:%M %p"), session.topic) }
                                </div>
                            }) }
                        </div>
                    }
                }) }
            </div>
        }
    } else {
        Html::default()
    };

    let rows = if visible.is_empty() {
        html! {
            <tr>
                <td colspan="5" class="text-center py-6 text-base-content/70">
                    {i18n.t("schedule.empty")}
                </td>
            </tr>
        }
    } else {
        html! {
            <>{ for visible.iter().map(|session| html! {
                <tr key={session.id.clone()}>
                    <td>
                        <div class="font-medium">{ &session.topic }</div>
                        <div class="text-xs text-base-content/60">{ session.kind.label() }</div>
                    </td>
                    <td>{ &session.counterpart.name }</td>
                    <td>
                        <div>{ session.date_label() }</div>
                        <div class="text-xs text-base-content/60">{ session.time_range() }</div>
                    </td>
                    <td>
                        <span class={classes!("badge", session.status.badge_class())}>
                            { session.status.label() }
                        </span>
                    </td>
                    <td class="text-right">
                        {
                            if session.status == SessionStatus::Upcoming {
                                html! {
                                    <button class="btn btn-primary btn-xs" onclick={join(session)}>
                                        {i18n.t("dashboard.join_meeting")}
                                    </button>
                                }
                            } else {
                                Html::default()
                            }
                        }
                    </td>
                </tr>
            }) }</>
        }
    };

    html! {
        <div class="space-y-6">
            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                <div>
                    <h1 class="text-2xl font-bold">{i18n.t("nav.schedule")}</h1>
                    <p class="text-base-content/70">
                        { format!("{} {}", i18n.t("schedule.subtitle"), role.counterpart().plural()) }
                    </p>
                </div>
                <Link<DashboardRoute> to={DashboardRoute::NewSession} classes="btn btn-primary btn-sm">
                    {i18n.t("nav.new_session")}
                </Link<DashboardRoute>>
            </div>
            <div class="card bg-base-100 border border-base-300 shadow-sm">
                <div class="card-body space-y-4">
                    <div class="flex flex-wrap items-center justify-between gap-3">
                        <div class="flex items-center gap-2">
                            <button class="btn btn-ghost btn-sm btn-square" aria-label={i18n.t("schedule.previous")}
                                onclick={step(Step::Previous)} disabled={calendar.view == CalendarView::List}>
                                <Icon icon_id={IconId::HeroiconsOutlineChevronLeft} class="h-4 w-4" />
                            </button>
                            <h2 class="text-lg font-semibold">{ calendar.title() }</h2>
                            <button class="btn btn-ghost btn-sm btn-square" aria-label={i18n.t("schedule.next")}
                                onclick={step(Step::Next)} disabled={calendar.view == CalendarView::List}>
                                <Icon icon_id={IconId::HeroiconsOutlineChevronRight} class="h-4 w-4" />
                            </button>
                        </div>
                        <div class="join">{ for view_buttons }</div>
                    </div>
                    { week_grid }
                    <div class="overflow-x-auto">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{i18n.t("schedule.session")}</th>
                                    <th>{i18n.t("schedule.with")}</th>
                                    <th>{i18n.t("schedule.when")}</th>
                                    <th>{i18n.t("my_mentors.status")}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>{ rows }</tbody>
                        </table>
                    </div>
                </div>
            </div>
        </div>
    }
}
