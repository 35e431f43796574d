use std::rc::Rc;

use i18nrs::yew::use_translation;
use shared::catalog::Catalog;
use shared::models::{MentoringSession, Role};
use shared::navigation::{MeetingRoomContext, RouteContext};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::{Link, use_navigator};

use crate::components::avatar::Avatar;
use crate::routes::{DashboardRoute, MainRoute};

const STAT_ICONS: [IconId; 4] = [
    IconId::HeroiconsOutlineUsers,
    IconId::HeroiconsOutlineCalendar,
    IconId::HeroiconsOutlineClock,
    IconId::HeroiconsOutlineTrophy,
];

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub role: Role,
}

#[derive(Properties, PartialEq)]
struct UpcomingSessionProps {
    session: MentoringSession,
    role: Role,
}

#[function_component(UpcomingSession)]
fn upcoming_session(props: &UpcomingSessionProps) -> Html {
    let (i18n, ..) = use_translation();
    let navigator = use_navigator();
    let session = &props.session;

    let on_join = {
        let navigator = navigator.clone();
        let context = RouteContext::MeetingRoom(MeetingRoomContext {
            meeting_id: session.id.clone(),
            role: props.role,
        });
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = navigator.as_ref() {
                navigator.push_with_state(&MainRoute::MeetingRoom, context.clone());
            }
        })
    };
    let on_reschedule = {
        let context = RouteContext::ScheduleMeeting { role: props.role };
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = navigator.as_ref() {
                navigator.push_with_state(&MainRoute::ScheduleMeeting, context.clone());
            }
        })
    };

    html! {
        <div class="flex gap-4 border-b border-base-300 pb-4 last:border-0 last:pb-0">
            <Avatar initials={shared::models::initials(&session.counterpart.name)} />
            <div class="flex-1">
                <div class="flex flex-col sm:flex-row sm:justify-between sm:items-start gap-2">
                    <div>
                        <h3 class="font-medium">{ &session.topic }</h3>
                        <p class="text-sm text-base-content/70">{ format!("{} {}", i18n.t("dashboard.with"), session.counterpart.name) }</p>
                    </div>
                    <div class="flex items-center gap-1 text-sm">
                        <Icon icon_id={IconId::HeroiconsOutlineClock} class="h-4 w-4 opacity-60" />
                        <span>{ format!("{} min", session.duration_minutes) }</span>
                    </div>
                </div>
                <div class="mt-2 flex flex-wrap gap-2">
                    <span class="badge badge-ghost gap-1">
                        <Icon icon_id={IconId::HeroiconsOutlineCalendar} class="h-3 w-3" />
                        { format!("{}, {}", session.date_label(), session.time_range()) }
                    </span>
                    <button class="btn btn-primary btn-xs" onclick={on_join}>{i18n.t("dashboard.join_meeting")}</button>
                    <button class="btn btn-ghost btn-xs" onclick={on_reschedule}>{i18n.t("dashboard.reschedule")}</button>
                </div>
            </div>
        </div>
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let (i18n, ..) = use_translation();
    let Some(catalog) = use_context::<Rc<Catalog>>() else {
        return Html::default();
    };
    let role = props.role;

    let intro_key = match role {
        Role::Mentee => "dashboard.intro_mentee",
        Role::Mentor => "dashboard.intro_mentor",
    };
    let resources_key = match role {
        Role::Mentee => "dashboard.resources_mentee",
        Role::Mentor => "dashboard.resources_mentor",
    };

    let stats = catalog.dashboard_stats(role).into_iter().zip(STAT_ICONS).map(|(stat, icon)| html! {
        <div class="card bg-base-100 border border-base-300 shadow-sm">
            <div class="card-body p-5 flex-row justify-between items-start">
                <div>
                    <p class="text-sm text-base-content/70">{ stat.label }</p>
                    <p class="text-2xl font-bold mt-1">{ stat.value }</p>
                </div>
                <div class="p-2 rounded-full bg-primary/10 text-primary">
                    <Icon icon_id={icon} class="h-5 w-5" />
                </div>
            </div>
        </div>
    });

    let upcoming: Vec<MentoringSession> = catalog.upcoming_sessions().cloned().collect();
    let upcoming_list = if upcoming.is_empty() {
        html! {
            <div class="text-center py-6">
                <p class="text-base-content/70">{i18n.t("dashboard.no_sessions")}</p>
                <Link<MainRoute> to={MainRoute::ScheduleMeeting} classes="btn btn-primary btn-sm mt-3">
                    {i18n.t("dashboard.schedule_session")}
                </Link<MainRoute>>
            </div>
        }
    } else {
        html! {
            <div class="space-y-4">
                { for upcoming.into_iter().map(|session| html! {
                    <UpcomingSession key={session.id.clone()} session={session.clone()} {role} />
                }) }
            </div>
        }
    };

    let seed = catalog.inbox_seed(role);
    let recent = seed.conversations.iter().take(3).map(|conversation| html! {
        <div class="flex gap-3 border-b border-base-300 pb-4 last:border-0 last:pb-0">
            <Avatar initials={conversation.initials()} />
            <div class="flex-1 min-w-0">
                <div class="flex justify-between items-start gap-2">
                    <h3 class="font-medium">{ &conversation.participant }</h3>
                    <span class="text-xs text-base-content/60">{ &conversation.timestamp }</span>
                </div>
                <p class="text-sm text-base-content/70 mt-1 truncate">{ &conversation.last_message }</p>
                <Link<DashboardRoute>
                    to={DashboardRoute::MessageThread { id: conversation.id.clone() }}
                    classes="link link-primary text-sm"
                >
                    {i18n.t("dashboard.reply")}
                </Link<DashboardRoute>>
            </div>
            {
                if conversation.has_unread() {
                    html! { <span class="w-2 h-2 rounded-full bg-primary mt-2"></span> }
                } else {
                    Html::default()
                }
            }
        </div>
    });

    let resources = catalog.resources(role).into_iter().map(|resource| html! {
        <div class="border border-base-300 rounded-md p-4 hover:border-primary/30 transition-all">
            <h3 class="font-medium mb-2">{ resource.title }</h3>
            <p class="text-sm text-base-content/70 mb-3">{ resource.description }</p>
            <a href={resource.link} class="link link-primary text-sm inline-flex items-center gap-1">
                {i18n.t("dashboard.view_resource")}
                <Icon icon_id={IconId::HeroiconsOutlineChevronRight} class="h-3 w-3" />
            </a>
        </div>
    });

    html! {
        <div class="space-y-6">
            <div class="flex flex-col lg:flex-row justify-between gap-4">
                <div>
                    <h1 class="text-2xl font-bold">
                        { format!("{}, {}!", i18n.t("dashboard.welcome"), catalog.profile.first_name()) }
                    </h1>
                    <p class="text-base-content/70">{i18n.t(intro_key)}</p>
                </div>
                {
                    if role == Role::Mentee {
                        html! {
                            <Link<MainRoute> to={MainRoute::FindMentors} classes="btn btn-primary self-start">
                                {i18n.t("dashboard.find_more_mentors")}
                            </Link<MainRoute>>
                        }
                    } else {
                        Html::default()
                    }
                }
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                { for stats }
            </div>

            <div class="grid lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2 card bg-base-100 border border-base-300 shadow-sm">
                    <div class="p-5 border-b border-base-300 flex justify-between items-center">
                        <h2 class="font-semibold text-lg flex items-center gap-2">
                            <Icon icon_id={IconId::HeroiconsOutlineCalendar} class="h-5 w-5 text-primary" />
                            {i18n.t("dashboard.upcoming_sessions")}
                        </h2>
                        <Link<DashboardRoute> to={DashboardRoute::Schedule} classes="link link-primary text-sm">
                            {i18n.t("dashboard.view_all")}
                        </Link<DashboardRoute>>
                    </div>
                    <div class="p-5">{upcoming_list}</div>
                </div>
                <div class="card bg-base-100 border border-base-300 shadow-sm">
                    <div class="p-5 border-b border-base-300 flex justify-between items-center">
                        <h2 class="font-semibold text-lg flex items-center gap-2">
                            <Icon icon_id={IconId::HeroiconsOutlineChatBubbleLeftRight} class="h-5 w-5 text-primary" />
                            {i18n.t("dashboard.recent_messages")}
                        </h2>
                        <Link<DashboardRoute> to={DashboardRoute::Messages} classes="link link-primary text-sm">
                            {i18n.t("dashboard.view_all")}
                        </Link<DashboardRoute>>
                    </div>
                    <div class="p-5 space-y-4">{ for recent }</div>
                </div>
            </div>

            <div class="card bg-base-100 border border-base-300 shadow-sm">
                <div class="p-5 border-b border-base-300">
                    <h2 class="font-semibold text-lg flex items-center gap-2">
                        <Icon icon_id={IconId::HeroiconsOutlineBookmark} class="h-5 w-5 text-primary" />
                        {i18n.t(resources_key)}
                    </h2>
                </div>
                <div class="p-5 grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                    { for resources }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use shared::catalog::Catalog;

    #[test]
    fn test_upcoming_session_keys_are_unique() {
        let catalog = Catalog::seeded();
        let ids: Vec<&str> = catalog.upcoming_sessions().map(|session| session.id.as_str()).collect();
        assert!(!ids.is_empty());
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());
    }
}
