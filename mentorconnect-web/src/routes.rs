use crate::{
    containers::{layout::DashboardLayout, site_layout::SiteLayout},
    models::app_state::AppState,
    pages::*,
};
use shared::auth::AuthMode;
use shared::models::Role;
use strum::EnumIter;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_icons::IconId;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/dashboard")]
    DashboardRoot,
    #[at("/dashboard/*")]
    Dashboard,
    #[at("/mentors")]
    FindMentors,
    #[at("/mentors/:id")]
    MentorProfile { id: String },
    #[at("/forum")]
    Forum,
    #[at("/about")]
    About,
    #[at("/settings")]
    Settings,
    #[at("/schedule-meeting")]
    ScheduleMeeting,
    #[at("/virtual-meeting-room")]
    MeetingRoom,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// The routes nested under `/dashboard`.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum DashboardRoute {
    #[at("/dashboard")]
    Overview,
    #[at("/dashboard/mentors")]
    Mentors,
    #[at("/dashboard/mentees")]
    Mentees,
    #[at("/dashboard/schedule")]
    Schedule,
    #[at("/dashboard/messages")]
    Messages,
    #[at("/dashboard/messages/:id")]
    MessageThread { id: String },
    #[at("/dashboard/new-session")]
    NewSession,
    #[not_found]
    #[at("/dashboard/404")]
    NotFound,
}

/// The app routes.
#[derive(Debug, Clone, PartialEq)]
pub enum AppRoute {
    Main(MainRoute),
    Dashboard(DashboardRoute),
}

impl Default for AppRoute {
    fn default() -> Self {
        AppRoute::Main(MainRoute::Home)
    }
}

impl From<DashboardRoute> for AppRoute {
    fn from(route: DashboardRoute) -> Self {
        AppRoute::Dashboard(route)
    }
}

impl From<MainRoute> for AppRoute {
    fn from(route: MainRoute) -> Self {
        AppRoute::Main(route)
    }
}

impl AppRoute {
    /// Translation key of the sidebar label.
    pub fn label_key(&self) -> &'static str {
        match self {
            AppRoute::Dashboard(DashboardRoute::Mentors) => "nav.my_mentors",
            AppRoute::Dashboard(DashboardRoute::Mentees) => "nav.my_mentees",
            AppRoute::Dashboard(DashboardRoute::Schedule) => "nav.schedule",
            AppRoute::Dashboard(
                DashboardRoute::Messages | DashboardRoute::MessageThread { .. },
            ) => "nav.messages",
            AppRoute::Dashboard(DashboardRoute::NewSession) => "nav.new_session",
            AppRoute::Main(MainRoute::Forum) => "nav.forum",
            AppRoute::Main(MainRoute::Settings) => "nav.settings",
            AppRoute::Main(MainRoute::ScheduleMeeting) => "nav.schedule_meeting",
            AppRoute::Main(MainRoute::FindMentors) => "nav.find_mentors",
            AppRoute::Main(MainRoute::About) => "nav.how_it_works",
            _ => "nav.dashboard",
        }
    }

    pub fn icon(&self) -> IconId {
        match self {
            AppRoute::Dashboard(DashboardRoute::Mentors | DashboardRoute::Mentees) => {
                IconId::HeroiconsOutlineUsers
            }
            AppRoute::Dashboard(DashboardRoute::Schedule | DashboardRoute::NewSession)
            | AppRoute::Main(MainRoute::ScheduleMeeting) => IconId::HeroiconsOutlineCalendar,
            AppRoute::Dashboard(
                DashboardRoute::Messages | DashboardRoute::MessageThread { .. },
            ) => IconId::HeroiconsOutlineChatBubbleLeftRight,
            AppRoute::Main(MainRoute::Forum) => IconId::HeroiconsOutlineChatBubbleOvalLeftEllipsis,
            AppRoute::Main(MainRoute::Settings) => IconId::HeroiconsOutlineCog6Tooth,
            _ => IconId::HeroiconsOutlineHome,
        }
    }

    /// Whether the sidebar entry for `self` should be highlighted on `current`.
    pub fn is_active_on(&self, current: &AppRoute) -> bool {
        match (self, current) {
            (
                AppRoute::Dashboard(DashboardRoute::Messages),
                AppRoute::Dashboard(DashboardRoute::MessageThread { .. }),
            ) => true,
            _ => self == current,
        }
    }
}

/// Sidebar entries for `role`. Settings and logout are rendered separately.
pub fn sidebar_routes(role: Role) -> Vec<AppRoute> {
    let people = match role {
        Role::Mentee => DashboardRoute::Mentors,
        Role::Mentor => DashboardRoute::Mentees,
    };
    vec![
        DashboardRoute::Overview.into(),
        people.into(),
        DashboardRoute::Schedule.into(),
        DashboardRoute::Messages.into(),
        MainRoute::Forum.into(),
    ]
}

/// Links shown in the public navigation bar.
pub fn public_routes() -> Vec<MainRoute> {
    vec![MainRoute::FindMentors, MainRoute::About, MainRoute::Forum]
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let role = use_selector(AppState::role);
    let role = *role;

    match props.route.clone() {
        MainRoute::Home => html! {
            <SiteLayout><HomePage /></SiteLayout>
        },
        MainRoute::Login => html! { <AuthPage key="login" mode={AuthMode::Login} /> },
        MainRoute::Signup => html! { <AuthPage key="signup" mode={AuthMode::Signup} /> },
        MainRoute::DashboardRoot | MainRoute::Dashboard => html! {
            <Switch<DashboardRoute> render={switch_dashboard} />
        },
        MainRoute::FindMentors => html! {
            <SiteLayout><FindMentorsPage /></SiteLayout>
        },
        MainRoute::MentorProfile { id } => html! {
            <SiteLayout><MentorProfilePage {id} /></SiteLayout>
        },
        MainRoute::Forum => html! {
            <SiteLayout><ForumPage /></SiteLayout>
        },
        MainRoute::About => html! {
            <SiteLayout><AboutPage /></SiteLayout>
        },
        MainRoute::Settings => html! {
            <DashboardLayout current_route={AppRoute::Main(MainRoute::Settings)}>
                <SettingsPage />
            </DashboardLayout>
        },
        MainRoute::ScheduleMeeting => html! {
            <DashboardLayout current_route={AppRoute::Main(MainRoute::ScheduleMeeting)}>
                <ScheduleMeetingPage key={role.as_str()} {role} />
            </DashboardLayout>
        },
        MainRoute::MeetingRoom => html! { <MeetingRoomPage key={role.as_str()} {role} /> },
        MainRoute::NotFound => html! {
            <SiteLayout><ErrorPage /></SiteLayout>
        },
    }
}

/// Switch function for the main routes.
pub fn switch_main(route: MainRoute) -> Html {
    log(std::format!("Switching to main route: {route:?}").as_str());
    html! { <MainRouteView {route} /> }
}

#[derive(Properties, PartialEq)]
pub struct DashboardRouteViewProps {
    pub route: DashboardRoute,
}

#[function_component(DashboardRouteView)]
fn dashboard_route_view(props: &DashboardRouteViewProps) -> Html {
    let role = use_selector(AppState::role);
    let role = *role;
    let current_route = AppRoute::Dashboard(props.route.clone());

    let content = match props.route.clone() {
        DashboardRoute::Overview => html! { <DashboardPage {role} /> },
        DashboardRoute::Mentors => html! { <MyMentorsPage /> },
        DashboardRoute::Mentees => html! { <MyMenteesPage /> },
        DashboardRoute::Schedule => html! { <SchedulePage {role} /> },
        DashboardRoute::Messages => html! { <MessagesPage key={role.as_str()} {role} /> },
        DashboardRoute::MessageThread { id } => html! {
            <MessagesPage key={role.as_str()} {role} conversation_id={Some(AttrValue::from(id))} />
        },
        DashboardRoute::NewSession => html! { <NewSessionPage key={role.as_str()} {role} /> },
        DashboardRoute::NotFound => html! { <ErrorPage /> },
    };

    html! {
        <DashboardLayout {current_route}>
            {content}
        </DashboardLayout>
    }
}

/// Switch function for the dashboard routes.
fn switch_dashboard(route: DashboardRoute) -> Html {
    log(std::format!("Switching to dashboard route: {route:?}").as_str());
    html! { <DashboardRouteView {route} /> }
}
