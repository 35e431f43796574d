//! Tests for the route tables and sidebar composition.

#[cfg(test)]
mod tests {
    use crate::routes::{AppRoute, DashboardRoute, MainRoute, public_routes, sidebar_routes};
    use shared::models::Role;
    use strum::IntoEnumIterator;
    use test_case::test_case;
    use yew_router::Routable;

    #[test_case("/", MainRoute::Home ; "home")]
    #[test_case("/login", MainRoute::Login ; "login")]
    #[test_case("/signup", MainRoute::Signup ; "signup")]
    #[test_case("/dashboard", MainRoute::DashboardRoot ; "dashboard root")]
    #[test_case("/dashboard/messages", MainRoute::Dashboard ; "nested dashboard")]
    #[test_case("/mentors", MainRoute::FindMentors ; "find mentors")]
    #[test_case("/forum", MainRoute::Forum ; "forum")]
    #[test_case("/virtual-meeting-room", MainRoute::MeetingRoom ; "meeting room")]
    #[test_case("/no/such/page", MainRoute::NotFound ; "unknown")]
    fn test_main_route_recognize(path: &str, expected: MainRoute) {
        assert_eq!(MainRoute::recognize(path), Some(expected));
    }

    #[test]
    fn test_mentor_profile_carries_id() {
        assert_eq!(
            MainRoute::recognize("/mentors/sarah-johnson"),
            Some(MainRoute::MentorProfile {
                id: "sarah-johnson".to_string()
            })
        );
    }

    #[test_case("/dashboard", DashboardRoute::Overview ; "overview")]
    #[test_case("/dashboard/mentors", DashboardRoute::Mentors ; "mentors")]
    #[test_case("/dashboard/mentees", DashboardRoute::Mentees ; "mentees")]
    #[test_case("/dashboard/schedule", DashboardRoute::Schedule ; "schedule")]
    #[test_case("/dashboard/new-session", DashboardRoute::NewSession ; "new session")]
    #[test_case("/dashboard/messages/conv-1", DashboardRoute::MessageThread { id: "conv-1".into() } ; "thread")]
    fn test_dashboard_route_recognize(path: &str, expected: DashboardRoute) {
        assert_eq!(DashboardRoute::recognize(path), Some(expected));
    }

    #[test]
    fn test_dashboard_paths_stay_under_prefix() {
        for route in DashboardRoute::iter() {
            assert!(route.to_path().starts_with("/dashboard"), "{route:?}");
        }
    }

    #[test]
    fn test_sidebar_for_mentee_lists_mentors() {
        let routes = sidebar_routes(Role::Mentee);
        assert!(routes.contains(&AppRoute::Dashboard(DashboardRoute::Mentors)));
        assert!(!routes.contains(&AppRoute::Dashboard(DashboardRoute::Mentees)));
        assert_eq!(routes.first(), Some(&AppRoute::Dashboard(DashboardRoute::Overview)));
    }

    #[test]
    fn test_sidebar_for_mentor_lists_mentees() {
        let routes = sidebar_routes(Role::Mentor);
        assert!(routes.contains(&AppRoute::Dashboard(DashboardRoute::Mentees)));
        assert!(!routes.contains(&AppRoute::Dashboard(DashboardRoute::Mentors)));
        assert_eq!(routes.len(), 5);
    }

    #[test]
    fn test_messages_entry_active_on_thread() {
        let messages = AppRoute::from(DashboardRoute::Messages);
        let thread = AppRoute::from(DashboardRoute::MessageThread { id: "conv-2".into() });
        assert!(messages.is_active_on(&thread));
        assert!(messages.is_active_on(&messages));
        assert!(!thread.is_active_on(&messages));
        assert!(!AppRoute::from(DashboardRoute::Schedule).is_active_on(&messages));
    }

    #[test_case(AppRoute::Dashboard(DashboardRoute::Mentors), "nav.my_mentors")]
    #[test_case(AppRoute::Dashboard(DashboardRoute::MessageThread { id: "x".into() }), "nav.messages")]
    #[test_case(AppRoute::Main(MainRoute::Forum), "nav.forum")]
    #[test_case(AppRoute::Main(MainRoute::Settings), "nav.settings")]
    #[test_case(AppRoute::default(), "nav.dashboard")]
    fn test_label_keys(route: AppRoute, expected: &str) {
        assert_eq!(route.label_key(), expected);
    }

    #[test]
    fn test_every_label_key_is_translated() {
        let en: serde_json::Value =
            serde_json::from_str(include_str!("../translations/en.json")).unwrap();
        let routes = MainRoute::iter()
            .map(AppRoute::from)
            .chain(DashboardRoute::iter().map(AppRoute::from));
        for route in routes {
            let pointer = format!("/{}", route.label_key().replace('.', "/"));
            assert!(en.pointer(&pointer).is_some(), "missing {pointer}");
        }
    }

    #[test]
    fn test_public_routes() {
        assert_eq!(
            public_routes(),
            vec![MainRoute::FindMentors, MainRoute::About, MainRoute::Forum]
        );
    }
}
