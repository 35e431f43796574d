use i18nrs::yew::use_translation;
use yew::{Html, Properties, classes, function_component, html};
use yew_icons::Icon;
use yew_router::prelude::Link;

use crate::routes::AppRoute;

#[derive(Properties, PartialEq)]
pub struct NavItemProps {
    pub route: AppRoute,
    pub current_route: AppRoute,
}

/// Sidebar link with icon and translated label.
#[function_component(NavItem)]
pub fn nav_item(props: &NavItemProps) -> Html {
    let (i18n, ..) = use_translation();

    let label = i18n.t(props.route.label_key());
    let active = props.route.is_active_on(&props.current_route);
    let classes = classes!("gap-2", active.then_some("active"));
    let content = html! {
        <>
            <Icon icon_id={props.route.icon()} class="h-5 w-5" />
            {label}
        </>
    };

    html! {
        <li>
            {
                match props.route.clone() {
                    AppRoute::Main(route) => html! {
                        <Link<crate::routes::MainRoute> to={route} {classes}>{content}</Link<crate::routes::MainRoute>>
                    },
                    AppRoute::Dashboard(route) => html! {
                        <Link<crate::routes::DashboardRoute> to={route} {classes}>{content}</Link<crate::routes::DashboardRoute>>
                    },
                }
            }
        </li>
    }
}
