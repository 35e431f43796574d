use crate::components::nav_item::NavItem;
use crate::components::user_menu::use_logout;
use crate::containers::header::Header;
use crate::models::app_state::AppState;
use crate::routes::{AppRoute, MainRoute, sidebar_routes};
use i18nrs::yew::use_translation;
use wasm_bindgen::prelude::*;
use yew::{Children, Html, Properties, classes, function_component, html, use_effect_with};
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

const DRAWER_ID: &str = "dashboard-drawer";

#[derive(Properties, PartialEq)]
pub struct DashboardLayoutProps {
    pub children: Children,
    pub current_route: AppRoute,
}

/// Sidebar + header shell shared by every signed-in page.
#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &DashboardLayoutProps) -> Html {
    let (i18n, ..) = use_translation();
    let role = use_selector(AppState::role);
    let on_logout = use_logout();

    {
        let role = *role;
        use_effect_with(role, move |role| {
            log(&format!("Dashboard rendered for {role}"));
            || {}
        });
    }

    let nav_items = sidebar_routes(*role).into_iter().map(|route| {
        html! { <NavItem route={route} current_route={props.current_route.clone()} /> }
    });

    html! {
        <div class="drawer lg:drawer-open min-h-screen bg-base-100">
            <input id={DRAWER_ID} type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col">
                <Header drawer_id={DRAWER_ID} />
                <main class={classes!("flex-grow", "p-4", "md:p-6", "transition-all", "duration-300")}>
                    {props.children.clone()}
                </main>
            </div>
            <div class="drawer-side z-20">
                <label for={DRAWER_ID} aria-label={i18n.t("nav.close_menu")} class="drawer-overlay"></label>
                <aside class="bg-base-200 w-64 min-h-full flex flex-col">
                    <div class="p-4 border-b border-base-300">
                        <Link<MainRoute> to={MainRoute::Home} classes="text-xl font-bold text-primary">
                            {i18n.t("app.title")}
                        </Link<MainRoute>>
                        <div class="mt-1 badge badge-outline">{role.label()}</div>
                    </div>
                    <ul class="menu flex-grow gap-1 p-2">
                        { for nav_items }
                    </ul>
                    <ul class="menu gap-1 p-2 border-t border-base-300">
                        <NavItem route={AppRoute::Main(MainRoute::Settings)} current_route={props.current_route.clone()} />
                        <li>
                            <a class="gap-2 text-error" onclick={on_logout}>
                                <Icon icon_id={IconId::HeroiconsOutlineArrowRightOnRectangle} class="h-5 w-5" />
                                {i18n.t("nav.logout")}
                            </a>
                        </li>
                    </ul>
                </aside>
            </div>
        </div>
    }
}
