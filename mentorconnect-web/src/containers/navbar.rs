use crate::{
    components::{language_selector::LanguageSelector, theme_switcher::ThemeSwitcher},
    models::app_state::AppState,
    routes::{AppRoute, DashboardRoute, MainRoute, public_routes},
};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::{Link, use_route};
use yewdux::prelude::use_selector;

/// Top navigation for the public pages.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let (i18n, ..) = use_translation();
    let signed_in = use_selector(|state: &AppState| state.session.is_signed_in());
    let current = use_route::<MainRoute>();

    let links = || -> Html {
        html! {
            <>{ for public_routes().into_iter().map(|route| {
                let active = current.as_ref() == Some(&route);
                let label = i18n.t(AppRoute::Main(route.clone()).label_key());
                html! {
                    <li>
                        <Link<MainRoute> to={route} classes={classes!(active.then_some("active"))}>
                            {label}
                        </Link<MainRoute>>
                    </li>
                }
            }) }</>
        }
    };

    let account = if *signed_in {
        html! {
            <Link<DashboardRoute> to={DashboardRoute::Overview} classes="btn btn-primary btn-sm">
                {i18n.t("nav.dashboard")}
            </Link<DashboardRoute>>
        }
    } else {
        html! {
            <>
                <Link<MainRoute> to={MainRoute::Login} classes="btn btn-ghost btn-sm">
                    {i18n.t("nav.login")}
                </Link<MainRoute>>
                <Link<MainRoute> to={MainRoute::Signup} classes="btn btn-primary btn-sm">
                    {i18n.t("nav.signup")}
                </Link<MainRoute>>
            </>
        }
    };

    html! {
        <nav class="navbar justify-between bg-base-300 sticky top-0 z-10">
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-xl text-primary">
                {i18n.t("app.title")}
            </Link<MainRoute>>
            <div class="dropdown dropdown-end md:hidden">
                <button class="btn btn-ghost" aria-label={i18n.t("nav.open_menu")}>
                    <Icon icon_id={IconId::HeroiconsOutlineBars3} class="h-5 w-5" />
                </button>
                <ul
                    tabindex="0"
                    class="dropdown-content menu z-[1] bg-base-200 p-4 rounded-box shadow w-56 gap-2"
                >
                    {links()}
                </ul>
            </div>
            <ul class="hidden menu md:menu-horizontal gap-1">
                {links()}
            </ul>
            <div class="hidden md:flex items-center gap-2">
                <LanguageSelector />
                <ThemeSwitcher />
                {account}
            </div>
        </nav>
    }
}
