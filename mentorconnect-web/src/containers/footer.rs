use crate::config::FrontendConfig;
use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

#[function_component(Footer)]
pub fn footer() -> Html {
    let (i18n, ..) = use_translation();
    let config = FrontendConfig::new();

    html! {
        <footer class="footer p-10 bg-base-200 text-base-content border-t border-base-300">
            <aside>
                <p class="text-lg font-bold text-primary">{i18n.t("app.title")}</p>
                <p class="max-w-xs">{i18n.t("footer.tagline")}</p>
            </aside>
            <nav>
                <h6 class="footer-title">{i18n.t("footer.platform")}</h6>
                <Link<MainRoute> to={MainRoute::FindMentors} classes="link link-hover">{i18n.t("nav.find_mentors")}</Link<MainRoute>>
                <Link<MainRoute> to={MainRoute::About} classes="link link-hover">{i18n.t("nav.how_it_works")}</Link<MainRoute>>
                <Link<MainRoute> to={MainRoute::Forum} classes="link link-hover">{i18n.t("nav.forum")}</Link<MainRoute>>
            </nav>
            <nav>
                <h6 class="footer-title">{i18n.t("footer.account")}</h6>
                <Link<MainRoute> to={MainRoute::Login} classes="link link-hover">{i18n.t("nav.login")}</Link<MainRoute>>
                <Link<MainRoute> to={MainRoute::Signup} classes="link link-hover">{i18n.t("nav.signup")}</Link<MainRoute>>
                <a class="link link-hover" href={config.support_url().to_string()}>{i18n.t("footer.support")}</a>
            </nav>
            <p class="text-sm opacity-70">{"© 2025 MentorConnect. "}{i18n.t("footer.rights")}</p>
        </footer>
    }
}
