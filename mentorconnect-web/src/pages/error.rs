use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

/// Shown for any path that matches no route.
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <div class="flex flex-col items-center justify-center py-24 space-y-4 text-center">
            <h1 class="text-6xl font-bold text-primary">{ "404" }</h1>
            <p class="text-xl">{i18n.t("error.not_found")}</p>
            <p class="text-base-content/70">{i18n.t("error.description")}</p>
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary">{i18n.t("error.home")}</Link<MainRoute>>
        </div>
    }
}
