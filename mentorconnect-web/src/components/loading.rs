use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};

#[function_component(Loading)]
pub fn loading() -> Html {
    let (i18n, ..) = use_translation();
    html! {
        <div class="flex flex-col items-center justify-center min-h-screen">
            <span class="text-xl font-bold text-primary">{i18n.t("app.title")}</span>
            <span class="loading loading-dots loading-md mt-3"></span>
        </div>
    }
}
