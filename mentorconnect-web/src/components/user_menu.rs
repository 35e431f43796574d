use std::rc::Rc;

use crate::{
    components::avatar::Avatar,
    models::app_state::{AppState, update_session},
    models::toast_state::{ToastLevel, ToastState, notify},
    routes::MainRoute,
};
use i18nrs::yew::use_translation;
use shared::catalog::Catalog;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::{use_dispatch, use_selector};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Signs out, raises a toast and returns to the landing page.
#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let (i18n, ..) = use_translation();
    let navigator = use_navigator();
    let app = use_dispatch::<AppState>();
    let toasts = use_dispatch::<ToastState>();
    let title = i18n.t("toast.logged_out");
    let description = i18n.t("toast.logged_out_description");

    Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        match update_session(&app, |session, store| session.sign_out(store)) {
            Ok(()) => notify(&toasts, ToastLevel::Info, title.clone(), Some(description.clone())),
            Err(err) => {
                log(&format!("Failed to clear stored role: {err}"));
                notify(&toasts, ToastLevel::Error, err.to_string(), None);
            }
        }
        if let Some(navigator) = navigator.as_ref() {
            navigator.push(&MainRoute::Home);
        }
    })
}

#[function_component(UserMenu)]
pub fn user_menu() -> Html {
    let (i18n, ..) = use_translation();
    let navigator = use_navigator();
    let catalog = use_context::<Rc<Catalog>>();
    let role = use_selector(AppState::role);
    let on_logout = use_logout();

    let Some(catalog) = catalog else {
        return Html::default();
    };
    let profile = &catalog.profile;

    let on_settings = Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        if let Some(navigator) = navigator.as_ref() {
            navigator.push(&MainRoute::Settings);
        }
    });

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle">
                <Avatar initials={profile.initials()} size="w-9" />
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-56">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{ &profile.name }</div>
                    <div class="text-xs text-base-content/70">{ &profile.email }</div>
                    <div class="badge badge-outline badge-sm mt-1">{ role.label() }</div>
                </li>
                <div class="divider my-0"></div>
                <li><a onclick={on_settings}>{i18n.t("nav.settings")}</a></li>
                <div class="divider my-0"></div>
                <li><a onclick={on_logout}>{i18n.t("nav.logout")}</a></li>
            </ul>
        </div>
    }
}
