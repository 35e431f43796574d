use std::rc::Rc;

use i18nrs::yew::use_translation;
use shared::catalog::Catalog;
use shared::models::{NotificationPreference, Role};
use strum::IntoEnumIterator;
use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::{use_dispatch, use_selector};

use crate::components::language_selector::LanguageSelector;
use crate::components::theme_switcher::ThemeSwitcher;
use crate::models::app_state::{AppState, update_session};
use crate::models::toast_state::{ToastLevel, ToastState, notify};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ProfileForm {
    name: String,
    email: String,
    bio: String,
}

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let (i18n, ..) = use_translation();
    let catalog = use_context::<Rc<Catalog>>();
    let app = use_dispatch::<AppState>();
    let toasts = use_dispatch::<ToastState>();
    let role = *use_selector(AppState::role);

    let profile = {
        let catalog = catalog.clone();
        use_state(move || {
            let (name, email) = catalog
                .as_deref()
                .map(|catalog| (catalog.profile.name.clone(), catalog.profile.email.clone()))
                .unwrap_or_default();
            ProfileForm {
                name,
                email,
                bio: String::new(),
            }
        })
    };
    let preferences = use_state(move || {
        catalog
            .as_deref()
            .map(Catalog::notification_preferences)
            .unwrap_or_default()
    });

    let edit = |change: fn(&mut ProfileForm, String)| {
        let profile = profile.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*profile).clone();
            change(&mut next, input.value());
            profile.set(next);
        })
    };
    let on_name = edit(|form, value| form.name = value);
    let on_email = edit(|form, value| form.email = value);
    let on_bio = {
        let profile = profile.clone();
        Callback::from(move |event: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = event.target_unchecked_into();
            profile.set(ProfileForm {
                bio: input.value(),
                ..(*profile).clone()
            });
        })
    };

    let on_save = {
        let toasts = toasts.clone();
        let title = i18n.t("settings.saved");
        let description = i18n.t("settings.saved_description");
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            notify(&toasts, ToastLevel::Success, title.clone(), Some(description.clone()));
        })
    };

    let role_options = Role::iter().map(|option| {
        let app = app.clone();
        let toasts = toasts.clone();
        let title = i18n.t("settings.role_switched");
        let onclick = Callback::from(move |_: MouseEvent| {
            match update_session(&app, |session, store| session.switch_role(store, option)) {
                Ok(()) => notify(
                    &toasts,
                    ToastLevel::Success,
                    title.clone(),
                    Some(option.label().to_string()),
                ),
                Err(err) => {
                    log(&format!("Failed to persist role: {err}"));
                    notify(&toasts, ToastLevel::Error, err.to_string(), None);
                }
            }
        });
        html! {
            <button
                type="button"
                class={classes!("btn", "join-item", if option == role { "btn-primary" } else { "btn-outline" })}
                {onclick}
            >
                { option.label() }
            </button>
        }
    });

    let preference_rows = preferences.iter().enumerate().map(|(index, preference)| {
        let preferences = preferences.clone();
        let onchange = Callback::from(move |_: Event| {
            let mut next: Vec<NotificationPreference> = (*preferences).clone();
            if let Some(entry) = next.get_mut(index) {
                entry.enabled = !entry.enabled;
            }
            preferences.set(next);
        });
        html! {
            <label key={preference.id.clone()} class="flex items-center justify-between gap-4 py-3 border-b border-base-300 last:border-0 cursor-pointer">
                <div>
                    <div class="font-medium">{ &preference.title }</div>
                    <div class="text-sm text-base-content/70">{ &preference.description }</div>
                </div>
                <input type="checkbox" class="toggle toggle-primary" checked={preference.enabled} {onchange} />
            </label>
        }
    });

    html! {
        <div class="space-y-6 max-w-3xl">
            <div>
                <h1 class="text-2xl font-bold">{i18n.t("nav.settings")}</h1>
                <p class="text-base-content/70">{i18n.t("settings.subtitle")}</p>
            </div>
            <form class="card bg-base-100 border border-base-300 shadow-sm" onsubmit={on_save}>
                <div class="card-body space-y-3">
                    <h2 class="card-title">{i18n.t("settings.profile")}</h2>
                    <label class="form-control">
                        <span class="label-text mb-1">{i18n.t("auth.name")}</span>
                        <input type="text" class="input input-bordered" value={profile.name.clone()} oninput={on_name} />
                    </label>
                    <label class="form-control">
                        <span class="label-text mb-1">{i18n.t("auth.email")}</span>
                        <input type="email" class="input input-bordered" value={profile.email.clone()} oninput={on_email} />
                    </label>
                    <label class="form-control">
                        <span class="label-text mb-1">{i18n.t("settings.bio")}</span>
                        <textarea class="textarea textarea-bordered" rows="3" value={profile.bio.clone()} oninput={on_bio} />
                    </label>
                    <div class="card-actions justify-end">
                        <button type="submit" class="btn btn-primary">{i18n.t("settings.save")}</button>
                    </div>
                </div>
            </form>
            <div class="card bg-base-100 border border-base-300 shadow-sm">
                <div class="card-body space-y-3">
                    <h2 class="card-title">{i18n.t("settings.role")}</h2>
                    <p class="text-sm text-base-content/70">{i18n.t("settings.role_description")}</p>
                    <div class="join">{ for role_options }</div>
                </div>
            </div>
            <div class="card bg-base-100 border border-base-300 shadow-sm">
                <div class="card-body">
                    <h2 class="card-title">{i18n.t("notifications.title")}</h2>
                    { for preference_rows }
                </div>
            </div>
            <div class="card bg-base-100 border border-base-300 shadow-sm">
                <div class="card-body space-y-4">
                    <h2 class="card-title">{i18n.t("settings.appearance")}</h2>
                    <ThemeSwitcher with_label={true} />
                    <div class="flex items-center justify-between">
                        <span>{i18n.t("language.selector")}</span>
                        <LanguageSelector />
                    </div>
                </div>
            </div>
        </div>
    }
}
