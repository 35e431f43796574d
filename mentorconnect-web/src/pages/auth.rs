use i18nrs::yew::use_translation;
use shared::auth::{AuthForm, AuthMode, AuthQuery};
use shared::models::Role;
use strum::IntoEnumIterator;
use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::{Link, use_location, use_navigator};
use yewdux::prelude::use_dispatch;

use crate::models::app_state::{AppState, update_session};
use crate::models::toast_state::{ToastLevel, ToastState, notify};
use crate::routes::{DashboardRoute, MainRoute};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[derive(Properties, PartialEq)]
pub struct AuthPageProps {
    pub mode: AuthMode,
}

#[function_component(AuthPage)]
pub fn auth_page(props: &AuthPageProps) -> Html {
    let (i18n, ..) = use_translation();
    let navigator = use_navigator();
    let location = use_location();
    let app = use_dispatch::<AppState>();
    let toasts = use_dispatch::<ToastState>();
    let mode = props.mode;

    let query = location
        .as_ref()
        .and_then(|location| location.query::<AuthQuery>().ok())
        .unwrap_or_default();
    let form = use_state(|| AuthForm::new(mode, query.default_role()));
    let error = use_state(|| None::<String>);

    let edit = |change: fn(&mut AuthForm, String)| {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            change(&mut next, input.value());
            form.set(next);
        })
    };
    let on_name = edit(|form, value| form.name = value);
    let on_email = edit(|form, value| form.email = value);
    let on_password = edit(|form, value| form.password = value);

    let on_toggle_password = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(AuthForm {
                show_password: !form.show_password,
                ..(*form).clone()
            });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        let welcome = i18n.t("auth.welcome");
        let outcome = i18n.t(match mode {
            AuthMode::Login => "auth.signed_in_as",
            AuthMode::Signup => "auth.account_created",
        });
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let submitted = AuthForm {
                mode,
                ..(*form).clone()
            };
            let role = match submitted.submit() {
                Ok(role) => role,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };
            error.set(None);
            if let Err(err) = update_session(&app, |session, store| session.sign_in(store, role)) {
                log(&format!("Failed to persist role: {err}"));
                notify(&toasts, ToastLevel::Error, err.to_string(), None);
            }
            notify(
                &toasts,
                ToastLevel::Success,
                welcome.clone(),
                Some(format!("{outcome} {}", role.label())),
            );
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&DashboardRoute::Overview);
            }
        })
    };

    let roles = Role::iter().map(|role| {
        let form = form.clone();
        let checked = form.role == role;
        let onchange = Callback::from(move |_: Event| {
            form.set(AuthForm {
                role,
                ..(*form).clone()
            });
        });
        html! {
            <label class={classes!("btn", "flex-1", if checked { "btn-primary" } else { "btn-outline" })}>
                <input type="radio" name="role" class="hidden" value={role.as_str()} {checked} {onchange} />
                { role.label() }
            </label>
        }
    });

    let (switch_prompt, switch_route, switch_label) = match mode {
        AuthMode::Login => ("auth.no_account", MainRoute::Signup, "nav.signup"),
        AuthMode::Signup => ("auth.have_account", MainRoute::Login, "nav.login"),
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-base-200 px-4">
            <div class="card w-full max-w-md bg-base-100 shadow-xl">
                <form class="card-body space-y-3" {onsubmit} novalidate={true}>
                    <Link<MainRoute> to={MainRoute::Home} classes="text-xl font-bold text-primary text-center">
                        {i18n.t("app.title")}
                    </Link<MainRoute>>
                    <div class="text-center">
                        <h1 class="text-2xl font-bold">{ mode.heading() }</h1>
                        <p class="text-sm text-base-content/70">{ mode.subheading() }</p>
                    </div>
                    {
                        error.as_ref().map_or_else(Html::default, |message| html! {
                            <div role="alert" class="alert alert-error text-sm">{ message }</div>
                        })
                    }
                    {
                        if mode == AuthMode::Signup {
                            html! {
                                <label class="form-control">
                                    <span class="label-text mb-1">{i18n.t("auth.name")}</span>
                                    <input type="text" class="input input-bordered" value={form.name.clone()} oninput={on_name} />
                                </label>
                            }
                        } else {
                            Html::default()
                        }
                    }
                    <label class="form-control">
                        <span class="label-text mb-1">{i18n.t("auth.email")}</span>
                        <input type="email" class="input input-bordered" value={form.email.clone()} oninput={on_email} />
                    </label>
                    <label class="form-control">
                        <span class="label-text mb-1">{i18n.t("auth.password")}</span>
                        <div class="join w-full">
                            <input
                                type={if form.show_password { "text" } else { "password" }}
                                class="input input-bordered join-item flex-1"
                                value={form.password.clone()}
                                oninput={on_password}
                            />
                            <button type="button" class="btn join-item" onclick={on_toggle_password}>
                                <Icon
                                    icon_id={if form.show_password { IconId::HeroiconsOutlineEyeSlash } else { IconId::HeroiconsOutlineEye }}
                                    class="h-4 w-4"
                                />
                            </button>
                        </div>
                    </label>
                    <div>
                        <span class="label-text">{i18n.t("auth.role")}</span>
                        <div class="flex gap-2 mt-1">{ for roles }</div>
                    </div>
                    <button type="submit" class="btn btn-primary w-full">
                        {i18n.t(match mode {
                            AuthMode::Login => "nav.login",
                            AuthMode::Signup => "nav.signup",
                        })}
                    </button>
                    <p class="text-sm text-center">
                        {i18n.t(switch_prompt)}{" "}
                        <Link<MainRoute> to={switch_route} classes="link link-primary">{i18n.t(switch_label)}</Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
