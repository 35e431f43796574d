use gloo_storage::{LocalStorage, Storage};
use i18nrs::yew::use_translation;
use web_sys::window;
use yew::{
    Callback, Classes, Html, Properties, function_component, html, use_effect_with, use_state,
};
use yew_icons::{Icon, IconId};

const THEME_STORAGE_KEY: &str = "mentorconnect.theme";

fn apply_theme(theme: &str) {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(html_element) = document.document_element()
    {
        let _ = html_element.set_attribute("data-theme", theme);
    }
}

fn system_theme() -> &'static str {
    let prefers_dark = window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|query| query.matches());
    if prefers_dark { "dark" } else { "light" }
}

#[derive(Properties, PartialEq, Eq)]
pub struct ThemeSwitcherProps {
    #[prop_or_default]
    pub class: Classes,
    /// Render as a labelled toggle instead of an icon button.
    #[prop_or(false)]
    pub with_label: bool,
}

/// Light/dark toggle. The choice is remembered in local storage; without one
/// the system preference wins.
#[function_component(ThemeSwitcher)]
pub fn theme_switcher(props: &ThemeSwitcherProps) -> Html {
    let (i18n, ..) = use_translation();
    let current_theme = use_state(|| "light".to_string());

    {
        let current_theme = current_theme.clone();
        use_effect_with((), move |()| {
            let theme = LocalStorage::get::<String>(THEME_STORAGE_KEY)
                .ok()
                .filter(|theme| theme == "dark" || theme == "light")
                .unwrap_or_else(|| system_theme().to_string());
            apply_theme(&theme);
            current_theme.set(theme);
            || {}
        });
    }

    let toggle_theme = {
        let current_theme = current_theme.clone();
        Callback::from(move |_: yew::MouseEvent| {
            let next = if *current_theme == "dark" { "light" } else { "dark" };
            apply_theme(next);
            if let Err(err) = LocalStorage::set(THEME_STORAGE_KEY, next) {
                web_sys::console::warn_1(&format!("Failed to store theme: {err}").into());
            }
            current_theme.set(next.to_string());
        })
    };

    let is_dark = *current_theme == "dark";

    if props.with_label {
        return html! {
            <label class={classes_with(&props.class, "label cursor-pointer gap-4")}>
                <span class="label-text">{i18n.t("settings.dark_mode")}</span>
                <input type="checkbox" class="toggle toggle-primary" checked={is_dark} onclick={toggle_theme} />
            </label>
        };
    }

    let theme_icon = if is_dark {
        IconId::HeroiconsSolidSun
    } else {
        IconId::HeroiconsSolidMoon
    };

    html! {
        <div class={props.class.clone()}>
            <button
                class="btn btn-ghost btn-circle"
                onclick={toggle_theme}
                aria-label={i18n.t("theme.selector")}
            >
                <Icon icon_id={theme_icon} class="h-5 w-5" />
            </button>
        </div>
    }
}

fn classes_with(base: &Classes, extra: &'static str) -> Classes {
    let mut classes = base.clone();
    classes.push(extra);
    classes
}
