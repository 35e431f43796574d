mod app;
mod components;
mod config;
mod containers;
mod language;
mod models;
mod pages;
mod routes;
mod storage;

#[cfg(test)]
mod routes_test;

use std::collections::HashMap;
use std::rc::Rc;

use app::App;
use i18nrs::yew::I18nProvider;
use i18nrs::yew::I18nProviderConfig;
use language::supported_languages;
use shared::catalog::Catalog;
use yew::Renderer;
use yew::{ContextProvider, Html, function_component, html, use_memo};
use yewdux::YewduxRoot;

#[function_component(InternationalApp)]
fn international_app() -> Html {
    let catalog = use_memo((), |()| Catalog::seeded());
    let translations: HashMap<&str, &str> = supported_languages()
        .iter()
        .map(|(&key, value)| (key, value.translation))
        .collect();

    let config = I18nProviderConfig {
        translations,
        default_language: "en".to_string(),
        ..Default::default()
    };

    html! {
        <YewduxRoot>
            <I18nProvider ..config>
                <ContextProvider<Rc<Catalog>> context={catalog}>
                    <App />
                </ContextProvider<Rc<Catalog>>>
            </I18nProvider>
        </YewduxRoot>
    }
}

fn main() {
    // Print full panic payloads to the browser console
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            web_sys::console::log_1(&format!("Panic: {s}").into());
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            web_sys::console::log_1(&format!("Panic: {s}").into());
        } else {
            web_sys::console::log_1(&"Unknown panic".into());
        }
        if let Some(location) = info.location() {
            web_sys::console::log_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));

    web_sys::console::log_1(&"Starting MentorConnect".into());

    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    match body {
        Some(root) => {
            Renderer::<InternationalApp>::with_root(root.into()).render();
        }
        None => web_sys::console::error_1(&"No <body> element to mount MentorConnect into".into()),
    }
}
