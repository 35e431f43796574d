use shared::session::UserSession;
use wasm_bindgen::prelude::*;
use yew::{Html, function_component, html, use_effect_with, use_state};
use yew_router::prelude::*;
use yewdux::prelude::use_dispatch;

use crate::components::loading::Loading;
use crate::components::toast_host::ToastHost;
use crate::models::app_state::AppState;
use crate::routes::{MainRoute, switch_main};
use crate::storage::BrowserRoleStore;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[function_component(App)]
pub fn app() -> Html {
    let dispatch = use_dispatch::<AppState>();
    let restored = use_state(|| false);

    {
        let restored = restored.clone();
        use_effect_with((), move |()| {
            let session = UserSession::restore(&BrowserRoleStore);
            log(&format!("Restored session as {}", session.effective_role()));
            dispatch.reduce_mut(move |state| state.session = session);
            restored.set(true);
            || ()
        });
    }

    if !*restored {
        return html! { <Loading /> };
    }

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch_main} />
            <ToastHost />
        </BrowserRouter>
    }
}
