use gloo_timers::callback::Timeout;
use yew::{Html, Properties, classes, function_component, html, use_effect_with};
use yewdux::prelude::{use_dispatch, use_store};

use crate::config::FrontendConfig;
use crate::models::toast_state::{Toast, ToastState};

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let dispatch = use_dispatch::<ToastState>();

    {
        let id = props.toast.id;
        let dispatch = dispatch.clone();
        use_effect_with(id, move |&id| {
            let timeout = Timeout::new(FrontendConfig::new().toast_timeout_ms, move || {
                dispatch.reduce_mut(|state| state.dismiss(id));
            });
            move || drop(timeout)
        });
    }

    let on_close = {
        let id = props.toast.id;
        move |_: yew::MouseEvent| dispatch.reduce_mut(|state| state.dismiss(id))
    };

    html! {
        <div role="alert" class={classes!("alert", "shadow-lg", props.toast.level.alert_class())}>
            <div>
                <div class="font-semibold">{ &props.toast.title }</div>
                {
                    props.toast.description.as_ref().map_or_else(Html::default, |text| html! {
                        <div class="text-sm">{ text }</div>
                    })
                }
            </div>
            <button class="btn btn-ghost btn-xs" onclick={on_close}>{"✕"}</button>
        </div>
    }
}

/// Renders queued toasts in the bottom-right corner; each dismisses itself.
#[function_component(ToastHost)]
pub fn toast_host() -> Html {
    let (state, _) = use_store::<ToastState>();

    html! {
        <div class="toast toast-end z-50">
            { for state.toasts().iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} />
            }) }
        </div>
    }
}
