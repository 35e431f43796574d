use web_sys::HtmlInputElement;
use yew::{AttrValue, Callback, Html, Properties, TargetCast, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq, Clone)]
pub struct MessageComposerProps {
    pub text: AttrValue,
    pub on_text_change: Callback<String>,
    pub on_submit: Callback<()>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub send_label: AttrValue,
}

/// Single-line composer. Enter submits; the button stays disabled until the
/// draft has non-whitespace content.
#[function_component(MessageComposer)]
pub fn message_composer(props: &MessageComposerProps) -> Html {
    let on_input = {
        let on_text_change = props.on_text_change.clone();
        Callback::from(move |event: yew::events::InputEvent| {
            let target: HtmlInputElement = event.target_unchecked_into();
            on_text_change.emit(target.value());
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: yew::events::SubmitEvent| {
            event.prevent_default();
            on_submit.emit(());
        })
    };

    let blank = props.text.trim().is_empty();

    html! {
        <form class="flex items-center gap-2" onsubmit={on_submit}>
            <input
                type="text"
                class="input input-bordered flex-1"
                placeholder={props.placeholder.clone()}
                value={props.text.clone()}
                oninput={on_input}
            />
            <button
                class="btn btn-primary btn-square"
                type="submit"
                disabled={blank}
                aria-label={props.send_label.clone()}
            >
                <Icon icon_id={IconId::HeroiconsOutlinePaperAirplane} class="h-5 w-5" />
            </button>
        </form>
    }
}
