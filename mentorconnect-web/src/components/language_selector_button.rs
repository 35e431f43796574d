use yew::{Callback, Html, Properties, classes, function_component, html};
use yew_icons::{Icon, IconId};

use crate::language::LanguageInfo;

#[derive(Properties, PartialEq)]
pub struct LanguageOptionProps {
    pub language: LanguageInfo,
    pub selected: bool,
    pub on_select: Callback<&'static str>,
}

/// One row of the language dropdown. The selected language is checked and
/// does not re-emit when clicked again.
#[function_component(LanguageOption)]
pub fn language_option(props: &LanguageOptionProps) -> Html {
    let LanguageOptionProps {
        language,
        selected,
        on_select,
    } = props;
    let onclick = {
        let code = language.code;
        let selected = *selected;
        let on_select = on_select.clone();
        move |event: yew::MouseEvent| {
            event.prevent_default();
            if !selected {
                on_select.emit(code);
            }
        }
    };

    html! {
        <li>
            <a class={classes!("justify-between", selected.then_some("active"))}
                aria-current={selected.then_some("true")}
                lang={language.code}
                {onclick}>
                <span class="flex items-center gap-2">
                    <span>{language.flag}</span>
                    <span>{language.native_name}</span>
                </span>
                if *selected {
                    <Icon icon_id={IconId::HeroiconsOutlineCheck} class="h-4 w-4" />
                }
            </a>
        </li>
    }
}
