use i18nrs::yew::use_translation;
use yew::{Callback, function_component, html, use_effect_with, use_state_eq};

use crate::components::language_selector_button::LanguageOption;
use crate::language;

#[function_component(LanguageSelector)]
pub fn language_selector() -> yew::Html {
    let (i18n, set_language) = use_translation();
    let language_state = use_state_eq(|| i18n.get_current_language().to_string());

    {
        let language_state = language_state.clone();
        use_effect_with(i18n.clone(), move |i18n| {
            language_state.set(i18n.get_current_language().to_string());
            || ()
        });
    }

    let on_select = {
        let language_state = language_state.clone();
        Callback::from(move |code: &'static str| {
            language_state.set(code.to_string());
            set_language.emit(code.to_string());
        })
    };

    let lang_code = language_state.as_str();
    let active = language::language_info_or_default(lang_code);
    let mut languages: Vec<_> = language::supported_languages().into_values().collect();
    languages.sort_by(|a, b| a.native_name.cmp(b.native_name));

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle" aria-label={i18n.t("language.selector")}>
                <span>{active.flag}</span>
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-44">
            {
                for languages.into_iter().map(|info| {
                    html! {
                        <LanguageOption
                            key={info.code}
                            selected={info.code == active.code}
                            language={info.clone()}
                            on_select={on_select.clone()}
                        />
                    }
                })
            }
            </ul>
        </div>
    }
}
