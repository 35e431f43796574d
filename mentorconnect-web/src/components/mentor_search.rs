use i18nrs::yew::use_translation;
use shared::search::{AVAILABILITY_OPTIONS, MentorFilter, RATING_OPTIONS, SKILL_OPTIONS};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct MentorSearchProps {
    pub text: AttrValue,
    pub filter: MentorFilter,
    pub on_text: Callback<String>,
    pub on_filter: Callback<MentorFilter>,
}

/// Search box plus the collapsible skills / rating / availability panel.
#[function_component(MentorSearch)]
pub fn mentor_search(props: &MentorSearchProps) -> Html {
    let (i18n, ..) = use_translation();
    let show_filters = use_state(|| false);

    let on_input = {
        let on_text = props.on_text.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            on_text.emit(input.value());
        })
    };

    let toggle_panel = {
        let show_filters = show_filters.clone();
        Callback::from(move |_: MouseEvent| show_filters.set(!*show_filters))
    };

    // Every edit clones the filter, applies one change and emits the result.
    let edit = |change: fn(&mut MentorFilter, &str), value: String| {
        let filter = props.filter.clone();
        let on_filter = props.on_filter.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = filter.clone();
            change(&mut next, &value);
            on_filter.emit(next);
        })
    };

    let clear = {
        let on_filter = props.on_filter.clone();
        Callback::from(move |_: MouseEvent| on_filter.emit(MentorFilter::default()))
    };

    let active = props.filter.active_count();

    let panel = if *show_filters {
        html! {
            <div class="card bg-base-100 border border-base-300">
                <div class="card-body p-4 space-y-4">
                    <div class="flex justify-between items-center">
                        <h3 class="font-medium">{i18n.t("search.filters")}</h3>
                        <button class="btn btn-link btn-sm gap-1" onclick={clear}>
                            <Icon icon_id={IconId::HeroiconsOutlineXMark} class="h-3 w-3" />
                            {i18n.t("search.clear_all")}
                        </button>
                    </div>
                    <div class="space-y-2">
                        <h4 class="text-sm font-medium">{i18n.t("search.skills")}</h4>
                        <div class="flex flex-wrap gap-2">
                            { for SKILL_OPTIONS.iter().map(|skill| {
                                let selected = props.filter.skills.contains(*skill);
                                html! {
                                    <button
                                        class={classes!("btn", "btn-xs", if selected { "btn-primary" } else { "btn-outline" })}
                                        onclick={edit(MentorFilter::toggle_skill, (*skill).to_string())}
                                    >
                                        { *skill }
                                    </button>
                                }
                            }) }
                        </div>
                    </div>
                    <div class="space-y-2">
                        <h4 class="text-sm font-medium">{i18n.t("search.minimum_rating")}</h4>
                        <div class="flex gap-2">
                            { for RATING_OPTIONS.iter().map(|rating| {
                                let rating = *rating;
                                let selected = props.filter.min_rating.is_some_and(|min| (min - rating).abs() < f32::EPSILON);
                                let filter = props.filter.clone();
                                let on_filter = props.on_filter.clone();
                                let onclick = Callback::from(move |_: MouseEvent| {
                                    let mut next = filter.clone();
                                    next.toggle_rating(rating);
                                    on_filter.emit(next);
                                });
                                html! {
                                    <button
                                        class={classes!("btn", "btn-xs", "gap-1", if selected { "btn-primary" } else { "btn-outline" })}
                                        {onclick}
                                    >
                                        { format!("{rating:.0}+") }
                                        <Icon icon_id={IconId::HeroiconsSolidStar} class="h-3 w-3" />
                                    </button>
                                }
                            }) }
                        </div>
                    </div>
                    <div class="space-y-2">
                        <h4 class="text-sm font-medium">{i18n.t("search.availability")}</h4>
                        <div class="flex flex-wrap gap-2">
                            { for AVAILABILITY_OPTIONS.iter().map(|slot| {
                                let selected = props.filter.availability.contains(*slot);
                                html! {
                                    <button
                                        class={classes!("btn", "btn-xs", if selected { "btn-primary" } else { "btn-outline" })}
                                        onclick={edit(MentorFilter::toggle_availability, (*slot).to_string())}
                                    >
                                        { *slot }
                                    </button>
                                }
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        }
    } else {
        Html::default()
    };

    html! {
        <div class="space-y-4">
            <div class="flex items-center gap-2">
                <label class="input input-bordered flex items-center gap-2 flex-1">
                    <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="h-4 w-4 opacity-60" />
                    <input
                        type="text"
                        class="grow"
                        placeholder={i18n.t("search.placeholder")}
                        value={props.text.clone()}
                        oninput={on_input}
                    />
                </label>
                <button class="btn btn-outline gap-2" onclick={toggle_panel}>
                    <Icon icon_id={IconId::HeroiconsOutlineFunnel} class="h-4 w-4" />
                    <span class="hidden sm:inline">{i18n.t("search.filters")}</span>
                    {
                        if active > 0 {
                            html! { <span class="badge badge-secondary badge-sm">{ active }</span> }
                        } else {
                            Html::default()
                        }
                    }
                </button>
            </div>
            {panel}
        </div>
    }
}
