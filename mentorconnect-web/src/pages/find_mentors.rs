use std::rc::Rc;

use i18nrs::yew::use_translation;
use shared::catalog::Catalog;
use shared::search::{Category, MentorFilter, MentorQuery};
use strum::IntoEnumIterator;
use yew::prelude::*;

use crate::components::mentor_card::MentorCard;
use crate::components::mentor_search::MentorSearch;

#[function_component(FindMentorsPage)]
pub fn find_mentors_page() -> Html {
    let (i18n, ..) = use_translation();
    let query = use_state(MentorQuery::default);
    let Some(catalog) = use_context::<Rc<Catalog>>() else {
        return Html::default();
    };

    let on_text = {
        let query = query.clone();
        Callback::from(move |text: String| {
            query.set(MentorQuery {
                text,
                ..(*query).clone()
            });
        })
    };
    let on_filter = {
        let query = query.clone();
        Callback::from(move |filter: MentorFilter| {
            query.set(MentorQuery {
                filter,
                ..(*query).clone()
            });
        })
    };
    let on_reset = {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| query.set(MentorQuery::default()))
    };

    let chips = Category::iter().map(|category| {
        let query = query.clone();
        let selected = query.category == Some(category);
        let onclick = Callback::from(move |_: MouseEvent| {
            let mut next = (*query).clone();
            next.toggle_category(category);
            query.set(next);
        });
        html! {
            <button
                class={classes!("btn", "btn-sm", "rounded-full", if selected { "btn-primary" } else { "btn-outline" })}
                {onclick}
            >
                { category.label() }
            </button>
        }
    });

    let results = query.run(&catalog.mentors);
    let grid = if results.is_empty() {
        html! {
            <div class="text-center py-16 space-y-3">
                <h3 class="text-lg font-semibold">{i18n.t("find_mentors.empty_title")}</h3>
                <p class="text-base-content/70">{i18n.t("find_mentors.empty_description")}</p>
                <button class="btn btn-outline btn-sm" onclick={on_reset}>{i18n.t("search.clear_all")}</button>
            </div>
        }
    } else {
        html! {
            <div class="grid gap-6 md:grid-cols-2 xl:grid-cols-3">
                { for results.iter().map(|mentor| html! {
                    <MentorCard key={mentor.id.clone()} mentor={(*mentor).clone()} />
                }) }
            </div>
        }
    };

    html! {
        <div class="container mx-auto px-4 py-10 space-y-8">
            <div class="text-center max-w-2xl mx-auto space-y-2">
                <h1 class="text-3xl font-bold">{i18n.t("find_mentors.title")}</h1>
                <p class="text-base-content/70">{i18n.t("find_mentors.subtitle")}</p>
            </div>
            <MentorSearch text={query.text.clone()} filter={query.filter.clone()} {on_text} {on_filter} />
            <div class="flex flex-wrap gap-2">{ for chips }</div>
            <p class="text-sm text-base-content/70">{ query.results_summary(results.len()) }</p>
            { grid }
        </div>
    }
}
