use std::rc::Rc;

use i18nrs::yew::use_translation;
use shared::catalog::Catalog;
use shared::models::{ForumTopic, filter_topics, initials};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::components::avatar::Avatar;

#[derive(Properties, PartialEq)]
struct TopicRowProps {
    topic: ForumTopic,
}

#[function_component(TopicRow)]
fn topic_row(props: &TopicRowProps) -> Html {
    let (i18n, ..) = use_translation();
    let topic = &props.topic;
    html! {
        <div class="flex gap-4 py-4 border-b border-base-300 last:border-0">
            <Avatar initials={initials(&topic.author)} />
            <div class="flex-1 min-w-0">
                <div class="flex flex-wrap items-center gap-2">
                    <h3 class="font-medium">{ &topic.title }</h3>
                    {
                        if topic.verified {
                            html! { <span class="badge badge-success badge-sm">{i18n.t("forum.verified")}</span> }
                        } else {
                            Html::default()
                        }
                    }
                    {
                        if topic.trending {
                            html! { <span class="badge badge-warning badge-sm">{i18n.t("forum.trending")}</span> }
                        } else {
                            Html::default()
                        }
                    }
                </div>
                <p class="text-sm text-base-content/70">
                    { format!("{} ({}) · {} · {}", topic.author, topic.author_role.label(), topic.category, topic.posted) }
                </p>
            </div>
            <div class="hidden sm:flex gap-4 text-sm text-base-content/70">
                <span>{ format!("{} {}", topic.replies, i18n.t("forum.replies")) }</span>
                <span>{ format!("{} {}", topic.views, i18n.t("forum.views")) }</span>
            </div>
        </div>
    }
}

#[function_component(ForumPage)]
pub fn forum_page() -> Html {
    let (i18n, ..) = use_translation();
    let query = use_state(String::new);
    let category = use_state(|| None::<String>);
    let Some(catalog) = use_context::<Rc<Catalog>>() else {
        return Html::default();
    };

    let on_search = {
        let query = query.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            query.set(input.value());
        })
    };

    let select = |wanted: Option<String>| {
        let category = category.clone();
        Callback::from(move |_: MouseEvent| category.set(wanted.clone()))
    };

    let categories = catalog.forum_categories.iter().map(|entry| {
        let active = category.as_deref() == Some(entry.name.as_str());
        html! {
            <li key={entry.id.clone()}>
                <a class={classes!(active.then_some("active"))} onclick={select(Some(entry.name.clone()))}>
                    <span class="flex-1">{ &entry.name }</span>
                    <span class="badge badge-sm">{ entry.topic_count }</span>
                </a>
            </li>
        }
    });

    let topics = filter_topics(&catalog.forum_topics, category.as_deref(), &query);
    let list = if topics.is_empty() {
        html! { <p class="py-10 text-center text-base-content/70">{i18n.t("forum.empty")}</p> }
    } else {
        html! {
            <div>
                { for topics.into_iter().map(|topic| html! {
                    <TopicRow key={topic.id.clone()} topic={topic.clone()} />
                }) }
            </div>
        }
    };

    html! {
        <div class="container mx-auto px-4 py-10 space-y-6">
            <div class="flex flex-col md:flex-row md:items-end md:justify-between gap-4">
                <div>
                    <h1 class="text-3xl font-bold">{i18n.t("forum.title")}</h1>
                    <p class="text-base-content/70">{i18n.t("forum.subtitle")}</p>
                </div>
                <label class="input input-bordered flex items-center gap-2 md:w-80">
                    <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="h-4 w-4 opacity-60" />
                    <input type="search" class="grow" placeholder={i18n.t("forum.search")}
                        value={(*query).clone()} oninput={on_search} />
                </label>
            </div>
            <div class="grid gap-6 lg:grid-cols-4">
                <aside class="card bg-base-100 border border-base-300 shadow-sm h-fit">
                    <ul class="menu">
                        <li class="menu-title">{i18n.t("forum.categories")}</li>
                        <li>
                            <a class={classes!(category.is_none().then_some("active"))} onclick={select(None)}>
                                {i18n.t("forum.all_topics")}
                            </a>
                        </li>
                        { for categories }
                    </ul>
                </aside>
                <section class="lg:col-span-3 card bg-base-100 border border-base-300 shadow-sm">
                    <div class="card-body py-2">{ list }</div>
                </section>
            </div>
        </div>
    }
}
