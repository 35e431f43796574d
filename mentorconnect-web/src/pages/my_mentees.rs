use std::rc::Rc;

use i18nrs::yew::use_translation;
use shared::catalog::Catalog;
use shared::models::{Mentee, Role};
use shared::navigation::{MessagesContext, NewSessionContext, RouteContext};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::use_navigator;

use crate::components::avatar::Avatar;
use crate::pages::my_mentors::conversation_with;
use crate::routes::DashboardRoute;

fn matches(mentee: &Mentee, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty()
        || mentee.name.to_lowercase().contains(&needle)
        || mentee.title.to_lowercase().contains(&needle)
        || mentee.skills.iter().any(|skill| skill.to_lowercase().contains(&needle))
}

#[function_component(MyMenteesPage)]
pub fn my_mentees_page() -> Html {
    let (i18n, ..) = use_translation();
    let navigator = use_navigator();
    let query = use_state(String::new);
    let Some(catalog) = use_context::<Rc<Catalog>>() else {
        return Html::default();
    };

    let go = |route: DashboardRoute, context: RouteContext| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = navigator.as_ref() {
                navigator.push_with_state(&route, context.clone());
            }
        })
    };

    let on_search = {
        let query = query.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            query.set(input.value());
        })
    };

    let cards = catalog
        .mentees
        .iter()
        .filter(|mentee| matches(mentee, &query))
        .map(|mentee| {
            let on_schedule = go(
                DashboardRoute::NewSession,
                RouteContext::NewSession(NewSessionContext {
                    mentor_id: mentee.id.clone(),
                    mentor_name: mentee.name.clone(),
                    role: Role::Mentor,
                }),
            );
            let on_message = go(
                DashboardRoute::Messages,
                RouteContext::Messages(MessagesContext {
                    conversation_id: conversation_with(&catalog, Role::Mentor, &mentee.name, &mentee.id),
                    role: Role::Mentor,
                }),
            );

            html! {
                <div key={mentee.id.clone()} class="card bg-base-100 border border-base-300 shadow-sm">
                    <div class="card-body p-4 gap-3">
                        <div class="flex items-center gap-3">
                            <Avatar initials={mentee.initials()} size="w-12" />
                            <div>
                                <h3 class="font-semibold">{ &mentee.name }</h3>
                                <p class="text-sm text-base-content/70">{ &mentee.title }</p>
                            </div>
                        </div>
                        <p class="text-sm text-base-content/70 line-clamp-2">{ &mentee.bio }</p>
                        <div class="flex flex-wrap gap-1">
                            { for mentee.skills.iter().map(|skill| html! {
                                <span class="badge badge-ghost badge-sm">{ skill }</span>
                            }) }
                        </div>
                        <div class="flex items-center justify-between">
                            <span class="text-xs text-base-content/60">
                                { format!("{}: {}", i18n.t("my_mentees.last_session"), mentee.last_session) }
                            </span>
                            <div class="flex gap-1">
                                <button class="btn btn-ghost btn-sm btn-square" onclick={on_message} aria-label={i18n.t("mentors.send_message")}>
                                    <Icon icon_id={IconId::HeroiconsOutlineChatBubbleLeftRight} class="h-4 w-4" />
                                </button>
                                <button class="btn btn-ghost btn-sm btn-square" onclick={on_schedule} aria-label={i18n.t("mentors.schedule_session")}>
                                    <Icon icon_id={IconId::HeroiconsOutlineCalendar} class="h-4 w-4" />
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    let on_new_session = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = navigator.as_ref() {
            navigator.push(&DashboardRoute::NewSession);
        }
    });

    html! {
        <div class="space-y-6">
            <div class="flex flex-col gap-2 sm:flex-row sm:items-center sm:justify-between">
                <div>
                    <h1 class="text-2xl font-bold">{i18n.t("nav.my_mentees")}</h1>
                    <p class="text-base-content/70">{i18n.t("my_mentees.subtitle")}</p>
                </div>
                <button class="btn btn-secondary gap-2" onclick={on_new_session}>
                    <Icon icon_id={IconId::HeroiconsOutlineCalendar} class="h-4 w-4" />
                    {i18n.t("mentors.schedule_session")}
                </button>
            </div>
            <label class="input input-bordered flex items-center gap-2 sm:max-w-sm">
                <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="h-4 w-4 opacity-60" />
                <input
                    type="text"
                    class="grow"
                    placeholder={i18n.t("my_mentees.search")}
                    value={(*query).clone()}
                    oninput={on_search}
                />
            </label>
            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                {cards}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentee_search_covers_skills() {
        let catalog = Catalog::seeded();
        let mentee = &catalog.mentees[0];
        let skill = mentee.skills[0].to_lowercase();
        assert!(matches(mentee, &skill));
        assert!(matches(mentee, "  "));
        assert!(!matches(mentee, "no-such-skill-anywhere"));
    }
}
