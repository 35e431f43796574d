use std::rc::Rc;

use i18nrs::yew::use_translation;
use shared::catalog::Catalog;
use shared::models::{Mentorship, Role};
use shared::navigation::{MessagesContext, NewSessionContext, RouteContext};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::{Link, use_navigator};

use crate::components::avatar::Avatar;
use crate::routes::{DashboardRoute, MainRoute};

fn matches(mentorship: &Mentorship, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty()
        || mentorship.name.to_lowercase().contains(&needle)
        || mentorship.company.to_lowercase().contains(&needle)
        || mentorship
            .expertise
            .iter()
            .any(|skill| skill.to_lowercase().contains(&needle))
}

/// Id of the inbox conversation with `name`, falling back to `fallback`.
pub(crate) fn conversation_with(catalog: &Catalog, role: Role, name: &str, fallback: &str) -> String {
    catalog
        .inbox_seed(role)
        .conversations
        .into_iter()
        .find(|conversation| conversation.participant == name)
        .map_or_else(|| fallback.to_string(), |conversation| conversation.id)
}

#[function_component(MyMentorsPage)]
pub fn my_mentors_page() -> Html {
    let (i18n, ..) = use_translation();
    let navigator = use_navigator();
    let query = use_state(String::new);
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

    let rows = catalog
        .mentorships
        .iter()
        .filter(|mentorship| matches(mentorship, &query))
        .map(|mentorship| {
            let on_schedule = {
                let navigator = navigator.clone();
                let context = RouteContext::NewSession(NewSessionContext {
                    mentor_id: mentorship.mentor_id.clone(),
                    mentor_name: mentorship.name.clone(),
                    role: Role::Mentee,
                });
                Callback::from(move |_: MouseEvent| {
                    if let Some(navigator) = navigator.as_ref() {
                        navigator.push_with_state(&DashboardRoute::NewSession, context.clone());
                    }
                })
            };
            let on_message = {
                let navigator = navigator.clone();
                let context = RouteContext::Messages(MessagesContext {
                    conversation_id: conversation_with(&catalog, Role::Mentee, &mentorship.name, &mentorship.mentor_id),
                    role: Role::Mentee,
                });
                Callback::from(move |_: MouseEvent| {
                    if let Some(navigator) = navigator.as_ref() {
                        navigator.push_with_state(&DashboardRoute::Messages, context.clone());
                    }
                })
            };
            let hidden = mentorship.expertise.len().saturating_sub(2);

            html! {
                <tr key={mentorship.mentor_id.clone()}>
                    <td>
                        <div class="flex items-center gap-3">
                            <Avatar initials={shared::models::initials(&mentorship.name)} />
                            <div>
                                <div class="font-medium">{ &mentorship.name }</div>
                                <div class="text-sm text-base-content/70">{ format!("{} at {}", mentorship.title, mentorship.company) }</div>
                            </div>
                        </div>
                    </td>
                    <td class="hidden md:table-cell">
                        <div class="flex flex-wrap gap-1">
                            { for mentorship.expertise.iter().take(2).map(|skill| html! {
                                <span class="badge badge-ghost badge-sm">{ skill }</span>
                            }) }
                            {
                                if hidden > 0 {
                                    html! { <span class="badge badge-ghost badge-sm">{ format!("+{hidden}") }</span> }
                                } else {
                                    Html::default()
                                }
                            }
                        </div>
                    </td>
                    <td class="hidden md:table-cell text-sm">{ mentorship.next_session_label() }</td>
                    <td>
                        <span class={classes!("badge", mentorship.status.badge_class())}>{ mentorship.status.label() }</span>
                    </td>
                    <td>
                        <div class="dropdown dropdown-end">
                            <div tabindex="0" role="button" class="btn btn-ghost btn-sm btn-square">
                                <Icon icon_id={IconId::HeroiconsOutlineEllipsisVertical} class="h-4 w-4" />
                            </div>
                            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-48">
                                <li>
                                    <Link<MainRoute> to={MainRoute::MentorProfile { id: mentorship.mentor_id.clone() }}>
                                        {i18n.t("mentors.view_profile")}
                                    </Link<MainRoute>>
                                </li>
                                <li><a onclick={on_schedule}>{i18n.t("mentors.schedule_session")}</a></li>
                                <li><a onclick={on_message}>{i18n.t("mentors.send_message")}</a></li>
                            </ul>
                        </div>
                    </td>
                </tr>
            }
        })
        .collect::<Html>();

    let quick_links = [
        (DashboardRoute::Schedule, IconId::HeroiconsOutlineCalendar, "my_mentors.quick_schedule"),
        (DashboardRoute::Messages, IconId::HeroiconsOutlineChatBubbleLeftRight, "my_mentors.quick_messages"),
    ];

    html! {
        <div class="space-y-6">
            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4">
                <div>
                    <h1 class="text-2xl font-bold">{i18n.t("nav.my_mentors")}</h1>
                    <p class="text-base-content/70">{i18n.t("my_mentors.subtitle")}</p>
                </div>
                <Link<MainRoute> to={MainRoute::FindMentors} classes="btn btn-primary self-start">
                    {i18n.t("my_mentors.find_new")}
                </Link<MainRoute>>
            </div>
            <label class="input input-bordered flex items-center gap-2">
                <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="h-4 w-4 opacity-60" />
                <input
                    type="text"
                    class="grow"
                    placeholder={i18n.t("my_mentors.search")}
                    value={(*query).clone()}
                    oninput={on_search}
                />
            </label>
            <div class="card bg-base-100 border border-base-300 shadow-sm overflow-x-auto">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{i18n.t("my_mentors.mentor")}</th>
                            <th class="hidden md:table-cell">{i18n.t("my_mentors.expertise")}</th>
                            <th class="hidden md:table-cell">{i18n.t("my_mentors.next_session")}</th>
                            <th>{i18n.t("my_mentors.status")}</th>
                            <th class="w-16"></th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                { for quick_links.into_iter().map(|(route, icon, key)| html! {
                    <Link<DashboardRoute> to={route} classes="card bg-base-100 border border-base-300 p-4 hover:border-primary/30">
                        <div class="flex items-start gap-3">
                            <div class="p-2 rounded-full bg-primary/10 text-primary">
                                <Icon icon_id={icon} class="h-5 w-5" />
                            </div>
                            <div>
                                <h3 class="font-medium">{i18n.t(&format!("{key}.title"))}</h3>
                                <p class="text-sm text-base-content/70 mt-1">{i18n.t(&format!("{key}.description"))}</p>
                            </div>
                        </div>
                    </Link<DashboardRoute>>
                }) }
                <Link<MainRoute> to={MainRoute::FindMentors} classes="card bg-base-100 border border-base-300 p-4 hover:border-primary/30">
                    <div class="flex items-start gap-3">
                        <div class="p-2 rounded-full bg-primary/10 text-primary">
                            <Icon icon_id={IconId::HeroiconsOutlineUsers} class="h-5 w-5" />
                        </div>
                        <div>
                            <h3 class="font-medium">{i18n.t("my_mentors.quick_find.title")}</h3>
                            <p class="text-sm text-base-content/70 mt-1">{i18n.t("my_mentors.quick_find.description")}</p>
                        </div>
                    </div>
                </Link<MainRoute>>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentorship_search_matches_name_company_and_expertise() {
        let catalog = Catalog::seeded();
        let first = &catalog.mentorships[0];
        assert!(matches(first, ""));
        assert!(matches(first, &first.name.to_uppercase()));
        assert!(matches(first, &first.company));
        assert!(!matches(first, "zzz-no-such-mentor"));
    }

    #[test]
    fn test_conversation_lookup_falls_back_to_given_id() {
        let catalog = Catalog::seeded();
        assert_eq!(conversation_with(&catalog, Role::Mentee, "Nobody Here", "42"), "42");

        let seed = catalog.inbox_seed(Role::Mentee);
        let first = &seed.conversations[0];
        assert_eq!(
            conversation_with(&catalog, Role::Mentee, &first.participant, "42"),
            first.id
        );
    }
}
