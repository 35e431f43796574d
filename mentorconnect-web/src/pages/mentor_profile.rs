use std::rc::Rc;

use i18nrs::yew::use_translation;
use shared::catalog::Catalog;
use shared::models::{Mentor, MentorDetails, initials};
use shared::navigation::{MessagesContext, NewSessionContext, RouteContext};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::{Link, use_navigator};
use yewdux::prelude::use_selector;

use crate::components::avatar::Avatar;
use crate::components::star_rating::StarRating;
use crate::models::app_state::AppState;
use crate::pages::my_mentors::conversation_with;
use crate::routes::{DashboardRoute, MainRoute};

#[derive(Properties, PartialEq)]
pub struct MentorProfilePageProps {
    pub id: String,
}

#[derive(Properties, PartialEq)]
struct DetailsProps {
    details: MentorDetails,
}

#[function_component(ProfileDetails)]
fn profile_details(props: &DetailsProps) -> Html {
    let (i18n, ..) = use_translation();
    let details = &props.details;

    let section = |title: String, body: Html| {
        html! {
            <div class="card bg-base-100 border border-base-300 shadow-sm">
                <div class="card-body">
                    <h2 class="card-title text-lg">{ title }</h2>
                    { body }
                </div>
            </div>
        }
    };
    let badges = |items: &[String]| {
        html! {
            <div class="flex flex-wrap gap-2">
                { for items.iter().map(|item| html! { <span class="badge badge-outline">{ item }</span> }) }
            </div>
        }
    };

    html! {
        <div class="grid gap-6 lg:grid-cols-3">
            <div class="lg:col-span-2 space-y-6">
                { section(i18n.t("profile.about"), html! {
                    <p class="text-base-content/80 whitespace-pre-line">{ &details.bio }</p>
                }) }
                { section(i18n.t("profile.experience"), html! {
                    <ul class="space-y-3">
                        { for details.experience.iter().map(|entry| html! {
                            <li>
                                <div class="font-medium">{ &entry.role }</div>
                                <div class="text-sm text-base-content/70">{ format!("{} · {}", entry.company, entry.period) }</div>
                            </li>
                        }) }
                    </ul>
                }) }
                { section(i18n.t("profile.education"), html! {
                    <ul class="space-y-3">
                        { for details.education.iter().map(|entry| html! {
                            <li>
                                <div class="font-medium">{ &entry.degree }</div>
                                <div class="text-sm text-base-content/70">{ format!("{} · {}", entry.school, entry.year) }</div>
                            </li>
                        }) }
                    </ul>
                }) }
                { section(format!("{} ({})", i18n.t("profile.reviews"), details.reviews.len()), html! {
                    <div class="space-y-4">
                        { for details.reviews.iter().map(|review| html! {
                            <div key={review.id.clone()} class="flex gap-3 border-b border-base-300 pb-4 last:border-0">
                                <Avatar initials={initials(&review.author)} size="w-8" />
                                <div class="flex-1">
                                    <div class="flex justify-between">
                                        <span class="font-medium">{ &review.author }</span>
                                        <span class="text-xs text-base-content/60">{ &review.date }</span>
                                    </div>
                                    <StarRating filled={usize::from(review.rating)} />
                                    <p class="text-sm mt-1">{ &review.text }</p>
                                </div>
                            </div>
                        }) }
                    </div>
                }) }
            </div>
            <div class="space-y-6">
                { section(i18n.t("profile.expertise"), badges(&details.expertise)) }
                { section(i18n.t("profile.mentorship_areas"), badges(&details.mentorship_areas)) }
                { section(i18n.t("profile.languages"), badges(&details.languages)) }
                { section(i18n.t("profile.availability"), html! {
                    <div class="space-y-2 text-sm">
                        { for details.weekly_availability.iter().map(|day| html! {
                            <div class="flex justify-between gap-2">
                                <span class="font-medium">{ &day.day }</span>
                                <span class="text-base-content/70">{ day.slots.join(", ") }</span>
                            </div>
                        }) }
                        <p class="text-xs text-base-content/60">{ format!("{}: {}", i18n.t("profile.timezone"), details.timezone) }</p>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[function_component(MentorProfilePage)]
pub fn mentor_profile_page(props: &MentorProfilePageProps) -> Html {
    let (i18n, ..) = use_translation();
    let navigator = use_navigator();
    let role = *use_selector(AppState::role);
    let Some(catalog) = use_context::<Rc<Catalog>>() else {
        return Html::default();
    };

    let Some(mentor) = catalog.mentor(&props.id).cloned() else {
        return html! {
            <div class="container mx-auto px-4 py-20 text-center space-y-4">
                <h1 class="text-2xl font-bold">{i18n.t("profile.not_found")}</h1>
                <Link<MainRoute> to={MainRoute::FindMentors} classes="btn btn-primary">
                    {i18n.t("nav.find_mentors")}
                </Link<MainRoute>>
            </div>
        };
    };
    let details = catalog.mentor_details(&mentor.id).cloned();

    let on_book = {
        let navigator = navigator.clone();
        let context = RouteContext::NewSession(NewSessionContext {
            mentor_id: mentor.id.clone(),
            mentor_name: mentor.name.clone(),
            role,
        });
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = navigator.as_ref() {
                navigator.push_with_state(&DashboardRoute::NewSession, context.clone());
            }
        })
    };
    let on_message = {
        let context = RouteContext::Messages(MessagesContext {
            conversation_id: conversation_with(&catalog, role, &mentor.name, &mentor.id),
            role,
        });
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = navigator.as_ref() {
                navigator.push_with_state(&DashboardRoute::Messages, context.clone());
            }
        })
    };

    html! {
        <div class="container mx-auto px-4 py-10 space-y-6">
            <ProfileHeader mentor={mentor.clone()} details={details.clone()} {on_book} {on_message} />
            {
                match details {
                    Some(details) => html! { <ProfileDetails {details} /> },
                    None => html! {
                        <div class="alert">
                            <Icon icon_id={IconId::HeroiconsOutlineInformationCircle} class="h-5 w-5" />
                            <span>{i18n.t("profile.no_details")}</span>
                        </div>
                    },
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProfileHeaderProps {
    mentor: Mentor,
    details: Option<MentorDetails>,
    on_book: Callback<MouseEvent>,
    on_message: Callback<MouseEvent>,
}

#[function_component(ProfileHeader)]
fn profile_header(props: &ProfileHeaderProps) -> Html {
    let (i18n, ..) = use_translation();
    let mentor = &props.mentor;
    let rate = format!("${}/hr", mentor.hourly_rate);
    html! {
        <div class="card bg-base-100 border border-base-300 shadow-sm">
            <div class="card-body md:flex-row md:items-center gap-6">
                <Avatar initials={mentor.initials()} size="w-24" />
                <div class="flex-1 space-y-2">
                    <h1 class="text-2xl font-bold">{ &mentor.name }</h1>
                    <p class="text-base-content/70">{ mentor.headline() }</p>
                    <div class="flex flex-wrap items-center gap-3 text-sm">
                        <StarRating filled={mentor.full_stars()} label={format!("{:.1} ({})", mentor.rating, mentor.review_count)} />
                        <span class="flex items-center gap-1">
                            <Icon icon_id={IconId::HeroiconsOutlineMapPin} class="h-4 w-4" />
                            { &mentor.location }
                        </span>
                        <span class="flex items-center gap-1">
                            <Icon icon_id={IconId::HeroiconsOutlineClock} class="h-4 w-4" />
                            { &mentor.availability }
                        </span>
                        {
                            props.details.as_ref().map_or_else(Html::default, |details| html! {
                                <span class="badge badge-ghost">
                                    { format!("{} {}", details.completed_sessions, i18n.t("profile.sessions_completed")) }
                                </span>
                            })
                        }
                    </div>
                    <div class="flex flex-wrap gap-2">
                        { for mentor.skills.iter().map(|skill| html! { <span class="badge badge-primary badge-outline">{ skill }</span> }) }
                    </div>
                </div>
                <div class="flex flex-col gap-2 md:items-end">
                    <span class="text-xl font-semibold">{ rate }</span>
                    <button class="btn btn-primary" onclick={props.on_book.clone()}>{i18n.t("profile.book")}</button>
                    <button class="btn btn-outline" onclick={props.on_message.clone()}>
                        <Icon icon_id={IconId::HeroiconsOutlineChatBubbleLeftRight} class="h-4 w-4" />
                        {i18n.t("mentors.send_message")}
                    </button>
                </div>
            </div>
        </div>
    }
}
