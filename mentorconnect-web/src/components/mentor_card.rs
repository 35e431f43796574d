use i18nrs::yew::use_translation;
use shared::models::Mentor;
use shared::navigation::{NewSessionContext, RouteContext};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::{Link, use_navigator};
use yewdux::prelude::use_selector;

use crate::components::avatar::Avatar;
use crate::components::star_rating::StarRating;
use crate::models::app_state::AppState;
use crate::routes::{DashboardRoute, MainRoute};

const VISIBLE_SKILLS: usize = 4;

#[derive(Properties, PartialEq)]
pub struct MentorCardProps {
    pub mentor: Mentor,
}

#[function_component(MentorCard)]
pub fn mentor_card(props: &MentorCardProps) -> Html {
    let (i18n, ..) = use_translation();
    let navigator = use_navigator();
    let role = use_selector(AppState::role);
    let mentor = &props.mentor;

    let on_schedule = {
        let context = RouteContext::NewSession(NewSessionContext {
            mentor_id: mentor.id.clone(),
            mentor_name: mentor.name.clone(),
            role: *role,
        });
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = navigator.as_ref() {
                navigator.push_with_state(&DashboardRoute::NewSession, context.clone());
            }
        })
    };

    let hidden_skills = mentor.skills.len().saturating_sub(VISIBLE_SKILLS);
    let card_border = if mentor.featured {
        "border-2 border-primary/30 shadow-md"
    } else {
        "border border-base-300"
    };

    html! {
        <div class={classes!("card", "bg-base-100", "shadow-sm", card_border)}>
            <div class="card-body p-5">
                <div class="flex items-start gap-4">
                    <Avatar initials={mentor.initials()} size="w-16" />
                    <div class="flex-1">
                        <div class="flex items-start justify-between gap-2">
                            <div>
                                <h3 class="font-semibold text-lg">{ &mentor.name }</h3>
                                <p class="text-sm text-base-content/70">{ mentor.headline() }</p>
                            </div>
                            {
                                if mentor.featured {
                                    html! { <span class="badge badge-primary badge-outline">{i18n.t("mentors.featured")}</span> }
                                } else {
                                    Html::default()
                                }
                            }
                        </div>
                        <div class="mt-2">
                            <StarRating
                                filled={mentor.full_stars()}
                                label={format!("{:.1} ({})", mentor.rating, mentor.review_count)}
                            />
                        </div>
                    </div>
                </div>
                <div class="flex flex-wrap gap-2 mt-4">
                    { for mentor.skills.iter().take(VISIBLE_SKILLS).map(|skill| html! {
                        <span class="badge badge-ghost">{ skill }</span>
                    }) }
                    {
                        if hidden_skills > 0 {
                            html! { <span class="badge badge-ghost">{ format!("+{hidden_skills} more") }</span> }
                        } else {
                            Html::default()
                        }
                    }
                </div>
                <div class="card-actions mt-4 flex gap-2">
                    <Link<MainRoute> to={MainRoute::MentorProfile { id: mentor.id.clone() }} classes="btn btn-outline btn-sm flex-1">
                        {i18n.t("mentors.view_profile")}
                    </Link<MainRoute>>
                    <button class="btn btn-primary btn-sm flex-1 gap-1" onclick={on_schedule}>
                        <Icon icon_id={IconId::HeroiconsOutlineCalendar} class="h-4 w-4" />
                        {i18n.t("mentors.schedule")}
                    </button>
                </div>
            </div>
        </div>
    }
}
