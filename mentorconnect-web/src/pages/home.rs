use std::rc::Rc;

use i18nrs::yew::use_translation;
use shared::catalog::Catalog;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

use crate::components::mentor_card::MentorCard;
use crate::routes::MainRoute;

const FEATURES: [(IconId, &str); 3] = [
    (IconId::HeroiconsOutlineMagnifyingGlass, "find"),
    (IconId::HeroiconsOutlineCalendar, "schedule"),
    (IconId::HeroiconsOutlineChatBubbleLeftRight, "connect"),
];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let (i18n, ..) = use_translation();
    let Some(catalog) = use_context::<Rc<Catalog>>() else {
        return Html::default();
    };

    let features = FEATURES.iter().map(|(icon, key)| html! {
        <div class="card bg-base-100 border border-base-300 shadow-sm">
            <div class="card-body items-center text-center">
                <div class="p-3 rounded-full bg-primary/10 text-primary">
                    <Icon icon_id={*icon} class="h-6 w-6" />
                </div>
                <h3 class="card-title">{i18n.t(&format!("home.features.{key}.title"))}</h3>
                <p class="text-base-content/70">{i18n.t(&format!("home.features.{key}.description"))}</p>
            </div>
        </div>
    });

    html! {
        <>
            <section class="hero bg-base-200 py-20">
                <div class="hero-content text-center">
                    <div class="max-w-2xl space-y-6">
                        <h1 class="text-4xl md:text-5xl font-bold">{i18n.t("home.hero.title")}</h1>
                        <p class="text-lg text-base-content/70">{i18n.t("home.hero.subtitle")}</p>
                        <div class="flex flex-wrap justify-center gap-3">
                            <Link<MainRoute> to={MainRoute::FindMentors} classes="btn btn-primary">
                                {i18n.t("nav.find_mentors")}
                            </Link<MainRoute>>
                            <Link<MainRoute> to={MainRoute::Signup} classes="btn btn-outline">
                                {i18n.t("home.hero.become_mentor")}
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>
            </section>
            <section class="container mx-auto px-4 py-16 space-y-8">
                <h2 class="text-3xl font-bold text-center">{i18n.t("home.features.title")}</h2>
                <div class="grid gap-6 md:grid-cols-3">{ for features }</div>
            </section>
            <section class="container mx-auto px-4 py-16 space-y-8">
                <div class="flex items-end justify-between">
                    <h2 class="text-3xl font-bold">{i18n.t("mentors.featured")}</h2>
                    <Link<MainRoute> to={MainRoute::FindMentors} classes="link link-primary">
                        {i18n.t("dashboard.view_all")}
                    </Link<MainRoute>>
                </div>
                <div class="grid gap-6 md:grid-cols-2 xl:grid-cols-3">
                    { for catalog.featured_mentors().map(|mentor| html! {
                        <MentorCard key={mentor.id.clone()} mentor={mentor.clone()} />
                    }) }
                </div>
            </section>
            <section class="bg-primary text-primary-content py-16">
                <div class="container mx-auto px-4 text-center space-y-4">
                    <h2 class="text-3xl font-bold">{i18n.t("home.cta.title")}</h2>
                    <p class="opacity-90">{i18n.t("home.cta.subtitle")}</p>
                    <Link<MainRoute> to={MainRoute::Signup} classes="btn btn-secondary">
                        {i18n.t("nav.signup")}
                    </Link<MainRoute>>
                </div>
            </section>
        </>
    }
}
