use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::routes::MainRoute;

const STEPS: [&str; 4] = ["profile", "find", "book", "grow"];
const BENEFITS: [&str; 2] = ["mentee", "mentor"];
const FAQ: [&str; 4] = ["cost", "choose", "format", "become"];

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    let (i18n, ..) = use_translation();
    let t = |key: String| i18n.t(&key);

    html! {
        <div class="container mx-auto px-4 py-12 space-y-16">
            <section class="text-center max-w-2xl mx-auto space-y-3">
                <h1 class="text-4xl font-bold">{i18n.t("about.title")}</h1>
                <p class="text-lg text-base-content/70">{i18n.t("about.subtitle")}</p>
            </section>
            <section>
                <ul class="steps steps-vertical lg:steps-horizontal w-full">
                    { for STEPS.iter().map(|step| html! {
                        <li class="step step-primary">
                            <div class="text-left lg:text-center max-w-xs p-2">
                                <h3 class="font-semibold">{ t(format!("about.steps.{step}.title")) }</h3>
                                <p class="text-sm text-base-content/70">{ t(format!("about.steps.{step}.description")) }</p>
                            </div>
                        </li>
                    }) }
                </ul>
            </section>
            <section class="grid gap-6 md:grid-cols-2">
                { for BENEFITS.iter().map(|audience| html! {
                    <div class="card bg-base-100 border border-base-300 shadow-sm">
                        <div class="card-body">
                            <h2 class="card-title">{ t(format!("about.benefits.{audience}.title")) }</h2>
                            <p class="text-base-content/70">{ t(format!("about.benefits.{audience}.description")) }</p>
                        </div>
                    </div>
                }) }
            </section>
            <section class="max-w-3xl mx-auto space-y-3">
                <h2 class="text-2xl font-bold text-center">{i18n.t("about.faq.title")}</h2>
                { for FAQ.iter().map(|question| html! {
                    <div class="collapse collapse-arrow bg-base-200">
                        <input type="checkbox" />
                        <div class="collapse-title font-medium">{ t(format!("about.faq.{question}.question")) }</div>
                        <div class="collapse-content text-base-content/70">
                            <p>{ t(format!("about.faq.{question}.answer")) }</p>
                        </div>
                    </div>
                }) }
            </section>
            <section class="text-center space-y-4">
                <h2 class="text-2xl font-bold">{i18n.t("home.cta.title")}</h2>
                <div class="flex justify-center gap-3">
                    <Link<MainRoute> to={MainRoute::Signup} classes="btn btn-primary">{i18n.t("nav.signup")}</Link<MainRoute>>
                    <Link<MainRoute> to={MainRoute::FindMentors} classes="btn btn-outline">{i18n.t("nav.find_mentors")}</Link<MainRoute>>
                </div>
            </section>
        </div>
    }
}
