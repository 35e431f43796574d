use crate::containers::{footer::Footer, navbar::Navbar};
use yew::{Children, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct SiteLayoutProps {
    pub children: Children,
}

#[function_component(SiteLayout)]
pub fn site_layout(props: &SiteLayoutProps) -> Html {
    html! {
        <div class="min-h-screen flex flex-col bg-base-100">
            <Navbar />
            <main class="flex-grow">
                {props.children.clone()}
            </main>
            <Footer />
        </div>
    }
}
