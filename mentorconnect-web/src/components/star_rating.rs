use yew::{Html, Properties, classes, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct StarRatingProps {
    /// Number of filled stars, at most five.
    pub filled: usize,
    #[prop_or_default]
    pub label: Option<String>,
}

#[function_component(StarRating)]
pub fn star_rating(props: &StarRatingProps) -> Html {
    html! {
        <div class="flex items-center">
            { for (0..5).map(|index| {
                let tone = if index < props.filled { "text-warning" } else { "text-base-content/20" };
                html! { <Icon icon_id={IconId::HeroiconsSolidStar} class={classes!("h-4", "w-4", tone)} /> }
            }) }
            {
                props.label.as_ref().map_or_else(Html::default, |label| html! {
                    <span class="ml-1 text-sm text-base-content/70">{ label }</span>
                })
            }
        </div>
    }
}
