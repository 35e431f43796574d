use yew::{AttrValue, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    pub initials: AttrValue,
    /// Tailwind width class, e.g. `w-10`.
    #[prop_or(AttrValue::Static("w-10"))]
    pub size: AttrValue,
}

/// Initials placeholder used wherever a profile photo would be.
#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    html! {
        <div class="avatar placeholder">
            <div class={classes!("bg-primary/20", "text-primary", "rounded-full", props.size.to_string())}>
                <span class="text-sm font-semibold">{ props.initials.clone() }</span>
            </div>
        </div>
    }
}
