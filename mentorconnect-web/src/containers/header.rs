use crate::components::{
    language_selector::LanguageSelector, notification_bell::NotificationBell,
    theme_switcher::ThemeSwitcher, user_menu::UserMenu,
};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// Id of the drawer checkbox the mobile menu button toggles.
    pub drawer_id: AttrValue,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <nav class="navbar justify-between bg-base-300 sticky top-0 z-10">
            <label
                for={props.drawer_id.clone()}
                class="btn btn-ghost btn-circle lg:hidden"
                aria-label={i18n.t("nav.open_menu")}
            >
                <Icon icon_id={IconId::HeroiconsOutlineBars3} class="h-5 w-5" />
            </label>
            <div class="flex-1"></div>
            <div class="flex items-center gap-1">
                <LanguageSelector />
                <ThemeSwitcher />
                <NotificationBell />
                <UserMenu />
            </div>
        </nav>
    }
}
