pub(crate) mod avatar;
pub(crate) mod booking_form;
pub(crate) mod conversation_list;
pub(crate) mod language_selector;
pub(crate) mod language_selector_button;
pub(crate) mod loading;
pub(crate) mod mentor_card;
pub(crate) mod mentor_search;
pub(crate) mod message_bubble;
pub(crate) mod message_composer;
pub(crate) mod message_thread;
pub(crate) mod nav_item;
pub(crate) mod notification_bell;
pub(crate) mod star_rating;
pub(crate) mod theme_switcher;
pub(crate) mod toast_host;
pub(crate) mod user_menu;
