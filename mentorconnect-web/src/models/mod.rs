pub mod app_state;
pub mod inbox_state;
pub mod meeting_state;
pub mod toast_state;
