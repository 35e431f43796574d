pub mod footer;
pub mod header;
pub mod layout;
pub mod navbar;
pub mod site_layout;
