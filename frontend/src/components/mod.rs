pub mod auth_modal;
pub mod error_banner;
pub mod header;
pub mod views;
