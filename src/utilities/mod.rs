pub mod app_state;
pub mod config;
pub mod errors;
pub mod i18n;
pub mod query;
