pub mod catalog;
pub mod form_intake;
pub mod links;
