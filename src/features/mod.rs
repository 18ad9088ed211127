pub mod agents;
pub mod contact;
pub mod listings;
pub mod pages;
