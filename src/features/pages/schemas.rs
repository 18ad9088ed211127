use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    features::{
        agents::schemas::AgentOut,
        listings::{models::TransactionKind, schemas::ListingCard},
    },
    utilities::{i18n::Locale, query::last_value},
    widgets::carousel::CarouselView,
};

pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

// -- =====================
// -- IN
// -- =====================
/// Carousel positions and viewport, as sent by the page. Junk values fall
/// back to defaults.
#[derive(Deserialize, Default, Debug)]
#[serde(default)]
pub struct HomeQuery {
    /// `all`, `sale` or `rent`; anything else shows every listing.
    pub tab: Vec<String>,
    pub viewport_width: Vec<String>,
    pub property_start: Vec<String>,
    pub agent_start: Vec<String>,
}

impl HomeQuery {
    pub fn tab_kind(&self) -> Option<TransactionKind> {
        last_value(&self.tab)
    }

    pub fn viewport_width(&self) -> u32 {
        last_value(&self.viewport_width).unwrap_or(DEFAULT_VIEWPORT_WIDTH)
    }

    pub fn property_start(&self) -> usize {
        last_value(&self.property_start).unwrap_or(0)
    }

    pub fn agent_start(&self) -> usize {
        last_value(&self.agent_start).unwrap_or(0)
    }
}

// -- =====================
// -- OUT
// -- =====================
#[derive(Serialize, Debug)]
pub struct CarouselSection<T> {
    pub items: Vec<T>,
    pub view: CarouselView,
}

#[derive(Serialize, Debug)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HomeResponse {
    pub hero: Hero,
    pub tab: Option<TransactionKind>,
    pub properties: CarouselSection<ListingCard>,
    pub agents: CarouselSection<AgentOut>,
    pub whatsapp_url: String,
}

#[derive(Serialize, Debug)]
pub struct AboutResponse {
    pub title: String,
    pub body: String,
}

#[derive(Serialize, Debug)]
pub struct ServicesResponse {
    pub title: String,
    pub services: Vec<String>,
}

#[derive(Serialize, Debug)]
pub struct TranslationsResponse {
    pub locale: Locale,
    pub table: Value,
}

#[derive(Serialize, Debug)]
pub struct TranslationResponse {
    pub locale: Locale,
    pub key: String,
    pub value: String,
}
