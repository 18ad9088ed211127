use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{
    features::{
        agents::models::Agent,
        listings::{
            filter::{FilterField, FilterState},
            models::{Listing, TransactionKind},
        },
    },
    utilities::{
        i18n::TranslationStore,
        query::{comma_separated, last_raw, last_value},
    },
};

// -- =====================
// -- IN
// -- =====================
/// Raw filter sidebar input. Everything arrives as text, any key may
/// repeat, and it is parsed permissively into a [`FilterState`].
#[derive(Deserialize, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterQuery {
    pub operation: Vec<String>,
    pub property_type: Vec<String>,
    pub min_price: Vec<String>,
    pub max_price: Vec<String>,
    pub bedrooms: Vec<String>,
    pub bathrooms: Vec<String>,
    pub min_area: Vec<String>,
    pub max_area: Vec<String>,
    /// One key per checkbox, or comma-separated labels, or both.
    pub amenities: Vec<String>,
}

impl From<FilterQuery> for FilterState {
    fn from(query: FilterQuery) -> Self {
        let mut state = FilterState::default();
        let fields = [
            (FilterField::Operation, &query.operation),
            (FilterField::PropertyType, &query.property_type),
            (FilterField::MinPrice, &query.min_price),
            (FilterField::MaxPrice, &query.max_price),
            (FilterField::Bedrooms, &query.bedrooms),
            (FilterField::Bathrooms, &query.bathrooms),
            (FilterField::MinArea, &query.min_area),
            (FilterField::MaxArea, &query.max_area),
        ];
        for (field, values) in fields {
            if let Some(raw) = last_raw(values) {
                state.set(field, raw);
            }
        }
        state
            .amenities
            .extend(comma_separated(&query.amenities).map(str::to_string));
        state
    }
}

#[derive(Deserialize, Default, Debug)]
#[serde(default)]
pub struct GalleryQuery {
    /// Image the lightbox opens on.
    pub image: Vec<String>,
}

impl GalleryQuery {
    pub fn initial_image(&self) -> usize {
        last_value(&self.image).unwrap_or(0)
    }
}

// -- =====================
// -- OUT
// -- =====================
#[skip_serializing_none]
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListingCard {
    pub id: u32,
    pub code: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub kind_label: String,
    pub property_type: &'static str,
    pub price: &'static str,
    pub price_label: String,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub area: Option<u32>,
    pub cover: &'static str,
}

impl ListingCard {
    pub fn new(listing: &Listing, store: &TranslationStore) -> Self {
        Self {
            id: listing.id,
            code: listing.code,
            title: listing.title,
            location: listing.location,
            kind: listing.kind,
            kind_label: kind_label(listing.kind, store),
            property_type: listing.property_type,
            price: listing.price,
            price_label: price_label(listing.kind, store),
            // Zero counts are hidden on cards.
            bedrooms: listing.bedrooms.filter(|n| *n > 0),
            bathrooms: listing.bathrooms.filter(|n| *n > 0),
            area: listing.area,
            cover: listing.cover(),
        }
    }
}

pub fn kind_label(kind: TransactionKind, store: &TranslationStore) -> String {
    match kind {
        TransactionKind::Sale => store.t("hero.sale"),
        TransactionKind::Rent => store.t("hero.rent"),
    }
}

/// Suffix shown under a price: rentals are monthly, sales are quoted in MXN.
pub fn price_label(kind: TransactionKind, store: &TranslationStore) -> String {
    match kind {
        TransactionKind::Rent => store.t("properties.monthly"),
        TransactionKind::Sale => store.t("properties.mxn"),
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    pub listings: Vec<ListingCard>,
    pub total: usize,
    pub filters: FilterState,
    pub empty_message: Option<String>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GalleryOut {
    pub images: Vec<&'static str>,
    pub counter: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListingDetailResponse {
    pub listing: Listing,
    pub kind_label: String,
    pub price_label: String,
    pub gallery: GalleryOut,
    pub agent: Option<Agent>,
    pub map_url: String,
    pub recent: Vec<ListingCard>,
}

#[derive(Serialize, Debug)]
pub struct AmenitiesResponse {
    pub amenities: Vec<&'static str>,
}
