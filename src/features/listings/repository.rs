use std::collections::BTreeSet;

use tracing::debug;

use crate::{
    features::listings::{
        filter::{FilterState, filter},
        models::Listing,
    },
    services::catalog::Catalog,
};

pub const RECENT_LIMIT: usize = 3;

pub fn get_many_listings<'a>(catalog: &'a Catalog, criteria: &FilterState) -> Vec<&'a Listing> {
    let listings = filter(catalog.listings(), criteria);
    debug!(
        "{} of {} listings match the filter",
        listings.len(),
        catalog.listings().len()
    );
    listings
}

pub fn get_one_listing(catalog: &Catalog, listing_id: u32) -> Option<&Listing> {
    catalog
        .listings()
        .iter()
        .find(|listing| listing.id == listing_id)
}

/// Codes are matched case-insensitively, so `cv-001` finds `CV-001`.
pub fn get_listing_by_code<'a>(catalog: &'a Catalog, code: &str) -> Option<&'a Listing> {
    let code = code.trim();
    catalog
        .listings()
        .iter()
        .find(|listing| listing.code.eq_ignore_ascii_case(code))
}

pub fn get_listings_by_agent(catalog: &Catalog, agent_id: u32) -> Vec<&Listing> {
    catalog
        .listings()
        .iter()
        .filter(|listing| listing.agent_id == Some(agent_id))
        .collect()
}

/// Latest listings first, skipping `exclude_id`.
pub fn get_recent_listings(
    catalog: &Catalog,
    exclude_id: Option<u32>,
    limit: usize,
) -> Vec<&Listing> {
    catalog
        .listings()
        .iter()
        .rev()
        .filter(|listing| Some(listing.id) != exclude_id)
        .take(limit)
        .collect()
}

/// Every amenity label present in the catalog, sorted and deduplicated.
pub fn get_amenities(catalog: &Catalog) -> Vec<&'static str> {
    catalog
        .listings()
        .iter()
        .flat_map(|listing| listing.features.iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
