//! Catalog filter engine.
//!
//! [`filter`] narrows a listing slice by a [`FilterState`] without touching
//! the input; the result keeps the input order. Every set clause must hold.
//! Bedrooms, bathrooms and area clauses are skipped for listings that do
//! not define the attribute, and the amenity clause requires the listing's
//! features to contain every selected amenity.

use std::{collections::BTreeSet, str::FromStr};

use serde::Serialize;

use crate::features::listings::models::{Listing, TransactionKind};

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum FilterField {
    Operation,
    PropertyType,
    MinPrice,
    MaxPrice,
    Bedrooms,
    Bathrooms,
    MinArea,
    MaxArea,
}

#[derive(Serialize, PartialEq, Eq, Clone, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub operation: Option<TransactionKind>,
    pub property_type: Option<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub min_area: Option<u32>,
    pub max_area: Option<u32>,
    pub amenities: BTreeSet<String>,
}

impl FilterState {
    pub fn is_unset(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Applies raw user input to one field. Blank, unparseable or negative
    /// input leaves the field unset.
    pub fn set(&mut self, field: FilterField, raw: &str) {
        match field {
            FilterField::Operation => self.operation = parse_input(raw),
            FilterField::PropertyType => {
                let raw = raw.trim();
                self.property_type = (!raw.is_empty()).then(|| raw.to_string());
            }
            FilterField::MinPrice => self.min_price = parse_input(raw),
            FilterField::MaxPrice => self.max_price = parse_input(raw),
            FilterField::Bedrooms => self.bedrooms = parse_input(raw),
            FilterField::Bathrooms => self.bathrooms = parse_input(raw),
            FilterField::MinArea => self.min_area = parse_input(raw),
            FilterField::MaxArea => self.max_area = parse_input(raw),
        }
    }

    pub fn toggle_amenity(&mut self, amenity: &str) {
        if !self.amenities.remove(amenity) {
            self.amenities.insert(amenity.to_string());
        }
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        if self.operation.is_some_and(|kind| listing.kind != kind) {
            return false;
        }

        if self
            .property_type
            .as_deref()
            .is_some_and(|property_type| listing.property_type != property_type)
        {
            return false;
        }

        let price = listing.numeric_price();
        if price < self.min_price.unwrap_or(0) || price > self.max_price.unwrap_or(u64::MAX) {
            return false;
        }

        let min_bedrooms = self.bedrooms.unwrap_or(0);
        if listing.bedrooms.is_some_and(|bedrooms| bedrooms < min_bedrooms) {
            return false;
        }

        let min_bathrooms = self.bathrooms.unwrap_or(0);
        if listing.bathrooms.is_some_and(|bathrooms| bathrooms < min_bathrooms) {
            return false;
        }

        let min_area = self.min_area.unwrap_or(0);
        let max_area = self.max_area.unwrap_or(u32::MAX);
        if listing
            .area
            .is_some_and(|area| area < min_area || area > max_area)
        {
            return false;
        }

        self.amenities
            .iter()
            .all(|amenity| listing.has_feature(amenity))
    }
}

fn parse_input<T: FromStr>(raw: &str) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse().ok()
}

pub fn filter<'a>(listings: &'a [Listing], criteria: &FilterState) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|listing| criteria.matches(listing))
        .collect()
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
