use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::utilities::errors::AppError;

/// Shown when a listing carries neither a gallery nor a cover image.
pub const PLACEHOLDER_IMAGE: &str = "/property-placeholder.jpg";

#[derive(Deserialize, Serialize, PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    #[default]
    Sale,
    Rent,
}

impl FromStr for TransactionKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sale" => Ok(Self::Sale),
            "rent" => Ok(Self::Rent),
            other => Err(AppError::InvalidValue(format!(
                "unknown transaction kind: {other}"
            ))),
        }
    }
}

#[derive(Deserialize, Serialize, PartialEq, Clone, Copy, Debug)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[skip_serializing_none]
#[derive(Serialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: u32,
    pub code: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    /// Currency-formatted, e.g. `$450,000`.
    pub price: &'static str,
    pub price_frequency: Option<&'static str>,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub property_type: &'static str,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub parking: Option<u32>,
    pub area: Option<u32>,
    pub construction_area: Option<u32>,
    pub image: &'static str,
    pub images: &'static [&'static str],
    pub features: &'static [&'static str],
    pub agent_id: Option<u32>,
    pub coordinates: Option<Coordinates>,
}

impl Listing {
    pub fn numeric_price(&self) -> u64 {
        parse_price(self.price)
    }

    /// Images for the gallery and lightbox, never empty.
    pub fn gallery(&self) -> Vec<&'static str> {
        if !self.images.is_empty() {
            return self.images.to_vec();
        }
        if !self.image.is_empty() {
            return vec![self.image];
        }
        vec![PLACEHOLDER_IMAGE]
    }

    pub fn cover(&self) -> &'static str {
        self.gallery().first().copied().unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| *f == feature)
    }
}

/// Numeric value of a formatted price: every non-digit character is dropped,
/// so `"$1,500"` is 1500 and text without digits is 0. Signs and currency
/// codes are not interpreted.
pub fn parse_price(text: &str) -> u64 {
    text.chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u64::from(digit))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_listing() -> Listing {
        Listing {
            id: 1,
            code: "CV-100",
            title: "Test",
            location: "Somewhere",
            description: "",
            price: "$100",
            price_frequency: None,
            kind: TransactionKind::Sale,
            property_type: "House",
            bedrooms: None,
            bathrooms: None,
            parking: None,
            area: None,
            construction_area: None,
            image: "",
            images: &[],
            features: &[],
            agent_id: None,
            coordinates: None,
        }
    }

    #[test]
    fn price_text_is_stripped_to_digits() {
        assert_eq!(parse_price("$450,000"), 450_000);
        assert_eq!(parse_price("$1,500 MXN"), 1_500);
        assert_eq!(parse_price("Consultar"), 0);
        assert_eq!(parse_price(""), 0);
        // Known limitation: the sign is dropped.
        assert_eq!(parse_price("-$20"), 20);
    }

    #[test]
    fn gallery_falls_back_to_cover_then_placeholder() {
        let mut listing = bare_listing();
        assert_eq!(listing.gallery(), vec![PLACEHOLDER_IMAGE]);
        assert_eq!(listing.cover(), PLACEHOLDER_IMAGE);

        listing.image = "/cover.jpg";
        assert_eq!(listing.gallery(), vec!["/cover.jpg"]);
        assert_eq!(listing.cover(), "/cover.jpg");

        listing.images = &["/a.jpg", "/b.jpg"];
        assert_eq!(listing.gallery(), vec!["/a.jpg", "/b.jpg"]);
        assert_eq!(listing.cover(), "/a.jpg");
    }

    #[test]
    fn transaction_kind_parses_case_insensitively() {
        assert_eq!("Rent".parse::<TransactionKind>().ok(), Some(TransactionKind::Rent));
        assert_eq!(" sale ".parse::<TransactionKind>().ok(), Some(TransactionKind::Sale));
        assert!("lease".parse::<TransactionKind>().is_err());
    }
}
