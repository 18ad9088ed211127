//! Outbound links to external providers: the embeddable map frame and the
//! WhatsApp click-to-chat button.

use url::Url;

use crate::{
    features::listings::models::Coordinates,
    utilities::{errors::AppError, i18n::Locale},
};

/// Agency office, used when a listing has no coordinates.
pub const DEFAULT_COORDINATES: Coordinates = Coordinates {
    latitude: 22.2331,
    longitude: -97.8611,
};

const MAP_ZOOM: u8 = 14;

pub fn map_embed_url(coordinates: Option<Coordinates>, locale: Locale) -> Result<Url, AppError> {
    let Coordinates {
        latitude,
        longitude,
    } = coordinates.unwrap_or(DEFAULT_COORDINATES);

    let mut url = Url::parse("https://maps.google.com/maps")?;
    url.set_query(Some(&format!(
        "q={latitude},{longitude}&hl={locale}&z={MAP_ZOOM}&output=embed"
    )));
    Ok(url)
}

pub fn whatsapp_url(number: &str, message: &str) -> Result<Url, AppError> {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    let mut url = Url::parse("https://wa.me/")?.join(&digits)?;
    url.query_pairs_mut().append_pair("text", message);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_url_uses_listing_coordinates() {
        let url = map_embed_url(
            Some(Coordinates {
                latitude: 22.2764,
                longitude: -97.8465,
            }),
            Locale::En,
        )
        .expect("url");
        assert_eq!(
            url.as_str(),
            "https://maps.google.com/maps?q=22.2764,-97.8465&hl=en&z=14&output=embed"
        );
    }

    #[test]
    fn map_url_falls_back_to_office_position() {
        let url = map_embed_url(None, Locale::Es).expect("url");
        assert_eq!(
            url.as_str(),
            "https://maps.google.com/maps?q=22.2331,-97.8611&hl=es&z=14&output=embed"
        );
    }

    #[test]
    fn whatsapp_url_encodes_message() {
        let url = whatsapp_url("+52 123 456 7890", "Hola, ¿info?").expect("url");
        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/521234567890");
        let text = url
            .query_pairs()
            .find(|(key, _)| key == "text")
            .map(|(_, value)| value.into_owned());
        assert_eq!(text.as_deref(), Some("Hola, ¿info?"));
    }
}
