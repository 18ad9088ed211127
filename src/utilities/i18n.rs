//! Translation store.
//!
//! Tables are nested JSON objects, one per locale, embedded at build time.
//! A [`TranslationStore`] pairs the shared tables with the active locale and
//! is handed explicitly to whatever needs to resolve user-facing text.

use std::{collections::HashMap, fmt, str::FromStr, sync::Arc};

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::ACCEPT_LANGUAGE, request::Parts},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::utilities::{config::Config, errors::AppError};

const ES_TABLE: &str = include_str!("../../locales/es.json");
const EN_TABLE: &str = include_str!("../../locales/en.json");

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    pub const FALLBACK: Locale = Locale::Es;
    pub const SUPPORTED: [Locale; 2] = [Locale::Es, Locale::En];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// Parses a language tag, ignoring region subtags and case.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.split(['-', '_']).next().unwrap_or("") {
            "es" => Some(Self::Es),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Picks a locale from a preferred-language signal such as an
    /// `Accept-Language` header. Only the first listed language counts.
    pub fn detect(signal: Option<&str>) -> Option<Self> {
        let first = signal?.split(',').next()?;
        let tag = first.split(';').next()?;
        Self::parse(tag)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| AppError::UnsupportedLocale(s.to_string()))
    }
}

/// Read-only translation tables for every supported locale.
#[derive(Clone, Debug)]
pub struct Translations {
    tables: Arc<HashMap<Locale, Value>>,
}

impl Translations {
    pub fn embedded() -> Result<Self, AppError> {
        let tables = HashMap::from([
            (Locale::Es, serde_json::from_str(ES_TABLE)?),
            (Locale::En, serde_json::from_str(EN_TABLE)?),
        ]);
        Ok(Self {
            tables: Arc::new(tables),
        })
    }

    pub fn from_tables(tables: impl IntoIterator<Item = (Locale, Value)>) -> Self {
        Self {
            tables: Arc::new(tables.into_iter().collect()),
        }
    }

    pub fn table(&self, locale: Locale) -> Option<&Value> {
        self.tables.get(&locale)
    }
}

#[derive(Clone, Debug)]
pub struct TranslationStore {
    translations: Translations,
    locale: Locale,
}

impl TranslationStore {
    pub fn new(translations: Translations, locale: Locale) -> Self {
        Self {
            translations,
            locale,
        }
    }

    /// Builds a store from a preferred-language signal, falling back to
    /// `fallback` when the signal is absent or names an unsupported language.
    pub fn detect(translations: Translations, signal: Option<&str>, fallback: Locale) -> Self {
        let locale = Locale::detect(signal).unwrap_or(fallback);
        Self::new(translations, locale)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Active locale's whole table, `Value::Null` if the locale has none.
    pub fn table(&self) -> &Value {
        self.translations
            .table(self.locale)
            .unwrap_or(&Value::Null)
    }

    /// Resolves a dotted key against the active table. Any missing segment,
    /// or a final value that is not a string, yields the key itself.
    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        key.split('.')
            .try_fold(self.table(), |value, segment| value.as_object()?.get(segment))
            .and_then(Value::as_str)
            .unwrap_or(key)
    }

    /// Owned variant of [`resolve`](Self::resolve) for response bodies.
    pub fn t(&self, key: &str) -> String {
        self.resolve(key).to_string()
    }
}

impl<S> FromRequestParts<S> for TranslationStore
where
    Translations: FromRef<S>,
    Config: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let translations = Translations::from_ref(state);
        let config = Config::from_ref(state);

        // An explicit `?lang=` wins over the browser preference.
        let requested = parts.uri.query().and_then(|query| {
            url::form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| key == "lang")
                .and_then(|(_, value)| Locale::parse(&value))
        });

        let store = match requested {
            Some(locale) => TranslationStore::new(translations, locale),
            None => {
                let accept_language = parts
                    .headers
                    .get(ACCEPT_LANGUAGE)
                    .and_then(|value| value.to_str().ok());
                TranslationStore::detect(translations, accept_language, config.default_locale)
            }
        };

        debug!("resolved request locale: {}", store.locale());

        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store(locale: Locale) -> TranslationStore {
        let translations = Translations::from_tables([
            (
                Locale::Es,
                json!({"hero": {"sale": "Venta", "rent": "Renta"}, "count": 3}),
            ),
            (Locale::En, json!({"hero": {"sale": "Sale", "rent": "Rent"}})),
        ]);
        TranslationStore::new(translations, locale)
    }

    #[test]
    fn resolves_nested_keys_for_active_locale() {
        let store = store(Locale::Es);
        assert_eq!(store.resolve("hero.sale"), "Venta");
        assert_eq!(store.resolve("hero.rent"), "Renta");
    }

    #[test]
    fn missing_or_non_string_values_return_the_key() {
        let store = store(Locale::Es);
        assert_eq!(store.resolve("hero.land"), "hero.land");
        assert_eq!(store.resolve("hero"), "hero");
        assert_eq!(store.resolve("count"), "count");
        assert_eq!(store.resolve("hero.sale.extra"), "hero.sale.extra");
        assert_eq!(store.resolve(""), "");
    }

    #[test]
    fn set_locale_switches_every_following_lookup() {
        let mut store = store(Locale::Es);
        store.set_locale(Locale::En);
        assert_eq!(store.locale(), Locale::En);
        assert_eq!(store.resolve("hero.sale"), "Sale");
        assert_eq!(store.t("hero.rent"), "Rent");
    }

    #[test]
    fn detects_locale_from_preferred_language_signal() {
        assert_eq!(Locale::detect(Some("en-US,en;q=0.9,es;q=0.8")), Some(Locale::En));
        assert_eq!(Locale::detect(Some("ES-mx")), Some(Locale::Es));
        assert_eq!(Locale::detect(Some("fr-FR,en;q=0.5")), None);
        assert_eq!(Locale::detect(None), None);

        let translations = Translations::from_tables([]);
        let detected = TranslationStore::detect(translations, Some("de"), Locale::FALLBACK);
        assert_eq!(detected.locale(), Locale::Es);
    }

    #[test]
    fn embedded_tables_cover_every_supported_locale() {
        let translations = Translations::embedded().expect("embedded tables parse");
        for locale in Locale::SUPPORTED {
            let store = TranslationStore::new(translations.clone(), locale);
            assert_ne!(store.resolve("hero.sale"), "hero.sale", "{locale}");
            assert_ne!(store.resolve("contact.errors.name"), "contact.errors.name");
            assert_ne!(
                store.resolve("propertyDetail.notFound"),
                "propertyDetail.notFound"
            );
        }
    }
}
