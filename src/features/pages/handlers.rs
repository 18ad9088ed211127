use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use axum_extra::extract::Query;
use serde_json::json;

use crate::{
    features::{
        agents::{repository::get_many_agents, schemas::AgentOut},
        listings::{filter::FilterState, repository::get_many_listings, schemas::ListingCard},
        pages::schemas::{
            AboutResponse, CarouselSection, Hero, HomeQuery, HomeResponse, ServicesResponse,
            TranslationResponse, TranslationsResponse,
        },
    },
    services::{catalog::Catalog, links::whatsapp_url},
    utilities::{config::Config, errors::AppError, i18n::TranslationStore},
    widgets::carousel::{AGENTS_PER_PAGE, Carousel, PROPERTIES_PER_PAGE},
};

const SERVICE_KEYS: [&str; 4] = [
    "services.sale",
    "services.rent",
    "services.appraisal",
    "services.legal",
];

pub async fn get_home_handler(
    State(catalog): State<Catalog>,
    State(config): State<Config>,
    store: TranslationStore,
    Query(home_query): Query<HomeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let viewport_width = home_query.viewport_width();
    let tab = home_query.tab_kind();

    let listings = get_many_listings(
        &catalog,
        &FilterState {
            operation: tab,
            ..FilterState::default()
        },
    );
    let mut property_carousel = Carousel::new(listings.len(), PROPERTIES_PER_PAGE, viewport_width);
    property_carousel.goto_page(home_query.property_start());

    let agents = get_many_agents(&catalog);
    let mut agent_carousel = Carousel::new(agents.len(), AGENTS_PER_PAGE, viewport_width);
    agent_carousel.goto_page(home_query.agent_start());

    let properties = CarouselSection {
        items: property_carousel
            .window(&listings)
            .iter()
            .map(|listing| ListingCard::new(listing, &store))
            .collect(),
        view: property_carousel.view(),
    };
    let agents = CarouselSection {
        items: agent_carousel.window(agents).iter().map(AgentOut::from).collect(),
        view: agent_carousel.view(),
    };

    Ok(Json(HomeResponse {
        hero: Hero {
            title: store.t("hero.title"),
            subtitle: store.t("hero.subtitle"),
        },
        tab,
        properties,
        agents,
        whatsapp_url: whatsapp_url(&config.whatsapp_number, store.resolve("whatsapp.message"))?
            .to_string(),
    }))
}

pub async fn get_about_handler(store: TranslationStore) -> Result<impl IntoResponse, AppError> {
    Ok(Json(AboutResponse {
        title: store.t("about.title"),
        body: store.t("about.body"),
    }))
}

pub async fn get_services_handler(store: TranslationStore) -> Result<impl IntoResponse, AppError> {
    Ok(Json(ServicesResponse {
        title: store.t("services.title"),
        services: SERVICE_KEYS.iter().map(|key| store.t(key)).collect(),
    }))
}

pub async fn get_translations_handler(
    store: TranslationStore,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(TranslationsResponse {
        locale: store.locale(),
        table: store.table().clone(),
    }))
}

pub async fn get_translation_handler(
    store: TranslationStore,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(TranslationResponse {
        locale: store.locale(),
        value: store.t(&key),
        key,
    }))
}

pub async fn healthz_handler() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}
