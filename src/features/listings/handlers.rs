use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use axum_extra::extract::Query;
use tracing::debug;

use crate::{
    features::{
        agents::repository::get_one_agent,
        listings::{
            filter::FilterState,
            models::Listing,
            repository::{
                RECENT_LIMIT, get_amenities, get_listing_by_code, get_many_listings,
                get_one_listing, get_recent_listings,
            },
            schemas::{
                AmenitiesResponse, FilterQuery, GalleryOut, GalleryQuery, ListingCard,
                ListingDetailResponse, ListingResponse, kind_label, price_label,
            },
        },
    },
    services::{catalog::Catalog, links::map_embed_url},
    utilities::{errors::AppError, i18n::TranslationStore},
    widgets::lightbox::Lightbox,
};

pub async fn get_many_listings_handler(
    State(catalog): State<Catalog>,
    store: TranslationStore,
    Query(filter_query): Query<FilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filters = FilterState::from(filter_query);
    let listings: Vec<ListingCard> = get_many_listings(&catalog, &filters)
        .into_iter()
        .map(|listing| ListingCard::new(listing, &store))
        .collect();

    let empty_message = listings
        .is_empty()
        .then(|| store.t("properties.noResults"));

    Ok(Json(ListingResponse {
        total: listings.len(),
        listings,
        filters,
        empty_message,
    }))
}

pub async fn get_one_listing_handler(
    State(catalog): State<Catalog>,
    store: TranslationStore,
    Path(listing_id): Path<String>,
    Query(gallery_query): Query<GalleryQuery>,
) -> Result<impl IntoResponse, AppError> {
    // Ids that are not numbers name no listing.
    let listing = listing_id
        .trim()
        .parse::<u32>()
        .ok()
        .and_then(|listing_id| get_one_listing(&catalog, listing_id))
        .ok_or_else(|| not_found(&store))?;
    let detail = listing_detail(&catalog, &store, listing, gallery_query.initial_image())?;
    Ok(Json(detail))
}

pub async fn get_listing_by_code_handler(
    State(catalog): State<Catalog>,
    store: TranslationStore,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let listing = get_listing_by_code(&catalog, &code).ok_or_else(|| not_found(&store))?;
    let detail = listing_detail(&catalog, &store, listing, 0)?;
    Ok(Json(detail))
}

pub async fn get_amenities_handler(
    State(catalog): State<Catalog>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(AmenitiesResponse {
        amenities: get_amenities(&catalog),
    }))
}

fn listing_detail(
    catalog: &Catalog,
    store: &TranslationStore,
    listing: &Listing,
    initial_image: usize,
) -> Result<ListingDetailResponse, AppError> {
    let images = listing.gallery();

    let mut lightbox = Lightbox::new(images.len());
    lightbox.open(initial_image);
    let counter = lightbox
        .view()
        .map(|view| view.counter)
        .ok_or_else(|| AppError::InternalError("gallery has no images".to_string()))?;

    let agent = listing
        .agent_id
        .and_then(|agent_id| get_one_agent(catalog, agent_id))
        .cloned();

    let recent = get_recent_listings(catalog, Some(listing.id), RECENT_LIMIT)
        .into_iter()
        .map(|recent| ListingCard::new(recent, store))
        .collect();

    Ok(ListingDetailResponse {
        listing: listing.clone(),
        kind_label: kind_label(listing.kind, store),
        price_label: price_label(listing.kind, store),
        gallery: GalleryOut { images, counter },
        agent,
        map_url: map_embed_url(listing.coordinates, store.locale())?.to_string(),
        recent,
    })
}

fn not_found(store: &TranslationStore) -> AppError {
    debug!("listing lookup missed");
    AppError::NotFoundError {
        message: store.t("propertyDetail.notFound"),
        home: "/".to_string(),
    }
}
