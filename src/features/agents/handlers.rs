use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    features::{
        agents::{
            repository::{get_many_agents, get_one_agent},
            schemas::{AgentDetailResponse, AgentOut, AgentsResponse},
        },
        listings::{
            repository::{RECENT_LIMIT, get_listings_by_agent, get_recent_listings},
            schemas::ListingCard,
        },
    },
    services::catalog::Catalog,
    utilities::{errors::AppError, i18n::TranslationStore},
};

pub async fn get_many_agents_handler(
    State(catalog): State<Catalog>,
    store: TranslationStore,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(AgentsResponse {
        title: store.t("agents.meetOurAgents"),
        subtitle: store.t("agents.subtitle"),
        agents: get_many_agents(&catalog).iter().map(AgentOut::from).collect(),
    }))
}

pub async fn get_one_agent_handler(
    State(catalog): State<Catalog>,
    store: TranslationStore,
    Path(agent_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let agent = agent_id
        .trim()
        .parse::<u32>()
        .ok()
        .and_then(|agent_id| get_one_agent(&catalog, agent_id));
    let Some(agent) = agent else {
        debug!("agent {agent_id} not found");
        return Err(AppError::NotFoundError {
            message: store.t("agentDetail.notFound"),
            home: "/".to_string(),
        });
    };

    let listings = get_listings_by_agent(&catalog, agent.id)
        .into_iter()
        .map(|listing| ListingCard::new(listing, &store))
        .collect();
    let recent = get_recent_listings(&catalog, None, RECENT_LIMIT)
        .into_iter()
        .map(|listing| ListingCard::new(listing, &store))
        .collect();

    Ok(Json(AgentDetailResponse {
        agent: AgentOut::from(agent),
        listings,
        recent,
    }))
}
