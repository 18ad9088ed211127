use serde::Serialize;

use crate::features::{agents::models::Agent, listings::schemas::ListingCard};

/// Agent with ready-to-use contact links.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AgentOut {
    #[serde(flatten)]
    pub agent: Agent,
    pub phone_href: String,
    pub email_href: String,
}

impl From<&Agent> for AgentOut {
    fn from(agent: &Agent) -> Self {
        Self {
            agent: agent.clone(),
            phone_href: agent.phone_href(),
            email_href: agent.email_href(),
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AgentsResponse {
    pub title: String,
    pub subtitle: String,
    pub agents: Vec<AgentOut>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AgentDetailResponse {
    pub agent: AgentOut,
    pub listings: Vec<ListingCard>,
    pub recent: Vec<ListingCard>,
}
