use std::sync::Arc;

use tracing::info;

use crate::features::{
    agents::{data::AGENTS, models::Agent},
    listings::{data::LISTINGS, models::Listing},
};

/// In-memory, read-only store of listings and agents. Cheap to clone.
#[derive(Clone, Debug)]
pub struct Catalog {
    listings: Arc<[Listing]>,
    agents: Arc<[Agent]>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>, agents: Vec<Agent>) -> Self {
        Self {
            listings: listings.into(),
            agents: agents.into(),
        }
    }

    /// Catalog backed by the bundled listing and agent data.
    pub fn seeded() -> Self {
        let catalog = Self {
            listings: Arc::from(LISTINGS.as_slice()),
            agents: Arc::from(AGENTS.as_slice()),
        };
        info!(
            "catalog seeded with {} listings and {} agents",
            catalog.listings.len(),
            catalog.agents.len()
        );
        catalog
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn seeded_ids_and_codes_are_unique() {
        let catalog = Catalog::seeded();

        let ids: HashSet<u32> = catalog.listings().iter().map(|l| l.id).collect();
        assert_eq!(ids.len(), catalog.listings().len());

        let codes: HashSet<&str> = catalog.listings().iter().map(|l| l.code).collect();
        assert_eq!(codes.len(), catalog.listings().len());

        let agent_ids: HashSet<u32> = catalog.agents().iter().map(|a| a.id).collect();
        assert_eq!(agent_ids.len(), catalog.agents().len());
    }

    #[test]
    fn seeded_listings_reference_known_agents() {
        let catalog = Catalog::seeded();
        for listing in catalog.listings() {
            let agent_id = listing.agent_id.expect("seeded listings have an agent");
            assert!(
                catalog.agents().iter().any(|a| a.id == agent_id),
                "listing {} points at missing agent {agent_id}",
                listing.id
            );
        }
    }
}
