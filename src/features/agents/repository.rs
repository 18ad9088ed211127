use crate::{features::agents::models::Agent, services::catalog::Catalog};

pub fn get_many_agents(catalog: &Catalog) -> &[Agent] {
    catalog.agents()
}

pub fn get_one_agent(catalog: &Catalog, agent_id: u32) -> Option<&Agent> {
    catalog.agents().iter().find(|agent| agent.id == agent_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_agents_by_id() {
        let catalog = Catalog::seeded();
        assert_eq!(get_many_agents(&catalog).len(), 8);
        assert_eq!(get_one_agent(&catalog, 3).map(|a| a.id), Some(3));
        assert!(get_one_agent(&catalog, 0).is_none());
    }
}
