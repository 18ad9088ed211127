use axum::extract::FromRef;

use crate::{
    services::{catalog::Catalog, form_intake::Web3FormsClient},
    utilities::{config::Config, i18n::Translations},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Catalog,
    pub translations: Translations,
    pub form_intake: Web3FormsClient,
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Catalog {
    fn from_ref(state: &AppState) -> Self {
        state.catalog.clone()
    }
}

impl FromRef<AppState> for Translations {
    fn from_ref(state: &AppState) -> Self {
        state.translations.clone()
    }
}

impl FromRef<AppState> for Web3FormsClient {
    fn from_ref(state: &AppState) -> Self {
        state.form_intake.clone()
    }
}
