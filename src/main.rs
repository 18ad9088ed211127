use rodcer_estate::{
    app,
    services::{catalog::Catalog, form_intake::Web3FormsClient},
    utilities::{app_state::AppState, config::Config, i18n::Translations},
};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, fmt::time::LocalTime, layer::SubscriberExt, util::SubscriberInitExt,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::init().await?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "rodcer_estate={0},tower_http={0}",
                config.tracing_level
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_timer(LocalTime::rfc_3339()))
        .init();

    let state = AppState {
        catalog: Catalog::seeded(),
        translations: Translations::embedded()?,
        form_intake: Web3FormsClient::new(&config)?,
        config: config.clone(),
    };

    let listener = TcpListener::bind(&config.server_address).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app(state)?).await?;

    Ok(())
}
