use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use texttools_backend::config::Config;
use texttools_backend::routes;
use texttools_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let (config, loaded_path) = Config::discover()?;

    let default_filter = if config.system_config.debug {
        "texttools_backend=debug,tower_http=debug"
    } else {
        "texttools_backend=info,tower_http=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    match &loaded_path {
        Some(path) => info!("Loaded configuration from: {}", path.display()),
        None => info!("No config file found, using built-in defaults"),
    }
    if config.system_config.api_token.is_empty() {
        warn!("API_TOKEN is not set; inference requests will be unauthenticated");
    }

    let host = config.system_config.host.clone();
    let port = config.system_config.port;
    let debug_enabled = config.system_config.debug;

    let app_state = AppState::new(config)?;
    info!(
        "Default models: translation={}, summarization={}",
        app_state.catalog.translation_models.default_model().id,
        app_state.catalog.summarization_models.default_model().id
    );

    let app = routes::app(app_state);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!("Starting server on {} (debug: {})", listener.local_addr()?, debug_enabled);
    axum::serve(listener, app).await?;

    Ok(())
}
