use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use factcheck_ai::api::{self, AppState};
use factcheck_ai::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    factcheck_ai::init_logging();

    let config = AppConfig::from_env();
    info!(
        classifier_enabled = config.hf_api_key.is_some(),
        ocr_key_configured = config.ocr_api_key.is_some(),
        "configuration loaded"
    );

    let state = Arc::new(AppState::new(&config));
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .await
        .context("server terminated unexpectedly")?;

    Ok(())
}
