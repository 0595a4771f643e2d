use tracing_subscriber::EnvFilter;

use photo_search::config::Config;
use photo_search::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!(
        "Search index: {} ({})",
        config.search_index.index,
        config.search_index.endpoint
    );
    tracing::info!(
        "Intent extraction: {}",
        if config.intent.bot_id.is_some() && config.intent.bot_alias_id.is_some() {
            "configured"
        } else {
            "not configured (tokenizer fallback)"
        }
    );

    let state = AppState::new(config.clone())?;
    let app = photo_search::app(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
