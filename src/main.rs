// src/main.rs

use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use affirm_backend::api::create_router;
use affirm_backend::config::AffirmConfig;
use affirm_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AffirmConfig::from_env();

    // Initialize tracing
    let level = config.log_level.parse::<Level>().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting AI Wellness Affirmation API");
    info!("Model: {}", config.model);
    info!(
        "AI generation: {}",
        if config.ai_enabled() { "enabled" } else { "disabled - set GROQ_API_KEY to enable" }
    );

    let bind_address = config.bind_address();
    let app_state = AppState::new(config)?;
    let app = create_router(app_state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Server listening on http://{}", bind_address);
    info!("  GET  / - Health check");
    info!("  POST /api/generate-affirmation - Generate affirmation");
    info!("  GET  /api/affirmations - View all affirmations");

    axum::serve(listener, app).await?;

    Ok(())
}
