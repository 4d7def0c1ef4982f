use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tracing_subscriber::EnvFilter;

use tailorbot::config::AppConfig;
use tailorbot::handlers;
use tailorbot::services::agent::Agent;
use tailorbot::services::messaging::interakt::InteraktWhatsAppProvider;
use tailorbot::services::messaging::{MessagingProvider, NoopProvider};
use tailorbot::state::AppState;
use tailorbot::store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let messaging: Box<dyn MessagingProvider> = if config.whatsapp_api_key.is_empty() {
        tracing::info!("WHATSAPP_API_KEY not set, outbound delivery disabled");
        Box::new(NoopProvider)
    } else {
        tracing::info!("using Interakt WhatsApp provider (url: {})", config.whatsapp_api_url);
        Box::new(InteraktWhatsAppProvider::new(
            config.whatsapp_api_url.clone(),
            config.whatsapp_api_key.clone(),
        ))
    };

    let state = Arc::new(AppState {
        store: Store::new(),
        config: config.clone(),
        agent: Agent::new(),
        messaging,
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/chat", post(handlers::chat::chat))
        .route("/customer/:phone", get(handlers::customer::get_customer))
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");
    tracing::info!("shop: {}", config.shop_name);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
