use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shipdesk_carrier::{delhivery::DelhiveryClient, mock::MockCarrier, CarrierClient};
use shipdesk_config::{CarrierConfig, ServerConfig};
use shipdesk_labels::LabelStore;
use shipdesk_server::router::build_router;
use shipdesk_server::state::AppState;

fn init_tracing() {
    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=info".to_string());
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn create_carrier_client(config: &CarrierConfig) -> Result<Arc<dyn CarrierClient>> {
    match config.provider.as_str() {
        "mock" => {
            tracing::info!("Using mock carrier client");
            Ok(MockCarrier::new())
        }
        _ => {
            tracing::info!("Using Delhivery carrier client");
            Ok(DelhiveryClient::new(config.clone())?)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let server_config = ServerConfig::from_env()?;
    let carrier_config = CarrierConfig::from_env();

    let carrier = create_carrier_client(&carrier_config)?;
    let labels = Arc::new(LabelStore::new(&server_config.labels_dir));

    let state = AppState {
        carrier,
        carrier_config: Arc::new(carrier_config),
        labels,
    };

    let app = build_router(state, &server_config);

    let addr = SocketAddr::new(
        server_config
            .host
            .parse()
            .context("Invalid HOST address")?,
        server_config.port,
    );
    tracing::info!(%addr, "Starting shipdesk server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
