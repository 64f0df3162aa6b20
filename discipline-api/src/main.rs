use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod adapters;
mod app_state;
mod config;
mod domain;
mod factory;
mod router;
mod routes;

use app_state::AppState;

const DEFAULT_LOG_FILTER: &str = "discipline_api=debug,sheets_sync=debug,tower_http=info";

#[tokio::main]
async fn main() {
    dotenvy::from_filename("./discipline-api/.env.local").ok();
    init_tracing();

    let settings = match config::read_config() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Failed to read configuration: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = AppState::new(factory::record_service(&settings));
    let app = router::create(app_state, &settings);

    let addr = format!(
        "{}:{}",
        settings.application.host, settings.application.port
    );
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("listening on {}", addr);
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
