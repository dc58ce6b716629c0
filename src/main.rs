use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vacancy_insights::{
    config::{get_config, init_config},
    routes,
    services::vacancy_store::load_snapshot,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    init_config()?;
    let config = get_config();

    let snapshot = load_snapshot(&config.data_file).await?;
    if snapshot.is_empty() {
        tracing::warn!(path = %config.data_file.display(), "Vacancy file is empty; aggregates will be empty");
    }

    let app_state = AppState::new(snapshot, config);
    info!(
        static_dir = %config.static_dir.display(),
        min_skill_threshold = config.min_skill_threshold,
        "Serving vacancy aggregates"
    );
    let app = routes::router(app_state);

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
