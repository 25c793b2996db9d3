mod config;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    tracing_subscriber::fmt::init();

    if dotenvy::dotenv().is_ok() {
        tracing::debug!("loaded .env");
    }

    let config = config::ServerConfig::from_env()?;
    let addr = SocketAddr::new(config.bind_addr, config.port);
    tracing::info!(
        canvas_width = config.canvas_width,
        session_capacity = config.session_capacity,
        site_root = %config.site_root.display(),
        "config loaded"
    );

    let state = state::AppState::new(config);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "divisibility visualizer listening");
    axum::serve(listener, app).await?;
    Ok(())
}
