#![recursion_limit = "256"]

mod config;
mod error;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "procurement console failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), error::HostError> {
    let config = config::HostConfig::from_env()?;
    let state = state::AppState::new(&config)?;

    let app = routes::leptos_app(state)?;
    let addr = format!("{}:{}", config.bind_addr, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| error::HostError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, backend = %config.backend_url, "procurement console listening");
    axum::serve(listener, app).await.map_err(error::HostError::Serve)
}
