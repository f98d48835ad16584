//! # atrium-web — Binary Entry Point
//!
//! Starts the Axum HTTP server for the Atrium site.
//! Binds to a configurable port (default 8080).

use atrium_web::state::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Build configuration from environment.
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let config = AppConfig { port };

    // Bootstrap validates the route table and warms the style cache;
    // a missing critical stylesheet is fatal here, by design.
    let state = atrium_web::AppState::try_with_config(config).map_err(|e| {
        tracing::error!("Bootstrap failed: {e}");
        e
    })?;

    tracing::info!(
        routes = state.routes.len(),
        environment = %state.environment,
        "Atrium site bootstrapped"
    );

    let app = atrium_web::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Atrium site listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
