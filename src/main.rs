use portfolio_site::{
    config::{load_testimonials, resolve_api_base_url, resolve_port, resolve_testimonials_path},
    router, ApiClient, AppState,
};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let api_base_url = resolve_api_base_url();
    let testimonials = load_testimonials(&resolve_testimonials_path()).await;
    info!(
        api = %api_base_url,
        testimonials = testimonials.len(),
        "portfolio front end configured"
    );

    let state = AppState::new(ApiClient::new(api_base_url), testimonials);
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], resolve_port()));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
    }
    info!("shutting down");
}
