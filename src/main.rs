use dotenvy::dotenv;
use media_proxy::app;
use media_proxy::config::settings::AppConfig;
use media_proxy::state::AppState;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting proxy server...");

    let config = AppConfig::new();
    let port = config.server_port;
    let state = AppState::new(config);

    let app = app::create_app(state).await;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
