use std::net::SocketAddr;

use aidesk_web::{app, logging, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::configure_logging();

    let config = AppConfig::from_env();
    let port = config.port;
    let app = app(config)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
