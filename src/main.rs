use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;

use cqrs_forge::{
    config::AppConfig,
    db::connection,
    logging::init_tracing,
    routes::app,
    state::AppState,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("server failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env().context("failed to load config")?;
    init_tracing(&cfg.logging);

    let db = connection::connect(cfg.database()?).await?;
    let state = AppState::new(cfg, db);

    let app = app(Arc::clone(&state));

    let general = &state.config.general;
    let addr: SocketAddr = format!("{}:{}", general.host, general.port)
        .parse()
        .context("invalid host/port")?;
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
