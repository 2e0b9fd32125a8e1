use std::sync::Arc;

use chatrelay::config::RelayConfig;
use chatrelay::server::build_router;
use chatrelay::util::{env_bind_addr, init_tracing, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = RelayConfig::from_env();
    tracing::info!(
        base_url = %config.base_url,
        model = %config.model,
        timeout_secs = config.timeout_secs,
        "Upstream configured"
    );

    let state = Arc::new(AppState::new(config));
    let router = build_router(state);

    let addr = env_bind_addr();
    tracing::info!("chatrelay listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
