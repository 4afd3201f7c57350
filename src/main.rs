use std::net::SocketAddr;

use pizza_party_backend::{app, config::Config, telemetry, AppState};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let config = Config::from_env();
    let addr: SocketAddr = config.addr;
    let state = AppState::new(config);

    let listener = TcpListener::bind(addr).await?;
    info!("listening on http://{}", addr);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
