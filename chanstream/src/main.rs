use std::{env, sync::Arc};

use anyhow::Result;
use axum::Router;
use chanstream_rs::{AppState, AppStateRef, load_config, routes};
use log::{info, warn};
use tokio::net::TcpListener;

async fn build_app(app_state: &AppStateRef) -> Result<Router> {
    let root = Router::new().merge(routes::get_routes(app_state));

    Ok(root)
}

async fn app_entry() -> Result<()> {
    let config = load_config(env::var("CS_CONFIG_PATH").unwrap_or_else(|_| "config.yml".into()))?;
    let app_state = Arc::new(AppState::new(config)?);

    if app_state.config.load_on_startup.unwrap_or(false) {
        // a failed startup load is reported through the status, not fatal
        if let Err(e) = app_state.channel_service.update().await {
            warn!("Startup load failed: {}", e);
        }
    }

    let tcp_listener = TcpListener::bind(&app_state.config.listen_addr).await?;
    info!("Listening on {}", app_state.config.listen_addr);
    axum::serve(tcp_listener, build_app(&app_state).await?).await?;

    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(e) = app_entry().await {
        panic!("Fatal error: {}", e);
    }
}
