use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use dashboard_api::DashboardContext;
use finals::{load_dataset, HttpTableSource, FINALS_URL};
use tracing::{error, info, warn};

mod api;
mod app_state;
mod config;
mod page;

use api::build_router;
use app_state::AppState;
use config::load_settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (settings, warnings) = load_settings();
    tracing_subscriber::fmt()
        .with_env_filter(settings.run_mode.log_filter())
        .init();
    for warning in &warnings {
        warn!("{warning}");
    }

    let source = HttpTableSource::new().context("failed to prepare http client")?;
    let dataset = load_dataset(&source)
        .await
        .map_err(|error| {
            error!(
                url = FINALS_URL,
                %error,
                "failed to load the finals table; the dashboard will not start"
            );
            error
        })
        .context("loading World Cup finals")?;

    let state = AppState {
        dashboard: DashboardContext::new(dataset),
        run_mode: settings.run_mode,
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings
        .server_bind
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.server_bind))?;
    info!(%addr, run_mode = ?settings.run_mode, "dashboard listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
