mod chart_service;
mod config;
mod web;
mod web_metrics;

use std::sync::Arc;

use anyhow::Result;
use gdp_db::GdpDb;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::web::WebState;

const DEFAULT_LOG_FILTER: &str = "gdp=info,gdp_db=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    info!("db starting");
    let db = GdpDb::connect(&config.database_url, config.db_max_connections).await?;
    if config.run_migrations {
        db.migrate().await?;
    }

    if let Some(metrics_port) = config.metrics_port {
        tokio::spawn(async move {
            if let Err(e) = web_metrics::start_metrics_server(metrics_port).await {
                error!("metrics server stopped {e:?}");
            }
        });
    }

    let web_state = WebState {
        source: Arc::new(db),
    };
    web::start_web(web_state, config.port).await
}
