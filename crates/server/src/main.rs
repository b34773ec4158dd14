mod audit;
mod bootstrap;
mod health;
mod webhook;

use std::future::IntoFuture;
use std::time::Duration;

use anyhow::Result;
use axum::Router;
use tokio::sync::watch;
use tripdesk_core::config::{AppConfig, LoadOptions};

use crate::webhook::ActionState;

fn init_logging(config: &AppConfig) {
    use tracing::Level;
    use tripdesk_core::config::LogFormat::*;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    run().await
}

pub async fn run() -> Result<()> {
    let config = AppConfig::load(LoadOptions::default())?;
    init_logging(&config);

    let app = bootstrap::bootstrap_with_config(config);
    let address = app.config.listen_address();
    let grace_period = Duration::from_secs(app.config.server.graceful_shutdown_secs);

    let router = Router::new()
        .merge(webhook::router(ActionState {
            registry: app.registry.clone(),
            audit_sink: app.audit_sink.clone(),
            auth_token: app.config.server.auth_token.clone(),
        }))
        .merge(health::router(app.registry.clone()));

    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(
        event_name = "system.server.started",
        correlation_id = "bootstrap",
        bind_address = %address,
        actions = app.registry.len(),
        "tripdesk action server started"
    );

    let (stopping_tx, mut stopping_rx) = watch::channel(false);
    let server = axum::serve(listener, router).with_graceful_shutdown(async move {
        wait_for_shutdown().await;
        let _ = stopping_tx.send(true);
    });
    let mut server = std::pin::pin!(server.into_future());

    tokio::select! {
        result = &mut server => result?,
        _ = stopping_rx.changed() => {
            tracing::info!(
                event_name = "system.server.stopping",
                correlation_id = "shutdown",
                grace_period_secs = grace_period.as_secs(),
                "tripdesk action server stopping"
            );
            match tokio::time::timeout(grace_period, &mut server).await {
                Ok(result) => result?,
                Err(_) => tracing::warn!(
                    event_name = "system.server.shutdown_timeout",
                    correlation_id = "shutdown",
                    "in-flight requests did not drain before the grace period elapsed"
                ),
            }
        }
    }

    Ok(())
}

async fn wait_for_shutdown() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(
            event_name = "system.server.signal_error",
            correlation_id = "shutdown",
            error = %error,
            "failed to listen for shutdown signal"
        );
        std::future::pending::<()>().await;
    }
}
