//! Process startup shared by the fixture app binaries.

use crate::api::{self, App};
use crate::config::{Config, SharedConfig};
use crate::error::Error;
use anyhow::Result;
use is_terminal::IsTerminal;
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Serve `app` using configuration from the environment until the server fails or the
/// process is interrupted.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the listener can't be bound, or the
/// server stops with an error.
pub async fn run(app: App) -> Result<()> {
    tracing_init();

    let config: SharedConfig = Arc::new(Config::from_env()?);
    tracing::debug!("loaded config from environment: {}", describe(&config));

    let server = api::bind(app, config)?;
    tracing::info!("{} listening on {}", app.name(), server.local_addr());

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("quitting from signal");
        },
        res = server => {
            res.map_err(Error::Serve)?;
        }
    }
    Ok(())
}

// VCAP_SERVICES carries credentials, so it stays out of the logs.
fn describe(config: &Config) -> String {
    format!(
        "NAME={:?} bind_addr={}",
        String::from_utf8_lossy(&config.name),
        config.bind_addr
    )
}

fn tracing_init() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_ansi(std::io::stderr().is_terminal()))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fixture_apps=info,tower_http=info".into()),
        )
        .init();
}
