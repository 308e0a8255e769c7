//! Backend entry-point: loads settings, wires the ETL and health endpoints,
//! and serves OpenAPI docs in debug builds.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

mod server;

use std::env;
use std::ffi::OsString;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::settings::{ServerSettings, SourceSettings};
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    // Settings come from the environment; the server takes no flags.
    let program: Vec<OsString> = env::args_os().take(1).collect();
    let source = SourceSettings::load_from_iter(program.clone())
        .map_err(|e| eyre!("load randomuser settings: {e}"))?;
    let server_settings = ServerSettings::load_from_iter(program)
        .map_err(|e| eyre!("load server settings: {e}"))?;
    let config = ServerConfig::from_settings(&server_settings, &source)
        .wrap_err("invalid server settings")?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config).wrap_err("start HTTP server")?;
    let outcome = server.await;
    health_state.mark_draining();
    outcome.wrap_err("HTTP server terminated")
}
