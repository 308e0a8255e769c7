//! Run one load-and-aggregate cycle and print the result as JSON.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io::{self, Write};
use std::sync::Arc;

use backend::domain::{EtlReport, Loaded, UserLoader};
use backend::outbound::randomuser::RandomUserHttpSource;
use backend::settings::SourceSettings;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// `etl-run` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "etl-run",
    about = "Fetch users once, aggregate metrics, and print the report as JSON",
    version
)]
struct CliArgs {
    /// Endpoint to fetch from. Falls back to `RANDOMUSER_API_URL`.
    #[arg(long = "source-url", value_name = "url")]
    source_url: Option<String>,
    /// Print only the user list, without metrics or provenance.
    #[arg(long = "users-only")]
    users_only: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;
    let rendered = runtime.block_on(run(args))?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}").wrap_err("write report")?;
    Ok(())
}

async fn run(args: CliArgs) -> Result<String> {
    let endpoint = match args.source_url {
        Some(url) => url,
        None => SourceSettings::load_from_iter([OsString::from("etl-run")])
            .map_err(|e| eyre!("load randomuser settings: {e}"))?
            .api_url()
            .to_owned(),
    };

    let source = RandomUserHttpSource::new(endpoint).wrap_err("build randomuser client")?;
    let loader = UserLoader::new(Arc::new(source), Arc::new(DefaultClock));

    let loaded = loader.load(!args.users_only).await;
    info!(user_count = loaded.users().len(), "load finished");
    let rendered = match loaded {
        Loaded::WithMeta(result) => serde_json::to_string_pretty(&EtlReport::from_load(result)),
        Loaded::UsersOnly(users) => serde_json::to_string_pretty(&users),
    };
    rendered.wrap_err("serialise output")
}
