//! OctoFit fixture API server
//!
//! Serves seeded, read-only collections at `/api/<resource>/` for local
//! development of the CLI and the browser front end.
//!
//! Configuration comes from the `[devserver]` section of the config file and
//! `OCTOFIT_DEVSERVER_PORT`; command-line flags win over both.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use octofit::config::Config;
use octofit::devserver::{serve, FixtureStore};
use octofit::telemetry;

#[derive(Parser)]
#[command(name = "octofit-devserver")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Fixture API server for OctoFit Tracker")]
struct Args {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address
    #[arg(long)]
    host: Option<String>,

    /// Listen port
    #[arg(short, long)]
    port: Option<u16>,

    /// Wrap collections in a paginated `results` envelope
    #[arg(long)]
    envelope: bool,

    /// Start with every collection empty
    #[arg(long)]
    empty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::resolve(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.devserver.host = host;
    }
    if let Some(port) = args.port {
        config.devserver.port = port;
    }
    if args.envelope {
        config.devserver.envelope = true;
    }

    // Server logs are useful by default
    if std::env::var("OCTOFIT_LOG_LEVEL").is_err() && config.logging.level == "warn" {
        config.logging.level = "info".to_string();
    }
    telemetry::init(&config.logging);

    tracing::info!("Starting OctoFit fixture API v{}", env!("CARGO_PKG_VERSION"));

    let envelope = config.devserver.envelope;
    let store = if args.empty {
        FixtureStore::empty(envelope)
    } else {
        FixtureStore::seeded(envelope)
    };
    tracing::info!(envelope, seeded = !args.empty, "Fixtures ready");

    serve(Arc::new(store), &config.devserver).await?;

    Ok(())
}
