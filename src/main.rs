use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use hr_dashboard::api::{AppState, create_router};
use hr_dashboard::clock::{Clock, SystemClock};
use hr_dashboard::config::ConfigLoader;
use hr_dashboard::stats::StatsEngine;
use hr_dashboard::store::{InMemoryEmployeeRepository, load_seed};

/// Employee management API and dashboard statistics service.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(long, short, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Override the configured listen port.
    #[arg(long)]
    port: Option<u16>,

    /// Start with an empty store even if a seed file is configured.
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loader = ConfigLoader::load(&cli.config)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&loader.config().logging.filter));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!(config = %cli.config.display(), "Configuration loaded");

    let seed_path = loader.seed_path().filter(|_| !cli.no_seed);
    let config = loader.into_config();

    let employees = match seed_path {
        Some(path) => load_seed(path, SystemClock.today())?,
        None => Vec::new(),
    };
    let repository = InMemoryEmployeeRepository::with_employees(config.store.ids.clone(), employees)?;

    let state = AppState::new(Arc::new(repository), StatsEngine::new(config.stats));
    let app = create_router(state);

    let mut addr = config.server.socket_addr();
    if let Some(port) = cli.port {
        addr.set_port(port);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HR dashboard listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
