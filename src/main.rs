use std::sync::Arc;

use carelog::{
    config::AppConfig,
    http_server,
    persistence::{sqlite::SqliteBlobStore, traits::BlobStore},
    secrets::{EnvSecretStore, SecretStore},
};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Runs the HTTP API server.
    Run(RunArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Path to the configuration directory.
    #[arg(short, long)]
    config_dir: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    let subscriber =
        FmtSubscriber::builder().with_env_filter(EnvFilter::from_default_env()).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run_server(args).await?,
    }

    Ok(())
}

async fn run_server(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    tracing::debug!("Loading application configuration...");
    let config = Arc::new(AppConfig::new(args.config_dir.as_deref())?);
    tracing::debug!(
        database_url = %config.database_url,
        listen_address = %config.server.listen_address,
        "Configuration loaded."
    );

    tracing::debug!("Initializing blob store...");
    let store = Arc::new(SqliteBlobStore::new(&config.database_url).await?);
    store.run_migrations().await?;
    tracing::info!("Database migrations completed.");

    let secrets: Arc<dyn SecretStore> = Arc::new(EnvSecretStore);

    http_server::run_server_from_config(config, store as Arc<dyn BlobStore>, secrets).await;

    Ok(())
}
