//! Grocer - application entry point
//!
//! CLI-based entry point that dispatches to the serve, migrate and promote
//! commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::{AppError, DatabaseConfig};
use gateway_lib::{
    cli::{Cli, Commands},
    commands,
    config::GatewayConfig,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Verbose mode sets debug level
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Serve(args) => match GatewayConfig::from_env() {
            Ok(config) => commands::serve::execute(args, config).await,
            Err(e) => Err(AppError::internal(e.to_string())),
        },
        Commands::Migrate(args) => {
            commands::migrate::execute(args, &DatabaseConfig::from_env()).await
        }
        Commands::Promote(args) => {
            commands::promote::execute(args, &DatabaseConfig::from_env()).await
        }
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {:?}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,tower_http=debug".into())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}
