//! Migrate command - database migration management.

use common::{AppResult, DatabaseConfig};

use crate::cli::MigrateArgs;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, database: &DatabaseConfig) -> AppResult<()> {
    tracing::info!(action = ?args.action, "Running migration command...");
    store_service::run_migrations(database, args.action.into()).await?;
    Ok(())
}
