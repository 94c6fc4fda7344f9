//! Promote command - bootstraps back-office accounts.
//!
//! Registration always creates customers, so the first admin has to be
//! granted from the command line.

use common::{AppResult, DatabaseConfig};
use store_service::{infra::Database, StoreServices};

use crate::cli::PromoteArgs;

/// Execute the promote command
pub async fn execute(args: PromoteArgs, database: &DatabaseConfig) -> AppResult<()> {
    let db = Database::connect(database).await?;
    let store = StoreServices::new(db.get_connection());

    let customer = store.customers.promote(&args.email).await?;
    println!("{} <{}> is now an admin", customer.full_name(), customer.email);

    Ok(())
}
