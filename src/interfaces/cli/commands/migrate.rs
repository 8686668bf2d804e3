//! Migrate command

use std::sync::Arc;

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::storage::SeaOrmStorage;
use crate::storage::backend::run_migrations;

pub async fn run_migrate(storage: Arc<SeaOrmStorage>) -> Result<(), CliError> {
    run_migrations(storage.get_db())
        .await
        .map_err(|e| CliError::StorageError(e.to_string()))?;

    println!(
        "{} newsdata tables are up to date ({} backend)",
        "✓".bold().green(),
        storage.backend_name()
    );
    Ok(())
}
