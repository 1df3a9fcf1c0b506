//! Schema bootstrap
//!
//! Every file is idempotent (`IF NOT EXISTS` / duplicate guards), so the
//! whole list runs on each start. Order matters: tables reference the ones
//! listed before them.

use std::fs;

use tracing::info;

use crate::{
    dao::{get_path, PoolType},
    error::Error,
};

pub const MIGRATION_FILES: [&str; 3] =
    ["customer.sql", "loan.sql", "payment.sql"];

pub async fn run_migrations(pool: &PoolType) -> Result<(), Error> {
    let dir = env!("CARGO_MANIFEST_DIR");

    for file in MIGRATION_FILES {
        let path = get_path(dir, file);
        let sql = fs::read_to_string(&path)?;
        sqlx::raw_sql(&sql).execute(pool).await?;
        info!("Applied schema file {}", file);
    }

    Ok(())
}
