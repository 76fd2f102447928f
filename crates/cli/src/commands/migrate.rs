//! Creates the PostgreSQL `items` table.
//!
//! Idempotent: the schema uses `IF NOT EXISTS`, so rerunning is harmless.

use anyhow::{Result, anyhow};
use stardex_core::env_required;
use stardex_storage::PgItemStore;

pub(crate) async fn run() -> Result<()> {
    let url = env_required("DATABASE_URL").map_err(|msg| anyhow!(msg))?;
    // Construction applies the schema.
    PgItemStore::new(&url).await.inspect_err(|e| {
        tracing::error!(error = %e, "Cannot connect to item database");
    })?;
    println!("Migration complete!");
    Ok(())
}
