use crate::error::Result;
use sqlx::SqlitePool;
use tracing::info;

/// Seeds placeholder clients on first startup so the pipeline UI is usable
/// against an empty database.
pub async fn seed_initial_clients(pool: &SqlitePool) -> Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    for name in ["Client A", "Client B", "Client C"] {
        sqlx::query("INSERT INTO clients (name) VALUES (?)")
            .bind(name)
            .execute(pool)
            .await?;
    }
    info!("Seeded initial clients");
    Ok(())
}
