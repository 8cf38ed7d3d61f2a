//! Schema bootstrap for the `tutorials` table.

use crate::error::StoreError;
use sqlx::PgPool;

pub const TUTORIALS_TABLE: &str = "tutorials";

/// Create the `tutorials` table if it does not exist. Idempotent.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), StoreError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            title VARCHAR(255),
            description VARCHAR(255),
            published BOOLEAN NOT NULL DEFAULT FALSE
        )
        "#,
        TUTORIALS_TABLE
    );
    tracing::debug!(sql = %ddl, "migration");
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}
