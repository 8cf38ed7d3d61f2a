//! PostgreSQL-backed store.

use crate::error::StoreError;
use crate::migration::TUTORIALS_TABLE;
use crate::model::Tutorial;
use crate::store::TutorialStore;
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

const COLUMNS: &str = "id, title, description, published";

#[derive(Clone)]
pub struct PgTutorialStore {
    pool: PgPool,
}

impl PgTutorialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn select_sql(filter: Option<&str>) -> String {
    match filter {
        Some(w) => format!("SELECT {} FROM {} WHERE {} ORDER BY id", COLUMNS, TUTORIALS_TABLE, w),
        None => format!("SELECT {} FROM {} ORDER BY id", COLUMNS, TUTORIALS_TABLE),
    }
}

#[async_trait]
impl TutorialStore for PgTutorialStore {
    async fn find_all(&self) -> Result<Vec<Tutorial>, StoreError> {
        let sql = select_sql(None);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Tutorial>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_title_containing(&self, title: &str) -> Result<Vec<Tutorial>, StoreError> {
        // strpos instead of ILIKE so '%' and '_' in the needle stay literal.
        let sql = select_sql(Some("strpos(lower(title), lower($1)) > 0"));
        tracing::debug!(sql = %sql, title = %title, "query");
        let rows = sqlx::query_as::<_, Tutorial>(&sql)
            .bind(title)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Tutorial>, StoreError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, TUTORIALS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Tutorial>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn save(&self, tutorial: Tutorial) -> Result<Tutorial, StoreError> {
        match tutorial.id {
            None => {
                let sql = format!(
                    "INSERT INTO {} (title, description, published) VALUES ($1, $2, $3) RETURNING {}",
                    TUTORIALS_TABLE, COLUMNS
                );
                tracing::debug!(sql = %sql, "query");
                let row = sqlx::query_as::<_, Tutorial>(&sql)
                    .bind(&tutorial.title)
                    .bind(&tutorial.description)
                    .bind(tutorial.published)
                    .fetch_one(&self.pool)
                    .await?;
                Ok(row)
            }
            Some(id) => {
                let sql = format!(
                    "UPDATE {} SET title = $1, description = $2, published = $3 WHERE id = $4 RETURNING {}",
                    TUTORIALS_TABLE, COLUMNS
                );
                tracing::debug!(sql = %sql, id, "query");
                sqlx::query_as::<_, Tutorial>(&sql)
                    .bind(&tutorial.title)
                    .bind(&tutorial.description)
                    .bind(tutorial.published)
                    .bind(id)
                    .fetch_optional(&self.pool)
                    .await?
                    .ok_or(StoreError::Missing(id))
            }
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", TUTORIALS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let done = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        if done.rows_affected() == 0 {
            tracing::debug!(id, "delete matched no row");
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        let sql = format!("DELETE FROM {}", TUTORIALS_TABLE);
        tracing::debug!(sql = %sql, "query");
        let done = sqlx::query(&sql).execute(&self.pool).await?;
        tracing::debug!(rows = done.rows_affected(), "deleted tutorials");
        Ok(())
    }

    async fn find_by_published(&self, published: bool) -> Result<Vec<Tutorial>, StoreError> {
        let sql = select_sql(Some("published = $1"));
        tracing::debug!(sql = %sql, published, "query");
        let rows = sqlx::query_as::<_, Tutorial>(&sql)
            .bind(published)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), StoreError> {
    let Some((admin, db_name)) = admin_target(database_url)? else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Options for the `postgres` admin database plus the name to create.
/// `None` when the URL names no database, or names `postgres` itself.
fn admin_target(database_url: &str) -> Result<Option<(PgConnectOptions, String)>, StoreError> {
    let opts = PgConnectOptions::from_str(database_url)?;
    let db_name = match opts.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(None),
    };
    Ok(Some((opts.database("postgres"), db_name)))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
