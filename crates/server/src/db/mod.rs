use anyhow::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;

mod models;
pub mod schema;

pub use models::*;

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn new(path: &str, max_connections: u32) -> Result<Self> {
        // Ensure the directory exists
        if let Some(parent) = Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }

        let database_url = format!("sqlite:{}?mode=rwc", path);
        Self::connect(&database_url, max_connections).await
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Single-connection in-memory database; closing the connection discards it.
    #[cfg(test)]
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        Ok(Self { pool })
    }

    #[cfg(test)]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<()> {
        let applied = schema::migrate(&self.pool).await?;
        tracing::info!(
            "Database migrations completed ({} applied, schema version {})",
            applied,
            schema::CURRENT_VERSION
        );
        Ok(())
    }

    // Guest operations
    /// `created_at` comes from the column default, evaluated inside the write.
    pub async fn insert_guest(&self, guest: &NewGuest) -> Result<Guest> {
        let row = sqlx::query_as::<_, Guest>(
            r#"
            INSERT INTO guests (line_user_id, host_name, first_name, last_name, phone, visit_date, arrival_time)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id, line_user_id, host_name, first_name, last_name, phone, visit_date, arrival_time, created_at
            "#,
        )
        .bind(&guest.line_user_id)
        .bind(&guest.host_name)
        .bind(&guest.first_name)
        .bind(&guest.last_name)
        .bind(&guest.phone)
        .bind(&guest.visit_date)
        .bind(&guest.arrival_time)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn guests_by_host(&self, host_name: &str) -> Result<Vec<HostGuestRow>> {
        let rows = sqlx::query_as::<_, HostGuestRow>(
            "SELECT id, first_name, last_name, phone, visit_date AS date, arrival_time FROM guests WHERE host_name = ? ORDER BY created_at ASC, id ASC",
        )
        .bind(host_name)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn guests_by_date(&self, visit_date: &str) -> Result<Vec<DateGuestRow>> {
        let rows = sqlx::query_as::<_, DateGuestRow>(
            "SELECT host_name, first_name, last_name, phone, arrival_time FROM guests WHERE visit_date = ? ORDER BY created_at ASC, id ASC",
        )
        .bind(visit_date)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Returns `false` when no row had that id.
    pub async fn delete_guest(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM guests WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
