//! Versioned schema for the `guests` table.
//!
//! The applied version lives in `PRAGMA user_version`. Structural steps look at
//! the live column set before altering, so tables created by older deployments
//! (which never wrote a version marker) upgrade cleanly.

use anyhow::{bail, Context, Result};
use sqlx::{SqliteConnection, SqlitePool};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    CreateGuests,
    RenameLegacyDate,
    AddArrivalTime,
    DropDateOfBirth,
    CreateIndexes,
}

const MIGRATIONS: &[(i64, Step)] = &[
    (1, Step::CreateGuests),
    (2, Step::RenameLegacyDate),
    (3, Step::AddArrivalTime),
    (4, Step::DropDateOfBirth),
    (5, Step::CreateIndexes),
];

pub const CURRENT_VERSION: i64 = 5;

impl Step {
    fn description(self) -> &'static str {
        match self {
            Step::CreateGuests => "create guests table",
            Step::RenameLegacyDate => "rename column 'date' to 'visit_date'",
            Step::AddArrivalTime => "add column 'arrival_time'",
            Step::DropDateOfBirth => "drop column 'date_of_birth'",
            Step::CreateIndexes => "index host_name and visit_date",
        }
    }

    async fn apply(self, conn: &mut SqliteConnection) -> Result<()> {
        match self {
            Step::CreateGuests => {
                sqlx::query(
                    r#"
                    CREATE TABLE IF NOT EXISTS guests (
                        id INTEGER PRIMARY KEY AUTOINCREMENT,
                        line_user_id TEXT NOT NULL,
                        host_name TEXT,
                        first_name TEXT NOT NULL,
                        last_name TEXT NOT NULL,
                        phone TEXT,
                        visit_date TEXT NOT NULL,
                        created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
                    )
                    "#,
                )
                .execute(&mut *conn)
                .await?;
            }
            Step::RenameLegacyDate => {
                let columns = guest_columns(conn).await?;
                if has(&columns, "date") && !has(&columns, "visit_date") {
                    sqlx::query("ALTER TABLE guests RENAME COLUMN date TO visit_date")
                        .execute(&mut *conn)
                        .await?;
                }
            }
            Step::AddArrivalTime => {
                let columns = guest_columns(conn).await?;
                if !has(&columns, "arrival_time") {
                    sqlx::query("ALTER TABLE guests ADD COLUMN arrival_time TEXT")
                        .execute(&mut *conn)
                        .await?;
                }
            }
            Step::DropDateOfBirth => {
                let columns = guest_columns(conn).await?;
                if has(&columns, "date_of_birth") {
                    sqlx::query("ALTER TABLE guests DROP COLUMN date_of_birth")
                        .execute(&mut *conn)
                        .await?;
                }
            }
            Step::CreateIndexes => {
                sqlx::query("CREATE INDEX IF NOT EXISTS idx_guests_host_name ON guests (host_name)")
                    .execute(&mut *conn)
                    .await?;
                sqlx::query("CREATE INDEX IF NOT EXISTS idx_guests_visit_date ON guests (visit_date)")
                    .execute(&mut *conn)
                    .await?;
            }
        }
        Ok(())
    }
}

async fn guest_columns(conn: &mut SqliteConnection) -> Result<Vec<String>> {
    let columns = sqlx::query_scalar::<_, String>("SELECT name FROM pragma_table_info('guests')")
        .fetch_all(&mut *conn)
        .await?;
    Ok(columns)
}

fn has(columns: &[String], name: &str) -> bool {
    columns.iter().any(|c| c == name)
}

pub async fn schema_version(pool: &SqlitePool) -> Result<i64> {
    let version = sqlx::query_scalar::<_, i64>("PRAGMA user_version")
        .fetch_one(pool)
        .await?;
    Ok(version)
}

/// Apply every migration newer than the stored version. Returns the number applied.
pub async fn migrate(pool: &SqlitePool) -> Result<usize> {
    let current = schema_version(pool).await?;
    if current > CURRENT_VERSION {
        bail!(
            "database schema version {} is newer than supported version {}",
            current,
            CURRENT_VERSION
        );
    }

    let mut applied = 0;
    for &(version, step) in MIGRATIONS.iter().filter(|(v, _)| *v > current) {
        let mut tx = pool.begin().await?;
        step.apply(&mut *tx)
            .await
            .with_context(|| format!("migration {} ({}) failed", version, step.description()))?;
        // PRAGMA does not accept bound parameters
        let marker = format!("PRAGMA user_version = {}", version);
        sqlx::query(&marker).execute(&mut *tx).await?;
        tx.commit().await?;

        tracing::info!("Applied schema migration {}: {}", version, step.description());
        applied += 1;
    }

    Ok(applied)
}
