// ABOUTME: Status check database operations
// ABOUTME: Records client liveness pings and lists recent ones

use super::Database;
use anyhow::Result;
use chrono::{DateTime, Utc};
use pantry_core::models::StatusCheck;
use sqlx::Row;
use uuid::Uuid;

/// Upper bound on how many checks one listing returns
const STATUS_LIST_LIMIT: i64 = 1000;

impl Database {
    /// Create the status checks table
    ///
    /// # Errors
    ///
    /// Returns an error if table creation fails
    pub(super) async fn migrate_status(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS status_checks (
                id TEXT PRIMARY KEY,
                client_name TEXT NOT NULL,
                timestamp DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Persist a status check
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_status_check(&self, check: &StatusCheck) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO status_checks (id, client_name, timestamp)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(check.id.to_string())
        .bind(&check.client_name)
        .bind(check.timestamp)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// List recorded status checks in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored id is not a UUID
    pub async fn get_status_checks(&self) -> Result<Vec<StatusCheck>> {
        let rows = sqlx::query(
            r"
            SELECT id, client_name, timestamp
            FROM status_checks ORDER BY timestamp LIMIT $1
            ",
        )
        .bind(STATUS_LIST_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                let id: String = row.get("id");
                let timestamp: DateTime<Utc> = row.get("timestamp");
                Ok(StatusCheck {
                    id: Uuid::parse_str(&id)?,
                    client_name: row.get("client_name"),
                    timestamp,
                })
            })
            .collect()
    }
}
