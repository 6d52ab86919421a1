//! # Key-Value Repository
//!
//! Queries against the `kv_store` table.
//!
//! ## Table
//! ```text
//! ┌──────────────────────────┬──────────────────────────┬──────────────────┐
//! │ key (PK)                 │ value                    │ updated_at       │
//! ├──────────────────────────┼──────────────────────────┼──────────────────┤
//! │ @GoMartketPlace_cart     │ [{"id":"1",...}]         │ 2026-10-19T...   │
//! └──────────────────────────┴──────────────────────────┴──────────────────┘
//! ```
//!
//! `set` is an upsert, so a key holds exactly one row.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// Repository for key-value operations.
#[derive(Debug, Clone)]
pub struct KeyValueRepository {
    pool: SqlitePool,
}

impl KeyValueRepository {
    /// Creates a new KeyValueRepository.
    pub fn new(pool: SqlitePool) -> Self {
        KeyValueRepository { pool }
    }

    /// Reads the value stored under `key`.
    ///
    /// ## Returns
    /// * `Ok(Some(value))` - Key present
    /// * `Ok(None)` - Key never written (or removed)
    pub async fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM kv_store WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        debug!(key = %key, found = value.is_some(), "Read key");
        Ok(value)
    }

    /// Writes `value` under `key`, replacing any previous value.
    pub async fn set(&self, key: &str, value: &str) -> DbResult<()> {
        debug!(key = %key, bytes = value.len(), "Writing key");

        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Deletes `key`. Deleting a missing key is not an error.
    pub async fn remove(&self, key: &str) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM kv_store WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        debug!(key = %key, removed = result.rows_affected(), "Removed key");
        Ok(())
    }

    /// Deletes every key.
    pub async fn clear(&self) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM kv_store")
            .execute(&self.pool)
            .await?;

        debug!(removed = result.rows_affected(), "Cleared key-value store");
        Ok(())
    }

    /// Lists stored keys in lexical order.
    pub async fn keys(&self) -> DbResult<Vec<String>> {
        let keys = sqlx::query_scalar::<_, String>("SELECT key FROM kv_store ORDER BY key")
            .fetch_all(&self.pool)
            .await?;

        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_get_missing_key() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert_eq!(db.kv().get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_upserts_single_row() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let kv = db.kv();

        kv.set("cart", "[]").await.unwrap();
        kv.set("cart", r#"[{"id":"1"}]"#).await.unwrap();

        assert_eq!(kv.get("cart").await.unwrap().as_deref(), Some(r#"[{"id":"1"}]"#));
        assert_eq!(kv.keys().await.unwrap(), vec!["cart".to_string()]);
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let kv = db.kv();

        kv.set("a", "1").await.unwrap();
        kv.set("b", "2").await.unwrap();

        kv.remove("a").await.unwrap();
        kv.remove("a").await.unwrap();
        assert_eq!(kv.keys().await.unwrap(), vec!["b".to_string()]);

        kv.clear().await.unwrap();
        assert!(kv.keys().await.unwrap().is_empty());
    }
}
