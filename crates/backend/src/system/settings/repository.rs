use anyhow::{Context, Result};
use chrono::Utc;
use contracts::shared::settings::SettingEntry;
use sea_orm::{ConnectionTrait, DatabaseBackend, QueryResult, Statement};

fn from_row(row: &QueryResult) -> Result<SettingEntry> {
    Ok(SettingEntry {
        key: row.try_get("", "key")?,
        value: row.try_get("", "value")?,
        updated_at: row.try_get("", "updated_at")?,
    })
}

/// Все настройки, упорядоченные по ключу
pub async fn list_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<SettingEntry>> {
    let rows = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT key, value, updated_at FROM sys_settings ORDER BY key".to_string(),
        ))
        .await
        .context("Failed to list settings")?;

    rows.iter().map(from_row).collect()
}

pub async fn get<C: ConnectionTrait>(conn: &C, key: &str) -> Result<Option<SettingEntry>> {
    let row = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT key, value, updated_at FROM sys_settings WHERE key = ?",
            [key.into()],
        ))
        .await
        .with_context(|| format!("Failed to load setting '{}'", key))?;

    row.as_ref().map(from_row).transpose()
}

/// Вставка или обновление значения
pub async fn set<C: ConnectionTrait>(conn: &C, key: &str, value: &str) -> Result<()> {
    let updated_at = Utc::now().to_rfc3339();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        r#"
            INSERT INTO sys_settings (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
        "#,
        [key.into(), value.into(), updated_at.into()],
    ))
    .await
    .with_context(|| format!("Failed to save setting '{}'", key))?;

    Ok(())
}

/// Возвращает `false`, если ключа не было
pub async fn delete<C: ConnectionTrait>(conn: &C, key: &str) -> Result<bool> {
    let result = conn
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "DELETE FROM sys_settings WHERE key = ?",
            [key.into()],
        ))
        .await
        .with_context(|| format!("Failed to delete setting '{}'", key))?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::ensure_schema;
    use sea_orm::{ConnectOptions, Database, DatabaseConnection};

    async fn memory_db() -> DatabaseConnection {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).sqlx_logging(false);
        let conn = Database::connect(options).await.unwrap();
        ensure_schema(&conn).await.unwrap();
        conn
    }

    #[tokio::test]
    async fn test_get_missing_key_is_none() {
        let conn = memory_db().await;
        assert!(get(&conn, "branding_title").await.unwrap().is_none());
        assert!(list_all(&conn).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_set_then_get_and_overwrite() {
        let conn = memory_db().await;
        set(&conn, "branding_title", "Haus am See").await.unwrap();
        let entry = get(&conn, "branding_title").await.unwrap().unwrap();
        assert_eq!(entry.value, "Haus am See");
        assert!(entry.updated_at.is_some());

        set(&conn, "branding_title", "Pension Sonne").await.unwrap();
        let entry = get(&conn, "branding_title").await.unwrap().unwrap();
        assert_eq!(entry.value, "Pension Sonne");
        assert_eq!(list_all(&conn).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_all_is_ordered_by_key() {
        let conn = memory_db().await;
        set(&conn, "default_country", "DE").await.unwrap();
        set(&conn, "branding_logo", "/logo.png").await.unwrap();
        set(&conn, "branding_title", "X").await.unwrap();

        let keys: Vec<String> = list_all(&conn)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.key)
            .collect();
        assert_eq!(keys, vec!["branding_logo", "branding_title", "default_country"]);
    }

    #[tokio::test]
    async fn test_delete() {
        let conn = memory_db().await;
        set(&conn, "branding_logo", "/logo.png").await.unwrap();
        assert!(delete(&conn, "branding_logo").await.unwrap());
        assert!(!delete(&conn, "branding_logo").await.unwrap());
        assert!(get(&conn, "branding_logo").await.unwrap().is_none());
    }
}
