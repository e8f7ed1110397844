//! Реестр таблиц для браузера данных.
//!
//! Каждая таблица отдаётся как список `GenericRecord` без фиксированной схемы.

use contracts::shared::data_browser::BrowsableTable;
use contracts::shared::generic_record::{to_record, GenericRecord};
use sea_orm::ConnectionTrait;
use thiserror::Error;

use crate::shared::fixtures;
use crate::system::settings::repository as settings_repository;

#[derive(Debug, Error)]
pub enum DataBrowserError {
    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

const TABLES: &[(&str, &str)] = &[
    ("settings", "Einstellungen"),
    ("guests", "Gäste"),
    ("rooms", "Zimmer"),
    ("bookings", "Buchungen"),
];

pub fn list_tables() -> Vec<BrowsableTable> {
    TABLES
        .iter()
        .map(|(name, label)| BrowsableTable {
            name: name.to_string(),
            label: label.to_string(),
        })
        .collect()
}

fn records<T: serde::Serialize>(items: &[T]) -> Vec<GenericRecord> {
    items.iter().filter_map(to_record).collect()
}

/// Строки таблицы по имени
pub async fn load_rows<C: ConnectionTrait>(
    conn: &C,
    name: &str,
) -> Result<Vec<GenericRecord>, DataBrowserError> {
    match name {
        "settings" => Ok(records(&settings_repository::list_all(conn).await?)),
        "guests" => Ok(records(fixtures::guests())),
        "rooms" => Ok(records(fixtures::rooms())),
        "bookings" => Ok(records(fixtures::bookings())),
        other => Err(DataBrowserError::UnknownTable(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::ensure_schema;
    use contracts::shared::generic_record::{cell_text, derive_columns, MISSING_CELL};
    use sea_orm::{ConnectOptions, Database, DatabaseConnection};

    async fn memory_db() -> DatabaseConnection {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).sqlx_logging(false);
        let conn = Database::connect(options).await.unwrap();
        ensure_schema(&conn).await.unwrap();
        conn
    }

    #[test]
    fn test_every_listed_table_has_a_label() {
        let tables = list_tables();
        assert_eq!(tables.len(), 4);
        assert!(tables.iter().all(|t| !t.label.is_empty()));
    }

    #[tokio::test]
    async fn test_unknown_table() {
        let conn = memory_db().await;
        let err = load_rows(&conn, "invoices").await.unwrap_err();
        assert!(matches!(err, DataBrowserError::UnknownTable(name) if name == "invoices"));
    }

    #[tokio::test]
    async fn test_guest_rows_are_heterogeneous() {
        let conn = memory_db().await;
        let rows = load_rows(&conn, "guests").await.unwrap();
        assert_eq!(rows.len(), fixtures::guests().len());

        // G-1001 has email and phone, so both become columns
        let columns = derive_columns(&rows);
        assert_eq!(
            columns,
            vec!["id", "first_name", "last_name", "country", "email", "phone"]
        );
        let without_email = rows
            .iter()
            .find(|r| r.get("id").and_then(|v| v.as_str()) == Some("G-1003"))
            .unwrap();
        assert_eq!(cell_text(without_email, "email"), MISSING_CELL);
    }

    #[tokio::test]
    async fn test_settings_table_reads_store() {
        let conn = memory_db().await;
        settings_repository::set(&conn, "branding_title", "Haus am See")
            .await
            .unwrap();
        let rows = load_rows(&conn, "settings").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(cell_text(&rows[0], "value"), "Haus am See");
    }

    #[tokio::test]
    async fn test_room_amenities_are_nested() {
        let conn = memory_db().await;
        let rows = load_rows(&conn, "rooms").await.unwrap();
        assert_eq!(cell_text(&rows[0], "amenities"), r#"["Dusche","WLAN"]"#);
        assert_eq!(cell_text(&rows[0], "price_per_night"), "59");
    }
}
