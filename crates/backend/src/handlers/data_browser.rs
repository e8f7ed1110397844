use axum::{extract::Path, http::StatusCode, Json};
use contracts::shared::data_browser::BrowsableTable;
use contracts::shared::generic_record::GenericRecord;

use crate::shared::data::db::get_connection;
use crate::shared::data_browser::{self, DataBrowserError};

/// GET /api/data-browser/tables
pub async fn list_tables() -> Json<Vec<BrowsableTable>> {
    Json(data_browser::list_tables())
}

/// GET /api/data-browser/tables/:name
pub async fn get_rows(Path(name): Path<String>) -> Result<Json<Vec<GenericRecord>>, StatusCode> {
    match data_browser::load_rows(get_connection(), &name).await {
        Ok(rows) => Ok(Json(rows)),
        Err(DataBrowserError::UnknownTable(name)) => {
            tracing::warn!("Data browser: unknown table '{}'", name);
            Err(StatusCode::NOT_FOUND)
        }
        Err(e) => {
            tracing::error!("Data browser: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
