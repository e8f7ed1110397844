use axum::{extract::Path, http::StatusCode, Json};
use contracts::shared::settings::{SaveSettingRequest, SaveSettingResponse, SettingEntry};

use crate::shared::data::db::get_connection;
use crate::system::settings::repository;

/// GET /api/settings
pub async fn list_all() -> Result<Json<Vec<SettingEntry>>, StatusCode> {
    repository::list_all(get_connection())
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!("Failed to list settings: {:#}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

/// GET /api/settings/:key
pub async fn get_setting(
    Path(key): Path<String>,
) -> Result<Json<Option<SettingEntry>>, StatusCode> {
    match repository::get(get_connection(), &key).await {
        Ok(entry) => Ok(Json(entry)),
        Err(e) => {
            tracing::error!("Failed to load setting: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// PUT /api/settings/:key
pub async fn save_setting(
    Path(key): Path<String>,
    Json(request): Json<SaveSettingRequest>,
) -> Result<Json<SaveSettingResponse>, StatusCode> {
    if key.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    match repository::set(get_connection(), &key, &request.value).await {
        Ok(()) => {
            tracing::info!("Setting '{}' saved", key);
            Ok(Json(SaveSettingResponse {
                success: true,
                message: "Settings saved successfully".to_string(),
            }))
        }
        Err(e) => {
            tracing::error!("Failed to save setting: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// DELETE /api/settings/:key
pub async fn delete_setting(Path(key): Path<String>) -> StatusCode {
    match repository::delete(get_connection(), &key).await {
        Ok(true) => StatusCode::OK,
        Ok(false) => StatusCode::NOT_FOUND,
        Err(e) => {
            tracing::error!("Failed to delete setting: {:#}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
