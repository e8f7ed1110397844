use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use contracts::projections::p900_occupancy_report::dto::OccupancyReportRow;

use crate::projections::p900_occupancy_report::{csv_export, service};

/// GET /api/reports/occupancy
pub async fn get_report() -> Json<Vec<OccupancyReportRow>> {
    Json(service::build_report())
}

/// GET /api/reports/occupancy/csv
pub async fn export_csv() -> Result<impl IntoResponse, StatusCode> {
    let body = csv_export::to_csv(&service::build_report()).map_err(|e| {
        tracing::error!("Failed to build occupancy CSV: {:#}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"belegung.csv\"",
            ),
        ],
        body,
    ))
}
