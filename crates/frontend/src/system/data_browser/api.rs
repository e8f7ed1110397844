use contracts::shared::data_browser::BrowsableTable;
use contracts::shared::generic_record::GenericRecord;

use crate::shared::api_utils;

pub async fn fetch_tables() -> Result<Vec<BrowsableTable>, String> {
    api_utils::get_json("/api/data-browser/tables").await
}

pub async fn fetch_rows(table: &str) -> Result<Vec<GenericRecord>, String> {
    let path = format!(
        "/api/data-browser/tables/{}",
        urlencoding::encode(table)
    );
    api_utils::get_json(&path).await
}
