/// Экспорт табличных данных в CSV (открывается в Excel)
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Trait для типов, которые могут быть экспортированы в CSV
pub trait CsvExportable {
    /// Заголовки колонок
    fn headers() -> Vec<&'static str>;

    /// Значения ячеек одной строки
    fn to_csv_row(&self) -> Vec<String>;
}

/// Собирает CSV: UTF-8 BOM, разделитель `;`, экранирование ячеек
pub fn build_csv<T: CsvExportable>(data: &[T]) -> String {
    let mut csv_content = String::new();

    // BOM для корректного отображения умлаутов в Excel
    csv_content.push('\u{FEFF}');

    csv_content.push_str(&T::headers().join(";"));
    csv_content.push('\n');

    for item in data {
        let escaped_row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv_content.push_str(&escaped_row.join(";"));
        csv_content.push('\n');
    }

    csv_content
}

/// Экспортирует список в CSV файл и инициирует скачивание
pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Keine Daten für den Export".to_string());
    }

    let blob = create_csv_blob(&build_csv(data))?;
    download_blob(&blob, filename)?;

    log::info!("CSV export: {} rows -> {}", data.len(), filename);
    Ok(())
}

/// Экранирует ячейку, если она содержит `;`, кавычки или перевод строки
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через браузер
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, &'static str);

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Zimmer", "Notiz"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_escape_csv_cell() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("a;b"), "\"a;b\"");
        assert_eq!(escape_csv_cell("sagt \"hallo\""), "\"sagt \"\"hallo\"\"\"");
        assert_eq!(escape_csv_cell("zwei\nzeilen"), "\"zwei\nzeilen\"");
    }

    #[test]
    fn test_build_csv() {
        let csv = build_csv(&[Row("101", "ruhig"), Row("102", "Balkon; Südseite")]);
        assert_eq!(
            csv,
            "\u{FEFF}Zimmer;Notiz\n101;ruhig\n102;\"Balkon; Südseite\"\n"
        );
    }

    #[test]
    fn test_build_csv_without_rows_has_header_only() {
        assert_eq!(build_csv::<Row>(&[]), "\u{FEFF}Zimmer;Notiz\n");
    }
}
