//! Записи произвольной формы для универсальной таблицы.
//!
//! Набор колонок берётся из первой записи и применяется ко всем остальным:
//! отсутствующее поле выводится как `MISSING_CELL`, лишние поля последующих
//! записей колонками не становятся.

use serde_json::{Map, Value};

/// Упорядоченное отображение имя поля -> значение (порядок вставки сохраняется)
pub type GenericRecord = Map<String, Value>;

/// Текст ячейки для поля, которого нет в записи
pub const MISSING_CELL: &str = "undefined";

/// Поле, используемое как идентичность строки, если оно есть
pub const ID_FIELD: &str = "id";

/// Подготовленная к отображению строка
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedRow {
    pub key: String,
    pub cells: Vec<String>,
}

/// Результат одного прохода отображения: колонки + ячейки
#[derive(Debug, Clone, PartialEq)]
pub struct TableProjection {
    pub columns: Vec<String>,
    pub rows: Vec<ProjectedRow>,
}

/// Колонки = поля первой записи в порядке перечисления
pub fn derive_columns(rows: &[GenericRecord]) -> Vec<String> {
    rows.first()
        .map(|first| first.keys().cloned().collect())
        .unwrap_or_default()
}

/// Текстовое представление значения ячейки
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string(value).unwrap_or_default()
        }
        other => other.to_string(),
    }
}

/// Целые значения с плавающей точкой выводятся без дробной части (`1.0` -> `1`)
fn number_text(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

pub fn cell_text(row: &GenericRecord, column: &str) -> String {
    row.get(column)
        .map(value_text)
        .unwrap_or_else(|| MISSING_CELL.to_string())
}

/// Ключ строки для диффинга: поле `id`, иначе полная сериализация записи
pub fn row_key(row: &GenericRecord) -> String {
    match row.get(ID_FIELD) {
        Some(id) if !id.is_null() => value_text(id),
        _ => serde_json::to_string(row).unwrap_or_default(),
    }
}

/// Строит колонки и ячейки; `None` для пустого набора строк
pub fn project_rows(rows: &[GenericRecord]) -> Option<TableProjection> {
    if rows.is_empty() {
        return None;
    }
    let columns = derive_columns(rows);
    let rows = rows
        .iter()
        .map(|row| ProjectedRow {
            key: row_key(row),
            cells: columns.iter().map(|c| cell_text(row, c)).collect(),
        })
        .collect();
    Some(TableProjection { columns, rows })
}

/// Преобразует сериализуемую структуру в запись; не-объекты дают `None`
pub fn to_record<T: serde::Serialize>(item: &T) -> Option<GenericRecord> {
    match serde_json::to_value(item) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(v: Value) -> GenericRecord {
        match v {
            Value::Object(m) => m,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn test_empty_rows_have_no_projection() {
        assert!(project_rows(&[]).is_none());
        assert!(derive_columns(&[]).is_empty());
    }

    #[test]
    fn test_columns_come_from_first_row() {
        let rows = vec![record(json!({"a": 1, "b": 2})), record(json!({"a": 3}))];
        let projection = project_rows(&rows).unwrap();
        assert_eq!(projection.columns, vec!["a", "b"]);
        assert_eq!(projection.rows[1].cells, vec!["3", MISSING_CELL]);
    }

    #[test]
    fn test_extra_fields_of_later_rows_are_ignored() {
        let rows = vec![record(json!({"a": 1})), record(json!({"z": 9, "a": 2}))];
        let projection = project_rows(&rows).unwrap();
        assert_eq!(projection.columns, vec!["a"]);
        assert_eq!(projection.rows[1].cells, vec!["2"]);
    }

    #[test]
    fn test_columns_keep_insertion_order() {
        let rows = vec![record(json!({"zimmer": "101", "art": "EZ", "betten": 1}))];
        assert_eq!(derive_columns(&rows), vec!["zimmer", "art", "betten"]);
    }

    #[test]
    fn test_cell_text_for_value_kinds() {
        let row = record(json!({
            "s": "Hallo",
            "i": 42,
            "f": 12.5,
            "whole": 80.0,
            "b": true,
            "n": null,
            "o": {"x": 1, "y": [1, 2]},
            "arr": ["a", "b"]
        }));
        assert_eq!(cell_text(&row, "s"), "Hallo");
        assert_eq!(cell_text(&row, "i"), "42");
        assert_eq!(cell_text(&row, "f"), "12.5");
        assert_eq!(cell_text(&row, "whole"), "80");
        assert_eq!(cell_text(&row, "b"), "true");
        assert_eq!(cell_text(&row, "n"), "null");
        assert_eq!(cell_text(&row, "o"), r#"{"x":1,"y":[1,2]}"#);
        assert_eq!(cell_text(&row, "arr"), r#"["a","b"]"#);
        assert_eq!(cell_text(&row, "missing"), "undefined");
    }

    #[test]
    fn test_row_key_prefers_id_field() {
        let with_id = record(json!({"id": 7, "name": "x"}));
        assert_eq!(row_key(&with_id), "7");

        let without_id = record(json!({"name": "x"}));
        assert_eq!(row_key(&without_id), r#"{"name":"x"}"#);

        let null_id = record(json!({"id": null, "name": "y"}));
        assert_eq!(row_key(&null_id), r#"{"id":null,"name":"y"}"#);
    }

    #[test]
    fn test_projection_does_not_touch_input() {
        let rows = vec![record(json!({"id": "G-1", "nested": {"a": 1}}))];
        let before = rows.clone();
        let _ = project_rows(&rows);
        assert_eq!(rows, before);
    }

    #[test]
    fn test_to_record() {
        #[derive(serde::Serialize)]
        struct Item {
            id: u32,
            name: &'static str,
        }
        let rec = to_record(&Item { id: 1, name: "a" }).unwrap();
        assert_eq!(derive_columns(&[rec]), vec!["id", "name"]);
        assert!(to_record(&5).is_none());
    }
}
