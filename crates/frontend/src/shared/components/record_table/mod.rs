//! Универсальная таблица для записей без заранее известной схемы.
//!
//! Колонки берутся из первой записи (см. `contracts::shared::generic_record`).
//! Клик по строке отдаёт исходную запись без изменений.

use contracts::shared::generic_record::{derive_columns, project_rows, GenericRecord, ProjectedRow};
use leptos::prelude::*;

/// Строки таблицы вместе с исходными записями, по индексу.
/// Пустой набор даёт пустой список: кликать не по чему.
fn pair_rows(records: &[GenericRecord]) -> Vec<(ProjectedRow, GenericRecord)> {
    match project_rows(records) {
        Some(projection) => projection
            .rows
            .into_iter()
            .zip(records.iter().cloned())
            .collect(),
        None => Vec::new(),
    }
}

#[component]
pub fn RecordTable(
    /// Записи для отображения
    #[prop(into)]
    rows: Signal<Vec<GenericRecord>>,
    /// Клик по строке
    #[prop(optional)]
    on_row_click: Option<Callback<GenericRecord>>,
    /// Текст для пустого набора
    #[prop(optional, into)]
    empty_text: Option<String>,
) -> impl IntoView {
    let empty_text = StoredValue::new(empty_text.unwrap_or_else(|| "Keine Daten".to_string()));

    move || {
        let records = rows.get();
        if records.is_empty() {
            return view! {
                <div class="table__empty">{empty_text.get_value()}</div>
            }
            .into_any();
        }

        let columns = derive_columns(&records);
        let paired = pair_rows(&records);

        view! {
            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {columns.into_iter().map(|column| view! {
                                <th class="table__header-cell">{column}</th>
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || paired.clone()
                            key=|(projected, _)| projected.key.clone()
                            children=move |(projected, record)| {
                                view! {
                                    <tr
                                        class="table__row"
                                        class:table__row--clickable=on_row_click.is_some()
                                        on:click=move |_| {
                                            if let Some(handler) = on_row_click {
                                                handler.run(record.clone());
                                            }
                                        }
                                    >
                                        {projected.cells.into_iter().map(|cell| view! {
                                            <td class="table__cell">{cell}</td>
                                        }).collect_view()}
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        }
        .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::generic_record::MISSING_CELL;
    use serde_json::{json, Value};

    fn record(v: Value) -> GenericRecord {
        match v {
            Value::Object(m) => m,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn test_pair_rows_empty() {
        assert!(pair_rows(&[]).is_empty());
    }

    #[test]
    fn test_pair_rows_keeps_original_records() {
        let records = vec![
            record(json!({"zimmer": "101", "art": "Einzel"})),
            record(json!({"zimmer": "102", "betten": 2, "extra": {"balkon": true}})),
            record(json!({"art": "Suite"})),
        ];
        let paired = pair_rows(&records);
        assert_eq!(paired.len(), records.len());
        for (i, (projected, original)) in paired.iter().enumerate() {
            assert_eq!(original, &records[i]);
            assert_eq!(projected.cells.len(), 2);
        }
        // колонки только из первой записи
        assert_eq!(paired[1].0.cells, vec!["102".to_string(), MISSING_CELL.to_string()]);
        assert_eq!(paired[2].0.cells, vec![MISSING_CELL.to_string(), "Suite".to_string()]);
    }

    #[test]
    fn test_pair_rows_with_shared_key() {
        let records = vec![
            record(json!({"id": 7, "name": "Anna"})),
            record(json!({"id": 7, "name": "Bernd"})),
        ];
        let paired = pair_rows(&records);
        assert_eq!(paired[0].0.key, paired[1].0.key);
        assert_eq!(paired[0].1, records[0]);
        assert_eq!(paired[1].1, records[1]);
    }
}
