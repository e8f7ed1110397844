use crate::shared::api_utils;
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use contracts::projections::p900_occupancy_report::dto::{format_money, OccupancyReportRow};
use leptos::prelude::*;
use thaw::*;

const EXPORT_FILENAME: &str = "belegung.csv";

impl CsvExportable for OccupancyReportRow {
    fn headers() -> Vec<&'static str> {
        vec!["Zimmer", "Kategorie", "Buchungen", "Nächte", "Umsatz"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.room_number.clone(),
            self.category.clone(),
            self.bookings.to_string(),
            self.nights.to_string(),
            format_money(self.revenue),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Totals {
    bookings: u32,
    nights: i64,
    revenue: f64,
}

fn totals(rows: &[OccupancyReportRow]) -> Totals {
    rows.iter().fold(Totals::default(), |acc, r| Totals {
        bookings: acc.bookings + r.bookings,
        nights: acc.nights + r.nights,
        revenue: acc.revenue + r.revenue,
    })
}

async fn fetch_report() -> Result<Vec<OccupancyReportRow>, String> {
    api_utils::get_json("/api/reports/occupancy").await
}

#[component]
#[allow(non_snake_case)]
pub fn OccupancyReport() -> impl IntoView {
    let (items, set_items) = signal::<Vec<OccupancyReportRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let loading = RwSignal::new(false);

    let fetch = move || {
        loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_report().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(format!("Bericht nicht verfügbar: {}", e))),
            }
            loading.set(false);
        });
    };

    fetch();

    let export = move |_| {
        let rows = items.get_untracked();
        if let Err(e) = export_to_csv(&rows, EXPORT_FILENAME) {
            log::error!("CSV export failed: {}", e);
            set_error.set(Some(e));
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Belegung"}</h1>
                </div>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=export>
                        {icon("download")}
                        "CSV exportieren"
                    </Button>
                    <button class="button button--secondary" on:click=move |_| fetch() disabled=move || loading.get()>
                        {icon("refresh")}
                        {"Aktualisieren"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {OccupancyReportRow::headers().into_iter().map(|h| view! {
                                <th class="table__header-cell">{h}</th>
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || items.get()
                            key=|row| row.room_number.clone()
                            children=move |row| {
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{row.room_number}</td>
                                        <td class="table__cell">{row.category}</td>
                                        <td class="table__cell table__cell--right">{row.bookings}</td>
                                        <td class="table__cell table__cell--right">{row.nights}</td>
                                        <td class="table__cell table__cell--right">{format_money(row.revenue)}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                    <tfoot>
                        {move || {
                            let t = items.with(|rows| totals(rows));
                            view! {
                                <tr class="table__row table__row--total">
                                    <td class="table__cell" colspan="2"><strong>"Gesamt"</strong></td>
                                    <td class="table__cell table__cell--right">{t.bookings}</td>
                                    <td class="table__cell table__cell--right">{t.nights}</td>
                                    <td class="table__cell table__cell--right">{format_money(t.revenue)}</td>
                                </tr>
                            }
                        }}
                    </tfoot>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(number: &str, bookings: u32, nights: i64, revenue: f64) -> OccupancyReportRow {
        OccupancyReportRow {
            room_number: number.to_string(),
            category: "Doppelzimmer".to_string(),
            bookings,
            nights,
            revenue,
        }
    }

    #[test]
    fn test_csv_row_uses_german_decimals() {
        assert_eq!(
            row("101", 2, 5, 425.0).to_csv_row(),
            vec!["101", "Doppelzimmer", "2", "5", "425,00"]
        );
    }

    #[test]
    fn test_totals() {
        let t = totals(&[row("101", 2, 5, 425.0), row("102", 0, 0, 0.0), row("103", 1, 3, 180.0)]);
        assert_eq!(
            t,
            Totals {
                bookings: 3,
                nights: 8,
                revenue: 605.0
            }
        );
    }
}
