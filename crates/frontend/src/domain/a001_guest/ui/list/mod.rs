use crate::shared::api_utils;
use crate::shared::components::{RecordTable, ReferenceSelect};
use crate::shared::icons::icon;
use crate::shared::json_viewer::JsonViewer;
use contracts::domain::a001_guest::aggregate::Guest;
use contracts::shared::countries::countries;
use contracts::shared::generic_record::{to_record, GenericRecord};
use leptos::prelude::*;

/// Идентификатор вне справочника: селектор показывает placeholder "Alle Länder"
const ALL_COUNTRIES: &str = "*";

/// Гости выбранной страны. `None` = без фильтра, `Some("")` = страна не указана.
fn filter_by_country<'a>(guests: &'a [Guest], country: Option<&str>) -> Vec<&'a Guest> {
    guests
        .iter()
        .filter(|g| country.map_or(true, |c| g.country == c))
        .collect()
}

async fn fetch_guests() -> Result<Vec<Guest>, String> {
    api_utils::get_json("/api/guests").await
}

#[component]
#[allow(non_snake_case)]
pub fn GuestList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Guest>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let country = RwSignal::new(None::<String>);
    let opened = RwSignal::new(None::<GenericRecord>);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_guests().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    fetch();

    let rows = Signal::derive(move || {
        let selected = country.get();
        items.with(|guests| {
            filter_by_country(guests, selected.as_deref())
                .into_iter()
                .filter_map(to_record)
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Gäste"}</h1>
                </div>
                <div class="header__actions">
                    <ReferenceSelect
                        entries=countries().to_vec()
                        value=Signal::derive(move || {
                            Some(country.get().unwrap_or_else(|| ALL_COUNTRIES.to_string()))
                        })
                        on_change=Callback::new(move |id| country.set(Some(id)))
                        placeholder="Alle Länder"
                        search_placeholder="Land suchen..."
                    />
                    <button
                        class="button button--secondary"
                        on:click=move |_| country.set(None)
                        disabled=move || country.get().is_none()
                    >
                        {"Alle Länder"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
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

            <RecordTable
                rows=rows
                on_row_click=Callback::new(move |record| opened.set(Some(record)))
                empty_text="Keine Gäste gefunden"
            />

            {move || opened.get().map(|record| view! {
                <div class="side-panel">
                    <JsonViewer
                        value=serde_json::Value::Object(record)
                        title="Gast".to_string()
                        on_close=Callback::new(move |_| opened.set(None))
                    />
                </div>
            })}
        </div>
    }
}
