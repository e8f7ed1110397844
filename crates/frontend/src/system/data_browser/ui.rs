//! Просмотр таблиц хранилища без знания их структуры

use contracts::shared::generic_record::GenericRecord;
use contracts::shared::reference_list::ReferenceEntry;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::components::{RecordTable, ReferenceSelect};
use crate::shared::icons::icon;
use crate::shared::json_viewer::JsonViewer;

#[component]
pub fn DataBrowserPage() -> impl IntoView {
    let tables = RwSignal::new(Vec::<ReferenceEntry>::new());
    let selected = RwSignal::new(None::<String>);
    let rows = RwSignal::new(Vec::<GenericRecord>::new());
    let opened = RwSignal::new(None::<GenericRecord>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let load_rows = move |table: String| {
        loading.set(true);
        opened.set(None);
        spawn_local(async move {
            match api::fetch_rows(&table).await {
                Ok(data) => {
                    rows.set(data);
                    error.set(None);
                }
                Err(e) => {
                    rows.set(Vec::new());
                    error.set(Some(format!("Tabelle '{}' konnte nicht geladen werden: {}", table, e)));
                }
            }
            loading.set(false);
        });
    };

    spawn_local(async move {
        match api::fetch_tables().await {
            Ok(list) => {
                let first = list.first().map(|t| t.name.clone());
                tables.set(
                    list.iter()
                        .map(|t| ReferenceEntry::new(&t.name, &t.label, ""))
                        .collect(),
                );
                if let Some(name) = first {
                    selected.set(Some(name.clone()));
                    load_rows(name);
                }
            }
            Err(e) => error.set(Some(format!("Tabellenliste nicht verfügbar: {}", e))),
        }
    });

    let on_table_change = Callback::new(move |name: String| {
        selected.set(Some(name.clone()));
        load_rows(name);
    });

    let refresh = move |_| {
        if let Some(name) = selected.get_untracked() {
            load_rows(name);
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Datenbrowser"}</h1>
                </div>
                <div class="header__actions">
                    <ReferenceSelect
                        entries=tables
                        value=selected
                        on_change=on_table_change
                        placeholder="Tabelle wählen"
                    />
                    <button class="button button--secondary" on:click=refresh>
                        {icon("refresh")}
                        "Aktualisieren"
                    </button>
                </div>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{move || error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="text-muted">"Wird geladen..."</p> }
            >
                <RecordTable
                    rows=rows
                    on_row_click=Callback::new(move |record| opened.set(Some(record)))
                    empty_text="Tabelle ist leer"
                />
            </Show>

            {move || opened.get().map(|record| view! {
                <div class="side-panel">
                    <JsonViewer
                        value=serde_json::Value::Object(record)
                        title=selected.get_untracked().unwrap_or_default()
                        on_close=Callback::new(move |_| opened.set(None))
                    />
                </div>
            })}
        </div>
    }
}
