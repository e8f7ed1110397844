use contracts::shared::countries::{countries, HOME_COUNTRY};
use contracts::shared::generic_record::{to_record, value_text, GenericRecord};
use contracts::shared::settings::{
    SettingEntry, BRANDING_LOGO, BRANDING_TITLE, DEFAULT_BRANDING_TITLE, DEFAULT_COUNTRY,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{RecordTable, ReferenceSelect};
use crate::system::settings::api;

fn value_of(entries: &[SettingEntry], key: &str) -> Option<String> {
    entries.iter().find(|e| e.key == key).map(|e| e.value.clone())
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().unwrap_or_default();

    let entries = RwSignal::new(Vec::<SettingEntry>::new());
    let error = RwSignal::new(None::<String>);
    let status = RwSignal::new(None::<String>);

    let title = RwSignal::new(String::new());
    let logo = RwSignal::new(String::new());
    let country = RwSignal::new(Some(HOME_COUNTRY.to_string()));

    // Редактор произвольной пары ключ/значение
    let raw_key = RwSignal::new(String::new());
    let raw_value = RwSignal::new(String::new());

    let reload = move || {
        spawn_local(async move {
            match api::fetch_settings().await {
                Ok(list) => {
                    title.set(
                        value_of(&list, BRANDING_TITLE)
                            .unwrap_or_else(|| DEFAULT_BRANDING_TITLE.to_string()),
                    );
                    logo.set(value_of(&list, BRANDING_LOGO).unwrap_or_default());
                    country.set(Some(
                        value_of(&list, DEFAULT_COUNTRY).unwrap_or_else(|| HOME_COUNTRY.to_string()),
                    ));
                    entries.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("Einstellungen konnten nicht geladen werden: {}", e))),
            }
        });
    };
    reload();

    let save = move |key: String, value: String| {
        status.set(None);
        spawn_local(async move {
            match api::save_setting(&key, &value).await {
                Ok(response) if response.success => {
                    if key == BRANDING_TITLE {
                        ctx.branding_title.set(if value.is_empty() {
                            DEFAULT_BRANDING_TITLE.to_string()
                        } else {
                            value.clone()
                        });
                    } else if key == BRANDING_LOGO {
                        ctx.branding_logo.set(value.clone());
                    }
                    status.set(Some(format!("Gespeichert: {}", key)));
                    reload();
                }
                Ok(response) => error.set(Some(response.message)),
                Err(e) => error.set(Some(format!("Speichern fehlgeschlagen: {}", e))),
            }
        });
    };

    let save_branding = move |_| {
        save(BRANDING_TITLE.to_string(), title.get_untracked());
        save(BRANDING_LOGO.to_string(), logo.get_untracked());
    };

    let on_country_change = Callback::new(move |id: String| {
        country.set(Some(id.clone()));
        save(DEFAULT_COUNTRY.to_string(), id);
    });

    let save_raw = move |_| {
        let key = raw_key.get_untracked().trim().to_string();
        if key.is_empty() {
            error.set(Some("Schlüssel darf nicht leer sein".to_string()));
            return;
        }
        save(key, raw_value.get_untracked());
    };

    let delete_raw = move |_| {
        let key = raw_key.get_untracked().trim().to_string();
        if key.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::delete_setting(&key).await {
                Ok(()) => {
                    raw_key.set(String::new());
                    raw_value.set(String::new());
                    status.set(Some(format!("Gelöscht: {}", key)));
                    reload();
                }
                Err(e) => error.set(Some(format!("Löschen fehlgeschlagen: {}", e))),
            }
        });
    };

    let rows = Signal::derive(move || {
        entries.with(|list| list.iter().filter_map(to_record).collect::<Vec<_>>())
    });

    let on_row_click = Callback::new(move |record: GenericRecord| {
        raw_key.set(record.get("key").map(value_text).unwrap_or_default());
        raw_value.set(record.get("value").map(value_text).unwrap_or_default());
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Einstellungen"}</h1>
                </div>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{move || error.get().unwrap_or_default()}</span>
                </div>
            </Show>
            <Show when=move || status.get().is_some()>
                <div class="info-box">{move || status.get().unwrap_or_default()}</div>
            </Show>

            <section class="form-section">
                <h3>"Darstellung"</h3>
                <div class="form__group">
                    <label>"Titel"</label>
                    <Input value=title placeholder=DEFAULT_BRANDING_TITLE />
                </div>
                <div class="form__group">
                    <label>"Logo-URL"</label>
                    <Input value=logo placeholder="https://..." />
                </div>
                <Button appearance=ButtonAppearance::Primary on_click=save_branding>
                    "Speichern"
                </Button>
            </section>

            <section class="form-section">
                <h3>"Standardland"</h3>
                <ReferenceSelect
                    entries=countries().to_vec()
                    value=country
                    on_change=on_country_change
                    search_placeholder="Land suchen..."
                />
            </section>

            <section class="form-section">
                <h3>"Alle Einstellungen"</h3>
                <RecordTable rows=rows on_row_click=on_row_click empty_text="Keine Einstellungen gespeichert" />

                <div class="form__row">
                    <div class="form__group">
                        <label>"Schlüssel"</label>
                        <Input value=raw_key />
                    </div>
                    <div class="form__group">
                        <label>"Wert"</label>
                        <Input value=raw_value />
                    </div>
                </div>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=save_raw>
                        "Speichern"
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=delete_raw>
                        "Löschen"
                    </Button>
                </div>
            </section>
        </div>
    }
}
