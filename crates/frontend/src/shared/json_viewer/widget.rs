use crate::shared::icons::icon;
use leptos::prelude::*;

/// Просмотр записи в виде отформатированного JSON
#[component]
pub fn JsonViewer(
    /// Отображаемое значение
    value: serde_json::Value,
    #[prop(optional)]
    title: Option<String>,
    /// Закрыть панель
    #[prop(optional)]
    on_close: Option<Callback<()>>,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);
    let json_content = serde_json::to_string_pretty(&value).unwrap_or_default();
    let line_count = json_content.lines().count();
    let json_for_copy = json_content.clone();

    let handle_copy = move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        let content = json_for_copy.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let promise = clipboard.write_text(&content);
            let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
        });
        set_copied.set(true);

        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(2000).await;
            set_copied.set(false);
        });
    };

    view! {
        <div class="json-viewer">
            <div class="modal-header modal-header--compact">
                <h3 class="modal-title">
                    {title.unwrap_or_else(|| "Datensatz".to_string())}
                </h3>
                <div class="modal-header-actions">
                    <button class="button button--secondary" on:click=handle_copy title="In die Zwischenablage kopieren">
                        {icon("copy")}
                        {move || if copied.get() { "Kopiert!" } else { "Kopieren" }}
                    </button>
                    {on_close.map(|close| view! {
                        <button class="button button--icon" on:click=move |_| close.run(())>
                            {icon("x")}
                        </button>
                    })}
                </div>
            </div>

            <div class="json-viewer__body">
                <pre class="json-viewer__content">{json_content}</pre>
            </div>

            <div class="json-viewer__footer">
                {"Zeilen: "}
                <strong>{line_count}</strong>
            </div>
        </div>
    }
}
