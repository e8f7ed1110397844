//! Выпадающий список с поиском по фиксированному справочнику.
//!
//! ## Использование
//!
//! ```rust,ignore
//! let country = RwSignal::new(Some("DE".to_string()));
//! view! {
//!     <ReferenceSelect
//!         entries=countries().to_vec()
//!         value=country
//!         on_change=Callback::new(move |id| country.set(Some(id)))
//!     />
//! }
//! ```
//!
//! Компонент управляемый: выбранное значение хранит вызывающий.

pub mod state;

pub use state::SelectorState;

use crate::shared::icons::icon;
use contracts::shared::reference_list::{find_entry, ReferenceEntry};
use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn ReferenceSelect(
    /// Упорядоченный список элементов
    #[prop(into)]
    entries: Signal<Vec<ReferenceEntry>>,
    /// Текущий идентификатор; `None` трактуется как `""`
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Вызывается с идентификатором выбранного элемента
    on_change: Callback<String>,
    /// Текст, если значение не найдено в списке
    #[prop(optional, into)]
    placeholder: Option<String>,
    #[prop(optional, into)]
    search_placeholder: Option<String>,
) -> impl IntoView {
    let state = RwSignal::new(SelectorState::default());
    let root = NodeRef::<Div>::new();
    let placeholder = StoredValue::new(placeholder.unwrap_or_else(|| "Bitte wählen".to_string()));
    let search_placeholder = search_placeholder.unwrap_or_else(|| "Suchen...".to_string());

    // Клик вне компонента закрывает панель. Слушатель снимается при размонтировании.
    let outside_listener = window_event_listener(ev::mousedown, move |event: ev::MouseEvent| {
        if !state.with_untracked(|s| s.is_open) {
            return;
        }
        let target = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let inside = match (root.get_untracked(), target) {
            (Some(el), Some(node)) => el.contains(Some(&node)),
            _ => false,
        };
        state.update(|s| s.pointer_down(inside));
    });
    on_cleanup(move || outside_listener.remove());

    let selected = move || {
        let current = value.get();
        entries.with(|list| find_entry(list, current.as_deref()).cloned())
    };

    let visible = Memo::new(move |_| {
        entries.with(|list| {
            state.with(|s| {
                s.visible_entries(list)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>()
            })
        })
    });

    let handle_select = move |entry: ReferenceEntry| {
        let mut chosen = None;
        state.update(|s| s.select(&entry, |id| chosen = Some(id)));
        if let Some(id) = chosen {
            on_change.run(id);
        }
    };

    view! {
        <div class="reference-select" node_ref=root>
            <button
                type="button"
                class="reference-select__control"
                class:reference-select__control--open=move || state.with(|s| s.is_open)
                on:click=move |_| state.update(|s| s.toggle())
            >
                {move || match selected() {
                    Some(entry) => view! {
                        <span class="reference-select__glyph">{entry.glyph}</span>
                        <span class="reference-select__label">{entry.label}</span>
                    }.into_any(),
                    None => view! {
                        <span class="reference-select__placeholder">{placeholder.get_value()}</span>
                    }.into_any(),
                }}
                {icon("chevron-down")}
            </button>

            <Show when=move || state.with(|s| s.is_open)>
                <div class="reference-select__panel">
                    <input
                        type="text"
                        class="reference-select__search"
                        placeholder=search_placeholder.clone()
                        prop:value=move || state.with(|s| s.search_term.clone())
                        on:input=move |ev| {
                            let term = event_target_value(&ev);
                            state.update(|s| s.set_search_term(term));
                        }
                    />
                    <ul class="reference-select__list">
                        <Show
                            when=move || visible.with(|v| !v.is_empty())
                            fallback=|| view! {
                                <li class="reference-select__empty">"Keine Treffer"</li>
                            }
                        >
                            <For
                                each=move || visible.get()
                                key=|entry| entry.label.clone()
                                children=move |entry: ReferenceEntry| {
                                    let identifier = entry.identifier.clone();
                                    let is_selected = move || value.get().unwrap_or_default() == identifier;
                                    let entry_for_click = entry.clone();
                                    view! {
                                        <li
                                            class="reference-select__option"
                                            class:reference-select__option--selected=is_selected
                                            on:click=move |_| handle_select(entry_for_click.clone())
                                        >
                                            <span class="reference-select__glyph">{entry.glyph}</span>
                                            <span>{entry.label}</span>
                                        </li>
                                    }
                                }
                            />
                        </Show>
                    </ul>
                </div>
            </Show>
        </div>
    }
}
