use contracts::shared::settings::DEFAULT_BRANDING_TITLE;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Страницы приложения (пункты меню)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Guests,
    DataBrowser,
    Reports,
    Settings,
}

impl Page {
    pub fn key(&self) -> &'static str {
        match self {
            Page::Guests => "guests",
            Page::DataBrowser => "data_browser",
            Page::Reports => "reports",
            Page::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Guests => "Gäste",
            Page::DataBrowser => "Datenbrowser",
            Page::Reports => "Berichte",
            Page::Settings => "Einstellungen",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Guests => "guests",
            Page::DataBrowser => "database",
            Page::Reports => "bar-chart",
            Page::Settings => "settings",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.key() == key)
    }

    pub fn all() -> [Page; 4] {
        [Page::Guests, Page::DataBrowser, Page::Reports, Page::Settings]
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
    /// Заголовок и логотип из настроек
    pub branding_title: RwSignal<String>,
    pub branding_logo: RwSignal<String>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::Guests),
            left_open: RwSignal::new(true),
            branding_title: RwSignal::new(DEFAULT_BRANDING_TITLE.to_string()),
            branding_logo: RwSignal::new(String::new()),
        }
    }

    /// Синхронизация активной страницы с `?page=...`
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("page").and_then(|k| Page::from_key(k)) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.active.get();
            let query_string =
                serde_qs::to_string(&HashMap::from([("page".to_string(), page.key().to_string())]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open_page(&self, page: Page) {
        log::debug!("open_page: {}", page.key());
        self.active.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_keys_round_trip() {
        for page in Page::all() {
            assert_eq!(Page::from_key(page.key()), Some(page));
        }
        assert_eq!(Page::from_key("unknown"), None);
    }
}
