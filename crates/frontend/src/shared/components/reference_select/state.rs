//! Локальное состояние выпадающего списка.
//!
//! Выбранное значение здесь не хранится: оно приходит снаружи и уходит
//! через колбэк. Состояние только про открытие панели и строку поиска.

use contracts::shared::reference_list::{filter_entries, ReferenceEntry};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorState {
    pub is_open: bool,
    pub search_term: String,
}

impl SelectorState {
    /// Кнопка списка: Closed <-> Open
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Ввод в поле поиска; панель остаётся открытой
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.is_open = true;
    }

    /// Нажатие указателя где-либо в документе.
    /// Закрывает панель только если нажатие вне компонента.
    pub fn pointer_down(&mut self, inside: bool) {
        if self.is_open && !inside {
            self.is_open = false;
        }
    }

    /// Выбор элемента: ровно один вызов `on_change`, панель закрывается,
    /// строка поиска сбрасывается.
    pub fn select(&mut self, entry: &ReferenceEntry, on_change: impl FnOnce(String)) {
        self.is_open = false;
        self.search_term.clear();
        on_change(entry.identifier.clone());
    }

    pub fn visible_entries<'a>(&self, entries: &'a [ReferenceEntry]) -> Vec<&'a ReferenceEntry> {
        filter_entries(entries, &self.search_term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<ReferenceEntry> {
        vec![
            ReferenceEntry::new("", "Keine Angabe", "🏳️"),
            ReferenceEntry::new("DE", "Deutschland", "🇩🇪"),
            ReferenceEntry::new("FR", "Frankreich", "🇫🇷"),
        ]
    }

    #[test]
    fn test_initial_state_is_closed() {
        let state = SelectorState::default();
        assert!(!state.is_open);
        assert!(state.search_term.is_empty());
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut state = SelectorState::default();
        state.toggle();
        assert!(state.is_open);
        state.toggle();
        assert!(!state.is_open);
    }

    #[test]
    fn test_typing_keeps_panel_open() {
        let mut state = SelectorState::default();
        state.toggle();
        state.set_search_term("fr");
        state.set_search_term("fra");
        assert!(state.is_open);
        assert_eq!(state.search_term, "fra");
    }

    #[test]
    fn test_select_emits_once_and_resets() {
        let list = entries();
        let mut state = SelectorState::default();
        state.toggle();
        state.set_search_term("fra");

        let visible = state.visible_entries(&list);
        assert_eq!(visible, vec![&list[2]]);

        let mut calls = Vec::new();
        let chosen = visible[0].clone();
        state.select(&chosen, |id| calls.push(id));

        assert_eq!(calls, vec!["FR".to_string()]);
        assert!(!state.is_open);
        assert_eq!(state.search_term, "");
    }

    #[test]
    fn test_reselecting_same_entry_emits_same_value() {
        let list = entries();
        let mut state = SelectorState::default();
        let mut calls = Vec::new();

        state.toggle();
        state.select(&list[1], |id| calls.push(id));
        state.toggle();
        state.select(&list[1], |id| calls.push(id));

        assert_eq!(calls, vec!["DE".to_string(), "DE".to_string()]);
        assert!(!state.is_open);
    }

    #[test]
    fn test_pointer_down_outside_closes() {
        let mut state = SelectorState::default();
        state.toggle();
        state.pointer_down(false);
        assert!(!state.is_open);
    }

    #[test]
    fn test_pointer_down_inside_keeps_open() {
        let mut state = SelectorState::default();
        state.toggle();
        state.set_search_term("de");
        state.pointer_down(true);
        assert!(state.is_open);
        assert_eq!(state.search_term, "de");
    }

    #[test]
    fn test_pointer_down_while_closed_is_noop() {
        let mut state = SelectorState::default();
        state.pointer_down(false);
        assert_eq!(state, SelectorState::default());
    }

    #[test]
    fn test_empty_term_shows_everything() {
        let list = entries();
        let state = SelectorState::default();
        assert_eq!(state.visible_entries(&list).len(), list.len());
        assert!(state.visible_entries(&[]).is_empty());
    }
}
