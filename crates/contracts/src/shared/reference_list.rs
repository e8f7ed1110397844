//! Справочные списки для выбора одного значения (страны и т.п.)
//!
//! Список фиксирован и упорядочен поставщиком: порядок элементов
//! сохраняется при фильтрации, сортировка не выполняется.

use serde::{Deserialize, Serialize};

/// Элемент справочного списка
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// Стабильный ключ; пустая строка означает явное "не указано"
    pub identifier: String,
    /// Отображаемое название
    pub label: String,
    /// Декоративный маркер (флаг)
    pub glyph: String,
}

impl ReferenceEntry {
    pub fn new(identifier: &str, label: &str, glyph: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            label: label.to_string(),
            glyph: glyph.to_string(),
        }
    }

    /// `needle` должен быть уже в нижнем регистре
    fn matches(&self, needle: &str) -> bool {
        self.label.to_lowercase().contains(needle)
            || self.identifier.to_lowercase().contains(needle)
    }
}

/// Фильтрует список по подстроке в `label` или `identifier` без учёта регистра.
///
/// Пустая строка поиска возвращает весь список в исходном порядке.
pub fn filter_entries<'a>(entries: &'a [ReferenceEntry], search_term: &str) -> Vec<&'a ReferenceEntry> {
    if search_term.is_empty() {
        return entries.iter().collect();
    }
    let needle = search_term.to_lowercase();
    entries.iter().filter(|e| e.matches(&needle)).collect()
}

/// Находит элемент по выбранному значению; `None` трактуется как `""`.
pub fn find_entry<'a>(entries: &'a [ReferenceEntry], value: Option<&str>) -> Option<&'a ReferenceEntry> {
    let wanted = value.unwrap_or("");
    entries.iter().find(|e| e.identifier == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ReferenceEntry> {
        vec![
            ReferenceEntry::new("", "Keine Angabe", "🏳️"),
            ReferenceEntry::new("DE", "Deutschland", "🇩🇪"),
            ReferenceEntry::new("FR", "Frankreich", "🇫🇷"),
        ]
    }

    fn is_subsequence(sub: &[&ReferenceEntry], full: &[ReferenceEntry]) -> bool {
        let mut it = full.iter();
        sub.iter().all(|s| it.any(|f| f == *s))
    }

    #[test]
    fn test_empty_term_returns_full_list_in_order() {
        let entries = sample();
        let filtered: Vec<ReferenceEntry> = filter_entries(&entries, "").into_iter().cloned().collect();
        assert_eq!(filtered, entries);
    }

    #[test]
    fn test_filter_is_order_preserving_subsequence() {
        let entries = sample();
        for term in ["e", "an", "DE", "x", "k", "ANGABE"] {
            let filtered = filter_entries(&entries, term);
            assert!(is_subsequence(&filtered, &entries), "term {term:?}");
        }
    }

    #[test]
    fn test_every_entry_found_by_its_label() {
        let entries = sample();
        for entry in &entries {
            assert!(filter_entries(&entries, &entry.label).contains(&entry));
            assert!(filter_entries(&entries, &entry.label.to_uppercase()).contains(&entry));
        }
    }

    #[test]
    fn test_filter_matches_identifier_case_insensitive() {
        let entries = sample();
        let filtered = filter_entries(&entries, "fr");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].identifier, "FR");

        let filtered = filter_entries(&entries, "de");
        let ids: Vec<&str> = filtered.iter().map(|e| e.identifier.as_str()).collect();
        assert_eq!(ids, vec!["DE"]);
    }

    #[test]
    fn test_typing_fra_yields_frankreich() {
        let entries = sample();
        let filtered = filter_entries(&entries, "fra");
        assert_eq!(filtered, vec![&entries[2]]);
    }

    #[test]
    fn test_no_match_and_empty_list() {
        let entries = sample();
        assert!(filter_entries(&entries, "zzz").is_empty());
        assert!(filter_entries(&[], "").is_empty());
        assert!(filter_entries(&[], "de").is_empty());
    }

    #[test]
    fn test_find_entry_treats_none_as_unspecified() {
        let entries = sample();
        assert_eq!(find_entry(&entries, None).map(|e| e.label.as_str()), Some("Keine Angabe"));
        assert_eq!(find_entry(&entries, Some("FR")).map(|e| e.label.as_str()), Some("Frankreich"));
        assert!(find_entry(&entries, Some("XX")).is_none());
        assert!(find_entry(&entries[1..], None).is_none());
    }
}
