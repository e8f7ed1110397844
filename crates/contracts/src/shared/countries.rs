//! Справочник стран для гостей и настроек.
//!
//! Первые два элемента ("Keine Angabe" и страна по умолчанию) стоят
//! вне алфавитного порядка и должны оставаться первыми.

use once_cell::sync::Lazy;

use super::reference_list::ReferenceEntry;

/// Идентификатор страны по умолчанию
pub const HOME_COUNTRY: &str = "DE";

static COUNTRIES: Lazy<Vec<ReferenceEntry>> = Lazy::new(|| {
    [
        ("", "Keine Angabe", "🏳️"),
        ("DE", "Deutschland", "🇩🇪"),
        ("BE", "Belgien", "🇧🇪"),
        ("DK", "Dänemark", "🇩🇰"),
        ("FI", "Finnland", "🇫🇮"),
        ("FR", "Frankreich", "🇫🇷"),
        ("GR", "Griechenland", "🇬🇷"),
        ("GB", "Großbritannien", "🇬🇧"),
        ("IE", "Irland", "🇮🇪"),
        ("IT", "Italien", "🇮🇹"),
        ("HR", "Kroatien", "🇭🇷"),
        ("LU", "Luxemburg", "🇱🇺"),
        ("NL", "Niederlande", "🇳🇱"),
        ("NO", "Norwegen", "🇳🇴"),
        ("AT", "Österreich", "🇦🇹"),
        ("PL", "Polen", "🇵🇱"),
        ("PT", "Portugal", "🇵🇹"),
        ("SE", "Schweden", "🇸🇪"),
        ("CH", "Schweiz", "🇨🇭"),
        ("ES", "Spanien", "🇪🇸"),
        ("CZ", "Tschechien", "🇨🇿"),
        ("HU", "Ungarn", "🇭🇺"),
        ("US", "Vereinigte Staaten", "🇺🇸"),
    ]
    .into_iter()
    .map(|(id, label, glyph)| ReferenceEntry::new(id, label, glyph))
    .collect()
});

/// Упорядоченный список стран; один и тот же срез при каждом вызове
pub fn countries() -> &'static [ReferenceEntry] {
    COUNTRIES.as_slice()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_unspecified_and_home_come_first() {
        let list = countries();
        assert_eq!(list[0].identifier, "");
        assert_eq!(list[1].identifier, HOME_COUNTRY);
    }

    #[test]
    fn test_identifiers_and_labels_are_unique() {
        let list = countries();
        let ids: HashSet<&str> = list.iter().map(|e| e.identifier.as_str()).collect();
        let labels: HashSet<&str> = list.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(ids.len(), list.len());
        assert_eq!(labels.len(), list.len());
    }

    #[test]
    fn test_stable_across_calls() {
        assert!(std::ptr::eq(countries(), countries()));
    }
}
