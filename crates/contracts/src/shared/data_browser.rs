use serde::{Deserialize, Serialize};

/// Таблица, доступная в браузере данных
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BrowsableTable {
    /// Имя в URL (`/api/data-browser/tables/:name`)
    pub name: String,
    pub label: String,
}
