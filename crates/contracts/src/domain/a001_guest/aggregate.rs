use serde::{Deserialize, Serialize};

/// Гость пансиона
///
/// Необязательные поля не сериализуются, если не заданы, поэтому записи
/// гостей в браузере данных имеют разную форму.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Guest {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Идентификатор из справочника стран; `""` = не указано
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Guest {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
