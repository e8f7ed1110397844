use serde::{Deserialize, Serialize};

/// Заголовок приложения в шапке
pub const BRANDING_TITLE: &str = "branding_title";
/// URL логотипа в шапке
pub const BRANDING_LOGO: &str = "branding_logo";
/// Страна, предвыбранная для новых гостей
pub const DEFAULT_COUNTRY: &str = "default_country";

pub const DEFAULT_BRANDING_TITLE: &str = "Pension Verwaltung";

/// Запись хранилища ключ/значение
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SettingEntry {
    pub key: String,
    pub value: String,
    pub updated_at: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SaveSettingRequest {
    pub value: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SaveSettingResponse {
    pub success: bool,
    pub message: String,
}
