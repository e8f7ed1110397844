use contracts::shared::settings::{
    SaveSettingRequest, SaveSettingResponse, SettingEntry, BRANDING_LOGO, BRANDING_TITLE,
};
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils;

fn setting_path(key: &str) -> String {
    format!("/api/settings/{}", urlencoding::encode(key))
}

/// Все настройки
pub async fn fetch_settings() -> Result<Vec<SettingEntry>, String> {
    api_utils::get_json("/api/settings").await
}

/// Значение по ключу; `None`, если ключа нет
pub async fn fetch_setting(key: &str) -> Result<Option<String>, String> {
    let entry: Option<SettingEntry> = api_utils::get_json(&setting_path(key)).await?;
    Ok(entry.map(|e| e.value))
}

pub async fn save_setting(key: &str, value: &str) -> Result<SaveSettingResponse, String> {
    let request = SaveSettingRequest {
        value: value.to_string(),
    };
    api_utils::put_json(&setting_path(key), &request).await
}

pub async fn delete_setting(key: &str) -> Result<(), String> {
    api_utils::delete(&setting_path(key)).await
}

/// Загружает заголовок и логотип в глобальный контекст.
/// Ошибки только логируются: шапка остаётся со значениями по умолчанию.
pub async fn load_branding(ctx: AppGlobalContext) {
    match fetch_setting(BRANDING_TITLE).await {
        Ok(Some(title)) if !title.is_empty() => ctx.branding_title.set(title),
        Ok(_) => {}
        Err(e) => log::warn!("Failed to load branding title: {}", e),
    }
    match fetch_setting(BRANDING_LOGO).await {
        Ok(Some(logo)) => ctx.branding_logo.set(logo),
        Ok(None) => {}
        Err(e) => log::warn!("Failed to load branding logo: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_path_encodes_key() {
        assert_eq!(setting_path("branding_title"), "/api/settings/branding_title");
        assert_eq!(setting_path("a b/c"), "/api/settings/a%20b%2Fc");
    }
}
