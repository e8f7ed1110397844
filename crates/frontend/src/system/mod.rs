pub mod data_browser;
pub mod settings;
