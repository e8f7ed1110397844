pub mod config;
pub mod data;
pub mod data_browser;
pub mod fixtures;
