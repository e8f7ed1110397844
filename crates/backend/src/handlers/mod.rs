pub mod data_browser;
pub mod lodging;
pub mod p900_occupancy_report;
pub mod sys_settings;
