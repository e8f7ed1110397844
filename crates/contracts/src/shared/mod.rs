pub mod countries;
pub mod data_browser;
pub mod generic_record;
pub mod reference_list;
pub mod settings;
