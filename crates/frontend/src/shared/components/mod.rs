pub mod record_table;
pub mod reference_select;

pub use record_table::RecordTable;
pub use reference_select::ReferenceSelect;
