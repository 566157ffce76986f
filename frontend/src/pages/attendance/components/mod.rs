pub mod form;
pub mod records;
pub mod tabs;

pub use form::RecordForm;
pub use records::RecordTable;
pub use tabs::{TabBar, TimesheetPlaceholder};
