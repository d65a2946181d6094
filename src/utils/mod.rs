pub mod format;
pub mod table;

pub use format::{format_currency, format_percent};
pub use table::Table;
