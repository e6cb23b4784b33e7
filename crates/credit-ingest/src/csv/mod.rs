//! CSV reading utilities.

mod reader;

pub use reader::read_csv_table;
pub(crate) use reader::{ensure_readable, validate_dataframe_shape};
