// ============================================================
// CSV DOMAIN LAYER
// ============================================================
// Core types and value objects for parsed CSV content
// No I/O, no async, no external dependencies

mod csv_row;
mod table;

pub use csv_row::{CsvField, CsvRow};
pub use table::{CsvTable, TEXT_COLUMN_NAMES};
