// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// CSV file reading with encoding fallback

mod csv_reader;

pub use csv_reader::CsvReader;
