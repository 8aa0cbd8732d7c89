// ============================================================
// CSV READER
// ============================================================
// Load a CSV file into an in-memory table with encoding fallback

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use encoding_rs::WINDOWS_1252;

use crate::domain::csv::{CsvField, CsvRow, CsvTable};
use crate::domain::error::{AppError, Result};

/// CSV reader with encoding fallback
pub struct CsvReader {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Whether to trim whitespace from values
    trim: bool,
}

impl Default for CsvReader {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

impl CsvReader {
    /// Create a new CSV reader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Read and parse a CSV file
    pub fn read_file(&self, path: &Path) -> Result<CsvTable> {
        if !path.exists() {
            return Err(AppError::NotFound(format!(
                "The file {} was not found",
                path.display()
            )));
        }

        let content = self.read_with_encoding_fallback(path)?;
        self.parse_content(&content)
    }

    /// Parse CSV content from a string
    pub fn parse_content(&self, content: &str) -> Result<CsvTable> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
            .clone();

        let mut rows = Vec::new();
        let mut index = 0;

        for result in reader.records() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;

            rows.push(Self::parse_row(index, &headers, &record));
            index += 1;
        }

        let clean_headers = headers.iter().map(CsvField::clean_field_name).collect();

        Ok(CsvTable::new(clean_headers, rows))
    }

    /// Read file contents, decoding UTF-8 first and falling back to
    /// Windows-1252 for files exported by legacy tools
    fn read_with_encoding_fallback(&self, path: &Path) -> Result<String> {
        let buffer = std::fs::read(path)
            .map_err(|e| AppError::IoError(format!("Failed to read file: {}", e)))?;

        match String::from_utf8(buffer) {
            Ok(content) => Ok(content),
            Err(err) => {
                let (decoded, _, _) = WINDOWS_1252.decode(err.as_bytes());
                Ok(decoded.into_owned())
            }
        }
    }

    /// Build a row, padding missing trailing fields with empty values
    fn parse_row(index: usize, headers: &StringRecord, record: &StringRecord) -> CsvRow {
        let fields = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let value = record.get(idx).unwrap_or("").to_string();
                CsvField::new(header.to_string(), value)
            })
            .collect();

        CsvRow::new(index, fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_simple_csv() {
        let content = "id,text\n1,I love this!\n2,I hate this.";
        let table = CsvReader::new().parse_content(content).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.headers, vec!["id", "text"]);
        assert_eq!(table.rows[0].value("text"), Some("I love this!"));
        assert_eq!(table.rows[1].value("text"), Some("I hate this."));
    }

    #[test]
    fn test_rows_keep_file_order() {
        let content = "text\nfirst\nsecond\nthird";
        let table = CsvReader::new().parse_content(content).unwrap();

        let values: Vec<_> = table.rows.iter().map(|r| r.value("text").unwrap()).collect();
        assert_eq!(values, vec!["first", "second", "third"]);
        assert_eq!(table.rows[2].index, 2);
    }

    #[test]
    fn test_values_are_trimmed() {
        let content = "text\n  padded  ";
        let table = CsvReader::new().parse_content(content).unwrap();
        assert_eq!(table.rows[0].value("text"), Some("padded"));
    }

    #[test]
    fn test_short_row_padded_with_empty() {
        let content = "id,text\n1";
        let table = CsvReader::new().parse_content(content).unwrap();
        assert_eq!(table.rows[0].value("text"), Some(""));
    }

    #[test]
    fn test_custom_delimiter() {
        let content = "id;text\n1;hello";
        let table = CsvReader::new()
            .with_delimiter(b';')
            .parse_content(content)
            .unwrap();
        assert_eq!(table.rows[0].value("text"), Some("hello"));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = CsvReader::new()
            .read_file(Path::new("/nonexistent/tweets.csv"))
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_read_file_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tweets.csv");
        std::fs::write(&path, "text\ncafé").unwrap();

        let table = CsvReader::new().read_file(&path).unwrap();
        assert_eq!(table.rows[0].value("text"), Some("café"));
    }

    #[test]
    fn test_read_file_windows_1252_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tweets.csv");

        // "café" with a Windows-1252 encoded é (0xE9), invalid as UTF-8
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"text\ncaf\xe9").unwrap();
        drop(file);

        let table = CsvReader::new().read_file(&path).unwrap();
        assert_eq!(table.rows[0].value("text"), Some("café"));
    }
}
