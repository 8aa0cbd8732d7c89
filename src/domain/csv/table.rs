use serde::{Deserialize, Serialize};

use super::CsvRow;

/// Column names accepted as the tweet-text column, in preference order.
pub const TEXT_COLUMN_NAMES: [&str; 2] = ["text", "tweet"];

/// A parsed CSV file: cleaned headers in column order plus all rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<CsvRow>,
}

impl CsvTable {
    pub fn new(headers: Vec<String>, rows: Vec<CsvRow>) -> Self {
        Self { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Locate the text-bearing column among the accepted names.
    ///
    /// Returns the first accepted name present in the headers, so a file
    /// carrying both `text` and `tweet` columns resolves to `text`.
    pub fn text_column(&self) -> Option<&'static str> {
        TEXT_COLUMN_NAMES
            .iter()
            .find(|name| self.headers.iter().any(|h| h == *name))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with_headers(headers: &[&str]) -> CsvTable {
        CsvTable::new(headers.iter().map(|h| h.to_string()).collect(), Vec::new())
    }

    #[test]
    fn test_text_column_found() {
        assert_eq!(
            table_with_headers(&["id", "text", "date"]).text_column(),
            Some("text")
        );
        assert_eq!(
            table_with_headers(&["id", "tweet"]).text_column(),
            Some("tweet")
        );
    }

    #[test]
    fn test_text_column_preference_order() {
        // Both present: "text" wins
        assert_eq!(
            table_with_headers(&["tweet", "text"]).text_column(),
            Some("text")
        );
    }

    #[test]
    fn test_text_column_missing() {
        assert_eq!(table_with_headers(&["id", "body"]).text_column(), None);
        assert_eq!(table_with_headers(&[]).text_column(), None);
    }
}
