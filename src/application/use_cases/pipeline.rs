use std::path::Path;

use tracing::info;

use crate::domain::error::{AppError, Result};
use crate::domain::tweet::ScoredTweet;
use crate::infrastructure::csv::CsvReader;
use crate::infrastructure::db::TweetRepository;
use crate::infrastructure::sentiment::SentimentAnalyzer;

/// The ETL row processor: ensure the destination table, read the CSV, score
/// each row in file order, stage one insert per row, commit once at the end.
pub struct PipelineUseCase {
    repository: TweetRepository,
    analyzer: SentimentAnalyzer,
    reader: CsvReader,
}

impl PipelineUseCase {
    pub fn new(repository: TweetRepository) -> Self {
        Self {
            repository,
            analyzer: SentimentAnalyzer::new(),
            reader: CsvReader::new(),
        }
    }

    /// Run the pipeline against one CSV file. Returns the number of rows
    /// inserted. Any error aborts the remaining run; every staged insert is
    /// rolled back with it.
    pub async fn run(&self, csv_path: &Path) -> Result<u64> {
        self.repository.ensure_schema().await?;
        info!("table 'tweets' is ready");

        info!(path = %csv_path.display(), "reading data");
        let table = self.reader.read_file(csv_path)?;

        let column = table.text_column().ok_or_else(|| {
            AppError::ColumnMissing(
                "could not find a 'text' or 'tweet' column in the CSV".to_string(),
            )
        })?;
        info!(rows = table.len(), column, "data loaded");

        let mut batch = self.repository.begin_batch().await?;
        for row in &table.rows {
            // Missing cells are scored as empty text, not skipped
            let text = row.value(column).unwrap_or_default().to_string();
            let sentiment = self.analyzer.analyze(&text);
            batch.insert(&ScoredTweet::new(text, sentiment)).await?;
        }

        batch.commit().await
    }
}
