use sqlx::{PgPool, Postgres, Transaction};

use crate::domain::error::{AppError, Result};
use crate::domain::tweet::ScoredTweet;

pub struct TweetRepository {
    pool: PgPool,
}

impl TweetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the destination table if absent. Safe to invoke every run.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS tweets (
                id SERIAL PRIMARY KEY,
                tweet_text TEXT,
                polarity REAL,
                subjectivity REAL
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to create table: {}", e)))?;

        Ok(())
    }

    /// Open the transaction all of a run's inserts are staged in
    pub async fn begin_batch(&self) -> Result<TweetInsertBatch> {
        let tx = self.pool.begin().await.map_err(|e| {
            AppError::DatabaseError(format!("Failed to begin transaction: {}", e))
        })?;

        Ok(TweetInsertBatch { tx, staged: 0 })
    }
}

/// Inserts staged within one transaction. `commit` persists all of them;
/// dropping the batch uncommitted rolls every staged insert back.
pub struct TweetInsertBatch {
    tx: Transaction<'static, Postgres>,
    staged: u64,
}

impl TweetInsertBatch {
    /// Stage one record with a parameterized statement
    pub async fn insert(&mut self, tweet: &ScoredTweet) -> Result<()> {
        sqlx::query("INSERT INTO tweets (tweet_text, polarity, subjectivity) VALUES ($1, $2, $3)")
            .bind(&tweet.text)
            .bind(tweet.polarity)
            .bind(tweet.subjectivity)
            .execute(&mut *self.tx)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to insert tweet: {}", e)))?;

        self.staged += 1;
        Ok(())
    }

    /// Number of records staged so far
    pub fn staged(&self) -> u64 {
        self.staged
    }

    /// Commit all staged inserts
    pub async fn commit(self) -> Result<u64> {
        self.tx.commit().await.map_err(|e| {
            AppError::DatabaseError(format!("Failed to commit transaction: {}", e))
        })?;

        Ok(self.staged)
    }
}
