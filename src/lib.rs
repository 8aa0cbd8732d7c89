pub mod application;
pub mod domain;
pub mod infrastructure;

use std::path::Path;

use tracing::info;

use crate::application::PipelineUseCase;
use crate::domain::error::Result;
use crate::infrastructure::config::DbConfig;
use crate::infrastructure::db::{self, TweetRepository};

/// Connect, run the pipeline, and release the connection on every exit path.
pub async fn run(config: &DbConfig, csv_path: &Path) -> Result<u64> {
    info!("connecting to the PostgreSQL database");
    let pool = db::connect(config).await?;
    info!("connection successful");

    let pipeline = PipelineUseCase::new(TweetRepository::new(pool.clone()));
    let outcome = pipeline.run(csv_path).await;

    // Released on success and failure alike
    pool.close().await;
    info!("database connection closed");

    outcome
}
