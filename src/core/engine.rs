use crate::core::{LoadOutcome, Pipeline};
use crate::utils::error::Result;

pub struct ScrapeEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ScrapeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<LoadOutcome> {
        tracing::info!("Starting scrape");

        // Extract
        let listings = self.pipeline.extract().await?;
        tracing::info!("Extracted {} listings", listings.len());

        // Transform
        let table = self.pipeline.transform(listings).await?;
        tracing::info!(
            "Tabulated {} rows across {} columns",
            table.rows.len(),
            table.headers.len()
        );

        // Load
        let outcome = self.pipeline.load(table).await?;
        match &outcome {
            LoadOutcome::Saved { path, .. } => tracing::info!("Output saved to: {}", path),
            LoadOutcome::NoData => tracing::warn!("Nothing to save"),
        }

        Ok(outcome)
    }
}
