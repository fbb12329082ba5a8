use crate::core::orchestrator::{scrape_concurrent, scrape_sequential};
use crate::core::output::output_filename;
use crate::core::{
    ConfigProvider, ListingRecord, ListingTable, LoadOutcome, PageSource, Pipeline, Storage,
};
use crate::domain::model::ScrapeStrategy;
use crate::utils::error::Result;

pub struct ScrapePipeline<S: Storage, C: ConfigProvider, P: PageSource> {
    storage: S,
    config: C,
    source: P,
}

impl<S: Storage, C: ConfigProvider, P: PageSource> ScrapePipeline<S, C, P> {
    pub fn new(storage: S, config: C, source: P) -> Self {
        Self {
            storage,
            config,
            source,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, P: PageSource> Pipeline for ScrapePipeline<S, C, P> {
    async fn extract(&self) -> Result<Vec<ListingRecord>> {
        let pages = self.config.pages();
        tracing::info!(
            pages,
            estate_type = %self.config.estate_type(),
            region = %self.config.region(),
            strategy = ?self.config.strategy(),
            "Starting to scrape"
        );

        let report = match self.config.strategy() {
            ScrapeStrategy::Sequential => scrape_sequential(&self.source, pages).await,
            ScrapeStrategy::Concurrent => {
                scrape_concurrent(&self.source, pages, self.config.concurrency()).await
            }
        };

        let failed = report.failed_pages();
        if !failed.is_empty() {
            tracing::warn!(?failed, "Some pages could not be scraped");
        }
        println!("Scraped {} listings in total", report.records.len());

        Ok(report.records)
    }

    async fn transform(&self, data: Vec<ListingRecord>) -> Result<ListingTable> {
        let table = ListingTable::from_records(&data);
        tracing::debug!(
            columns = table.headers.len(),
            rows = table.rows.len(),
            "Built listing table"
        );
        Ok(table)
    }

    async fn load(&self, table: ListingTable) -> Result<LoadOutcome> {
        if table.is_empty() {
            tracing::warn!("No data found to save");
            return Ok(LoadOutcome::NoData);
        }

        let filename = output_filename(
            self.config.estate_type(),
            self.config.region(),
            &chrono::Local::now(),
        );
        let data = table.to_csv_bytes()?;

        tracing::debug!("Writing CSV file ({} bytes) to storage", data.len());
        let path = self.storage.write_file(&filename, &data).await?;

        tracing::info!(path = %path, rows = table.rows.len(), "Data saved");
        Ok(LoadOutcome::Saved {
            path,
            rows: table.rows.len(),
        })
    }
}
