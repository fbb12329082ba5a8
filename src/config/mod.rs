pub mod cli;

use crate::core::fetcher::DEFAULT_BASE_URL;
use crate::core::orchestrator::DEFAULT_CONCURRENCY;
use crate::core::ConfigProvider;
use crate::domain::model::{EstateType, RegionScope, ScrapeRequest, ScrapeStrategy};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_args, validate_path, validate_positive_number, validate_url, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "sreality-scraper")]
#[command(about = "Scrape property listings from sreality.cz into a CSV file")]
#[command(after_help = "Examples:\n  sreality-scraper byty praha 3\n  sreality-scraper domy all 5")]
pub struct CliConfig {
    /// Estate type: byty (flats) or domy (houses)
    pub estate_type: String,

    /// Region slug (e.g. praha, jihomoravsky-kraj) or 'all'
    pub region: String,

    /// Number of result pages to scrape
    pub pages: String,

    #[arg(long, default_value = ".")]
    pub output_path: String,

    #[arg(long, default_value_t = DEFAULT_CONCURRENCY, help = "Pages fetched at the same time")]
    pub concurrency: usize,

    #[arg(long, help = "Fetch pages one by one and stop at the first empty page")]
    pub sequential: bool,

    #[arg(long, help = "Skip fetching listing detail pages")]
    pub no_details: bool,

    #[arg(long, default_value = DEFAULT_BASE_URL, help = "Origin of the listing site")]
    pub base_url: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.checked_request().map(|_| ())
    }
}

impl CliConfig {
    fn checked_request(&self) -> Result<ScrapeRequest> {
        let request = validate_args(&self.estate_type, &self.region, &self.pages)?;
        validate_url("base_url", &self.base_url)?;
        validate_path("output_path", &self.output_path)?;
        validate_positive_number("concurrency", self.concurrency, 1)?;
        Ok(request)
    }

    /// Resolves the command line into run settings, failing the same way
    /// `validate` does.
    pub fn into_settings(self) -> Result<ScrapeSettings> {
        let request = self.checked_request()?;

        Ok(ScrapeSettings {
            request,
            strategy: if self.sequential {
                ScrapeStrategy::Sequential
            } else {
                ScrapeStrategy::Concurrent
            },
            concurrency: self.concurrency,
            fetch_details: !self.no_details,
            base_url: self.base_url,
            output_path: self.output_path,
        })
    }
}

/// Validated settings for one scrape run.
#[derive(Debug, Clone)]
pub struct ScrapeSettings {
    pub request: ScrapeRequest,
    pub strategy: ScrapeStrategy,
    pub concurrency: usize,
    pub fetch_details: bool,
    pub base_url: String,
    pub output_path: String,
}

impl ConfigProvider for ScrapeSettings {
    fn estate_type(&self) -> EstateType {
        self.request.estate_type
    }

    fn region(&self) -> RegionScope {
        self.request.region
    }

    fn pages(&self) -> u32 {
        self.request.pages
    }

    fn concurrency(&self) -> usize {
        self.concurrency
    }

    fn strategy(&self) -> ScrapeStrategy {
        self.strategy
    }
}
