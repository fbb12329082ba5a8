#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig, ScrapeSettings};

pub use crate::core::{engine::ScrapeEngine, fetcher::ListingFetcher, pipeline::ScrapePipeline};
pub use domain::model::{EstateType, ListingRecord, LoadOutcome, Region, RegionScope};
pub use utils::error::{Result, ScrapeError};
