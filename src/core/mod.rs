pub mod engine;
pub mod extract;
pub mod fetcher;
pub mod normalize;
pub mod orchestrator;
pub mod output;
pub mod pipeline;

pub use crate::domain::model::{ListingRecord, ListingTable, LoadOutcome};
pub use crate::domain::ports::{ConfigProvider, PageSource, Pipeline, Storage};
pub use crate::utils::error::Result;
