use crate::domain::model::{
    EstateType, ListingRecord, ListingTable, LoadOutcome, RegionScope, ScrapeStrategy,
};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    /// Writes `data` under `path` and returns the location it was written to.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn estate_type(&self) -> EstateType;
    fn region(&self) -> RegionScope;
    fn pages(&self) -> u32;
    fn concurrency(&self) -> usize;
    fn strategy(&self) -> ScrapeStrategy;
}

/// Produces the listings of one results page.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, page: u32) -> Result<Vec<ListingRecord>>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<ListingRecord>>;
    async fn transform(&self, data: Vec<ListingRecord>) -> Result<ListingTable>;
    async fn load(&self, table: ListingTable) -> Result<LoadOutcome>;
}
