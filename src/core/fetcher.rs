use crate::core::extract::{parse_detail_page, parse_listing_page};
use crate::domain::model::{EstateType, ListingDetails, ListingRecord, RegionScope};
use crate::domain::ports::PageSource;
use crate::utils::error::{Result, ScrapeError};
use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://www.sreality.cz";

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36";

/// Results page URL; the region segment is left out for country-wide searches.
pub fn page_url(base_url: &str, estate_type: EstateType, region: RegionScope, page: u32) -> String {
    match region {
        RegionScope::All => format!(
            "{}/hledani/prodej/{}?page={}",
            base_url,
            estate_type.slug(),
            page
        ),
        RegionScope::Only(region) => format!(
            "{}/hledani/prodej/{}/{}?page={}",
            base_url,
            estate_type.slug(),
            region.slug(),
            page
        ),
    }
}

pub fn build_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));

    let client = Client::builder().default_headers(headers).build()?;
    Ok(client)
}

/// Fetches results pages (and optionally detail pages) from the listing site.
pub struct ListingFetcher {
    client: Client,
    base_url: String,
    estate_type: EstateType,
    region: RegionScope,
    fetch_details: bool,
}

impl ListingFetcher {
    pub fn new(
        client: Client,
        base_url: &str,
        estate_type: EstateType,
        region: RegionScope,
        fetch_details: bool,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            estate_type,
            region,
            fetch_details,
        }
    }

    async fn fetch_html(&self, url: &str) -> Result<String> {
        tracing::debug!(url, "Sending GET request");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!(url, status = %status, "Received response");

        if !status.is_success() {
            return Err(ScrapeError::FetchFailed {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    /// Detail page data for one listing. Failures leave every field empty.
    pub async fn enrich(&self, url: &str) -> ListingDetails {
        tracing::debug!(url, "Extracting listing details");
        match self.fetch_html(url).await {
            Ok(html) => {
                let details = parse_detail_page(&html);
                tracing::debug!(url, ?details, "Extracted listing details");
                details
            }
            Err(ScrapeError::FetchFailed { status, .. }) => {
                tracing::error!(
                    url,
                    status,
                    "Failed to retrieve listing details"
                );
                ListingDetails::default()
            }
            Err(e) => {
                tracing::error!(url, error = %e, "Failed to retrieve listing details");
                ListingDetails::default()
            }
        }
    }
}

#[async_trait]
impl PageSource for ListingFetcher {
    async fn fetch_page(&self, page: u32) -> Result<Vec<ListingRecord>> {
        let url = page_url(&self.base_url, self.estate_type, self.region, page);
        tracing::info!(
            page,
            estate_type = %self.estate_type,
            region = %self.region,
            "Fetching listings page"
        );

        let html = match self.fetch_html(&url).await {
            Ok(html) => html,
            Err(ScrapeError::FetchFailed { status, .. }) => {
                tracing::error!(url = %url, status, "Failed to retrieve listings page");
                println!("Failed to retrieve data (Status Code: {})", status);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        // 解析完成後才進行下一個 await
        let mut listings = parse_listing_page(&html, self.estate_type, &self.base_url);

        if self.fetch_details {
            for listing in listings.iter_mut() {
                listing.details = self.enrich(&listing.url).await;
            }
        }

        tracing::info!(page, count = listings.len(), "Page fetched");
        Ok(listings)
    }
}
