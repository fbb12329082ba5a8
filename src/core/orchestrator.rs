use crate::domain::model::{PageOutcome, PageReport, PageStatus, ScrapeReport};
use crate::domain::ports::PageSource;
use futures::{FutureExt, StreamExt};
use std::any::Any;
use std::panic::AssertUnwindSafe;

pub const DEFAULT_CONCURRENCY: usize = 10;

fn panic_reason(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panicked: {}", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("panicked: {}", message)
    } else {
        "panicked".to_string()
    }
}

/// Runs one page's fetch and turns every way it can end into a tagged outcome.
async fn run_page<P: PageSource + ?Sized>(source: &P, page: u32) -> PageOutcome {
    match AssertUnwindSafe(source.fetch_page(page)).catch_unwind().await {
        Ok(Ok(listings)) if listings.is_empty() => PageOutcome::Empty,
        Ok(Ok(listings)) => PageOutcome::Listings(listings),
        Ok(Err(e)) => PageOutcome::Failed(e.to_string()),
        Err(payload) => PageOutcome::Failed(panic_reason(payload)),
    }
}

fn record_outcome(report: &mut ScrapeReport, page: u32, outcome: PageOutcome) {
    let status = match outcome {
        PageOutcome::Listings(listings) => {
            let count = listings.len();
            println!("✅ Page {} scraped successfully ({} listings)", page, count);
            tracing::info!(page, count, "Page scraped successfully");
            report.records.extend(listings);
            PageStatus::Scraped(count)
        }
        PageOutcome::Empty => {
            println!("⚠️ Page {} returned no listings", page);
            tracing::warn!(page, "Page returned no listings");
            PageStatus::Empty
        }
        PageOutcome::Failed(reason) => {
            println!("❌ Error scraping page {}: {}", page, reason);
            tracing::error!(page, error = %reason, "Error scraping page");
            PageStatus::Failed(reason)
        }
    };
    report.pages.push(PageReport { page, status });
}

/// Fetches pages `1..=pages` in order and stops at the first page that yields
/// nothing. A failed page ends the run the same way.
pub async fn scrape_sequential<P: PageSource + ?Sized>(source: &P, pages: u32) -> ScrapeReport {
    let mut report = ScrapeReport::default();

    for page in 1..=pages {
        let outcome = run_page(source, page).await;
        let stop = !matches!(outcome, PageOutcome::Listings(_));
        record_outcome(&mut report, page, outcome);
        if stop {
            tracing::info!(page, "No more listings, stopping");
            break;
        }
    }

    tracing::info!(total = report.records.len(), "Scraping completed");
    report
}

/// Fetches pages `1..=pages` with at most `workers` in flight.
///
/// Results are collected in completion order. One page failing, or panicking,
/// is reported for that page only and never cancels the others.
pub async fn scrape_concurrent<P: PageSource + ?Sized>(
    source: &P,
    pages: u32,
    workers: usize,
) -> ScrapeReport {
    let mut report = ScrapeReport::default();

    let mut completed = futures::stream::iter(1..=pages)
        .map(|page| async move { (page, run_page(source, page).await) })
        .buffer_unordered(workers.max(1));

    while let Some((page, outcome)) = completed.next().await {
        record_outcome(&mut report, page, outcome);
    }

    tracing::info!(total = report.records.len(), "Scraping completed");
    report
}
