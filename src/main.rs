use anyhow::Context;
use clap::Parser;
use sreality_scraper::core::fetcher::build_client;
use sreality_scraper::utils::{logger, validation::Validate};
use sreality_scraper::{
    CliConfig, ListingFetcher, LoadOutcome, LocalStorage, ScrapeEngine, ScrapePipeline,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting sreality-scraper");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證參數，失敗時不發出任何請求
    if let Err(e) = config.validate() {
        tracing::error!("❌ Argument validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let settings = config
        .into_settings()
        .context("validated arguments failed to resolve")?;

    println!(
        "Scraping {} pages of {} in {}...",
        settings.request.pages, settings.request.estate_type, settings.request.region
    );

    let client = build_client().context("failed to build HTTP client")?;
    let fetcher = ListingFetcher::new(
        client,
        &settings.base_url,
        settings.request.estate_type,
        settings.request.region,
        settings.fetch_details,
    );
    let storage = LocalStorage::new(settings.output_path.clone());
    let pipeline = ScrapePipeline::new(storage, settings, fetcher);
    let engine = ScrapeEngine::new(pipeline);

    match engine.run().await {
        Ok(LoadOutcome::Saved { path, rows }) => {
            tracing::info!("✅ Saved {} listings", rows);
            println!("✅ Data saved to {}", path);
        }
        Ok(LoadOutcome::NoData) => {
            tracing::warn!("No data found to save");
            println!("❌ No data found.");
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("❌ Scrape failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
