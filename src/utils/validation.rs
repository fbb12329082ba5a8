use crate::domain::model::{EstateType, Region, RegionScope, ScrapeRequest};
use crate::utils::error::{Result, ScrapeError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks the three positional arguments and returns them typed.
///
/// Runs before any request is made; every rejection names the offending value
/// and the allowed set.
pub fn validate_args(estate_type: &str, region: &str, pages: &str) -> Result<ScrapeRequest> {
    tracing::debug!(estate_type, region, pages, "Validating arguments");

    let estate = EstateType::from_slug(estate_type).ok_or_else(|| {
        tracing::error!("Invalid estate type: {}", estate_type);
        let allowed: Vec<&str> = EstateType::ALL.iter().map(|t| t.slug()).collect();
        ScrapeError::invalid_argument(format!(
            "Invalid estate type: {}. Allowed: [{}]",
            estate_type,
            allowed.join(", ")
        ))
    })?;

    let scope = if region == RegionScope::ALL_SLUG {
        RegionScope::All
    } else {
        let region_value = Region::from_slug(region).ok_or_else(|| {
            tracing::error!("Invalid region: {}", region);
            let allowed: Vec<&str> = Region::ALL.iter().map(|r| r.slug()).collect();
            ScrapeError::invalid_argument(format!(
                "Invalid region: {}. Allowed: [{}] or '{}'.",
                region,
                allowed.join(", "),
                RegionScope::ALL_SLUG
            ))
        })?;
        RegionScope::Only(region_value)
    };

    let page_count = parse_positive_pages(pages).ok_or_else(|| {
        tracing::error!("Invalid pages parameter: {}", pages);
        ScrapeError::invalid_argument(format!(
            "Pages must be a positive integer, got: {}",
            pages
        ))
    })?;

    tracing::debug!("Arguments validated successfully");
    Ok(ScrapeRequest {
        estate_type: estate,
        region: scope,
        pages: page_count,
    })
}

// Digits only: no sign, no whitespace.
fn parse_positive_pages(pages: &str) -> Option<u32> {
    if pages.is_empty() || !pages.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    pages.parse::<u32>().ok().filter(|n| *n > 0)
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ScrapeError::ConfigError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ScrapeError::ConfigError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ScrapeError::ConfigError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ScrapeError::ConfigError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ScrapeError::ConfigError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(ScrapeError::ConfigError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}
