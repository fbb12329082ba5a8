//! HTML extraction for results pages and listing detail pages.
//!
//! Selectors mirror the listing site's markup; when the site changes its
//! generated class names only the constants below need updating.

use crate::core::normalize::{clean_price, find_flat_type, parse_flat_area, parse_house_area};
use crate::domain::model::{
    EstateType, ListingDetails, ListingRecord, PropertyKind, NO_IMAGE, UNKNOWN_LOCATION,
};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

pub const LISTING_ITEM_SELECTOR: &str = "ul > li";
/// The site uses the same class for the title and the location line.
pub const TITLE_SELECTOR: &str = "p.css-d7upve";
pub const PRICE_SELECTOR: &str = "p.css-ca9wwd";
pub const LINK_SELECTOR: &str = "a[href]";
pub const IMAGE_SELECTOR: &str = "img.css-1q0j11k";
pub const BREADCRUMB_SELECTOR: &str = "#userweb-map-layout-scroll-content nav ol li a";
pub const ENERGY_RANK_SELECTOR: &str = "#userweb-map-layout-scroll-content p.css-1sdpd03";

// Breadcrumb positions on the detail page.
const REGION_CRUMB: usize = 3;
const DISTRICT_CRUMB: usize = 4;
const CITY_CRUMB: usize = 5;

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {:?}: {:?}", css, e))
}

static LISTING_ITEM: Lazy<Selector> = Lazy::new(|| selector(LISTING_ITEM_SELECTOR));
static TITLE: Lazy<Selector> = Lazy::new(|| selector(TITLE_SELECTOR));
static PRICE: Lazy<Selector> = Lazy::new(|| selector(PRICE_SELECTOR));
static LINK: Lazy<Selector> = Lazy::new(|| selector(LINK_SELECTOR));
static IMAGE: Lazy<Selector> = Lazy::new(|| selector(IMAGE_SELECTOR));
static BREADCRUMB: Lazy<Selector> = Lazy::new(|| selector(BREADCRUMB_SELECTOR));
static ENERGY_RANK: Lazy<Selector> = Lazy::new(|| selector(ENERGY_RANK_SELECTOR));

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Parses a results page and extracts every complete listing in document order.
pub fn parse_listing_page(html: &str, estate_type: EstateType, origin: &str) -> Vec<ListingRecord> {
    let document = Html::parse_document(html);
    document
        .select(&LISTING_ITEM)
        .filter_map(|item| extract_listing(item, estate_type, origin))
        .collect()
}

/// Builds a record from one listing fragment, or `None` when the title,
/// location line, price or link is missing.
pub fn extract_listing(
    fragment: ElementRef<'_>,
    estate_type: EstateType,
    origin: &str,
) -> Option<ListingRecord> {
    let labels: Vec<ElementRef<'_>> = fragment.select(&TITLE).collect();
    let price_tag = fragment.select(&PRICE).next();
    let link_href = fragment
        .select(&LINK)
        .next()
        .and_then(|a| a.value().attr("href"));

    let (Some(title_tag), Some(price_tag), Some(href)) = (labels.first(), price_tag, link_href)
    else {
        tracing::debug!("Listing element missing required fields; skipping listing");
        return None;
    };

    let title = element_text(*title_tag);
    // Second element sharing the title class is the location line.
    let location = labels
        .get(1)
        .map(|tag| element_text(*tag))
        .unwrap_or_else(|| UNKNOWN_LOCATION.to_string());
    let price = clean_price(&element_text(price_tag));

    let url = if is_absolute(href) {
        href.to_string()
    } else {
        format!("{}{}", origin, href)
    };

    let image = fragment
        .select(&IMAGE)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(|src| {
            if is_absolute(src) {
                src.to_string()
            } else {
                format!("https:{}", src)
            }
        })
        .unwrap_or_else(|| NO_IMAGE.to_string());

    let record = match estate_type {
        EstateType::House => build_house(title, location, price, url, image),
        EstateType::Flat => build_flat(title, location, price, url, image),
    };
    if let Ok(json) = serde_json::to_string(&record) {
        tracing::debug!("Parsed listing: {}", json);
    }
    Some(record)
}

fn build_house(
    title: String,
    location: String,
    price: Option<u64>,
    url: String,
    image: String,
) -> ListingRecord {
    let (usable_area, land_size) = parse_house_area(&title);
    ListingRecord {
        title,
        kind: PropertyKind::House { land_size },
        usable_area,
        location,
        price,
        url,
        image,
        details: ListingDetails::default(),
    }
}

fn build_flat(
    title: String,
    location: String,
    price: Option<u64>,
    url: String,
    image: String,
) -> ListingRecord {
    let usable_area = parse_flat_area(&title);
    let flat_type = find_flat_type(&title).map(str::to_string);
    ListingRecord {
        title,
        kind: PropertyKind::Flat { flat_type },
        usable_area,
        location,
        price,
        url,
        image,
        details: ListingDetails::default(),
    }
}

/// Reads breadcrumb location parts and the energy rating from a detail page.
pub fn parse_detail_page(html: &str) -> ListingDetails {
    let document = Html::parse_document(html);

    let crumbs: Vec<String> = document.select(&BREADCRUMB).map(element_text).collect();
    let energy_rank = document.select(&ENERGY_RANK).next().map(element_text);

    ListingDetails {
        region: crumbs.get(REGION_CRUMB).cloned(),
        district: crumbs.get(DISTRICT_CRUMB).cloned(),
        city: crumbs.get(CITY_CRUMB).cloned(),
        energy_rank,
    }
}
