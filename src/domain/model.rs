use serde::Serialize;
use std::fmt;

pub const COL_TITLE: &str = "Title";
pub const COL_PROPERTY_TYPE: &str = "Property Type";
pub const COL_USABLE_AREA: &str = "Usable Area (m²)";
pub const COL_LAND_SIZE: &str = "Land Size (m²)";
pub const COL_FLAT_TYPE: &str = "Flat Type";
pub const COL_LOCATION: &str = "Location";
pub const COL_REGION: &str = "Region";
pub const COL_DISTRICT: &str = "District";
pub const COL_CITY: &str = "City";
pub const COL_ENERGY_RANK: &str = "Energy Rank";
pub const COL_PRICE: &str = "Price (CZK)";
pub const COL_URL: &str = "URL";
pub const COL_IMAGE: &str = "Image";

pub const UNKNOWN_LOCATION: &str = "Unknown";
pub const NO_IMAGE: &str = "No image";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EstateType {
    Flat,
    House,
}

impl EstateType {
    pub const ALL: [EstateType; 2] = [EstateType::Flat, EstateType::House];

    /// Path segment used by the listing site and accepted on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            EstateType::Flat => "byty",
            EstateType::House => "domy",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.slug() == slug)
    }
}

impl fmt::Display for EstateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Region {
    Praha,
    Jihocesky,
    Jihomoravsky,
    Karlovarsky,
    Kralovehradecky,
    Liberecky,
    Moravskoslezsky,
    Olomoucky,
    Pardubicky,
    Plzensky,
    Stredocesky,
    Ustecky,
    Vysocina,
    Zlinsky,
}

impl Region {
    pub const ALL: [Region; 14] = [
        Region::Praha,
        Region::Jihocesky,
        Region::Jihomoravsky,
        Region::Karlovarsky,
        Region::Kralovehradecky,
        Region::Liberecky,
        Region::Moravskoslezsky,
        Region::Olomoucky,
        Region::Pardubicky,
        Region::Plzensky,
        Region::Stredocesky,
        Region::Ustecky,
        Region::Vysocina,
        Region::Zlinsky,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Region::Praha => "praha",
            Region::Jihocesky => "jihocesky-kraj",
            Region::Jihomoravsky => "jihomoravsky-kraj",
            Region::Karlovarsky => "karlovarsky-kraj",
            Region::Kralovehradecky => "kralovehradecky-kraj",
            Region::Liberecky => "liberecky-kraj",
            Region::Moravskoslezsky => "moravskoslezsky-kraj",
            Region::Olomoucky => "olomoucky-kraj",
            Region::Pardubicky => "pardubicky-kraj",
            Region::Plzensky => "plzensky-kraj",
            Region::Stredocesky => "stredocesky-kraj",
            Region::Ustecky => "ustecky-kraj",
            Region::Vysocina => "vysocina",
            Region::Zlinsky => "zlinsky-kraj",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.slug() == slug)
    }
}

/// Either one region or the whole country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RegionScope {
    All,
    Only(Region),
}

impl RegionScope {
    pub const ALL_SLUG: &'static str = "all";

    pub fn slug(&self) -> &'static str {
        match self {
            RegionScope::All => Self::ALL_SLUG,
            RegionScope::Only(region) => region.slug(),
        }
    }
}

impl fmt::Display for RegionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeRequest {
    pub estate_type: EstateType,
    pub region: RegionScope,
    pub pages: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrapeStrategy {
    /// Pages in order, stopping at the first page without listings.
    Sequential,
    /// All pages through a bounded pool, failures isolated per page.
    #[default]
    Concurrent,
}

/// Data only available on a listing's detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListingDetails {
    pub region: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub energy_rank: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PropertyKind {
    House { land_size: Option<u32> },
    Flat { flat_type: Option<String> },
}

impl PropertyKind {
    pub fn label(&self) -> &'static str {
        match self {
            PropertyKind::House { .. } => "House",
            PropertyKind::Flat { .. } => "Flat",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRecord {
    pub title: String,
    pub kind: PropertyKind,
    pub usable_area: Option<u32>,
    pub location: String,
    pub price: Option<u64>,
    pub url: String,
    pub image: String,
    pub details: ListingDetails,
}

impl ListingRecord {
    /// Named output cells in column order. Kind-specific columns only appear
    /// for the kind that owns them.
    pub fn fields(&self) -> Vec<(&'static str, Option<String>)> {
        let mut fields = vec![
            (COL_TITLE, Some(self.title.clone())),
            (COL_PROPERTY_TYPE, Some(self.kind.label().to_string())),
            (COL_USABLE_AREA, self.usable_area.map(|v| v.to_string())),
        ];

        match &self.kind {
            PropertyKind::House { land_size } => {
                fields.push((COL_LAND_SIZE, land_size.map(|v| v.to_string())));
            }
            PropertyKind::Flat { flat_type } => {
                fields.push((COL_FLAT_TYPE, flat_type.clone()));
            }
        }

        fields.extend([
            (COL_LOCATION, Some(self.location.clone())),
            (COL_REGION, self.details.region.clone()),
            (COL_DISTRICT, self.details.district.clone()),
            (COL_CITY, self.details.city.clone()),
            (COL_ENERGY_RANK, self.details.energy_rank.clone()),
            (COL_PRICE, self.price.map(|v| v.to_string())),
            (COL_URL, Some(self.url.clone())),
            (COL_IMAGE, Some(self.image.clone())),
        ]);
        fields
    }
}

/// Result of one page's unit of work.
#[derive(Debug)]
pub enum PageOutcome {
    Listings(Vec<ListingRecord>),
    Empty,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStatus {
    Scraped(usize),
    Empty,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReport {
    pub page: u32,
    pub status: PageStatus,
}

#[derive(Debug, Default)]
pub struct ScrapeReport {
    pub records: Vec<ListingRecord>,
    pub pages: Vec<PageReport>,
}

impl ScrapeReport {
    pub fn failed_pages(&self) -> Vec<u32> {
        self.pages
            .iter()
            .filter(|p| matches!(p.status, PageStatus::Failed(_)))
            .map(|p| p.page)
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListingTable {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Saved { path: String, rows: usize },
    NoData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_round_trip_through_lookup() {
        for region in Region::ALL {
            assert_eq!(Region::from_slug(region.slug()), Some(region));
        }
        assert_eq!(EstateType::from_slug("byty"), Some(EstateType::Flat));
        assert_eq!(EstateType::from_slug("domy"), Some(EstateType::House));
        assert_eq!(EstateType::from_slug("pozemky"), None);
        assert_eq!(RegionScope::All.slug(), "all");
    }

    #[test]
    fn test_house_fields_carry_land_size_only() {
        let record = ListingRecord {
            title: "Prodej rodinného domu 120 m², pozemek 450 m²".to_string(),
            kind: PropertyKind::House {
                land_size: Some(450),
            },
            usable_area: Some(120),
            location: "Brno".to_string(),
            price: None,
            url: "https://www.sreality.cz/detail/1".to_string(),
            image: NO_IMAGE.to_string(),
            details: ListingDetails::default(),
        };

        let fields = record.fields();
        let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        assert!(names.contains(&COL_LAND_SIZE));
        assert!(!names.contains(&COL_FLAT_TYPE));
        assert_eq!(names.len(), 12);

        let price = fields.iter().find(|(name, _)| *name == COL_PRICE).unwrap();
        assert_eq!(price.1, None);
    }
}
