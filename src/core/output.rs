use crate::domain::model::{EstateType, ListingRecord, ListingTable, RegionScope};
use crate::utils::error::{Result, ScrapeError};
use chrono::{DateTime, TimeZone};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

impl ListingTable {
    /// Header is the union of every record's columns, in order of first
    /// appearance. Columns a record doesn't have are left empty.
    pub fn from_records(records: &[ListingRecord]) -> Self {
        let mut headers: Vec<&'static str> = Vec::new();
        let rows_fields: Vec<Vec<(&'static str, Option<String>)>> =
            records.iter().map(ListingRecord::fields).collect();

        for fields in &rows_fields {
            for (name, _) in fields {
                if !headers.contains(name) {
                    headers.push(*name);
                }
            }
        }

        let rows = rows_fields
            .into_iter()
            .map(|fields| {
                headers
                    .iter()
                    .map(|header| {
                        fields
                            .iter()
                            .find(|(name, _)| name == header)
                            .and_then(|(_, value)| value.clone())
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();

        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_csv_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer
            .into_inner()
            .map_err(|e| ScrapeError::Io(e.into_error()))
    }
}

pub fn output_filename<Tz>(
    estate_type: EstateType,
    region: RegionScope,
    generated_at: &DateTime<Tz>,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "sreality_{}_{}_{}.csv",
        estate_type.slug(),
        region.slug(),
        generated_at.format(TIMESTAMP_FORMAT)
    )
}
