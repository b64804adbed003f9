// Usage record domain models
use chrono::NaiveDate;
use serde::Deserialize;

/// Totals for one dataset identifier; field names follow the upstream JSON.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UsageTotals {
    pub total_bytes_sent: u64,
    pub number_of_unique_regions: u64,
    pub number_of_unique_countries: u64,
}

/// One day with observed traffic. Days without traffic are absent upstream,
/// so consecutive rows need not be consecutive dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyUsage {
    pub date: NaiveDate,
    pub bytes_sent: u64,
}

impl DailyUsage {
    pub fn new(date: NaiveDate, bytes_sent: u64) -> Self {
        Self { date, bytes_sent }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetUsage {
    pub asset_name: String,
    pub bytes_sent: u64,
}

impl AssetUsage {
    pub fn new(asset_name: String, bytes_sent: u64) -> Self {
        Self { asset_name, bytes_sent }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionUsage {
    pub region_code: String,
    pub bytes_sent: u64,
}

impl RegionUsage {
    pub fn new(region_code: String, bytes_sent: u64) -> Self {
        Self { region_code, bytes_sent }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RegionCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}
