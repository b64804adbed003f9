// Repository trait for fetching the precomputed summary files
use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::usage::{AssetUsage, DailyUsage, RegionCoordinate, RegionUsage, UsageTotals};
use crate::error::PipelineError;

#[async_trait]
pub trait SummaryRepository: Send + Sync {
    async fn fetch_archive_totals(&self) -> Result<UsageTotals, PipelineError>;

    async fn fetch_all_dataset_totals(&self)
    -> Result<HashMap<String, UsageTotals>, PipelineError>;

    async fn fetch_region_coordinates(&self)
    -> Result<HashMap<String, RegionCoordinate>, PipelineError>;

    /// Bytes sent per day with observed traffic, in file order.
    async fn fetch_daily_summary(&self, dataset_id: &str)
    -> Result<Vec<DailyUsage>, PipelineError>;

    /// Only defined for per-dataset identifiers; the aggregate view has no
    /// per-asset breakdown.
    async fn fetch_asset_summary(&self, dataset_id: &str)
    -> Result<Vec<AssetUsage>, PipelineError>;

    async fn fetch_region_summary(&self, dataset_id: &str)
    -> Result<Vec<RegionUsage>, PipelineError>;
}
