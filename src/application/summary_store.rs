// In-memory store for the fetched reference datasets
use std::collections::{BTreeMap, HashMap};

use crate::application::summary_repository::SummaryRepository;
use crate::domain::dataset::{ARCHIVE_ID, is_archive};
use crate::domain::usage::{RegionCoordinate, UsageTotals};
use crate::error::PipelineError;

/// Totals and coordinate tables, written during bootstrap and read by
/// every chart pipeline afterwards.
#[derive(Debug, Default)]
pub struct SummaryStore {
    totals: BTreeMap<String, UsageTotals>,
    coordinates: HashMap<String, RegionCoordinate>,
}

impl SummaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registering the same identifier twice keeps the later record.
    pub fn register_totals(&mut self, dataset_id: &str, totals: UsageTotals) {
        self.totals.insert(dataset_id.to_string(), totals);
    }

    pub fn set_coordinates(&mut self, coordinates: HashMap<String, RegionCoordinate>) {
        self.coordinates = coordinates;
    }

    /// A miss here is user-visible: the totals banner falls back.
    pub fn totals(&self, dataset_id: &str) -> Option<&UsageTotals> {
        self.totals.get(dataset_id)
    }

    /// A miss here is tolerated: the geo join drops the row silently.
    pub fn coordinate(&self, region_code: &str) -> Option<&RegionCoordinate> {
        self.coordinates.get(region_code)
    }

    /// Every known identifier, aggregate view first (listed even when its
    /// totals could not be fetched), then per-dataset ids in sorted order.
    pub fn dataset_ids(&self) -> Vec<String> {
        let mut ids = vec![ARCHIVE_ID.to_string()];
        ids.extend(self.totals.keys().filter(|id| !is_archive(id)).cloned());
        ids
    }
}

/// Populate a store from the three reference fetches. The aggregate totals
/// and the coordinate table may fail; the per-dataset totals index is
/// required, since without it there is no identifier set.
pub async fn bootstrap(repository: &dyn SummaryRepository) -> Result<SummaryStore, PipelineError> {
    let mut store = SummaryStore::new();

    match repository.fetch_archive_totals().await {
        Ok(totals) => store.register_totals(ARCHIVE_ID, totals),
        Err(error) => tracing::warn!("failed to fetch archive totals: {error}"),
    }

    let all_totals = repository.fetch_all_dataset_totals().await?;
    for (dataset_id, totals) in all_totals {
        store.register_totals(&dataset_id, totals);
    }

    match repository.fetch_region_coordinates().await {
        Ok(coordinates) => store.set_coordinates(coordinates),
        Err(error) => tracing::warn!("failed to fetch region coordinates: {error}"),
    }

    Ok(store)
}
