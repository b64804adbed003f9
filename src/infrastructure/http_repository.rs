// HTTP implementation of the summary repository
use std::collections::HashMap;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::application::summary_repository::SummaryRepository;
use crate::domain::dataset::is_archive;
use crate::domain::usage::{AssetUsage, DailyUsage, RegionCoordinate, RegionUsage, UsageTotals};
use crate::error::PipelineError;
use crate::infrastructure::config::EndpointSettings;
use crate::infrastructure::tsv;

/// Fetches the summary files from their published URLs. The per-identifier
/// TSV files hang off the summaries base; the aggregate view uses the
/// `archive_summary_*` names at the base root.
#[derive(Debug, Clone)]
pub struct HttpSummaryRepository {
    archive_totals_url: String,
    all_dataset_totals_url: String,
    region_coordinates_url: String,
    summaries_base: String,
}

impl HttpSummaryRepository {
    pub fn new(settings: EndpointSettings) -> Self {
        Self {
            archive_totals_url: settings.archive_totals_url,
            all_dataset_totals_url: settings.all_dataset_totals_url,
            region_coordinates_url: settings.region_coordinates_url,
            summaries_base: settings.summaries_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn daily_summary_url(&self, dataset_id: &str) -> String {
        if is_archive(dataset_id) {
            format!("{}/archive_summary_by_day.tsv", self.summaries_base)
        } else {
            format!(
                "{}/{}/dataset_summary_by_day.tsv",
                self.summaries_base,
                urlencoding::encode(dataset_id)
            )
        }
    }

    // No aggregate variant exists for this file; callers skip the fetch
    // for the aggregate identifier.
    fn asset_summary_url(&self, dataset_id: &str) -> String {
        format!(
            "{}/{}/dataset_summary_by_asset.tsv",
            self.summaries_base,
            urlencoding::encode(dataset_id)
        )
    }

    fn region_summary_url(&self, dataset_id: &str) -> String {
        if is_archive(dataset_id) {
            format!("{}/archive_summary_by_region.tsv", self.summaries_base)
        } else {
            format!(
                "{}/{}/dataset_summary_by_region.tsv",
                self.summaries_base,
                urlencoding::encode(dataset_id)
            )
        }
    }

    async fn fetch_text(&self, url: &str) -> Result<String, PipelineError> {
        let client = reqwest::Client::new();
        let response = client
            .get(url)
            .header("Accept", "text/plain, application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PipelineError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.text().await?)
    }

    // Decode from the body text rather than response.json() so a payload
    // that does not match the record shape reports as a decode failure,
    // not a transport one.
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, PipelineError> {
        let body = self.fetch_text(url).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl SummaryRepository for HttpSummaryRepository {
    async fn fetch_archive_totals(&self) -> Result<UsageTotals, PipelineError> {
        self.fetch_json(&self.archive_totals_url).await
    }

    async fn fetch_all_dataset_totals(
        &self,
    ) -> Result<HashMap<String, UsageTotals>, PipelineError> {
        self.fetch_json(&self.all_dataset_totals_url).await
    }

    async fn fetch_region_coordinates(
        &self,
    ) -> Result<HashMap<String, RegionCoordinate>, PipelineError> {
        self.fetch_json(&self.region_coordinates_url).await
    }

    async fn fetch_daily_summary(
        &self,
        dataset_id: &str,
    ) -> Result<Vec<DailyUsage>, PipelineError> {
        let body = self.fetch_text(&self.daily_summary_url(dataset_id)).await?;
        tsv::parse_daily_rows(&body)
    }

    async fn fetch_asset_summary(
        &self,
        dataset_id: &str,
    ) -> Result<Vec<AssetUsage>, PipelineError> {
        let body = self.fetch_text(&self.asset_summary_url(dataset_id)).await?;
        tsv::parse_asset_rows(&body)
    }

    async fn fetch_region_summary(
        &self,
        dataset_id: &str,
    ) -> Result<Vec<RegionUsage>, PipelineError> {
        let body = self.fetch_text(&self.region_summary_url(dataset_id)).await?;
        tsv::parse_region_rows(&body)
    }
}
