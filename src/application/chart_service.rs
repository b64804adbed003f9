// Chart service - builds one figure per dashboard slot
use std::sync::Arc;

use crate::application::summary_repository::SummaryRepository;
use crate::application::summary_store::SummaryStore;
use crate::domain::chart::{
    AssetTrafficFigure, DailyTrafficFigure, Figure, RegionTrafficFigure, ValueAxis,
};
use crate::domain::dataset::is_archive;
use crate::domain::display::{AccumulationMode, DisplayMode, ScaleMode};
use crate::domain::series::{cumulative_sum, missing_dates, rank_descending};
use crate::domain::units::format_bytes;
use crate::error::PipelineError;

// Log-axis tick depth per chart: the daily series can reach exabytes over
// time, the per-asset and per-region views stay within terabytes.
const DAILY_LOG_TICKS: usize = 6;
const ASSET_LOG_TICKS: usize = 4;
const GEO_LOG_TICKS: usize = 4;

/// Builds the figure for each chart slot; the display mode is a parameter,
/// so repeated calls with the same inputs build the same figure.
#[derive(Clone)]
pub struct ChartService {
    repository: Arc<dyn SummaryRepository>,
    store: Arc<SummaryStore>,
}

impl ChartService {
    pub fn new(repository: Arc<dyn SummaryRepository>, store: Arc<SummaryStore>) -> Self {
        Self { repository, store }
    }

    /// Bytes-per-day line chart. Under cumulative accumulation the values
    /// become running totals and traffic-free days become range breaks.
    pub async fn daily_traffic(
        &self,
        dataset_id: &str,
        mode: DisplayMode,
    ) -> Result<Figure, PipelineError> {
        let rows = self.repository.fetch_daily_summary(dataset_id).await?;

        let dates: Vec<_> = rows.iter().map(|row| row.date).collect();
        let observed: Vec<u64> = rows.iter().map(|row| row.bytes_sent).collect();
        let values = match mode.accumulation {
            AccumulationMode::Cumulative => cumulative_sum(&observed),
            AccumulationMode::Instantaneous => observed,
        };
        let hover_texts = dates
            .iter()
            .zip(&values)
            .map(|(date, bytes)| format!("{date}<br>{}", format_bytes(*bytes, mode.unit_base)))
            .collect();
        let skipped_dates = match mode.accumulation {
            AccumulationMode::Cumulative => missing_dates(&dates),
            AccumulationMode::Instantaneous => Vec::new(),
        };

        Ok(Figure::DailyTraffic(DailyTrafficFigure {
            title: "Bytes sent per day".to_string(),
            dates,
            values,
            hover_texts,
            skipped_dates,
            value_axis: ValueAxis::bytes_axis(mode, DAILY_LOG_TICKS),
        }))
    }

    /// Bytes-per-asset histogram, ranked by traffic descending. The
    /// aggregate view yields `None` without fetching.
    pub async fn asset_histogram(
        &self,
        dataset_id: &str,
        mode: DisplayMode,
    ) -> Result<Option<Figure>, PipelineError> {
        if is_archive(dataset_id) {
            return Ok(None);
        }

        let rows = self.repository.fetch_asset_summary(dataset_id).await?;
        let mut pairs: Vec<(String, u64)> = rows
            .into_iter()
            .map(|row| (row.asset_name, row.bytes_sent))
            .collect();
        rank_descending(&mut pairs);

        let hover_texts = pairs
            .iter()
            .map(|(name, bytes)| format!("{name}<br>{}", format_bytes(*bytes, mode.unit_base)))
            .collect();
        let (asset_names, values) = pairs.into_iter().unzip();

        Ok(Some(Figure::AssetTraffic(AssetTrafficFigure {
            title: "Bytes sent per asset".to_string(),
            asset_names,
            values,
            hover_texts,
            value_axis: ValueAxis::bytes_axis(mode, ASSET_LOG_TICKS),
        })))
    }

    /// Bytes-per-region heat map. Rows whose region code has no entry in
    /// the coordinate table are dropped from the join.
    pub async fn region_heatmap(
        &self,
        dataset_id: &str,
        mode: DisplayMode,
    ) -> Result<Figure, PipelineError> {
        let rows = self.repository.fetch_region_summary(dataset_id).await?;
        let total_rows = rows.len();

        let mut latitudes = Vec::new();
        let mut longitudes = Vec::new();
        let mut color_values = Vec::new();
        let mut marker_sizes = Vec::new();
        let mut hover_texts = Vec::new();

        for row in rows {
            let Some(coordinate) = self.store.coordinate(&row.region_code) else {
                continue;
            };
            // Clamp to one byte so the log transforms stay finite.
            let clamped = row.bytes_sent.max(1) as f64;
            latitudes.push(coordinate.latitude);
            longitudes.push(coordinate.longitude);
            color_values.push(match mode.scale {
                ScaleMode::Logarithmic => clamped.log10(),
                ScaleMode::Linear => row.bytes_sent as f64,
            });
            marker_sizes.push(clamped.ln() * 0.5);
            hover_texts.push(format!(
                "{}<br>{}",
                row.region_code,
                format_bytes(row.bytes_sent, mode.unit_base)
            ));
        }

        tracing::debug!(
            "joined {} of {} region rows against the coordinate table",
            latitudes.len(),
            total_rows
        );

        Ok(Figure::RegionTraffic(RegionTrafficFigure {
            title: "Bytes Sent by Region".to_string(),
            latitudes,
            longitudes,
            color_values,
            marker_sizes,
            hover_texts,
            colorbar: ValueAxis::color_axis(mode, GEO_LOG_TICKS),
        }))
    }

    /// Totals banner for the selected identifier; a store miss is an error.
    pub fn totals_banner(
        &self,
        dataset_id: &str,
        mode: DisplayMode,
    ) -> Result<String, PipelineError> {
        let totals = self
            .store
            .totals(dataset_id)
            .ok_or_else(|| PipelineError::MissingTotals {
                dataset: dataset_id.to_string(),
            })?;

        Ok(format!(
            "A total of {} was sent from {} regions across {} countries.\n\
             These values are only estimates and are subject to change as \
             additional information becomes available.",
            format_bytes(totals.total_bytes_sent, mode.unit_base),
            totals.number_of_unique_regions,
            totals.number_of_unique_countries,
        ))
    }
}
