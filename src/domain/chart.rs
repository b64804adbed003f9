// Chart figure models handed to the rendering collaborator
use chrono::NaiveDate;

use crate::domain::display::{DisplayMode, ScaleMode};
use crate::domain::units::{AxisTicks, log_axis_ticks, log_color_ticks};

/// Byte-axis configuration. Linear mode abbreviates tick numbers and
/// appends `unit_suffix`; logarithmic mode places the fixed `ticks` instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueAxis {
    pub title: String,
    pub scale: ScaleMode,
    pub unit_suffix: String,
    pub ticks: Option<AxisTicks>,
}

impl ValueAxis {
    pub fn bytes_axis(mode: DisplayMode, tick_count: usize) -> Self {
        let ticks = match mode.scale {
            ScaleMode::Logarithmic => Some(log_axis_ticks(mode.unit_base, tick_count)),
            ScaleMode::Linear => None,
        };
        Self {
            title: mode.scale.axis_title().to_string(),
            scale: mode.scale,
            unit_suffix: mode.unit_base.byte_suffix().to_string(),
            ticks,
        }
    }

    /// Color axis whose values are log10-transformed under logarithmic
    /// scale, so its ticks live in log10 space too.
    pub fn color_axis(mode: DisplayMode, tick_count: usize) -> Self {
        let ticks = match mode.scale {
            ScaleMode::Logarithmic => Some(log_color_ticks(mode.unit_base, tick_count)),
            ScaleMode::Linear => None,
        };
        Self {
            title: mode.scale.axis_title().to_string(),
            scale: mode.scale,
            unit_suffix: mode.unit_base.byte_suffix().to_string(),
            ticks,
        }
    }
}

/// Bytes-per-day line chart. `skipped_dates` lists calendar days inside the
/// plotted range with no traffic, rendered as axis range breaks; populated
/// only under cumulative accumulation.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTrafficFigure {
    pub title: String,
    pub dates: Vec<NaiveDate>,
    pub values: Vec<u64>,
    pub hover_texts: Vec<String>,
    pub skipped_dates: Vec<NaiveDate>,
    pub value_axis: ValueAxis,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssetTrafficFigure {
    pub title: String,
    pub asset_names: Vec<String>,
    pub values: Vec<u64>,
    pub hover_texts: Vec<String>,
    pub value_axis: ValueAxis,
}

/// Bytes-per-region heat map. `color_values` are raw bytes in linear mode
/// and log10(bytes clamped to 1) in logarithmic mode.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionTrafficFigure {
    pub title: String,
    pub latitudes: Vec<f64>,
    pub longitudes: Vec<f64>,
    pub color_values: Vec<f64>,
    pub marker_sizes: Vec<f64>,
    pub hover_texts: Vec<String>,
    pub colorbar: ValueAxis,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    DailyTraffic(DailyTrafficFigure),
    AssetTraffic(AssetTrafficFigure),
    RegionTraffic(RegionTrafficFigure),
}
