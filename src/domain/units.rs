// Byte-count humanization and log-scale axis ticks
use crate::domain::display::UnitBase;

const DECIMAL_SUFFIXES: [&str; 9] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
const BINARY_SUFFIXES: [&str; 9] = ["Bytes", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"];

/// Fixed tick positions paired one-to-one with their labels.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTicks {
    pub positions: Vec<f64>,
    pub labels: Vec<String>,
}

/// Render a byte count as a human-readable string under the given unit
/// base: `0` is always `"0 Bytes"`, otherwise the largest unit whose scaled
/// value is at least 1 is chosen and the value rounded to two decimal
/// places with trailing zeros trimmed (3000 decimal formats as `"3 KB"`).
pub fn format_bytes(bytes: u64, base: UnitBase) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let suffixes = suffixes_for(base);
    let divisor = base.divisor();
    let index = ((bytes as f64).ln() / divisor.ln()).floor() as usize;
    let index = index.min(suffixes.len() - 1);
    let scaled = bytes as f64 / divisor.powi(index as i32);

    format!("{} {}", trim_trailing_zeros(scaled), suffixes[index])
}

/// Tick positions `base^1 ..= base^count` paired with the matching unit
/// labels, for logarithmic byte axes. Binary mode uses 1024-powers so that
/// positions and labels agree.
pub fn log_axis_ticks(base: UnitBase, count: usize) -> AxisTicks {
    let suffixes = suffixes_for(base);
    let count = count.min(suffixes.len() - 1);
    let mut positions = Vec::with_capacity(count);
    let mut labels = Vec::with_capacity(count);
    for power in 1..=count {
        positions.push(base.divisor().powi(power as i32));
        labels.push(suffixes[power].to_string());
    }
    AxisTicks { positions, labels }
}

/// Same ticks in log10 space, for color axes whose values are
/// log10-transformed byte counts.
pub fn log_color_ticks(base: UnitBase, count: usize) -> AxisTicks {
    let mut ticks = log_axis_ticks(base, count);
    for position in &mut ticks.positions {
        *position = position.log10();
    }
    ticks
}

fn suffixes_for(base: UnitBase) -> &'static [&'static str; 9] {
    match base {
        UnitBase::Decimal => &DECIMAL_SUFFIXES,
        UnitBase::Binary => &BINARY_SUFFIXES,
    }
}

fn trim_trailing_zeros(value: f64) -> String {
    let rounded = format!("{value:.2}");
    rounded.trim_end_matches('0').trim_end_matches('.').to_string()
}
