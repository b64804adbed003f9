// Dashboard domain model
/// The four display regions of the dashboard; failures stay scoped to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    Totals,
    OverTime,
    PerAsset,
    Geography,
}

impl ChartSlot {
    pub const ALL: [ChartSlot; 4] = [
        ChartSlot::Totals,
        ChartSlot::OverTime,
        ChartSlot::PerAsset,
        ChartSlot::Geography,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            ChartSlot::Totals => "totals",
            ChartSlot::OverTime => "over_time_plot",
            ChartSlot::PerAsset => "per_asset_histogram",
            ChartSlot::Geography => "geography_heatmap",
        }
    }

    /// Fallback text rendered in place of this slot when its pipeline fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            ChartSlot::Totals => "Failed to load totals.",
            ChartSlot::OverTime => "Failed to load data for per day plot.",
            ChartSlot::PerAsset => {
                "Failed to load data for per asset (current supports NWB datasets only)."
            }
            ChartSlot::Geography => "Failed to load data for geographic heatmap.",
        }
    }
}

/// Lifecycle of one chart slot. `Loading` leaves prior content in place;
/// completion settles the slot until the next trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_have_distinct_element_ids() {
        let ids: std::collections::HashSet<&str> =
            ChartSlot::ALL.iter().map(|slot| slot.element_id()).collect();
        assert_eq!(ids.len(), ChartSlot::ALL.len());
    }
}
