// Dashboard controller - slot lifecycles, display toggles, refresh fan-out
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;

use crate::application::chart_service::ChartService;
use crate::domain::dashboard::{ChartSlot, ChartState};
use crate::domain::dataset::ARCHIVE_ID;
use crate::domain::display::{AccumulationMode, DisplayMode, ScaleMode, UnitBase};
use crate::presentation::renderer::ChartRenderer;

/// Monotonic request token for one slot. A pipeline applies its result only
/// while the token it was issued is still the latest for that slot.
#[derive(Debug, Default)]
struct RequestToken {
    issued: AtomicU64,
}

impl RequestToken {
    fn issue(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn current(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Default)]
struct SlotTokens {
    totals: RequestToken,
    over_time: RequestToken,
    per_asset: RequestToken,
    geography: RequestToken,
}

#[derive(Debug, Clone, Copy, Default)]
struct SlotStates {
    totals: ChartState,
    over_time: ChartState,
    per_asset: ChartState,
    geography: ChartState,
}

impl SlotStates {
    fn get(&self, slot: ChartSlot) -> ChartState {
        match slot {
            ChartSlot::Totals => self.totals,
            ChartSlot::OverTime => self.over_time,
            ChartSlot::PerAsset => self.per_asset,
            ChartSlot::Geography => self.geography,
        }
    }

    fn set(&mut self, slot: ChartSlot, state: ChartState) {
        match slot {
            ChartSlot::Totals => self.totals = state,
            ChartSlot::OverTime => self.over_time = state,
            ChartSlot::PerAsset => self.per_asset = state,
            ChartSlot::Geography => self.geography = state,
        }
    }
}

#[derive(Debug, Clone)]
struct ControllerState {
    selected: String,
    mode: DisplayMode,
    slots: SlotStates,
}

/// Owns the selected identifier, the display mode, and one state machine
/// per slot; every trigger re-runs the chart pipelines concurrently.
pub struct DashboardController {
    service: ChartService,
    renderer: Arc<dyn ChartRenderer>,
    state: Mutex<ControllerState>,
    tokens: SlotTokens,
}

impl DashboardController {
    pub fn new(
        service: ChartService,
        renderer: Arc<dyn ChartRenderer>,
        initial_mode: DisplayMode,
    ) -> Self {
        Self {
            service,
            renderer,
            state: Mutex::new(ControllerState {
                selected: ARCHIVE_ID.to_string(),
                mode: initial_mode,
                slots: SlotStates::default(),
            }),
            tokens: SlotTokens::default(),
        }
    }

    pub async fn select_dataset(&self, dataset_id: &str) {
        let (dataset, mode) = {
            let mut state = self.state.lock().await;
            state.selected = dataset_id.to_string();
            (state.selected.clone(), state.mode)
        };
        self.refresh(&dataset, mode, true).await;
    }

    /// Toggle linear/logarithmic axes. The totals banner shows no axis, so
    /// it is left as-is.
    pub async fn set_scale(&self, scale: ScaleMode) {
        let (dataset, mode) = {
            let mut state = self.state.lock().await;
            state.mode.scale = scale;
            (state.selected.clone(), state.mode)
        };
        self.refresh(&dataset, mode, false).await;
    }

    pub async fn set_accumulation(&self, accumulation: AccumulationMode) {
        let (dataset, mode) = {
            let mut state = self.state.lock().await;
            state.mode.accumulation = accumulation;
            (state.selected.clone(), state.mode)
        };
        self.refresh(&dataset, mode, false).await;
    }

    /// Toggle decimal/binary prefixes. The banner quotes a formatted byte
    /// count, so this one re-renders the totals as well.
    pub async fn set_unit_base(&self, unit_base: UnitBase) {
        let (dataset, mode) = {
            let mut state = self.state.lock().await;
            state.mode.unit_base = unit_base;
            (state.selected.clone(), state.mode)
        };
        self.refresh(&dataset, mode, true).await;
    }

    pub async fn reload_all(&self) {
        let (dataset, mode) = {
            let state = self.state.lock().await;
            (state.selected.clone(), state.mode)
        };
        self.refresh(&dataset, mode, true).await;
    }

    pub async fn selected_dataset(&self) -> String {
        self.state.lock().await.selected.clone()
    }

    pub async fn display_mode(&self) -> DisplayMode {
        self.state.lock().await.mode
    }

    pub async fn slot_state(&self, slot: ChartSlot) -> ChartState {
        self.state.lock().await.slots.get(slot)
    }

    pub async fn failed_slots(&self) -> Vec<ChartSlot> {
        let state = self.state.lock().await;
        ChartSlot::ALL
            .into_iter()
            .filter(|slot| state.slots.get(*slot) == ChartState::Failed)
            .collect()
    }

    async fn refresh(&self, dataset_id: &str, mode: DisplayMode, include_totals: bool) {
        {
            let mut state = self.state.lock().await;
            if include_totals {
                state.slots.set(ChartSlot::Totals, ChartState::Loading);
            }
            state.slots.set(ChartSlot::OverTime, ChartState::Loading);
            state.slots.set(ChartSlot::PerAsset, ChartState::Loading);
            state.slots.set(ChartSlot::Geography, ChartState::Loading);
        }

        let totals = async {
            if include_totals {
                self.run_totals(dataset_id, mode).await;
            }
        };
        futures::join!(
            totals,
            self.run_daily(dataset_id, mode),
            self.run_assets(dataset_id, mode),
            self.run_regions(dataset_id, mode),
        );
    }

    async fn run_totals(&self, dataset_id: &str, mode: DisplayMode) {
        let slot = ChartSlot::Totals;
        let token = self.tokens.totals.issue();
        let result = self.service.totals_banner(dataset_id, mode);

        // The token re-check, the render, and the state write share one lock
        // hold, so a stale pipeline never overwrites a newer trigger's slot.
        let mut state = self.state.lock().await;
        if token != self.tokens.totals.current() {
            tracing::debug!("discarding stale totals for {}", dataset_id);
            return;
        }
        match result {
            Ok(banner) => {
                self.renderer.show_message(slot, &banner);
                state.slots.set(slot, ChartState::Ready);
            }
            Err(error) => {
                tracing::error!("totals lookup failed for {}: {}", dataset_id, error);
                self.renderer.show_message(slot, slot.failure_message());
                state.slots.set(slot, ChartState::Failed);
            }
        }
    }

    async fn run_daily(&self, dataset_id: &str, mode: DisplayMode) {
        let slot = ChartSlot::OverTime;
        let token = self.tokens.over_time.issue();
        let result = self.service.daily_traffic(dataset_id, mode).await;

        let mut state = self.state.lock().await;
        if token != self.tokens.over_time.current() {
            tracing::debug!("discarding stale per-day result for {}", dataset_id);
            return;
        }
        match result {
            Ok(figure) => {
                self.renderer.show_chart(slot, &figure);
                state.slots.set(slot, ChartState::Ready);
            }
            Err(error) => {
                tracing::error!("per-day pipeline failed for {}: {}", dataset_id, error);
                self.renderer.show_message(slot, slot.failure_message());
                state.slots.set(slot, ChartState::Failed);
            }
        }
    }

    async fn run_assets(&self, dataset_id: &str, mode: DisplayMode) {
        let slot = ChartSlot::PerAsset;
        let token = self.tokens.per_asset.issue();
        let result = self.service.asset_histogram(dataset_id, mode).await;

        let mut state = self.state.lock().await;
        if token != self.tokens.per_asset.current() {
            tracing::debug!("discarding stale per-asset result for {}", dataset_id);
            return;
        }
        match result {
            Ok(Some(figure)) => {
                self.renderer.show_chart(slot, &figure);
                state.slots.set(slot, ChartState::Ready);
            }
            // The aggregate view renders nothing here.
            Ok(None) => {
                self.renderer.clear(slot);
                state.slots.set(slot, ChartState::Ready);
            }
            Err(error) => {
                tracing::error!("per-asset pipeline failed for {}: {}", dataset_id, error);
                self.renderer.show_message(slot, slot.failure_message());
                state.slots.set(slot, ChartState::Failed);
            }
        }
    }

    async fn run_regions(&self, dataset_id: &str, mode: DisplayMode) {
        let slot = ChartSlot::Geography;
        let token = self.tokens.geography.issue();
        let result = self.service.region_heatmap(dataset_id, mode).await;

        let mut state = self.state.lock().await;
        if token != self.tokens.geography.current() {
            tracing::debug!("discarding stale heatmap for {}", dataset_id);
            return;
        }
        match result {
            Ok(figure) => {
                self.renderer.show_chart(slot, &figure);
                state.slots.set(slot, ChartState::Ready);
            }
            Err(error) => {
                tracing::error!("heatmap pipeline failed for {}: {}", dataset_id, error);
                self.renderer.show_message(slot, slot.failure_message());
                state.slots.set(slot, ChartState::Failed);
            }
        }
    }
}
