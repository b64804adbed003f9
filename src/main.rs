// Main entry point - Dependency injection and the initial dashboard load
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use usage_dashboard::application::chart_service::ChartService;
use usage_dashboard::application::summary_store::bootstrap;
use usage_dashboard::domain::dashboard::ChartSlot;
use usage_dashboard::domain::dataset::ARCHIVE_ID;
use usage_dashboard::domain::display::{AccumulationMode, DisplayMode, ScaleMode, UnitBase};
use usage_dashboard::infrastructure::config::load_endpoint_config;
use usage_dashboard::infrastructure::http_repository::HttpSummaryRepository;
use usage_dashboard::presentation::controller::DashboardController;
use usage_dashboard::presentation::renderer::FileRenderer;

#[derive(Parser, Debug)]
#[command(name = "usage-dashboard", version, about = "Render usage summary charts")]
struct Cli {
    /// Dataset identifier to render ("archive" is the aggregate view)
    #[arg(long, default_value = ARCHIVE_ID)]
    dataset: String,

    /// Use logarithmic byte axes
    #[arg(long)]
    log_scale: bool,

    /// Plot running totals instead of per-day traffic
    #[arg(long)]
    cumulative: bool,

    /// Use binary (1024) byte prefixes
    #[arg(long)]
    binary_units: bool,

    /// Directory the per-element chart and text files are written to
    #[arg(long, default_value = "charts")]
    out_dir: PathBuf,

    /// Endpoint configuration file, without extension
    #[arg(long, default_value = "config/endpoints")]
    config: String,

    /// List the known dataset identifiers and exit
    #[arg(long)]
    list_datasets: bool,
}

impl Cli {
    fn display_mode(&self) -> DisplayMode {
        DisplayMode {
            scale: if self.log_scale {
                ScaleMode::Logarithmic
            } else {
                ScaleMode::Linear
            },
            accumulation: if self.cumulative {
                AccumulationMode::Cumulative
            } else {
                AccumulationMode::Instantaneous
            },
            unit_base: if self.binary_units {
                UnitBase::Binary
            } else {
                UnitBase::Decimal
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // Load configuration
    let endpoint_config = load_endpoint_config(&cli.config)
        .with_context(|| format!("failed to load endpoint configuration from {}", cli.config))?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(HttpSummaryRepository::new(endpoint_config.endpoints));

    // Populate the reference tables; without the per-dataset totals index
    // there is nothing to drive the dashboard from.
    let store = Arc::new(
        bootstrap(repository.as_ref())
            .await
            .context("failed to bootstrap the summary store")?,
    );

    if cli.list_datasets {
        for dataset_id in store.dataset_ids() {
            println!("{dataset_id}");
        }
        return Ok(());
    }

    // Create service and controller (application and presentation layers)
    let service = ChartService::new(repository, store);
    let renderer = Arc::new(FileRenderer::new(&cli.out_dir));
    let controller = DashboardController::new(service, renderer, cli.display_mode());

    println!(
        "Rendering usage dashboard for {} into {}",
        cli.dataset,
        cli.out_dir.display()
    );
    controller.select_dataset(&cli.dataset).await;

    for slot in ChartSlot::ALL {
        println!(
            "{}: {:?}",
            slot.element_id(),
            controller.slot_state(slot).await
        );
    }

    let failed = controller.failed_slots().await;
    if !failed.is_empty() {
        tracing::warn!(
            "{} element(s) fell back to their failure message",
            failed.len()
        );
    }

    Ok(())
}
