// Rendering collaborator boundary
use std::path::{Path, PathBuf};

use crate::domain::chart::Figure;
use crate::domain::dashboard::ChartSlot;
use crate::infrastructure::plotly::figure_to_plotly;

/// The external collaborator that draws the dashboard. Each call fully
/// replaces the slot's content; rendering problems stay on this side of the
/// boundary and are never reported back.
pub trait ChartRenderer: Send + Sync {
    fn show_chart(&self, slot: ChartSlot, figure: &Figure);

    fn show_message(&self, slot: ChartSlot, message: &str);

    fn clear(&self, slot: ChartSlot);
}

/// Writes each slot under an output directory: `{element_id}.json` holds
/// the Plotly document, `{element_id}.txt` the text content. Writing one
/// form removes the other so a slot never shows both.
pub struct FileRenderer {
    out_dir: PathBuf,
}

impl FileRenderer {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    fn chart_path(&self, slot: ChartSlot) -> PathBuf {
        self.out_dir.join(format!("{}.json", slot.element_id()))
    }

    fn text_path(&self, slot: ChartSlot) -> PathBuf {
        self.out_dir.join(format!("{}.txt", slot.element_id()))
    }

    fn write_file(&self, path: &Path, contents: &str) {
        if let Err(error) = std::fs::create_dir_all(&self.out_dir) {
            tracing::warn!("could not create {}: {}", self.out_dir.display(), error);
            return;
        }
        if let Err(error) = std::fs::write(path, contents) {
            tracing::warn!("could not write {}: {}", path.display(), error);
        }
    }

    fn remove_file(&self, path: &Path) {
        if let Err(error) = std::fs::remove_file(path) {
            if error.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("could not remove {}: {}", path.display(), error);
            }
        }
    }
}

impl ChartRenderer for FileRenderer {
    fn show_chart(&self, slot: ChartSlot, figure: &Figure) {
        let document = figure_to_plotly(figure);
        match serde_json::to_string_pretty(&document) {
            Ok(serialized) => {
                self.write_file(&self.chart_path(slot), &serialized);
                self.remove_file(&self.text_path(slot));
            }
            Err(error) => {
                tracing::warn!(
                    "could not serialize figure for {}: {}",
                    slot.element_id(),
                    error
                );
            }
        }
    }

    fn show_message(&self, slot: ChartSlot, message: &str) {
        self.write_file(&self.text_path(slot), message);
        self.remove_file(&self.chart_path(slot));
    }

    fn clear(&self, slot: ChartSlot) {
        self.remove_file(&self.chart_path(slot));
        self.remove_file(&self.text_path(slot));
    }
}
