// Failure taxonomy shared by the fetch/parse/lookup pipelines
use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between issuing a fetch and handing a
/// finished figure to the renderer; caught per pipeline at the slot boundary.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("fetch of {url} failed with status {status}")]
    HttpStatus { url: String, status: StatusCode },

    #[error("payload decode failed: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("summary file contains a header but no data rows")]
    InsufficientData,

    #[error("line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("unsupported asset type \"{extension}\"")]
    UnsupportedAssetType { extension: String },

    #[error("no totals recorded for dataset \"{dataset}\"")]
    MissingTotals { dataset: String },
}
