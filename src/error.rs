use thiserror::Error;

/// Errors produced while rendering or writing reports
#[derive(Debug, Error)]
pub enum ReportError {
    /// Snapshot could not be serialized
    #[error("failed to serialize snapshot: {0}")]
    Json(#[from] serde_json::Error),
    /// Report file could not be written
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
