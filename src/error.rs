use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by loading, configuring and painting the dashboard.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error("required column `{0}` is missing from the header row")]
    MissingColumn(&'static str),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("drawing failed: {0}")]
    Plot(String),

    #[error("dataset loader task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, DashboardError>;

impl DashboardError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DashboardError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn plot<E: std::fmt::Display>(e: E) -> Self {
        DashboardError::Plot(e.to_string())
    }
}
