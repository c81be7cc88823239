use std::path::PathBuf;
use thiserror::Error;

pub type Result<T = ()> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read data file {}: {source}", path.display())]
    DataSourceRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse data file {}: {source}", path.display())]
    DataSourceParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("aggregation task failed: {0}")]
    AggregationTask(#[from] tokio::task::JoinError),
}

impl Error {
    /// Short label used in logs to tell failure causes apart.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::DataSourceRead { .. } => "data_source_read",
            Error::DataSourceParse { .. } => "data_source_parse",
            Error::AggregationTask(_) => "aggregation_task",
        }
    }
}
