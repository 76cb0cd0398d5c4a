use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}: malformed header: {source}", path.display())]
    Header {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}: malformed data row {row}: {source}", path.display())]
    Row {
        path: PathBuf,
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("{}: data row {row} has {found} fields, header has {expected}", path.display())]
    ExtraFields {
        path: PathBuf,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("required column '{0}' not found")]
    MissingColumn(String),

    #[error("no rows with {column} between {min} and {max}")]
    NoRowsInRange { column: String, min: f64, max: f64 },

    #[error("every remaining row has a missing value in a critical column")]
    AllRowsIncomplete,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no data to load")]
    EmptyTable,

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("cannot flush {}: {source}", path.display())]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Position of a pipeline run. `Done` and `Aborted` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    Extracted,
    Transformed,
    Loaded,
    Done,
    Aborted,
}

impl Stage {
    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Done | Stage::Aborted)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::Extracted => "extracted",
            Stage::Transformed => "transformed",
            Stage::Loaded => "loaded",
            Stage::Done => "done",
            Stage::Aborted => "aborted",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("extraction failed: {0}")]
    Extract(#[from] ExtractError),

    #[error("source contains no data rows")]
    NoData,

    #[error("transformation failed: {0}")]
    Transform(#[from] TransformError),

    #[error("load failed: {0}")]
    Load(#[from] LoadError),
}

impl PipelineError {
    /// The last stage the run reached before aborting.
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::Extract(_) => Stage::Start,
            PipelineError::NoData | PipelineError::Transform(_) => Stage::Extracted,
            PipelineError::Load(_) => Stage::Transformed,
        }
    }
}
