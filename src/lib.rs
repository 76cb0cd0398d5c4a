//! Batch cleaning pipeline for marine biodiversity measurement tables.
//!
//! A run reads a delimited file, keeps the rows whose pH lies in the allowed
//! range and whose temperature, salinity and pH are all present, and writes
//! them to a new delimited file.
//!
//! ```no_run
//! use std::path::Path;
//! use marine_etl::{Pipeline, PipelineConfig, LogReporter};
//!
//! let config = PipelineConfig::default();
//! let summary = Pipeline::new(&config, &LogReporter)
//!     .run(Path::new("marine_biodiversity_data.csv"), Path::new("marine_biodiversity_summary.csv"))?;
//! println!("kept {} of {} rows", summary.rows_written, summary.rows_extracted);
//! # Ok::<(), marine_etl::PipelineError>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod report;

pub use config::{ConfigError, PipelineConfig};
pub use data::{Row, Table, Value};
pub use error::{ExtractError, LoadError, PipelineError, Stage, TransformError};
pub use pipeline::{run_etl, Pipeline, RunSummary};
pub use report::{LogReporter, MemoryReporter, Reporter};

/// Default input file name.
pub const DEFAULT_INPUT: &str = "marine_biodiversity_data.csv";
/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "marine_biodiversity_summary.csv";
