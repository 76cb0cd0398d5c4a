use std::path::Path;

use crate::config::PipelineConfig;
use crate::data::{extract, load, transform};
use crate::error::{PipelineError, Stage};
use crate::report::{LogReporter, Reporter};

/// Counts from a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_extracted: usize,
    pub rows_written: usize,
}

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Runs extract → transform → load, stopping at the first stage that fails.
pub struct Pipeline<'a> {
    config: &'a PipelineConfig,
    reporter: &'a dyn Reporter,
    stage: Stage,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a PipelineConfig, reporter: &'a dyn Reporter) -> Self {
        Self {
            config,
            reporter,
            stage: Stage::Start,
        }
    }

    /// Current position of the run. A failed run ends in `Aborted`; the
    /// returned error's [`PipelineError::stage`] says where it stopped.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn run(&mut self, source: &Path, destination: &Path) -> Result<RunSummary, PipelineError> {
        self.stage = Stage::Start;
        self.reporter.info("Starting ETL process...");

        let result = self.run_stages(source, destination);
        match &result {
            Ok(_) => {
                self.stage = Stage::Done;
                self.reporter.info("ETL process completed successfully.");
            }
            Err(err) => {
                self.stage = Stage::Aborted;
                let message = match err {
                    PipelineError::Extract(_) | PipelineError::NoData => "No data found to process.",
                    PipelineError::Transform(_) => "No transformed data was produced.",
                    PipelineError::Load(_) => "ETL process failed in the load stage.",
                };
                self.reporter.error(&format!("{message} Aborted after stage '{}'.", err.stage()));
            }
        }
        result
    }

    fn run_stages(&mut self, source: &Path, destination: &Path) -> Result<RunSummary, PipelineError> {
        let table = extract(source, self.config, self.reporter)?;
        self.stage = Stage::Extracted;
        if table.is_empty() {
            return Err(PipelineError::NoData);
        }
        let rows_extracted = table.len();

        let table = transform(table, self.config, self.reporter)?;
        self.stage = Stage::Transformed;

        load(&table, destination, self.config, self.reporter)?;
        self.stage = Stage::Loaded;

        Ok(RunSummary {
            rows_extracted,
            rows_written: table.len(),
        })
    }
}

/// Run the pipeline with the default rules, logging through `log`.
/// Returns whether the output file was written.
pub fn run_etl(source: &Path, destination: &Path) -> bool {
    let config = PipelineConfig::default();
    let reporter = LogReporter;
    Pipeline::new(&config, &reporter).run(source, destination).is_ok()
}
