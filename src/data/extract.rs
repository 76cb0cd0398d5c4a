use std::path::Path;

use crate::config::PipelineConfig;
use crate::error::ExtractError;
use crate::report::Reporter;

use super::model::{Table, Value};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read a delimited file with a header row into a [`Table`].
///
/// Header names become column names and row order is preserved. Failures
/// are reported through `reporter` before being returned.
pub fn extract(
    path: &Path,
    config: &PipelineConfig,
    reporter: &dyn Reporter,
) -> Result<Table, ExtractError> {
    match read_table(path, config) {
        Ok(table) => {
            reporter.info(&format!("Extraction succeeded: {} records found.", table.len()));
            Ok(table)
        }
        Err(err) => {
            reporter.error(&format!("Extraction error: {err}"));
            Err(err)
        }
    }
}

fn read_table(path: &Path, config: &PipelineConfig) -> Result<Table, ExtractError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter_byte()?)
        .flexible(true)
        .from_path(path)
        .map_err(|source| ExtractError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let columns: Vec<String> = reader
        .headers()
        .map_err(|source| ExtractError::Header {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let width = columns.len();
    let mut table = Table::new(columns);

    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|source| ExtractError::Row {
            path: path.to_path_buf(),
            row: row_no,
            source,
        })?;
        if record.len() > width {
            return Err(ExtractError::ExtraFields {
                path: path.to_path_buf(),
                row: row_no,
                expected: width,
                found: record.len(),
            });
        }
        // Short rows are padded: absent trailing fields are missing values.
        let mut row: Vec<Value> = record.iter().map(Value::parse).collect();
        row.resize(width, Value::Missing);
        table.rows.push(row);
    }

    Ok(table)
}
