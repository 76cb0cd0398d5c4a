use crate::config::PipelineConfig;
use crate::error::TransformError;
use crate::report::Reporter;

use super::model::{Table, Value};

// ---------------------------------------------------------------------------
// Validation and row filtering
// ---------------------------------------------------------------------------

/// Validate and clean an extracted table.
///
/// Steps, in order:
/// 1. every required column must be present, otherwise nothing is changed;
/// 2. numeric columns are coerced, unreadable cells become missing;
/// 3. rows whose range column is not a number inside the inclusive range are
///    dropped;
/// 4. rows with a missing critical value are dropped.
///
/// Steps 3 and 4 fail when they leave no rows. Running the function on its
/// own output returns the same table.
pub fn transform(
    table: Table,
    config: &PipelineConfig,
    reporter: &dyn Reporter,
) -> Result<Table, TransformError> {
    match clean(table, config, reporter) {
        Ok(table) => {
            reporter.info(&format!("Transformation succeeded: {} rows kept.", table.len()));
            Ok(table)
        }
        Err(err) => {
            match &err {
                TransformError::MissingColumn(_) => reporter.error(&format!("Error: {err}.")),
                _ => reporter.warn(&format!("Warning: {err}.")),
            }
            Err(err)
        }
    }
}

fn clean(
    mut table: Table,
    config: &PipelineConfig,
    reporter: &dyn Reporter,
) -> Result<Table, TransformError> {
    check_required_columns(&table, &config.required_columns)?;

    coerce_numeric_columns(&mut table, &config.numeric_columns);

    let before = table.len();
    retain_in_range(&mut table, config);
    reporter.report(
        log::Level::Debug,
        &format!("range filter on '{}' dropped {} rows", config.range_column, before - table.len()),
    );
    if table.is_empty() {
        return Err(TransformError::NoRowsInRange {
            column: config.range_column.clone(),
            min: config.range_min,
            max: config.range_max,
        });
    }

    let before = table.len();
    retain_complete(&mut table, &config.critical_columns);
    reporter.report(
        log::Level::Debug,
        &format!("completeness filter dropped {} rows", before - table.len()),
    );
    if table.is_empty() {
        return Err(TransformError::AllRowsIncomplete);
    }

    Ok(table)
}

/// Fail on the first required column the table lacks.
pub fn check_required_columns(table: &Table, required: &[String]) -> Result<(), TransformError> {
    match required.iter().find(|col| !table.has_column(col)) {
        Some(col) => Err(TransformError::MissingColumn(col.clone())),
        None => Ok(()),
    }
}

/// Coerce every cell of the named columns. Absent columns are skipped.
pub fn coerce_numeric_columns(table: &mut Table, columns: &[String]) {
    let indices: Vec<usize> = columns
        .iter()
        .filter_map(|c| table.column_index(c))
        .collect();

    for row in &mut table.rows {
        for &idx in &indices {
            if let Some(cell) = row.get_mut(idx) {
                *cell = std::mem::replace(cell, Value::Missing).coerce_numeric();
            }
        }
    }
}

/// Keep rows whose range column holds a number in `[range_min, range_max]`.
/// A table without the range column loses every row.
pub fn retain_in_range(table: &mut Table, config: &PipelineConfig) {
    let Some(idx) = table.column_index(&config.range_column) else {
        table.rows.clear();
        return;
    };
    let (min, max) = (config.range_min, config.range_max);
    table.rows.retain(|row| {
        row.get(idx)
            .and_then(|v| v.as_f64())
            .is_some_and(|v| min <= v && v <= max)
    });
}

/// Drop rows holding a missing value in any of the named columns.
pub fn retain_complete(table: &mut Table, critical: &[String]) {
    let indices: Vec<usize> = critical
        .iter()
        .filter_map(|c| table.column_index(c))
        .collect();
    table
        .rows
        .retain(|row| indices.iter().all(|&i| row.get(i).is_some_and(|v| !v.is_missing())));
}
