use std::path::Path;

use crate::config::PipelineConfig;
use crate::error::LoadError;
use crate::report::Reporter;

use super::model::Table;

/// Write a non-empty table to `path`: header row first, no index column.
///
/// An empty table is refused before the destination is touched.
pub fn load(
    table: &Table,
    path: &Path,
    config: &PipelineConfig,
    reporter: &dyn Reporter,
) -> Result<(), LoadError> {
    match write_table(table, path, config) {
        Ok(()) => {
            reporter.info(&format!("Load succeeded: file saved to {}.", path.display()));
            Ok(())
        }
        Err(err) => {
            reporter.error(&format!("Load error: {err}"));
            Err(err)
        }
    }
}

fn write_table(table: &Table, path: &Path, config: &PipelineConfig) -> Result<(), LoadError> {
    if table.is_empty() {
        return Err(LoadError::EmptyTable);
    }

    let write_err = |source: csv::Error| LoadError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter_byte()?)
        .from_path(path)
        .map_err(write_err)?;

    writer.write_record(&table.columns).map_err(write_err)?;
    for row in &table.rows {
        writer
            .write_record(row.iter().map(|v| v.to_field()))
            .map_err(write_err)?;
    }

    writer.flush().map_err(|source| LoadError::Flush {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use log::Level;

    use super::*;
    use crate::data::model::Value;
    use crate::report::MemoryReporter;

    fn sample() -> Table {
        let mut t = Table::new(vec!["species".into(), "ph".into(), "note".into()]);
        t.rows.push(vec![
            Value::Text("Aurelia aurita".into()),
            Value::Number(8.0),
            Value::Missing,
        ]);
        t.rows.push(vec![
            Value::Text("Cancer, pagurus".into()),
            Value::Number(7.25),
            Value::Text("rocky".into()),
        ]);
        t
    }

    #[test]
    fn writes_header_and_rows_without_index() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("out.csv");
        let reporter = MemoryReporter::new();

        load(&sample(), &path, &PipelineConfig::default(), &reporter).expect("load");

        let written = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(
            written,
            "species,ph,note\nAurelia aurita,8.0,\n\"Cancer, pagurus\",7.25,rocky\n"
        );
        assert!(reporter.contains(Level::Info, "Load succeeded"));
    }

    #[test]
    fn empty_table_writes_nothing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("out.csv");
        let reporter = MemoryReporter::new();

        let result = load(&Table::new(vec!["ph".into()]), &path, &PipelineConfig::default(), &reporter);

        assert!(matches!(result, Err(LoadError::EmptyTable)));
        assert!(!path.exists());
        assert!(reporter.contains(Level::Error, "no data to load"));
    }

    #[test]
    fn unwritable_destination_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing_dir").join("out.csv");
        let reporter = MemoryReporter::new();

        let result = load(&sample(), &path, &PipelineConfig::default(), &reporter);

        assert!(matches!(result, Err(LoadError::Write { .. })));
        assert!(reporter.contains(Level::Error, "Load error"));
    }
}
