use std::cell::RefCell;

use log::Level;

// ---------------------------------------------------------------------------
// Diagnostics sink handed to every pipeline stage
// ---------------------------------------------------------------------------

/// Where stages send their status and diagnostic lines.
pub trait Reporter {
    fn report(&self, level: Level, message: &str);

    fn info(&self, message: &str) {
        self.report(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.report(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.report(Level::Error, message);
    }
}

/// Forwards everything to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, level: Level, message: &str) {
        log::log!(target: "marine_etl", level, "{message}");
    }
}

/// Keeps every reported line in memory, in order.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    entries: RefCell<Vec<(Level, String)>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.borrow().clone()
    }

    /// Messages reported at exactly `level`.
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.entries
            .borrow()
            .iter()
            .any(|(l, m)| *l == level && m.contains(needle))
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, level: Level, message: &str) {
        self.entries.borrow_mut().push((level, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_reporter_keeps_order_and_level() {
        let reporter = MemoryReporter::new();
        reporter.info("first");
        reporter.warn("second");
        reporter.error("third");

        let entries = reporter.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], (Level::Info, "first".to_string()));
        assert_eq!(reporter.messages(Level::Warn), vec!["second".to_string()]);
        assert!(reporter.contains(Level::Error, "thi"));
        assert!(!reporter.contains(Level::Info, "third"));
    }
}
