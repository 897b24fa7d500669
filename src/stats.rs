//! Per-run collection counters.

use serde::Serialize;
use std::time::Duration;

/// Counters for one collection run (one ticker or one page per unit of work).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CollectionStats {
    /// Units of work attempted.
    pub total: usize,
    /// Units that produced rows.
    pub success: usize,
    /// Units that failed and were skipped.
    pub errors: usize,
    /// Units that succeeded but returned nothing.
    pub empty: usize,
    /// Rows kept in the output.
    pub rows: usize,
    /// Rows dropped by filtering.
    pub filtered: usize,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl CollectionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Success rate in percent; `0.0` when nothing was attempted.
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.success as f64 / self.total as f64) * 100.0
        }
    }

    /// Emits a single structured summary line.
    pub fn log_summary(&self, operation: &str) {
        tracing::info!(
            operation = operation,
            total = self.total,
            success = self.success,
            errors = self.errors,
            empty = self.empty,
            rows = self.rows,
            filtered = self.filtered,
            success_rate = format!("{:.1}%", self.success_rate()),
            elapsed = format!("{:.1}s", self.elapsed.as_secs_f64()),
            "collection finished"
        );
    }
}
