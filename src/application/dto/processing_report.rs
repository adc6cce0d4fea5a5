//! Processing report DTO

use crate::domain::entities::ProcessingStats;
use std::path::PathBuf;
use std::time::Duration;

/// Result of processing one directory
#[derive(Debug, Clone)]
pub struct ProcessingReport {
    /// Directory that was processed
    pub directory: PathBuf,
    /// Final counters
    pub stats: ProcessingStats,
    /// Wall-clock duration of the run
    pub duration: Duration,
}

impl ProcessingReport {
    /// Creates a new report
    pub fn new(directory: PathBuf, stats: ProcessingStats, duration: Duration) -> Self {
        Self {
            directory,
            stats,
            duration,
        }
    }

    /// Returns a summary string
    pub fn summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str(&format!("Recognized images: {}\n", self.stats.processed));
        summary.push_str(&format!("Renamed:           {}\n", self.stats.renamed));
        summary.push_str(&format!(
            "Skipped:           {} (not an image or unknown format)\n",
            self.stats.skipped
        ));
        if self.stats.errors > 0 {
            summary.push_str(&format!("Errors:            {}\n", self.stats.errors));
        }
        summary.push_str(&format!(
            "Elapsed:           {}ms\n",
            self.duration.as_millis()
        ));

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_hides_zero_errors() {
        let stats = ProcessingStats {
            processed: 3,
            renamed: 1,
            errors: 0,
            skipped: 2,
        };
        let report = ProcessingReport::new(PathBuf::from("x"), stats, Duration::from_millis(12));
        let summary = report.summary();

        assert!(summary.contains("Recognized images: 3"));
        assert!(summary.contains("Renamed:           1"));
        assert!(summary.contains("12ms"));
        assert!(!summary.contains("Errors"));
    }
}
