//! Processing statistics entity

/// Counters accumulated while processing a directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    /// Files whose format was recognised
    pub processed: usize,
    /// Files that were renamed to their detected extension
    pub renamed: usize,
    /// Files that failed with a stat or rename error
    pub errors: usize,
    /// Files whose format could not be recognised
    pub skipped: usize,
}

impl ProcessingStats {
    /// Creates zeroed statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a file whose format was recognised
    pub fn record_processed(&mut self) {
        self.processed += 1;
    }

    /// Records a rename. The file must already be counted as processed.
    pub fn record_renamed(&mut self) {
        debug_assert!(self.renamed < self.processed);
        self.renamed += 1;
    }

    /// Records a file whose format could not be recognised
    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    /// Records a file that failed with a stat or rename error
    pub fn record_error(&mut self) {
        self.errors += 1;
    }

    /// Returns the number of regular, non-hidden files examined
    pub fn examined(&self) -> usize {
        self.processed + self.skipped + self.errors
    }
}
