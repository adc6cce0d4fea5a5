//! Process options DTO

/// Number of files classified concurrently by default
pub const DEFAULT_BATCH_SIZE: usize = 20;

/// Options for processing a directory
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Files per batch; caps the number of concurrently open handles
    pub batch_size: usize,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl ProcessOptions {
    /// Sets the batch size. Values below 1 are raised to 1.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }
}
