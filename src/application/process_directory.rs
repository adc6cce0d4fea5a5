//! Process directory use case
//!
//! Walks the immediate entries of a directory, detects the real format of
//! every regular, non-hidden file and renames files whose extension disagrees
//! with their content.

use crate::application::dto::{ProcessOptions, ProcessingReport};
use crate::domain::entities::{DetectedFormat, Detection, ProcessingStats};
use crate::domain::services::corrected_path;
use crate::error::{DetectionError, DirectoryError, FileOperationError};
use crate::infrastructure::fs::FormatDetector;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::fs;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Notifications emitted while a directory is processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessEvent {
    /// A file was renamed to carry its detected extension
    Renamed {
        file_name: String,
        new_name: String,
        extension: &'static str,
        label: &'static str,
    },
    /// A rename was needed but the target name is already taken
    TargetExists { file_name: String, target: String },
    /// The header matched no signature, or was too short
    Unrecognized {
        file_name: String,
        header_hex: Option<String>,
    },
    /// The header could not be read
    DetectionFailed { file_name: String, message: String },
    /// Stat or rename failed
    Failed { file_name: String, message: String },
}

/// Event callback type
pub type EventCallback = Box<dyn Fn(&ProcessEvent) + Send + Sync>;

/// What a file task decided; renames are applied by the batch loop
#[derive(Debug)]
enum FilePlan {
    Done(FileOutcome),
    Rename {
        detected: DetectedFormat,
        target: PathBuf,
    },
}

/// Terminal state of a single file, before it is folded into the stats
#[derive(Debug)]
enum FileOutcome {
    NotRegular,
    Unrecognized(Detection),
    DetectionFailed(DetectionError),
    AlreadyNamed(DetectedFormat),
    TargetExists {
        detected: DetectedFormat,
        target: PathBuf,
    },
    Renamed {
        detected: DetectedFormat,
        target: PathBuf,
    },
}

/// Process directory use case
///
/// Files are handled in fixed-size batches. Every file of a batch is stat-ed
/// and classified in its own task; a batch is fully drained before the next
/// one is spawned, so at most `batch_size` file handles are open at once.
/// Renames run one at a time from the batch loop, so two files that map to
/// the same target name cannot both claim it.
pub struct ProcessDirectoryUseCase {
    detector: FormatDetector,
    options: ProcessOptions,
}

impl ProcessDirectoryUseCase {
    /// Creates a new use case
    pub fn new(detector: FormatDetector, options: ProcessOptions) -> Self {
        Self { detector, options }
    }

    /// Creates with the default signatures and options
    pub fn with_defaults() -> Self {
        Self::new(FormatDetector::with_default_signatures(), ProcessOptions::default())
    }

    /// Returns the options in use
    pub fn options(&self) -> &ProcessOptions {
        &self.options
    }

    /// Executes the use case on `dir`
    ///
    /// Only a failure to list `dir` is returned as an error. Per-file
    /// failures are counted in the stats and reported through `callback`.
    pub async fn execute(
        &self,
        dir: &Path,
        callback: Option<EventCallback>,
    ) -> Result<ProcessingReport, DirectoryError> {
        let start_time = Instant::now();
        let candidates = list_candidates(dir).await?;
        let batch_size = self.options.batch_size.max(1);

        info!(
            "Processing {} entries of {} in batches of {}",
            candidates.len(),
            dir.display(),
            batch_size
        );

        let mut stats = ProcessingStats::new();

        for batch in candidates.chunks(batch_size) {
            let mut tasks = JoinSet::new();
            for path in batch {
                let detector = self.detector.clone();
                let path = path.clone();
                tasks.spawn(async move {
                    let result = process_file(&detector, &path).await;
                    (path, result)
                });
            }

            while let Some(joined) = tasks.join_next().await {
                match joined {
                    Ok((path, plan)) => {
                        let result = match plan {
                            Ok(FilePlan::Done(outcome)) => Ok(outcome),
                            Ok(FilePlan::Rename { detected, target }) => {
                                apply_rename(&path, detected, target).await
                            }
                            Err(e) => Err(e),
                        };
                        record(&path, result, &mut stats, callback.as_ref());
                    }
                    Err(e) => {
                        warn!("File task did not complete: {}", e);
                        stats.record_error();
                    }
                }
            }
        }

        let duration = start_time.elapsed();

        info!(
            "Done: {} recognized, {} renamed, {} skipped, {} errors in {:.2}s",
            stats.processed,
            stats.renamed,
            stats.skipped,
            stats.errors,
            duration.as_secs_f64()
        );

        Ok(ProcessingReport::new(dir.to_path_buf(), stats, duration))
    }
}

/// Lists the non-hidden entries of `dir`, sorted by path
async fn list_candidates(dir: &Path) -> Result<Vec<PathBuf>, DirectoryError> {
    let unreadable = |source: std::io::Error| DirectoryError::Unreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut read_dir = fs::read_dir(dir).await.map_err(unreadable)?;
    let mut candidates = Vec::new();

    while let Some(entry) = read_dir.next_entry().await.map_err(unreadable)? {
        if entry.file_name().as_encoded_bytes().starts_with(b".") {
            continue;
        }
        candidates.push(entry.path());
    }

    candidates.sort();
    Ok(candidates)
}

async fn process_file(
    detector: &FormatDetector,
    path: &Path,
) -> Result<FilePlan, FileOperationError> {
    let metadata = fs::metadata(path)
        .await
        .map_err(|source| FileOperationError::Stat {
            path: path.to_path_buf(),
            source,
        })?;

    if !metadata.is_file() {
        return Ok(FilePlan::Done(FileOutcome::NotRegular));
    }

    let detected = match detector.detect(path).await {
        Ok(Detection::Recognized(detected)) => detected,
        Ok(detection) => return Ok(FilePlan::Done(FileOutcome::Unrecognized(detection))),
        Err(e) => return Ok(FilePlan::Done(FileOutcome::DetectionFailed(e))),
    };

    Ok(match corrected_path(path, detected.extension()) {
        Some(target) => FilePlan::Rename { detected, target },
        None => FilePlan::Done(FileOutcome::AlreadyNamed(detected)),
    })
}

/// Renames `path` to `target` unless `target` is already taken
///
/// Must not run concurrently with another rename into the same directory.
async fn apply_rename(
    path: &Path,
    detected: DetectedFormat,
    target: PathBuf,
) -> Result<FileOutcome, FileOperationError> {
    let exists = fs::try_exists(&target)
        .await
        .map_err(|source| FileOperationError::Probe {
            path: target.clone(),
            source,
        })?;

    if exists {
        return Ok(FileOutcome::TargetExists { detected, target });
    }

    fs::rename(path, &target)
        .await
        .map_err(|source| FileOperationError::Rename {
            from: path.to_path_buf(),
            to: target.clone(),
            source,
        })?;

    Ok(FileOutcome::Renamed { detected, target })
}

/// Folds a settled file result into the stats and notifies the callback
fn record(
    path: &Path,
    result: Result<FileOutcome, FileOperationError>,
    stats: &mut ProcessingStats,
    callback: Option<&EventCallback>,
) {
    let file_name = display_name(path);
    let emit = |event: ProcessEvent| {
        if let Some(callback) = callback {
            callback(&event);
        }
    };

    match result {
        Ok(FileOutcome::NotRegular) => {
            debug!("Ignoring non-regular entry {}", file_name);
        }
        Ok(FileOutcome::Unrecognized(detection)) => {
            stats.record_skipped();
            debug!("Unknown format: {} ({:?})", file_name, detection.debug_hex());
            emit(ProcessEvent::Unrecognized {
                file_name,
                header_hex: detection.debug_hex().map(str::to_owned),
            });
        }
        Ok(FileOutcome::DetectionFailed(e)) => {
            stats.record_skipped();
            debug!("{}", e);
            emit(ProcessEvent::DetectionFailed {
                file_name,
                message: e.source.to_string(),
            });
        }
        Ok(FileOutcome::AlreadyNamed(detected)) => {
            stats.record_processed();
            debug!("{} is already named as {}", file_name, detected.label());
        }
        Ok(FileOutcome::TargetExists { detected, target }) => {
            stats.record_processed();
            let target = display_name(&target);
            debug!(
                "Not renaming {} ({}): {} already exists",
                file_name,
                detected.label(),
                target
            );
            emit(ProcessEvent::TargetExists { file_name, target });
        }
        Ok(FileOutcome::Renamed { detected, target }) => {
            stats.record_processed();
            stats.record_renamed();
            let new_name = display_name(&target);
            debug!("Renamed {} -> {} [{}]", file_name, new_name, detected.label());
            emit(ProcessEvent::Renamed {
                file_name,
                new_name,
                extension: detected.extension(),
                label: detected.label(),
            });
        }
        Err(e) => {
            stats.record_error();
            debug!("{}", e);
            emit(ProcessEvent::Failed {
                file_name,
                message: e.io_error().to_string(),
            });
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
