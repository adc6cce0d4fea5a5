//! CLI arguments using clap

use crate::application::dto::DEFAULT_BATCH_SIZE;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

/// imgfix - Image Extension Fixer
///
/// Detects the real format of image files from their magic bytes and renames
/// files whose extension does not match their content.
#[derive(Parser, Debug)]
#[command(name = "imgfix")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Fix image file extensions based on their content", long_about = None)]
pub struct Cli {
    /// Directory to scan (not recursive)
    #[arg(value_name = "DIRECTORY", default_value = "./Ori")]
    pub directory: PathBuf,

    /// Files classified concurrently
    #[arg(short, long, default_value_t = DEFAULT_BATCH_SIZE, value_parser = parse_batch_size)]
    pub batch_size: usize,

    /// Show skipped files and debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors and the summary
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Returns the tracing level selected by the verbosity flags
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::ERROR
        } else {
            Level::WARN
        }
    }
}

fn parse_batch_size(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("batch size must be at least 1".to_string()),
        Ok(size) => Ok(size),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_defaults_to_ori() {
        let cli = Cli::parse_from(["imgfix"]);
        assert_eq!(cli.directory, PathBuf::from("./Ori"));
        assert_eq!(cli.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(cli.log_level(), Level::WARN);
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        assert!(Cli::try_parse_from(["imgfix", "-b", "0", "pics"]).is_err());
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["imgfix", "-v", "-q"]).is_err());
    }
}
