//! Console output for the CLI

use crate::application::dto::ProcessingReport;
use crate::application::{EventCallback, ProcessEvent};
use crate::domain::entities::ImageFormat;
use crate::error::DirectoryError;
use console::style;
use std::path::Path;

/// Renders processing events and the final summary to the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter {
    quiet: bool,
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self { quiet, verbose }
    }

    /// Prints the scan target
    pub fn start(&self, directory: &Path) {
        println!(
            "{} {}",
            style("Scanning directory:").cyan(),
            directory.display()
        );
        println!("Strict mode: {} by magic bytes", supported_formats());
        println!();
    }

    /// Returns a callback that prints events as files complete
    pub fn event_callback(&self) -> EventCallback {
        let reporter = *self;
        Box::new(move |event: &ProcessEvent| reporter.print_event(event))
    }

    fn print_event(&self, event: &ProcessEvent) {
        match event {
            ProcessEvent::Renamed {
                file_name,
                extension,
                label,
                ..
            } => {
                if !self.quiet {
                    println!(
                        "{} {} -> .{} \t[{}]",
                        style("[fixed]").green(),
                        file_name,
                        extension,
                        label
                    );
                }
            }
            ProcessEvent::Unrecognized {
                file_name,
                header_hex,
            } => {
                if self.verbose {
                    match header_hex {
                        Some(hex) => println!("[skip] Unknown format: {} (Hex: {})", file_name, hex),
                        None => println!("[skip] Too short to identify: {}", file_name),
                    }
                }
            }
            ProcessEvent::TargetExists { file_name, target } => {
                if self.verbose {
                    println!("[skip] {}: target {} already exists", file_name, target);
                }
            }
            ProcessEvent::DetectionFailed { file_name, message } => {
                if self.verbose {
                    eprintln!("[skip] Cannot read {}: {}", file_name, message);
                }
            }
            ProcessEvent::Failed { file_name, message } => {
                eprintln!(
                    "{} {}: {}",
                    style("Error processing").red(),
                    file_name,
                    message
                );
            }
        }
    }

    /// Prints the final summary
    pub fn finish(&self, report: &ProcessingReport) {
        println!();
        println!("{}", style("=== Done ===").green().bold());
        print!("{}", report.summary());
    }

    /// Reports a directory that could not be listed
    pub fn directory_failed(&self, error: &DirectoryError) {
        eprintln!("{}", style(error).red());
    }
}

fn supported_formats() -> String {
    ImageFormat::ALL
        .iter()
        .map(|format| format.name())
        .collect::<Vec<_>>()
        .join(" / ")
}
