//! CLI module

mod commands;
mod report;

pub use commands::Cli;
pub use report::ConsoleReporter;
