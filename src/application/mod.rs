//! Application layer
//!
//! Use cases that orchestrate domain logic over the filesystem.

pub mod dto;
mod process_directory;

pub use process_directory::{EventCallback, ProcessDirectoryUseCase, ProcessEvent};
