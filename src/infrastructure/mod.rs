//! Infrastructure layer
//!
//! Concrete implementations that touch the filesystem.

pub mod fs;
