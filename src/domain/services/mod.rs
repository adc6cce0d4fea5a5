//! Domain services
//!
//! Core business logic services that operate on domain entities.

pub mod naming;
mod signature_registry;

pub use naming::{corrected_path, current_extension, extensions_equivalent};
pub use signature_registry::{SignatureRegistry, HEADER_LEN, MIN_HEADER_LEN};
