//! Domain layer - Core business logic
//!
//! This module contains the core domain entities and domain services.
//! It performs no I/O.

pub mod entities;
pub mod services;
