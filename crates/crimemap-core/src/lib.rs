//! # crimemap-core
//!
//! Core types, traits, and abstractions for the crimemap backend.
//!
//! This crate provides the domain models (crimes, the category taxonomy),
//! the inbound filter payload with its validation rules, the shared error
//! type, and the repository traits that the storage layer implements.

pub mod error;
pub mod filter;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use filter::{BoundingBox, CrimeFilter, ValidatedFilter, ValidationError};
pub use models::{Category, Crime, Subcategory};
pub use traits::{CategoryRepository, CrimeRepository};
