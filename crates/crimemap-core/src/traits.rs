//! Repository traits for the crimemap storage layer.
//!
//! Concrete implementations live in `crimemap-db`; handlers depend only on
//! these traits so tests can substitute in-memory doubles.

use async_trait::async_trait;

use crate::error::Result;
use crate::filter::ValidatedFilter;
use crate::models::{Category, Crime};

/// Repository for querying crime incidents.
#[async_trait]
pub trait CrimeRepository: Send + Sync {
    /// Fetch crimes inside the filter's bounding box and date range,
    /// excluding any IDs the client already holds.
    ///
    /// Ordering is unspecified beyond being stable for a given storage
    /// snapshot; callers must not rely on row order.
    async fn find_in_region(&self, filter: &ValidatedFilter) -> Result<Vec<Crime>>;
}

/// Repository for the category/subcategory taxonomy.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Fetch the full category tree, categories in first-seen join order.
    async fn fetch_tree(&self) -> Result<Vec<Category>>;
}
