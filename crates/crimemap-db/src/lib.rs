//! # crimemap-db
//!
//! PostgreSQL + PostGIS storage layer for the crimemap backend.
//!
//! This crate provides:
//! - Connection pool management
//! - Parameterized spatial/temporal query construction for crime lookups
//! - Repository implementations for crimes and the category taxonomy
//!
//! ## Example
//!
//! ```rust,ignore
//! use crimemap_db::Database;
//! use crimemap_core::{CrimeFilter, CrimeRepository as _};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://localhost/crimemap").await?;
//!
//!     let filter = CrimeFilter {
//!         east: Some(10.0),
//!         west: Some(0.0),
//!         south: Some(0.0),
//!         north: Some(10.0),
//!         start_date: "2020-01-01".to_string(),
//!         end_date: "2020-12-31".to_string(),
//!         ..Default::default()
//!     };
//!     let crimes = db.crimes.find_in_region(&filter.validate()?).await?;
//!
//!     println!("{} crimes in view", crimes.len());
//!     Ok(())
//! }
//! ```

pub mod categories;
pub mod crime_query;
pub mod crimes;
pub mod pool;

#[cfg(test)]
mod tests;

// Test fixtures for integration tests
// Note: always compiled so downstream integration tests can reuse
// DEFAULT_TEST_DATABASE_URL and the schema bootstrap.
pub mod test_fixtures;

// Re-export core types
pub use crimemap_core::*;

// Re-export repository implementations
pub use categories::PgCategoryRepository;
pub use crime_query::{CrimeQueryBuilder, QueryParam};
pub use crimes::PgCrimeRepository;
pub use pool::{create_pool, create_pool_with_config, PoolConfig};

/// Combined database context with all repositories.
///
/// Repositories receive the pool at construction and never open
/// connections of their own; every call checks a connection out of the
/// pool and returns it before the call completes.
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::PgPool,
    /// Crime incident queries.
    pub crimes: PgCrimeRepository,
    /// Category taxonomy queries.
    pub categories: PgCategoryRepository,
}

impl Database {
    /// Create a new Database instance from an existing connection pool.
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self {
            crimes: PgCrimeRepository::new(pool.clone()),
            categories: PgCategoryRepository::new(pool.clone()),
            pool,
        }
    }

    /// Connect to the given database URL with default pool configuration.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = create_pool(database_url).await?;
        Ok(Self::new(pool))
    }
}
