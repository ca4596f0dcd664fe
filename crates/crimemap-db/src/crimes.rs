//! Crime repository implementation.

use std::time::Instant;

use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::{debug, warn};

use crimemap_core::{Crime, CrimeRepository, Result, ValidatedFilter};

use crate::crime_query::{CrimeQueryBuilder, QueryParam};

/// PostgreSQL implementation of [`CrimeRepository`].
pub struct PgCrimeRepository {
    pool: PgPool,
}

impl PgCrimeRepository {
    /// Create a new PgCrimeRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Decode a result row into a [`Crime`].
    fn decode_row(row: &PgRow) -> sqlx::Result<Crime> {
        Ok(Crime {
            id: row.try_get("id")?,
            longitude: row.try_get("longitude")?,
            latitude: row.try_get("latitude")?,
            crime_date: row.try_get("crime_date")?,
            crime_time: row.try_get("crime_time")?,
            subcategory_id: row.try_get("subcategory_id")?,
            category_name: row.try_get("category_name")?,
        })
    }
}

#[async_trait]
impl CrimeRepository for PgCrimeRepository {
    async fn find_in_region(&self, filter: &ValidatedFilter) -> Result<Vec<Crime>> {
        let start = Instant::now();
        let (sql, params) = CrimeQueryBuilder::new(filter).build();

        let mut query = sqlx::query(&sql);
        for param in params {
            query = match param {
                QueryParam::Float(v) => query.bind(v),
                QueryParam::Date(d) => query.bind(d),
                QueryParam::IntArray(ids) => query.bind(ids),
            };
        }

        // Stream rows instead of fetch_all: one undecodable row must never
        // block the rest of the dataset. Errors from the stream itself
        // (connection, query execution, row iteration) stay fatal.
        let mut rows = query.fetch(&self.pool);
        let mut crimes = Vec::new();
        let mut position = 0u64;
        let mut skipped = 0u64;

        while let Some(row) = rows.try_next().await? {
            position += 1;
            match Self::decode_row(&row) {
                Ok(crime) => crimes.push(crime),
                Err(e) => {
                    skipped += 1;
                    warn!(
                        subsystem = "db",
                        component = "crimes",
                        op = "find_in_region",
                        row = position,
                        error = %e,
                        "Skipping undecodable crime row"
                    );
                }
            }
        }

        debug!(
            subsystem = "db",
            component = "crimes",
            op = "find_in_region",
            result_count = crimes.len(),
            rows_skipped = skipped,
            duration_ms = start.elapsed().as_millis() as u64,
            "Crime region query complete"
        );

        Ok(crimes)
    }
}
