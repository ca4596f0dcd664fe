//! Parameterized spatial/temporal query construction for crime lookups.
//!
//! The statement text is fixed: every clause is always present and every
//! per-request value is a bound parameter, so the parameter count and
//! ordering never vary between requests. The exclusion list travels as a
//! single array-typed parameter — an empty list binds an empty `int4[]`
//! rather than dropping the clause.

use chrono::NaiveDate;

use crimemap_core::ValidatedFilter;

/// Type-safe parameter binding for the crime query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryParam {
    /// Coordinate parameter.
    Float(f64),
    /// Calendar-date parameter.
    Date(NaiveDate),
    /// Array of record IDs (for ALL/ANY operations).
    IntArray(Vec<i32>),
}

/// Selects crimes joined to their category name, constrained to a WGS-84
/// envelope and an inclusive date range, minus the excluded IDs.
///
/// `ST_MakeEnvelope` takes (xmin, ymin, xmax, ymax, srid), so the bound
/// order is west, south, east, north. `id != ALL($7)` is vacuously true
/// for an empty array. No ORDER BY: row order is left to storage.
const CRIME_QUERY_SQL: &str = "\
SELECT c.id,
       ST_X(c.geom) AS longitude,
       ST_Y(c.geom) AS latitude,
       c.crime_date,
       c.crime_time,
       c.subcategory_id,
       cat.name AS category_name
  FROM crimes c
  JOIN category_subcategories cs ON cs.subcategory_id = c.subcategory_id
  JOIN categories cat ON cat.id = cs.category_id
 WHERE ST_Within(c.geom, ST_MakeEnvelope($1, $2, $3, $4, 4326))
   AND c.crime_date >= $5
   AND c.crime_date <= $6
   AND c.id != ALL($7::int4[])";

/// Builds the parameterized crime query from a validated filter.
///
/// # Example
///
/// ```rust,ignore
/// use crimemap_db::CrimeQueryBuilder;
///
/// let (sql, params) = CrimeQueryBuilder::new(&validated).build();
/// // sql: fixed statement with placeholders $1..$7
/// // params: [west, south, east, north, start, end, excluded_ids]
/// ```
pub struct CrimeQueryBuilder<'a> {
    filter: &'a ValidatedFilter,
}

impl<'a> CrimeQueryBuilder<'a> {
    /// Create a new builder for the given validated filter.
    pub fn new(filter: &'a ValidatedFilter) -> Self {
        Self { filter }
    }

    /// Build the statement text and its ordered argument list.
    ///
    /// The `subcategory_ids` field of the filter is not referenced; see
    /// the taxonomy note in DESIGN.md.
    pub fn build(&self) -> (String, Vec<QueryParam>) {
        let bounds = &self.filter.bounds;
        let params = vec![
            QueryParam::Float(bounds.west),
            QueryParam::Float(bounds.south),
            QueryParam::Float(bounds.east),
            QueryParam::Float(bounds.north),
            QueryParam::Date(self.filter.start_date),
            QueryParam::Date(self.filter.end_date),
            QueryParam::IntArray(self.filter.excluded_ids.clone()),
        ];

        (CRIME_QUERY_SQL.to_string(), params)
    }
}
