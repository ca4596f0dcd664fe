//! Inbound crime filter payload and its validation rules.
//!
//! [`CrimeFilter`] mirrors the JSON body of `POST /getAll` exactly as the
//! map front-end sends it. [`CrimeFilter::validate`] is a pure function that
//! either produces a [`ValidatedFilter`] — the only type the query layer
//! accepts — or a [`ValidationError`] naming the offending field.

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

/// Calendar-date format required for `startDate` / `endDate`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validation failure for a [`CrimeFilter`].
///
/// `Display` output is the client-facing reason surfaced on a 400 response.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required field is absent or empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A coordinate lies outside its valid range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    /// A date does not parse as a calendar date.
    #[error("invalid {0} format, must be YYYY-MM-DD")]
    InvalidFormat(&'static str),
}

/// Untrusted filter payload as decoded from the request body.
///
/// Coordinates are optional at the wire level so that absence can be
/// reported as a validation failure rather than a decode failure.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct CrimeFilter {
    pub east: Option<f64>,
    pub west: Option<f64>,
    pub south: Option<f64>,
    pub north: Option<f64>,
    #[serde(rename = "startDate", default)]
    pub start_date: String,
    #[serde(rename = "endDate", default)]
    pub end_date: String,
    /// Record IDs the client already holds; not required to be deduplicated.
    #[serde(rename = "excludedIDs", default)]
    pub excluded_ids: Vec<i32>,
    /// Accepted for wire compatibility; the query layer does not enforce it.
    #[serde(rename = "subCategories", default)]
    pub subcategories: Vec<i32>,
}

/// Geographic bounding box in WGS-84 coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub east: f64,
    pub west: f64,
    pub south: f64,
    pub north: f64,
}

/// A filter that has passed validation and is safe to hand to the query
/// builder.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedFilter {
    pub bounds: BoundingBox,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub excluded_ids: Vec<i32>,
    /// Carried through unvalidated; see `CrimeFilter::subcategories`.
    pub subcategory_ids: Vec<i32>,
}

impl CrimeFilter {
    /// Validate the payload, producing a [`ValidatedFilter`].
    ///
    /// Checks field presence, coordinate ranges, and date format only.
    /// Cross-field ordering (east vs. west, start vs. end) is deliberately
    /// not checked: an inverted box or range yields an empty result set,
    /// not an error.
    pub fn validate(&self) -> Result<ValidatedFilter, ValidationError> {
        let east = require_coordinate(self.east, "east")?;
        let west = require_coordinate(self.west, "west")?;
        let south = require_coordinate(self.south, "south")?;
        let north = require_coordinate(self.north, "north")?;

        check_range(east, "east", -180.0, 180.0)?;
        check_range(west, "west", -180.0, 180.0)?;
        check_range(south, "south", -90.0, 90.0)?;
        check_range(north, "north", -90.0, 90.0)?;

        let start_date = require_date(&self.start_date, "startDate")?;
        let end_date = require_date(&self.end_date, "endDate")?;

        Ok(ValidatedFilter {
            bounds: BoundingBox {
                east,
                west,
                south,
                north,
            },
            start_date,
            end_date,
            excluded_ids: self.excluded_ids.clone(),
            subcategory_ids: self.subcategories.clone(),
        })
    }
}

fn require_coordinate(value: Option<f64>, field: &'static str) -> Result<f64, ValidationError> {
    value.ok_or(ValidationError::MissingField(field))
}

fn check_range(value: f64, field: &'static str, min: f64, max: f64) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange { field, min, max });
    }
    Ok(())
}

fn require_date(value: &str, field: &'static str) -> Result<NaiveDate, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidFormat(field))
}
