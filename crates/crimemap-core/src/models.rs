//! Core data models for the crimemap backend.
//!
//! These types are shared across all crimemap crates and are serialized
//! directly onto the wire, so field names here are the API contract.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A single crime incident as returned to the map front-end.
///
/// Immutable once read from storage. `category_name` is denormalized from
/// the taxonomy join so the front-end can label a pin without a second
/// request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Crime {
    pub id: i32,
    pub crime_date: NaiveDate,
    #[schema(value_type = String, example = "22:30:00")]
    pub crime_time: NaiveTime,
    pub latitude: f64,
    pub longitude: f64,
    pub subcategory_id: i32,
    pub category_name: String,
}

/// A top-level crime category with its subcategories.
///
/// In the returned tree each subcategory belongs to exactly one category,
/// even though the underlying join table models a many-to-many relation —
/// the tree reflects only the rows actually returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub subcategories: Vec<Subcategory>,
}

/// A crime subcategory within a [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Subcategory {
    pub id: i32,
    pub name: String,
    pub display_name: String,
}
