//! Adjacent record resolution
//!
//! One query pattern, two directions: filter rows strictly below or above
//! the current record's order value, sort, take the first. The store does
//! the comparing; this module only picks the operator and sort order.

use async_trait::async_trait;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};

use crate::config::NavConfig;
use crate::direction::{Comparison, Direction, SortOrder};

/// Scalar value of a record's order column
///
/// Untagged so it binds into store queries as a plain number or string.
/// Ordering semantics live in the store, never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderKey {
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<i64> for OrderKey {
    fn from(value: i64) -> Self {
        OrderKey::Int(value)
    }
}

impl From<f64> for OrderKey {
    fn from(value: f64) -> Self {
        OrderKey::Float(value)
    }
}

impl From<String> for OrderKey {
    fn from(value: String) -> Self {
        OrderKey::Text(value)
    }
}

impl From<&str> for OrderKey {
    fn from(value: &str) -> Self {
        OrderKey::Text(value.to_string())
    }
}

/// A record that can expose the value of its order column
pub trait OrderedRecord {
    /// Value of the named column, or `None` when the record has no such
    /// attribute
    fn order_key(&self, column: &str) -> Option<OrderKey>;
}

/// Store-side half of the resolver
///
/// Implementations run `filter(column <op> anchor) ORDER BY column <dir>
/// LIMIT 1` over the collection the current record belongs to.
#[async_trait]
pub trait AdjacentRecords {
    type Record;

    async fn first_adjacent(
        &self,
        column: &str,
        anchor: &OrderKey,
        comparison: Comparison,
        order: SortOrder,
    ) -> Result<Option<Self::Record>>;
}

/// Resolves the record adjacent to `current` in the given direction
///
/// Returns `Ok(None)` when `current` is already at the edge of the
/// collection under the configured ordering. Ties in the order column are
/// broken arbitrarily by storage order. A current record without a value
/// for the configured column is an input error.
pub async fn resolve_adjacent<S>(
    store: &S,
    current: &S::Record,
    direction: Direction,
    config: &NavConfig,
) -> Result<Option<S::Record>>
where
    S: AdjacentRecords,
    S::Record: OrderedRecord,
{
    let column = config.order_column.as_str();
    let anchor = current
        .order_key(column)
        .ok_or_else(|| eyre!("Current record has no value for order column '{}'", column))?;

    store
        .first_adjacent(
            column,
            &anchor,
            direction.comparison(),
            config.sort_order(direction),
        )
        .await
}
