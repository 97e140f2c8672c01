//! Navigation direction and ordering vocabulary
//!
//! Shared by the resolver, the record store, and the action presenters.

use serde::{Deserialize, Serialize};

/// Which neighbor a navigation action asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Comparison applied to the order column: previous records lie strictly
    /// below the current value, next records strictly above
    #[must_use]
    pub fn comparison(self) -> Comparison {
        match self {
            Direction::Previous => Comparison::Below,
            Direction::Next => Comparison::Above,
        }
    }

    /// Sort order under which the first match is the nearest neighbor
    #[must_use]
    pub fn default_order(self) -> SortOrder {
        match self {
            Direction::Previous => SortOrder::Desc,
            Direction::Next => SortOrder::Asc,
        }
    }
}

/// Sort order for the candidate result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Query keyword for this order
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Strict comparison against the current record's order value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Below,
    Above,
}

impl Comparison {
    /// Query operator for this comparison
    #[must_use]
    pub fn operator(self) -> &'static str {
        match self {
            Comparison::Below => "<",
            Comparison::Above => ">",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_compares_strictly_below() {
        assert_eq!(Direction::Previous.comparison(), Comparison::Below);
        assert_eq!(Comparison::Below.operator(), "<");
    }

    #[test]
    fn test_next_compares_strictly_above() {
        assert_eq!(Direction::Next.comparison(), Comparison::Above);
        assert_eq!(Comparison::Above.operator(), ">");
    }

    #[test]
    fn test_default_orders_pick_nearest_neighbor() {
        assert_eq!(Direction::Previous.default_order(), SortOrder::Desc);
        assert_eq!(Direction::Next.default_order(), SortOrder::Asc);
    }

    #[test]
    fn test_sort_order_keywords() {
        assert_eq!(SortOrder::Asc.keyword(), "ASC");
        assert_eq!(SortOrder::Desc.keyword(), "DESC");
    }
}
