// Defensive programming lints - prevent panics and unsafe patterns
#![deny(clippy::indexing_slicing)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::fallible_impl_from)]
#![warn(clippy::wildcard_enum_match_arm)]
#![warn(clippy::fn_params_excessive_bools)]
// Idiomatic Rust lints
#![warn(clippy::needless_return)]
#![warn(clippy::let_and_return)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::explicit_iter_loop)]

//! Previous/next record navigation for record-centric views
//!
//! Given the record currently on screen, an ordering column, and a store,
//! this crate resolves the adjacent record in either direction and builds
//! the matching button descriptors: enabled and linked when a neighbor
//! exists, disabled and muted when the current record sits at the edge.
//! The query pattern is always the same single-row lookup:
//! `WHERE column <op> anchor ORDER BY column <dir> LIMIT 1`.

pub mod actions;
pub mod config;
pub mod direction;
pub mod resolver;
pub mod store;

pub use actions::{
    Emphasis, NEXT_ACTION_ID, NavAction, NavigationActions, PREVIOUS_ACTION_ID,
    action_configurators, configure_next, configure_previous, present_navigation,
};
pub use config::NavConfig;
pub use direction::{Comparison, Direction, SortOrder};
pub use resolver::{AdjacentRecords, OrderKey, OrderedRecord, resolve_adjacent};
pub use store::RecordStore;
