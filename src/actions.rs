//! Previous/next action presenters
//!
//! Actions are plain data descriptors configured by free functions; the
//! hosting UI decides how to draw them. A descriptor never caches state
//! between renders: every call to [`present_navigation`] resolves both
//! neighbors afresh.

use color_eyre::Result;
use std::collections::HashMap;

use crate::config::NavConfig;
use crate::direction::Direction;
use crate::resolver::{AdjacentRecords, OrderedRecord, resolve_adjacent};

pub const PREVIOUS_ACTION_ID: &str = "previous-record";
pub const NEXT_ACTION_ID: &str = "next-record";

/// Visual weight of an action control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Primary,
    Muted,
}

/// Descriptor for one navigation button
///
/// Carries everything a UI layer needs to draw the control: icon-only
/// presentation, outline style, tooltip, enabled state, and the link
/// target when a neighbor exists.
#[derive(Debug, Clone, PartialEq)]
pub struct NavAction {
    pub id: &'static str,
    pub icon: &'static str,
    pub tooltip: &'static str,
    pub label_hidden: bool,
    pub outlined: bool,
    pub emphasis: Emphasis,
    pub disabled: bool,
    pub href: Option<String>,
}

impl NavAction {
    /// Creates the base previous-record action
    #[must_use]
    pub fn previous() -> Self {
        Self {
            id: PREVIOUS_ACTION_ID,
            icon: "chevron-left",
            tooltip: "Previous",
            label_hidden: true,
            outlined: true,
            emphasis: Emphasis::Primary,
            disabled: false,
            href: None,
        }
    }

    /// Creates the base next-record action
    #[must_use]
    pub fn next() -> Self {
        Self {
            id: NEXT_ACTION_ID,
            icon: "chevron-right",
            tooltip: "Next",
            label_hidden: true,
            outlined: true,
            emphasis: Emphasis::Primary,
            disabled: false,
            href: None,
        }
    }

    /// Sets the tooltip text
    #[must_use]
    pub fn with_tooltip(mut self, tooltip: &'static str) -> Self {
        self.tooltip = tooltip;
        self
    }

    /// Sets the visual emphasis
    #[must_use]
    pub fn with_emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = emphasis;
        self
    }

    /// Sets the disabled flag
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the link target
    #[must_use]
    pub fn with_href(mut self, href: Option<String>) -> Self {
        self.href = href;
        self
    }

    /// True when activating the control should do something
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        !self.disabled && self.href.is_some()
    }
}

/// Configures the previous-record action from a resolved neighbor URL
///
/// `Some(url)` means a neighbor exists and `url` is its view page;
/// `None` means the current record is first under the ordering.
pub fn configure_previous(href: Option<String>) -> NavAction {
    let enabled = href.is_some();
    NavAction::previous()
        .with_tooltip("Previous record")
        .with_emphasis(if enabled {
            Emphasis::Primary
        } else {
            Emphasis::Muted
        })
        .with_disabled(!enabled)
        .with_href(href)
}

/// Configures the next-record action from a resolved neighbor URL
pub fn configure_next(href: Option<String>) -> NavAction {
    let enabled = href.is_some();
    NavAction::next()
        .with_tooltip("Next record")
        .with_emphasis(if enabled {
            Emphasis::Primary
        } else {
            Emphasis::Muted
        })
        .with_disabled(!enabled)
        .with_href(href)
}

/// Dispatch table from action id to its configurator
#[must_use]
pub fn action_configurators() -> HashMap<&'static str, fn(Option<String>) -> NavAction> {
    [
        (
            PREVIOUS_ACTION_ID,
            configure_previous as fn(Option<String>) -> NavAction,
        ),
        (NEXT_ACTION_ID, configure_next),
    ]
    .into_iter()
    .collect()
}

/// Both navigation actions for one rendered record page
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationActions {
    pub previous: NavAction,
    pub next: NavAction,
}

/// Builds both actions for the current record
///
/// Performs a fresh resolver call per direction and maps each neighbor
/// through the host's view-URL function. Absent neighbors come back as
/// disabled, linkless, muted controls.
pub async fn present_navigation<S, F>(
    store: &S,
    current: &S::Record,
    config: &NavConfig,
    view_url: F,
) -> Result<NavigationActions>
where
    S: AdjacentRecords,
    S::Record: OrderedRecord,
    F: Fn(&S::Record) -> String,
{
    let previous = resolve_adjacent(store, current, Direction::Previous, config).await?;
    let next = resolve_adjacent(store, current, Direction::Next, config).await?;

    Ok(NavigationActions {
        previous: configure_previous(previous.as_ref().map(&view_url)),
        next: configure_next(next.as_ref().map(&view_url)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::{Comparison, SortOrder};
    use crate::resolver::OrderKey;
    use async_trait::async_trait;

    #[test]
    fn test_base_previous_action_defaults() {
        let action = NavAction::previous();
        assert_eq!(action.id, "previous-record");
        assert_eq!(action.icon, "chevron-left");
        assert_eq!(action.tooltip, "Previous");
        assert!(action.label_hidden);
        assert!(action.outlined);
        assert_eq!(action.href, None);
    }

    #[test]
    fn test_base_next_action_defaults() {
        let action = NavAction::next();
        assert_eq!(action.id, "next-record");
        assert_eq!(action.icon, "chevron-right");
        assert_eq!(action.tooltip, "Next");
        assert!(action.label_hidden);
        assert!(action.outlined);
    }

    #[test]
    fn test_configure_with_neighbor_links_and_enables() {
        let action = configure_previous(Some("/entries/3".to_string()));
        assert!(!action.disabled);
        assert_eq!(action.emphasis, Emphasis::Primary);
        assert_eq!(action.href.as_deref(), Some("/entries/3"));
        assert_eq!(action.tooltip, "Previous record");
        assert!(action.is_actionable());
    }

    #[test]
    fn test_configure_without_neighbor_disables_and_unlinks() {
        let action = configure_next(None);
        assert!(action.disabled);
        assert_eq!(action.emphasis, Emphasis::Muted);
        assert_eq!(action.href, None);
        assert!(!action.is_actionable());
    }

    #[test]
    fn test_dispatch_table_covers_both_actions() {
        let configurators = action_configurators();
        assert_eq!(configurators.len(), 2);

        let previous = configurators[PREVIOUS_ACTION_ID](Some("/entries/1".to_string()));
        assert_eq!(previous.id, PREVIOUS_ACTION_ID);
        assert!(!previous.disabled);

        let next = configurators[NEXT_ACTION_ID](None);
        assert_eq!(next.id, NEXT_ACTION_ID);
        assert!(next.disabled);
    }

    struct PairStore {
        rows: Vec<i64>,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct PairRecord {
        number: i64,
    }

    impl OrderedRecord for PairRecord {
        fn order_key(&self, column: &str) -> Option<OrderKey> {
            (column == "number").then(|| OrderKey::Int(self.number))
        }
    }

    #[async_trait]
    impl AdjacentRecords for PairStore {
        type Record = PairRecord;

        async fn first_adjacent(
            &self,
            _column: &str,
            anchor: &OrderKey,
            comparison: Comparison,
            order: SortOrder,
        ) -> Result<Option<PairRecord>> {
            let anchor = match anchor {
                OrderKey::Int(n) => *n,
                OrderKey::Float(_) | OrderKey::Text(_) => return Ok(None),
            };
            let mut candidates: Vec<i64> = self
                .rows
                .iter()
                .copied()
                .filter(|n| match comparison {
                    Comparison::Below => *n < anchor,
                    Comparison::Above => *n > anchor,
                })
                .collect();
            candidates.sort_unstable();
            if order == SortOrder::Desc {
                candidates.reverse();
            }
            Ok(candidates.first().map(|n| PairRecord { number: *n }))
        }
    }

    #[tokio::test]
    async fn test_present_navigation_interior_record() {
        let store = PairStore {
            rows: vec![1, 2, 3],
        };
        let config = NavConfig {
            order_column: "number".to_string(),
            ..NavConfig::default()
        };
        let actions = present_navigation(&store, &PairRecord { number: 2 }, &config, |record| {
            format!("/entries/{}", record.number)
        })
        .await
        .unwrap();

        assert_eq!(actions.previous.href.as_deref(), Some("/entries/1"));
        assert!(!actions.previous.disabled);
        assert_eq!(actions.next.href.as_deref(), Some("/entries/3"));
        assert!(!actions.next.disabled);
    }

    #[tokio::test]
    async fn test_present_navigation_at_both_edges() {
        let store = PairStore { rows: vec![7] };
        let config = NavConfig {
            order_column: "number".to_string(),
            ..NavConfig::default()
        };
        let actions = present_navigation(&store, &PairRecord { number: 7 }, &config, |record| {
            format!("/entries/{}", record.number)
        })
        .await
        .unwrap();

        assert!(actions.previous.disabled);
        assert_eq!(actions.previous.href, None);
        assert_eq!(actions.previous.emphasis, Emphasis::Muted);
        assert!(actions.next.disabled);
        assert_eq!(actions.next.href, None);
    }
}
