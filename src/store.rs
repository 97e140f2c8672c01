//! Embedded record store
//!
//! A thin wrapper over an embedded SurrealDB instance that implements the
//! one query pattern navigation needs, for any table and record type. The
//! table name and anchor value are bound parameters; the column name is
//! validated as a plain identifier before it is spliced into the query,
//! and the operator and sort keyword come from closed enums.

use color_eyre::Result;
use color_eyre::eyre::eyre;
use serde::de::DeserializeOwned;
use std::path::Path;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};
use surrealdb::sql::{Id, Thing};

use crate::direction::{Comparison, SortOrder};
use crate::resolver::OrderKey;

/// Embedded database handle shared by navigation queries and host tables
#[derive(Clone)]
pub struct RecordStore {
    db: Surreal<Db>,
}

impl RecordStore {
    /// Opens a persistent store at the given path
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Surreal::new::<RocksDb>(path.as_ref()).await?;
        db.use_ns("record_nav").use_db("main").await?;
        Ok(Self { db })
    }

    /// Opens a throwaway in-memory store
    pub async fn memory() -> Result<Self> {
        let db = Surreal::new::<Mem>(()).await?;
        db.use_ns("record_nav").use_db("main").await?;
        Ok(Self { db })
    }

    /// The underlying database handle, for host-defined tables and queries
    #[must_use]
    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// Returns the first record of `table` beyond `anchor` on `column`
    ///
    /// Runs `WHERE column <op> anchor ORDER BY column <dir> LIMIT 1`.
    /// When `column` is `id` the anchor is promoted to a record pointer so
    /// the comparison happens on record ids. Rows that tie on `column`
    /// come back in storage order; which of them wins is not defined.
    pub async fn first_adjacent<R>(
        &self,
        table: &str,
        column: &str,
        anchor: &OrderKey,
        comparison: Comparison,
        order: SortOrder,
    ) -> Result<Option<R>>
    where
        R: DeserializeOwned,
    {
        validate_identifier(table)?;
        validate_identifier(column)?;

        let query = format!(
            "SELECT * FROM type::table($table) WHERE {column} {op} $anchor ORDER BY {column} {dir} LIMIT 1",
            op = comparison.operator(),
            dir = order.keyword(),
        );

        let statement = self.db.query(query).bind(("table", table.to_string()));
        let mut response = if column == "id" {
            statement
                .bind(("anchor", record_pointer(table, anchor)?))
                .await?
        } else {
            statement.bind(("anchor", anchor.clone())).await?
        };

        let rows: Vec<R> = response.take(0)?;
        Ok(rows.into_iter().next())
    }
}

/// Builds a record pointer for comparisons on the `id` column
fn record_pointer(table: &str, anchor: &OrderKey) -> Result<Thing> {
    match anchor {
        OrderKey::Int(value) => Ok(Thing::from((table, Id::from(*value)))),
        OrderKey::Text(value) => Ok(Thing::from((table, Id::from(value.as_str())))),
        OrderKey::Float(_) => Err(eyre!("Record ids cannot be compared as floats")),
    }
}

/// Rejects anything but a plain identifier
///
/// Column and table names end up inside the query text, so they are held
/// to `[A-Za-z_][A-Za-z0-9_]*` and everything else is an error.
fn validate_identifier(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(eyre!("Invalid identifier '{}'", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize)]
    struct SeedItem {
        number: i64,
    }

    #[derive(Debug, Deserialize)]
    struct NumberRow {
        number: i64,
    }

    #[derive(Debug, Deserialize)]
    struct IdRow {
        id: Thing,
    }

    async fn store_with_numbers(numbers: &[i64]) -> RecordStore {
        let store = RecordStore::memory().await.unwrap();
        for number in numbers {
            let _: Option<NumberRowOwned> = store
                .db()
                .create("item")
                .content(SeedItem { number: *number })
                .await
                .unwrap();
        }
        store
    }

    #[derive(Debug, Deserialize)]
    struct NumberRowOwned {
        #[allow(dead_code)]
        number: i64,
    }

    async fn store_with_ids(ids: &[i64]) -> RecordStore {
        let store = RecordStore::memory().await.unwrap();
        for id in ids {
            store
                .db()
                .query("CREATE type::thing($table, $id) SET number = $id")
                .bind(("table", "item"))
                .bind(("id", *id))
                .await
                .unwrap();
        }
        store
    }

    fn record_id(row: &IdRow) -> String {
        row.id.id.to_string()
    }

    #[tokio::test]
    async fn test_nearest_neighbors_on_field_column() {
        let store = store_with_numbers(&[1, 2, 3, 5]).await;

        let previous: Option<NumberRow> = store
            .first_adjacent(
                "item",
                "number",
                &OrderKey::Int(3),
                Comparison::Below,
                SortOrder::Desc,
            )
            .await
            .unwrap();
        assert_eq!(previous.map(|row| row.number), Some(2));

        let next: Option<NumberRow> = store
            .first_adjacent(
                "item",
                "number",
                &OrderKey::Int(3),
                Comparison::Above,
                SortOrder::Asc,
            )
            .await
            .unwrap();
        assert_eq!(next.map(|row| row.number), Some(5));
    }

    #[tokio::test]
    async fn test_edges_return_none() {
        let store = store_with_numbers(&[1, 2, 3, 5]).await;

        let previous: Option<NumberRow> = store
            .first_adjacent(
                "item",
                "number",
                &OrderKey::Int(1),
                Comparison::Below,
                SortOrder::Desc,
            )
            .await
            .unwrap();
        assert!(previous.is_none());

        let next: Option<NumberRow> = store
            .first_adjacent(
                "item",
                "number",
                &OrderKey::Int(5),
                Comparison::Above,
                SortOrder::Asc,
            )
            .await
            .unwrap();
        assert!(next.is_none());
    }

    #[tokio::test]
    async fn test_insertion_order_does_not_matter() {
        let shuffled = store_with_numbers(&[5, 1, 3, 2]).await;

        let previous: Option<NumberRow> = shuffled
            .first_adjacent(
                "item",
                "number",
                &OrderKey::Int(3),
                Comparison::Below,
                SortOrder::Desc,
            )
            .await
            .unwrap();
        assert_eq!(previous.map(|row| row.number), Some(2));

        let next: Option<NumberRow> = shuffled
            .first_adjacent(
                "item",
                "number",
                &OrderKey::Int(1),
                Comparison::Above,
                SortOrder::Asc,
            )
            .await
            .unwrap();
        assert_eq!(next.map(|row| row.number), Some(2));
    }

    #[tokio::test]
    async fn test_navigation_over_record_ids() {
        // Records 1, 2, 3, 5 with no record 4.
        let store = store_with_ids(&[1, 2, 3, 5]).await;

        let previous: Option<IdRow> = store
            .first_adjacent(
                "item",
                "id",
                &OrderKey::Int(5),
                Comparison::Below,
                SortOrder::Desc,
            )
            .await
            .unwrap();
        assert_eq!(previous.as_ref().map(record_id).as_deref(), Some("3"));

        let next: Option<IdRow> = store
            .first_adjacent(
                "item",
                "id",
                &OrderKey::Int(1),
                Comparison::Above,
                SortOrder::Asc,
            )
            .await
            .unwrap();
        assert_eq!(next.as_ref().map(record_id).as_deref(), Some("2"));

        let before_first: Option<IdRow> = store
            .first_adjacent(
                "item",
                "id",
                &OrderKey::Int(1),
                Comparison::Below,
                SortOrder::Desc,
            )
            .await
            .unwrap();
        assert!(before_first.is_none());

        let after_last: Option<IdRow> = store
            .first_adjacent(
                "item",
                "id",
                &OrderKey::Int(5),
                Comparison::Above,
                SortOrder::Asc,
            )
            .await
            .unwrap();
        assert!(after_last.is_none());
    }

    #[tokio::test]
    async fn test_ties_resolve_to_one_of_the_duplicates() {
        // Records 10 and 11 share the order value 7; record 12 holds 8.
        let store = RecordStore::memory().await.unwrap();
        for (id, number) in [(10i64, 7i64), (11, 7), (12, 8)] {
            store
                .db()
                .query("CREATE type::thing($table, $id) SET number = $number")
                .bind(("table", "item"))
                .bind(("id", id))
                .bind(("number", number))
                .await
                .unwrap();
        }

        let previous: Option<IdRow> = store
            .first_adjacent(
                "item",
                "number",
                &OrderKey::Int(8),
                Comparison::Below,
                SortOrder::Desc,
            )
            .await
            .unwrap();

        let winner = previous.as_ref().map(record_id);
        assert!(
            winner.as_deref() == Some("10") || winner.as_deref() == Some("11"),
            "expected one of the tied records, got {:?}",
            winner
        );
    }

    #[tokio::test]
    async fn test_overridden_order_returns_farthest() {
        let store = store_with_numbers(&[1, 2, 3, 5]).await;

        // Ascending sort under a below-comparison picks the smallest match.
        let farthest: Option<NumberRow> = store
            .first_adjacent(
                "item",
                "number",
                &OrderKey::Int(5),
                Comparison::Below,
                SortOrder::Asc,
            )
            .await
            .unwrap();
        assert_eq!(farthest.map(|row| row.number), Some(1));
    }

    #[tokio::test]
    async fn test_malformed_column_is_rejected() {
        let store = RecordStore::memory().await.unwrap();

        let injected: Result<Option<NumberRow>> = store
            .first_adjacent(
                "item",
                "number; REMOVE TABLE item",
                &OrderKey::Int(1),
                Comparison::Above,
                SortOrder::Asc,
            )
            .await;
        assert!(injected.is_err());

        let hyphenated: Result<Option<NumberRow>> = store
            .first_adjacent(
                "item",
                "order-column",
                &OrderKey::Int(1),
                Comparison::Above,
                SortOrder::Asc,
            )
            .await;
        assert!(hyphenated.is_err());

        let empty: Result<Option<NumberRow>> = store
            .first_adjacent("item", "", &OrderKey::Int(1), Comparison::Above, SortOrder::Asc)
            .await;
        assert!(empty.is_err());
    }

    #[tokio::test]
    async fn test_float_anchor_on_id_column_is_rejected() {
        let store = RecordStore::memory().await.unwrap();

        let result: Result<Option<IdRow>> = store
            .first_adjacent(
                "item",
                "id",
                &OrderKey::Float(1.5),
                Comparison::Above,
                SortOrder::Asc,
            )
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_text_order_column() {
        let store = RecordStore::memory().await.unwrap();
        for title in ["alpha", "bravo", "delta"] {
            store
                .db()
                .query("CREATE type::table($table) SET title = $title")
                .bind(("table", "doc"))
                .bind(("title", title))
                .await
                .unwrap();
        }

        #[derive(Debug, Deserialize)]
        struct TitleRow {
            title: String,
        }

        let next: Option<TitleRow> = store
            .first_adjacent(
                "doc",
                "title",
                &OrderKey::from("bravo"),
                Comparison::Above,
                SortOrder::Asc,
            )
            .await
            .unwrap();
        assert_eq!(next.map(|row| row.title).as_deref(), Some("delta"));
    }
}
