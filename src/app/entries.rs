//! Demo journal entries
//!
//! The record type the browser navigates over, stored in the embedded
//! database. Entries carry a `number` field alongside their record id so
//! the ordering column can be switched in the config file; the seed data
//! has a gap in the ids and a duplicate pair in the numbers to make both
//! navigation quirks visible.

use async_trait::async_trait;
use color_eyre::Result;
use record_nav::{AdjacentRecords, Comparison, OrderKey, OrderedRecord, RecordStore, SortOrder};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use surrealdb::sql::{Id, Thing};

pub const ENTRY_TABLE: &str = "entry";

/// Seed records: ids 1,2,3,5 (no 4), then 10 and 11 sharing number 7
const DEMO_ENTRIES: &[(i64, i64, &str, &str)] = &[
    (
        1,
        1,
        "Field notes, day one",
        "Set up camp at the north ridge. Equipment intact, weather holding.",
    ),
    (
        2,
        2,
        "Second survey",
        "Walked the lower basin. Two springs marked, one dry since last season.",
    ),
    (
        3,
        3,
        "Third survey",
        "Ridge line mapped to the saddle. Rain moved in after noon.",
    ),
    (
        5,
        5,
        "After the gap",
        "Day four lost to the storm, no notes taken. Resumed at the east slope.",
    ),
    (
        10,
        7,
        "Duplicate batch, first copy",
        "Samples relabeled after the mixup. This sheet and the next share a batch number.",
    ),
    (
        11,
        7,
        "Duplicate batch, second copy",
        "Second sheet of the shared batch. Which copy sorts first is anyone's guess.",
    ),
    (
        12,
        8,
        "Past the duplicates",
        "Final sweep of the site. Packing out tomorrow at first light.",
    ),
];

/// A record in the demo journal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Option<Thing>,
    pub number: i64,
    pub title: String,
    pub body: String,
    pub created_at: String,
}

impl Entry {
    /// Numeric record key, when the entry is persisted under one
    #[must_use]
    pub fn record_key(&self) -> Option<i64> {
        match self.id.as_ref().map(|id| &id.id) {
            Some(Id::Number(value)) => Some(*value),
            _ => None,
        }
    }
}

impl OrderedRecord for Entry {
    fn order_key(&self, column: &str) -> Option<OrderKey> {
        match column {
            "id" => self.record_key().map(OrderKey::Int),
            "number" => Some(OrderKey::Int(self.number)),
            "title" => Some(OrderKey::Text(self.title.clone())),
            "created_at" => Some(OrderKey::Text(self.created_at.clone())),
            _ => None,
        }
    }
}

/// Canonical view route for an entry
#[must_use]
pub fn entry_view_url(entry: &Entry) -> String {
    match entry.record_key() {
        Some(key) => format!("/entries/{}", key),
        None => String::from("/entries"),
    }
}

/// Parses an entry view route of the form `/entries/<id>`
#[must_use]
pub fn parse_entry_route(route: &str) -> Option<i64> {
    route.strip_prefix("/entries/")?.parse().ok()
}

/// Entry storage over the embedded record store
#[derive(Clone)]
pub struct EntryStore {
    store: RecordStore,
}

impl EntryStore {
    /// Opens the persistent demo database and seeds it on first run
    pub async fn open() -> Result<Self> {
        let data_dir = Self::data_dir()?;
        std::fs::create_dir_all(&data_dir)?;

        let store = RecordStore::open(data_dir.join("record-nav.db")).await?;
        let entries = Self { store };
        entries.init_schema().await?;
        entries.seed_demo_entries().await?;

        Ok(entries)
    }

    /// Opens a throwaway in-memory database with the same seed data
    pub async fn memory() -> Result<Self> {
        let store = RecordStore::memory().await?;
        let entries = Self { store };
        entries.init_schema().await?;
        entries.seed_demo_entries().await?;

        Ok(entries)
    }

    fn data_dir() -> Result<PathBuf> {
        let current_dir = std::env::current_dir()?;
        Ok(current_dir.join("data"))
    }

    async fn init_schema(&self) -> Result<()> {
        self.store
            .db()
            .query(
                "
            DEFINE TABLE IF NOT EXISTS entry SCHEMAFULL;
            DEFINE FIELD number ON entry TYPE int;
            DEFINE FIELD title ON entry TYPE string;
            DEFINE FIELD body ON entry TYPE string;
            DEFINE FIELD created_at ON entry TYPE string;
        ",
            )
            .await?;

        Ok(())
    }

    /// Writes the demo records unless the table already has rows
    pub(crate) async fn seed_demo_entries(&self) -> Result<()> {
        if self.count().await? > 0 {
            return Ok(());
        }

        let now = chrono::Local::now().to_rfc3339();
        for (id, number, title, body) in DEMO_ENTRIES {
            self.store
                .db()
                .query(
                    "CREATE type::thing($table, $id)
                     SET number = $number, title = $title, body = $body, created_at = $now",
                )
                .bind(("table", ENTRY_TABLE))
                .bind(("id", *id))
                .bind(("number", *number))
                .bind(("title", (*title).to_string()))
                .bind(("body", (*body).to_string()))
                .bind(("now", now.clone()))
                .await?;
        }

        Ok(())
    }

    /// Number of entries in the table
    pub async fn count(&self) -> Result<usize> {
        #[derive(Debug, Deserialize)]
        struct CountResult {
            count: usize,
        }

        let mut response = self
            .store
            .db()
            .query("SELECT count() AS count FROM entry GROUP ALL")
            .await?;

        let results: Vec<CountResult> = response.take(0)?;
        Ok(results.first().map_or(0, |entry| entry.count))
    }

    /// Loads all entries ordered by record id
    pub async fn list(&self) -> Result<Vec<Entry>> {
        let mut response = self
            .store
            .db()
            .query("SELECT * FROM entry ORDER BY id ASC")
            .await?;

        let entries: Vec<Entry> = response.take(0)?;
        Ok(entries)
    }

    /// Loads one entry by numeric record key
    pub async fn get(&self, id: i64) -> Result<Option<Entry>> {
        let mut response = self
            .store
            .db()
            .query("SELECT * FROM type::thing($table, $id)")
            .bind(("table", ENTRY_TABLE))
            .bind(("id", id))
            .await?;

        let rows: Vec<Entry> = response.take(0)?;
        Ok(rows.into_iter().next())
    }
}

#[async_trait]
impl AdjacentRecords for EntryStore {
    type Record = Entry;

    async fn first_adjacent(
        &self,
        column: &str,
        anchor: &OrderKey,
        comparison: Comparison,
        order: SortOrder,
    ) -> Result<Option<Entry>> {
        self.store
            .first_adjacent(ENTRY_TABLE, column, anchor, comparison, order)
            .await
    }
}
