//! Standalone debug tool to inspect the record-nav database and its navigation queries
//! Run with: cargo run (from the tools/debug-db folder)
//!
//! Make sure the record-nav browser is NOT running (database lock)

use serde::Deserialize;
use std::path::PathBuf;
use surrealdb::engine::local::{Db, RocksDb};
use surrealdb::Surreal;

#[derive(Debug, Deserialize)]
struct CountResult {
    count: usize,
}

#[derive(Debug, Deserialize)]
struct EntryRow {
    number: i64,
    title: String,
    created_at: String,
}

#[derive(Debug, Deserialize)]
struct NumberRow {
    number: i64,
}

#[derive(Debug, Deserialize)]
struct NumberGroup {
    number: i64,
    count: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Record Nav Database Debug Tool ===\n");

    // 1. Open database
    println!("1. Opening database...");
    let candidates = [
        PathBuf::from("data/record-nav.db"),
        PathBuf::from("../../data/record-nav.db"),
    ];
    let db_path = match candidates.iter().find(|p| p.exists()) {
        Some(path) => path.clone(),
        None => {
            println!("   ERROR: Database not found at {:?}", candidates);
            println!("   Start the browser once so it can create and seed the database.");
            return Ok(());
        }
    };

    let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path.clone()).await?;
    db.use_ns("record_nav").use_db("main").await?;
    println!("   SUCCESS: Connected to {:?}", db_path);

    // 2. Count entries
    println!("\n2. Entry statistics...");
    let mut resp = db
        .query("SELECT count() AS count FROM entry GROUP ALL")
        .await?;
    let total: Vec<CountResult> = resp.take(0)?;
    let total_count = total.first().map(|c| c.count).unwrap_or(0);
    println!("   Total entries: {}", total_count);

    let mut resp = db
        .query("SELECT number FROM entry ORDER BY number ASC")
        .await?;
    let numbers: Vec<NumberRow> = resp.take(0)?;
    if let (Some(first), Some(last)) = (numbers.first(), numbers.last()) {
        println!("   Order span: no. {} to no. {}", first.number, last.number);
    }

    // 3. Show recent entries
    println!("\n3. Recent entries...");
    let mut resp = db
        .query(
            "
        SELECT
            number,
            title,
            created_at
        FROM entry
        ORDER BY created_at DESC
        LIMIT 10
    ",
        )
        .await?;
    let entries: Vec<EntryRow> = resp.take(0)?;

    if entries.is_empty() {
        println!("   NO ENTRIES IN DATABASE!");
        println!("   This is the problem - the demo seed never ran.");
    } else {
        for (i, entry) in entries.iter().enumerate() {
            println!(
                "   {}. [{}] no. {} | {}",
                i + 1,
                entry.created_at,
                entry.number,
                entry.title
            );
        }
    }

    // 4. Check for duplicate order values
    println!("\n4. Duplicate order values...");
    let mut resp = db
        .query("SELECT number, count() AS count FROM entry GROUP BY number")
        .await?;
    let groups: Vec<NumberGroup> = resp.take(0)?;
    let duplicates: Vec<&NumberGroup> = groups.iter().filter(|g| g.count > 1).collect();
    if duplicates.is_empty() {
        println!("   None - every entry has a distinct number");
    } else {
        for group in &duplicates {
            println!(
                "   no. {} is shared by {} entries",
                group.number, group.count
            );
        }
    }

    // 5. Probe the neighbor queries around the middle entry
    println!("\n5. Neighbor probe...");
    match numbers.get(numbers.len() / 2) {
        Some(middle) => {
            let anchor = middle.number;
            let mut resp = db
                .query(
                    "SELECT number, title, created_at FROM entry \
                     WHERE number < $anchor ORDER BY number DESC LIMIT 1",
                )
                .bind(("anchor", anchor))
                .await?;
            let previous: Vec<EntryRow> = resp.take(0)?;
            let mut resp = db
                .query(
                    "SELECT number, title, created_at FROM entry \
                     WHERE number > $anchor ORDER BY number ASC LIMIT 1",
                )
                .bind(("anchor", anchor))
                .await?;
            let next: Vec<EntryRow> = resp.take(0)?;

            println!("   Anchor: no. {}", anchor);
            match previous.first() {
                Some(entry) => println!("   Previous: no. {} | {}", entry.number, entry.title),
                None => println!("   Previous: none (start of the set)"),
            }
            match next.first() {
                Some(entry) => println!("   Next: no. {} | {}", entry.number, entry.title),
                None => println!("   Next: none (end of the set)"),
            }
        }
        None => println!("   SKIPPED (no entries)"),
    }

    // 6. Walk the chain from the smallest number, forward then back
    println!("\n6. Walking the chain...");
    match numbers.first() {
        Some(start) => {
            let mut forward = vec![start.number];
            let mut anchor = start.number;
            loop {
                let mut resp = db
                    .query(
                        "SELECT number FROM entry \
                         WHERE number > $anchor ORDER BY number ASC LIMIT 1",
                    )
                    .bind(("anchor", anchor))
                    .await?;
                let step: Vec<NumberRow> = resp.take(0)?;
                match step.first() {
                    Some(row) => {
                        anchor = row.number;
                        forward.push(anchor);
                    }
                    None => break,
                }
            }
            let hops: Vec<String> = forward.iter().map(|n| n.to_string()).collect();
            println!("   Next hops:     no. {}", hops.join(" -> no. "));

            let mut backward = vec![anchor];
            loop {
                let mut resp = db
                    .query(
                        "SELECT number FROM entry \
                         WHERE number < $anchor ORDER BY number DESC LIMIT 1",
                    )
                    .bind(("anchor", anchor))
                    .await?;
                let step: Vec<NumberRow> = resp.take(0)?;
                match step.first() {
                    Some(row) => {
                        anchor = row.number;
                        backward.push(anchor);
                    }
                    None => break,
                }
            }
            let hops: Vec<String> = backward.iter().map(|n| n.to_string()).collect();
            println!("   Previous hops: no. {}", hops.join(" -> no. "));

            println!("   Visited {} of {} entries", forward.len(), total_count);
            if forward.len() < total_count {
                println!("   Entries sharing a number collapse into one stop on the chain.");
            }
        }
        None => println!("   SKIPPED (no entries)"),
    }

    println!("\n=== Debug Complete ===");

    // Summary
    println!("\n=== DIAGNOSIS ===");
    if total_count == 0 {
        println!("PROBLEM: No entries in database.");
        println!("  -> The browser seeds demo entries on first launch.");
        println!("  -> Start it once without --memory, then re-run this tool.");
    } else if !duplicates.is_empty() {
        println!(
            "WARNING: {} order value(s) are shared by more than one entry.",
            duplicates.len()
        );
        println!("  -> Previous/next lands on one of the twins and skips the rest.");
        println!("  -> Navigate on a column with distinct values to reach every entry.");
    } else {
        println!(
            "Database looks healthy: {} entries, every number distinct",
            total_count
        );
    }

    Ok(())
}
