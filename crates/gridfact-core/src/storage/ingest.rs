//! One-shot CSV ingestion: load every `*.csv` in a directory into a
//! like-named table, appending rows. Not idempotent: re-running appends
//! duplicates. A malformed file fails the whole run.

use crate::storage::store::{validate_identifier, Store};
use anyhow::Context;
use std::path::Path;

#[derive(Debug)]
pub struct TableLoad {
    pub table: String,
    pub rows_appended: u64,
}

#[derive(Debug)]
pub struct IngestReport {
    pub started_at: String,
    pub tables: Vec<TableLoad>,
}

pub fn ingest_dir(store: &Store, dir: &Path) -> anyhow::Result<IngestReport> {
    let started_at = chrono::Utc::now().to_rfc3339();

    let mut csv_paths = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read data directory {}", dir.display()))?
    {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) == Some("csv") {
            csv_paths.push(path);
        }
    }
    csv_paths.sort();

    if csv_paths.is_empty() {
        anyhow::bail!("no csv files found in {}", dir.display());
    }

    let mut tables = Vec::new();
    for path in csv_paths {
        let table = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string())
            .with_context(|| format!("bad csv filename {}", path.display()))?;

        let rows_appended = load_csv(store, &path, &table)
            .with_context(|| format!("failed to ingest {}", path.display()))?;

        tracing::info!(table = %table, rows = rows_appended, "ingested csv");
        tables.push(TableLoad {
            table,
            rows_appended,
        });
    }

    Ok(IngestReport { started_at, tables })
}

fn load_csv(store: &Store, path: &Path, table: &str) -> anyhow::Result<u64> {
    validate_identifier(table)?;

    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader
        .headers()
        .context("failed to read csv header")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.is_empty() {
        anyhow::bail!("csv has no header columns");
    }
    for h in &headers {
        validate_identifier(h).with_context(|| format!("bad column name in {}", path.display()))?;
    }

    // All columns are TEXT so sentinel values like '\N' survive verbatim.
    let columns_ddl = headers
        .iter()
        .map(|h| format!("\"{}\" TEXT", h))
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = (1..=headers.len())
        .map(|i| format!("?{}", i))
        .collect::<Vec<_>>()
        .join(", ");

    let mut conn = store.conn.lock().unwrap();
    conn.execute(
        &format!("CREATE TABLE IF NOT EXISTS \"{}\" ({})", table, columns_ddl),
        [],
    )?;

    let tx = conn.transaction()?;
    let mut appended = 0u64;
    {
        let mut stmt = tx.prepare(&format!(
            "INSERT INTO \"{}\" VALUES ({})",
            table, placeholders
        ))?;
        for record in reader.records() {
            let record = record.context("failed to read csv record")?;
            if record.len() != headers.len() {
                anyhow::bail!(
                    "row has {} fields, expected {} (table {})",
                    record.len(),
                    headers.len(),
                    table
                );
            }
            stmt.execute(rusqlite::params_from_iter(record.iter()))?;
            appended += 1;
        }
    }
    tx.commit()?;

    Ok(appended)
}
