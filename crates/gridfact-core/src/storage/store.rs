use anyhow::Context;
use rusqlite::types::ValueRef;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Store {
    pub conn: Arc<Mutex<Connection>>,
}

/// Textual result of executing one synthesized statement. Failures are a
/// value, not an Err: they flow into the answer prompt so the user gets a
/// natural-language explanation instead of a raw driver error.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Rows(String),
    Error(String),
}

impl QueryOutcome {
    pub fn as_text(&self) -> &str {
        match self {
            QueryOutcome::Rows(s) => s,
            QueryOutcome::Error(s) => s,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, QueryOutcome::Error(_))
    }
}

impl Store {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let conn = Connection::open(path).context("failed to open sqlite db")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn memory() -> anyhow::Result<Self> {
        // SQLite in-memory DB
        let conn = Connection::open_in_memory().context("failed to open in-memory sqlite db")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Execute a synthesized statement and serialize the result to text.
    /// Only read-only statements (SELECT / WITH) are allowed; anything else
    /// is refused as an Error outcome rather than executed. Driver errors
    /// (bad syntax, unknown identifier, type mismatch, locked db) are
    /// likewise captured as Error outcomes, never raised.
    pub fn execute_to_text(&self, sql: &str) -> QueryOutcome {
        let trimmed = sql.trim().trim_end_matches(';');
        if trimmed.is_empty() {
            return QueryOutcome::Error("Error: empty SQL statement".to_string());
        }

        let first_word = trimmed
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_ascii_uppercase();
        if first_word != "SELECT" && first_word != "WITH" {
            return QueryOutcome::Error(format!(
                "Error: only read-only SELECT queries are allowed, refusing to execute a {} statement",
                first_word
            ));
        }

        match self.run_select(trimmed) {
            Ok(text) => QueryOutcome::Rows(text),
            Err(e) => QueryOutcome::Error(format!("Error: {}", e)),
        }
    }

    fn run_select(&self, sql: &str) -> anyhow::Result<String> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(sql)?;
        // The keyword allowlist alone is not enough: SQLite accepts
        // CTE-prefixed DML like `WITH x AS (...) DELETE FROM t`.
        if !stmt.readonly() {
            anyhow::bail!("only read-only statements can be executed, this one writes");
        }
        let column_names: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(|s| s.to_string())
            .collect();

        let mut rows = stmt.query([])?;
        let mut out = column_names.join(" | ");
        out.push('\n');

        let mut count = 0usize;
        while let Some(row) = rows.next()? {
            let mut cells = Vec::with_capacity(column_names.len());
            for i in 0..column_names.len() {
                cells.push(render_value(row.get_ref(i)?));
            }
            out.push_str(&cells.join(" | "));
            out.push('\n');
            count += 1;
        }

        if count == 0 {
            out.push_str("(no rows)\n");
        }
        Ok(out)
    }

    pub fn table_names(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut names = Vec::new();
        for r in rows {
            names.push(r?);
        }
        Ok(names)
    }

    pub fn count_rows(&self, table: &str) -> anyhow::Result<i64> {
        validate_identifier(table)?;
        let conn = self.conn.lock().unwrap();
        let sql = format!("SELECT COUNT(*) FROM \"{}\"", table);
        let n: i64 = conn.query_row(&sql, [], |r| r.get(0))?;
        Ok(n)
    }

    /// First `limit` rows of a table, serialized like a query result. Used
    /// by the ingestion verification pass.
    pub fn preview(&self, table: &str, limit: u32) -> anyhow::Result<String> {
        validate_identifier(table)?;
        let sql = format!("SELECT * FROM \"{}\" LIMIT {}", table, limit);
        self.run_select(&sql)
    }
}

/// Table/column names come from CSV filenames and headers, so they are
/// interpolated into DDL. Restrict them to plain identifiers.
pub(crate) fn validate_identifier(name: &str) -> anyhow::Result<()> {
    let ok = !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !ok {
        anyhow::bail!("invalid identifier: {:?}", name);
    }
    Ok(())
}

fn render_value(v: ValueRef<'_>) -> String {
    match v {
        ValueRef::Null => "NULL".to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
        ValueRef::Blob(b) => format!("<blob {} bytes>", b.len()),
    }
}
