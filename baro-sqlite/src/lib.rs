//! SQLite-backed record source.
//!
//! Stores pre-computed word corrections in a single `word_corrections`
//! table, timestamps as `YYYY-MM-DD HH:MM:SS` text (the same fixed-width
//! format the aggregation layer buckets by). Queries are blocking
//! (`rusqlite`) and run under `tokio::task::spawn_blocking` so the serving
//! layer never stalls its reactor on disk I/O.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rusqlite::Connection;
use tracing::debug;

use baro_core::{
    BaroError, CorrectionRecord, RecordSource, TIMESTAMP_FORMAT,
    window::{TimeWindow, parse_timestamp},
};

const SOURCE_NAME: &str = "baro-sqlite";

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS word_corrections (
    timestamp        TEXT NOT NULL,
    incorrect_word   TEXT NOT NULL,
    correct_word     TEXT NOT NULL,
    tag              TEXT NOT NULL,
    occurrence_count INTEGER NOT NULL,
    \"rank\"           INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_word_corrections_ts ON word_corrections (timestamp);";

/// Record source reading from a SQLite database file.
///
/// Each fetch opens its own connection, so concurrent requests never contend
/// on shared connection state. The read workload here is a single indexed
/// range scan per request; connection setup cost is negligible next to it.
#[derive(Debug)]
pub struct SqliteSource {
    path: PathBuf,
}

impl SqliteSource {
    /// Open the source, creating the schema if the database is new.
    ///
    /// # Errors
    /// `BaroError::Connectivity` when the database file cannot be opened,
    /// `BaroError::Source` when schema setup fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, BaroError> {
        let path = path.as_ref().to_path_buf();
        let conn = open_connection(&path)?;
        conn.execute_batch(SCHEMA)
            .map_err(|e| BaroError::source(SOURCE_NAME, e.to_string()))?;
        Ok(Self { path })
    }

    /// Insert records, for ingestion tooling and tests.
    ///
    /// # Errors
    /// `BaroError::Connectivity` / `BaroError::Source` on backend failure.
    pub fn insert(&self, records: &[CorrectionRecord]) -> Result<(), BaroError> {
        let mut conn = open_connection(&self.path)?;
        let tx = conn
            .transaction()
            .map_err(|e| BaroError::source(SOURCE_NAME, e.to_string()))?;
        {
            let mut stmt = tx
                .prepare(
                    "INSERT INTO word_corrections
                     (timestamp, incorrect_word, correct_word, tag, occurrence_count, \"rank\")
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                )
                .map_err(|e| BaroError::source(SOURCE_NAME, e.to_string()))?;
            for r in records {
                stmt.execute(rusqlite::params![
                    r.ts.format(TIMESTAMP_FORMAT).to_string(),
                    r.incorrect_word,
                    r.correct_word,
                    r.tag,
                    r.occurrence_count,
                    r.rank,
                ])
                .map_err(|e| BaroError::source(SOURCE_NAME, e.to_string()))?;
            }
        }
        tx.commit()
            .map_err(|e| BaroError::source(SOURCE_NAME, e.to_string()))
    }
}

#[async_trait]
impl RecordSource for SqliteSource {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn fetch(&self, window: &TimeWindow) -> Result<Vec<CorrectionRecord>, BaroError> {
        let path = self.path.clone();
        let start = window.start.format(TIMESTAMP_FORMAT).to_string();
        let end = window.end.format(TIMESTAMP_FORMAT).to_string();

        let records = tokio::task::spawn_blocking(move || fetch_blocking(&path, &start, &end))
            .await
            .map_err(|e| BaroError::source(SOURCE_NAME, format!("query task failed: {e}")))??;

        debug!(count = records.len(), "fetched correction records");
        Ok(records)
    }
}

fn open_connection(path: &Path) -> Result<Connection, BaroError> {
    Connection::open(path).map_err(|_| BaroError::connectivity(SOURCE_NAME))
}

fn fetch_blocking(
    path: &Path,
    start: &str,
    end: &str,
) -> Result<Vec<CorrectionRecord>, BaroError> {
    let conn = open_connection(path)?;
    let mut stmt = conn
        .prepare(
            "SELECT timestamp, incorrect_word, correct_word, tag, occurrence_count, \"rank\"
             FROM word_corrections
             WHERE timestamp >= ?1 AND timestamp <= ?2
             ORDER BY timestamp",
        )
        .map_err(map_query_err)?;

    let rows = stmt
        .query_map([start, end], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, u64>(4)?,
                row.get::<_, u32>(5)?,
            ))
        })
        .map_err(map_query_err)?;

    let mut records = Vec::new();
    for row in rows {
        let (ts, incorrect_word, correct_word, tag, occurrence_count, rank) =
            row.map_err(map_query_err)?;
        records.push(CorrectionRecord {
            ts: parse_timestamp(&ts)
                .map_err(|e| BaroError::source(SOURCE_NAME, format!("bad stored row: {e}")))?,
            incorrect_word,
            correct_word,
            tag,
            occurrence_count,
            rank,
        });
    }
    Ok(records)
}

fn map_query_err(e: rusqlite::Error) -> BaroError {
    use rusqlite::ErrorCode;
    match &e {
        rusqlite::Error::SqliteFailure(err, _)
            if matches!(
                err.code,
                ErrorCode::CannotOpen | ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked
            ) =>
        {
            BaroError::connectivity(SOURCE_NAME)
        }
        _ => BaroError::source(SOURCE_NAME, e.to_string()),
    }
}
