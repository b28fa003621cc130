// ZyDict Store Handle
// SQLite access: canonical entry reads plus the bounded history/favorites tables

use crate::schema::SchemaLayout;
use crate::types::{Entry, StoreError};
use rusqlite::{params, Connection, OptionalExtension, ToSql};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// The two tables this engine owns. The `entries` table belongs to the
/// storage collaborator and is only ever read.
const OWNED_TABLES: &str = "
    CREATE TABLE IF NOT EXISTS history (
        word TEXT PRIMARY KEY,
        viewed_at INTEGER NOT NULL
    );
    CREATE TABLE IF NOT EXISTS favorites (
        seq INTEGER PRIMARY KEY AUTOINCREMENT,
        word TEXT NOT NULL UNIQUE
    );
";

/// An explicitly constructed store handle.
///
/// One `DictStore` wraps one SQLite connection: read-only access to the
/// lexicon `entries` table through the detected [`SchemaLayout`], and
/// ownership of the bounded `history`/`favorites` tables. All operations are
/// synchronous single-writer calls; the engine adds no locking of its own.
pub struct DictStore {
    conn: Connection,
    layout: SchemaLayout,
}

impl DictStore {
    /// Open a store file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn =
            Connection::open(path).map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Self::from_connection(conn)
    }

    /// Wrap an existing connection (test doubles, in-memory fixtures).
    ///
    /// Detects the `entries` layout and creates the owned tables.
    pub fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        let layout = SchemaLayout::detect(&conn)?;
        conn.execute_batch(OWNED_TABLES)?;
        Ok(Self { conn, layout })
    }

    /// The physical layout detected at open
    pub fn layout(&self) -> &SchemaLayout {
        &self.layout
    }

    // ============ Entry reads ============

    /// Run an entry select built against [`SchemaLayout::select_list`]
    pub(crate) fn query_entries(
        &self,
        sql: &str,
        params: &[&dyn ToSql],
    ) -> Result<Vec<Entry>, StoreError> {
        let mut stmt = self.conn.prepare(sql)?;
        let entries = stmt
            .query_map(params, |row| self.layout.entry_from_row(row))?
            .collect::<Result<_, _>>()?;
        Ok(entries)
    }

    /// Look up a single entry by its canonical headword
    pub fn entry_by_headword(&self, headword: &str) -> Result<Option<Entry>, StoreError> {
        let sql = format!(
            "SELECT {} FROM entries WHERE {} = ?1 LIMIT 1",
            self.layout.select_list(),
            self.layout.field_expr(crate::schema::Field::Headword)
        );
        let entry = self
            .conn
            .query_row(&sql, params![headword], |row| {
                self.layout.entry_from_row(row)
            })
            .optional()?;
        Ok(entry)
    }

    // ============ Bounded history ============

    /// Record a detail-view event now.
    ///
    /// Upserts the record (re-viewing refreshes the timestamp rather than
    /// duplicating), then evicts everything outside the `cap` most-recent.
    pub fn record_view(&self, headword: &str, cap: usize) -> Result<(), StoreError> {
        self.record_view_at(headword, now_millis(), cap)
    }

    /// Record a detail-view event at an explicit millisecond timestamp
    pub fn record_view_at(
        &self,
        headword: &str,
        viewed_at: i64,
        cap: usize,
    ) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO history (word, viewed_at) VALUES (?1, ?2)
             ON CONFLICT(word) DO UPDATE SET viewed_at = excluded.viewed_at",
            params![headword, viewed_at],
        )?;
        // rowid breaks same-millisecond ties: newest insertion survives
        self.conn.execute(
            "DELETE FROM history WHERE word NOT IN (
                SELECT word FROM history ORDER BY viewed_at DESC, rowid DESC LIMIT ?1
            )",
            params![cap as i64],
        )?;
        Ok(())
    }

    /// Viewed headwords, most recent first
    pub fn history_words(&self) -> Result<Vec<String>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT word FROM history ORDER BY viewed_at DESC, rowid DESC")?;
        let words = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<_, _>>()?;
        Ok(words)
    }

    /// Delete all history rows unconditionally
    pub fn clear_history(&self) -> Result<(), StoreError> {
        self.conn.execute("DELETE FROM history", [])?;
        Ok(())
    }

    // ============ Bounded favorites ============

    /// Toggle a favorite; returns the new state (`true` = now favorited).
    ///
    /// Inserting past `cap` first evicts the record with the smallest
    /// insertion sequence. Insertion order is the AUTOINCREMENT sequence,
    /// never a timestamp.
    pub fn toggle_favorite(&self, headword: &str, cap: usize) -> Result<bool, StoreError> {
        if self.is_favorite(headword)? {
            self.conn
                .execute("DELETE FROM favorites WHERE word = ?1", params![headword])?;
            return Ok(false);
        }

        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM favorites", [], |row| row.get(0))?;
        if count >= cap as i64 {
            self.conn.execute(
                "DELETE FROM favorites WHERE seq = (SELECT MIN(seq) FROM favorites)",
                [],
            )?;
        }
        self.conn
            .execute("INSERT INTO favorites (word) VALUES (?1)", params![headword])?;
        Ok(true)
    }

    /// Pure read, no side effects
    pub fn is_favorite(&self, headword: &str) -> Result<bool, StoreError> {
        let exists = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM favorites WHERE word = ?1)",
            params![headword],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    /// Favorited headwords, newest insertion first
    pub fn favorite_words(&self) -> Result<Vec<String>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT word FROM favorites ORDER BY seq DESC")?;
        let words = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<_, _>>()?;
        Ok(words)
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
