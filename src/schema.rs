// ZyDict Schema Adapter
// Presents a canonical entry view over heterogeneous physical layouts

use crate::types::{Entry, StoreError};
use rusqlite::{Connection, Row};
use rustc_hash::FxHashSet;

/// Logical fields of the canonical entry view, in canonical column order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Headword,
    Phonetic,
    Definition,
    Example,
    Source,
    Pinyin,
    Synonyms,
    Antonyms,
    Strokes,
    Radical,
    Story,
    Usage,
    Note,
}

/// The basic 5-column revision. Column order matters: the legacy import
/// defect shifts every field one column to the right along this order.
const BASIC_COLUMNS: &[(Field, &str)] = &[
    (Field::Headword, "word"),
    (Field::Phonetic, "phonetic"),
    (Field::Definition, "definition"),
    (Field::Example, "example"),
    (Field::Source, "source"),
];

/// Columns added by the extended revision; resolve to empty when absent
const EXTENDED_COLUMNS: &[(Field, &str)] = &[
    (Field::Pinyin, "pinyin"),
    (Field::Synonyms, "synonyms"),
    (Field::Antonyms, "antonyms"),
    (Field::Strokes, "strokes"),
    (Field::Radical, "radical"),
    (Field::Story, "story"),
    (Field::Usage, "usage"),
    (Field::Note, "note"),
];

/// All canonical fields in select-list order
pub const ALL_FIELDS: [Field; 13] = [
    Field::Headword,
    Field::Phonetic,
    Field::Definition,
    Field::Example,
    Field::Source,
    Field::Pinyin,
    Field::Synonyms,
    Field::Antonyms,
    Field::Strokes,
    Field::Radical,
    Field::Story,
    Field::Usage,
    Field::Note,
];

/// Physical layout of the `entries` table, detected once at store-open.
///
/// Certain imported batches populated the headword column with a numeric row
/// id and shifted every real field one column to the right. A single table
/// may mix shifted and unshifted rows, so the guard has to be per-row; the
/// decision whether to emit it at all is made here, once, from an open-time
/// probe. Extended columns are likewise flagged once and read as empty when
/// absent. Pure read-time projection - this adapter never writes.
#[derive(Debug, Clone)]
pub struct SchemaLayout {
    /// Physical columns present in `entries`
    columns: FxHashSet<String>,

    /// True when the open-time probe found a legacy numeric-id row
    legacy_shift: bool,
}

impl SchemaLayout {
    /// Inspect the `entries` table and build the layout.
    ///
    /// # Errors
    /// `Unavailable` when the table is missing entirely, `SchemaMismatch`
    /// when a basic column is absent.
    pub fn detect(conn: &Connection) -> Result<Self, StoreError> {
        let mut stmt = conn.prepare("PRAGMA table_info(entries)")?;
        let columns: FxHashSet<String> = stmt
            .query_map([], |row| row.get::<_, String>(1))?
            .collect::<Result<_, _>>()?;

        if columns.is_empty() {
            return Err(StoreError::Unavailable(
                "entries table is missing".to_string(),
            ));
        }

        for (_, name) in BASIC_COLUMNS {
            if !columns.contains(*name) {
                return Err(StoreError::SchemaMismatch(*name));
            }
        }

        // The legacy batch predates the extended revision; only basic-layout
        // stores can contain shifted rows, and only when the probe actually
        // finds one does the per-row guard get emitted.
        let has_extended = EXTENDED_COLUMNS
            .iter()
            .any(|(_, name)| columns.contains(*name));
        let legacy_shift = if has_extended {
            false
        } else {
            conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM entries WHERE word GLOB '[0-9]*')",
                [],
                |row| row.get(0),
            )?
        };

        Ok(Self {
            columns,
            legacy_shift,
        })
    }

    /// True when the per-row column-shift guard is active
    pub fn has_legacy_rows(&self) -> bool {
        self.legacy_shift
    }

    /// True when the stroke-count column exists (single-character stores)
    pub fn has_strokes(&self) -> bool {
        self.columns.contains("strokes")
    }

    /// Canonical SQL expression for one logical field.
    ///
    /// Plain column reference normally; for a store with legacy rows, a
    /// per-row `CASE` that reads the next basic column when the headword
    /// column holds a numeric id. The last shifted field resolves to `''`.
    /// Absent extended columns resolve to `''` (`NULL` for strokes).
    pub fn field_expr(&self, field: Field) -> String {
        if let Some(idx) = BASIC_COLUMNS.iter().position(|(f, _)| *f == field) {
            let name = BASIC_COLUMNS[idx].1;
            if !self.legacy_shift {
                return name.to_string();
            }
            let shifted = match BASIC_COLUMNS.get(idx + 1) {
                Some((_, next)) => (*next).to_string(),
                None => "''".to_string(),
            };
            return format!(
                "CASE WHEN word GLOB '[0-9]*' THEN {} ELSE {} END",
                shifted, name
            );
        }

        let name = EXTENDED_COLUMNS
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, name)| *name)
            .unwrap_or("''");
        if self.columns.contains(name) {
            name.to_string()
        } else if field == Field::Strokes {
            "NULL".to_string()
        } else {
            "''".to_string()
        }
    }

    /// The full canonical select list, in [`ALL_FIELDS`] order
    pub fn select_list(&self) -> String {
        ALL_FIELDS
            .iter()
            .map(|field| self.field_expr(*field))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Build an [`Entry`] from a row selected with [`select_list`](Self::select_list)
    pub fn entry_from_row(&self, row: &Row) -> rusqlite::Result<Entry> {
        Ok(Entry {
            headword: row.get(0)?,
            phonetic: row.get(1)?,
            definition: row.get(2)?,
            example: row.get(3)?,
            source: row.get(4)?,
            pinyin: row.get(5)?,
            synonyms: row.get(6)?,
            antonyms: row.get(7)?,
            strokes: row.get(8)?,
            radical: row.get(9)?,
            story: row.get(10)?,
            usage: row.get(11)?,
            note: row.get(12)?,
        })
    }
}
