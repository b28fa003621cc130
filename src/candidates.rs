// ZyDict Candidate Lookup Engine
// Incremental next-character lookup driven by a virtual zhuyin keyboard

use crate::bopomofo::{is_phonetic_symbol, parse_syllable, split_phonetic};
use crate::matcher::{base_matches, syllable_matches};
use crate::schema::Field;
use crate::search::escape_like;
use crate::store::DictStore;
use crate::types::{Entry, StoreError, Syllable};
use rusqlite::params;
use rustc_hash::FxHashSet;

/// Composition state, a pure function of the input buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeState {
    /// No input at all
    Idle,

    /// The buffer ends in a run of phonetic symbols
    Composing,

    /// Committed characters only; the last composition was resolved
    Resolved,
}

impl ComposeState {
    pub fn of(buffer: &str) -> Self {
        if buffer.is_empty() {
            ComposeState::Idle
        } else if split_trailing_run(buffer).1.is_empty() {
            ComposeState::Resolved
        } else {
            ComposeState::Composing
        }
    }
}

/// Split a buffer into (committed prefix, trailing phonetic run).
///
/// The run is the maximal trailing sequence of phonetic symbols, scanning
/// backward from the end and stopping at the first non-phonetic character.
pub fn split_trailing_run(buffer: &str) -> (&str, &str) {
    let boundary = buffer
        .char_indices()
        .rev()
        .find(|(_, ch)| !is_phonetic_symbol(*ch))
        .map(|(i, ch)| i + ch.len_utf8())
        .unwrap_or(0);
    buffer.split_at(boundary)
}

/// Input buffer for the virtual keyboard.
///
/// Keystrokes accumulate phonetic symbols; selecting a candidate replaces
/// the trailing run with the chosen character, ready for the next syllable.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    buffer: String,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn state(&self) -> ComposeState {
        ComposeState::of(&self.buffer)
    }

    /// The committed (non-phonetic) prefix
    pub fn committed(&self) -> &str {
        split_trailing_run(&self.buffer).0
    }

    /// The trailing phonetic run, empty unless composing
    pub fn pending_run(&self) -> &str {
        split_trailing_run(&self.buffer).1
    }

    /// Append one keystroke
    pub fn push(&mut self, ch: char) {
        self.buffer.push(ch);
    }

    /// Remove the last keystroke (backspace)
    pub fn pop(&mut self) {
        self.buffer.pop();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Commit a selected candidate: the trailing run is replaced by the
    /// chosen character, ending the composition.
    pub fn select(&mut self, ch: char) {
        let committed_len = split_trailing_run(&self.buffer).0.len();
        self.buffer.truncate(committed_len);
        self.buffer.push(ch);
    }
}

/// Next-character candidates for the current buffer.
///
/// The trailing phonetic run is matched against the syllable at position N
/// (N = committed-character count) of every entry starting with the
/// committed prefix; the character at that position is collected,
/// deduplicated, first occurrence first. Strict-tier matches are returned
/// when any exist; a tone-ignored fallback pool is consulted only when the
/// strict pool is empty and the run carries an explicit tone.
pub fn lookup_candidates(store: &DictStore, buffer: &str) -> Result<Vec<char>, StoreError> {
    let (committed, run) = split_trailing_run(buffer);
    if run.is_empty() {
        return Ok(Vec::new());
    }

    let query = parse_syllable(run);
    if query.base.is_empty() {
        // a bare tone mark cannot anchor a lookup
        return Ok(Vec::new());
    }

    let position = committed.chars().count();
    let rows = entries_with_prefix(store, committed, position)?;

    Ok(tiered_collect(&rows, &query, Some(position)))
}

/// Any-position variant: the run may match any syllable position of any
/// entry, collecting the character at the matched position. A coarser
/// IME-style pool for callers that got nothing from the anchored lookup.
pub fn lookup_candidates_any_position(
    store: &DictStore,
    buffer: &str,
) -> Result<Vec<char>, StoreError> {
    let (_, run) = split_trailing_run(buffer);
    if run.is_empty() {
        return Ok(Vec::new());
    }

    let query = parse_syllable(run);
    if query.base.is_empty() {
        return Ok(Vec::new());
    }

    let rows = entries_with_prefix(store, "", 0)?;

    Ok(tiered_collect(&rows, &query, None))
}

/// Strict tier first; the base-only pool never outranks it
fn tiered_collect(rows: &[Entry], query: &Syllable, position: Option<usize>) -> Vec<char> {
    let strict = collect_matches(rows, query, position, syllable_matches);
    if !strict.is_empty() {
        return strict;
    }
    if query.tone.is_some() {
        return collect_matches(rows, query, position, base_matches);
    }
    Vec::new()
}

/// Collect candidate characters, deduplicated in first-seen order.
///
/// With `position` set, only the syllable at that index is tested; without
/// it, every syllable position of the entry is.
fn collect_matches(
    rows: &[Entry],
    query: &Syllable,
    position: Option<usize>,
    accept: fn(&Syllable, &Syllable) -> bool,
) -> Vec<char> {
    let mut seen = FxHashSet::default();
    let mut candidates = Vec::new();

    for entry in rows {
        let chars: Vec<char> = entry.headword.chars().collect();
        let syllables = split_phonetic(&entry.phonetic, chars.len());

        let positions: Vec<usize> = match position {
            Some(n) if n < chars.len() => vec![n],
            Some(_) => Vec::new(),
            None => (0..chars.len()).collect(),
        };

        for n in positions {
            if accept(query, &parse_syllable(&syllables[n])) && seen.insert(chars[n]) {
                candidates.push(chars[n]);
            }
        }
    }

    candidates
}

/// Entries whose headword starts with `prefix` and extends past it
fn entries_with_prefix(
    store: &DictStore,
    prefix: &str,
    min_chars: usize,
) -> Result<Vec<Entry>, StoreError> {
    let layout = store.layout();
    let headword = layout.field_expr(Field::Headword);
    let pattern = format!("{}%", escape_like(prefix));
    let sql = format!(
        "SELECT {} FROM entries WHERE {} LIKE ?1 ESCAPE '\\' AND LENGTH({}) > ?2",
        layout.select_list(),
        headword,
        headword,
    );
    store.query_entries(&sql, params![pattern, min_chars as i64])
}
