// ZyDict Search Ranking Engine
// Classifies keywords, builds parameterized queries, orders results deterministically

use crate::config::EngineConfig;
use crate::schema::Field;
use crate::store::DictStore;
use crate::types::{Entry, QueryClass, StoreError};
use rusqlite::params;

/// Classify a free-text keyword into its query class.
///
/// 1-4 CJK ideographs and nothing else is a headword-prefix query; a
/// substring or definition scan would surface every idiom containing the
/// character mid-word. Everything else (latin, phonetic symbols, longer
/// strings) gets the general query shape.
///
/// # Examples
/// ```
/// # use zydict::search::classify_keyword;
/// # use zydict::QueryClass;
/// assert_eq!(classify_keyword("不"), QueryClass::CjkPrefix);
/// assert_eq!(classify_keyword("一字千金"), QueryClass::CjkPrefix);
/// assert_eq!(classify_keyword("ㄅㄨ"), QueryClass::General);
/// assert_eq!(classify_keyword("abc"), QueryClass::General);
/// ```
pub fn classify_keyword(keyword: &str) -> QueryClass {
    let count = keyword.chars().count();
    if (1..=4).contains(&count) && keyword.chars().all(is_cjk_ideograph) {
        QueryClass::CjkPrefix
    } else {
        QueryClass::General
    }
}

/// Execute a search and return at most `config.result_limit` entries.
///
/// Ordering: exact headword match first, then shorter headwords, then
/// stroke count ascending when the store carries it. An empty keyword or
/// an empty result set is an empty vector, never an error.
pub fn run_search(
    store: &DictStore,
    config: &EngineConfig,
    keyword: &str,
) -> Result<Vec<Entry>, StoreError> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Ok(Vec::new());
    }

    let layout = store.layout();
    let headword = layout.field_expr(Field::Headword);
    let prefix = format!("{}%", escape_like(keyword));
    let limit = config.result_limit as i64;

    // ?1 prefix pattern, ?2 exact keyword (rank), ?3 limit, ?4 contains pattern
    let order = order_clause(&headword, layout.has_strokes());

    match classify_keyword(keyword) {
        QueryClass::CjkPrefix => {
            let sql = format!(
                "SELECT {} FROM entries WHERE {} LIKE ?1 ESCAPE '\\' {} LIMIT ?3",
                layout.select_list(),
                headword,
                order,
            );
            store.query_entries(&sql, params![prefix, keyword, limit])
        }
        QueryClass::General => {
            let contains = format!("%{}%", escape_like(keyword));
            let sql = format!(
                "SELECT {} FROM entries
                 WHERE {} LIKE ?1 ESCAPE '\\'
                    OR {} LIKE ?1 ESCAPE '\\'
                    OR {} LIKE ?4 ESCAPE '\\'
                    OR {} LIKE ?4 ESCAPE '\\'
                 {} LIMIT ?3",
                layout.select_list(),
                headword,
                layout.field_expr(Field::Phonetic),
                layout.field_expr(Field::Definition),
                layout.field_expr(Field::Synonyms),
                order,
            );
            store.query_entries(&sql, params![prefix, keyword, limit, contains])
        }
    }
}

/// Deterministic ordering: exact match rank, headword length, strokes.
///
/// The strokes key only exists on single-character stores; length ties at
/// one character are then broken by stroke count ascending.
fn order_clause(headword_expr: &str, has_strokes: bool) -> String {
    let strokes = if has_strokes { ", strokes" } else { "" };
    format!(
        "ORDER BY CASE WHEN {} = ?2 THEN 0 ELSE 1 END, LENGTH({}){}",
        headword_expr, headword_expr, strokes
    )
}

/// CJK unified ideographs (base block, extension A, compatibility block)
#[inline]
fn is_cjk_ideograph(ch: char) -> bool {
    matches!(ch as u32, 0x4E00..=0x9FFF | 0x3400..=0x4DBF | 0xF900..=0xFAFF)
}

/// Escape LIKE metacharacters in user input before binding
pub(crate) fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
