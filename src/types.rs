// ZyDict Type Definitions
// Core types for lexicon entries, syllables, and store errors

use thiserror::Error;

/// One lexicon row in canonical form.
///
/// `headword` is the immutable lookup key. `phonetic` carries one
/// marker-delimited zhuyin syllable per headword character. The extended
/// fields exist only in some store revisions and resolve to empty strings
/// (`None` for `strokes`) when the underlying table lacks them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    /// The lookup key: a single character or a multi-character idiom
    pub headword: String,

    /// Raw zhuyin transcription, one syllable per headword character
    pub phonetic: String,

    /// Free-text definition (may embed numbering and example markers)
    pub definition: String,

    /// Example sentence
    pub example: String,

    /// Source citation
    pub source: String,

    // Extended fields (present only in some store revisions)
    /// Romanized reading
    pub pinyin: String,
    /// Synonym list
    pub synonyms: String,
    /// Antonym list
    pub antonyms: String,
    /// Stroke count, single-character stores only
    pub strokes: Option<u32>,
    /// Radical, single-character stores only
    pub radical: String,
    /// Origin story
    pub story: String,
    /// Usage notes
    pub usage: String,
    /// Discrimination notes
    pub note: String,
}

impl Entry {
    /// Create a minimal entry from the three core fields
    pub fn new(headword: &str, phonetic: &str, definition: &str) -> Self {
        Self {
            headword: headword.to_string(),
            phonetic: phonetic.to_string(),
            definition: definition.to_string(),
            ..Self::default()
        }
    }
}

/// The five zhuyin tone marks.
///
/// First tone is conventionally unmarked in source data; a parsed syllable
/// therefore carries `Option<Tone>`, with `None` meaning "no mark".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// ˉ (usually implicit)
    First,
    /// ˊ
    Second,
    /// ˇ
    Third,
    /// ˋ
    Fourth,
    /// ˙ (written before the syllable)
    Neutral,
}

impl Tone {
    /// The tone mark character for this tone
    pub fn mark(self) -> char {
        match self {
            Tone::First => 'ˉ',
            Tone::Second => 'ˊ',
            Tone::Third => 'ˇ',
            Tone::Fourth => 'ˋ',
            Tone::Neutral => '˙',
        }
    }

    /// Map a tone mark character back to its tone
    pub fn from_mark(ch: char) -> Option<Tone> {
        match ch {
            'ˉ' => Some(Tone::First),
            'ˊ' => Some(Tone::Second),
            'ˇ' => Some(Tone::Third),
            'ˋ' => Some(Tone::Fourth),
            '˙' => Some(Tone::Neutral),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// One parsed phonetic unit: base symbols plus an optional tone mark.
///
/// Derived from a raw syllable string, never persisted. An empty base means
/// the transcription had no data for that position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    /// The syllable without its tone mark
    pub base: String,

    /// The tone mark, `None` when unmarked (implicit first tone)
    pub tone: Option<Tone>,
}

impl Syllable {
    pub fn new(base: &str, tone: Option<Tone>) -> Self {
        Self {
            base: base.to_string(),
            tone,
        }
    }

    /// True when the transcription carried nothing at this position
    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.tone.is_none()
    }
}

impl std::fmt::Display for Syllable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.tone {
            Some(Tone::Neutral) => write!(f, "˙{}", self.base),
            Some(tone) => write!(f, "{}{}", self.base, tone.mark()),
            None => write!(f, "{}", self.base),
        }
    }
}

/// Classification of a free-text search keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryClass {
    /// 1-4 CJK ideographs, nothing else: headword prefix match only
    CjkPrefix,

    /// Everything else: headword/phonetic prefix or definition/synonym scan
    General,
}

impl std::fmt::Display for QueryClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryClass::CjkPrefix => write!(f, "CjkPrefix"),
            QueryClass::General => write!(f, "General"),
        }
    }
}

/// Store-layer errors
///
/// The `ZyDict` facade never surfaces these to callers: every query degrades
/// to an empty result and writes are logged and swallowed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("schema mismatch: core column '{0}' is missing")]
    SchemaMismatch(&'static str),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}
