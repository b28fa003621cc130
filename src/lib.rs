//! # ZyDict: Zhuyin Lexicon Search & Phonetic Matching Engine
//!
//! A local lookup engine for a structured Chinese lexicon (single characters
//! or multi-character idioms) with ranked text search, incremental zhuyin
//! candidate lookup, and bounded history/favorites stores.
//!
//! ## Three Query Styles
//!
//! 1. **Text search** - literal/prefix search with deterministic ranking
//!    - `dict.search("不")` - CJK keywords match headword prefixes only
//!    - `dict.search("ㄅㄨ")` - other keywords also scan phonetics,
//!      definitions, and synonyms
//! 2. **Candidate lookup** - incremental phonetic input from a virtual
//!    zhuyin keyboard, tone-sandhi aware
//!    - `dict.candidates("ㄅㄨˊ")` - next-character candidates
//! 3. **History & favorites** - capped, ordered, restart-surviving
//!    - `dict.record_view("不")`, `dict.toggle_favorite("不")`
//!
//! ## Example Usage
//!
//! ```ignore
//! use zydict::{EngineConfig, ZyDict};
//!
//! let dict = ZyDict::open_with("lexicon.db", EngineConfig::idiom());
//!
//! // Ranked prefix search
//! let results = dict.search("一字");
//!
//! // Phonetic candidates for a keyboard buffer
//! let candidates = dict.candidates("一ㄗˋ");
//!
//! // Bounded stores
//! dict.record_view("一字千金");
//! let favorited = dict.toggle_favorite("一字千金");
//! ```
//!
//! ## Architecture
//!
//! - **Schema Adapter** - canonical entry view over heterogeneous layouts
//! - **Bopomofo Model** - the closed zhuyin alphabet and syllable splitter
//! - **Phonetic Matcher** - sandhi-aware two-tier syllable matching
//! - **Search Ranking Engine** - parameterized queries, deterministic order
//! - **Candidate Lookup Engine** - keyboard-driven next-character lookup
//! - **Bounded Store** - capped history/favorites with defined eviction
//!
//! Queries never fail outward: an unavailable store degrades to empty
//! results and write failures are logged and swallowed.

pub mod bopomofo;
pub mod candidates;
pub mod config;
pub mod engine;
pub mod matcher;
pub mod schema;
pub mod search;
pub mod store;
pub mod types;

// Re-export main types and functions for convenience
pub use candidates::{lookup_candidates, lookup_candidates_any_position, ComposeState, Composer};
pub use config::EngineConfig;
pub use engine::ZyDict;
pub use matcher::{base_matches, syllable_matches, SANDHI_RULES};
pub use schema::SchemaLayout;
pub use search::{classify_keyword, run_search};
pub use store::DictStore;
pub use types::{Entry, QueryClass, StoreError, Syllable, Tone};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
