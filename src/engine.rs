// ZyDict Engine Facade
// The presentation-collaborator interface over one explicitly constructed store

use crate::candidates::{lookup_candidates, lookup_candidates_any_position};
use crate::config::EngineConfig;
use crate::search::run_search;
use crate::store::DictStore;
use crate::types::{Entry, StoreError};
use std::path::Path;

/// Main lookup engine.
///
/// Combines the components behind the interface the presentation layer
/// consumes: text search, phonetic candidate lookup, and the bounded
/// history/favorites store. The store handle is passed in explicitly -
/// there is no hidden global instance - and a failed open is not fatal:
/// per the error model, every query on an unavailable store degrades to an
/// empty result, and write failures are logged and swallowed. "Not found"
/// is always an empty sequence or `false`, never an error.
pub struct ZyDict {
    store: Option<DictStore>,
    config: EngineConfig,
}

impl ZyDict {
    /// Open a store file with the default (idiom) configuration.
    ///
    /// An unopenable store yields a dictionary whose every query is empty;
    /// the cause is logged once here.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::open_with(path, EngineConfig::default())
    }

    /// Open a store file with an explicit configuration
    pub fn open_with<P: AsRef<Path>>(path: P, config: EngineConfig) -> Self {
        let store = match DictStore::open(path) {
            Ok(store) => Some(store),
            Err(err) => {
                log::warn!("dictionary store unavailable: {}", err);
                None
            }
        };
        Self { store, config }
    }

    /// Wrap an already-constructed store handle (test doubles included)
    pub fn with_store(store: DictStore, config: EngineConfig) -> Self {
        Self {
            store: Some(store),
            config,
        }
    }

    /// True when the underlying store opened successfully
    pub fn is_available(&self) -> bool {
        self.store.is_some()
    }

    /// Text search, ranked, capped at the configured limit
    pub fn search(&self, keyword: &str) -> Vec<Entry> {
        self.read(Vec::new(), "search", |store| {
            run_search(store, &self.config, keyword)
        })
    }

    /// Next-character candidates for a virtual-keyboard buffer
    pub fn candidates(&self, buffer: &str) -> Vec<char> {
        self.read(Vec::new(), "candidate lookup", |store| {
            lookup_candidates(store, buffer)
        })
    }

    /// Coarser candidate pool matching the run at any syllable position
    pub fn candidates_any_position(&self, buffer: &str) -> Vec<char> {
        self.read(Vec::new(), "candidate lookup", |store| {
            lookup_candidates_any_position(store, buffer)
        })
    }

    /// Record a detail-view event; failures never block the read path
    pub fn record_view(&self, headword: &str) {
        self.write("record view", |store| {
            store.record_view(headword, self.config.history_cap)
        });
    }

    /// Delete the entire view history
    pub fn clear_history(&self) {
        self.write("clear history", DictStore::clear_history);
    }

    /// Toggle a favorite; returns the new state (`true` = now favorited)
    pub fn toggle_favorite(&self, headword: &str) -> bool {
        self.read(false, "toggle favorite", |store| {
            store.toggle_favorite(headword, self.config.favorite_cap)
        })
    }

    pub fn is_favorite(&self, headword: &str) -> bool {
        self.read(false, "favorite lookup", |store| {
            store.is_favorite(headword)
        })
    }

    /// Recently viewed entries, most recent first
    pub fn history(&self) -> Vec<Entry> {
        self.read(Vec::new(), "history", |store| {
            let words = store.history_words()?;
            resolve_words(store, &words)
        })
    }

    /// Favorited entries, newest insertion first
    pub fn favorites(&self) -> Vec<Entry> {
        self.read(Vec::new(), "favorites", |store| {
            let words = store.favorite_words()?;
            resolve_words(store, &words)
        })
    }

    fn read<T>(
        &self,
        default: T,
        what: &str,
        op: impl FnOnce(&DictStore) -> Result<T, StoreError>,
    ) -> T {
        match &self.store {
            Some(store) => op(store).unwrap_or_else(|err| {
                log::warn!("{} failed: {}", what, err);
                default
            }),
            None => default,
        }
    }

    fn write(&self, what: &str, op: impl FnOnce(&DictStore) -> Result<(), StoreError>) {
        self.read((), what, op);
    }
}

/// Resolve stored headwords back to entries, skipping any no longer present
fn resolve_words(store: &DictStore, words: &[String]) -> Result<Vec<Entry>, StoreError> {
    let mut entries = Vec::with_capacity(words.len());
    for word in words {
        if let Some(entry) = store.entry_by_headword(word)? {
            entries.push(entry);
        }
    }
    Ok(entries)
}
