// ZyDict Engine Configuration
// Result and store caps live here, never as scattered literals

/// Result cap for idiom-style lexicons
pub const IDIOM_RESULT_LIMIT: usize = 100;

/// Result cap for single-character lexicons
pub const SINGLE_CHAR_RESULT_LIMIT: usize = 50;

/// Maximum retained history records
pub const HISTORY_CAP: usize = 50;

/// Maximum retained favorite records
pub const FAVORITE_CAP: usize = 30;

/// Engine configuration.
///
/// Two store revisions ship with different search caps; pick the matching
/// profile with [`EngineConfig::idiom`] or [`EngineConfig::single_char`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum rows returned by a text search
    pub result_limit: usize,

    /// History retention cap (eviction by recency)
    pub history_cap: usize,

    /// Favorites retention cap (eviction by insertion order)
    pub favorite_cap: usize,
}

impl EngineConfig {
    /// Profile for idiom-style lexicons (multi-character headwords)
    pub fn idiom() -> Self {
        Self {
            result_limit: IDIOM_RESULT_LIMIT,
            history_cap: HISTORY_CAP,
            favorite_cap: FAVORITE_CAP,
        }
    }

    /// Profile for single-character lexicons
    pub fn single_char() -> Self {
        Self {
            result_limit: SINGLE_CHAR_RESULT_LIMIT,
            ..Self::idiom()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::idiom()
    }
}
