// ZyDict Phonetic Matcher
// Decides whether a lexicon syllable satisfies a typed query syllable

use crate::types::{Syllable, Tone};

/// One tone-sandhi exception: a (base, queried tone) pair and the candidate
/// tones it accepts.
///
/// Sandhi rules are data, not branching logic - extending the attested set
/// means adding a row here.
#[derive(Debug, Clone, Copy)]
pub struct SandhiRule {
    /// Syllable base the rule applies to
    pub base: &'static str,

    /// Tone the user typed
    pub query_tone: Tone,

    /// Candidate tones accepted for this query (`None` = unmarked)
    pub accepted: &'static [Option<Tone>],
}

/// Attested sandhi exceptions.
///
/// ㄅㄨ queried with 2nd tone also accepts its 4th-tone citation form; ㄧ
/// queried with a sandhi tone (2nd or 4th) accepts the unmarked/1st-tone
/// citation reading. The queried tone itself is always in the accepted set.
pub const SANDHI_RULES: &[SandhiRule] = &[
    SandhiRule {
        base: "ㄅㄨ",
        query_tone: Tone::Second,
        accepted: &[Some(Tone::Second), Some(Tone::Fourth)],
    },
    SandhiRule {
        base: "ㄧ",
        query_tone: Tone::Second,
        accepted: &[None, Some(Tone::First), Some(Tone::Second)],
    },
    SandhiRule {
        base: "ㄧ",
        query_tone: Tone::Fourth,
        accepted: &[None, Some(Tone::First), Some(Tone::Fourth)],
    },
];

/// Candidate tones accepted for a query tone on a given base.
///
/// Looks up the sandhi table first, then falls back to the base-independent
/// conventions: 1st tone accepts the unmarked form (source data leaves first
/// tone implicit), everything else requires exact equality.
fn tone_accepts(base: &str, query_tone: Tone, candidate_tone: Option<Tone>) -> bool {
    for rule in SANDHI_RULES {
        if rule.base == base && rule.query_tone == query_tone {
            return rule.accepted.contains(&candidate_tone);
        }
    }

    match query_tone {
        Tone::First => matches!(candidate_tone, None | Some(Tone::First)),
        tone => candidate_tone == Some(tone),
    }
}

/// Strict-tier match: base equality always, tone per the sandhi table.
///
/// A query with no tone mark accepts any candidate tone. An empty candidate
/// syllable (missing transcription data) never matches a non-empty query,
/// but is not an error.
pub fn syllable_matches(query: &Syllable, candidate: &Syllable) -> bool {
    if query.base != candidate.base {
        return false;
    }

    match query.tone {
        None => true,
        Some(query_tone) => tone_accepts(&query.base, query_tone, candidate.tone),
    }
}

/// Fallback-tier match: base equality only, tone ignored.
///
/// Only consulted when the strict tier produced nothing and the query
/// carried an explicit tone; strict results always take priority, so a
/// tone-mismatched candidate can never outrank a tone-correct one.
pub fn base_matches(query: &Syllable, candidate: &Syllable) -> bool {
    !query.base.is_empty() && query.base == candidate.base
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bopomofo::parse_syllable;

    fn matches(query: &str, candidate: &str) -> bool {
        syllable_matches(&parse_syllable(query), &parse_syllable(candidate))
    }

    // ============ Base Equality ============

    #[test]
    fn test_base_mismatch_never_matches() {
        assert!(!matches("ㄅㄨˊ", "ㄅㄚˊ"));
        assert!(!matches("ㄅ", "ㄅㄨ"));
    }

    #[test]
    fn test_toneless_query_accepts_any_tone() {
        assert!(matches("ㄧ", "ㄧ"));
        assert!(matches("ㄧ", "ㄧˉ"));
        assert!(matches("ㄧ", "ㄧˊ"));
        assert!(matches("ㄧ", "ㄧˇ"));
        assert!(matches("ㄧ", "ㄧˋ"));
        assert!(matches("ㄧ", "˙ㄧ"));
    }

    // ============ Sandhi Exceptions ============

    #[test]
    fn test_bu_second_tone_sandhi() {
        assert!(matches("ㄅㄨˊ", "ㄅㄨˊ"));
        assert!(matches("ㄅㄨˊ", "ㄅㄨˋ"));
        assert!(!matches("ㄅㄨˊ", "ㄅㄨˇ"));
        assert!(!matches("ㄅㄨˊ", "ㄅㄨ"));
    }

    #[test]
    fn test_yi_sandhi_tones_accept_citation_form() {
        assert!(matches("ㄧˊ", "ㄧ"));
        assert!(matches("ㄧˊ", "ㄧˉ"));
        assert!(matches("ㄧˋ", "ㄧ"));
        assert!(matches("ㄧˋ", "ㄧˉ"));

        assert!(!matches("ㄧˊ", "ㄧˇ"));
        assert!(!matches("ㄧˋ", "ㄧˇ"));
    }

    #[test]
    fn test_sandhi_is_base_specific() {
        // the ㄅㄨ rule must not leak to other bases
        assert!(!matches("ㄌㄨˊ", "ㄌㄨˋ"));
    }

    // ============ Base-independent Defaults ============

    #[test]
    fn test_first_tone_accepts_unmarked() {
        assert!(matches("ㄅㄚˉ", "ㄅㄚ"));
        assert!(matches("ㄅㄚˉ", "ㄅㄚˉ"));
        assert!(!matches("ㄅㄚˉ", "ㄅㄚˊ"));
    }

    #[test]
    fn test_other_tones_require_equality() {
        assert!(matches("ㄐㄧˇ", "ㄐㄧˇ"));
        assert!(!matches("ㄐㄧˇ", "ㄐㄧˊ"));
        assert!(!matches("ㄐㄧˇ", "ㄐㄧ"));

        assert!(matches("˙ㄗ", "˙ㄗ"));
        assert!(!matches("˙ㄗ", "ㄗ"));
    }

    // ============ Empty Syllables ============

    #[test]
    fn test_empty_candidate_is_no_match_not_error() {
        assert!(!matches("ㄅㄨˊ", ""));
        assert!(!base_matches(
            &parse_syllable("ㄅㄨˊ"),
            &parse_syllable("")
        ));
    }

    #[test]
    fn test_empty_query_base_never_matches() {
        assert!(!base_matches(&parse_syllable(""), &parse_syllable("")));
    }

    // ============ Fallback Tier ============

    #[test]
    fn test_base_matches_ignores_tone() {
        assert!(base_matches(
            &parse_syllable("ㄐㄧˇ"),
            &parse_syllable("ㄐㄧˊ")
        ));
        assert!(!base_matches(
            &parse_syllable("ㄐㄧˇ"),
            &parse_syllable("ㄐㄩˊ")
        ));
    }
}
