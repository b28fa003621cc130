// Integration tests for the search ranking engine and the schema adapter

use rusqlite::Connection;
use zydict::{classify_keyword, run_search, DictStore, EngineConfig, QueryClass};

fn idiom_store() -> DictStore {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE entries (
            word TEXT, phonetic TEXT, definition TEXT,
            example TEXT, source TEXT, synonyms TEXT
        );
        INSERT INTO entries VALUES
            ('一', 'ㄧ', 'the number one', '', '', ''),
            ('一字千金', 'ㄧ ㄗˋ ㄑㄧㄢ ㄐㄧㄣ', 'a word worth a thousand gold', '', '', '字字珠璣擲地有聲'),
            ('一見如故', 'ㄧ ㄐㄧㄢˋ ㄖㄨˊ ㄍㄨˋ', 'like old friends at first meeting', '', '', ''),
            ('不', 'ㄅㄨˋ', 'negation', '', '', ''),
            ('不約而同', 'ㄅㄨˋ ㄩㄝ ㄦˊ ㄊㄨㄥˊ', 'to coincide without prior agreement', '', '', ''),
            ('統一', 'ㄊㄨㄥˇ ㄧ', 'to unify; to make 一體', '', '', ''),
            ('千金', 'ㄑㄧㄢ ㄐㄧㄣ', 'a thousand gold; a daughter', '', '', '');",
    )
    .unwrap();
    DictStore::from_connection(conn).unwrap()
}

// ============ Query Classification ============

#[test]
fn test_classification() {
    assert_eq!(classify_keyword("一"), QueryClass::CjkPrefix);
    assert_eq!(classify_keyword("一字千金"), QueryClass::CjkPrefix);
    assert_eq!(classify_keyword("ㄅㄨ"), QueryClass::General);
    assert_eq!(classify_keyword("gold"), QueryClass::General);
}

// ============ CJK Prefix Queries ============

#[test]
fn test_cjk_query_matches_prefix_only() {
    let store = idiom_store();
    let results = run_search(&store, &EngineConfig::idiom(), "一").unwrap();

    assert!(!results.is_empty());
    for entry in &results {
        assert!(
            entry.headword.starts_with("一"),
            "{} is not a 一-prefix match",
            entry.headword
        );
    }
    // 統一 contains 一 mid-word and in its definition; prefix class excludes it
    assert!(!results.iter().any(|e| e.headword == "統一"));
}

#[test]
fn test_exact_match_ranks_first() {
    let store = idiom_store();
    let results = run_search(&store, &EngineConfig::idiom(), "一").unwrap();

    assert_eq!(results[0].headword, "一");
    // remaining results ordered by headword length ascending
    for pair in results[1..].windows(2) {
        assert!(pair[0].headword.chars().count() <= pair[1].headword.chars().count());
    }
}

#[test]
fn test_four_character_prefix_query() {
    let store = idiom_store();
    let results = run_search(&store, &EngineConfig::idiom(), "一字千金").unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].headword, "一字千金");
}

// ============ General Queries ============

#[test]
fn test_phonetic_prefix_search() {
    let store = idiom_store();
    let results = run_search(&store, &EngineConfig::idiom(), "ㄅㄨ").unwrap();

    let headwords: Vec<&str> = results.iter().map(|e| e.headword.as_str()).collect();
    assert!(headwords.contains(&"不"));
    assert!(headwords.contains(&"不約而同"));
    assert_eq!(results[0].headword, "不");
}

#[test]
fn test_definition_contains_search() {
    let store = idiom_store();
    let results = run_search(&store, &EngineConfig::idiom(), "gold").unwrap();

    let headwords: Vec<&str> = results.iter().map(|e| e.headword.as_str()).collect();
    assert!(headwords.contains(&"一字千金"));
    assert!(headwords.contains(&"千金"));
}

#[test]
fn test_synonyms_contains_search() {
    let store = idiom_store();

    // 2 CJK chars stay in the prefix class and miss the synonym scan
    let results = run_search(&store, &EngineConfig::idiom(), "珠璣").unwrap();
    assert!(results.is_empty());

    // 5 CJK chars fall out of the prefix class and reach it
    let results = run_search(&store, &EngineConfig::idiom(), "字字珠璣擲").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].headword, "一字千金");
}

#[test]
fn test_no_results_is_empty_not_error() {
    let store = idiom_store();
    let results = run_search(&store, &EngineConfig::idiom(), "萬").unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_empty_keyword_is_empty() {
    let store = idiom_store();
    assert!(run_search(&store, &EngineConfig::idiom(), "").unwrap().is_empty());
    assert!(run_search(&store, &EngineConfig::idiom(), "   ").unwrap().is_empty());
}

#[test]
fn test_like_metacharacters_are_literal() {
    let store = idiom_store();
    // '%' must not act as a wildcard
    let results = run_search(&store, &EngineConfig::idiom(), "%").unwrap();
    assert!(results.is_empty());

    let results = run_search(&store, &EngineConfig::idiom(), "_").unwrap();
    assert!(results.is_empty());
}

// ============ Result Caps ============

#[test]
fn test_result_cap_applies() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE entries (
            word TEXT, phonetic TEXT, definition TEXT, example TEXT, source TEXT
        );",
    )
    .unwrap();
    for i in 0..120 {
        conn.execute(
            "INSERT INTO entries VALUES (?1, 'ㄅㄚ', 'filler entry', '', '')",
            [format!("詞{}", i)],
        )
        .unwrap();
    }
    let store = DictStore::from_connection(conn).unwrap();

    let results = run_search(&store, &EngineConfig::idiom(), "詞").unwrap();
    assert_eq!(results.len(), 100);

    let results = run_search(&store, &EngineConfig::single_char(), "詞").unwrap();
    assert_eq!(results.len(), 50);
}

// ============ Stroke-count Tiebreak ============

#[test]
fn test_single_char_ties_break_by_strokes() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE entries (
            word TEXT, phonetic TEXT, definition TEXT,
            example TEXT, source TEXT,
            pinyin TEXT, synonyms TEXT, antonyms TEXT,
            strokes INTEGER, radical TEXT,
            story TEXT, usage TEXT, note TEXT
        );
        INSERT INTO entries VALUES
            ('巴', 'ㄅㄚ', 'to cling', '', '', 'ba', '', '', 4, '己', '', '', ''),
            ('八', 'ㄅㄚ', 'eight', '', '', 'ba', '', '', 2, '八', '', '', '');",
    )
    .unwrap();
    let store = DictStore::from_connection(conn).unwrap();

    let results = run_search(&store, &EngineConfig::single_char(), "ㄅㄚ").unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].headword, "八");
    assert_eq!(results[0].strokes, Some(2));
    assert_eq!(results[1].headword, "巴");
}

// ============ Legacy Column-shift Batches ============

#[test]
fn test_shifted_rows_are_searchable() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE entries (
            word TEXT, phonetic TEXT, definition TEXT, example TEXT, source TEXT
        );
        INSERT INTO entries VALUES
            ('好', 'ㄏㄠˇ', 'fine', '', ''),
            ('2841', '好看', 'ㄏㄠˇ ㄎㄢˋ', 'good-looking', '');",
    )
    .unwrap();
    let store = DictStore::from_connection(conn).unwrap();

    let results = run_search(&store, &EngineConfig::idiom(), "好").unwrap();
    let headwords: Vec<&str> = results.iter().map(|e| e.headword.as_str()).collect();

    assert_eq!(headwords, vec!["好", "好看"]);
    assert_eq!(results[1].phonetic, "ㄏㄠˇ ㄎㄢˋ");
    assert_eq!(results[1].definition, "good-looking");
}
