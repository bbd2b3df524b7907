//! End-to-end matching properties, exercised through the public API only.

use std::io::Cursor;

use aho_darts::{AhoCorasick, BuildError, Hit, MAX_LINE_LEN};

fn hit(begin: usize, end: usize, value: &str) -> Hit {
    Hit { begin, end, value: value.to_string() }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn every_keyword_matches_itself_fully() {
    // With prefixes and infixes of other keywords in the set, matching a
    // keyword against itself may report embedded keywords first ("hers"
    // also contains "he"), but the final hit always spans the whole input.
    let keywords = ["a", "he", "hers", "his", "she", "一", "一群羊", "Grüße"];
    let ac = AhoCorasick::build(keywords).unwrap();
    for keyword in keywords {
        let scalar_len = keyword.chars().count();
        let hits = ac.search_all(keyword);
        assert_eq!(
            hits.last(),
            Some(&hit(0, scalar_len - 1, keyword)),
            "keyword {keyword:?} must end with a full-span hit",
        );
    }
}

#[test]
fn prefix_free_keyword_matches_itself_exactly_once() {
    // For a prefix-free set, where no keyword occurs inside another, the
    // full-span hit is the only one.
    let keywords = ["cat", "dog", "mouse", "羊群"];
    let ac = AhoCorasick::build(keywords).unwrap();
    for keyword in keywords {
        let scalar_len = keyword.chars().count();
        assert_eq!(
            ac.search_all(keyword),
            [hit(0, scalar_len - 1, keyword)],
            "keyword {keyword:?} must produce exactly one full-span hit",
        );
    }
}

#[test]
fn empty_keyword_set_is_rejected() {
    assert!(matches!(
        AhoCorasick::build(Vec::<String>::new()),
        Err(BuildError::EmptyInput)
    ));
}

#[test]
fn all_blank_line_source_is_rejected() {
    assert!(matches!(
        AhoCorasick::build_from_lines(Cursor::new("\n \n\t\t\n   \n")),
        Err(BuildError::EmptyInput)
    ));
}

#[test]
fn line_source_trims_and_skips() {
    let ac = AhoCorasick::build_from_lines(Cursor::new("  he\n\nshe  \n\thers\t\n")).unwrap();
    assert_eq!(
        ac.search_all("ushers"),
        [hit(1, 3, "she"), hit(2, 5, "hers")],
    );
}

#[test]
fn overlong_lines_contribute_no_keyword() {
    let long = "a".repeat(MAX_LINE_LEN + 1);
    let source = format!("{long}\nhe\n");
    let ac = AhoCorasick::build_from_lines(Cursor::new(source)).unwrap();
    assert!(ac.contains_any("he"));
    assert!(!ac.contains_any(&"a".repeat(MAX_LINE_LEN + 1)));
}

#[test]
fn keyword_order_does_not_matter() {
    let forward = AhoCorasick::build(["she", "he"]).unwrap();
    let reverse = AhoCorasick::build(["he", "she"]).unwrap();
    for text in ["she", "he", "ushers", "hehehe shes", "", "一群"] {
        assert_eq!(forward.search_all(text), reverse.search_all(text), "{text:?}");
        assert_eq!(forward.indexes_all(text), reverse.indexes_all(text), "{text:?}");
        assert_eq!(forward.contains_any(text), reverse.contains_any(text), "{text:?}");
    }
}

// ---------------------------------------------------------------------------
// Matching semantics
// ---------------------------------------------------------------------------

#[test]
fn longest_match_wins_is_authoritative() {
    // Deliberate behavior: of the keywords ending at one text position, only
    // the longest is reported. "he" ends at position 2, covered by "she".
    let ac = AhoCorasick::build(["he", "she"]).unwrap();
    assert_eq!(ac.search_all("she"), [hit(0, 2, "she")]);
}

#[test]
fn overlaps_across_end_positions_are_preserved() {
    let ac = AhoCorasick::build(["hers", "his", "she", "he"]).unwrap();
    // Suppression is per end position only: "he" at [2,3] shares its end
    // with the longer "she" and disappears, while the standalone "he" at
    // [7,8] ends where nothing longer does and is reported.
    assert_eq!(
        ac.search_all("ushers hers"),
        [
            hit(1, 3, "she"),
            hit(2, 5, "hers"),
            hit(7, 8, "he"),
            hit(7, 10, "hers"),
        ],
    );
}

#[test]
fn offsets_count_scalars_not_bytes() {
    let ac = AhoCorasick::build(["一", "群", "一群羊"]).unwrap();
    // Every character here is 3 bytes in UTF-8; the offsets must not be.
    assert_eq!(ac.search_all("一群"), [hit(0, 0, "一"), hit(1, 1, "群")]);
    assert_eq!(ac.search_all("叫一群羊"), [
        hit(1, 1, "一"),
        hit(2, 2, "群"),
        hit(1, 3, "一群羊"),
    ]);
}

#[test]
fn repeated_occurrences_are_each_reported() {
    let ac = AhoCorasick::build(["he"]).unwrap();
    assert_eq!(ac.indexes_all("hehehe"), [0, 2, 4]);
}

#[test]
fn matching_is_idempotent() {
    let ac = AhoCorasick::build(["hers", "his", "she", "he"]).unwrap();
    let text = "ushers hers and his";
    let first = ac.search_all(text);
    let second = ac.search_all(text);
    assert_eq!(first, second);
}

#[test]
fn indexes_all_is_begin_projection_of_search_all() {
    let ac = AhoCorasick::build(["hers", "his", "she", "he", "一群羊"]).unwrap();
    for text in ["ushers hers", "hishe", "一群羊群", "nothing here... almost", ""] {
        let begins: Vec<usize> = ac.search_all(text).iter().map(|h| h.begin).collect();
        assert_eq!(ac.indexes_all(text), begins, "{text:?}");
    }
}

#[test]
fn contains_any_iff_search_all_nonempty() {
    let ac = AhoCorasick::build(["hers", "his", "she", "he"]).unwrap();
    for text in ["ushers", "h i s", "", "hers", "sh", "hhhh"] {
        assert_eq!(ac.contains_any(text), !ac.search_all(text).is_empty(), "{text:?}");
    }
}

#[test]
fn large_keyword_set_roundtrip() {
    // Enough two- and three-letter keywords to force repeated slot-scan
    // collisions and several rounds of table growth.
    let mut keywords = Vec::new();
    for a in 'a'..='z' {
        for b in 'a'..='z' {
            keywords.push(format!("{a}{b}"));
        }
    }
    let ac = AhoCorasick::build(&keywords).unwrap();
    for keyword in &keywords {
        assert_eq!(ac.search_all(keyword), [hit(0, 1, keyword)], "{keyword}");
    }
    // "ab", "bc", "cd" all fire inside a sliding window.
    assert_eq!(ac.indexes_all("abcd"), [0, 1, 2]);
}
