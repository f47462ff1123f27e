use proptest::prelude::*;

use super::*;
use crate::Segment;
use crate::fuzzy_matcher::util::assert_order;

fn matcher() -> FuzzyFindMatcher {
    FuzzyFindMatcher::default()
}

fn score(choice: &str, pattern: &str) -> Option<i64> {
    matcher().fuzzy_match(choice, pattern)
}

fn indices(choice: &str, pattern: &str) -> Option<MatchIndices> {
    matcher().fuzzy_indices(choice, pattern).map(|(_, v)| v)
}

fn align(choice: &str, pattern: &str) -> Option<Alignment> {
    matcher().fuzzy_align(choice, pattern)
}

// ----- Basic matching -----

#[test]
fn empty_pattern_always_matches() {
    assert_eq!(score("anything", ""), Some(0));
    assert_eq!(score("", ""), Some(0));
    let res = align("anything", "").unwrap();
    assert_eq!(res.classification.segments(), &[Segment::Gap("anything".into())]);
    assert!(align("", "").unwrap().classification.is_empty());
}

#[test]
fn empty_choice_never_matches() {
    assert!(score("", "a").is_none());
}

#[test]
fn no_match_returns_none() {
    assert!(score("abc", "xyz").is_none());
    assert!(score("ab", "ba").is_none());
}

#[test]
fn subsequence_match() {
    let idx = indices("axbycz", "abc").unwrap();
    assert_eq!(idx.as_slice(), &[0, 2, 4]);
}

#[test]
fn case_insensitive_alignment() {
    let res = align("FuzzyFind", "ff").unwrap();
    assert_eq!(res.score, 55);
    assert_eq!(
        res.classification.segments(),
        &[
            Segment::Match("F".into()),
            Segment::Gap("uzzy".into()),
            Segment::Match("F".into()),
            Segment::Gap("ind".into()),
        ]
    );
    assert_eq!(matcher().fuzzy_match_range("FuzzyFind", "ff"), Some((55, 0, 5)));
}

// ----- Scoring quality -----

#[test]
fn contiguous_beats_split() {
    let contiguous = score("pickled pepper", "pp").unwrap();
    let split = score("Pied Piper", "pp").unwrap();
    assert!(contiguous > split, "contiguous={contiguous} should beat split={split}");
}

#[test]
fn word_start_bonus() {
    let boundary = score("Pied Piper", "pp").unwrap();
    let inner = score("porcupine", "pp").unwrap();
    assert!(boundary > inner, "word-boundary={boundary} should beat inner={inner}");
}

#[test]
fn camel_case_bonus() {
    let camel = score("BatMan", "bm").unwrap();
    let flat = score("Batman", "bm").unwrap();
    assert!(camel > flat, "camel={camel} should beat flat={flat}");
}

#[test]
fn first_letter_of_word_bonus() {
    let word = score("Bat man", "bm").unwrap();
    let flat = score("Batman", "bm").unwrap();
    assert!(word > flat, "word={word} should beat flat={flat}");
}

#[test]
fn ordering_pp() {
    assert_order(&matcher(), "pp", &["pickled pepper", "Pied Piper", "porcupine"]);
}

#[test]
fn ordering_bm() {
    assert_order(&matcher(), "bm", &["Bat man", "Batman"]);
    assert_order(&matcher(), "bm", &["BatMan", "Batman"]);
}

// ----- End point selection -----

#[test]
fn equal_totals_keep_earliest_end() {
    let res = align("a a", "a").unwrap();
    assert_eq!(res.score, 48);
    assert_eq!(
        res.classification.segments(),
        &[Segment::Match("a".into()), Segment::Gap(" a".into())]
    );
}

#[test]
fn end_point_before_full_match_fails() {
    // The best last-row total sits on the leading 'b', whose traceback runs out of
    // candidate before reaching 'a'.
    assert!(score("bzzzzzzzzzazzzzzzzb", "ab").is_none());
}

// ----- Policy -----

#[test]
fn policy_weights_are_used() {
    let default = score("Fuzzy", "f").unwrap();
    assert_eq!(default, 48);
    let boosted = FuzzyFindMatcher::new(ScoringPolicy::default().boundary_bonus(100))
        .fuzzy_match("Fuzzy", "f")
        .unwrap();
    assert!(boosted > default, "boosted={boosted} should beat default={default}");
}

#[test]
fn free_gaps() {
    let m = FuzzyFindMatcher::new(ScoringPolicy::default().gap_penalty(|_| 0));
    assert_eq!(m.fuzzy_indices("axbycz", "abc").map(|(_, v)| v), Some(vec![0, 2, 4]));
}

// ----- Non-ASCII fallback -----

#[test]
fn non_ascii_matching() {
    assert_eq!(indices("café", "É"), Some(vec![3]));
    assert!(score("naïve", "naive").is_none());
}

// ----- Invariants -----

fn chars_eq(a: char, b: char) -> bool {
    a.to_lowercase().eq(b.to_lowercase())
}

proptest! {
    #[test]
    fn classification_reconstructs_choice(choice in "[a-zA-Z _/é]{0,24}", pattern in "[a-zA-Zé]{0,4}") {
        if let Some(res) = align(&choice, &pattern) {
            prop_assert_eq!(res.as_string(), choice);
        }
    }

    #[test]
    fn matches_follow_pattern_order(choice in "[a-cA-C _é]{0,24}", pattern in "[a-cé]{1,4}") {
        let cho: Vec<char> = choice.chars().collect();
        let pat: Vec<char> = pattern.chars().collect();
        if let Some(idx) = indices(&choice, &pattern) {
            prop_assert_eq!(idx.len(), pat.len());
            prop_assert!(idx.windows(2).all(|w| w[0] < w[1]));
            for (&i, &p) in idx.iter().zip(&pat) {
                prop_assert!(chars_eq(cho[i], p));
            }
        }
        if !is_subsequence(&pat, &cho) {
            prop_assert!(indices(&choice, &pattern).is_none());
        }
    }

    #[test]
    fn ascii_fast_path_agrees_with_chars(choice in "[a-zA-Z _./-]{1,24}", pattern in "[a-zA-Z]{1,4}") {
        let m = matcher();
        let bytes = m.match_slices(choice.as_bytes(), pattern.as_bytes());
        let cho: Vec<char> = choice.chars().collect();
        let pat: Vec<char> = pattern.chars().collect();
        let chars = m.match_slices(&cho, &pat);
        prop_assert_eq!(bytes, chars);
    }
}
