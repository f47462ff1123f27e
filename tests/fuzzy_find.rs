use fuzzyfind::{Alignment, Classification, ScoringPolicy, Segment, align, combine, search};

fn policy() -> ScoringPolicy {
    ScoringPolicy::default()
}

fn score(query: &str, candidate: &str) -> i64 {
    align(query, candidate, &policy())
        .unwrap_or_else(|| panic!("{query:?} should align in {candidate:?}"))
        .score
}

#[test]
fn match_positions_are_case_insensitive() {
    let res = align("ff", "FuzzyFind", &policy()).unwrap();
    assert_eq!(res.score, 55);
    assert_eq!(res.classification.matched_indices(), vec![0, 5]);
    assert_eq!(res.classification.highlighted_ranges("FuzzyFind").unwrap(), vec![0..1, 5..6]);
    assert_eq!(res.highlight(), "FuzzyFind\n*    *   ");
}

#[test]
fn preferences() {
    assert!(score("pp", "pickled pepper") > score("pp", "Pied Piper"));
    assert!(score("pp", "Pied Piper") > score("pp", "porcupine"));
    assert!(score("bm", "BatMan") > score("bm", "Batman"));
    assert!(score("bm", "Bat man") > score("bm", "Batman"));
}

#[test]
fn missing_query_fails() {
    assert_eq!(align("xyz", "abc", &policy()), None);
}

#[test]
fn combine_merges_terms() {
    let res = combine(&["ff", "ind"], "FuzzyFind", &policy()).unwrap();
    assert_eq!(res.as_string(), "FuzzyFind");
    assert_eq!(res.classification.matched_ranges(), vec![0..1, 5..9]);
    assert!(combine(&["ff", "x"], "FuzzyFind", &policy()).is_none());
}

#[test]
fn merge_of_interleaved_matches() {
    let left = Classification::from(vec![
        Segment::Match("a".into()),
        Segment::Gap("b".into()),
        Segment::Match("c".into()),
        Segment::Gap("def".into()),
    ]);
    let right = Classification::from(vec![
        Segment::Gap("a".into()),
        Segment::Match("b".into()),
        Segment::Gap("c".into()),
        Segment::Match("d".into()),
        Segment::Gap("ef".into()),
    ]);
    let merged = Alignment::new(1, left).combine(&Alignment::new(2, right));
    assert_eq!(merged.score, 3);
    assert_eq!(merged.classification.matched_indices(), vec![0, 1, 2, 3]);
    assert_eq!(
        merged.classification.segments(),
        &[Segment::Match("abcd".into()), Segment::Gap("ef".into())]
    );
}

#[test]
fn search_is_sorted_and_complete() {
    let candidates = [
        "src/engine/batch.rs",
        "README.md",
        "src/segment.rs",
        "benches/matcher_micro.rs",
        "src/score.rs",
    ];
    let results = search(&["s", "rs"], &candidates, &policy());
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    let mut texts: Vec<String> = results.iter().map(Alignment::as_string).collect();
    texts.sort();
    assert_eq!(
        texts,
        vec![
            "benches/matcher_micro.rs",
            "src/engine/batch.rs",
            "src/score.rs",
            "src/segment.rs"
        ]
    );
    for res in &results {
        for term in ["s", "rs"] {
            assert!(align(term, &res.as_string(), &policy()).is_some());
        }
    }
}
