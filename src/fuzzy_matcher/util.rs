use super::FuzzyMatcher;

/// Assert that `choices` are already sorted best-first when scored against
/// `pattern`.
pub(crate) fn assert_order(matcher: &dyn FuzzyMatcher, pattern: &str, choices: &[&str]) {
    let mut scored: Vec<(&str, i64)> = choices
        .iter()
        .map(|&c| (c, matcher.fuzzy_match(c, pattern).unwrap_or(i64::MIN)))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    let sorted: Vec<&str> = scored.iter().map(|(c, _)| *c).collect();
    assert_eq!(sorted, choices, "scores: {scored:?}");
}
