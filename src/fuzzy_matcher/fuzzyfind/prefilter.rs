//! Prefilters running before the algo to optimize performance on unmatchable items

use super::Atom;

/// Whether `pattern` occurs in `choice` as an ordered, case-insensitive
/// subsequence.
///
/// The traceback can only succeed for such choices, so anything rejected here
/// would have come back empty from the DP anyway. Each step jumps to the next
/// occurrence with `find_first_in`, which is `memchr2`-backed for bytes.
pub(super) fn is_subsequence<C: Atom>(pattern: &[C], choice: &[C]) -> bool {
    let mut start = 0usize;
    for &p in pattern {
        match p.find_first_in(&choice[start..]) {
            Some(pos) => start += pos + 1,
            None => return false,
        }
    }
    true
}
