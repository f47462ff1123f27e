//! Gap/match segments and the classification of a whole candidate string.

use std::fmt::{Display, Error as FmtError, Formatter};
use std::ops::Range;

use crate::error::{Error, Result};

/// A maximal run of matched or unmatched characters. Original case is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Gap(String),
    Match(String),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Gap(s) | Segment::Match(s) => s,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Segment::Match(_))
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.text().chars().count()
    }

    fn text_mut(&mut self) -> &mut String {
        match self {
            Segment::Gap(s) | Segment::Match(s) => s,
        }
    }
}

/// Ordered partition of a string into [`Segment`]s.
///
/// A classification never holds an empty segment nor two adjacent segments of the
/// same kind: every `push_*` coalesces. Concatenating the segments yields the
/// classified string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    segments: Vec<Segment>,
}

impl Classification {
    pub fn new() -> Self {
        Self::default()
    }

    /// The whole of `text` as a single gap.
    pub fn gaps(text: &str) -> Self {
        let mut res = Self::new();
        res.push_run(false, text);
        res
    }

    /// Build a classification of `text` where the characters at `indices`
    /// (char offsets, ascending) are matches and everything else is a gap.
    pub fn from_indices(text: &str, indices: &[usize]) -> Self {
        let mut res = Self::new();
        let mut matched = indices.iter().copied().peekable();
        for (idx, c) in text.chars().enumerate() {
            if matched.next_if_eq(&idx).is_some() {
                res.push_match(c);
            } else {
                res.push_gap(c);
            }
        }
        res
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of characters covered.
    pub fn char_len(&self) -> usize {
        self.segments.iter().map(Segment::char_len).sum()
    }

    pub fn push_match(&mut self, c: char) {
        self.push_char(true, c);
    }

    pub fn push_gap(&mut self, c: char) {
        self.push_char(false, c);
    }

    /// Append a segment, merging it into the last one when they share a kind.
    pub fn push(&mut self, segment: Segment) {
        self.push_run(segment.is_match(), segment.text());
    }

    fn push_char(&mut self, is_match: bool, c: char) {
        match self.segments.last_mut() {
            Some(last) if last.is_match() == is_match => last.text_mut().push(c),
            _ => self.segments.push(new_segment(is_match, c.to_string())),
        }
    }

    fn push_run(&mut self, is_match: bool, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(last) if last.is_match() == is_match => last.text_mut().push_str(text),
            _ => self.segments.push(new_segment(is_match, text.to_string())),
        }
    }

    /// The classified string.
    pub fn as_string(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }

    /// Two lines: the string, then `*` under every matched character.
    pub fn highlight(&self) -> String {
        let mut text = String::new();
        let mut markers = String::new();
        for segment in &self.segments {
            text.push_str(segment.text());
            let marker = if segment.is_match() { '*' } else { ' ' };
            markers.extend(std::iter::repeat_n(marker, segment.char_len()));
        }
        format!("{text}\n{markers}")
    }

    /// Char offsets of every matched character, ascending.
    pub fn matched_indices(&self) -> Vec<usize> {
        self.matched_ranges().into_iter().flatten().collect()
    }

    /// One char-offset range per match segment.
    pub fn matched_ranges(&self) -> Vec<Range<usize>> {
        let mut offset = 0;
        let mut ranges = Vec::new();
        for segment in &self.segments {
            let len = segment.char_len();
            if segment.is_match() {
                ranges.push(offset..offset + len);
            }
            offset += len;
        }
        ranges
    }

    /// Byte ranges into `text` of every match segment, for slicing the original
    /// string when rendering.
    pub fn highlighted_ranges(&self, text: &str) -> Result<Vec<Range<usize>>> {
        let mut bounds: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        let classified = self.char_len();
        if classified != bounds.len() {
            return Err(Error::LengthMismatch {
                classified,
                text: bounds.len(),
            });
        }
        bounds.push(text.len());
        Ok(self
            .matched_ranges()
            .into_iter()
            .map(|r| bounds[r.start]..bounds[r.end])
            .collect())
    }

    /// Merge two classifications of the same string: a character is a match in the
    /// result iff it is a match in either input.
    ///
    /// Works run by run on both sides without expanding to per-character flags. An
    /// empty classification is the identity.
    pub fn merge(&self, other: &Classification) -> Classification {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let mut res = Classification::new();
        let mut left = Cursor::new(&self.segments);
        let mut right = Cursor::new(&other.segments);

        while let (Some((l_match, l)), Some((r_match, r))) = (left.head(), right.head()) {
            let l_len = l.chars().count();
            let r_len = r.chars().count();
            // Emit one whole run from one side, then skip as many characters on
            // the other side, possibly across several of its runs.
            let take_left = match (l_match, r_match) {
                (false, false) => l_len <= r_len,
                (true, true) => l_len >= r_len,
                (true, false) => true,
                (false, true) => false,
            };
            if take_left {
                res.push_run(l_match, l);
                left.next_run();
                right.advance(l_len);
            } else {
                res.push_run(r_match, r);
                right.next_run();
                left.advance(r_len);
            }
        }

        // Only reachable when the inputs cover strings of different lengths.
        left.drain_into(&mut res);
        right.drain_into(&mut res);
        res
    }
}

fn new_segment(is_match: bool, text: String) -> Segment {
    if is_match { Segment::Match(text) } else { Segment::Gap(text) }
}

impl Display for Classification {
    fn fmt(&self, f: &mut Formatter) -> Result<(), FmtError> {
        for segment in &self.segments {
            f.write_str(segment.text())?;
        }
        Ok(())
    }
}

impl From<Vec<Segment>> for Classification {
    fn from(segments: Vec<Segment>) -> Self {
        let mut res = Classification::new();
        for segment in segments {
            res.push(segment);
        }
        res
    }
}

/// Read position inside a run-length classification: the current segment and a
/// byte offset into its text.
struct Cursor<'a> {
    segments: &'a [Segment],
    idx: usize,
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(segments: &'a [Segment]) -> Self {
        Self {
            segments,
            idx: 0,
            offset: 0,
        }
    }

    /// Kind and unread remainder of the current run.
    fn head(&self) -> Option<(bool, &'a str)> {
        self.segments
            .get(self.idx)
            .map(|s| (s.is_match(), &s.text()[self.offset..]))
    }

    fn next_run(&mut self) {
        self.idx += 1;
        self.offset = 0;
    }

    /// Skip `n` characters, crossing run boundaries as needed.
    fn advance(&mut self, mut n: usize) {
        while n > 0 {
            let Some((_, rest)) = self.head() else {
                return;
            };
            match rest.char_indices().nth(n) {
                Some((byte, _)) => {
                    self.offset += byte;
                    return;
                }
                None => {
                    n -= rest.chars().count();
                    self.next_run();
                }
            }
        }
    }

    fn drain_into(&mut self, out: &mut Classification) {
        while let Some((is_match, rest)) = self.head() {
            out.push_run(is_match, rest);
            self.next_run();
        }
    }
}
