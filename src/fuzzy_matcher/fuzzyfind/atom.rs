//! Byte/Char helpers
use memchr::{memchr, memchr2};

/// A unit of text the alignment runs over: `u8` for the ASCII fast path, `char`
/// otherwise. Comparisons are always case-insensitive.
pub(super) trait Atom: Copy {
    fn eq_ignore_case(self, other: Self) -> bool;
    fn is_alphanumeric(self) -> bool;
    fn is_lowercase(self) -> bool;
    fn is_uppercase(self) -> bool;

    /// Return the index of the first case-insensitive occurrence of `self` in
    /// `haystack`, or `None` if not found.
    #[inline]
    fn find_first_in(self, haystack: &[Self]) -> Option<usize> {
        haystack.iter().position(|&c| self.eq_ignore_case(c))
    }
}

impl Atom for u8 {
    #[inline(always)]
    fn eq_ignore_case(self, b: Self) -> bool {
        self.eq_ignore_ascii_case(&b)
    }
    #[inline(always)]
    fn is_alphanumeric(self) -> bool {
        self.is_ascii_alphanumeric()
    }
    #[inline(always)]
    fn is_lowercase(self) -> bool {
        self.is_ascii_lowercase()
    }
    #[inline(always)]
    fn is_uppercase(self) -> bool {
        self.is_ascii_uppercase()
    }

    /// Search both case variants at once with `memchr2`.
    #[inline]
    fn find_first_in(self, haystack: &[Self]) -> Option<usize> {
        let lo = self.to_ascii_lowercase();
        let hi = self.to_ascii_uppercase();
        if lo == hi {
            memchr(lo, haystack)
        } else {
            memchr2(lo, hi, haystack)
        }
    }
}

impl Atom for char {
    #[inline(always)]
    fn eq_ignore_case(self, b: Self) -> bool {
        self == b || self.to_lowercase().eq(b.to_lowercase())
    }
    #[inline(always)]
    fn is_alphanumeric(self) -> bool {
        char::is_alphanumeric(self)
    }
    #[inline(always)]
    fn is_lowercase(self) -> bool {
        char::is_lowercase(self)
    }
    #[inline(always)]
    fn is_uppercase(self) -> bool {
        char::is_uppercase(self)
    }
}
