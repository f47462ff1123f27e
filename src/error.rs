use thiserror::Error;

/// Errors surfaced by the display helpers.
///
/// Failing to align is not an error: matchers and engines return `None` for it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A classification was applied to a string it does not cover.
    #[error("classification covers {classified} characters but the text has {text}")]
    LengthMismatch { classified: usize, text: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
