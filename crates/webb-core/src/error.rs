//! Error type for URL decoding.

use thiserror::Error;

/// Failure to decode a percent-escaped URL component.
///
/// Decoding is best-effort everywhere else: anything that is not a `%` escape
/// passes through untouched. Only broken escapes are reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// A `%` not followed by two hex digits.
    #[error("malformed escape at byte {offset} in {input:?}")]
    MalformedEscape { input: String, offset: usize },
    /// Escapes that decode to bytes which are not valid UTF-8.
    #[error("escaped bytes in {input:?} are not valid UTF-8")]
    InvalidUtf8 { input: String },
}
