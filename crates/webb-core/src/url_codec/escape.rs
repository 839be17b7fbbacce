//! Percent-escaping of single path segments and query components.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::UrlError;

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, the set browsers leave
/// alone when escaping a single URI component.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Escapes one component so it can sit between `/`, `?`, `&` and `=`.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Unescapes one component.
///
/// Fails on a `%` that does not start a two-digit hex escape and on escapes
/// that do not form valid UTF-8.
pub fn decode_component(input: &str) -> Result<String, UrlError> {
    if !input.contains('%') {
        return Ok(input.to_string());
    }
    check_escapes(input)?;
    percent_decode_str(input)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| UrlError::InvalidUtf8 {
            input: input.to_string(),
        })
}

fn check_escapes(input: &str) -> Result<(), UrlError> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let well_formed = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !well_formed {
                return Err(UrlError::MalformedEscape {
                    input: input.to_string(),
                    offset: i,
                });
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}
