//! URL codec.
//!
//! Turns site URLs into `DecodedUrl { path, params }` and back. Encoding is
//! canonical: param keys come out sorted, so `encode(decode(s))` is stable
//! after one pass.

mod decoded;
mod escape;
mod params;
mod update;

pub use decoded::{encode_parts, encode_query, DecodedUrl};
pub use escape::{decode_component, encode_component};
pub use params::{merge_params, ParamValue, Params};
pub use update::{update_url, UrlUpdate};

/// Decodes a URL string. Shorthand for [`DecodedUrl::parse`].
pub fn decode(url: &str) -> Result<DecodedUrl, crate::error::UrlError> {
    DecodedUrl::parse(url)
}

/// Encodes a path and params. Shorthand for [`encode_parts`].
pub fn encode<S: AsRef<str>>(path: &[S], params: &Params) -> String {
    encode_parts(path, params)
}
