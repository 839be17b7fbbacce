//! `DecodedUrl`: a site-relative URL split into path segments and params.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::escape::{decode_component, encode_component};
use super::params::{ParamValue, Params};
use crate::error::UrlError;

/// A URL as the router sees it.
///
/// `path` holds unescaped segments; an absolute path starts with an empty
/// segment (`/a/b` is `["", "a", "b"]`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DecodedUrl {
    pub path: Vec<String>,
    pub params: Params,
}

impl DecodedUrl {
    pub fn new<I, S>(path: I, params: Params) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            params,
        }
    }

    /// Splits `url` on the first `?`, then the path on `/` and the query on
    /// `&`. An empty string yields a single empty segment.
    pub fn parse(url: &str) -> Result<Self, UrlError> {
        let (path_part, query) = match url.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (url, None),
        };

        let path = path_part
            .split('/')
            .map(decode_component)
            .collect::<Result<Vec<_>, _>>()?;

        let mut params = Params::new();
        for piece in query.unwrap_or("").split('&').filter(|p| !p.is_empty()) {
            let (key, value) = match piece.split_once('=') {
                Some((k, v)) => (decode_component(k)?, Some(decode_component(v)?)),
                None => (decode_component(piece)?, None),
            };
            match params.get_mut(&key) {
                Some(existing) => existing.push(value),
                None => {
                    params.insert(key, ParamValue::from_occurrence(value));
                }
            }
        }

        Ok(Self { path, params })
    }

    /// Escapes and joins the path, then appends the params sorted by escaped
    /// key. No `?` is written when there are no params.
    pub fn encode(&self) -> String {
        encode_parts(&self.path, &self.params)
    }

    pub fn is_absolute(&self) -> bool {
        self.path.len() > 1 && self.path[0].is_empty()
    }
}

/// Encodes a path and params without building a `DecodedUrl` first.
pub fn encode_parts<S: AsRef<str>>(path: &[S], params: &Params) -> String {
    let mut out = path
        .iter()
        .map(|s| encode_component(s.as_ref()))
        .collect::<Vec<_>>()
        .join("/");

    let query = encode_query(params);
    if !query.is_empty() {
        out.push('?');
        out.push_str(&query);
    }
    out
}

/// Encodes params as a query string (no leading `?`), sorted by escaped key.
pub fn encode_query(params: &Params) -> String {
    let mut keyed: Vec<(String, &ParamValue)> = params
        .iter()
        .map(|(k, v)| (encode_component(k), v))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    let mut pairs = Vec::new();
    for (key, value) in keyed {
        for occurrence in value.occurrences() {
            match occurrence {
                Some(v) => pairs.push(format!("{}={}", key, encode_component(v))),
                None => pairs.push(key.clone()),
            }
        }
    }
    pairs.join("&")
}

impl fmt::Display for DecodedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for DecodedUrl {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
