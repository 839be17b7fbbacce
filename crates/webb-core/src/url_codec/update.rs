//! In-place edits of an encoded URL.

use std::collections::BTreeMap;

use super::decoded::DecodedUrl;
use super::params::{merge_params, ParamValue, Params};
use crate::error::UrlError;

/// Segment and param overrides applied by [`update_url`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlUpdate {
    pub segments: BTreeMap<usize, String>,
    pub params: Params,
}

impl UrlUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segment(mut self, index: usize, value: impl Into<String>) -> Self {
        self.segments.insert(index, value.into());
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn flag(mut self, key: impl Into<String>) -> Self {
        self.params.insert(key.into(), ParamValue::Flag);
        self
    }

    /// Applies the overrides to an already decoded URL. Indices past the end
    /// of the path are appended in ascending order. A param set to an empty
    /// list is removed; a one-item list is stored as `Flag`/`Scalar`.
    pub fn apply(&self, url: &mut DecodedUrl) {
        for (&index, value) in &self.segments {
            match url.path.get_mut(index) {
                Some(segment) => *segment = value.clone(),
                None => url.path.push(value.clone()),
            }
        }
        merge_params(&mut url.params, &self.params);
    }
}

/// Decodes `url`, applies `update`, and encodes the result.
pub fn update_url(url: &str, update: &UrlUpdate) -> Result<String, UrlError> {
    let mut decoded = DecodedUrl::parse(url)?;
    update.apply(&mut decoded);
    Ok(decoded.encode())
}
