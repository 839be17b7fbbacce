//! Query parameter values.

use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::collections::BTreeMap;

/// Query parameters keyed by unescaped name.
pub type Params = BTreeMap<String, ParamValue>;

/// Value of one query parameter.
///
/// A bare key (`?debug`) is a [`ParamValue::Flag`]. A key seen more than once
/// becomes a [`ParamValue::List`]; each item keeps whether that occurrence had
/// a value, so `a&a=1` encodes back to exactly `a&a=1`.
///
/// A `List` holds at least two items; shorter lists cannot be told apart
/// from `Flag`/`Scalar` (or from a missing key) once encoded. The
/// constructors and [`merge_params`] keep to that, see [`ParamValue::normalized`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Flag,
    Scalar(String),
    List(Vec<Option<String>>),
}

impl ParamValue {
    /// Value for occurrences that all carry a value: `Scalar` for one,
    /// `List` for more, `None` for none.
    pub fn list<I, S>(items: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ParamValue::List(items.into_iter().map(|s| Some(s.into())).collect()).normalized()
    }

    /// Collapses a one-item list to `Flag`/`Scalar`; `None` for an empty list.
    pub fn normalized(self) -> Option<Self> {
        match self {
            ParamValue::List(mut items) if items.len() < 2 => {
                items.pop().map(ParamValue::from_occurrence)
            }
            other => Some(other),
        }
    }

    /// The value when this is a single `key=value` occurrence.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            ParamValue::Scalar(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, ParamValue::Flag)
    }

    /// Appends another occurrence of the same key.
    pub fn push(&mut self, item: Option<String>) {
        let mut items = match std::mem::replace(self, ParamValue::Flag) {
            ParamValue::Flag => vec![None],
            ParamValue::Scalar(v) => vec![Some(v)],
            ParamValue::List(items) => items,
        };
        items.push(item);
        *self = ParamValue::List(items);
    }

    /// `Scalar` for `key=value`, `Flag` for a bare key.
    pub fn from_occurrence(item: Option<String>) -> Self {
        match item {
            Some(v) => ParamValue::Scalar(v),
            None => ParamValue::Flag,
        }
    }

    /// Occurrences in emit order: `None` for a bare key.
    pub(crate) fn occurrences(&self) -> Vec<Option<&str>> {
        match self {
            ParamValue::Flag => vec![None],
            ParamValue::Scalar(v) => vec![Some(v.as_str())],
            ParamValue::List(items) => items.iter().map(|i| i.as_deref()).collect(),
        }
    }
}

/// Merges `extra` over `into`, value by value. A value that normalizes to
/// nothing (an empty list) removes the key.
pub fn merge_params(into: &mut Params, extra: &Params) {
    for (key, value) in extra {
        match value.clone().normalized() {
            Some(v) => {
                into.insert(key.clone(), v);
            }
            None => {
                into.remove(key);
            }
        }
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Scalar(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Scalar(v)
    }
}

/// Serialized the way the page scripts see it: `true`, a string, or an array
/// of strings and `true`s.
impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParamValue::Flag => serializer.serialize_bool(true),
            ParamValue::Scalar(v) => serializer.serialize_str(v),
            ParamValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    match item {
                        Some(v) => seq.serialize_element(v)?,
                        None => seq.serialize_element(&true)?,
                    }
                }
                seq.end()
            }
        }
    }
}
