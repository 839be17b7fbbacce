//! CLI command handlers. Each command is in its own file; each returns the
//! text to print.

mod completions;
mod decode;
mod encode;
mod full_url;
mod lang_url;
mod resolve;
mod update;

pub use completions::run_completions;
pub use decode::run_decode;
pub use encode::run_encode;
pub use full_url::run_full_url;
pub use lang_url::run_lang_url;
pub use resolve::run_resolve;
pub use update::run_update;

use anyhow::{bail, Context, Result};
use webb_core::{ParamValue, Params};

/// Parses repeated `--param KEY[=VALUE]` arguments. Repeating a key builds a
/// list, the same as repeating it in a query string.
pub(crate) fn parse_params(args: &[String]) -> Result<Params> {
    let mut params = Params::new();
    for arg in args {
        let (key, value) = match arg.split_once('=') {
            Some((k, v)) => (k.to_string(), Some(v.to_string())),
            None => (arg.clone(), None),
        };
        if key.is_empty() {
            bail!("empty param name in {arg:?}");
        }
        match params.get_mut(&key) {
            Some(existing) => existing.push(value),
            None => {
                params.insert(key, ParamValue::from_occurrence(value));
            }
        }
    }
    Ok(params)
}

/// Parses `--segment INDEX=VALUE`.
pub(crate) fn parse_segment(arg: &str) -> Result<(usize, String)> {
    let (index, value) = arg
        .split_once('=')
        .with_context(|| format!("expected INDEX=VALUE, got {arg:?}"))?;
    let index = index
        .parse()
        .with_context(|| format!("bad segment index in {arg:?}"))?;
    Ok((index, value.to_string()))
}
