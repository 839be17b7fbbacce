//! `webb encode` – build a URL from segments and params.

use anyhow::Result;
use webb_core::url_codec;

use super::parse_params;

pub fn run_encode(segments: &[String], absolute: bool, params: &[String]) -> Result<String> {
    let params = parse_params(params)?;
    let mut path: Vec<&str> = Vec::with_capacity(segments.len() + 1);
    if absolute {
        path.push("");
    }
    path.extend(segments.iter().map(String::as_str));
    if path.len() < 2 && absolute {
        path.push("");
    }
    Ok(format!("{}\n", url_codec::encode(&path, &params)))
}
