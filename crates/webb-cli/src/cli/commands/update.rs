//! `webb update` – override segments and params of a URL.

use anyhow::Result;
use webb_core::url_codec::{update_url, UrlUpdate};

use super::{parse_params, parse_segment};

pub fn run_update(url: &str, segments: &[String], params: &[String]) -> Result<String> {
    let mut update = UrlUpdate::new();
    for arg in segments {
        let (index, value) = parse_segment(arg)?;
        update = update.segment(index, value);
    }
    update.params = parse_params(params)?;
    Ok(format!("{}\n", update_url(url, &update)?))
}
