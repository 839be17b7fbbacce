//! `webb full-url` – link in the language being browsed.

use anyhow::Result;
use webb_core::Router;

use super::parse_params;

pub fn run_full_url(router: &Router, url: &str, params: &[String]) -> Result<String> {
    let params = parse_params(params)?;
    Ok(format!("{}\n", router.full_url(url, Some(&params))?))
}
