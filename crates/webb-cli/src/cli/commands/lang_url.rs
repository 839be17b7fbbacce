//! `webb lang-url` – rewrite a link for another language.

use anyhow::Result;
use webb_core::Router;

use super::parse_params;

pub fn run_lang_url(
    router: &Router,
    url: &str,
    lang: Option<&str>,
    params: &[String],
) -> Result<String> {
    let params = parse_params(params)?;
    let link = router.lang_url(url, Some(&params), lang)?;
    Ok(format!("{link}\n"))
}
