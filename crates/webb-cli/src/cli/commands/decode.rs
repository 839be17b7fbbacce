//! `webb decode` – split a URL into segments and params.

use anyhow::Result;
use webb_core::{DecodedUrl, ParamValue};

pub fn run_decode(url: &str, json: bool) -> Result<String> {
    let decoded = DecodedUrl::parse(url)?;
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&decoded)?));
    }

    let mut out = String::new();
    out.push_str("path:\n");
    for (i, segment) in decoded.path.iter().enumerate() {
        out.push_str(&format!("  {:<3} {:?}\n", i, segment));
    }
    if !decoded.params.is_empty() {
        out.push_str("params:\n");
        for (key, value) in &decoded.params {
            let shown = match value {
                ParamValue::Flag => "(flag)".to_string(),
                ParamValue::Scalar(v) => format!("{v:?}"),
                ParamValue::List(items) => items
                    .iter()
                    .map(|i| match i {
                        Some(v) => format!("{v:?}"),
                        None => "(flag)".to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(", "),
            };
            out.push_str(&format!("  {key} = {shown}\n"));
        }
    }
    Ok(out)
}
