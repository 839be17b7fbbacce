//! Outbound links per language.

use super::action::{is_root, segment_name, url_action};
use super::Router;
use crate::error::UrlError;
use crate::url_codec::{encode_query, merge_params, DecodedUrl, ParamValue, Params};

const LANG_PARAM: &str = "lang";

impl Router {
    /// Link to `path` for readers of `target_lang`.
    ///
    /// The target is `target_lang`, else a `lang` value in the params, else
    /// the language being browsed. The action segment is replaced by its
    /// alias in the target language when there is one. Without an alias a
    /// non-default target is carried as `?lang=<target>`.
    ///
    /// Non-action URLs keep their path as written (so `http://` links stay
    /// readable); only their query is rebuilt when `params` adds to it.
    pub fn lang_url(
        &self,
        path: &str,
        params: Option<&Params>,
        target_lang: Option<&str>,
    ) -> Result<String, UrlError> {
        let mut url = DecodedUrl::parse(path)?;
        let extra = params.filter(|p| !p.is_empty());
        if let Some(extra) = extra {
            merge_params(&mut url.params, extra);
        }

        let target = target_lang
            .map(str::to_string)
            .or_else(|| {
                url.params
                    .get(LANG_PARAM)
                    .and_then(ParamValue::as_scalar)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| self.current_lang.clone());

        let root = is_root(&url);
        let action = if root {
            self.root_action.clone()
        } else if url_action(&url).is_some() {
            self.canonical_action(&url.path[1])
        } else {
            tracing::trace!(path, "not an action url");
            if extra.is_none() {
                return Ok(path.to_string());
            }
            let raw_path = path.split_once('?').map_or(path, |(p, _)| p);
            let query = encode_query(&url.params);
            return Ok(if query.is_empty() {
                raw_path.to_string()
            } else {
                format!("{raw_path}?{query}")
            });
        };

        let is_default = target == self.default_lang;
        match self.aliases.localize(&action, &target) {
            Some(alias) => {
                if root && is_default {
                    set_root(&mut url);
                } else {
                    set_action_segment(&mut url, alias);
                }
                url.params.remove(LANG_PARAM);
                tracing::debug!(%action, %target, alias, "alias applied");
            }
            None => {
                if root {
                    set_root(&mut url);
                } else {
                    set_action_segment(&mut url, &action);
                }
                if is_default {
                    url.params.remove(LANG_PARAM);
                } else {
                    url.params
                        .insert(LANG_PARAM.to_string(), ParamValue::Scalar(target.clone()));
                    tracing::debug!(%action, %target, "no alias, lang param attached");
                }
            }
        }

        Ok(url.encode())
    }

    /// Link to `path` in the language being browsed: adds `lang=<current>`
    /// when that differs from the default language.
    pub fn full_url(&self, path: &str, params: Option<&Params>) -> Result<String, UrlError> {
        let mut url = DecodedUrl::parse(path)?;
        if let Some(extra) = params {
            merge_params(&mut url.params, extra);
        }
        if self.current_lang != self.default_lang {
            url.params.insert(
                LANG_PARAM.to_string(),
                ParamValue::Scalar(self.current_lang.clone()),
            );
        }
        Ok(url.encode())
    }
}

fn set_root(url: &mut DecodedUrl) {
    url.path = vec![String::new(), String::new()];
}

fn set_action_segment(url: &mut DecodedUrl, name: &str) {
    let segment = segment_name(name);
    match url.path.get_mut(1) {
        Some(s) => *s = segment,
        None => url.path = vec![String::new(), segment],
    }
}
