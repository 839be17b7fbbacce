//! Site router.
//!
//! A `Router` is built once from configuration and then answers three
//! questions without touching any global state:
//! - which action an inbound URL names (`find_action`)
//! - what an outbound link looks like in a given language (`lang_url`)
//! - what a link looks like for the language being browsed (`full_url`)
//!
//! Localized action segments come from the [`AliasTable`]: `to_lang` maps a
//! canonical action to its per-language segment, `to_en` maps a segment back.

mod action;
mod dispatch;
mod lang;

pub use action::{is_root, url_action};
pub use dispatch::{ActionKind, ActionRegistry, ResolvedAction};

use crate::config::{AliasTable, WebbConfig};

#[derive(Debug, Clone)]
pub struct Router {
    default_lang: String,
    current_lang: String,
    root_action: String,
    aliases: AliasTable,
}

impl Router {
    pub fn new(cfg: &WebbConfig) -> Self {
        Self {
            default_lang: cfg.lang.clone(),
            current_lang: cfg.current_lang().to_string(),
            root_action: cfg.root_action.clone(),
            aliases: cfg.aliases.clone(),
        }
    }

    /// Same router, browsing in `lang`.
    pub fn with_current_lang(mut self, lang: impl Into<String>) -> Self {
        self.current_lang = lang.into();
        self
    }

    pub fn default_lang(&self) -> &str {
        &self.default_lang
    }

    pub fn current_lang(&self) -> &str {
        &self.current_lang
    }

    pub fn root_action(&self) -> &str {
        &self.root_action
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Canonical action for an action segment: a localized segment is
    /// translated back, anything else is used as is.
    fn canonical_action(&self, segment: &str) -> String {
        let name = action::action_name(segment);
        self.aliases
            .canonical(segment)
            .or_else(|| self.aliases.canonical(&name))
            .map(str::to_string)
            .unwrap_or(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> Router {
        let mut cfg = WebbConfig::default();
        cfg.aliases
            .to_en
            .insert("profil".to_string(), "user_profile".to_string());
        cfg.aliases
            .to_en
            .insert("mon-compte".to_string(), "account".to_string());
        Router::new(&cfg)
    }

    #[test]
    fn built_from_config() {
        let r = router();
        assert_eq!(r.default_lang(), "en");
        assert_eq!(r.current_lang(), "en");
        assert_eq!(r.root_action(), "home");
        assert_eq!(r.aliases().canonical("profil"), Some("user_profile"));
        assert_eq!(r.with_current_lang("fr").current_lang(), "fr");
    }

    #[test]
    fn canonical_action_translates_aliases() {
        let r = router();
        assert_eq!(r.canonical_action("profil"), "user_profile");
        assert_eq!(r.canonical_action("mon-compte"), "account");
        assert_eq!(r.canonical_action("user-profile"), "user_profile");
    }

    #[test]
    fn canonical_action_matches_underscored_alias_keys() {
        let mut cfg = WebbConfig::default();
        cfg.aliases
            .to_en
            .insert("mon_compte".to_string(), "account".to_string());
        assert_eq!(Router::new(&cfg).canonical_action("mon-compte"), "account");
    }
}
