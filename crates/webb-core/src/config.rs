use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Localized action names (`[aliases]` section in config.toml).
///
/// ```toml
/// [aliases.to_lang.user_profile]
/// fr = "profil"
///
/// [aliases.to_en]
/// profil = "user_profile"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasTable {
    /// canonical action -> language -> localized segment.
    #[serde(default)]
    pub to_lang: BTreeMap<String, BTreeMap<String, String>>,
    /// localized segment -> canonical action.
    #[serde(default)]
    pub to_en: BTreeMap<String, String>,
}

impl AliasTable {
    /// Localized segment for `action` in `lang`, if one is configured.
    pub fn localize(&self, action: &str, lang: &str) -> Option<&str> {
        self.to_lang
            .get(action)
            .and_then(|langs| langs.get(lang))
            .map(String::as_str)
    }

    /// Canonical action for a localized segment.
    pub fn canonical(&self, alias: &str) -> Option<&str> {
        self.to_en.get(alias).map(String::as_str)
    }
}

/// Pages the site serves, used by the CLI to build an action registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMap {
    /// Actions backed by a handler.
    #[serde(default)]
    pub actions: Vec<String>,
    /// Static templates rendered when no handler exists.
    #[serde(default)]
    pub templates: Vec<String>,
}

/// Global configuration loaded from `~/.config/webb/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebbConfig {
    /// Default site language. Links in this language carry no `lang` param.
    pub lang: String,
    /// Language of the page being browsed; falls back to `lang`.
    pub current_lang: Option<String>,
    /// Canonical action served at `/`.
    pub root_action: String,
    pub aliases: AliasTable,
    /// Overrides for built-in UI phrases (see `text::Strings`).
    pub strings: BTreeMap<String, String>,
    pub site: SiteMap,
}

impl Default for WebbConfig {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            current_lang: None,
            root_action: "home".to_string(),
            aliases: AliasTable::default(),
            strings: BTreeMap::new(),
            site: SiteMap::default(),
        }
    }
}

impl WebbConfig {
    pub fn current_lang(&self) -> &str {
        self.current_lang.as_deref().unwrap_or(&self.lang)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("webb")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WebbConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = WebbConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<WebbConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: WebbConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}
