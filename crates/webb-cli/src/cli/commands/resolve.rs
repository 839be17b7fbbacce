//! `webb resolve` – which action serves a URL, per the configured site map.

use anyhow::Result;
use webb_core::config::WebbConfig;
use webb_core::{ActionKind, ActionRegistry, Router};

/// Registry whose handlers report the action name; stands in for the real
/// page handlers, which only exist in the browser.
fn site_registry(cfg: &WebbConfig) -> ActionRegistry<String> {
    let mut registry = ActionRegistry::new(|name: &str| format!("template {name}"));
    for action in &cfg.site.actions {
        let name = action.clone();
        registry.register(action.clone(), move |args: &[String]| {
            format!("{name}({})", args.join(", "))
        });
    }
    for template in &cfg.site.templates {
        registry.add_template(template.clone());
    }
    registry
}

pub fn run_resolve(router: &Router, cfg: &WebbConfig, url: &str) -> Result<String> {
    let registry = site_registry(cfg);
    let Some(found) = router.find_action(url, &registry)? else {
        return Ok("not found\n".to_string());
    };
    let kind = match found.kind() {
        ActionKind::Handler => "handler",
        ActionKind::Template => "template",
    };
    Ok(format!(
        "action: {}\nkind:   {}\nargs:   {:?}\ncall:   {}\n",
        found.action(),
        kind,
        found.args(),
        found.invoke()
    ))
}
