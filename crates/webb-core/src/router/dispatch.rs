//! Resolving inbound URLs to handlers.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use super::action::{is_root, url_action};
use super::Router;
use crate::error::UrlError;
use crate::url_codec::DecodedUrl;

type Handler<T> = Box<dyn Fn(&[String]) -> T>;
type TemplateRenderer<T> = Box<dyn Fn(&str) -> T>;

/// Handlers by canonical action name, plus the static templates served
/// when an action has no handler.
pub struct ActionRegistry<T> {
    handlers: HashMap<String, Handler<T>>,
    templates: BTreeSet<String>,
    render_template: TemplateRenderer<T>,
}

impl<T> ActionRegistry<T> {
    /// `render_template` is called with the template name for actions that
    /// resolve to a static template.
    pub fn new(render_template: impl Fn(&str) -> T + 'static) -> Self {
        Self {
            handlers: HashMap::new(),
            templates: BTreeSet::new(),
            render_template: Box::new(render_template),
        }
    }

    /// Registers `handler` for `action`. The handler receives the path
    /// segments that follow the action segment.
    pub fn register(
        &mut self,
        action: impl Into<String>,
        handler: impl Fn(&[String]) -> T + 'static,
    ) -> &mut Self {
        self.handlers.insert(action.into(), Box::new(handler));
        self
    }

    pub fn add_template(&mut self, name: impl Into<String>) -> &mut Self {
        self.templates.insert(name.into());
        self
    }

    pub fn has_handler(&self, action: &str) -> bool {
        self.handlers.contains_key(action)
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.templates.contains(name)
    }

    fn target(&self, action: &str) -> Option<Target<'_, T>> {
        if let Some(handler) = self.handlers.get(action) {
            return Some(Target::Handler(handler.as_ref()));
        }
        if self.templates.contains(action) {
            return Some(Target::Template(self.render_template.as_ref()));
        }
        None
    }
}

impl<T> fmt::Debug for ActionRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut handlers: Vec<&String> = self.handlers.keys().collect();
        handlers.sort();
        f.debug_struct("ActionRegistry")
            .field("handlers", &handlers)
            .field("templates", &self.templates)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Handler,
    Template,
}

enum Target<'r, T> {
    Handler(&'r dyn Fn(&[String]) -> T),
    Template(&'r dyn Fn(&str) -> T),
}

/// An action found for a URL, with its arguments bound.
pub struct ResolvedAction<'r, T> {
    action: String,
    args: Vec<String>,
    target: Target<'r, T>,
}

impl<'r, T> ResolvedAction<'r, T> {
    /// Canonical action name.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Path segments after the action segment.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn kind(&self) -> ActionKind {
        match self.target {
            Target::Handler(_) => ActionKind::Handler,
            Target::Template(_) => ActionKind::Template,
        }
    }

    pub fn invoke(&self) -> T {
        match self.target {
            Target::Handler(handler) => handler(&self.args),
            Target::Template(render) => render(&self.action),
        }
    }

    /// Zero-argument closure that dispatches to the resolved target.
    pub fn into_closure(self) -> impl FnOnce() -> T + 'r
    where
        T: 'r,
    {
        move || self.invoke()
    }
}

impl<T> fmt::Debug for ResolvedAction<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedAction")
            .field("action", &self.action)
            .field("args", &self.args)
            .field("kind", &self.kind())
            .finish()
    }
}

impl Router {
    /// Finds what should handle `path`.
    ///
    /// `/` resolves to the root action. A localized action segment is
    /// translated back to its canonical name. A registered handler wins over
    /// a static template of the same name. `Ok(None)` means nothing serves
    /// this URL and the caller should render its not-found page.
    pub fn find_action<'r, T>(
        &self,
        path: &str,
        registry: &'r ActionRegistry<T>,
    ) -> Result<Option<ResolvedAction<'r, T>>, UrlError> {
        let url = DecodedUrl::parse(path)?;

        let (action, args) = if is_root(&url) {
            (self.root_action.clone(), Vec::new())
        } else if url_action(&url).is_some() {
            let mut segments = url.path.into_iter().skip(1);
            let segment = segments.next().unwrap_or_default();
            (self.canonical_action(&segment), segments.collect())
        } else {
            tracing::trace!(path, "not an action url");
            return Ok(None);
        };

        match registry.target(&action) {
            Some(target) => {
                tracing::debug!(path, %action, args = args.len(), "action resolved");
                Ok(Some(ResolvedAction {
                    action,
                    args,
                    target,
                }))
            }
            None => {
                tracing::debug!(path, %action, "no handler or template");
                Ok(None)
            }
        }
    }
}
