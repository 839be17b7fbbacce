pub mod config;
pub mod logging;

pub mod args;
pub mod error;
pub mod router;
pub mod text;
pub mod url_codec;

pub use error::UrlError;
pub use router::{ActionKind, ActionRegistry, ResolvedAction, Router};
pub use url_codec::{DecodedUrl, ParamValue, Params};
