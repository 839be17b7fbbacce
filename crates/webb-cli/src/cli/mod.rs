//! CLI for inspecting and generating site links.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use webb_core::config::{self, WebbConfig};
use webb_core::Router;

use commands::{
    run_completions, run_decode, run_encode, run_full_url, run_lang_url, run_resolve, run_update,
};

/// Top-level CLI for the webb link router.
#[derive(Debug, Parser)]
#[command(name = "webb")]
#[command(about = "webb: decode, rewrite and resolve site links", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/webb/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Split a URL into path segments and params.
    Decode {
        url: String,
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Build a URL from path segments and params.
    Encode {
        /// Path segments, unescaped.
        segments: Vec<String>,
        /// Start the path with `/`.
        #[arg(long)]
        absolute: bool,
        /// Query param; repeat for more. A bare KEY is a flag.
        #[arg(long = "param", value_name = "KEY[=VALUE]")]
        params: Vec<String>,
    },

    /// Replace path segments and merge params into an existing URL.
    Update {
        url: String,
        /// Segment override by index (0 is the empty segment before the first `/`).
        #[arg(long = "segment", value_name = "INDEX=VALUE")]
        segments: Vec<String>,
        #[arg(long = "param", value_name = "KEY[=VALUE]")]
        params: Vec<String>,
    },

    /// Rewrite a link for readers of another language.
    LangUrl {
        url: String,
        /// Target language (defaults to a `lang` param, then the current language).
        #[arg(long)]
        lang: Option<String>,
        #[arg(long = "param", value_name = "KEY[=VALUE]")]
        params: Vec<String>,
    },

    /// Link in the language being browsed.
    FullUrl {
        url: String,
        /// Language being browsed (defaults to the configured current language).
        #[arg(long)]
        lang: Option<String>,
        #[arg(long = "param", value_name = "KEY[=VALUE]")]
        params: Vec<String>,
    },

    /// Show which action handles a URL.
    Resolve { url: String },

    /// Print shell completions.
    Completions { shell: Shell },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        let output = match cli.command {
            CliCommand::Completions { shell } => {
                let mut cmd = Cli::command();
                run_completions(shell, &mut cmd)
            }
            command => {
                let cfg = load_config(cli.config.as_deref())?;
                tracing::debug!("loaded config: {:?}", cfg);
                command.run(&cfg)?
            }
        };

        print!("{output}");
        Ok(())
    }

    /// Runs a command against `cfg` and returns what it prints.
    pub fn run(self, cfg: &WebbConfig) -> Result<String> {
        let router = Router::new(cfg);
        let output = match self {
            CliCommand::Decode { url, json } => run_decode(&url, json)?,
            CliCommand::Encode {
                segments,
                absolute,
                params,
            } => run_encode(&segments, absolute, &params)?,
            CliCommand::Update {
                url,
                segments,
                params,
            } => run_update(&url, &segments, &params)?,
            CliCommand::LangUrl { url, lang, params } => {
                run_lang_url(&router, &url, lang.as_deref(), &params)?
            }
            CliCommand::FullUrl { url, lang, params } => {
                let router = match lang {
                    Some(lang) => router.with_current_lang(lang),
                    None => router,
                };
                run_full_url(&router, &url, &params)?
            }
            CliCommand::Resolve { url } => run_resolve(&router, cfg, &url)?,
            CliCommand::Completions { shell } => {
                let mut cmd = Cli::command();
                run_completions(shell, &mut cmd)
            }
        };
        Ok(output)
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<WebbConfig> {
    match path {
        Some(path) => config::load_from(path),
        None => config::load_or_init(),
    }
}

#[cfg(test)]
mod tests;
