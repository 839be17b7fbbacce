//! Tests for lang-url, full-url, resolve and completions.

use super::parse;
use crate::cli::CliCommand;
use clap_complete::Shell;
use webb_core::config::WebbConfig;

fn site() -> WebbConfig {
    toml::from_str(
        r#"
        lang = "en"
        root_action = "home"

        [aliases.to_lang.user_profile]
        fr = "profil"

        [aliases.to_en]
        profil = "user_profile"

        [site]
        actions = ["user_profile"]
        templates = ["home"]
        "#,
    )
    .unwrap()
}

#[test]
fn cli_parse_lang_url() {
    match parse(&["webb", "lang-url", "/user-profile", "--lang", "fr"]) {
        CliCommand::LangUrl { url, lang, params } => {
            assert_eq!(url, "/user-profile");
            assert_eq!(lang.as_deref(), Some("fr"));
            assert!(params.is_empty());
        }
        _ => panic!("expected LangUrl"),
    }
}

#[test]
fn cli_parse_full_url() {
    match parse(&["webb", "full-url", "/search", "--param", "q=x"]) {
        CliCommand::FullUrl { url, lang, params } => {
            assert_eq!(url, "/search");
            assert!(lang.is_none());
            assert_eq!(params, vec!["q=x"]);
        }
        _ => panic!("expected FullUrl"),
    }
}

#[test]
fn cli_parse_resolve() {
    match parse(&["webb", "resolve", "/profil/3"]) {
        CliCommand::Resolve { url } => assert_eq!(url, "/profil/3"),
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["webb", "completions", "zsh"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Zsh),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn run_lang_url_command() {
    let out = parse(&["webb", "lang-url", "/user-profile/3", "--lang", "fr"])
        .run(&site())
        .unwrap();
    assert_eq!(out, "/profil/3\n");
}

#[test]
fn run_full_url_command_browsing_french() {
    let out = parse(&["webb", "full-url", "/search", "--lang", "fr"])
        .run(&site())
        .unwrap();
    assert_eq!(out, "/search?lang=fr\n");
}

#[test]
fn run_resolve_command() {
    let out = parse(&["webb", "resolve", "/profil/3"]).run(&site()).unwrap();
    assert!(out.starts_with("action: user_profile\nkind:   handler\n"));
}

#[test]
fn run_reports_bad_escape() {
    let err = parse(&["webb", "resolve", "/profil/%zz"])
        .run(&site())
        .unwrap_err();
    assert!(format!("{err:#}").contains("malformed escape"));
}
