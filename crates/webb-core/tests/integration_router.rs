//! Integration test: config file on disk, router built from it, links
//! generated for several languages and resolved back to handlers.

use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

use webb_core::config;
use webb_core::url_codec::{self, UrlUpdate};
use webb_core::{ActionKind, ActionRegistry, DecodedUrl, ParamValue, Params, Router};

const SITE: &str = r#"
lang = "en"
root_action = "home"

[aliases.to_lang.user_profile]
fr = "profil"
ro = "profil_utilizator"

[aliases.to_lang.home]
fr = "accueil"

[aliases.to_en]
profil = "user_profile"
profil-utilizator = "user_profile"
accueil = "home"

[site]
actions = ["user_profile", "home"]
templates = ["about"]
"#;

fn load_router() -> Router {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, SITE).unwrap();
    let cfg = config::load_from(&path).unwrap();
    Router::new(&cfg)
}

#[test]
fn outbound_links_resolve_back_to_the_same_handler() {
    let router = load_router();
    let seen: Rc<RefCell<Vec<Vec<String>>>> = Rc::new(RefCell::new(Vec::new()));

    let mut registry = ActionRegistry::new(|name: &str| format!("static {name}"));
    let sink = Rc::clone(&seen);
    registry.register("user_profile", move |args: &[String]| {
        sink.borrow_mut().push(args.to_vec());
        "profile".to_string()
    });
    registry.add_template("about");

    for lang in ["en", "fr", "ro", "de"] {
        let link = router
            .lang_url("/user-profile/42", None, Some(lang))
            .unwrap();
        let found = router.find_action(&link, &registry).unwrap().unwrap();
        assert_eq!(found.action(), "user_profile", "lang {lang}, link {link}");
        assert_eq!(found.kind(), ActionKind::Handler);
        assert_eq!(found.into_closure()(), "profile");
    }

    assert_eq!(seen.borrow().len(), 4);
    assert!(seen.borrow().iter().all(|args| args == &["42".to_string()]));
}

#[test]
fn decode_encode_and_alias_examples() {
    let decoded = url_codec::decode("a/b?a&b=1").unwrap();
    let mut expected = Params::new();
    expected.insert("a".to_string(), ParamValue::Flag);
    expected.insert("b".to_string(), ParamValue::from("1"));
    assert_eq!(decoded, DecodedUrl::new(["a", "b"], expected.clone()));
    assert_eq!(url_codec::encode(&["a", "b"], &expected), "a/b?a&b=1");

    let router = load_router();
    assert_eq!(router.lang_url("/user-profile", None, Some("fr")).unwrap(), "/profil");
    assert_eq!(
        router.lang_url("/user-profile", None, Some("es")).unwrap(),
        "/user-profile?lang=es"
    );
}

#[test]
fn switching_language_with_update() {
    let router = load_router();
    let fr = router.lang_url("/user-profile/42?tab=posts", None, Some("fr")).unwrap();
    assert_eq!(fr, "/profil/42?tab=posts");
    let page2 = url_codec::update_url(&fr, &UrlUpdate::new().param("page", "2")).unwrap();
    assert_eq!(page2, "/profil/42?page=2&tab=posts");
    let back = router.lang_url(&page2, None, Some("en")).unwrap();
    assert_eq!(back, "/user-profile/42?page=2&tab=posts");
}

#[test]
fn root_and_templates() {
    let router = load_router();
    let mut registry = ActionRegistry::new(|name: &str| name.to_string());
    registry.add_template("home").add_template("about");

    let root = router.find_action("/", &registry).unwrap().unwrap();
    assert_eq!(root.kind(), ActionKind::Template);
    assert_eq!(root.invoke(), "home");

    let accueil = router.lang_url("/", None, Some("fr")).unwrap();
    assert_eq!(accueil, "/accueil");
    assert_eq!(
        router.find_action(&accueil, &registry).unwrap().unwrap().action(),
        "home"
    );

    assert!(router.find_action("/missing", &registry).unwrap().is_none());
}
