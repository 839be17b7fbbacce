//! Recognizing action URLs.

use crate::url_codec::DecodedUrl;

/// Action named by an absolute URL: the second segment with `-` turned
/// into `_`. `None` for the root, relative or external URLs.
pub fn url_action(url: &DecodedUrl) -> Option<String> {
    match url.path.as_slice() {
        [first, action, ..] if first.is_empty() && !action.is_empty() => {
            Some(action_name(action))
        }
        _ => None,
    }
}

/// `true` for `/` and for the empty URL.
pub fn is_root(url: &DecodedUrl) -> bool {
    match url.path.as_slice() {
        [only] => only.is_empty(),
        [first, second] => first.is_empty() && second.is_empty(),
        _ => false,
    }
}

/// Handler naming uses underscores.
pub(crate) fn action_name(segment: &str) -> String {
    segment.replace('-', "_")
}

/// URLs use hyphens.
pub(crate) fn segment_name(action: &str) -> String {
    action.replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url_codec::Params;

    fn url(path: &[&str]) -> DecodedUrl {
        DecodedUrl::new(path.iter().copied(), Params::new())
    }

    #[test]
    fn hyphens_become_underscores() {
        assert_eq!(url_action(&url(&["", "user-profile"])).as_deref(), Some("user_profile"));
        assert_eq!(
            url_action(&url(&["", "a-b-c", "42"])).as_deref(),
            Some("a_b_c")
        );
    }

    #[test]
    fn root_is_not_an_action() {
        assert_eq!(url_action(&url(&[""])), None);
        assert_eq!(url_action(&url(&["", ""])), None);
        assert!(is_root(&url(&[""])));
        assert!(is_root(&url(&["", ""])));
    }

    #[test]
    fn relative_and_external_are_not_actions() {
        assert_eq!(url_action(&url(&["a", "b"])), None);
        assert_eq!(url_action(&url(&["http:", "", "example.com"])), None);
        assert!(!is_root(&url(&["a"])));
        assert!(!is_root(&url(&["", "a"])));
    }

    #[test]
    fn empty_action_segment_with_tail() {
        assert_eq!(url_action(&url(&["", "", "x"])), None);
        assert!(!is_root(&url(&["", "", "x"])));
    }

    #[test]
    fn segment_name_reverses_action_name() {
        assert_eq!(segment_name("user_profile"), "user-profile");
        assert_eq!(action_name(&segment_name("a_b")), "a_b");
    }
}
