//! Helpers for building and reading handler path arguments.

use std::fmt::Display;

/// URL slug for an item: `slug(42, "Hello World!")` is `"hello-world-42"`.
///
/// Lowercases, turns spaces into `-` and drops anything that is not an ASCII
/// word character or `-`. The id goes last so [`intarg`] can read it back.
pub fn slug(id: impl Display, title: &str) -> String {
    let body: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    format!("{body}-{id}")
}

/// Trailing number of a path argument (`"hello-world-42"` gives `42`).
pub fn intarg(arg: Option<&str>) -> Option<u64> {
    let arg = arg?;
    let digits_start = arg
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;
    arg[digits_start..].parse().ok()
}

/// `"/arg"` for a present, non-empty argument, `""` otherwise. Used to
/// append optional segments when building links.
pub fn optarg(arg: Option<&str>) -> String {
    match arg {
        Some(a) if !a.is_empty() => format!("/{a}"),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_lowercases_and_strips() {
        assert_eq!(slug(42, "Hello World!"), "hello-world-42");
        assert_eq!(slug("7", "Café  au lait"), "caf--au-lait-7");
        assert_eq!(slug(1, ""), "-1");
    }

    #[test]
    fn intarg_reads_trailing_digits() {
        assert_eq!(intarg(Some("hello-world-42")), Some(42));
        assert_eq!(intarg(Some("17")), Some(17));
        assert_eq!(intarg(Some("v2-beta")), None);
        assert_eq!(intarg(Some("")), None);
        assert_eq!(intarg(None), None);
    }

    #[test]
    fn slug_then_intarg() {
        assert_eq!(intarg(Some(&slug(9001, "Some Post"))), Some(9001));
    }

    #[test]
    fn optarg_prefixes_slash() {
        assert_eq!(optarg(Some("posts")), "/posts");
        assert_eq!(optarg(Some("")), "");
        assert_eq!(optarg(None), "");
    }
}
