//! UI phrases: placeholder formatting, names and relative times.

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::WebbConfig;

/// Built-in English phrases, overridable per site in `[strings]`.
const DEFAULT_STRINGS: &[(&str, &str)] = &[
    ("years", "{0} years"),
    ("months", "{0} months"),
    ("days", "{0} days"),
    ("hours", "{0} hours"),
    ("minutes", "{0} minutes"),
    ("one_minute", "1 minute"),
    ("time_ago", "{0} ago"),
    ("in_time", "in {0}"),
];

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3600.0;
const DAY: f64 = 24.0 * HOUR;
const MONTH: f64 = 30.5 * DAY;
const YEAR: f64 = 365.0 * DAY;

/// Phrase catalog: configured overrides over the built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct Strings {
    overrides: BTreeMap<String, String>,
}

impl Strings {
    pub fn new(overrides: BTreeMap<String, String>) -> Self {
        Self { overrides }
    }

    pub fn from_config(cfg: &WebbConfig) -> Self {
        Self::new(cfg.strings.clone())
    }

    /// Phrase for `name`; the key itself when it is unknown.
    pub fn get<'a>(&'a self, name: &'a str) -> &'a str {
        if let Some(s) = self.overrides.get(name) {
            return s;
        }
        DEFAULT_STRINGS
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| *v)
            .unwrap_or(name)
    }
}

/// Replaces `{0}`, `{1}`... with `args` in order. Unknown placeholders stay.
pub fn format_positional(template: &str, args: &[&str]) -> String {
    substitute(template, |key| {
        key.parse::<usize>()
            .ok()
            .and_then(|i| args.get(i))
            .map(|s| s.to_string())
    })
}

/// Replaces `{name}` with the matching value, ignoring ASCII case.
pub fn format_named(template: &str, args: &[(&str, &str)]) -> String {
    substitute(template, |key| {
        args.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.to_string())
    })
}

fn substitute(template: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let key = &after[..close];
                match lookup(key) {
                    Some(value) => out.push_str(&value),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Display first name: first word of `name`, else the local part of
/// `email`, else empty.
pub fn firstname(name: Option<&str>, email: Option<&str>) -> String {
    if let Some(name) = name.filter(|n| !n.is_empty()) {
        return name.trim().split(' ').next().unwrap_or_default().to_string();
    }
    if let Some(email) = email.filter(|e| !e.is_empty()) {
        return email.trim().split('@').next().unwrap_or_default().to_string();
    }
    String::new()
}

/// Coarse duration: "3 hours", "2 days", "1 minute".
pub fn rel_time(seconds: f64, strings: &Strings) -> String {
    let (key, unit) = if seconds > 2.0 * YEAR {
        ("years", YEAR)
    } else if seconds > 2.0 * MONTH {
        ("months", MONTH)
    } else if seconds > 1.5 * DAY {
        ("days", DAY)
    } else if seconds > 2.0 * HOUR {
        ("hours", HOUR)
    } else if seconds > 2.0 * MINUTE {
        ("minutes", MINUTE)
    } else {
        return strings.get("one_minute").to_string();
    };
    let count = format!("{}", (seconds / unit).round() as i64);
    format_positional(strings.get(key), &[count.as_str()])
}

/// "5 minutes ago" for positive `seconds_ago`, "in 5 minutes" otherwise.
pub fn timeago(seconds_ago: f64, strings: &Strings) -> String {
    let key = if seconds_ago > 0.0 { "time_ago" } else { "in_time" };
    let rel = rel_time(seconds_ago.abs(), strings);
    format_positional(strings.get(key), &[rel.as_str()])
}

/// [`timeago`] for a unix timestamp, relative to the system clock.
pub fn timeago_since(unix_time: f64, strings: &Strings) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default();
    timeago(now - unix_time, strings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_placeholders() {
        assert_eq!(format_positional("{1} of {0}", &["10", "3"]), "3 of 10");
        assert_eq!(format_positional("{0}{0}", &["a"]), "aa");
        assert_eq!(format_positional("{2} left", &["a"]), "{2} left");
    }

    #[test]
    fn named_placeholders_ignore_case() {
        let s = format_named(
            "{Current} of {total}",
            &[("current", "3"), ("total", "10")],
        );
        assert_eq!(s, "3 of 10");
    }

    #[test]
    fn unbalanced_braces_are_kept() {
        assert_eq!(format_positional("a { b", &["x"]), "a { b");
        assert_eq!(format_positional("}{0}", &["x"]), "}x");
    }

    #[test]
    fn firstname_prefers_name_then_email() {
        assert_eq!(firstname(Some(" Jane Doe "), None), "Jane");
        assert_eq!(firstname(None, Some("jane@example.com")), "jane");
        assert_eq!(firstname(Some(""), Some("x@y")), "x");
        assert_eq!(firstname(None, None), "");
    }

    #[test]
    fn rel_time_thresholds() {
        let s = Strings::default();
        assert_eq!(rel_time(30.0, &s), "1 minute");
        assert_eq!(rel_time(10.0 * MINUTE, &s), "10 minutes");
        assert_eq!(rel_time(3.0 * HOUR, &s), "3 hours");
        assert_eq!(rel_time(2.0 * DAY, &s), "2 days");
        assert_eq!(rel_time(90.0 * DAY, &s), "3 months");
        assert_eq!(rel_time(3.0 * YEAR, &s), "3 years");
    }

    #[test]
    fn timeago_direction() {
        let s = Strings::default();
        assert_eq!(timeago(3.0 * HOUR, &s), "3 hours ago");
        assert_eq!(timeago(-10.0 * MINUTE, &s), "in 10 minutes");
    }

    #[test]
    fn overrides_replace_defaults() {
        let mut o = BTreeMap::new();
        o.insert("time_ago".to_string(), "acum {0}".to_string());
        o.insert("hours".to_string(), "{0} ore".to_string());
        let s = Strings::new(o);
        assert_eq!(timeago(3.0 * HOUR, &s), "acum 3 ore");
        assert_eq!(s.get("days"), "{0} days");
        assert_eq!(s.get("unknown_key"), "unknown_key");
    }

    #[test]
    fn catalog_from_config() {
        let cfg: WebbConfig = toml::from_str("[strings]\none_minute = \"o minut\"").unwrap();
        assert_eq!(rel_time(5.0, &Strings::from_config(&cfg)), "o minut");
    }

    #[test]
    fn timeago_since_past() {
        let s = Strings::default();
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs_f64();
        assert_eq!(timeago_since(now - 3.0 * HOUR, &s), "3 hours ago");
    }
}
