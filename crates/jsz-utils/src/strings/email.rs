use super::lower_case;
use crate::coerce::JS_WHITESPACE_CLASS;
use crate::types::JsValue;
use std::sync::OnceLock;

fn email_regex() -> &'static regex::Regex {
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let atom = format!(r#"[^<>()\[\]\\.,;:{}@"]+"#, JS_WHITESPACE_CLASS);
        regex::Regex::new(&format!(
            r#"^(({atom}(\.{atom})*)|("[^\n\r\u{{2028}}\u{{2029}}]+"))@((\[[0-9]{{1,3}}\.[0-9]{{1,3}}\.[0-9]{{1,3}}\.[0-9]{{1,3}}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{{2,}}))$"#,
        ))
        .expect("email pattern is valid")
    })
}

/// Returns true if the lower-cased string form of a value looks like an
/// email address.
///
/// The local part is either dot-separated atoms or a quoted string; the
/// domain is dotted labels ending in a TLD of two or more letters, or a
/// bracketed IPv4 literal.
///
/// # Examples
///
/// ```
/// use jsz_utils::{is_email, JsValue};
///
/// assert!(is_email(&JsValue::from("a@b.com")));
/// assert!(!is_email(&JsValue::from("not-an-email")));
/// ```
pub fn is_email(value: &JsValue) -> bool {
    email_regex().is_match(&lower_case(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(s: &str) -> bool {
        is_email(&JsValue::from(s))
    }

    #[test]
    fn test_valid_addresses() {
        assert!(check("a@b.com"));
        assert!(check("first.last@sub.example.co.uk"));
        assert!(check("User+Tag@Example.COM"));
        assert!(check("\"john doe\"@example.org"));
        assert!(check("root@[192.168.0.1]"));
        assert!(check("x-y_z@my-host.io"));
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(!check("not-an-email"));
        assert!(!check(""));
        assert!(!check("a@b"));
        assert!(!check("a@b.c"));
        assert!(!check("a..b@c.com"));
        assert!(!check(".a@c.com"));
        assert!(!check("a b@c.com"));
        assert!(!check("a@b.com "));
        assert!(!check("a@[1.2.3]"));
        assert!(!check("a@@b.com"));
        assert!(!check("\"a\nb\"@c.com"));
    }

    #[test]
    fn test_local_part_uses_host_whitespace() {
        assert!(!check("a\u{FEFF}b@c.com"));
        assert!(!check("a\u{3000}b@c.com"));
        assert!(check("a\u{0085}b@c.com"));
    }

    #[test]
    fn test_non_string_inputs() {
        assert!(!is_email(&JsValue::Undefined));
        assert!(!is_email(&JsValue::NULL));
        assert!(!is_email(&JsValue::from(42)));
        assert!(is_email(&JsValue::from(json!(["a@b.com"]))));
    }
}
