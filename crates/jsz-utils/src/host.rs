//! Host environment description.

use crate::types::JsValue;

/// A windowed, browser-like runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub user_agent: String,
}

/// The environment the helpers run in.
///
/// `Host::default()` is a plain process with no window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Host {
    pub window: Option<Window>,
}

impl Host {
    /// A windowed host reporting `user_agent`.
    pub fn windowed(user_agent: impl Into<String>) -> Self {
        Self {
            window: Some(Window {
                user_agent: user_agent.into(),
            }),
        }
    }

    pub fn in_browser(&self) -> bool {
        self.window.is_some()
    }
}

/// User agent of the default host: always `false`, the process has no window.
pub fn user_agent() -> JsValue {
    user_agent_with(&Host::default())
}

/// Returns the lower-cased user agent when `host` is windowed, otherwise the
/// falsy sentinel `false`.
///
/// # Examples
///
/// ```
/// use jsz_utils::{user_agent_with, Host, JsValue};
///
/// let host = Host::windowed("Mozilla/5.0 (X11; Linux x86_64)");
/// assert_eq!(user_agent_with(&host), JsValue::from("mozilla/5.0 (x11; linux x86_64)"));
/// assert_eq!(user_agent_with(&Host::default()), JsValue::from(false));
/// ```
pub fn user_agent_with(host: &Host) -> JsValue {
    match &host.window {
        Some(window) => JsValue::from(window.user_agent.to_lowercase()),
        None => JsValue::from(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coerce::is_truthy;

    #[test]
    fn test_default_host_is_not_windowed() {
        assert!(!Host::default().in_browser());
        assert!(!is_truthy(&user_agent()));
    }

    #[test]
    fn test_windowed_host() {
        let host = Host::windowed("Agent/1.0");
        assert!(host.in_browser());
        assert_eq!(user_agent_with(&host), JsValue::from("agent/1.0"));
    }

    #[test]
    fn test_empty_user_agent_is_still_a_string() {
        let host = Host::windowed("");
        assert_eq!(user_agent_with(&host), JsValue::from(""));
    }
}
