use crate::coerce::to_str;
use crate::types::JsValue;

/// Converts a value to its string form, then lower-cases it.
///
/// # Examples
///
/// ```
/// use jsz_utils::{lower_case, JsValue};
///
/// assert_eq!(lower_case(&JsValue::from("HeLLo")), "hello");
/// assert_eq!(lower_case(&JsValue::from(true)), "true");
/// ```
pub fn lower_case(value: &JsValue) -> String {
    to_str(value).to_lowercase()
}

/// Converts a value to its string form, then upper-cases it.
pub fn upper_case(value: &JsValue) -> String {
    to_str(value).to_uppercase()
}
