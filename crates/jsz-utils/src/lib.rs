//! jsz-utils - standalone helpers for JavaScript-shaped values.
//!
//! Type predicates, coercions, case conversion, email validation, a JSON
//! codec guarded against falsy input, array sorting and positional grouping.
//! Every helper is a free function over [`JsValue`].
//!
//! Bad arguments are never raised: the helper reports a fixed message to a
//! [`Sink`] and returns the sink's value. The plain functions use
//! [`TracingSink`]; the `*_with` variants take any sink. Failures beyond the
//! helpers' control, such as malformed JSON text, come back as
//! [`UtilsError`].
//!
//! # Example
//!
//! ```
//! use jsz_utils::{get_type, group_arrays, is_int, JsValue};
//! use serde_json::json;
//!
//! assert!(is_int(&JsValue::from(3)));
//! assert_eq!(get_type(&JsValue::from(json!([]))).as_str(), "array");
//!
//! let grouped = group_arrays(&[JsValue::from(json!([1])), JsValue::from(json!([2]))]);
//! assert_eq!(grouped, JsValue::from(json!({"0": [1], "1": [2]})));
//! ```

pub mod coerce;
pub mod error;
pub mod group;
pub mod host;
pub mod json;
pub mod predicates;
pub mod sink;
pub mod sort;
pub mod strings;
pub mod types;

pub use coerce::{is_truthy, number_to_string, string_to_number, to_array, to_int, to_str};
pub use error::UtilsError;
pub use group::{group_arrays, group_arrays_with, group_objects, group_objects_with};
pub use host::{user_agent, user_agent_with, Host, Window};
pub use json::{parse_json, parse_json_with, stringify_json, stringify_json_with};
pub use predicates::{
    get_type, is_array, is_int, is_null, is_object, is_str, is_undefined, to_false, to_true,
};
pub use sink::{Sink, TracingSink};
pub use sort::{sort_array, sort_array_with};
pub use strings::{is_email, lower_case, upper_case};
pub use types::{js_value_eq, JsType, JsValue};

/// Library version, `v` followed by the crate version.
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));
