//! Error sink for validation failures.
//!
//! Helpers never raise on bad arguments. They hand a fixed message to a
//! [`Sink`] and return whatever the sink returns.

use crate::types::JsValue;

/// Receives validation failure messages.
pub trait Sink {
    /// Records `message` and returns the value the failing helper returns.
    fn error(&self, message: &str) -> JsValue;
}

/// Default sink: emits a `tracing` error event and returns `undefined`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn error(&self, message: &str) -> JsValue {
        tracing::error!(target: "jsz_utils", "{}", message);
        JsValue::Undefined
    }
}

impl<F> Sink for F
where
    F: Fn(&str) -> JsValue,
{
    fn error(&self, message: &str) -> JsValue {
        self(message)
    }
}
