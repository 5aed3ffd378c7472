//! Escaping policies. An escaper is a capability bundle selected per
//! message id: it controls how text is marked safe, how it is escaped on
//! output, and how parts are joined, and can request bidi isolation be
//! turned off for its messages.

use crate::types::FluentValue;

pub trait Escaper: fmt::Debug + Send + Sync {
    /// Stable name, used both as the "output type" tag on `FluentValue::Escaped`
    /// and to test whether two escapers are the same one.
    fn name(&self) -> &'static str;

    /// Whether this escaper's messages should use bidi isolation. `None`
    /// defers to the context's default.
    fn use_isolating(&self) -> Option<bool> {
        None
    }

    fn select(&self, message_id: &str) -> bool;

    fn mark_escaped(&self, text: &str) -> FluentValue;

    fn escape(&self, text: &str) -> FluentValue;

    fn string_join(&self, parts: Vec<FluentValue>) -> FluentValue;
}

use std::fmt;

/// The default escaper: output type is a plain string, it selects every
/// message, and marking/escaping are the identity function.
#[derive(Debug, Default)]
pub struct NullEscaper;

pub const NULL_ESCAPER_NAME: &str = "null";

impl Escaper for NullEscaper {
    fn name(&self) -> &'static str {
        NULL_ESCAPER_NAME
    }

    fn select(&self, _message_id: &str) -> bool {
        true
    }

    fn mark_escaped(&self, text: &str) -> FluentValue {
        FluentValue::String(text.to_string())
    }

    fn escape(&self, text: &str) -> FluentValue {
        FluentValue::String(text.to_string())
    }

    fn string_join(&self, parts: Vec<FluentValue>) -> FluentValue {
        let mut out = String::new();
        for part in parts {
            out.push_str(&part.to_string());
        }
        FluentValue::String(out)
    }
}

/// Picks the first escaper in `escapers` whose `select` accepts
/// `message_id`, falling back to the null escaper.
pub fn escaper_for_message<'a>(
    escapers: &'a [Box<dyn Escaper>],
    message_id: &str,
    null_escaper: &'a dyn Escaper,
) -> &'a dyn Escaper {
    for escaper in escapers {
        if escaper.select(message_id) {
            return escaper.as_ref();
        }
    }
    null_escaper
}

/// Two escapers are compatible iff the inner one is the null escaper, or
/// they are the very same escaper (by name). Messages with no escaper
/// defined can always be used from other messages, because the outer
/// message does the escaping and the inner message returns a plain string.
pub fn escapers_compatible(outer: &dyn Escaper, inner: &dyn Escaper) -> bool {
    inner.name() == NULL_ESCAPER_NAME || outer.name() == inner.name()
}
