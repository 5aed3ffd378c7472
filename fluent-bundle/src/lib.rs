//! The Fluent message resolution engine: a parsed-message store, a
//! tree-walking resolver and an ahead-of-time compiler over the same
//! store, a pluggable escaper registry, and the `FluentBundle` façade
//! that ties them together for a single locale.

mod builtins;
mod bundle;
mod compiler;
mod entry;
mod errors;
mod escaper;
mod locale;
mod resolve;
mod types;

pub use builtins::{ArgCount, FunctionArgSpec, KwargSpec, NativeFunction};
pub use bundle::FluentBundle;
pub use errors::{FluentError, LookupError};
pub use escaper::{Escaper, NullEscaper};
pub use locale::FluentLocale;
pub use types::{
    DateOptions, DateStyle, FluentArgument, FluentDate, FluentNone, FluentNumber, FluentValue,
    NumberOptions, NumberStyle,
};
