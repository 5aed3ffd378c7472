//! `FluentBundle` is a collection of localization messages for a single
//! locale, which are meant to be used together in a single view, widget,
//! or any other UI abstraction.
//!
//! It owns the parsed store, the locale-aware formatter, the escaper
//! registry, and the function table, and exposes the `format` entry point
//! that both the tree-walking interpreter and the ahead-of-time compiler
//! serve.

use std::collections::HashMap;
use std::sync::RwLock;

use fluent_syntax::ast;

use crate::builtins::{default_functions, FunctionArgSpec, NativeFunction, RegisteredFunction};
use crate::compiler::{self, CompiledBundle};
use crate::entry::Store;
use crate::errors::{FluentError, LookupError};
use crate::escaper::{Escaper, NullEscaper};
use crate::locale::FluentLocale;
use crate::resolve::{self, ResolveContext};
use crate::types::FluentArgument;
pub use crate::types::FluentValue;

/// A collection of localization messages for a single locale, which are
/// meant to be used together in a single view, widget, or any other UI
/// abstraction.
///
/// # Examples
///
/// ```
/// use fluent_bundle::FluentBundle;
/// use std::collections::HashMap;
///
/// let mut bundle = FluentBundle::new(&["en-US"]);
/// bundle.set_use_isolating(false); // skip the bidi isolation marks for this example
/// assert!(bundle.add_messages("intro = Welcome, { $name }.\n").is_empty());
///
/// let mut args = HashMap::new();
/// args.insert("name".to_string(), "Rustacean".into());
///
/// let (value, errors) = bundle.format("intro", Some(&args)).unwrap();
/// assert_eq!(value.to_string(), "Welcome, Rustacean.");
/// assert!(errors.is_empty());
/// ```
pub struct FluentBundle {
    locale: FluentLocale,
    store: Store,
    escapers: Vec<Box<dyn Escaper>>,
    null_escaper: NullEscaper,
    functions: HashMap<String, RegisteredFunction>,
    use_isolating: bool,
    use_compiler: bool,
    load_errors: Vec<FluentError>,
    compiled: RwLock<Option<CompiledBundle>>,
}

impl FluentBundle {
    /// Creates an empty bundle over the given locale fallback chain, with
    /// bidi isolation on and the AOT compiler enabled, matching the
    /// defaults a host application gets with no further configuration.
    pub fn new(locales: &[impl ToString]) -> Self {
        FluentBundle {
            locale: FluentLocale::new(locales),
            store: Store::new(),
            escapers: Vec::new(),
            null_escaper: NullEscaper,
            functions: default_functions(),
            use_isolating: true,
            use_compiler: true,
            load_errors: Vec::new(),
            compiled: RwLock::new(None),
        }
    }

    pub fn set_use_isolating(&mut self, use_isolating: bool) {
        self.use_isolating = use_isolating;
    }

    pub fn set_use_compiler(&mut self, use_compiler: bool) {
        self.use_compiler = use_compiler;
        self.invalidate_compiled();
    }

    pub fn add_escaper(&mut self, escaper: Box<dyn Escaper>) {
        self.escapers.push(escaper);
        self.invalidate_compiled();
    }

    pub fn add_function(&mut self, name: impl Into<String>, spec: FunctionArgSpec, func: NativeFunction) {
        self.functions.insert(name.into(), RegisteredFunction { func, spec });
    }

    /// Parses `source` as a Fluent resource and merges it into the store.
    /// Duplicate ids lose to the first definition seen across every call
    /// to `add_messages`; parse failures become junk entries. Returns the
    /// errors recorded while merging this resource (also retained for
    /// `check_messages`).
    pub fn add_messages(&mut self, source: &str) -> Vec<FluentError> {
        let resource: &'static ast::Resource = Box::leak(Box::new(fluent_syntax::parse(source)));
        let mut errors = Vec::new();
        self.store.insert_resource(resource, &mut errors);
        if errors.iter().any(|e| matches!(e, FluentError::JunkFound(_))) {
            log::debug!("resource added with junk entries");
        }
        self.load_errors.extend(errors.clone());
        self.invalidate_compiled();
        errors
    }

    pub fn has_message(&self, id: &str) -> bool {
        self.store.message_ids().any(|m| m == id)
    }

    pub fn message_ids(&self) -> Vec<String> {
        self.store.message_ids().map(str::to_string).collect()
    }

    /// All issues recorded while loading resources, plus any compile-time
    /// reference issues the AOT compiler has found so far. Triggers a
    /// compile pass if none has run yet.
    pub fn check_messages(&self) -> Vec<FluentError> {
        let mut all = self.load_errors.clone();
        if self.use_compiler {
            self.ensure_compiled();
            if let Some(compiled) = self.compiled.read().unwrap().as_ref() {
                all.extend(compiled.errors.clone());
            }
        }
        all
    }

    /// Formats `id` (a message id, `id.attribute`, or `-term`) against
    /// `args`. Fails only when `id` names nothing at all in the store;
    /// every other problem is collected into the returned error list
    /// instead.
    pub fn format(
        &self,
        id: &str,
        args: Option<&HashMap<String, FluentArgument>>,
    ) -> Result<(FluentValue, Vec<FluentError>), LookupError> {
        let ctx = self.resolve_context();
        if self.use_compiler {
            self.ensure_compiled();
            let guard = self.compiled.read().unwrap();
            if let Some(compiled) = guard.as_ref() {
                if let Some(compiled_fn) = compiled.messages.get(id) {
                    return Ok(compiled_fn(&ctx, args));
                }
            }
        }
        resolve::resolve(&ctx, id, args)
    }

    fn resolve_context(&self) -> ResolveContext<'_> {
        ResolveContext {
            store: &self.store,
            locale: &self.locale,
            escapers: &self.escapers,
            null_escaper: &self.null_escaper,
            functions: &self.functions,
            use_isolating: self.use_isolating,
        }
    }

    fn invalidate_compiled(&mut self) {
        log::trace!("invalidating compiled message cache");
        *self.compiled.get_mut().unwrap() = None;
    }

    fn ensure_compiled(&self) {
        if self.compiled.read().unwrap().is_some() {
            return;
        }
        let mut guard = self.compiled.write().unwrap();
        if guard.is_none() {
            *guard = Some(compiler::compile(&self.store));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_simple_message() {
        let mut bundle = FluentBundle::new(&["en-US"]);
        bundle.add_messages("hello = Hello, world!\n");
        let (value, errors) = bundle.format("hello", None).unwrap();
        assert!(errors.is_empty());
        assert_eq!(value.to_string(), "Hello, world!");
    }

    #[test]
    fn interpreter_and_compiler_agree() {
        let mut bundle = FluentBundle::new(&["en-US"]);
        bundle.add_messages("brand = Firefox\ngreeting = Hello, { brand }!\n");

        bundle.set_use_compiler(true);
        let (compiled_value, compiled_errors) = bundle.format("greeting", None).unwrap();

        bundle.set_use_compiler(false);
        let (interpreted_value, interpreted_errors) = bundle.format("greeting", None).unwrap();

        assert_eq!(compiled_value, interpreted_value);
        assert_eq!(compiled_errors.len(), interpreted_errors.len());
    }

    #[test]
    fn reports_lookup_error_for_missing_id() {
        let bundle = FluentBundle::new(&["en-US"]);
        let err = bundle.format("nope", None).unwrap_err();
        assert_eq!(err, LookupError("nope".to_string()));
    }

    #[test]
    fn message_ids_reflects_store_order() {
        let mut bundle = FluentBundle::new(&["en-US"]);
        bundle.add_messages("a = A\nb = B\n");
        assert_eq!(bundle.message_ids(), vec!["a".to_string(), "b".to_string()]);
        assert!(bundle.has_message("a"));
        assert!(!bundle.has_message("c"));
    }

    #[test]
    fn check_messages_surfaces_dangling_reference() {
        let mut bundle = FluentBundle::new(&["en-US"]);
        bundle.add_messages("greeting = Welcome to { brand }\n");
        let issues = bundle.check_messages();
        assert!(issues
            .iter()
            .any(|e| matches!(e, FluentError::Reference(msg) if msg.contains("brand"))));
    }
}
