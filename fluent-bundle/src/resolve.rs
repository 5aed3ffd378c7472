//! The tree-walking interpreter. Turns a message or term id plus a set of
//! external arguments into a [`FluentValue`], accumulating every error
//! encountered along the way instead of stopping at the first one.
//!
//! Ported from `resolver.py`'s `ResolverEnvironment`/`handle()` dispatch:
//! every node kind gets its own resolve step, cyclic references are caught
//! by pointer identity on the `'static`-leaked `Pattern` nodes, and runaway
//! patterns are capped by [`MAX_PARTS`]/[`MAX_PART_LENGTH`].

use std::collections::{HashMap, HashSet};

use fluent_syntax::ast;

use crate::builtins::{args_match, RegisteredFunction};
use crate::entry::{attr_key, term_key, Store, StoreEntry};
use crate::errors::{FluentError, LookupError};
use crate::escaper::{escaper_for_message, escapers_compatible, Escaper};
use crate::locale::FluentLocale;
use crate::types::{handle_argument, numeric_to_native, FluentArgument, FluentNone, FluentNumber, FluentValue};

/// A pattern with more placeables than this aborts resolution entirely,
/// rather than risk quadratic blowup from a maliciously nested message.
pub const MAX_PARTS: usize = 1000;
/// A single resolved part longer than this is truncated.
pub const MAX_PART_LENGTH: usize = 2500;

const FSI: char = '\u{2068}';
const PDI: char = '\u{2069}';

pub struct ResolveContext<'a> {
    pub store: &'a Store,
    pub locale: &'a FluentLocale,
    pub escapers: &'a [Box<dyn Escaper>],
    pub null_escaper: &'a dyn Escaper,
    pub functions: &'a HashMap<String, RegisteredFunction>,
    pub use_isolating: bool,
}

struct Scope<'a> {
    store: &'a Store,
    locale: &'a FluentLocale,
    escapers: &'a [Box<dyn Escaper>],
    null_escaper: &'a dyn Escaper,
    functions: &'a HashMap<String, RegisteredFunction>,
    default_isolating: bool,
    args: Option<&'a HashMap<String, FluentArgument>>,
    errors: Vec<FluentError>,
    dirty: HashSet<*const ast::Pattern>,
    part_count: usize,
    current_escaper: &'a dyn Escaper,
}

impl<'a> Scope<'a> {
    fn use_isolating(&self) -> bool {
        self.current_escaper.use_isolating().unwrap_or(self.default_isolating)
    }

    /// Runs `f` with `current_escaper` temporarily swapped to `escaper`,
    /// restoring the previous one afterwards. Mirrors the `modified()`
    /// context manager in the Python resolver.
    fn with_escaper<T>(&mut self, escaper: &'a dyn Escaper, f: impl FnOnce(&mut Self) -> T) -> T {
        let previous = self.current_escaper;
        self.current_escaper = escaper;
        let result = f(self);
        self.current_escaper = previous;
        result
    }

    fn resolve_pattern(&mut self, pattern: &'static ast::Pattern) -> FluentValue {
        let key = pattern as *const ast::Pattern;
        if self.dirty.contains(&key) {
            self.errors.push(FluentError::CyclicReference);
            return FluentValue::None(FluentNone::new());
        }
        self.dirty.insert(key);
        let result = self.resolve_pattern_inner(pattern);
        self.dirty.remove(&key);
        result
    }

    fn resolve_pattern_inner(&mut self, pattern: &'static ast::Pattern) -> FluentValue {
        // Isolation only makes sense once there is more than one part to
        // tell apart; a lone placeable never gets FSI/PDI around it.
        let isolating = self.use_isolating() && pattern.elements.len() > 1;
        let mut parts: Vec<FluentValue> = Vec::with_capacity(pattern.elements.len());

        for element in &pattern.elements {
            self.part_count += 1;
            if self.part_count > MAX_PARTS {
                if self.part_count == MAX_PARTS + 1 {
                    self.errors.push(FluentError::ValueError(format!(
                        "too many parts in message (> {}), aborting",
                        MAX_PARTS
                    )));
                }
                break;
            }

            match element {
                // Text never goes through the length cap: it came from the
                // resource itself, not from an argument, so it can't be used
                // to blow up the output.
                ast::PatternElement::TextElement(text) => {
                    parts.push(self.current_escaper.mark_escaped(text));
                }
                ast::PatternElement::Placeable(p) => {
                    let value = self.resolve_placeable(p);
                    let part = self.fully_resolve(value);
                    if isolating {
                        parts.push(self.current_escaper.escape(&FSI.to_string()));
                    }
                    parts.push(self.truncate_value(part));
                    if isolating {
                        parts.push(self.current_escaper.escape(&PDI.to_string()));
                    }
                }
            }
        }
        self.current_escaper.string_join(parts)
    }

    /// The "fully-resolve" contract: a value already tagged as the current
    /// escaper's own output is used as-is, everything else is flattened to
    /// its string form and run through `escape`.
    fn fully_resolve(&self, value: FluentValue) -> FluentValue {
        match &value {
            FluentValue::Escaped { escaper, .. } if *escaper == self.current_escaper.name() => value,
            _ => self.current_escaper.escape(&value.to_string()),
        }
    }

    fn truncate_value(&mut self, value: FluentValue) -> FluentValue {
        match value {
            FluentValue::String(s) => FluentValue::String(truncate_part(&s)),
            FluentValue::Escaped { escaper, value } => FluentValue::Escaped {
                escaper,
                value: truncate_part(&value),
            },
            other => other,
        }
    }

    fn resolve_placeable(&mut self, placeable: &'static ast::Placeable) -> FluentValue {
        self.resolve_expression(&placeable.expression)
    }

    fn resolve_expression(&mut self, expr: &'static ast::Expression) -> FluentValue {
        match expr {
            ast::Expression::StringLiteral(s) => FluentValue::String(s.value.clone()),
            ast::Expression::NumberLiteral(n) => {
                FluentValue::Number(FluentNumber::new(numeric_to_native(&n.value)))
            }
            ast::Expression::MessageReference(r) => self.resolve_message_reference(r),
            ast::Expression::TermReference(r) => self.resolve_term_reference(r),
            ast::Expression::VariableReference(r) => self.resolve_variable_reference(r),
            ast::Expression::AttributeExpression(a) => self.resolve_attribute_expression(a),
            ast::Expression::VariantExpression(v) => self.resolve_variant_expression(v),
            ast::Expression::VariantList(vl) => self.resolve_variant_list_default(vl),
            ast::Expression::SelectExpression(s) => self.resolve_select_expression(s),
            ast::Expression::CallExpression(c) => self.resolve_call_expression(c),
            ast::Expression::Placeable(p) => self.resolve_placeable(p),
        }
    }

    fn resolve_message_reference(&mut self, r: &'static ast::MessageReference) -> FluentValue {
        match self.store.get(&r.id.name) {
            Some(StoreEntry::Message(m)) => match &m.value {
                Some(pattern) => self.resolve_in_message_scope(&r.id.name, pattern),
                None => {
                    self.errors.push(FluentError::ValueError(format!(
                        "message {} has no value",
                        r.id.name
                    )));
                    FluentValue::None(FluentNone::with_id(r.id.name.clone()))
                }
            },
            _ => {
                self.errors.push(FluentError::unknown_message(&r.id.name));
                FluentValue::None(FluentNone::with_id(r.id.name.clone()))
            }
        }
    }

    fn resolve_term_reference(&mut self, r: &'static ast::TermReference) -> FluentValue {
        let key = term_key(&r.id.name);
        match self.store.get(&key) {
            Some(StoreEntry::Term(t)) => self.resolve_in_message_scope(&key, &t.value),
            _ => {
                self.errors.push(FluentError::unknown_term(&r.id.name));
                FluentValue::None(FluentNone::with_id(format!("-{}", r.id.name)))
            }
        }
    }

    /// Resolves `pattern`, which belongs to the entry named `base_id`, under
    /// that entry's own escaper, checking compatibility with the caller's
    /// current escaper first.
    fn resolve_in_message_scope(&mut self, base_id: &str, pattern: &'static ast::Pattern) -> FluentValue {
        let target_escaper = escaper_for_message(self.escapers, base_id, self.null_escaper);
        if !escapers_compatible(self.current_escaper, target_escaper) {
            self.errors.push(FluentError::TypeError(format!(
                "escaper for {} is incompatible with the calling message's escaper",
                base_id
            )));
            return FluentValue::None(FluentNone::with_id(base_id.to_string()));
        }
        self.with_escaper(target_escaper, |scope| scope.resolve_pattern(pattern))
    }

    fn resolve_variable_reference(&mut self, r: &'static ast::VariableReference) -> FluentValue {
        match self.args.and_then(|args| args.get(&r.id.name)) {
            Some(arg) => {
                let escaper_name = self.current_escaper.name();
                handle_argument(arg, &r.id.name, escaper_name, &mut self.errors)
            }
            None => {
                self.errors.push(FluentError::unknown_external(&r.id.name));
                FluentValue::None(FluentNone::with_id(format!("${}", r.id.name)))
            }
        }
    }

    fn resolve_attribute_expression(&mut self, a: &'static ast::AttributeExpression) -> FluentValue {
        let (base_id, display_id) = match &a.reference {
            ast::AttributeReferenceTarget::Message(m) => (m.id.name.clone(), m.id.name.clone()),
            ast::AttributeReferenceTarget::Term(t) => (term_key(&t.id.name), format!("-{}", t.id.name)),
        };
        let qualified = attr_key(&base_id, &a.name.name);
        match self.store.get(&qualified) {
            Some(StoreEntry::Attribute { pattern }) => self.resolve_in_message_scope(&base_id, *pattern),
            _ => {
                self.errors
                    .push(FluentError::unknown_attribute(&format!("{}.{}", display_id, a.name.name)));
                FluentValue::None(FluentNone::with_id(format!("{}.{}", display_id, a.name.name)))
            }
        }
    }

    /// `-term[key]`: the legacy "term variants" feature. Only meaningful
    /// when the term's whole value is a single placeable holding a
    /// `VariantList`; targeting a term that isn't shaped that way is a
    /// `TypeError`, not a fallback to the term's plain value.
    fn resolve_variant_expression(&mut self, v: &'static ast::VariantExpression) -> FluentValue {
        let key = term_key(&v.reference.id.name);
        let term = match self.store.get(&key) {
            Some(StoreEntry::Term(t)) => *t,
            _ => {
                self.errors.push(FluentError::unknown_term(&v.reference.id.name));
                return FluentValue::None(FluentNone::with_id(format!("-{}", v.reference.id.name)));
            }
        };
        let variant_list = match single_variant_list(&term.value) {
            Some(vl) => vl,
            None => {
                self.errors.push(FluentError::TypeError(format!(
                    "variant access to -{} requires a term whose value is a variant list",
                    v.reference.id.name
                )));
                return FluentValue::None(FluentNone::with_id(format!("-{}", v.reference.id.name)));
            }
        };
        if let Some(variant) = find_variant_by_key(&variant_list.variants, &v.key) {
            if let VariantValueRef::Pattern(p) = variant_value_ref(variant) {
                return self.resolve_in_message_scope(&key, p);
            }
        }
        self.errors.push(FluentError::unknown_variant(v.key.as_str()));
        self.resolve_in_message_scope(&key, &term.value)
    }

    fn resolve_variant_list_default(&mut self, vl: &'static ast::VariantList) -> FluentValue {
        match default_variant(&vl.variants) {
            Some(variant) => match variant_value_ref(variant) {
                VariantValueRef::Pattern(p) => self.resolve_pattern(p),
                VariantValueRef::VariantList(nested) => self.resolve_variant_list_default(nested),
            },
            None => {
                self.errors
                    .push(FluentError::ValueError("variant list has no default".to_string()));
                FluentValue::None(FluentNone::new())
            }
        }
    }

    fn resolve_select_expression(&mut self, s: &'static ast::SelectExpression) -> FluentValue {
        let selector = self.resolve_expression(&s.selector);
        let variant = match find_matching_variant(&selector, &s.variants, self.locale) {
            Some(v) => v,
            None => match default_variant(&s.variants) {
                Some(v) => v,
                None => {
                    self.errors
                        .push(FluentError::ValueError("select expression has no default variant".to_string()));
                    return FluentValue::None(FluentNone::new());
                }
            },
        };
        match variant_value_ref(variant) {
            VariantValueRef::Pattern(p) => self.resolve_pattern(p),
            VariantValueRef::VariantList(vl) => self.resolve_variant_list_default(vl),
        }
    }

    fn resolve_call_expression(&mut self, c: &'static ast::CallExpression) -> FluentValue {
        let name = &c.callee.name;
        let registered = match self.functions.get(name) {
            Some(f) => f,
            None => {
                self.errors.push(FluentError::unknown_function(name));
                return FluentValue::None(FluentNone::with_id(format!("{}()", name)));
            }
        };

        let positional: Vec<FluentValue> = c
            .positional
            .iter()
            .map(|e| self.resolve_expression(e))
            .collect();
        let mut named = HashMap::new();
        for arg in &c.named {
            named.insert(arg.name.name.clone(), self.resolve_expression(&arg.value));
        }

        if let Err(err) = args_match(name, &positional, &named, &registered.spec) {
            self.errors.push(err);
            return FluentValue::None(FluentNone::with_id(format!("{}()", name)));
        }

        (registered.func)(&positional, &named)
    }
}

fn truncate_part(text: &str) -> String {
    if text.chars().count() <= MAX_PART_LENGTH {
        text.to_string()
    } else {
        text.chars().take(MAX_PART_LENGTH).collect()
    }
}

enum VariantValueRef<'a> {
    Pattern(&'static ast::Pattern),
    VariantList(&'a ast::VariantList),
}

fn variant_value_ref(variant: &'static ast::Variant) -> VariantValueRef<'static> {
    match &variant.value {
        ast::VariantValue::Pattern(p) => VariantValueRef::Pattern(p),
        ast::VariantValue::VariantList(vl) => VariantValueRef::VariantList(vl),
    }
}

fn single_variant_list(pattern: &'static ast::Pattern) -> Option<&'static ast::VariantList> {
    if pattern.elements.len() != 1 {
        return None;
    }
    match &pattern.elements[0] {
        ast::PatternElement::Placeable(p) => match p.expression.as_ref() {
            ast::Expression::VariantList(vl) => Some(vl),
            _ => None,
        },
        _ => None,
    }
}

fn default_variant(variants: &'static [ast::Variant]) -> Option<&'static ast::Variant> {
    variants.iter().find(|v| v.default).or_else(|| variants.last())
}

fn find_variant_by_key(variants: &'static [ast::Variant], key: &ast::VariantKey) -> Option<&'static ast::Variant> {
    variants.iter().find(|v| v.key.as_str() == key.as_str())
}

fn find_matching_variant(
    selector: &FluentValue,
    variants: &'static [ast::Variant],
    locale: &FluentLocale,
) -> Option<&'static ast::Variant> {
    variants.iter().find(|v| key_matches(selector, &v.key, locale))
}

fn key_matches(selector: &FluentValue, key: &ast::VariantKey, locale: &FluentLocale) -> bool {
    match key {
        ast::VariantKey::NumberLiteral(n) => selector
            .as_number()
            .map(|v| v == numeric_to_native(&n.value))
            .unwrap_or(false),
        ast::VariantKey::Identifier(id) => match selector {
            FluentValue::String(s) => s == &id.name,
            FluentValue::Number(n) => locale.plural_category(n.value) == id.name,
            _ => false,
        },
    }
}

/// Resolves `id` (a message id, optionally qualified with `.attribute`, or
/// a term id prefixed with `-`) against `ctx`, under the given arguments.
/// Returns the accumulated non-fatal errors alongside the value; fails only
/// when `id` names nothing in the store at all.
pub fn resolve<'a>(
    ctx: &ResolveContext<'a>,
    id: &str,
    args: Option<&'a HashMap<String, FluentArgument>>,
) -> Result<(FluentValue, Vec<FluentError>), LookupError> {
    let entry = ctx.store.get(id).ok_or_else(|| LookupError(id.to_string()))?;
    let base_id = id.split('.').next().unwrap_or(id);
    let escaper = escaper_for_message(ctx.escapers, base_id, ctx.null_escaper);

    let mut scope = Scope {
        store: ctx.store,
        locale: ctx.locale,
        escapers: ctx.escapers,
        null_escaper: ctx.null_escaper,
        functions: ctx.functions,
        default_isolating: ctx.use_isolating,
        args,
        errors: Vec::new(),
        dirty: HashSet::new(),
        part_count: 0,
        current_escaper: escaper,
    };

    let value = match entry {
        StoreEntry::Message(m) => match &m.value {
            Some(pattern) => scope.resolve_pattern(pattern),
            None => {
                scope
                    .errors
                    .push(FluentError::ValueError(format!("message {} has no value", id)));
                FluentValue::None(FluentNone::with_id(id.to_string()))
            }
        },
        StoreEntry::Term(t) => scope.resolve_pattern(&t.value),
        StoreEntry::Attribute { pattern } => scope.resolve_pattern(*pattern),
    };

    Ok((value, scope.errors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::default_functions;
    use crate::escaper::NullEscaper;

    fn make_ctx<'a>(
        store: &'a Store,
        locale: &'a FluentLocale,
        functions: &'a HashMap<String, RegisteredFunction>,
        null_escaper: &'a NullEscaper,
    ) -> ResolveContext<'a> {
        ResolveContext {
            store,
            locale,
            escapers: &[],
            null_escaper,
            functions,
            use_isolating: false,
        }
    }

    fn build_store(source: &'static str) -> Store {
        let resource: &'static ast::Resource = Box::leak(Box::new(fluent_syntax::parse(source)));
        let mut store = Store::new();
        let mut errors = Vec::new();
        store.insert_resource(resource, &mut errors);
        assert!(errors.is_empty(), "unexpected parse errors: {:?}", errors);
        store
    }

    #[test]
    fn resolves_plain_text() {
        let store = build_store("hello = Hello, world!\n");
        let locale = FluentLocale::new(&["en"]);
        let functions = default_functions();
        let null_escaper = NullEscaper;
        let ctx = make_ctx(&store, &locale, &functions, &null_escaper);
        let (value, errors) = resolve(&ctx, "hello", None).unwrap();
        assert!(errors.is_empty());
        assert_eq!(value.to_string(), "Hello, world!");
    }

    #[test]
    fn resolves_message_reference() {
        let store = build_store("brand = Firefox\ngreeting = Welcome to { brand }\n");
        let locale = FluentLocale::new(&["en"]);
        let functions = default_functions();
        let null_escaper = NullEscaper;
        let ctx = make_ctx(&store, &locale, &functions, &null_escaper);
        let (value, errors) = resolve(&ctx, "greeting", None).unwrap();
        assert!(errors.is_empty());
        assert_eq!(value.to_string(), "Welcome to Firefox");
    }

    #[test]
    fn reports_unknown_message_reference() {
        let store = build_store("greeting = Welcome to { brand }\n");
        let locale = FluentLocale::new(&["en"]);
        let functions = default_functions();
        let null_escaper = NullEscaper;
        let ctx = make_ctx(&store, &locale, &functions, &null_escaper);
        let (value, errors) = resolve(&ctx, "greeting", None).unwrap();
        assert_eq!(value.to_string(), "Welcome to brand");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn selects_plural_variant() {
        let store = build_store(
            "emails = { $count ->\n    [one] One new email\n   *[other] { $count } new emails\n  }\n",
        );
        let locale = FluentLocale::new(&["en"]);
        let functions = default_functions();
        let null_escaper = NullEscaper;
        let ctx = make_ctx(&store, &locale, &functions, &null_escaper);
        let mut args = HashMap::new();
        args.insert("count".to_string(), FluentArgument::Number(1.0));
        let (value, errors) = resolve(&ctx, "emails", Some(&args)).unwrap();
        assert!(errors.is_empty());
        assert_eq!(value.to_string(), "One new email");
    }

    #[test]
    fn detects_cyclic_reference() {
        let store = build_store("a = { b }\nb = { a }\n");
        let locale = FluentLocale::new(&["en"]);
        let functions = default_functions();
        let null_escaper = NullEscaper;
        let ctx = make_ctx(&store, &locale, &functions, &null_escaper);
        let (value, errors) = resolve(&ctx, "a", None).unwrap();
        // The cyclic reference resolves to a bare `FluentNone`, but it is
        // still reached through a placeable, so it gets fully resolved to
        // its "???" display form like any other value would.
        assert_eq!(value.to_string(), "???");
        assert!(errors.iter().any(|e| matches!(e, FluentError::CyclicReference)));
    }

    #[test]
    fn lookup_error_for_missing_id() {
        let store = build_store("a = hi\n");
        let locale = FluentLocale::new(&["en"]);
        let functions = default_functions();
        let null_escaper = NullEscaper;
        let ctx = make_ctx(&store, &locale, &functions, &null_escaper);
        let err = resolve(&ctx, "nope", None).unwrap_err();
        assert_eq!(err, LookupError("nope".to_string()));
    }

    /// Escapes `&`, `<` and `>`, and selects every message ending in
    /// `-html`, matching the fixture in `tests/format/test_escapers.py`.
    #[derive(Debug)]
    struct HtmlEscaper;

    impl Escaper for HtmlEscaper {
        fn name(&self) -> &'static str {
            "html"
        }

        fn select(&self, message_id: &str) -> bool {
            message_id.ends_with("-html")
        }

        fn mark_escaped(&self, text: &str) -> FluentValue {
            FluentValue::Escaped {
                escaper: "html",
                value: text.to_string(),
            }
        }

        fn escape(&self, text: &str) -> FluentValue {
            let escaped = text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;");
            FluentValue::Escaped {
                escaper: "html",
                value: escaped,
            }
        }

        fn string_join(&self, parts: Vec<FluentValue>) -> FluentValue {
            let mut out = String::new();
            for part in parts {
                out.push_str(&part.to_string());
            }
            FluentValue::Escaped {
                escaper: "html",
                value: out,
            }
        }
    }

    fn make_ctx_with_escapers<'a>(
        store: &'a Store,
        locale: &'a FluentLocale,
        functions: &'a HashMap<String, RegisteredFunction>,
        null_escaper: &'a NullEscaper,
        escapers: &'a [Box<dyn Escaper>],
    ) -> ResolveContext<'a> {
        ResolveContext {
            store,
            locale,
            escapers,
            null_escaper,
            functions,
            use_isolating: false,
        }
    }

    #[test]
    fn html_escaper_escapes_plain_string_arguments() {
        let store = build_store("arg-html = { $arg }\n");
        let locale = FluentLocale::new(&["en"]);
        let functions = default_functions();
        let null_escaper = NullEscaper;
        let escapers: Vec<Box<dyn Escaper>> = vec![Box::new(HtmlEscaper)];
        let ctx = make_ctx_with_escapers(&store, &locale, &functions, &null_escaper, &escapers);
        let mut args = HashMap::new();
        args.insert("arg".to_string(), FluentArgument::from("Jack & Jill"));
        let (value, errors) = resolve(&ctx, "arg-html", Some(&args)).unwrap();
        assert!(errors.is_empty());
        assert_eq!(value.to_string(), "Jack &amp; Jill");
    }

    #[test]
    fn html_escaper_does_not_double_escape_resource_text() {
        let store = build_store("simple-html = This is <b>great</b>.\n");
        let locale = FluentLocale::new(&["en"]);
        let functions = default_functions();
        let null_escaper = NullEscaper;
        let escapers: Vec<Box<dyn Escaper>> = vec![Box::new(HtmlEscaper)];
        let ctx = make_ctx_with_escapers(&store, &locale, &functions, &null_escaper, &escapers);
        let (value, errors) = resolve(&ctx, "simple-html", None).unwrap();
        assert!(errors.is_empty());
        assert_eq!(value.to_string(), "This is <b>great</b>.");
    }

    #[test]
    fn messages_without_a_selected_escaper_are_unaffected() {
        let store = build_store("not-html-message = x < y\n");
        let locale = FluentLocale::new(&["en"]);
        let functions = default_functions();
        let null_escaper = NullEscaper;
        let escapers: Vec<Box<dyn Escaper>> = vec![Box::new(HtmlEscaper)];
        let ctx = make_ctx_with_escapers(&store, &locale, &functions, &null_escaper, &escapers);
        let (value, errors) = resolve(&ctx, "not-html-message", None).unwrap();
        assert!(errors.is_empty());
        assert_eq!(value.to_string(), "x < y");
    }

    #[test]
    fn single_placeable_pattern_is_truncated_like_any_other() {
        let store = build_store("big = { $huge }\n");
        let locale = FluentLocale::new(&["en"]);
        let functions = default_functions();
        let null_escaper = NullEscaper;
        let ctx = make_ctx(&store, &locale, &functions, &null_escaper);
        let mut args = HashMap::new();
        let huge: String = std::iter::repeat('x').take(MAX_PART_LENGTH + 50).collect();
        args.insert("huge".to_string(), FluentArgument::from(huge));
        let (value, errors) = resolve(&ctx, "big", Some(&args)).unwrap();
        assert!(errors.is_empty());
        assert_eq!(value.to_string().chars().count(), MAX_PART_LENGTH);
    }

    #[test]
    fn single_placeable_pattern_counts_toward_max_parts() {
        let store = build_store("one = { $a }\n");
        let locale = FluentLocale::new(&["en"]);
        let functions = default_functions();
        let null_escaper = NullEscaper;
        let ctx = make_ctx(&store, &locale, &functions, &null_escaper);
        let mut args = HashMap::new();
        args.insert("a".to_string(), FluentArgument::from("hi"));
        let (value, errors) = resolve(&ctx, "one", Some(&args)).unwrap();
        assert!(errors.is_empty());
        assert_eq!(value.to_string(), "hi");
    }

    #[test]
    fn variant_expression_on_non_variant_term_is_a_type_error() {
        let store = build_store("-brand = Firefox\nref = { -brand[foo] }\n");
        let locale = FluentLocale::new(&["en"]);
        let functions = default_functions();
        let null_escaper = NullEscaper;
        let ctx = make_ctx(&store, &locale, &functions, &null_escaper);
        let (value, errors) = resolve(&ctx, "ref", None).unwrap();
        assert_eq!(value.to_string(), "-brand");
        assert!(errors.iter().any(|e| matches!(e, FluentError::TypeError(_))));
    }
}
