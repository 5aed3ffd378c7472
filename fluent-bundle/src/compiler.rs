//! The ahead-of-time form: one callable per message id, built once when
//! the store changes and reused across `format` calls.
//!
//! A "compiled" message here is a boxed closure capturing just the
//! message id; evaluating it still walks the same AST through
//! [`crate::resolve`], so the interpreter and the compiler share one
//! implementation of Fluent's semantics and cannot drift apart. What the
//! compile step buys is eager validation: every message's direct,
//! first-level references (the ones visible without resolving anything)
//! are checked against the store up front, so a dangling reference is
//! reported by `check_messages` before any `format` call ever sees it,
//! instead of only showing up the first time that branch of a pattern is
//! exercised.

use std::collections::HashMap;

use fluent_syntax::ast;

use crate::entry::{attr_key, term_key, Store, StoreEntry};
use crate::errors::FluentError;
use crate::resolve::{resolve, ResolveContext};
use crate::types::{FluentArgument, FluentValue};

pub type CompiledMessage =
    Box<dyn Fn(&ResolveContext<'_>, Option<&HashMap<String, FluentArgument>>) -> (FluentValue, Vec<FluentError>) + Send + Sync>;

pub struct CompiledBundle {
    pub messages: HashMap<String, CompiledMessage>,
    pub errors: Vec<FluentError>,
}

/// Builds one compiled entry per message id in `store`, plus a flat list
/// of compile-time issues (duplicate/junk issues already live in the
/// store's own load-time errors; this only adds reference-validation
/// issues that are new at compile time).
pub fn compile(store: &Store) -> CompiledBundle {
    let mut messages = HashMap::new();
    let mut errors = Vec::new();

    for id in store.message_ids() {
        let id = id.to_string();
        if let Some(StoreEntry::Message(m)) = store.get(&id) {
            if let Some(pattern) = &m.value {
                errors.extend(validate_references(store, pattern));
            }
            for attr in &m.attributes {
                errors.extend(validate_references(store, &attr.value));
            }
        }
        messages.insert(id.clone(), make_compiled(id));
    }

    CompiledBundle { messages, errors }
}

fn make_compiled(id: String) -> CompiledMessage {
    Box::new(move |ctx, args| {
        resolve(ctx, &id, args).expect("compiled id was read from the store that produced it")
    })
}

/// Walks `pattern`'s immediate placeables (not the bodies of messages or
/// terms they reference) looking for message/term/attribute ids that are
/// absent from `store`.
fn validate_references(store: &Store, pattern: &ast::Pattern) -> Vec<FluentError> {
    let mut found = Vec::new();
    for element in &pattern.elements {
        if let ast::PatternElement::Placeable(p) = element {
            validate_expression(store, &p.expression, &mut found);
        }
    }
    found
}

fn validate_expression(store: &Store, expr: &ast::Expression, out: &mut Vec<FluentError>) {
    match expr {
        ast::Expression::MessageReference(r) => {
            if !store.contains(&r.id.name) {
                out.push(FluentError::unknown_message(&r.id.name));
            }
        }
        ast::Expression::TermReference(r) => {
            if !store.contains(&term_key(&r.id.name)) {
                out.push(FluentError::unknown_term(&r.id.name));
            }
        }
        ast::Expression::AttributeExpression(a) => {
            let (base, name) = match &a.reference {
                ast::AttributeReferenceTarget::Message(m) => (m.id.name.clone(), a.name.name.clone()),
                ast::AttributeReferenceTarget::Term(t) => (term_key(&t.id.name), a.name.name.clone()),
            };
            if !store.contains(&attr_key(&base, &name)) {
                out.push(FluentError::unknown_attribute(&format!("{}.{}", base, name)));
            }
        }
        ast::Expression::SelectExpression(s) => {
            validate_expression(store, &s.selector, out);
            for variant in &s.variants {
                if let ast::VariantValue::Pattern(p) = &variant.value {
                    out.extend(validate_references(store, p));
                }
            }
        }
        ast::Expression::CallExpression(c) => {
            for arg in &c.positional {
                validate_expression(store, arg, out);
            }
            for named in &c.named {
                validate_expression(store, &named.value, out);
            }
        }
        ast::Expression::Placeable(p) => validate_expression(store, &p.expression, out),
        ast::Expression::StringLiteral(_)
        | ast::Expression::NumberLiteral(_)
        | ast::Expression::VariableReference(_)
        | ast::Expression::VariantExpression(_)
        | ast::Expression::VariantList(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_store(source: &'static str) -> Store {
        let resource: &'static ast::Resource = Box::leak(Box::new(fluent_syntax::parse(source)));
        let mut store = Store::new();
        let mut errors = Vec::new();
        store.insert_resource(resource, &mut errors);
        store
    }

    #[test]
    fn flags_dangling_reference_at_compile_time() {
        let store = build_store("greeting = Welcome to { brand }\n");
        let compiled = compile(&store);
        assert_eq!(compiled.errors.len(), 1);
        assert!(compiled.messages.contains_key("greeting"));
    }

    #[test]
    fn clean_store_compiles_without_errors() {
        let store = build_store("brand = Firefox\ngreeting = Welcome to { brand }\n");
        let compiled = compile(&store);
        assert!(compiled.errors.is_empty());
        assert_eq!(compiled.messages.len(), 2);
    }
}
