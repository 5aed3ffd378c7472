//! The per-context store: message-id/term-id → AST node, with
//! attribute-qualified ids flattened in for O(1) lookup.
//!
//! Resources are parsed once and then kept alive for the lifetime of the
//! process (see the module doc on `bundle`), so every reference held here
//! is `'static` and the store never needs a self-referential-struct crate.

use std::collections::HashMap;

use fluent_syntax::ast;

use crate::errors::FluentError;

pub fn term_key(name: &str) -> String {
    format!("-{}", name)
}

pub fn attr_key(base_key: &str, attr: &str) -> String {
    format!("{}.{}", base_key, attr)
}

#[derive(Debug, Clone, Copy)]
pub enum StoreEntry {
    Message(&'static ast::Message),
    Term(&'static ast::Term),
    Attribute {
        pattern: &'static ast::Pattern,
    },
}

#[derive(Default)]
pub struct Store {
    lookup: HashMap<String, StoreEntry>,
    message_order: Vec<String>,
}

impl Store {
    pub fn new() -> Self {
        Store::default()
    }

    pub fn get(&self, id: &str) -> Option<&StoreEntry> {
        self.lookup.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lookup.contains_key(id)
    }

    pub fn message_ids(&self) -> impl Iterator<Item = &str> {
        self.message_order.iter().map(|s| s.as_str())
    }

    /// Inserts one already-parsed, `'static`-leaked resource into the
    /// store. Duplicate ids are recorded as errors and the first
    /// definition wins; junk entries produce one `FluentJunkFound` each.
    pub fn insert_resource(&mut self, resource: &'static ast::Resource, errors: &mut Vec<FluentError>) {
        for entry in &resource.body {
            match entry {
                ast::ResourceEntry::Entry(ast::Entry::Message(m)) => {
                    self.insert_message(m, errors)
                }
                ast::ResourceEntry::Entry(ast::Entry::Term(t)) => self.insert_term(t, errors),
                ast::ResourceEntry::Entry(_) => {
                    // Comments are inert at resolution time.
                }
                ast::ResourceEntry::Junk(junk) => {
                    errors.push(FluentError::JunkFound(
                        junk.annotations.iter().map(|a| a.to_string()).collect(),
                    ));
                }
            }
        }
    }

    fn insert_message(&mut self, message: &'static ast::Message, errors: &mut Vec<FluentError>) {
        let id = message.id.name.clone();
        if self.lookup.contains_key(&id) {
            errors.push(FluentError::DuplicateMessageId {
                kind: "message",
                id,
            });
            return;
        }
        for attr in &message.attributes {
            let qualified = attr_key(&id, &attr.id.name);
            self.lookup
                .entry(qualified)
                .or_insert(StoreEntry::Attribute {
                    pattern: &attr.value,
                });
        }
        self.message_order.push(id.clone());
        self.lookup.insert(id, StoreEntry::Message(message));
    }

    fn insert_term(&mut self, term: &'static ast::Term, errors: &mut Vec<FluentError>) {
        let id = term_key(&term.id.name);
        if self.lookup.contains_key(&id) {
            errors.push(FluentError::DuplicateMessageId { kind: "term", id });
            return;
        }
        for attr in &term.attributes {
            let qualified = attr_key(&id, &attr.id.name);
            self.lookup
                .entry(qualified)
                .or_insert(StoreEntry::Attribute {
                    pattern: &attr.value,
                });
        }
        self.lookup.insert(id, StoreEntry::Term(term));
    }
}
