//! The Fluent AST.
//!
//! Every node here is produced once, by [`crate::parser::parse`], and is
//! immutable afterwards. `fluent-bundle` never mutates these nodes; it only
//! borrows them from the [`Resource`] that owns them.

use crate::errors::ParserError;

/// A fully parsed `.ftl` file: a flat, ordered sequence of top level items.
#[derive(Debug, PartialEq)]
pub struct Resource {
    pub body: Vec<ResourceEntry>,
}

#[derive(Debug, PartialEq)]
pub enum ResourceEntry {
    Entry(Entry),
    Junk(Junk),
}

/// A top-level item that the parser could not make sense of. Carries the raw
/// source span and the annotations explaining why, so `check_messages` can
/// surface a `FluentJunkFound` for it.
#[derive(Debug, PartialEq)]
pub struct Junk {
    pub content: String,
    pub annotations: Vec<ParserError>,
}

#[derive(Debug, PartialEq)]
pub enum Entry {
    Message(Message),
    Term(Term),
    Comment(Comment),
    GroupComment(Comment),
    ResourceComment(Comment),
}

#[derive(Debug, PartialEq)]
pub struct Comment {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }
}

#[derive(Debug, PartialEq)]
pub struct Message {
    pub id: Identifier,
    pub value: Option<Pattern>,
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, PartialEq)]
pub struct Term {
    pub id: Identifier,
    pub value: Pattern,
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, PartialEq)]
pub struct Attribute {
    pub id: Identifier,
    pub value: Pattern,
}

#[derive(Debug, PartialEq)]
pub struct Pattern {
    pub elements: Vec<PatternElement>,
}

#[derive(Debug, PartialEq)]
pub enum PatternElement {
    TextElement(String),
    Placeable(Placeable),
}

#[derive(Debug, PartialEq)]
pub struct Placeable {
    pub expression: Box<Expression>,
}

#[derive(Debug, PartialEq)]
pub enum Expression {
    StringLiteral(StringLiteral),
    NumberLiteral(NumberLiteral),
    MessageReference(MessageReference),
    TermReference(TermReference),
    VariableReference(VariableReference),
    AttributeExpression(AttributeExpression),
    VariantExpression(VariantExpression),
    VariantList(VariantList),
    SelectExpression(SelectExpression),
    CallExpression(CallExpression),
    Placeable(Placeable),
}

#[derive(Debug, PartialEq)]
pub struct StringLiteral {
    pub value: String,
}

/// A numeric string matching `-?[0-9]+('.'[0-9]+)?`, kept as text until the
/// resolver parses it into a native `i64`/`f64` (see `types::numeric_to_native`).
#[derive(Debug, Clone, PartialEq)]
pub struct NumberLiteral {
    pub value: String,
}

#[derive(Debug, PartialEq)]
pub struct MessageReference {
    pub id: Identifier,
}

#[derive(Debug, PartialEq)]
pub struct TermReference {
    pub id: Identifier,
}

#[derive(Debug, PartialEq)]
pub struct VariableReference {
    pub id: Identifier,
}

#[derive(Debug, PartialEq)]
pub struct AttributeExpression {
    pub reference: AttributeReferenceTarget,
    pub name: Identifier,
}

/// `AttributeExpression` can qualify either a message or a term reference.
#[derive(Debug, PartialEq)]
pub enum AttributeReferenceTarget {
    Message(MessageReference),
    Term(TermReference),
}

#[derive(Debug, PartialEq)]
pub struct VariantExpression {
    pub reference: TermReference,
    pub key: VariantKey,
}

#[derive(Debug, PartialEq)]
pub struct VariantList {
    pub variants: Vec<Variant>,
}

#[derive(Debug, PartialEq)]
pub struct SelectExpression {
    pub selector: Box<Expression>,
    pub variants: Vec<Variant>,
}

#[derive(Debug, PartialEq)]
pub struct Variant {
    pub key: VariantKey,
    pub value: VariantValue,
    pub default: bool,
}

#[derive(Debug, PartialEq)]
pub enum VariantValue {
    Pattern(Pattern),
    VariantList(VariantList),
}

#[derive(Debug, Clone, PartialEq)]
pub enum VariantKey {
    Identifier(Identifier),
    NumberLiteral(NumberLiteral),
}

impl VariantKey {
    pub fn as_str(&self) -> &str {
        match self {
            VariantKey::Identifier(id) => &id.name,
            VariantKey::NumberLiteral(n) => &n.value,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct CallExpression {
    pub callee: Identifier,
    pub positional: Vec<Expression>,
    pub named: Vec<NamedArgument>,
}

#[derive(Debug, PartialEq)]
pub struct NamedArgument {
    pub name: Identifier,
    pub value: Expression,
}

impl Resource {
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.body.iter().filter_map(|entry| match entry {
            ResourceEntry::Entry(Entry::Message(m)) => Some(m),
            _ => None,
        })
    }

    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.body.iter().filter_map(|entry| match entry {
            ResourceEntry::Entry(Entry::Term(t)) => Some(t),
            _ => None,
        })
    }

    pub fn junk(&self) -> impl Iterator<Item = &Junk> {
        self.body.iter().filter_map(|entry| match entry {
            ResourceEntry::Junk(j) => Some(j),
            _ => None,
        })
    }
}
