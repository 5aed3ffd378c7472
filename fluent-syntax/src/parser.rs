//! A recursive-descent parser for the Fluent Translation List format.
//!
//! The parser never fails outright: malformed top-level entries are
//! collected as [`crate::ast::Junk`] with an attached [`ParserError`] so a
//! caller can report ids that did parse while surfacing the rest as
//! non-fatal issues, mirroring how Fluent implementations are expected to
//! behave in the presence of partially-broken resources.
//!
//! Known simplifications versus the full Fluent grammar: parameterized term
//! references (`-brand(case: "genitive")`) are not supported, only
//! `-brand`/`-brand.attr`/`-brand[variant]`; comment blocks are grouped by
//! the marker level (`#`, `##`, `###`) of their first line only.

use crate::ast::*;
use crate::errors::ParserError;

pub fn parse(source: &str) -> Resource {
    let blocks = split_blocks(source);
    let mut body = Vec::with_capacity(blocks.len());
    for block in blocks {
        if block[0].trim_start().starts_with('#') {
            body.push(ResourceEntry::Entry(parse_comment(&block)));
            continue;
        }
        match parse_entry(&block) {
            Ok(entry) => body.push(ResourceEntry::Entry(entry)),
            Err(e) => body.push(ResourceEntry::Junk(Junk {
                content: block.join("\n"),
                annotations: vec![e],
            })),
        }
    }
    Resource { body }
}

fn starts_with_whitespace(line: &str) -> bool {
    matches!(line.chars().next(), Some(' ') | Some('\t'))
}

fn split_blocks(source: &str) -> Vec<Vec<&str>> {
    let lines: Vec<&str> = source.lines().collect();
    let mut blocks = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        while i < lines.len() && lines[i].trim().is_empty() {
            i += 1;
        }
        if i >= lines.len() {
            break;
        }
        if lines[i].trim_start().starts_with('#') {
            let mut block = vec![lines[i]];
            i += 1;
            while i < lines.len() && lines[i].trim_start().starts_with('#') {
                block.push(lines[i]);
                i += 1;
            }
            blocks.push(block);
            continue;
        }
        let mut block = vec![lines[i]];
        i += 1;
        while i < lines.len() {
            let line = lines[i];
            if line.trim().is_empty() {
                let mut j = i;
                while j < lines.len() && lines[j].trim().is_empty() {
                    j += 1;
                }
                if j < lines.len()
                    && starts_with_whitespace(lines[j])
                    && !lines[j].trim_start().starts_with('#')
                {
                    block.push(line);
                    i += 1;
                    continue;
                }
                break;
            } else if starts_with_whitespace(line) {
                block.push(line);
                i += 1;
            } else {
                break;
            }
        }
        blocks.push(block);
    }
    blocks
}

fn parse_comment(lines: &[&str]) -> Entry {
    let first = lines[0].trim_start();
    let level = first.chars().take_while(|&c| c == '#').count().min(3);
    let content = lines
        .iter()
        .map(|l| {
            let t = l.trim_start();
            let stripped = &t[level.min(t.len())..];
            stripped.strip_prefix(' ').unwrap_or(stripped)
        })
        .collect::<Vec<_>>()
        .join("\n");
    match level {
        3 => Entry::ResourceComment(Comment { content }),
        2 => Entry::GroupComment(Comment { content }),
        _ => Entry::Comment(Comment { content }),
    }
}

fn is_attribute_start(trimmed: &str) -> bool {
    if !trimmed.starts_with('.') {
        return false;
    }
    let rest = &trimmed[1..];
    let ident_end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        .unwrap_or(rest.len());
    if ident_end == 0 {
        return false;
    }
    rest[ident_end..].trim_start().starts_with('=')
}

fn take_identifier(s: &str) -> Result<(String, &str), ParserError> {
    let mut end = 0;
    for (idx, c) in s.char_indices() {
        if idx == 0 {
            if !c.is_ascii_alphabetic() {
                return Err(ParserError::InvalidKey);
            }
            end = idx + c.len_utf8();
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            end = idx + c.len_utf8();
        } else {
            break;
        }
    }
    if end == 0 {
        return Err(ParserError::InvalidKey);
    }
    Ok((s[..end].to_string(), &s[end..]))
}

fn validate_identifier(s: &str) -> Result<(), ParserError> {
    let (_, rest) = take_identifier(s)?;
    if !rest.is_empty() {
        return Err(ParserError::InvalidKey);
    }
    Ok(())
}

fn parse_entry(lines: &[&str]) -> Result<Entry, ParserError> {
    let first = lines[0];
    let is_term = first.starts_with('-');
    let body = if is_term { &first[1..] } else { first };
    let (id_name, after_id) = take_identifier(body)?;
    let after_id = after_id.trim_start_matches(' ');
    let after_eq = after_id
        .strip_prefix('=')
        .ok_or_else(|| ParserError::ExpectedToken("=".to_string()))?;
    let first_frag = after_eq.trim_start_matches(' ').to_string();

    let mut pattern_lines = vec![first_frag];
    let mut i = 1;
    while i < lines.len() {
        let trimmed = lines[i].trim_start();
        if is_attribute_start(trimmed) {
            break;
        }
        pattern_lines.push(lines[i].to_string());
        i += 1;
    }
    let value = build_pattern(&pattern_lines)?;

    let mut attributes = Vec::new();
    while i < lines.len() {
        let attr_line = lines[i].trim_start();
        let rest = &attr_line[1..]; // drop leading '.'
        let (attr_name, after) = take_identifier(rest)?;
        let after = after.trim_start_matches(' ');
        let after_eq = after
            .strip_prefix('=')
            .ok_or_else(|| ParserError::ExpectedToken("=".to_string()))?;
        let mut attr_pattern_lines = vec![after_eq.trim_start_matches(' ').to_string()];
        i += 1;
        while i < lines.len() {
            let trimmed = lines[i].trim_start();
            if is_attribute_start(trimmed) {
                break;
            }
            attr_pattern_lines.push(lines[i].to_string());
            i += 1;
        }
        let attr_value = build_pattern(&attr_pattern_lines)?
            .ok_or_else(|| ParserError::MissingValue(attr_name.clone()))?;
        attributes.push(Attribute {
            id: Identifier::new(attr_name),
            value: attr_value,
        });
    }

    if is_term {
        let value = value.ok_or_else(|| ParserError::MissingValue(id_name.clone()))?;
        Ok(Entry::Term(Term {
            id: Identifier::new(id_name),
            value,
            attributes,
        }))
    } else {
        if value.is_none() && attributes.is_empty() {
            return Err(ParserError::MissingValue(id_name));
        }
        Ok(Entry::Message(Message {
            id: Identifier::new(id_name),
            value,
            attributes,
        }))
    }
}

fn build_pattern(lines: &[String]) -> Result<Option<Pattern>, ParserError> {
    if lines.is_empty() {
        return Ok(None);
    }
    let first = lines[0].clone();
    let rest = &lines[1..];
    let min_indent = rest
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start_matches(' ').len())
        .min();

    let mut joined = vec![first];
    for l in rest {
        if l.trim().is_empty() {
            joined.push(String::new());
            continue;
        }
        match min_indent {
            Some(indent) => {
                let available = l.len() - l.trim_start_matches(' ').len();
                let strip = indent.min(available);
                joined.push(l[strip..].to_string());
            }
            None => joined.push(l.trim().to_string()),
        }
    }

    let raw = joined.join("\n");
    let trimmed_raw = raw.trim_end_matches(|c| c == '\n' || c == ' ');
    if trimmed_raw.is_empty() {
        return Ok(None);
    }
    let pattern = parse_pattern_text(trimmed_raw)?;
    if pattern.elements.is_empty() {
        Ok(None)
    } else {
        Ok(Some(pattern))
    }
}

fn parse_pattern_text(raw: &str) -> Result<Pattern, ParserError> {
    let chars: Vec<char> = raw.chars().collect();
    let mut elements = Vec::new();
    let mut text_buf = String::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '{' {
            if !text_buf.is_empty() {
                elements.push(PatternElement::TextElement(std::mem::take(&mut text_buf)));
            }
            let (inner, next_i) = extract_braced(&chars, i)?;
            let expr = parse_expression(inner.trim())?;
            elements.push(PatternElement::Placeable(Placeable {
                expression: Box::new(expr),
            }));
            i = next_i;
        } else {
            text_buf.push(chars[i]);
            i += 1;
        }
    }
    if !text_buf.is_empty() {
        elements.push(PatternElement::TextElement(text_buf));
    }
    Ok(Pattern { elements })
}

/// `start` points at the opening `{`. Returns the inner text (braces at
/// depth > 1 kept verbatim, to be re-parsed by a nested call) and the index
/// just past the matching `}`.
fn extract_braced(chars: &[char], start: usize) -> Result<(String, usize), ParserError> {
    let mut depth = 0i32;
    let mut in_string = false;
    let mut i = start;
    let mut buf = String::new();
    loop {
        if i >= chars.len() {
            return Err(ParserError::ExpectedToken("}".to_string()));
        }
        let c = chars[i];
        if in_string {
            buf.push(c);
            if c == '\\' {
                i += 1;
                if i < chars.len() {
                    buf.push(chars[i]);
                }
            } else if c == '"' {
                in_string = false;
            }
            i += 1;
            continue;
        }
        match c {
            '"' => {
                in_string = true;
                buf.push(c);
                i += 1;
            }
            '{' => {
                depth += 1;
                if depth > 1 {
                    buf.push(c);
                }
                i += 1;
            }
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((buf, i + 1));
                }
                buf.push(c);
                i += 1;
            }
            _ => {
                buf.push(c);
                i += 1;
            }
        }
    }
}

fn find_top_level_arrow(s: &str) -> Option<usize> {
    let bytes: Vec<char> = s.chars().collect();
    let mut in_string = false;
    let mut i = 0;
    while i + 1 < bytes.len() {
        let c = bytes[i];
        if in_string {
            if c == '\\' {
                i += 2;
                continue;
            }
            if c == '"' {
                in_string = false;
            }
            i += 1;
            continue;
        }
        if c == '"' {
            in_string = true;
            i += 1;
            continue;
        }
        if c == '-' && bytes[i + 1] == '>' {
            return Some(byte_index_of_char(s, i));
        }
        i += 1;
    }
    None
}

fn byte_index_of_char(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(b, _)| b)
        .unwrap_or(s.len())
}

fn parse_expression(s: &str) -> Result<Expression, ParserError> {
    let trimmed = s.trim();
    if let Some(arrow_idx) = find_top_level_arrow(trimmed) {
        let selector_str = trimmed[..arrow_idx].trim();
        let variants_str = &trimmed[arrow_idx + 2..];
        let selector = parse_inline_expression(selector_str)?;
        let variants = parse_variants(variants_str)?;
        if !variants.iter().any(|v| v.default) {
            return Err(ParserError::MissingDefaultVariant);
        }
        return Ok(Expression::SelectExpression(SelectExpression {
            selector: Box::new(selector),
            variants,
        }));
    }
    if trimmed.starts_with('[') || trimmed.starts_with("*[") {
        let variants = parse_variants(trimmed)?;
        if !variants.iter().any(|v| v.default) {
            return Err(ParserError::MissingDefaultVariant);
        }
        return Ok(Expression::VariantList(VariantList { variants }));
    }
    parse_inline_expression(trimmed)
}

fn parse_variants(s: &str) -> Result<Vec<Variant>, ParserError> {
    let lines: Vec<&str> = s.split('\n').collect();
    let mut variants = Vec::new();
    let mut i = 0;
    while i < lines.len() && lines[i].trim().is_empty() {
        i += 1;
    }
    let mut default_seen = false;
    while i < lines.len() {
        let line = lines[i].trim_start();
        if line.is_empty() {
            i += 1;
            continue;
        }
        let is_default = line.starts_with('*');
        let marker_line = if is_default { &line[1..] } else { line };
        if !marker_line.starts_with('[') {
            return Err(ParserError::ExpectedVariantKey);
        }
        let close = marker_line
            .find(']')
            .ok_or(ParserError::ExpectedVariantKey)?;
        let key_str = marker_line[1..close].trim();
        if key_str.is_empty() {
            return Err(ParserError::ExpectedVariantKey);
        }
        let key = if is_number_literal_start(key_str) {
            validate_number(key_str)?;
            VariantKey::NumberLiteral(NumberLiteral {
                value: key_str.to_string(),
            })
        } else {
            validate_identifier(key_str)?;
            VariantKey::Identifier(Identifier::new(key_str))
        };
        if is_default {
            if default_seen {
                return Err(ParserError::MultipleDefaultVariants);
            }
            default_seen = true;
        }

        let first_frag = marker_line[close + 1..].trim_start_matches(' ').to_string();
        let mut pat_lines = vec![first_frag];
        i += 1;
        while i < lines.len() {
            let lt = lines[i].trim_start();
            if lt.starts_with('[') || lt.starts_with("*[") {
                break;
            }
            pat_lines.push(lines[i].to_string());
            i += 1;
        }
        let pattern = build_pattern(&pat_lines)?.unwrap_or(Pattern { elements: vec![] });
        variants.push(Variant {
            key,
            value: VariantValue::Pattern(pattern),
            default: is_default,
        });
    }
    if variants.is_empty() {
        return Err(ParserError::MissingVariants);
    }
    Ok(variants)
}

fn is_number_literal_start(s: &str) -> bool {
    let mut it = s.chars();
    match it.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('-') => it.next().map(|c| c.is_ascii_digit()).unwrap_or(false),
        _ => false,
    }
}

fn validate_number(s: &str) -> Result<(), ParserError> {
    let mut chars = s.chars().peekable();
    if chars.peek() == Some(&'-') {
        chars.next();
    }
    let mut has_digits = false;
    while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
        chars.next();
        has_digits = true;
    }
    if !has_digits {
        return Err(ParserError::ExpectedLiteral);
    }
    if chars.peek() == Some(&'.') {
        chars.next();
        let mut frac = false;
        while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
            chars.next();
            frac = true;
        }
        if !frac {
            return Err(ParserError::ExpectedLiteral);
        }
    }
    if chars.next().is_some() {
        return Err(ParserError::ExpectedLiteral);
    }
    Ok(())
}

fn parse_string_literal(s: &str) -> Result<StringLiteral, ParserError> {
    if !s.starts_with('"') {
        return Err(ParserError::ExpectedToken("\"".to_string()));
    }
    let chars: Vec<char> = s.chars().collect();
    if chars.len() < 2 || chars[chars.len() - 1] != '"' {
        return Err(ParserError::UnterminatedStringLiteral);
    }
    let inner = &chars[1..chars.len() - 1];
    let mut out = String::new();
    let mut i = 0;
    while i < inner.len() {
        let c = inner[i];
        if c == '\\' {
            i += 1;
            if i >= inner.len() {
                return Err(ParserError::UnterminatedStringLiteral);
            }
            match inner[i] {
                '\\' => out.push('\\'),
                '"' => out.push('"'),
                'u' => {
                    let end = (i + 5).min(inner.len());
                    let hex: String = inner[i + 1..end].iter().collect();
                    if hex.len() == 4 {
                        if let Ok(code) = u32::from_str_radix(&hex, 16) {
                            if let Some(ch) = char::from_u32(code) {
                                out.push(ch);
                            }
                        }
                        i += 4;
                    }
                }
                other => out.push(other),
            }
            i += 1;
        } else {
            out.push(c);
            i += 1;
        }
    }
    Ok(StringLiteral { value: out })
}

fn find_top_level_char(s: &str, target: char) -> Option<usize> {
    let mut depth = 0i32;
    let mut in_string = false;
    let mut chars = s.char_indices();
    while let Some((idx, c)) = chars.next() {
        if in_string {
            if c == '\\' {
                chars.next();
                continue;
            }
            if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '(' | '[' => depth += 1,
            ')' | ']' => depth -= 1,
            c if c == target && depth == 0 => return Some(idx),
            _ => {}
        }
    }
    None
}

fn split_top_level(s: &str, delim: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut in_string = false;
    let mut buf = String::new();
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if in_string {
            buf.push(c);
            if c == '\\' {
                if let Some(n) = chars.next() {
                    buf.push(n);
                }
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => {
                in_string = true;
                buf.push(c);
            }
            '(' | '[' => {
                depth += 1;
                buf.push(c);
            }
            ')' | ']' => {
                depth -= 1;
                buf.push(c);
            }
            c if c == delim && depth == 0 => {
                parts.push(buf.trim().to_string());
                buf.clear();
            }
            _ => buf.push(c),
        }
    }
    if !buf.trim().is_empty() {
        parts.push(buf.trim().to_string());
    }
    parts
}

fn find_matching_paren(s: &str) -> Result<usize, ParserError> {
    let mut depth = 1i32;
    let mut in_string = false;
    for (idx, c) in s.char_indices() {
        if in_string {
            if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(idx);
                }
            }
            _ => {}
        }
    }
    Err(ParserError::ExpectedToken(")".to_string()))
}

fn parse_call_args(inner: &str) -> Result<(Vec<Expression>, Vec<NamedArgument>), ParserError> {
    let mut positional = Vec::new();
    let mut named = Vec::new();
    for part in split_top_level(inner, ',') {
        if part.is_empty() {
            continue;
        }
        if let Some(colon_idx) = find_top_level_char(&part, ':') {
            let name = part[..colon_idx].trim();
            let value_str = part[colon_idx + 1..].trim();
            validate_identifier(name)?;
            let value_expr = parse_inline_expression(value_str)?;
            match &value_expr {
                Expression::StringLiteral(_) | Expression::NumberLiteral(_) => {}
                _ => return Err(ParserError::ExpectedLiteral),
            }
            named.push(NamedArgument {
                name: Identifier::new(name),
                value: value_expr,
            });
        } else {
            positional.push(parse_inline_expression(&part)?);
        }
    }
    Ok((positional, named))
}

fn parse_term_or_message_ref(s: &str, is_term: bool) -> Result<Expression, ParserError> {
    let body = if is_term { &s[1..] } else { s };
    let (name, rest) = take_identifier(body)?;

    if rest.is_empty() {
        return Ok(if is_term {
            Expression::TermReference(TermReference {
                id: Identifier::new(name),
            })
        } else {
            Expression::MessageReference(MessageReference {
                id: Identifier::new(name),
            })
        });
    }

    if let Some(attr) = rest.strip_prefix('.') {
        let (attr_name, trailing) = take_identifier(attr)?;
        if !trailing.trim().is_empty() {
            return Err(ParserError::ExpectedToken("end of expression".to_string()));
        }
        let reference = if is_term {
            AttributeReferenceTarget::Term(TermReference {
                id: Identifier::new(name),
            })
        } else {
            AttributeReferenceTarget::Message(MessageReference {
                id: Identifier::new(name),
            })
        };
        return Ok(Expression::AttributeExpression(AttributeExpression {
            reference,
            name: Identifier::new(attr_name),
        }));
    }

    if is_term {
        if let Some(bracket) = rest.strip_prefix('[') {
            let close = bracket.find(']').ok_or(ParserError::ExpectedVariantKey)?;
            let key_str = bracket[..close].trim();
            let key = if is_number_literal_start(key_str) {
                validate_number(key_str)?;
                VariantKey::NumberLiteral(NumberLiteral {
                    value: key_str.to_string(),
                })
            } else {
                validate_identifier(key_str)?;
                VariantKey::Identifier(Identifier::new(key_str))
            };
            return Ok(Expression::VariantExpression(VariantExpression {
                reference: TermReference {
                    id: Identifier::new(name),
                },
                key,
            }));
        }
    } else if let Some(args_str) = rest.trim_start().strip_prefix('(') {
        let is_upper_callee = name
            .chars()
            .next()
            .map(|c| c.is_ascii_uppercase())
            .unwrap_or(false)
            && name
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
        if !is_upper_callee {
            return Err(ParserError::InvalidCallee);
        }
        let close = find_matching_paren(args_str)?;
        let inner = &args_str[..close];
        let (positional, named) = parse_call_args(inner)?;
        return Ok(Expression::CallExpression(CallExpression {
            callee: Identifier::new(name),
            positional,
            named,
        }));
    }

    Err(ParserError::ExpectedToken("end of expression".to_string()))
}

fn parse_inline_expression(s: &str) -> Result<Expression, ParserError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParserError::ExpectedLiteral);
    }
    if s.starts_with('"') {
        return parse_string_literal(s).map(Expression::StringLiteral);
    }
    if let Some(name) = s.strip_prefix('$') {
        validate_identifier(name)?;
        return Ok(Expression::VariableReference(VariableReference {
            id: Identifier::new(name),
        }));
    }
    if is_number_literal_start(s) {
        validate_number(s)?;
        return Ok(Expression::NumberLiteral(NumberLiteral {
            value: s.to_string(),
        }));
    }
    if s.starts_with('-') {
        return parse_term_or_message_ref(s, true);
    }
    parse_term_or_message_ref(s, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(src: &str) -> Resource {
        let res = parse(src);
        for junk in res.junk() {
            panic!("unexpected junk: {:?} ({:?})", junk.content, junk.annotations);
        }
        res
    }

    #[test]
    fn parses_simple_message() {
        let res = parse_ok("foo = Foo\n");
        let msg = res.messages().next().unwrap();
        assert_eq!(msg.id.name, "foo");
        assert_eq!(
            msg.value.as_ref().unwrap().elements,
            vec![PatternElement::TextElement("Foo".to_string())]
        );
    }

    #[test]
    fn parses_message_reference_placeable() {
        let res = parse_ok("foo = Foo\nbar = X { foo }\n");
        let bar = res.messages().find(|m| m.id.name == "bar").unwrap();
        let elements = &bar.value.as_ref().unwrap().elements;
        assert_eq!(elements.len(), 2);
        match &elements[1] {
            PatternElement::Placeable(p) => match &*p.expression {
                Expression::MessageReference(r) => assert_eq!(r.id.name, "foo"),
                other => panic!("unexpected expr {:?}", other),
            },
            other => panic!("unexpected element {:?}", other),
        }
    }

    #[test]
    fn parses_attributes() {
        let res = parse_ok("hello =\n    .title = Hi!\n    .tooltip = This says 'Hi!'\n");
        let msg = res.messages().next().unwrap();
        assert_eq!(msg.attributes.len(), 2);
        assert_eq!(msg.attributes[0].id.name, "title");
    }

    #[test]
    fn parses_select_expression() {
        let res = parse_ok(
            "count = { $n ->\n    [one] one item\n   *[other] { $n } items\n  }\n",
        );
        let msg = res.messages().next().unwrap();
        let elements = &msg.value.as_ref().unwrap().elements;
        match &elements[0] {
            PatternElement::Placeable(p) => match &*p.expression {
                Expression::SelectExpression(sel) => {
                    assert_eq!(sel.variants.len(), 2);
                    assert!(sel.variants[1].default);
                }
                other => panic!("unexpected expr {:?}", other),
            },
            other => panic!("unexpected element {:?}", other),
        }
    }

    #[test]
    fn parses_term_variant_list() {
        let res = parse_ok(
            "-brand = {\n     [short] A&B\n    *[long]  A & B\n }\n",
        );
        let term = res.terms().next().unwrap();
        match &term.value.elements[0] {
            PatternElement::Placeable(p) => match &*p.expression {
                Expression::VariantList(vl) => assert_eq!(vl.variants.len(), 2),
                other => panic!("unexpected expr {:?}", other),
            },
            other => panic!("unexpected element {:?}", other),
        }
    }

    #[test]
    fn parses_call_expression_with_named_arg() {
        let res = parse_ok("foo = { NUMBER($n, minimumFractionDigits: 2) }\n");
        let msg = res.messages().next().unwrap();
        match &msg.value.as_ref().unwrap().elements[0] {
            PatternElement::Placeable(p) => match &*p.expression {
                Expression::CallExpression(call) => {
                    assert_eq!(call.callee.name, "NUMBER");
                    assert_eq!(call.positional.len(), 1);
                    assert_eq!(call.named.len(), 1);
                    assert_eq!(call.named[0].name.name, "minimumFractionDigits");
                }
                other => panic!("unexpected expr {:?}", other),
            },
            other => panic!("unexpected element {:?}", other),
        }
    }

    #[test]
    fn reports_junk_for_malformed_entry() {
        let res = parse("*** not an entry ***\n\nfoo = Foo\n");
        assert_eq!(res.junk().count(), 1);
        assert_eq!(res.messages().count(), 1);
    }

    #[test]
    fn cyclic_like_references_still_parse() {
        let res = parse_ok("a = { b }\nb = { a }\n");
        assert_eq!(res.messages().count(), 2);
    }
}
