//! Ergonomic re-export of [`fluent_bundle`].
//!
//! This crate exists so application code depends on `fluent`, the stable
//! public name, while the implementation is free to move pieces around
//! inside `fluent-bundle` and `fluent-syntax`.

pub use fluent_bundle::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn formats_a_message_through_the_facade() {
        let mut ctx = FluentBundle::new(&["en-US"]);
        ctx.set_use_isolating(false);
        assert!(ctx.add_messages("greeting = Hello, { $name }!\n").is_empty());
        let mut args = HashMap::new();
        args.insert("name".to_string(), FluentArgument::from("Alice"));
        let (value, errors) = ctx.format("greeting", Some(&args)).unwrap();
        assert!(errors.is_empty());
        assert_eq!(value.to_string(), "Hello, Alice!");
    }
}
