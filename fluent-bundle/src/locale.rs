//! Wraps an ordered locale list: picks the best usable locale for CLDR
//! plural categories, and formats numbers/dates the way `NUMBER()` and
//! `DATETIME()` need.

use chrono::NaiveDateTime;
use fluent_locale::{negotiate_languages, NegotiationStrategy};
use intl_pluralrules::{PluralCategory, PluralRuleType, PluralRules};
use unic_langid::LanguageIdentifier;

use crate::types::{DateOptions, DateStyle, NumberOptions, NumberStyle};

pub struct FluentLocale {
    pub locales: Vec<String>,
    plural_rules: PluralRules,
}

impl FluentLocale {
    pub fn new(locales: &[impl ToString]) -> Self {
        let locales: Vec<String> = locales.iter().map(ToString::to_string).collect();
        let available: Vec<String> = PluralRules::get_locales(PluralRuleType::CARDINAL)
            .iter()
            .map(ToString::to_string)
            .collect();
        let negotiated = negotiate_languages(
            &locales,
            &available,
            Some("en"),
            &NegotiationStrategy::Lookup,
        );
        let pr_locale = negotiated
            .first()
            .map(|l| l.to_string())
            .unwrap_or_else(|| "en".to_string());
        let plural_rules = pr_locale
            .parse::<LanguageIdentifier>()
            .ok()
            .and_then(|langid| PluralRules::create(langid, PluralRuleType::CARDINAL).ok())
            .unwrap_or_else(|| {
                PluralRules::create(
                    "en".parse::<LanguageIdentifier>().unwrap(),
                    PluralRuleType::CARDINAL,
                )
                .expect("the 'en' plural rules are always available")
            });
        FluentLocale {
            locales,
            plural_rules,
        }
    }

    /// The CLDR plural category of `n` under this locale: one of
    /// `zero`, `one`, `two`, `few`, `many`, `other`.
    pub fn plural_category(&self, n: f64) -> &'static str {
        match self.plural_rules.select(n) {
            Ok(PluralCategory::ZERO) => "zero",
            Ok(PluralCategory::ONE) => "one",
            Ok(PluralCategory::TWO) => "two",
            Ok(PluralCategory::FEW) => "few",
            Ok(PluralCategory::MANY) => "many",
            Ok(PluralCategory::OTHER) | Err(_) => "other",
        }
    }

    pub fn format_number(&self, value: f64, options: &NumberOptions) -> String {
        let (value, suffix, prefix) = match options.style {
            NumberStyle::Percent => (value * 100.0, "%".to_string(), String::new()),
            NumberStyle::Currency => (
                value,
                String::new(),
                options
                    .currency
                    .as_ref()
                    .map(|c| currency_symbol(c))
                    .unwrap_or_default(),
            ),
            NumberStyle::Decimal => (value, String::new(), String::new()),
        };

        let default_fraction_digits = match options.style {
            NumberStyle::Currency => 2,
            _ => 0,
        };
        let max_fraction = options
            .maximum_fraction_digits
            .or(options.minimum_fraction_digits)
            .unwrap_or(default_fraction_digits);
        let min_fraction = options
            .minimum_fraction_digits
            .unwrap_or(default_fraction_digits)
            .min(max_fraction);

        let negative = value.is_sign_negative() && value != 0.0;
        let rounded = format!("{:.*}", max_fraction, value.abs());
        let (int_part, frac_part) = match rounded.split_once('.') {
            Some((i, f)) => (i.to_string(), f.to_string()),
            None => (rounded, String::new()),
        };

        let frac_part = pad_and_trim_fraction(&frac_part, min_fraction, max_fraction);

        let int_part = if let Some(min_digits) = options.minimum_integer_digits {
            pad_integer(&int_part, min_digits)
        } else {
            int_part
        };

        let int_part = if options.use_grouping {
            group_digits(&int_part)
        } else {
            int_part
        };

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&prefix);
        out.push_str(&int_part);
        if !frac_part.is_empty() {
            out.push('.');
            out.push_str(&frac_part);
        }
        out.push_str(&suffix);
        out
    }

    pub fn format_date(&self, value: NaiveDateTime, options: &DateOptions) -> String {
        let date_fmt = match options.date_style {
            DateStyle::Full => Some("%A, %B %-d, %Y"),
            DateStyle::Long => Some("%B %-d, %Y"),
            DateStyle::Medium => Some("%b %-d, %Y"),
            DateStyle::Short => Some("%-m/%-d/%y"),
            DateStyle::None => None,
        };
        let time_fmt = match options.time_style {
            DateStyle::Full | DateStyle::Long => Some("%-I:%M:%S %p"),
            DateStyle::Medium => Some("%-I:%M:%S %p"),
            DateStyle::Short => Some("%-I:%M %p"),
            DateStyle::None => None,
        };
        match (date_fmt, time_fmt) {
            (Some(d), Some(t)) => value.format(&format!("{}, {}", d, t)).to_string(),
            (Some(d), None) => value.format(d).to_string(),
            (None, Some(t)) => value.format(t).to_string(),
            (None, None) => value.format("%Y-%m-%d").to_string(),
        }
    }
}

fn pad_and_trim_fraction(frac: &str, min_digits: usize, max_digits: usize) -> String {
    let mut trimmed = frac.trim_end_matches('0').to_string();
    if trimmed.len() < min_digits {
        trimmed.push_str(&"0".repeat(min_digits - trimmed.len()));
    }
    if trimmed.len() > max_digits {
        trimmed.truncate(max_digits);
    }
    trimmed
}

fn pad_integer(int_part: &str, min_digits: usize) -> String {
    if int_part.len() >= min_digits {
        int_part.to_string()
    } else {
        format!("{}{}", "0".repeat(min_digits - int_part.len()), int_part)
    }
}

fn group_digits(int_part: &str) -> String {
    let bytes = int_part.as_bytes();
    let mut out = Vec::with_capacity(bytes.len() + bytes.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        let remaining = bytes.len() - i;
        if i > 0 && remaining % 3 == 0 {
            out.push(b',');
        }
        out.push(*b);
    }
    String::from_utf8(out).unwrap_or_else(|_| int_part.to_string())
}

fn currency_symbol(code: &str) -> String {
    match code.to_uppercase().as_str() {
        "USD" => "$".to_string(),
        "EUR" => "\u{20ac}".to_string(),
        "GBP" => "\u{a3}".to_string(),
        "JPY" => "\u{a5}".to_string(),
        other => format!("{} ", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_digits("1234567"), "1,234,567");
        assert_eq!(group_digits("123"), "123");
    }

    #[test]
    fn formats_plain_decimal() {
        let locale = FluentLocale::new(&["en-US"]);
        let opts = NumberOptions::default();
        assert_eq!(locale.format_number(1234.0, &opts), "1,234");
    }

    #[test]
    fn formats_currency() {
        let locale = FluentLocale::new(&["en-US"]);
        let mut opts = NumberOptions::default();
        opts.style = NumberStyle::Currency;
        opts.currency = Some("USD".to_string());
        assert_eq!(locale.format_number(12.5, &opts), "$12.50");
    }

    #[test]
    fn plural_category_one_vs_other() {
        let locale = FluentLocale::new(&["en-US"]);
        assert_eq!(locale.plural_category(1.0), "one");
        assert_eq!(locale.plural_category(5.0), "other");
    }
}
