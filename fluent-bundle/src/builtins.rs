//! Function-call protocol: each registered function carries an argument
//! spec computed once at registration time (Rust has no
//! `inspect.signature` to fall back on), plus the two built-ins every
//! context gets for free, `NUMBER()` and `DATETIME()`.

use std::collections::HashMap;

use crate::errors::FluentError;
use crate::types::{DateStyle, FluentDate, FluentNumber, FluentValue, NumberStyle};

#[derive(Debug, Clone, PartialEq)]
pub enum ArgCount {
    Exact(usize),
    Any,
}

#[derive(Debug, Clone, PartialEq)]
pub enum KwargSpec {
    Names(Vec<&'static str>),
    Any,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionArgSpec {
    pub positional: ArgCount,
    pub kwargs: KwargSpec,
}

impl FunctionArgSpec {
    pub fn exact(positional: usize, kwargs: &[&'static str]) -> Self {
        FunctionArgSpec {
            positional: ArgCount::Exact(positional),
            kwargs: KwargSpec::Names(kwargs.to_vec()),
        }
    }
}

pub type NativeFunction =
    Box<dyn Fn(&[FluentValue], &HashMap<String, FluentValue>) -> FluentValue + Send + Sync>;

pub struct RegisteredFunction {
    pub func: NativeFunction,
    pub spec: FunctionArgSpec,
}

/// Mirrors `args_match` / `inspect_function_args`: checks a call's
/// positional arity and keyword names against the spec, producing the
/// same-shaped `TypeError` messages a native-style "got an unexpected
/// keyword argument" / "takes N positional arguments" error would.
pub fn args_match(
    name: &str,
    positional: &[FluentValue],
    kwargs: &HashMap<String, FluentValue>,
    spec: &FunctionArgSpec,
) -> Result<(), FluentError> {
    if let KwargSpec::Names(allowed) = &spec.kwargs {
        for key in kwargs.keys() {
            if !allowed.contains(&key.as_str()) {
                return Err(FluentError::TypeError(format!(
                    "{}() got an unexpected keyword argument '{}'",
                    name, key
                )));
            }
        }
    }
    if let ArgCount::Exact(n) = spec.positional {
        if positional.len() != n {
            return Err(FluentError::TypeError(format!(
                "{}() takes {} positional arguments but {} was given",
                name,
                n,
                positional.len()
            )));
        }
    }
    Ok(())
}

fn as_f64(value: &FluentValue) -> f64 {
    match value {
        FluentValue::Number(n) => n.value,
        FluentValue::String(s) => s.parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn kwarg_str<'a>(kwargs: &'a HashMap<String, FluentValue>, key: &str) -> Option<&'a str> {
    kwargs.get(key).and_then(|v| match v {
        FluentValue::String(s) => Some(s.as_str()),
        _ => None,
    })
}

fn kwarg_usize(kwargs: &HashMap<String, FluentValue>, key: &str) -> Option<usize> {
    kwargs.get(key).and_then(|v| match v {
        FluentValue::Number(n) if n.value >= 0.0 => Some(n.value.round() as usize),
        _ => None,
    })
}

fn kwarg_bool(kwargs: &HashMap<String, FluentValue>, key: &str) -> Option<bool> {
    kwarg_str(kwargs, key).map(|s| s != "false")
}

fn number_builtin(positional: &[FluentValue], kwargs: &HashMap<String, FluentValue>) -> FluentValue {
    let value = positional.first().map(as_f64).unwrap_or(0.0);
    let mut number = FluentNumber::new(value);
    if let Some(style) = kwarg_str(kwargs, "style") {
        number.options.style = match style {
            "percent" => NumberStyle::Percent,
            "currency" => NumberStyle::Currency,
            _ => NumberStyle::Decimal,
        };
    }
    if let Some(currency) = kwarg_str(kwargs, "currency") {
        number.options.currency = Some(currency.to_string());
    }
    if let Some(grouping) = kwarg_bool(kwargs, "useGrouping") {
        number.options.use_grouping = grouping;
    }
    number.options.minimum_fraction_digits = kwarg_usize(kwargs, "minimumFractionDigits");
    number.options.maximum_fraction_digits = kwarg_usize(kwargs, "maximumFractionDigits");
    number.options.minimum_integer_digits = kwarg_usize(kwargs, "minimumIntegerDigits");
    FluentValue::Number(number)
}

fn date_style_from_str(s: &str) -> DateStyle {
    match s {
        "full" => DateStyle::Full,
        "long" => DateStyle::Long,
        "short" => DateStyle::Short,
        "none" => DateStyle::None,
        _ => DateStyle::Medium,
    }
}

fn datetime_builtin(
    positional: &[FluentValue],
    kwargs: &HashMap<String, FluentValue>,
) -> FluentValue {
    let date = match positional.first() {
        Some(FluentValue::Date(d)) => d.value,
        _ => return FluentValue::None(crate::types::FluentNone::with_id("DATETIME()")),
    };
    let mut wrapped = FluentDate::new(date);
    if let Some(style) = kwarg_str(kwargs, "dateStyle") {
        wrapped.options.date_style = date_style_from_str(style);
    }
    if let Some(style) = kwarg_str(kwargs, "timeStyle") {
        wrapped.options.time_style = date_style_from_str(style);
    }
    FluentValue::Date(wrapped)
}

pub fn default_functions() -> HashMap<String, RegisteredFunction> {
    let mut functions = HashMap::new();
    functions.insert(
        "NUMBER".to_string(),
        RegisteredFunction {
            func: Box::new(number_builtin),
            spec: FunctionArgSpec::exact(
                1,
                &[
                    "style",
                    "currency",
                    "useGrouping",
                    "minimumFractionDigits",
                    "maximumFractionDigits",
                    "minimumIntegerDigits",
                ],
            ),
        },
    );
    functions.insert(
        "DATETIME".to_string(),
        RegisteredFunction {
            func: Box::new(datetime_builtin),
            spec: FunctionArgSpec::exact(1, &["dateStyle", "timeStyle"]),
        },
    );
    functions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_kwarg() {
        let spec = FunctionArgSpec::exact(1, &["style"]);
        let mut kwargs = HashMap::new();
        kwargs.insert("bogus".to_string(), FluentValue::String("x".into()));
        let err = args_match("NUMBER", &[FluentValue::Number(FluentNumber::new(1.0))], &kwargs, &spec)
            .unwrap_err();
        assert_eq!(
            err,
            FluentError::TypeError(
                "NUMBER() got an unexpected keyword argument 'bogus'".to_string()
            )
        );
    }

    #[test]
    fn rejects_wrong_arity() {
        let spec = FunctionArgSpec::exact(1, &[]);
        let kwargs = HashMap::new();
        let err = args_match("NUMBER", &[], &kwargs, &spec).unwrap_err();
        assert_eq!(
            err,
            FluentError::TypeError("NUMBER() takes 1 positional arguments but 0 was given".to_string())
        );
    }
}
