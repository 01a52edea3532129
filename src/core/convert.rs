use crate::domain::model::{ConversionFailure, ConvertOutcome};
use crate::utils::error::{ConvError, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A converter body: takes the response value, produces the converted
/// value or an error.
pub type ConvFn = Arc<dyn Fn(Value) -> Result<Value> + Send + Sync>;

/// A resolved converter for one chain step.
#[derive(Clone)]
pub enum Converter {
    /// No conversion needed; the response passes through unchanged.
    Passthrough,
    /// Apply this converter function to the response.
    Apply(ConvFn),
    /// No converter is available for the requested pair.
    Missing,
}

impl Converter {
    pub fn apply_fn<F>(f: F) -> Self
    where
        F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self::Apply(Arc::new(f))
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Converter::Passthrough => f.write_str("Passthrough"),
            Converter::Apply(_) => f.write_str("Apply(..)"),
            Converter::Missing => f.write_str("Missing"),
        }
    }
}

/// Settings controlling failure behavior of a conversion step.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertSettings {
    /// When set, converter errors propagate to the caller instead of
    /// being contained as a failure record.
    pub throws: bool,
}

/// Applies one converter to a response value.
///
/// Three branches, evaluated in order:
/// 1. `Passthrough`: the response is returned unchanged.
/// 2. `Apply` with `settings.throws` set: the converter runs with no
///    containment; its error becomes this function's `Err`.
/// 3. Otherwise the converter runs contained: a converter error, or a
///    missing converter, becomes a `"parsererror"` failure record carrying
///    either the error text or `"No conversion from {prev} to {current}"`.
///
/// `prev` and `current` name the source and target data types of the step
/// and appear in the missing-converter message.
pub fn convert(
    conv: &Converter,
    settings: &ConvertSettings,
    response: Value,
    prev: &str,
    current: &str,
) -> Result<ConvertOutcome> {
    match conv {
        Converter::Passthrough => Ok(ConvertOutcome::converted(response)),
        Converter::Apply(apply) if settings.throws => {
            Ok(ConvertOutcome::converted(apply(response)?))
        }
        Converter::Apply(apply) => match apply(response) {
            Ok(value) => Ok(ConvertOutcome::converted(value)),
            Err(error) => Ok(ConvertOutcome::failed(ConversionFailure::parser_error(
                error.to_string(),
            ))),
        },
        Converter::Missing => Ok(ConvertOutcome::failed(ConversionFailure::parser_error(
            format!("No conversion from {prev} to {current}"),
        ))),
    }
}

/// Registry of converters keyed `"{from} {to}"`, with `"*"` accepted as a
/// wildcard source type.
///
/// Installation is guarded: a key that is already present is left
/// untouched, so repeated installs are no-ops after the first and stock
/// converters can be shadowed only by installing before them.
#[derive(Debug, Default)]
pub struct ConverterRegistry {
    converters: HashMap<String, Converter>,
}

impl ConverterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the stock converters: `"* text"`
    /// (stringify), `"text html"` (passthrough), `"text json"` (parse).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.install("* text", Converter::apply_fn(to_text));
        registry.install("text html", Converter::Passthrough);
        registry.install("text json", Converter::apply_fn(parse_json));
        registry
    }

    /// Installs a converter under `key` only if the key is absent.
    /// Existing entries are kept and the call silently becomes a no-op.
    pub fn install(&mut self, key: &str, converter: Converter) {
        self.converters
            .entry(key.to_string())
            .or_insert(converter);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.converters.contains_key(key)
    }

    /// Resolves the converter for a `prev -> current` step: equal types
    /// pass through, then the exact key, then the `"* {current}"`
    /// wildcard, else `Missing`.
    pub fn resolve(&self, prev: &str, current: &str) -> Converter {
        if prev == current {
            return Converter::Passthrough;
        }
        if let Some(conv) = self.converters.get(&format!("{prev} {current}")) {
            return conv.clone();
        }
        if let Some(conv) = self.converters.get(&format!("* {current}")) {
            return conv.clone();
        }
        Converter::Missing
    }
}

fn to_text(value: Value) -> Result<Value> {
    let text = match value {
        Value::String(s) => s,
        other => serde_json::to_string(&other)?,
    };
    Ok(Value::String(text))
}

fn parse_json(value: Value) -> Result<Value> {
    match value {
        Value::String(s) => Ok(serde_json::from_str(&s)?),
        other => Err(ConvError::ConversionError {
            message: format!("expected a text value to parse as JSON, got {other}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failing_converter() -> Converter {
        Converter::apply_fn(|_| {
            Err(ConvError::ConversionError {
                message: "boom".to_string(),
            })
        })
    }

    #[test]
    fn test_passthrough_returns_response_unchanged() {
        let response = serde_json::json!({"id": 1});
        let outcome = convert(
            &Converter::Passthrough,
            &ConvertSettings::default(),
            response.clone(),
            "text",
            "text",
        )
        .unwrap();

        assert_eq!(outcome, ConvertOutcome::converted(response));
    }

    #[test]
    fn test_apply_success_yields_converted_value() {
        let conv = Converter::apply_fn(parse_json);
        let outcome = convert(
            &conv,
            &ConvertSettings::default(),
            Value::String("[1,2]".to_string()),
            "text",
            "json",
        )
        .unwrap();

        assert_eq!(outcome, ConvertOutcome::converted(serde_json::json!([1, 2])));
    }

    #[test]
    fn test_contained_failure_becomes_parser_error_record() {
        let outcome = convert(
            &failing_converter(),
            &ConvertSettings { throws: false },
            Value::Null,
            "text",
            "json",
        )
        .unwrap();

        match outcome {
            ConvertOutcome::Failed { failure } => {
                assert_eq!(failure.state, "parsererror");
                assert!(failure.error.contains("boom"));
            }
            other => panic!("expected failure record, got {other:?}"),
        }
    }

    #[test]
    fn test_throws_propagates_converter_error() {
        let result = convert(
            &failing_converter(),
            &ConvertSettings { throws: true },
            Value::Null,
            "text",
            "json",
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_converter_yields_descriptive_message() {
        let outcome = convert(
            &Converter::Missing,
            &ConvertSettings { throws: false },
            Value::Null,
            "text",
            "json",
        )
        .unwrap();

        assert_eq!(
            outcome,
            ConvertOutcome::failed(ConversionFailure::parser_error(
                "No conversion from text to json"
            ))
        );
    }

    #[test]
    fn test_missing_converter_is_contained_even_when_throws_is_set() {
        // The propagating branch requires an actual converter; a missing
        // one always takes the contained path.
        let outcome = convert(
            &Converter::Missing,
            &ConvertSettings { throws: true },
            Value::Null,
            "json",
            "html",
        )
        .unwrap();

        assert!(outcome.is_failed());
    }

    #[test]
    fn test_install_is_guarded() {
        let mut registry = ConverterRegistry::new();
        registry.install("text json", Converter::apply_fn(parse_json));
        registry.install("text json", Converter::Missing);

        // The first install wins; the second is silently skipped.
        assert!(matches!(
            registry.resolve("text", "json"),
            Converter::Apply(_)
        ));
    }

    #[test]
    fn test_resolve_prefers_exact_key_over_wildcard() {
        let mut registry = ConverterRegistry::new();
        registry.install("* json", Converter::Missing);
        registry.install("text json", Converter::apply_fn(parse_json));

        assert!(matches!(
            registry.resolve("text", "json"),
            Converter::Apply(_)
        ));
        assert!(matches!(
            registry.resolve("html", "json"),
            Converter::Missing
        ));
    }

    #[test]
    fn test_resolve_equal_types_pass_through() {
        let registry = ConverterRegistry::new();
        assert!(matches!(
            registry.resolve("json", "json"),
            Converter::Passthrough
        ));
    }

    #[test]
    fn test_resolve_unknown_pair_is_missing() {
        let registry = ConverterRegistry::with_defaults();
        assert!(matches!(
            registry.resolve("json", "xml"),
            Converter::Missing
        ));
    }

    #[test]
    fn test_default_registry_stringifies_anything_to_text() {
        let registry = ConverterRegistry::with_defaults();
        let conv = registry.resolve("json", "text");

        let outcome = convert(
            &conv,
            &ConvertSettings::default(),
            serde_json::json!({"a": 1}),
            "json",
            "text",
        )
        .unwrap();

        assert_eq!(
            outcome,
            ConvertOutcome::converted(Value::String("{\"a\":1}".to_string()))
        );
    }

    #[test]
    fn test_default_registry_text_html_is_passthrough() {
        let registry = ConverterRegistry::with_defaults();
        assert!(matches!(
            registry.resolve("text", "html"),
            Converter::Passthrough
        ));
    }
}
