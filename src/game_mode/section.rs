//! Generic validated configuration sections.
//!
//! Every game-mode section follows the same two-phase contract: declare a
//! field table (external alias, accepted value kinds, description), run type
//! validation over the whole table, then run section-specific semantic
//! checks and construct the immutable settings object. [`ConfigGroup`]
//! captures the shared phases so individual sections only supply their
//! table and their semantics.
//!
//! Validation is pure: a failure raises a [`ConfigError`] and nothing
//! partially constructed survives.

use serde_yaml::{Mapping, Value};

/// Accepted-type tag for a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    Str,
}

impl ValueKind {
    fn name(self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Str => "str",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            ValueKind::Bool => value.is_bool(),
            ValueKind::Int => value.is_i64() || value.is_u64(),
            ValueKind::Float => value.is_f64(),
            ValueKind::Str => value.is_string(),
        }
    }
}

/// What a raw value actually was, for error messages.
fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Declaration of one field in a section: the externally documented alias,
/// the set of raw types it accepts, and a human-readable description.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub alias: &'static str,
    pub accepts: &'static [ValueKind],
    pub description: &'static str,
}

/// Accepted-type shorthand for reward magnitudes and other numerics.
pub const INT_OR_FLOAT: &[ValueKind] = &[ValueKind::Int, ValueKind::Float];
pub const BOOL: &[ValueKind] = &[ValueKind::Bool];
pub const INT: &[ValueKind] = &[ValueKind::Int];
pub const STR: &[ValueKind] = &[ValueKind::Str];

/// Configuration errors. Raised during `create`, before any section object
/// exists; the caller is expected to surface the message and abort setup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required key '{key}'")]
    MissingKey { key: String },
    #[error("invalid type for key '{key}': expected {expected}, got {actual}")]
    InvalidType {
        key: String,
        expected: String,
        actual: String,
    },
    #[error("unknown reference for key '{key}': '{value}' is not one of [{allowed}]")]
    UnknownReference {
        key: String,
        value: String,
        allowed: String,
    },
    #[error("invalid value for key '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

impl ConfigError {
    pub fn missing(key: &str) -> Self {
        ConfigError::MissingKey {
            key: key.to_string(),
        }
    }

    pub fn invalid_value(key: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

/// A validated, immutable slice of a game mode.
pub trait ConfigGroup: Sized {
    /// Section name used as the top-level key in nested documents.
    const SECTION: &'static str;

    /// The declared field table for this section.
    fn fields() -> &'static [FieldSpec];

    /// Phase 2: semantic validation plus construction. Called only after
    /// every declared field passed its type check.
    fn build(settings: &Mapping) -> Result<Self, ConfigError>;

    /// The only construction path from untrusted input. Runs type
    /// validation over the whole field table, then semantic validation.
    /// Unknown keys in `settings` are ignored.
    fn create(settings: &Mapping) -> Result<Self, ConfigError> {
        check_types(Self::fields(), settings)?;
        Self::build(settings)
    }
}

/// Phase 1: every declared field must be present and carry a value of one
/// of its accepted kinds.
pub fn check_types(fields: &[FieldSpec], settings: &Mapping) -> Result<(), ConfigError> {
    for field in fields {
        let value = settings
            .get(field.alias)
            .ok_or_else(|| ConfigError::missing(field.alias))?;
        if !field.accepts.iter().any(|kind| kind.matches(value)) {
            let expected = field
                .accepts
                .iter()
                .map(|kind| kind.name())
                .collect::<Vec<_>>()
                .join(" or ");
            return Err(ConfigError::InvalidType {
                key: field.alias.to_string(),
                expected,
                actual: kind_name(value).to_string(),
            });
        }
    }
    Ok(())
}

fn get<'a>(settings: &'a Mapping, alias: &str) -> Result<&'a Value, ConfigError> {
    settings.get(alias).ok_or_else(|| ConfigError::missing(alias))
}

/// Pull a named section out of a top-level document.
pub fn as_section<'a>(doc: &'a Mapping, name: &str) -> Result<&'a Mapping, ConfigError> {
    let value = get(doc, name)?;
    value.as_mapping().ok_or_else(|| ConfigError::InvalidType {
        key: name.to_string(),
        expected: "mapping".to_string(),
        actual: kind_name(value).to_string(),
    })
}

/// Read a numeric field as f64, accepting integer or floating-point input.
pub fn as_f64(settings: &Mapping, alias: &str) -> Result<f64, ConfigError> {
    let value = get(settings, alias)?;
    value.as_f64().ok_or_else(|| ConfigError::InvalidType {
        key: alias.to_string(),
        expected: "int or float".to_string(),
        actual: kind_name(value).to_string(),
    })
}

/// Read an integer field as usize.
pub fn as_usize(settings: &Mapping, alias: &str) -> Result<usize, ConfigError> {
    let value = get(settings, alias)?;
    value
        .as_u64()
        .map(|n| n as usize)
        .ok_or_else(|| ConfigError::InvalidType {
            key: alias.to_string(),
            expected: "non-negative int".to_string(),
            actual: kind_name(value).to_string(),
        })
}

pub fn as_bool(settings: &Mapping, alias: &str) -> Result<bool, ConfigError> {
    let value = get(settings, alias)?;
    value.as_bool().ok_or_else(|| ConfigError::InvalidType {
        key: alias.to_string(),
        expected: "bool".to_string(),
        actual: kind_name(value).to_string(),
    })
}

pub fn as_str<'a>(settings: &'a Mapping, alias: &str) -> Result<&'a str, ConfigError> {
    let value = get(settings, alias)?;
    value.as_str().ok_or_else(|| ConfigError::InvalidType {
        key: alias.to_string(),
        expected: "str".to_string(),
        actual: kind_name(value).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec {
            alias: "magnitude",
            accepts: INT_OR_FLOAT,
            description: "a numeric field",
        },
        FieldSpec {
            alias: "enabled",
            accepts: BOOL,
            description: "a toggle",
        },
    ];

    fn mapping(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_check_types_accepts_int_for_numeric_field() {
        let settings = mapping("magnitude: 5\nenabled: true");
        assert!(check_types(FIELDS, &settings).is_ok());
    }

    #[test]
    fn test_check_types_reports_missing_key() {
        let settings = mapping("magnitude: 5.0");
        let err = check_types(FIELDS, &settings).unwrap_err();
        assert_eq!(err.to_string(), "missing required key 'enabled'");
    }

    #[test]
    fn test_check_types_reports_offending_key_and_kinds() {
        let settings = mapping("magnitude: \"large\"\nenabled: true");
        let err = check_types(FIELDS, &settings).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid type for key 'magnitude': expected int or float, got str"
        );
    }

    #[test]
    fn test_check_types_rejects_bool_for_numeric_field() {
        let settings = mapping("magnitude: true\nenabled: true");
        assert!(check_types(FIELDS, &settings).is_err());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let settings = mapping("magnitude: 1\nenabled: false\nextra: whatever");
        assert!(check_types(FIELDS, &settings).is_ok());
    }

    #[test]
    fn test_accessors_convert_numbers() {
        let settings = mapping("magnitude: 3\nenabled: false");
        assert_eq!(as_f64(&settings, "magnitude").unwrap(), 3.0);
        assert!(!as_bool(&settings, "enabled").unwrap());
    }
}
