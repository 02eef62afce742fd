//! Error types for environment validation

use std::num::ParseIntError;

/// Errors produced while parsing a single raw value.
///
/// These carry the offending input where it is useful for debugging, but
/// never anything from other fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// A required kind received an empty raw value.
    #[error("expected a non-empty value")]
    UnexpectedEmptyValue,

    /// The value is not a base-10 integer.
    #[error("expected an integer, got '{value}': {source}")]
    InvalidInteger {
        /// Raw input that failed to parse
        value: String,
        /// Error from the integer parser
        source: ParseIntError,
    },

    /// The value could not be parsed as a URL at all.
    #[error("expected a valid URL, got '{value}': {source}")]
    InvalidUrl {
        /// Raw input that failed to parse
        value: String,
        /// Error from the URL parser
        source: url::ParseError,
    },

    /// The value parses as a URL but lacks a scheme or a host.
    #[error("expected a valid URL including a scheme and a host, got '{value}'")]
    PartialUrlValue {
        /// Raw input missing a scheme or host
        value: String,
    },

    /// The value is not a member of the declared set.
    #[error("invalid enum value '{value}', expected one of: {allowed}")]
    InvalidEnumValue {
        /// Raw input that matched no member
        value: String,
        /// Comma-separated allowed values, as declared
        allowed: String,
    },

    /// A required list ended up with no elements.
    #[error("expected at least one value")]
    ExpectedAtLeastOneValue,

    /// The value is not a `host:port` pair.
    #[error("expected host:port, got '{value}': {reason}")]
    InvalidHostPort {
        /// Raw input that failed to split
        value: String,
        /// What was wrong with it
        reason: &'static str,
    },
}

/// Errors returned by a validation pass.
///
/// Validation stops at the first failing field, so exactly one of these is
/// reported per call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The schema declares a field that the engine is not allowed to write.
    #[error("field '{field}' cannot be set")]
    UnsettableField {
        /// Name of the field in the record
        field: String,
    },

    /// The schema declares a field without a source key.
    #[error("no env key set for field '{field}'")]
    UntaggedField {
        /// Name of the field in the record
        field: String,
    },

    /// The field's type is not one of the supported kinds.
    #[error("unknown type '{type_name}' for field '{field}'")]
    UnknownFieldType {
        /// Name of the field in the record
        field: String,
        /// Declared type of the field
        type_name: String,
    },

    /// The raw value for a field failed to parse.
    #[error("invalid value for field '{field}' (env '{key}'): {source}")]
    Value {
        /// Name of the field in the record
        field: String,
        /// Lookup key the raw value came from
        key: String,
        /// The parser failure
        source: ValueError,
    },
}

impl ValidationError {
    /// Wrap a parser failure with the field and key that produced it
    pub(crate) fn value(
        field: impl Into<String>,
        key: impl Into<String>,
        source: ValueError,
    ) -> Self {
        Self::Value {
            field: field.into(),
            key: key.into(),
            source,
        }
    }

    /// Name of the field this error refers to
    pub fn field(&self) -> &str {
        match self {
            Self::UnsettableField { field }
            | Self::UntaggedField { field }
            | Self::UnknownFieldType { field, .. }
            | Self::Value { field, .. } => field,
        }
    }

    /// The underlying parser failure, if this is a value error
    pub fn value_error(&self) -> Option<&ValueError> {
        match self {
            Self::Value { source, .. } => Some(source),
            _ => None,
        }
    }
}
