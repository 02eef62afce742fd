//! The closed set of supported field kinds

use std::fmt;

/// Identifies how a field's raw string is interpreted.
///
/// Every `Required*` kind refines its plain counterpart by rejecting an
/// empty raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Int,
    RequiredInt,
    Text,
    RequiredText,
    Url,
    RequiredUrl,
    Enum,
    RequiredEnum,
    TextList,
    RequiredTextList,
    IntList,
    RequiredIntList,
    HostPort,
    RequiredHostPort,
}

impl FieldKind {
    /// All kinds, plain and required interleaved
    pub const ALL: [FieldKind; 14] = [
        Self::Int,
        Self::RequiredInt,
        Self::Text,
        Self::RequiredText,
        Self::Url,
        Self::RequiredUrl,
        Self::Enum,
        Self::RequiredEnum,
        Self::TextList,
        Self::RequiredTextList,
        Self::IntList,
        Self::RequiredIntList,
        Self::HostPort,
        Self::RequiredHostPort,
    ];

    /// Whether an empty raw value is rejected
    pub fn is_required(self) -> bool {
        self != self.base()
    }

    /// The plain kind this kind refines
    pub fn base(self) -> Self {
        match self {
            Self::Int | Self::RequiredInt => Self::Int,
            Self::Text | Self::RequiredText => Self::Text,
            Self::Url | Self::RequiredUrl => Self::Url,
            Self::Enum | Self::RequiredEnum => Self::Enum,
            Self::TextList | Self::RequiredTextList => Self::TextList,
            Self::IntList | Self::RequiredIntList => Self::IntList,
            Self::HostPort | Self::RequiredHostPort => Self::HostPort,
        }
    }

    /// Name of the kind, matching its wrapper type
    pub fn name(self) -> &'static str {
        match self {
            Self::Int => "Int",
            Self::RequiredInt => "RequiredInt",
            Self::Text => "Text",
            Self::RequiredText => "RequiredText",
            Self::Url => "Url",
            Self::RequiredUrl => "RequiredUrl",
            Self::Enum => "Enum",
            Self::RequiredEnum => "RequiredEnum",
            Self::TextList => "TextList",
            Self::RequiredTextList => "RequiredTextList",
            Self::IntList => "IntList",
            Self::RequiredIntList => "RequiredIntList",
            Self::HostPort => "HostPort",
            Self::RequiredHostPort => "RequiredHostPort",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed value, before it is stored into its typed slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Text(String),
    IntList(Vec<i64>),
    TextList(Vec<String>),
    HostPort { host: String, port: String },
}

/// A type that can be populated from a parsed [`Value`].
///
/// Implemented by every wrapper in [`crate::types`]. `KIND` selects the
/// parser; `from_value` returns `None` if handed a value of the wrong shape.
pub trait FieldValue: Sized {
    /// Kind used to parse raw input for this type
    const KIND: FieldKind;

    /// Convert a parsed value into `Self`
    fn from_value(value: Value) -> Option<Self>;
}
