//! Typed value wrappers, one per [`FieldKind`]
//!
//! A wrapper's `Default` is the value a plain kind takes when its raw input
//! is empty. `Display` renders the value back for diagnostics: integers as
//! decimal digits, lists joined with `,` whatever separator split them, and
//! host:port pairs with IPv6 hosts bracketed.

use std::fmt;
use std::ops::Deref;

use serde::{Serialize, Serializer};

use crate::kind::{FieldKind, FieldValue, Value};
use crate::parse::join_host_port;

macro_rules! int_wrapper {
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i64> for $name {
            fn eq(&self, other: &i64) -> bool {
                self.0 == *other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FieldValue for $name {
            const KIND: FieldKind = FieldKind::$kind;

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::Int(n) => Some(Self(n)),
                    _ => None,
                }
            }
        }
    };
}

macro_rules! text_wrapper {
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FieldValue for $name {
            const KIND: FieldKind = FieldKind::$kind;

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::Text(s) => Some(Self(s)),
                    _ => None,
                }
            }
        }
    };
}

macro_rules! list_wrapper {
    ($(#[$meta:meta])* $name:ident($item:ty) => $kind:ident, $variant:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(Vec<$item>);

        impl $name {
            pub fn new(values: Vec<$item>) -> Self {
                Self(values)
            }

            pub fn as_slice(&self) -> &[$item] {
                &self.0
            }

            pub fn into_inner(self) -> Vec<$item> {
                self.0
            }
        }

        impl Deref for $name {
            type Target = [$item];

            fn deref(&self) -> &[$item] {
                &self.0
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                for (i, item) in self.0.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }

        impl FieldValue for $name {
            const KIND: FieldKind = FieldKind::$kind;

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$variant(items) => Some(Self(items)),
                    _ => None,
                }
            }
        }
    };
}

macro_rules! host_port_wrapper {
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
        pub struct $name {
            host: String,
            port: String,
        }

        impl $name {
            pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
                Self {
                    host: host.into(),
                    port: port.into(),
                }
            }

            /// Host part, without IPv6 brackets
            pub fn host(&self) -> &str {
                &self.host
            }

            /// Port part; a number or a service name
            pub fn port(&self) -> &str {
                &self.port
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&join_host_port(&self.host, &self.port))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl FieldValue for $name {
            const KIND: FieldKind = FieldKind::$kind;

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::HostPort { host, port } => Some(Self { host, port }),
                    _ => None,
                }
            }
        }
    };
}

int_wrapper!(
    /// Optional integer, `0` when unset
    Int => Int
);
int_wrapper!(
    /// Required integer
    RequiredInt => RequiredInt
);

text_wrapper!(
    /// Optional string, empty when unset
    Text => Text
);
text_wrapper!(
    /// Required non-empty string
    RequiredText => RequiredText
);
text_wrapper!(
    /// Optional URL with a scheme and a host, stored in canonical form
    Url => Url
);
text_wrapper!(
    /// Required URL with a scheme and a host, stored in canonical form
    RequiredUrl => RequiredUrl
);
text_wrapper!(
    /// Optional member of a declared value set
    Enum => Enum
);
text_wrapper!(
    /// Required member of a declared value set
    RequiredEnum => RequiredEnum
);

list_wrapper!(
    /// Optional list of strings; empty segments are kept
    TextList(String) => TextList, TextList
);
list_wrapper!(
    /// Required list of strings
    RequiredTextList(String) => RequiredTextList, TextList
);
list_wrapper!(
    /// Optional list of integers
    IntList(i64) => IntList, IntList
);
list_wrapper!(
    /// Required list of integers
    RequiredIntList(i64) => RequiredIntList, IntList
);

host_port_wrapper!(
    /// Optional `host:port` pair
    HostPort => HostPort
);
host_port_wrapper!(
    /// Required `host:port` pair
    RequiredHostPort => RequiredHostPort
);
