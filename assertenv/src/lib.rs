//! Typed, validated configuration from environment variables
//!
//! `assertenv` populates a configuration struct from key/value lookups
//! (the process environment by default) and checks every value against the
//! kind its field declares. The result is either a fully populated struct or
//! the error of the first field that failed.
//!
//! # Features
//!
//! - **Declarative**: Schemas generated with `#[derive(EnvSchema)]`
//! - **Typed kinds**: Integers, strings, URLs, enums, lists and `host:port` pairs
//! - **Required variants**: `Required*` kinds reject empty values
//! - **Fallbacks**: Literal defaults substituted for empty lookups
//! - **All-or-nothing**: The target is only written once every field is valid
//! - **Pluggable lookup**: Process environment, in-memory maps, file-based secrets
//!
//! # Field Kinds
//!
//! | Type | Empty value | Accepts |
//! |---|---|---|
//! | [`Int`] / [`RequiredInt`] | `0` / error | base-10 `i64` |
//! | [`Text`] / [`RequiredText`] | `""` / error | anything |
//! | [`Url`] / [`RequiredUrl`] | `""` / error | URL with a scheme and a host |
//! | [`Enum`] / [`RequiredEnum`] | `""` / error | a member of `values` |
//! | [`TextList`] / [`RequiredTextList`] | `[]` / error | `separator`-split strings |
//! | [`IntList`] / [`RequiredIntList`] | `[]` / error | `separator`-split integers |
//! | [`HostPort`] / [`RequiredHostPort`] | `:` / error | `host:port`, `[v6]:port` |
//!
//! # Example
//!
//! ```rust
//! use assertenv::{EnvSchema, Enum, RequiredIntList, RequiredText, TextList};
//!
//! #[derive(Debug, Default, EnvSchema)]
//! struct AppEnv {
//!     #[env(name = "BEEP")]
//!     beep: RequiredText,
//!
//!     #[env(name = "BOOP", values = "testing,one,two")]
//!     boop: Enum,
//!
//!     #[env(name = "BRRT", default = "fallback value")]
//!     brrt: RequiredText,
//!
//!     #[env(name = "BZZT", separator = ":")]
//!     bzzt: TextList,
//!
//!     #[env(name = "BOMF")]
//!     bomf: RequiredIntList,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let env = assertenv::lookup::from_map([
//!     ("BEEP", "hello world"),
//!     ("BZZT", "bee:goes:buzz"),
//!     ("BOMF", "1,2,3"),
//! ]);
//! let app = AppEnv::from_lookup(env)?;
//! assert_eq!(app.brrt, "fallback value");
//! assert_eq!(app.bzzt.len(), 3);
//! assert_eq!(app.bomf.to_string(), "1,2,3");
//! # Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[env(name = "KEY")]`
//!
//! The lookup key for the field. Every field needs one; a field without it
//! fails validation with [`ValidationError::UntaggedField`].
//!
//! ## `#[env(default = "value")]`
//!
//! A literal used when the lookup returns an empty string. It goes through
//! the same parsing as a looked-up value.
//!
//! ## `#[env(values = "a,b,c")]`
//!
//! The allowed values of an [`Enum`] or [`RequiredEnum`] field. Matching is
//! exact and case-sensitive. `enum = "a,b,c"` is accepted as an alias.
//!
//! ## `#[env(separator = ":")]`
//!
//! The delimiter for list fields, `,` by default. Empty segments are kept.
//!
//! ## `#[env(prefix = "APP_")]`
//!
//! On the struct: prepended to every key.
//!
//! # File-based Secrets
//!
//! [`lookup::with_files`] falls back to reading the file named by
//! `{KEY}_FILE` when `KEY` is empty, which is how Kubernetes and Docker
//! mount secrets:
//!
//! ```rust
//! # use assertenv::{EnvSchema, RequiredText};
//! #[derive(Default, EnvSchema)]
//! struct Secrets {
//!     #[env(name = "API_KEY")]
//!     api_key: RequiredText,
//! }
//!
//! let lookup = assertenv::lookup::with_files(assertenv::lookup::process_env);
//! let secrets = Secrets::from_lookup(lookup);
//! ```

extern crate self as assertenv;

mod error;
mod kind;
pub mod lookup;
pub mod parse;
mod schema;
mod types;
mod validator;

pub use assertenv_derive::EnvSchema;
pub use error::{ValidationError, ValueError};
pub use kind::{FieldKind, FieldValue, Value};
pub use schema::{EnvSchema, Field, FieldMeta, Schema};
pub use types::{
    Enum, HostPort, Int, IntList, RequiredEnum, RequiredHostPort, RequiredInt, RequiredIntList,
    RequiredText, RequiredTextList, RequiredUrl, Text, TextList, Url,
};
pub use validator::{Options, Validator};
