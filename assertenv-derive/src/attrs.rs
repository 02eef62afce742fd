//! Attribute parsing for `#[env(...)]` annotations.
//!
//! This module extracts configuration attributes from the struct and its
//! fields during macro expansion. Unknown keys are reported as errors.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Field, Lit};

/// Parsed struct-level `#[env(...)]` attributes.
#[derive(Debug, Default)]
pub struct StructAttrs {
    /// Prepended to every field's key.
    pub prefix: String,
}

impl StructAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();

        for attr in env_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                // prefix = "..."
                if meta.path.is_ident("prefix") {
                    parsed.prefix = parse_literal(&meta)?;
                    return Ok(());
                }

                Err(meta.error("unsupported struct-level env attribute"))
            })?;
        }

        Ok(parsed)
    }
}

/// Parsed `#[env(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Lookup key. A field without one is emitted untagged and rejected
    /// when validated.
    pub name: Option<String>,

    /// Literal substituted when the lookup returns an empty string.
    pub default: Option<String>,

    /// Comma-separated allowed values for enum fields.
    pub values: Option<String>,

    /// Delimiter for list fields.
    pub separator: Option<String>,
}

impl FieldAttrs {
    /// Extract and parse `#[env(...)]` attributes from a struct field.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in env_attrs(&field.attrs) {
            attr.parse_nested_meta(|meta| {
                // name = "..."
                if meta.path.is_ident("name") {
                    attrs.name = Some(parse_literal(&meta)?);
                    return Ok(());
                }

                // default = "..." or default = 42
                if meta.path.is_ident("default") {
                    attrs.default = Some(parse_literal(&meta)?);
                    return Ok(());
                }

                // values = "a,b,c" or enum = "a,b,c"
                if meta.path.is_ident("values") || meta.path.is_ident("enum") {
                    attrs.values = Some(parse_literal(&meta)?);
                    return Ok(());
                }

                // separator = ":"
                if meta.path.is_ident("separator") {
                    attrs.separator = Some(parse_literal(&meta)?);
                    return Ok(());
                }

                Err(meta.error("unsupported env attribute"))
            })?;
        }

        Ok(attrs)
    }
}

fn env_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("env"))
}

/// Read `= "literal"` (or an integer literal) as a string
fn parse_literal(meta: &ParseNestedMeta<'_>) -> syn::Result<String> {
    let lit: Lit = meta.value()?.parse()?;
    match lit {
        Lit::Str(s) => Ok(s.value()),
        Lit::Int(i) => Ok(i.base10_digits().to_string()),
        other => Err(syn::Error::new_spanned(
            other,
            "expected a string or integer literal",
        )),
    }
}
