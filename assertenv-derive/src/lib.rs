//! Derive macro implementation for assertenv

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Type};

mod attrs;

use attrs::{FieldAttrs, StructAttrs};

/// Wrapper types the generated schema can bind to a kind
const KNOWN_TYPES: &[&str] = &[
    "Int",
    "RequiredInt",
    "Text",
    "RequiredText",
    "Url",
    "RequiredUrl",
    "Enum",
    "RequiredEnum",
    "TextList",
    "RequiredTextList",
    "IntList",
    "RequiredIntList",
    "HostPort",
    "RequiredHostPort",
];

/// Whether the last path segment of `ty` names a known wrapper
fn is_known_type(ty: &Type) -> bool {
    if let Type::Path(type_path) = ty {
        if type_path.qself.is_none() {
            if let Some(seg) = type_path.path.segments.last() {
                return seg.arguments.is_none()
                    && KNOWN_TYPES.iter().any(|known| seg.ident == known);
            }
        }
    }
    false
}

/// `EnvSchema` derive macro
///
/// Implements `assertenv::EnvSchema` by generating the schema of the struct:
/// one field description per struct field, in declaration order.
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[env(prefix = "PREFIX_")]`: Add prefix to all keys
///
/// **Field-level**:
/// - `#[env(name = "KEY")]`: Lookup key (required on every field)
/// - `#[env(default = "value")]`: Fallback used when the lookup is empty
/// - `#[env(values = "a,b")]`: Allowed values for enum fields (`enum = "a,b"` is an alias)
/// - `#[env(separator = ":")]`: Delimiter for list fields
///
/// Fields without `name`, and fields whose type is not one of the
/// `assertenv` wrappers, still compile but fail when validated.
#[proc_macro_derive(EnvSchema, attributes(env))]
pub fn derive_env_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let struct_attrs = StructAttrs::from_attrs(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new(
                    struct_name.span(),
                    "EnvSchema can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new(
                struct_name.span(),
                "EnvSchema can only be derived for structs with named fields",
            ));
        }
    };

    let mut field_exprs = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        let field_type = &field.ty;
        let field_name = field_ident.unraw().to_string();
        let attrs = FieldAttrs::from_field(field)?;

        let mut expr = if is_known_type(field_type) {
            quote! {
                ::assertenv::Field::<Self>::bind(
                    #field_name,
                    |target: &mut Self| &mut target.#field_ident,
                )
            }
        } else {
            let type_name = field_type.to_token_stream().to_string().replace(' ', "");
            quote! {
                ::assertenv::Field::<Self>::unsupported(#field_name, #type_name)
            }
        };

        if let Some(name) = attrs.name {
            let key = format!("{}{}", struct_attrs.prefix, name);
            expr = quote! { #expr.key(#key) };
        }
        if let Some(default) = attrs.default {
            expr = quote! { #expr.fallback(#default) };
        }
        if let Some(values) = attrs.values {
            expr = quote! { #expr.values(#values) };
        }
        if let Some(separator) = attrs.separator {
            expr = quote! { #expr.separator(#separator) };
        }

        field_exprs.push(expr);
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::assertenv::EnvSchema for #struct_name #ty_generics #where_clause {
            fn schema() -> ::assertenv::Schema<Self> {
                ::assertenv::Schema::new()
                    #(.field(#field_exprs))*
            }
        }
    })
}
