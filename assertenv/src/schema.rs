//! Explicit schema descriptions and the population engine
//!
//! A [`Schema`] is an ordered list of [`Field`]s, each carrying its
//! metadata and a way to store a parsed value into the record. Schemas are
//! normally generated by `#[derive(EnvSchema)]` but can be written by hand.

use std::fmt;

use crate::error::ValidationError;
use crate::kind::{FieldKind, FieldValue, Value};
use crate::parse;

/// Per-field metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMeta {
    /// Lookup key supplying the raw value
    pub key: Option<String>,
    /// Substituted when the lookup returns an empty string
    pub fallback: Option<String>,
    /// Comma-separated allowed values for enum kinds
    pub values: Option<String>,
    /// Delimiter for list kinds, `,` when unset
    pub separator: Option<String>,
}

type Assign<T> = Box<dyn Fn(&mut T, Value) -> bool>;

enum Binding<T> {
    Slot { kind: FieldKind, assign: Assign<T> },
    ReadOnly { kind: FieldKind },
    Unsupported,
}

/// One field of a record schema.
pub struct Field<T> {
    name: String,
    type_name: String,
    meta: FieldMeta,
    binding: Binding<T>,
}

impl<T: 'static> Field<T> {
    /// A field stored through `access`; its kind is taken from `V`.
    pub fn bind<V>(name: impl Into<String>, access: fn(&mut T) -> &mut V) -> Self
    where
        V: FieldValue + 'static,
    {
        let assign = move |target: &mut T, value: Value| match V::from_value(value) {
            Some(value) => {
                *access(target) = value;
                true
            }
            None => false,
        };
        Self {
            name: name.into(),
            type_name: V::KIND.name().to_owned(),
            meta: FieldMeta::default(),
            binding: Binding::Slot {
                kind: V::KIND,
                assign: Box::new(assign),
            },
        }
    }
}

impl<T> Field<T> {
    /// A field the engine may not write. Validating it fails with
    /// [`ValidationError::UnsettableField`].
    pub fn read_only(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            type_name: kind.name().to_owned(),
            meta: FieldMeta::default(),
            binding: Binding::ReadOnly { kind },
        }
    }

    /// A field whose type has no matching kind. Validating it fails with
    /// [`ValidationError::UnknownFieldType`].
    pub fn unsupported(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            meta: FieldMeta::default(),
            binding: Binding::Unsupported,
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.meta.key = Some(key.into());
        self
    }

    pub fn fallback(mut self, fallback: impl Into<String>) -> Self {
        self.meta.fallback = Some(fallback.into());
        self
    }

    pub fn values(mut self, values: impl Into<String>) -> Self {
        self.meta.values = Some(values.into());
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.meta.separator = Some(separator.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn meta(&self) -> &FieldMeta {
        &self.meta
    }

    /// Kind of the field, `None` for unsupported types
    pub fn kind(&self) -> Option<FieldKind> {
        match &self.binding {
            Binding::Slot { kind, .. } | Binding::ReadOnly { kind } => Some(*kind),
            Binding::Unsupported => None,
        }
    }

    /// Resolve, parse and store this field into `target`
    fn populate(
        &self,
        target: &mut T,
        lookup: &dyn Fn(&str) -> String,
    ) -> Result<(), ValidationError> {
        let key = self
            .meta
            .key
            .as_deref()
            .ok_or_else(|| ValidationError::UntaggedField {
                field: self.name.clone(),
            })?;

        if let Binding::ReadOnly { .. } = self.binding {
            return Err(ValidationError::UnsettableField {
                field: self.name.clone(),
            });
        }

        let mut raw = lookup(key);
        if raw.is_empty() {
            if let Some(fallback) = &self.meta.fallback {
                tracing::trace!(field = %self.name, key, "using fallback value");
                raw = fallback.clone();
            }
        }

        let (kind, assign) = match &self.binding {
            Binding::Slot { kind, assign } => (*kind, assign),
            Binding::ReadOnly { .. } | Binding::Unsupported => {
                return Err(self.unknown_type());
            }
        };
        tracing::trace!(field = %self.name, key, %kind, "parsing field");

        let value = parse::parse(kind, &raw, &self.meta)
            .map_err(|e| ValidationError::value(&self.name, key, e))?;

        if !assign(target, value) {
            return Err(self.unknown_type());
        }
        Ok(())
    }

    fn unknown_type(&self) -> ValidationError {
        ValidationError::UnknownFieldType {
            field: self.name.clone(),
            type_name: self.type_name.clone(),
        }
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .field("kind", &self.kind())
            .field("meta", &self.meta)
            .finish_non_exhaustive()
    }
}

/// Ordered field descriptions for a record type `T`.
pub struct Schema<T> {
    fields: Vec<Field<T>>,
}

impl<T> Default for Schema<T> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.fields).finish()
    }
}

impl<T> Schema<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field; fields are validated in the order they were added
    pub fn field(mut self, field: Field<T>) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(&self) -> &[Field<T>] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<T: Default> Schema<T> {
    /// Populate `target` from `lookup`.
    ///
    /// Fields are resolved in declaration order into a fresh `T::default()`,
    /// which replaces `target` only once every field has succeeded. The first
    /// failing field aborts the pass and leaves `target` untouched.
    ///
    /// # Errors
    ///
    /// - A field has no key ([`ValidationError::UntaggedField`])
    /// - A field is read-only ([`ValidationError::UnsettableField`])
    /// - A field's type has no kind ([`ValidationError::UnknownFieldType`])
    /// - A raw value fails to parse ([`ValidationError::Value`])
    pub fn validate(
        &self,
        target: &mut T,
        lookup: &dyn Fn(&str) -> String,
    ) -> Result<(), ValidationError> {
        let _span = tracing::debug_span!("validate", record = std::any::type_name::<T>()).entered();

        let mut staged = T::default();
        for field in &self.fields {
            if let Err(err) = field.populate(&mut staged, lookup) {
                tracing::debug!(field = %field.name, %err, "validation failed");
                return Err(err);
            }
        }

        *target = staged;
        tracing::debug!(fields = self.fields.len(), "validation succeeded");
        Ok(())
    }
}

/// A record type with a schema.
///
/// Usually implemented with `#[derive(EnvSchema)]`.
pub trait EnvSchema: Default + Sized {
    /// Describe the fields of `Self`, in declaration order
    fn schema() -> Schema<Self>;

    /// Build `Self` from the process environment
    ///
    /// # Errors
    ///
    /// Returns the first field that fails; see [`Schema::validate`].
    fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(crate::lookup::process_env)
    }

    /// Build `Self` from an arbitrary lookup function
    ///
    /// # Errors
    ///
    /// Returns the first field that fails; see [`Schema::validate`].
    fn from_lookup<F>(lookup: F) -> Result<Self, ValidationError>
    where
        F: Fn(&str) -> String,
    {
        let mut target = Self::default();
        Self::schema().validate(&mut target, &lookup)?;
        Ok(target)
    }
}
