//! Validator front end: a target record plus options

use std::fmt;

use crate::error::ValidationError;
use crate::lookup;
use crate::schema::EnvSchema;

/// Validation options.
///
/// The only option is the lookup function, which defaults to
/// [`lookup::process_env`].
pub struct Options<'a> {
    lookup: Box<dyn Fn(&str) -> String + 'a>,
}

impl<'a> Options<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `lookup` instead of the process environment
    pub fn lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> String + 'a,
    {
        self.lookup = Box::new(lookup);
        self
    }
}

impl Default for Options<'_> {
    fn default() -> Self {
        Self {
            lookup: Box::new(lookup::process_env),
        }
    }
}

impl fmt::Debug for Options<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options").finish_non_exhaustive()
    }
}

/// Populates one record from a lookup function.
///
/// ```rust
/// use assertenv::{EnvSchema, Options, RequiredText, Validator};
///
/// #[derive(Debug, Default, EnvSchema)]
/// struct Config {
///     #[env(name = "BEEP")]
///     beep: RequiredText,
/// }
///
/// # fn main() -> anyhow::Result<()> {
/// let mut config = Config::default();
/// let options = Options::new().lookup(|key: &str| match key {
///     "BEEP" => "hello world".to_string(),
///     _ => String::new(),
/// });
/// Validator::with_options(&mut config, options).validate()?;
/// assert_eq!(config.beep, "hello world");
/// # Ok(())
/// # }
/// ```
pub struct Validator<'a, T> {
    target: &'a mut T,
    options: Options<'a>,
}

impl<'a, T: EnvSchema> Validator<'a, T> {
    /// Validate `target` against the process environment
    pub fn new(target: &'a mut T) -> Self {
        Self::with_options(target, Options::default())
    }

    pub fn with_options(target: &'a mut T, options: Options<'a>) -> Self {
        Self { target, options }
    }

    /// Read and validate every field, committing them to the target on success.
    ///
    /// # Errors
    ///
    /// Returns the first failing field; the target is left as it was.
    pub fn validate(self) -> Result<(), ValidationError> {
        T::schema().validate(self.target, &*self.options.lookup)
    }

    /// Like [`validate`](Self::validate), but panics on failure.
    ///
    /// Meant for application start-up, where a bad environment is fatal.
    ///
    /// # Panics
    ///
    /// If any field fails to validate.
    pub fn validate_or_panic(self) {
        if let Err(err) = self.validate() {
            panic!("invalid environment: {err}");
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Validator<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("target", &self.target)
            .field("options", &self.options)
            .finish()
    }
}
