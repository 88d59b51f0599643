//! Field shapes and the traits the derive macro builds on.
//!
//! Every field of a `#[derive(EnvBind)]` struct is bound through
//! [`EnvField`]. The shape of the field decides what that means:
//!
//! | Shape | Types | Behaviour |
//! |-------|-------|-----------|
//! | scalar | `String`, `PathBuf`, `bool`, `char`, integers, floats | resolve one variable and parse it |
//! | embedded struct | any `#[derive(EnvBind)]` type | bind its fields under `VAR_` |
//! | optional | `Option<T>` | bind a fresh `T`, keep it only if something was set |

use std::error::Error as StdError;
use std::path::PathBuf;

use crate::error::Error;
use crate::resolve::resolve;
use crate::source::EnvSource;

/// Per-field binding parameters, produced by the derive macro.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldSpec<'a> {
    /// The full variable name for the field, prefix included.
    pub var: String,

    /// Fail if no value is found.
    pub required: bool,

    /// Value to use when neither `var` nor `var_FILE` is set.
    pub default: Option<&'a str>,
}

impl<'a> FieldSpec<'a> {
    /// Creates a spec for `var`.
    pub fn new(var: impl Into<String>, required: bool, default: Option<&'a str>) -> Self {
        Self {
            var: var.into(),
            required,
            default,
        }
    }

    /// The prefix for fields nested under this one.
    pub fn nested_prefix(&self) -> String {
        format!("{}_", self.var)
    }
}

/// A struct whose fields can be bound from environment variables.
///
/// Implemented by `#[derive(EnvBind)]`.
pub trait EnvBind {
    /// Binds every field under `prefix`.
    ///
    /// `prefix` is used verbatim and should be empty or end with `_`.
    /// Returns `true` if at least one field was assigned.
    fn bind_env(&mut self, env: &dyn EnvSource, prefix: &str) -> Result<bool, Error>;
}

/// A value that can occupy a field of an [`EnvBind`] struct.
pub trait EnvField {
    /// Binds this field. Returns `true` if a value was assigned.
    fn bind_field(&mut self, env: &dyn EnvSource, spec: &FieldSpec<'_>) -> Result<bool, Error>;
}

impl<T: EnvField + Default> EnvField for Option<T> {
    fn bind_field(&mut self, env: &dyn EnvSource, spec: &FieldSpec<'_>) -> Result<bool, Error> {
        if let Some(value) = self {
            return value.bind_field(env, spec);
        }

        let mut fresh = T::default();
        let changed = fresh.bind_field(env, spec)?;

        if changed {
            *self = Some(fresh);
        }

        Ok(changed)
    }
}

/// Conversion from a resolved string into a scalar field value.
pub trait FromEnvValue: Sized {
    /// Parses `value`.
    fn from_env_value(value: &str) -> Result<Self, Box<dyn StdError + Send + Sync>>;
}

impl FromEnvValue for String {
    fn from_env_value(value: &str) -> Result<Self, Box<dyn StdError + Send + Sync>> {
        Ok(value.to_string())
    }
}

impl FromEnvValue for PathBuf {
    fn from_env_value(value: &str) -> Result<Self, Box<dyn StdError + Send + Sync>> {
        Ok(PathBuf::from(value))
    }
}

impl FromEnvValue for bool {
    fn from_env_value(value: &str) -> Result<Self, Box<dyn StdError + Send + Sync>> {
        match value.trim() {
            "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
            "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
            other => Err(format!("invalid boolean {other:?}").into()),
        }
    }
}

impl FromEnvValue for char {
    // Whitespace is a valid char, so the value is not trimmed.
    fn from_env_value(value: &str) -> Result<Self, Box<dyn StdError + Send + Sync>> {
        Ok(value.parse::<char>()?)
    }
}

macro_rules! from_str_scalars {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromEnvValue for $ty {
                fn from_env_value(value: &str) -> Result<Self, Box<dyn StdError + Send + Sync>> {
                    Ok(value.trim().parse::<$ty>()?)
                }
            }
        )*
    };
}

from_str_scalars!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// Binds a scalar field: resolve, parse, assign.
pub fn bind_scalar<T: FromEnvValue>(
    field: &mut T,
    env: &dyn EnvSource,
    spec: &FieldSpec<'_>,
) -> Result<bool, Error> {
    let Some(resolved) = resolve(env, &spec.var, spec.required, spec.default)? else {
        return Ok(false);
    };

    match T::from_env_value(&resolved.value) {
        Ok(value) => {
            *field = value;
            Ok(true)
        }
        Err(source) => Err(Error::parse(
            resolved.var,
            resolved.value,
            std::any::type_name::<T>(),
            source,
        )),
    }
}

macro_rules! scalar_fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl EnvField for $ty {
                fn bind_field(
                    &mut self,
                    env: &dyn EnvSource,
                    spec: &FieldSpec<'_>,
                ) -> Result<bool, Error> {
                    bind_scalar(self, env, spec)
                }
            }
        )*
    };
}

scalar_fields!(
    String, PathBuf, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    f32, f64,
);
