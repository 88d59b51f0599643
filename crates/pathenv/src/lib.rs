//! # pathenv
//!
//! Binds environment variables onto the fields of a configuration struct.
//!
//! Variable names are derived from field names, so the struct declaration is
//! the whole schema. Nested structs extend the prefix, `Option` sub-structs
//! are only allocated when something under them is set, and every variable
//! can be replaced by a `_FILE` companion naming a file that holds the value,
//! which is how container orchestrators usually mount secrets.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pathenv::EnvBind;
//!
//! #[derive(EnvBind, Default)]
//! struct Database {
//!     user: String,
//!     password: String,
//! }
//!
//! #[derive(EnvBind, Default)]
//! struct Config {
//!     #[env(required)]
//!     name: String,
//!
//!     #[env(default = 13)]
//!     age: i32,
//!
//!     is_dog: bool,
//!
//!     db: Database,
//!
//!     replica: Option<Database>,
//! }
//!
//! fn main() -> Result<(), pathenv::Error> {
//!     // APP_NAME, APP_AGE, APP_IS_DOG, APP_DB_USER, APP_DB_PASSWORD,
//!     // APP_REPLICA_USER, APP_REPLICA_PASSWORD, each also as *_FILE
//!     let config: Config = pathenv::load("APP")?;
//!     println!("{} is {}", config.name, config.age);
//!     Ok(())
//! }
//! ```
//!
//! ## Field Attributes
//!
//! | Attribute | Description |
//! |-----------|-------------|
//! | `required` | Fail if neither `VAR` nor `VAR_FILE` is set and there is no default |
//! | `default = "value"` | Used when neither `VAR` nor `VAR_FILE` is set |
//! | `skip` | Leave the field alone |
//!
//! `required` and `default` only affect scalar fields. On a nested struct
//! field they have no effect.
//!
//! ## Resolution Order
//!
//! 1. `VAR` - verbatim
//! 2. `VAR_FILE` - file content, one trailing newline removed
//! 3. `default`
//!
//! ## Error Handling
//!
//! All errors are reported through the [`Error`] type, which integrates with
//! [`miette`] for rich terminal diagnostics:
//!
//! ```rust,ignore
//! if let Err(e) = pathenv::bind("APP", &mut config) {
//!     eprintln!("{:?}", miette::Report::from(e));
//! }
//! ```

pub use pathenv_macro::EnvBind;

pub mod diagnostic_codes;
mod error;
pub mod field;
pub mod naming;
pub mod resolve;
pub mod source;

pub use error::Error;
pub use field::{EnvBind, EnvField, FieldSpec, FromEnvValue};
pub use naming::{FILE_SUFFIX, field_name_to_var, normalize_prefix};
pub use resolve::Resolved;
pub use source::{EnvSource, MapEnv, ProcessEnv};

/// Binds the process environment onto `config` under `prefix`.
///
/// A non-empty `prefix` that does not end with `_` gets one appended.
pub fn bind<T: EnvBind + ?Sized>(prefix: &str, config: &mut T) -> Result<(), Error> {
    bind_tracked(prefix, config).map(|_| ())
}

/// Like [`bind`], but reports whether any field was assigned.
///
/// Distinguishes "nothing configured" from "values or defaults applied".
pub fn bind_tracked<T: EnvBind + ?Sized>(prefix: &str, config: &mut T) -> Result<bool, Error> {
    bind_from(&ProcessEnv, prefix, config)
}

/// Binds variables from `env` onto `config` under `prefix`.
pub fn bind_from<T: EnvBind + ?Sized>(
    env: &dyn EnvSource,
    prefix: &str,
    config: &mut T,
) -> Result<bool, Error> {
    let prefix = normalize_prefix(prefix);

    #[cfg(feature = "tracing")]
    tracing::debug!(prefix = %prefix, "binding configuration from environment");

    let changed = config.bind_env(env, &prefix)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(prefix = %prefix, changed, "bound configuration");

    Ok(changed)
}

/// Builds a `T` from its [`Default`] and binds the process environment onto it.
pub fn load<T: EnvBind + Default>(prefix: &str) -> Result<T, Error> {
    let mut config = T::default();
    bind(prefix, &mut config)?;
    Ok(config)
}
