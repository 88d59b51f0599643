//! # pathenv_macro
//!
//! This crate provides the `#[derive(EnvBind)]` procedural macro.
//! It is a proc-macro crate, meaning it can only export procedural macros.
//!
//! ## Module Structure
//!
//! - `parse` - Attribute parsing for `#[env(...)]`
//! - `expand` - Code generation for the `EnvBind` and `EnvField` impls

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

// Internal modules - not exposed publicly
mod expand;
mod parse;

/// Derive macro for binding environment variables onto a struct.
///
/// Each named field is bound from a variable whose name is the field name in
/// `SCREAMING_SNAKE_CASE`, appended to the prefix passed at bind time.
/// Field types pick their own behaviour: scalars are parsed, nested
/// `EnvBind` structs extend the prefix, and `Option<T>` is only populated
/// when something was set.
///
/// # Attributes
///
/// - `#[env(required)]` - Error if the variable, its `_FILE` companion and a default are all absent
/// - `#[env(default = "value")]` - Used when the variable is absent
/// - `#[env(skip)]` - Field is never touched
///
/// `required` and `default` apply to scalar fields and `Option<scalar>`.
/// On a nested struct or `Option<Struct>` field they are accepted and
/// ignored; put them on the nested struct's own fields instead.
///
/// # Example
///
/// ```ignore
/// #[derive(EnvBind, Default)]
/// struct Config {
///     #[env(required)]
///     database_url: String,
///
///     #[env(default = "8080")]
///     port: u16,
///
///     tls: Option<Tls>,
/// }
///
/// fn main() -> Result<(), pathenv::Error> {
///     let config: Config = pathenv::load("APP")?;
///     println!("Listening on {}", config.port);
///     Ok(())
/// }
/// ```
///
/// # Generated Code
///
/// The macro generates:
/// 1. `impl pathenv::EnvBind for Config` walking the fields in declaration order
/// 2. `impl pathenv::EnvField for Config` so the struct can itself be nested
#[proc_macro_derive(EnvBind, attributes(env))]
pub fn derive_env_bind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    // On error, convert to a compile_error!() invocation for better error messages
    expand::Expander::expand(input)
        .map(Into::into)
        .unwrap_or_else(|err| err.to_compile_error().into())
}
