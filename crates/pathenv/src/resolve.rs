//! Value resolution for a single scalar field.
//!
//! Lookup order, first hit wins:
//!
//! 1. `VAR` - used verbatim, whitespace and newlines included
//! 2. `VAR_FILE` - path to a file whose content is the value, with one
//!    trailing `\n` or `\r\n` removed
//! 3. the field's declared default, verbatim
//!
//! If none applies, a required field fails with [`Error::Missing`] and any
//! other field is left untouched.

use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

use crate::error::Error;
use crate::naming::file_var;
use crate::source::EnvSource;

/// A value found for a variable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Resolved {
    /// The variable that supplied the value: the field's variable, or its
    /// `_FILE` companion for file values.
    pub var: String,

    /// The raw value.
    pub value: String,
}

/// Resolves the value for `var`.
///
/// Returns `Ok(None)` when nothing is set, no default exists and the field
/// is not required.
pub fn resolve(
    env: &dyn EnvSource,
    var: &str,
    required: bool,
    default: Option<&str>,
) -> Result<Option<Resolved>, Error> {
    if let Some(value) = env.get(var) {
        let value = into_string(var, value)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(var, source = "environment", "resolved variable");

        return Ok(Some(Resolved {
            var: var.to_string(),
            value,
        }));
    }

    let file_var = file_var(var);
    if let Some(path) = env.get(&file_var) {
        let path = PathBuf::from(path);
        let content =
            fs::read_to_string(&path).map_err(|e| Error::file_read(&file_var, &path, e))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(var = %file_var, path = %path.display(), source = "file", "resolved variable");

        return Ok(Some(Resolved {
            var: file_var,
            value: strip_line_terminator(&content).to_string(),
        }));
    }

    if let Some(default) = default {
        #[cfg(feature = "tracing")]
        tracing::debug!(var, source = "default", "resolved variable");

        return Ok(Some(Resolved {
            var: var.to_string(),
            value: default.to_string(),
        }));
    }

    if required {
        return Err(Error::missing(var));
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(var, "variable not set, leaving field untouched");

    Ok(None)
}

/// Removes exactly one trailing `\r\n` or `\n`.
pub fn strip_line_terminator(content: &str) -> &str {
    content
        .strip_suffix("\r\n")
        .or_else(|| content.strip_suffix('\n'))
        .unwrap_or(content)
}

fn into_string(var: &str, value: OsString) -> Result<String, Error> {
    value.into_string().map_err(|_| Error::InvalidUtf8 {
        var: var.to_string(),
    })
}
