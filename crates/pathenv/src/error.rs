//! Error type for binding failures.

use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;

use miette::Diagnostic;

use crate::naming::file_var;

/// Errors that can occur while binding environment variables onto a struct.
///
/// Binding stops at the first error. Fields bound before the failing one keep
/// their new values.
///
/// # Example
///
/// ```rust,ignore
/// match pathenv::bind("APP", &mut config) {
///     Ok(()) => { /* use config */ }
///     Err(Error::Missing { var, file_var, .. }) => {
///         eprintln!("set {var} or {file_var}");
///     }
///     Err(e) => {
///         // Pretty-print any error with miette
///         eprintln!("{:?}", miette::Report::from(e));
///     }
/// }
/// ```
#[derive(Debug, Diagnostic, thiserror::Error)]
pub enum Error {
    /// A required variable was set neither directly nor through its `_FILE`
    /// companion, and no default was declared.
    #[error(
        "neither '{var}' nor '{file_var}' were provided as environment variables. One of them is required"
    )]
    #[diagnostic(code(pathenv::missing_var), severity(Error))]
    Missing {
        /// The variable name derived from the field.
        var: String,

        /// The file-indirection companion (`var` + `_FILE`).
        file_var: String,

        #[help]
        help: String,
    },

    /// An environment variable contains invalid UTF-8.
    #[error("environment variable {var} contains invalid UTF-8")]
    #[diagnostic(
        code(pathenv::invalid_utf8),
        help("ensure the variable contains valid UTF-8 text")
    )]
    InvalidUtf8 {
        /// The name of the offending variable.
        var: String,
    },

    /// A resolved value could not be converted into the field's type.
    #[error("unable to convert value for environment variable '{var}' to target type {expected_type}: got {value:?}")]
    #[diagnostic(code(pathenv::parse_error))]
    Parse {
        /// The variable that supplied the value.
        var: String,

        /// The raw value that failed to parse.
        value: String,

        /// The expected type name.
        expected_type: String,

        #[help]
        help: String,

        /// The underlying parse error.
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The file named by a `_FILE` variable could not be read.
    #[error("unable to read file {} for environment variable {var}", .path.display())]
    #[diagnostic(
        code(pathenv::file_read),
        help("check that the path exists and is readable by this process")
    )]
    FileRead {
        /// The `_FILE` variable holding the path.
        var: String,

        /// The path that failed to read.
        path: PathBuf,

        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Creates a Missing error for `var` and its `_FILE` companion.
    pub fn missing(var: impl Into<String>) -> Self {
        let var = var.into();
        let file_var = file_var(&var);
        let help = format!("set {var}, or set {file_var} to the path of a file holding the value");

        Error::Missing {
            var,
            file_var,
            help,
        }
    }

    /// Creates a Parse error with help text naming the expected type.
    pub fn parse(
        var: impl Into<String>,
        value: impl Into<String>,
        expected_type: impl Into<String>,
        source: Box<dyn StdError + Send + Sync>,
    ) -> Self {
        let expected_type = expected_type.into();
        let help = format!("expected a valid {expected_type}");

        Error::Parse {
            var: var.into(),
            value: value.into(),
            expected_type,
            help,
            source,
        }
    }

    /// Creates a FileRead error.
    pub fn file_read(var: impl Into<String>, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::FileRead {
            var: var.into(),
            path: path.into(),
            source,
        }
    }

    /// The variable name this error is about.
    pub fn var(&self) -> &str {
        match self {
            Error::Missing { var, .. }
            | Error::InvalidUtf8 { var }
            | Error::Parse { var, .. }
            | Error::FileRead { var, .. } => var,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic_codes;

    #[test]
    fn test_error_missing_names_both_vars() {
        let err = Error::missing("APP_NAME");
        let display = err.to_string();

        assert!(display.contains("'APP_NAME'"));
        assert!(display.contains("'APP_NAME_FILE'"));
        assert_eq!(err.var(), "APP_NAME");
    }

    #[test]
    fn test_error_parse_display() {
        let err = Error::parse("APP_AGE", "old", "i32", Box::new(std::fmt::Error));
        let display = err.to_string();

        assert!(display.contains("APP_AGE"));
        assert!(display.contains("i32"));
        assert!(display.contains("\"old\""));
        assert!(StdError::source(&err).is_some());
    }

    #[test]
    fn test_error_file_read_display() {
        let err = Error::file_read(
            "APP_NAME_FILE",
            "/missing/name.txt",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        let display = err.to_string();

        assert!(display.contains("/missing/name.txt"));
        assert!(display.contains("APP_NAME_FILE"));
    }

    #[test]
    fn test_diagnostic_codes_match() {
        let code = |e: &Error| e.code().map(|c| c.to_string());

        assert_eq!(
            code(&Error::missing("X")).as_deref(),
            Some(diagnostic_codes::MISSING_VAR)
        );
        assert_eq!(
            code(&Error::InvalidUtf8 { var: "X".into() }).as_deref(),
            Some(diagnostic_codes::INVALID_UTF8)
        );
        assert_eq!(
            code(&Error::parse("X", "y", "u8", Box::new(std::fmt::Error))).as_deref(),
            Some(diagnostic_codes::PARSE_ERROR)
        );
        assert_eq!(
            code(&Error::file_read("X_FILE", "/x", io::Error::other("boom"))).as_deref(),
            Some(diagnostic_codes::FILE_READ)
        );
    }

    #[test]
    fn test_missing_help() {
        let err = Error::missing("APP_NAME");
        let help = err.help().map(|h| h.to_string()).unwrap_or_default();

        assert!(help.contains("APP_NAME_FILE"));
    }
}
