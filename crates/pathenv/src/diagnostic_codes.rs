//! Centralized registry of diagnostic error codes used throughout pathenv.
//!
//! Rust's proc-macro system requires literal strings in
//! `#[diagnostic(code(...))]` attributes, so these constants mirror them for
//! programmatic matching.
//!
//! | Code | Description |
//! |------|-------------|
//! | `pathenv::missing_var` | Required variable and its `_FILE` companion not set |
//! | `pathenv::invalid_utf8` | Variable contains non-UTF8 bytes |
//! | `pathenv::parse_error` | Value failed type conversion |
//! | `pathenv::file_read` | File named by a `_FILE` variable could not be read |
//!
//! # Example
//!
//! ```rust
//! use miette::Diagnostic;
//! use pathenv::{diagnostic_codes, Error};
//!
//! let error = Error::missing("APP_NAME");
//! let code = error.code().map(|c| c.to_string());
//! assert_eq!(code.as_deref(), Some(diagnostic_codes::MISSING_VAR));
//! ```

/// Required environment variable not set.
pub const MISSING_VAR: &str = "pathenv::missing_var";

/// Environment variable contains invalid UTF-8.
pub const INVALID_UTF8: &str = "pathenv::invalid_utf8";

/// Value failed to parse as expected type.
pub const PARSE_ERROR: &str = "pathenv::parse_error";

/// Indirection file could not be read.
pub const FILE_READ: &str = "pathenv::file_read";
