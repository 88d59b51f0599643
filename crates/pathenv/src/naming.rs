//! Field name to environment variable name conversion.
//!
//! Identifiers are split into words and rejoined as `SCREAMING_SNAKE_CASE`:
//!
//! | Field | Variable (prefix `APP_`) |
//! |-------|--------------------------|
//! | `database_url` | `APP_DATABASE_URL` |
//! | `DatabaseName` | `APP_DATABASE_NAME` |
//! | `SSLCert` | `APP_SSL_CERT` |
//! | `IOS1` | `APP_IOS_1` |
//! | `Database1` | `APP_DATABASE1` |
//!
//! A word is either a run of capitals not followed by a lower-case letter
//! (an acronym), or an optional capital followed by lower-case letters and
//! digits. Anything else, underscores included, only separates words.

/// Suffix appended to a variable name to form its file-indirection companion.
pub const FILE_SUFFIX: &str = "_FILE";

/// Converts a struct field name into an environment variable name.
///
/// `prefix` is prepended verbatim; it is expected to be empty or to end
/// with `_` (see [`normalize_prefix`]). A leading `r#` raw-identifier marker
/// is ignored.
///
/// # Example
///
/// ```rust
/// use pathenv::naming::field_name_to_var;
///
/// assert_eq!(field_name_to_var("APP_", "databaseCert"), "APP_DATABASE_CERT");
/// assert_eq!(field_name_to_var("", "SSLCert"), "SSL_CERT");
/// ```
pub fn field_name_to_var(prefix: &str, field_name: &str) -> String {
    let field_name = field_name.strip_prefix("r#").unwrap_or(field_name);

    let words = split_words(field_name);

    let mut var = String::with_capacity(prefix.len() + field_name.len() + words.len());
    var.push_str(prefix);

    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            var.push('_');
        }
        var.push_str(&word.to_ascii_uppercase());
    }

    var
}

/// Ensures a non-empty prefix ends with `_`.
///
/// ```rust
/// use pathenv::naming::normalize_prefix;
///
/// assert_eq!(normalize_prefix("APP"), "APP_");
/// assert_eq!(normalize_prefix("APP_"), "APP_");
/// assert_eq!(normalize_prefix(""), "");
/// ```
pub fn normalize_prefix(prefix: &str) -> String {
    if prefix.is_empty() || prefix.ends_with('_') {
        prefix.to_string()
    } else {
        format!("{prefix}_")
    }
}

/// Name of the companion variable holding a file path for `var`.
pub fn file_var(var: &str) -> String {
    format!("{var}{FILE_SUFFIX}")
}

/// Splits an identifier into its words, keeping their original case.
fn split_words(name: &str) -> Vec<&str> {
    let bytes = name.as_bytes();
    let len = bytes.len();

    let is_tail = |b: u8| b.is_ascii_lowercase() || b.is_ascii_digit();
    let run_end = |mut i: usize, pred: &dyn Fn(u8) -> bool| {
        while i < len && pred(bytes[i]) {
            i += 1;
        }
        i
    };

    let mut words = Vec::new();
    let mut i = 0;

    while i < len {
        let b = bytes[i];

        if b.is_ascii_uppercase() {
            let caps_end = run_end(i, &|c: u8| c.is_ascii_uppercase());
            let followed_by_lower = caps_end < len && bytes[caps_end].is_ascii_lowercase();

            if !followed_by_lower {
                // "DB", "IOS" in "IOS1", "D"
                words.push(&name[i..caps_end]);
                i = caps_end;
            } else if caps_end - i > 1 {
                // "SSL" in "SSLCert": the last capital opens the next word
                words.push(&name[i..caps_end - 1]);
                i = caps_end - 1;
            } else {
                let end = run_end(i + 1, &is_tail);
                words.push(&name[i..end]);
                i = end;
            }
        } else if is_tail(b) {
            let end = run_end(i, &is_tail);
            words.push(&name[i..end]);
            i = end;
        } else {
            // Separators and non-ASCII characters never belong to a word.
            i += name[i..].chars().next().map_or(1, char::len_utf8);
        }
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_field_name_table() {
        let cases = [
            ("D", "PREFIX_D"),
            ("DB", "PREFIX_DB"),
            ("IOS", "PREFIX_IOS"),
            ("IOS1", "PREFIX_IOS_1"),
            ("IOS10", "PREFIX_IOS_10"),
            ("IAm", "PREFIX_I_AM"),
            ("Database", "PREFIX_DATABASE"),
            ("Database1", "PREFIX_DATABASE1"),
            ("Database10", "PREFIX_DATABASE10"),
            ("Database_10", "PREFIX_DATABASE_10"),
            ("DatabaseName", "PREFIX_DATABASE_NAME"),
            ("DatabaseConnectionString", "PREFIX_DATABASE_CONNECTION_STRING"),
            ("SSLCert", "PREFIX_SSL_CERT"),
            ("d", "PREFIX_D"),
            ("database", "PREFIX_DATABASE"),
            ("databaseCert", "PREFIX_DATABASE_CERT"),
            ("database_cert", "PREFIX_DATABASE_CERT"),
            ("database_10", "PREFIX_DATABASE_10"),
        ];

        for (field, expected) in cases {
            assert_eq!(field_name_to_var("PREFIX_", field), expected, "field {field}");
        }
    }

    #[test]
    fn test_empty_prefix() {
        assert_eq!(field_name_to_var("", "is_dog"), "IS_DOG");
        assert_eq!(field_name_to_var("", "IsDog"), "IS_DOG");
    }

    #[test]
    fn test_raw_identifier() {
        assert_eq!(field_name_to_var("APP_", "r#type"), "APP_TYPE");
    }

    #[test]
    fn test_separators_collapse() {
        assert_eq!(field_name_to_var("", "db__pool___size"), "DB_POOL_SIZE");
        assert_eq!(field_name_to_var("", "_leading"), "LEADING");
        assert_eq!(field_name_to_var("", "trailing_"), "TRAILING");
    }

    #[test]
    fn test_non_ascii_is_skipped() {
        assert_eq!(field_name_to_var("", "größe"), "GR_E");
    }

    #[test]
    fn test_single_capital_before_digit() {
        assert_eq!(field_name_to_var("", "A1"), "A_1");
        assert_eq!(field_name_to_var("", "Http2Port"), "HTTP2_PORT");
    }

    #[test]
    fn test_normalize_prefix() {
        assert_eq!(normalize_prefix("APP"), "APP_");
        assert_eq!(normalize_prefix("APP_"), "APP_");
        assert_eq!(normalize_prefix(""), "");
        assert_eq!(normalize_prefix("_"), "_");
    }

    #[test]
    fn test_file_var() {
        assert_eq!(file_var("APP_NAME"), "APP_NAME_FILE");
    }

    proptest! {
        #[test]
        fn prop_deterministic(name in "[A-Za-z0-9_]{0,24}") {
            prop_assert_eq!(
                field_name_to_var("P_", &name),
                field_name_to_var("P_", &name)
            );
        }

        #[test]
        fn prop_output_is_screaming_snake(name in "[A-Za-z0-9_]{0,24}") {
            let var = field_name_to_var("", &name);

            prop_assert!(var
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_'));
            prop_assert!(!var.starts_with('_'));
            prop_assert!(!var.ends_with('_'));
            prop_assert!(!var.contains("__"));
        }

        #[test]
        fn prop_snake_case_round_trips(words in prop::collection::vec("[a-z][a-z0-9]{0,6}", 1..5)) {
            let field = words.join("_");
            prop_assert_eq!(field_name_to_var("", &field), field.to_ascii_uppercase());
        }

        #[test]
        fn prop_prefix_is_preserved(prefix in "[A-Z]{1,6}_", name in "[a-z]{1,8}") {
            let var = field_name_to_var(&prefix, &name);
            prop_assert!(var.starts_with(&prefix));
        }
    }
}
