//! Validators for user supplied project options.

use crate::{
    config::Database,
    constants::{DB_CHOICES, DEFAULT_PROJECT_NAME, PYTHON_KEYWORDS, SUPPORTED_PYTHON_VERSIONS},
    error::{Error, Result},
};
use regex::Regex;
use std::sync::LazyLock;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex"));

static NON_IDENTIFIER_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("valid regex"));

/// Replaces every character that cannot appear in a Python identifier with `_`.
pub fn sanitize_identifier(raw: &str) -> String {
    NON_IDENTIFIER_CHARS.replace_all(raw, "_").into_owned()
}

/// Ensures the project name can be used as a Python package name.
pub fn validate_project_name(name: &str) -> Result<()> {
    if !IDENTIFIER.is_match(name) {
        return Err(Error::invalid_option(
            "name",
            name,
            format!(
                "only letters, digits and underscores are allowed and it cannot start with a digit \
                 (hint: try '{}')",
                sanitize_identifier(name)
            ),
        ));
    }
    // The distribution and image names are derived from the letters and digits.
    if !name.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err(Error::invalid_option(
            "name",
            name,
            format!(
                "at least one letter or digit is required (hint: try '{DEFAULT_PROJECT_NAME}')"
            ),
        ));
    }
    if PYTHON_KEYWORDS.contains(&name) {
        return Err(Error::invalid_option("name", name, "Python keywords are not allowed"));
    }
    Ok(())
}

/// Parses a database token into a [`Database`].
pub fn parse_database(value: &str) -> Result<Database> {
    value.parse::<Database>().map_err(|_| {
        Error::invalid_option(
            "db",
            value,
            format!("expected one of: {}", DB_CHOICES.join(", ")),
        )
    })
}

/// Ensures the Python version is one the generated project supports.
pub fn validate_python_version(version: &str) -> Result<()> {
    if SUPPORTED_PYTHON_VERSIONS.contains(&version) {
        Ok(())
    } else {
        Err(Error::invalid_option(
            "python_version",
            version,
            format!("expected one of: {}", SUPPORTED_PYTHON_VERSIONS.join(", ")),
        ))
    }
}

/// Rejects blank free-text values such as the description or author.
pub fn validate_not_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::invalid_option(field, value, "value cannot be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_identifiers() {
        for name in ["demo", "my_app", "_private", "App2"] {
            assert!(validate_project_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_non_identifiers_with_hint() {
        let err = validate_project_name("123-bad-name").unwrap_err();
        match err {
            Error::InvalidOption { field, reason, .. } => {
                assert_eq!(field, "name");
                assert!(reason.contains("try '123_bad_name'"));
            }
            other => panic!("Expected InvalidOption, got {other:?}"),
        }
        assert!(validate_project_name("my-app").is_err());
        assert!(validate_project_name("").is_err());
    }

    #[test]
    fn rejects_names_without_letters_or_digits() {
        for name in ["_", "__", "___"] {
            match validate_project_name(name) {
                Err(Error::InvalidOption { field, reason, .. }) => {
                    assert_eq!(field, "name");
                    assert!(reason.contains("try 'myproject'"));
                }
                other => panic!("Expected InvalidOption for {name}, got {other:?}"),
            }
        }
        assert!(validate_project_name("_a").is_ok());
    }

    #[test]
    fn rejects_python_keywords() {
        let err = validate_project_name("class").unwrap_err();
        assert!(err.to_string().contains("Python keywords"));
    }

    #[test]
    fn sanitizes_directory_names() {
        assert_eq!(sanitize_identifier("my-app.v2"), "my_app_v2");
        assert_eq!(sanitize_identifier("clean_name"), "clean_name");
    }

    #[test]
    fn parses_database_tokens() {
        assert_eq!(parse_database("postgres").unwrap(), Database::Postgres);
        assert_eq!(parse_database("none").unwrap(), Database::None);
        let err = parse_database("mysql").unwrap_err();
        assert!(err.to_string().contains("'db'"));
    }

    #[test]
    fn validates_python_versions() {
        assert!(validate_python_version("3.12").is_ok());
        assert!(validate_python_version("3.14").is_ok());
        assert!(validate_python_version("2.7").is_err());
        assert!(validate_python_version("latest").is_err());
    }

    #[test]
    fn rejects_blank_values() {
        assert!(validate_not_blank("author", "Jane").is_ok());
        assert!(validate_not_blank("author", "   ").is_err());
    }
}
