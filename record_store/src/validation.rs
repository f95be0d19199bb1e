//! Validation module
//!
//! Table and column names are spliced into SQL text rather than bound, so
//! every identifier must pass through here before it reaches a statement.
//! Identifiers are trusted configuration, never unvalidated external input.

use std::fmt;

/// Validation errors for database identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name contains invalid characters (only alphanumeric and underscore allowed)
    InvalidCharacters(String),
    /// Name is too long
    TooLong {
        name: String,
        length: usize,
        max_length: usize,
    },
    /// Name is empty
    Empty,
    /// Name starts with invalid character (must start with letter or underscore)
    InvalidStartCharacter(String),
    /// Name is a reserved SQL keyword
    ReservedKeyword(String),
    /// Join keyword is not one of the supported kinds
    UnknownJoinKeyword(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidCharacters(name) => {
                write!(f, "Invalid characters in name '{}': only alphanumeric characters and underscores are allowed", name)
            }
            ValidationError::TooLong {
                name,
                length,
                max_length,
            } => {
                write!(
                    f,
                    "Name '{}' is too long: {} characters (max {})",
                    name, length, max_length
                )
            }
            ValidationError::Empty => {
                write!(f, "Name cannot be empty")
            }
            ValidationError::InvalidStartCharacter(name) => {
                write!(f, "Name '{}' must start with a letter or underscore", name)
            }
            ValidationError::ReservedKeyword(name) => {
                write!(f, "Name '{}' is a reserved SQL keyword", name)
            }
            ValidationError::UnknownJoinKeyword(name) => {
                write!(
                    f,
                    "Unknown join keyword '{}' (expected 'inner', 'left' or 'cross')",
                    name
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validated table name that is safe to use in SQL queries
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedTableName(String);

impl ValidatedTableName {
    /// SQLite has no hard identifier limit; this keeps names bounded anyway.
    const MAX_LENGTH: usize = 128;

    /// Create a new validated table name
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Self::validate_identifier(name)?;
        Ok(Self(name.to_string()))
    }

    /// Get the validated name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the validated name as a String
    pub fn into_string(self) -> String {
        self.0
    }

    /// Common validation logic for SQL identifiers
    fn validate_identifier(name: &str) -> Result<(), ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::Empty);
        }

        if name.len() > Self::MAX_LENGTH {
            return Err(ValidationError::TooLong {
                name: name.to_string(),
                length: name.len(),
                max_length: Self::MAX_LENGTH,
            });
        }

        let first_char = name.chars().next().ok_or(ValidationError::Empty)?;
        if !first_char.is_ascii_alphabetic() && first_char != '_' {
            return Err(ValidationError::InvalidStartCharacter(name.to_string()));
        }

        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ValidationError::InvalidCharacters(name.to_string()));
        }

        if Self::is_reserved_keyword(name) {
            return Err(ValidationError::ReservedKeyword(name.to_string()));
        }

        Ok(())
    }

    /// Check if a name is a reserved SQL keyword
    fn is_reserved_keyword(name: &str) -> bool {
        // SQLite reserved keywords that should not be used as identifiers
        const RESERVED_KEYWORDS: &[&str] = &[
            // SQL Standard keywords
            "SELECT",
            "INSERT",
            "UPDATE",
            "DELETE",
            "FROM",
            "WHERE",
            "JOIN",
            "INNER",
            "LEFT",
            "RIGHT",
            "FULL",
            "OUTER",
            "CROSS",
            "NATURAL",
            "ON",
            "USING",
            "AS",
            "AND",
            "OR",
            "NOT",
            "NULL",
            "IS",
            "CASE",
            "WHEN",
            "THEN",
            "ELSE",
            "END",
            "EXISTS",
            "IN",
            "LIKE",
            "GLOB",
            "BETWEEN",
            "ESCAPE",
            "ORDER",
            "BY",
            "GROUP",
            "HAVING",
            "LIMIT",
            "OFFSET",
            "UNION",
            "ALL",
            "DISTINCT",
            "VALUES",
            "SET",
            "INTO",
            "CREATE",
            "DROP",
            "ALTER",
            "TABLE",
            "INDEX",
            "VIEW",
            "TRIGGER",
            "PRIMARY",
            "KEY",
            "FOREIGN",
            "REFERENCES",
            "UNIQUE",
            "CHECK",
            "DEFAULT",
            "CONSTRAINT",
            "COLUMN",
            "ADD",
            "RENAME",
            "TO",
            "COLLATE",
            "AUTOINCREMENT",
            // SQLite specific keywords
            "PRAGMA",
            "VACUUM",
            "ATTACH",
            "DETACH",
            "TRANSACTION",
            "BEGIN",
            "COMMIT",
            "ROLLBACK",
            "SAVEPOINT",
            "RELEASE",
            "REPLACE",
            "CONFLICT",
            "ABORT",
            "FAIL",
            "IGNORE",
            "INSTEAD",
            "TEMP",
            "TEMPORARY",
            "EXPLAIN",
            "ANALYZE",
            "CAST",
            "CURRENT_DATE",
            "CURRENT_TIME",
            "CURRENT_TIMESTAMP",
        ];

        RESERVED_KEYWORDS.contains(&name.to_ascii_uppercase().as_str())
    }
}

impl fmt::Display for ValidatedTableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated field name that is safe to use in SQL queries
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedFieldName(String);

impl ValidatedFieldName {
    /// Create a new validated field name
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        ValidatedTableName::validate_identifier(name)?;
        Ok(Self(name.to_string()))
    }

    /// Get the validated name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the validated name as a String
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ValidatedFieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
