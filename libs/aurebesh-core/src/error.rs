//! Error types for aurebesh-core.

use thiserror::Error;

/// Result type alias using SymbolError.
pub type Result<T> = std::result::Result<T, SymbolError>;

/// Errors that can occur while building a symbol table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SymbolError {
    #[error("empty token for entry {name}")]
    EmptyToken { name: String },

    #[error("duplicate token {token:?}")]
    DuplicateToken { token: String },

    #[error("token {token:?} must be {expected} character(s) long for kind {kind}")]
    InvalidLength {
        token: String,
        kind: &'static str,
        expected: usize,
    },

    #[error("token {token:?} is not lowercase")]
    NotLowercase { token: String },

    #[error("digit token {token:?} is not an ASCII digit")]
    InvalidDigit { token: String },

    #[error("token {token:?} contains whitespace")]
    Whitespace { token: String },
}

/// Errors raised when trainer settings are out of range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}
