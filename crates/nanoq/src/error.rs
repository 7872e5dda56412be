//! Error types for nanoq.

use thiserror::Error;

/// Errors from quantity construction and registry lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// Column name was empty.
    #[error("column name is empty")]
    EmptyName,

    /// Column name violates the NanoAOD branch-naming convention.
    #[error("invalid column name {name:?}: {reason}")]
    InvalidName {
        /// The offending name.
        name: String,
        /// What rule it broke.
        reason: String,
    },

    /// No quantity is registered under the given mnemonic.
    #[error("unknown mnemonic: {0}")]
    UnknownMnemonic(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, QuantityError>;
