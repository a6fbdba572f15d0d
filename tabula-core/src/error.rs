//! Error types for Tabula

use thiserror::Error;

/// The main error type for Tabula operations
#[derive(Error, Debug)]
pub enum Error {
    /// A literal the renderer has no SQL representation for
    #[error("Unsupported value in SQL builder ({type_name})")]
    UnsupportedValue { type_name: &'static str },

    /// UPDATE rendered without any SET entries
    #[error("UPDATE statements require at least one column in set().")]
    EmptySet { table: String },

    /// CREATE TABLE rendered from a definition without columns
    #[error("Table \"{table}\" must define at least one column.")]
    MissingColumns { table: String },

    /// INSERT column and value counts differ
    #[error("INSERT into '{table}' has {columns} column(s) but {values} value(s)")]
    ArityMismatch {
        table: String,
        columns: usize,
        values: usize,
    },

    /// Invalid query configuration
    #[error("Invalid query: {message}")]
    InvalidQuery { message: String },

    /// Unknown comparison operator symbol
    #[error("Invalid operator: '{0}'")]
    InvalidOperator(String),

    /// Column not found error
    #[error("Column '{column}' not found in table '{table}'")]
    ColumnNotFound { table: String, column: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience Result type for Tabula operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new unsupported value error
    pub fn unsupported_value(type_name: &'static str) -> Self {
        Self::UnsupportedValue { type_name }
    }

    /// Create a new empty SET error
    pub fn empty_set(table: impl Into<String>) -> Self {
        Self::EmptySet {
            table: table.into(),
        }
    }

    /// Create a new missing columns error
    pub fn missing_columns(table: impl Into<String>) -> Self {
        Self::MissingColumns {
            table: table.into(),
        }
    }

    /// Create a new invalid query error
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::InvalidQuery {
            message: message.into(),
        }
    }

    /// Create a new column not found error
    pub fn column_not_found(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::ColumnNotFound {
            table: table.into(),
            column: column.into(),
        }
    }
}
