//! Error types for Salesdeck core operations
//!
//! Display logic over valid in-memory data has very few real failure modes.
//! Missing values, stale selections and empty result sets are normal states,
//! not errors; only misuse of a page configuration and bad input data are.

use crate::field::EntityKind;
use thiserror::Error;

/// List engine errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ListError {
    #[error("Filter not declared for field {field}")]
    UndeclaredFilter { field: String },

    #[error("Filter on {field} is {declared}, cannot apply {attempted} selection")]
    FilterKindMismatch {
        field: String,
        declared: &'static str,
        attempted: &'static str,
    },

    #[error("Rows per page must be > 0")]
    InvalidRowsPerPage,

    #[error("Column {field} is not sortable")]
    UnsortableField { field: String },

    #[error("Column index {index} out of range (page has {count} columns)")]
    ColumnOutOfRange { index: usize, count: usize },
}

/// Dataset loading errors.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate {entity} id: {id}")]
    DuplicateId { entity: EntityKind, id: String },

    #[error("Empty {entity} id at position {index}")]
    EmptyId { entity: EntityKind, index: usize },
}

/// Result type for list engine operations.
pub type ListResult<T> = Result<T, ListError>;
