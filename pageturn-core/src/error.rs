//! Error types for Pageturn Core

use thiserror::Error;

/// Result type alias using PageturnError
pub type Result<T> = std::result::Result<T, PageturnError>;

/// Top-level error type for all Pageturn operations
#[derive(Debug, Error)]
pub enum PageturnError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Support error: {0}")]
    Support(#[from] SupportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while building a catalog from seed or file data
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Book id must not be empty")]
    EmptyId,

    #[error("Duplicate book id: {0}")]
    DuplicateId(String),

    #[error("Rating {rating} of book {id} is outside 0..=5")]
    InvalidRating { id: String, rating: f64 },

    #[error("Price of book {id} must be a non-negative number")]
    InvalidPrice { id: String },

    #[error("Book {0} must have at least one page")]
    ZeroPages(String),
}

/// Errors for user-supplied selector values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    #[error("Unknown sort mode: {0}")]
    UnknownSortMode(String),
}

/// Errors for the support contact form
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SupportError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}
