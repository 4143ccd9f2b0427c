//! Catalog error taxonomy.
//!
//! All errors are synchronous and non-retryable: they reflect bad input or
//! a book in the wrong state, never a transient condition.

use thiserror::Error;

use crate::domain::Isbn;

/// Errors returned by catalog operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Book not found")]
    NotFound { isbn: Isbn },

    #[error(transparent)]
    Conflict(#[from] ConflictError),
}

impl CatalogError {
    /// Coarse category of the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Validation(_) => ErrorKind::Validation,
            CatalogError::NotFound { .. } => ErrorKind::NotFound,
            CatalogError::Conflict(_) => ErrorKind::Conflict,
        }
    }
}

/// Rejections from `Catalog::add_book`, in the order they are checked
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields (ISBN, title, author, publicationYear) are required")]
    MissingFields,

    #[error("The ISBN number length should be greater than 5")]
    IsbnTooShort { length: usize },

    #[error("Write the valid publication year in the past")]
    FutureYear { year: i32, current_year: i32 },

    #[error("The same ISBN number book is already present")]
    DuplicateIsbn { isbn: Isbn },
}

/// A book exists but is in the wrong state for the transition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConflictError {
    #[error("Book is already borrowed")]
    AlreadyBorrowed { isbn: Isbn },

    #[error("Book was not borrowed")]
    NotBorrowed { isbn: Isbn },
}

/// Error category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
}
