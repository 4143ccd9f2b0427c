//! bookshelf - In-memory book catalog
//!
//! Add books with validated metadata, borrow them, return them, and list
//! the ones still on the shelf.
//!
//! # Modules
//!
//! - `domain`: Data structures (Book, Isbn, CatalogEvent)
//! - `library`: The catalog, its lending rules and error taxonomy
//! - `config`: Configuration discovery (reference year, seed file)
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```
//! use bookshelf::{Book, Catalog, Clock, Isbn};
//!
//! let mut catalog = Catalog::with_clock(Clock::Fixed(2024));
//! catalog
//!     .add_book(Book::new(123456u64, "Introduction to the Theory of Computation", "Michael Sipser", 2012))
//!     .unwrap();
//!
//! let outcome = catalog.borrow_book(&Isbn::from(123456u64)).unwrap();
//! assert_eq!(outcome.to_string(), "Book borrowed successfully");
//! assert!(catalog.show_available_books().is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod library;

// Re-export main types at crate root for convenience
pub use domain::{Book, CatalogEvent, EventType, Isbn};
pub use library::{
    Catalog, CatalogError, Clock, ConflictError, ErrorKind, LoanOutcome, ValidationError,
};
