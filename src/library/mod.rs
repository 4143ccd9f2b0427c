//! Book catalog management.
//!
//! The catalog holds books in memory for the lifetime of the process.
//! Seed files can preload it at startup.
//!
//! # Seed file layout
//!
//! ```yaml
//! - isbn: "123456"
//!   title: Introduction to the Theory of Computation
//!   author: Michael Sipser
//!   publication_year: 2012
//! ```

pub mod catalog;
pub mod error;
pub mod seed;

pub use catalog::{Catalog, Clock, LoanOutcome, SeedReport, MIN_ISBN_LENGTH};
pub use error::{CatalogError, ConflictError, ErrorKind, ValidationError};
pub use seed::load_seed;
