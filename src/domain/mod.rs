//! Domain types for the book catalog.
//!
//! This module contains the core data structures:
//! - Book: A catalog entry and its identifier
//! - Events: Journal of successful catalog operations

pub mod book;
pub mod events;

// Re-export commonly used types
pub use book::{Book, Isbn};
pub use events::{CatalogEvent, EventType};
