//! Catalog activity journal.
//!
//! Every successful add/borrow/return is recorded as an immutable event.
//! The journal lives in memory alongside the catalog and is never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::book::Isbn;

/// A single entry in the catalog journal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEvent {
    /// Unique identifier for this event
    pub id: Uuid,

    /// When this event occurred (ISO 8601)
    pub timestamp: DateTime<Utc>,

    /// Book the event refers to
    pub isbn: Isbn,

    /// Type of event
    pub event_type: EventType,
}

impl CatalogEvent {
    /// Create a new event with the current timestamp
    pub fn new(isbn: Isbn, event_type: EventType) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            isbn,
            event_type,
        }
    }
}

impl std::fmt::Display for CatalogEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.timestamp.to_rfc3339(),
            self.event_type,
            self.isbn
        )
    }
}

/// Types of catalog events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// A book entered the catalog
    BookAdded,

    /// A book was lent out
    BookBorrowed,

    /// A book came back
    BookReturned,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventType::BookAdded => write!(f, "added"),
            EventType::BookBorrowed => write!(f, "borrowed"),
            EventType::BookReturned => write!(f, "returned"),
        }
    }
}
