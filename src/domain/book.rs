//! Book records and their identifiers.
//!
//! A `Book` is immutable after creation except for its borrowed flag, which
//! only the catalog flips.

use serde::{Deserialize, Serialize};

/// Book identifier (ISBN-like code)
///
/// Stored as text with surrounding whitespace removed; every conversion goes
/// through `Isbn::new`. Its length is the number of characters of that text.
/// Numeric identifiers are converted through their decimal representation
/// with `Isbn::from(u64)`. Seed files may write either form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawIsbn")]
pub struct Isbn(String);

/// Identifier as written in a seed file
#[derive(Deserialize)]
#[serde(untagged)]
enum RawIsbn {
    Text(String),
    Number(u64),
}

impl From<RawIsbn> for Isbn {
    fn from(raw: RawIsbn) -> Self {
        match raw {
            RawIsbn::Text(text) => Self::new(text),
            RawIsbn::Number(number) => Self::from(number),
        }
    }
}

impl Isbn {
    /// Create an identifier from text, trimming surrounding whitespace
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_string())
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the identifier
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// An empty identifier counts as missing
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<u64> for Isbn {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for Isbn {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Isbn {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl std::str::FromStr for Isbn {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl std::fmt::Display for Isbn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single catalog entry
///
/// Missing fields deserialize as empty so that seed files are rejected by
/// the catalog with the same error as any other incomplete book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier within a catalog
    #[serde(default)]
    pub isbn: Isbn,

    /// Book title
    #[serde(default)]
    pub title: String,

    /// Book author
    #[serde(default)]
    pub author: String,

    /// Year of publication (0 means missing)
    #[serde(default)]
    pub publication_year: i32,

    /// Whether the book is currently lent out
    #[serde(skip_deserializing, default)]
    borrowed: bool,
}

impl Book {
    /// Create a new, available book
    pub fn new(
        isbn: impl Into<Isbn>,
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: i32,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            publication_year,
            borrowed: false,
        }
    }

    /// Check that identifier, title, author and year are all present
    pub fn has_required_fields(&self) -> bool {
        !self.isbn.is_empty()
            && !self.title.trim().is_empty()
            && !self.author.trim().is_empty()
            && self.publication_year != 0
    }

    /// Check if the book is lent out
    pub fn is_borrowed(&self) -> bool {
        self.borrowed
    }

    /// Check if the book can be borrowed
    pub fn is_available(&self) -> bool {
        !self.borrowed
    }

    pub(crate) fn set_borrowed(&mut self, borrowed: bool) {
        self.borrowed = borrowed;
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.isbn, self.title, self.author, self.publication_year
        )
    }
}
