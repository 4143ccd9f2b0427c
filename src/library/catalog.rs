//! Catalog of books and the lending rules.
//!
//! Books are kept in insertion order. Nothing is ever removed; after a book
//! is added only its borrowed flag changes.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::{CatalogError, ConflictError, ValidationError};
use crate::domain::{Book, CatalogEvent, EventType, Isbn};

/// Minimum number of characters in an identifier
pub const MIN_ISBN_LENGTH: usize = 6;

/// Source of the "current year" used to reject future publication years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Clock {
    /// Local wall-clock date
    #[default]
    System,

    /// Pinned year
    Fixed(i32),
}

impl Clock {
    /// The year considered "now"
    pub fn current_year(&self) -> i32 {
        match self {
            Clock::System => chrono::Local::now().year(),
            Clock::Fixed(year) => *year,
        }
    }
}

/// Result of a successful borrow or return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanOutcome {
    /// The book was lent out
    Borrowed,

    /// The book is back on the shelf
    Returned,
}

impl LoanOutcome {
    /// Confirmation text shown to the caller
    pub fn message(&self) -> &'static str {
        match self {
            LoanOutcome::Borrowed => "Book borrowed successfully",
            LoanOutcome::Returned => "Book is return successfully",
        }
    }
}

impl std::fmt::Display for LoanOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of adding a batch of books
#[derive(Debug, Default)]
pub struct SeedReport {
    /// Number of books added
    pub added: usize,

    /// Books that were turned away, with the reason
    pub rejected: Vec<(Book, CatalogError)>,
}

impl SeedReport {
    /// Check if every book in the batch was added
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// In-memory book catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
    history: Vec<CatalogEvent>,
    clock: Clock,
}

impl Catalog {
    /// Create a new empty catalog using the system clock
    pub fn new() -> Self {
        Self::with_clock(Clock::System)
    }

    /// Create a new empty catalog with an explicit year source
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            books: Vec::new(),
            history: Vec::new(),
            clock,
        }
    }

    /// Validate a book and append it to the catalog.
    ///
    /// Checks run in this order and the first failure wins:
    /// required fields, identifier length, publication year, uniqueness.
    pub fn add_book(&mut self, mut book: Book) -> Result<&Book, CatalogError> {
        if let Err(e) = self.validate(&book) {
            debug!(isbn = %book.isbn, error = %e, "Book rejected");
            return Err(e.into());
        }

        book.set_borrowed(false);
        info!(isbn = %book.isbn, title = %book.title, "Book added");
        self.record(book.isbn.clone(), EventType::BookAdded);
        self.books.push(book);

        let index = self.books.len() - 1;
        Ok(&self.books[index])
    }

    fn validate(&self, book: &Book) -> Result<(), ValidationError> {
        if !book.has_required_fields() {
            return Err(ValidationError::MissingFields);
        }

        let length = book.isbn.len();
        if length < MIN_ISBN_LENGTH {
            return Err(ValidationError::IsbnTooShort { length });
        }

        let current_year = self.clock.current_year();
        if book.publication_year > current_year {
            return Err(ValidationError::FutureYear {
                year: book.publication_year,
                current_year,
            });
        }

        if self.get(&book.isbn).is_some() {
            return Err(ValidationError::DuplicateIsbn {
                isbn: book.isbn.clone(),
            });
        }

        Ok(())
    }

    /// Lend out an available book
    pub fn borrow_book(&mut self, isbn: &Isbn) -> Result<LoanOutcome, CatalogError> {
        let book = self.find_mut(isbn)?;

        if book.is_borrowed() {
            debug!(%isbn, "Book is already borrowed");
            return Err(ConflictError::AlreadyBorrowed { isbn: isbn.clone() }.into());
        }

        book.set_borrowed(true);
        info!(%isbn, "Book borrowed");
        self.record(isbn.clone(), EventType::BookBorrowed);

        Ok(LoanOutcome::Borrowed)
    }

    /// Take back a borrowed book
    pub fn return_book(&mut self, isbn: &Isbn) -> Result<LoanOutcome, CatalogError> {
        let book = self.find_mut(isbn)?;

        if book.is_available() {
            debug!(%isbn, "Book was not borrowed");
            return Err(ConflictError::NotBorrowed { isbn: isbn.clone() }.into());
        }

        book.set_borrowed(false);
        info!(%isbn, "Book returned");
        self.record(isbn.clone(), EventType::BookReturned);

        Ok(LoanOutcome::Returned)
    }

    /// Snapshot of every available book, in insertion order
    pub fn show_available_books(&self) -> Vec<&Book> {
        self.books.iter().filter(|b| b.is_available()).collect()
    }

    /// Add every book of a batch, collecting rejections instead of stopping
    pub fn seed(&mut self, books: impl IntoIterator<Item = Book>) -> SeedReport {
        let mut report = SeedReport::default();

        for book in books {
            let candidate = book.clone();
            match self.add_book(book) {
                Ok(_) => report.added += 1,
                Err(e) => report.rejected.push((candidate, e)),
            }
        }

        report
    }

    /// All books, in insertion order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Get a book by identifier
    pub fn get(&self, isbn: &Isbn) -> Option<&Book> {
        self.books.iter().find(|b| &b.isbn == isbn)
    }

    /// Journal of successful operations, oldest first
    pub fn history(&self) -> &[CatalogEvent] {
        &self.history
    }

    /// Get the number of books
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn find_mut(&mut self, isbn: &Isbn) -> Result<&mut Book, CatalogError> {
        match self.books.iter_mut().find(|b| &b.isbn == isbn) {
            Some(book) => Ok(book),
            None => {
                debug!(%isbn, "Book not found");
                Err(CatalogError::NotFound { isbn: isbn.clone() })
            }
        }
    }

    fn record(&mut self, isbn: Isbn, event_type: EventType) {
        self.history.push(CatalogEvent::new(isbn, event_type));
    }
}
