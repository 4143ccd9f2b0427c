//! Lending Integration Tests
//!
//! Tests for borrow/return transitions and the available-books listing.

use bookshelf::{Book, Catalog, Clock, ErrorKind, EventType, Isbn, LoanOutcome};

fn sipser() -> Book {
    Book::new(
        123456u64,
        "Introduction to the Theory of Computation",
        "Michael Sipser",
        2012,
    )
}

fn martin() -> Book {
    Book::new(
        123457u64,
        "A Handbook of Agile Software Craftsmanship",
        "Robert C. Martin",
        2008,
    )
}

fn stocked() -> Catalog {
    let mut catalog = Catalog::with_clock(Clock::Fixed(2026));
    catalog.add_book(sipser()).unwrap();
    catalog.add_book(martin()).unwrap();
    catalog
}

fn isbns(catalog: &Catalog) -> Vec<String> {
    catalog
        .show_available_books()
        .iter()
        .map(|b| b.isbn.to_string())
        .collect()
}

#[test]
fn test_borrow_unknown_book() {
    let mut catalog = Catalog::new();

    let err = catalog.borrow_book(&Isbn::from(123456u64)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), "Book not found");
}

#[test]
fn test_borrow_available_book() {
    let mut catalog = stocked();

    let outcome = catalog.borrow_book(&Isbn::from(123456u64)).unwrap();
    assert_eq!(outcome, LoanOutcome::Borrowed);
    assert_eq!(outcome.to_string(), "Book borrowed successfully");
    assert!(catalog.get(&Isbn::from(123456u64)).unwrap().is_borrowed());
}

#[test]
fn test_borrow_twice() {
    let mut catalog = stocked();
    catalog.borrow_book(&Isbn::from(123456u64)).unwrap();

    let err = catalog.borrow_book(&Isbn::from(123456u64)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(err.to_string(), "Book is already borrowed");
}

#[test]
fn test_return_unknown_book() {
    let mut catalog = Catalog::new();

    let err = catalog.return_book(&Isbn::from(123456u64)).unwrap_err();
    assert_eq!(err.to_string(), "Book not found");
}

#[test]
fn test_return_not_borrowed() {
    let mut catalog = stocked();

    let err = catalog.return_book(&sipser().isbn).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(err.to_string(), "Book was not borrowed");
}

#[test]
fn test_return_borrowed_book() {
    let mut catalog = stocked();
    let isbn = sipser().isbn;
    catalog.borrow_book(&isbn).unwrap();

    let outcome = catalog.return_book(&isbn).unwrap();
    assert_eq!(outcome.to_string(), "Book is return successfully");

    // Borrowable again
    assert!(catalog.borrow_book(&isbn).is_ok());
}

#[test]
fn test_available_books_listing() {
    let mut catalog = stocked();
    assert_eq!(isbns(&catalog), vec!["123456", "123457"]);

    catalog.borrow_book(&Isbn::from(123456u64)).unwrap();
    assert_eq!(isbns(&catalog), vec!["123457"]);

    catalog.borrow_book(&Isbn::from(123457u64)).unwrap();
    assert!(catalog.show_available_books().is_empty());

    // Listing never changes the catalog
    assert_eq!(catalog.len(), 2);
}

#[test]
fn test_end_to_end_scenario() {
    let mut catalog = Catalog::with_clock(Clock::Fixed(2026));
    let a = Isbn::from(123456u64);
    let b = Isbn::from(123457u64);

    catalog.add_book(sipser()).unwrap();
    catalog.add_book(martin()).unwrap();

    catalog.borrow_book(&a).unwrap();
    assert_eq!(catalog.show_available_books(), vec![&martin()]);

    catalog.borrow_book(&b).unwrap();
    assert!(catalog.show_available_books().is_empty());

    catalog.return_book(&a).unwrap();
    assert_eq!(catalog.show_available_books(), vec![&sipser()]);

    let journal: Vec<_> = catalog.history().iter().map(|e| e.event_type).collect();
    assert_eq!(
        journal,
        vec![
            EventType::BookAdded,
            EventType::BookAdded,
            EventType::BookBorrowed,
            EventType::BookBorrowed,
            EventType::BookReturned,
        ]
    );
}

#[test]
fn test_failed_operations_do_not_mutate() {
    let mut catalog = stocked();
    let before = catalog.books().to_vec();

    let _ = catalog.return_book(&Isbn::from(123456u64));
    let _ = catalog.borrow_book(&Isbn::from(999999u64));
    let _ = catalog.add_book(sipser());

    assert_eq!(catalog.books(), before.as_slice());
    assert_eq!(catalog.history().len(), 2);
}
