//! Line-oriented lending session.
//!
//! Commands:
//! - `add ISBN|TITLE|AUTHOR|YEAR`
//! - `borrow ISBN`, `return ISBN`
//! - `list` (available books), `all`, `history`
//! - `help`, `quit`

use crate::domain::{Book, Isbn};
use crate::library::Catalog;

use super::describe_error;

const HELP: &str = "\
add ISBN|TITLE|AUTHOR|YEAR  add a book
borrow ISBN                 borrow a book
return ISBN                 return a book
list                        show available books
all                         show every book
history                     show the activity journal
quit                        leave the shell";

/// What the shell should do after a line
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Output(String),
    Quit,
}

/// Run one shell command against the catalog
pub fn execute_line(catalog: &mut Catalog, line: &str) -> Reply {
    let line = line.trim();
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    let text = match command.to_lowercase().as_str() {
        "" => String::new(),
        "quit" | "exit" => return Reply::Quit,
        "help" => HELP.to_string(),
        "add" => match parse_book(rest) {
            Ok(book) => match catalog.add_book(book) {
                Ok(stored) => format!("Added {}", stored),
                Err(e) => describe_error(&e),
            },
            Err(usage) => usage,
        },
        "borrow" => match catalog.borrow_book(&isbn_arg(rest)) {
            Ok(outcome) => outcome.to_string(),
            Err(e) => describe_error(&e),
        },
        "return" => match catalog.return_book(&isbn_arg(rest)) {
            Ok(outcome) => outcome.to_string(),
            Err(e) => describe_error(&e),
        },
        "list" => render(catalog.show_available_books()),
        "all" => render(catalog.books().iter().map(|b| {
            let state = if b.is_borrowed() { "borrowed" } else { "available" };
            format!("{} [{}]", b, state)
        })),
        "history" => render(catalog.history()),
        other => format!("Unknown command: {} (try 'help')", other),
    };

    Reply::Output(text)
}

fn isbn_arg(rest: &str) -> Isbn {
    rest.parse().unwrap_or_default()
}

/// Parse `ISBN|TITLE|AUTHOR|YEAR`; blank fields are left for the catalog to reject
fn parse_book(rest: &str) -> Result<Book, String> {
    let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
    let [isbn, title, author, year] = fields.as_slice() else {
        return Err("Usage: add ISBN|TITLE|AUTHOR|YEAR".to_string());
    };

    let year = if year.is_empty() {
        0
    } else {
        year.parse::<i32>()
            .map_err(|_| format!("Invalid publication year: {}", year))?
    };

    Ok(Book::new(*isbn, *title, *author, year))
}

fn render<T: std::fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    let lines: Vec<String> = items.into_iter().map(|i| i.to_string()).collect();
    if lines.is_empty() {
        "(empty)".to_string()
    } else {
        lines.join("\n")
    }
}
