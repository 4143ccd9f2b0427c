//! Command-line interface for bookshelf.
//!
//! Provides commands for listing available books, validating seed files,
//! running an interactive lending session, and showing configuration.
//! The catalog only lives for the duration of one invocation.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::{config, ResolvedConfig};
use crate::domain::{Book, Isbn};
use crate::library::{load_seed, Catalog, CatalogError};

pub mod shell;

/// bookshelf - In-memory book catalog
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available books from a seed file
    Available {
        /// Seed file (YAML or JSON); falls back to the configured seed
        #[arg(short, long)]
        seed: Option<PathBuf>,
    },

    /// Check every book in a seed file against the catalog rules
    Validate {
        /// Seed file to check
        seed: PathBuf,
    },

    /// Start an interactive lending session on stdin
    Shell {
        /// Seed file (YAML or JSON); falls back to the configured seed
        #[arg(short, long)]
        seed: Option<PathBuf>,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let config = config()?;

        match self.command {
            Commands::Available { seed } => list_available(config, seed),
            Commands::Validate { seed } => validate_seed(config, &seed),
            Commands::Shell { seed } => run_shell(config, seed),
            Commands::Config => show_config(config),
        }
    }
}

/// Build a catalog from the given or configured seed file
fn open_catalog(config: &ResolvedConfig, seed: Option<PathBuf>) -> Result<Catalog> {
    let mut catalog = Catalog::with_clock(config.clock);

    if let Some(path) = seed.or_else(|| config.seed.clone()) {
        let books = load_seed(&path)?;
        let report = catalog.seed(books);
        for (book, err) in &report.rejected {
            tracing::warn!(isbn = %book.isbn, "Skipping seed entry: {}", err);
        }
        tracing::info!(added = report.added, seed = %path.display(), "Catalog seeded");
    }

    Ok(catalog)
}

fn print_books<'a>(books: impl IntoIterator<Item = &'a Book>) {
    let mut count = 0;
    for book in books {
        println!("{}", book);
        count += 1;
    }
    if count == 0 {
        println!("No books available.");
    }
}

/// List available books
fn list_available(config: &ResolvedConfig, seed: Option<PathBuf>) -> Result<()> {
    let catalog = open_catalog(config, seed)?;
    print_books(catalog.show_available_books());
    Ok(())
}

/// Report every seed entry the catalog turns away
fn validate_seed(config: &ResolvedConfig, path: &Path) -> Result<()> {
    let books = load_seed(path)?;
    let mut catalog = Catalog::with_clock(config.clock);
    let report = catalog.seed(books);

    for (book, err) in &report.rejected {
        println!("REJECTED {}: {}", display_isbn(&book.isbn), err);
    }
    println!(
        "{} accepted, {} rejected",
        report.added,
        report.rejected.len()
    );

    if !report.is_clean() {
        anyhow::bail!("{} has invalid entries", path.display());
    }
    Ok(())
}

fn display_isbn(isbn: &Isbn) -> String {
    if isbn.is_empty() {
        "<missing isbn>".to_string()
    } else {
        isbn.to_string()
    }
}

/// Read commands from stdin until EOF or `quit`
fn run_shell(config: &ResolvedConfig, seed: Option<PathBuf>) -> Result<()> {
    let mut catalog = open_catalog(config, seed)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("bookshelf shell. Type 'help' for commands.");
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        match shell::execute_line(&mut catalog, &line) {
            shell::Reply::Quit => break,
            shell::Reply::Output(text) => {
                if !text.is_empty() {
                    writeln!(stdout, "{}", text)?;
                }
            }
        }
    }

    Ok(())
}

/// Show resolved configuration
fn show_config(config: &ResolvedConfig) -> Result<()> {
    println!("bookshelf configuration");
    println!("=======================");
    match &config.config_file {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (none found)"),
    }
    println!("Reference year: {:?}", config.clock);
    match &config.seed {
        Some(path) => println!("Seed: {}", path.display()),
        None => println!("Seed: (none)"),
    }
    println!("Log level: {}", config.log_level);
    Ok(())
}

/// Render a catalog error for the terminal
pub fn describe_error(err: &CatalogError) -> String {
    format!("Error: {}", err)
}
