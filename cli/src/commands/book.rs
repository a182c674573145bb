use colored::*;
use libra_common::config::Config;
use libra_common::error::LibraryResult;
use libra_common::models::book::{Book, BookUpdate, NewBook};
use libra_core::Library;
use tracing::{debug, info, warn};

use crate::commands::BookAction;
use crate::mprint;
use crate::terminal::{format, print};

pub fn run(action: BookAction, library: &mut Library, cfg: &Config) -> LibraryResult<()> {
    match action {
        BookAction::Add {
            title,
            author,
            year,
            isbn,
            genre,
        } => {
            let id = library.add_book(NewBook::new(title, author, year, isbn, genre))?;
            info!("Book added with id {}", id.to_string().bold());
        }
        BookAction::Remove { id } => {
            let removed = library.remove_book(id)?;
            info!("Removed \"{}\" ({id})", removed.title);
        }
        BookAction::Update {
            id,
            title,
            author,
            year,
            isbn,
            genre,
            rating,
        } => {
            let update = BookUpdate {
                title,
                author,
                year,
                isbn,
                genre,
                rating,
            };
            if update.is_empty() {
                warn!("Nothing to update for book {id}");
                return Ok(());
            }
            let book = library.update_book(id, update)?;
            info!("Book {id} updated");
            print_books(&[book], cfg);
        }
        BookAction::Find { query } => {
            let query = query.join(" ");
            let found = library.find_books(&query);
            debug!(query = %query, hits = found.len(), "book search");
            print::header(&format!("books matching \"{query}\""), cfg.quiet);
            print_books(&found, cfg);
        }
        BookAction::List => {
            let books: Vec<&Book> = library.list_books().collect();
            print::header("catalog", cfg.quiet);
            print_books(&books, cfg);
        }
        BookAction::Show { id } => {
            let book = library.book(id)?;
            print_books(&[book], cfg);
        }
    }
    Ok(())
}

pub fn print_books(books: &[&Book], cfg: &Config) {
    if books.is_empty() {
        print::no_results("books");
        return;
    }

    for (idx, book) in books.iter().enumerate() {
        match cfg.quiet {
            0 => {
                print::tree_head(book.id, &book.title);
                print::as_tree_one_level(format::book_to_details(book));
                if idx + 1 != books.len() {
                    mprint!();
                }
            }
            _ => print::print_status(format!(
                "[{}] {} - {} ({}) {}",
                book.id,
                book.title,
                book.author,
                book.year,
                format::availability(book)
            )),
        }
    }
}
