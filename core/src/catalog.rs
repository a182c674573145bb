//! The book catalog.
//!
//! Owns every [`Book`] and is the only place a book is created, changed or
//! dropped. Circulation flips the loan fields through
//! [`Catalog::mark_borrowed`] and [`Catalog::mark_returned`].

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use libra_common::error::{ConflictReason, LibraryError, LibraryResult};
use libra_common::models::book::{Book, BookUpdate, NewBook};
use libra_common::models::id::{BookId, IdSequence, UserId};

use crate::{search, validate};

#[derive(Debug, Default)]
pub struct Catalog {
    books: BTreeMap<BookId, Book>,
    ids: IdSequence,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalogues a new, available book and returns its id.
    pub fn add_book(&mut self, new: NewBook) -> LibraryResult<BookId> {
        validate::required("title", &new.title)?;
        validate::required("author", &new.author)?;

        let id = BookId::new(self.ids.next_raw()?);
        self.books.insert(id, Book::from_new(id, new));
        Ok(id)
    }

    /// Drops a book from the catalog. A book out on loan cannot be removed.
    pub fn remove_book(&mut self, id: BookId) -> LibraryResult<Book> {
        if self.get(id)?.is_on_loan() {
            return Err(ConflictReason::BookOnLoan.into());
        }
        self.books
            .remove(&id)
            .ok_or_else(|| LibraryError::book_not_found(id))
    }

    /// Applies the supplied fields. Nothing changes if any of them is invalid.
    pub fn update_book(&mut self, id: BookId, update: BookUpdate) -> LibraryResult<&Book> {
        self.get(id)?;
        if let Some(title) = &update.title {
            validate::required("title", title)?;
        }
        if let Some(author) = &update.author {
            validate::required("author", author)?;
        }
        if let Some(rating) = update.rating {
            validate::rating(rating)?;
        }

        let book = self.get_mut(id)?;
        if let Some(title) = update.title {
            book.title = title;
        }
        if let Some(author) = update.author {
            book.author = author;
        }
        if let Some(year) = update.year {
            book.year = year;
        }
        if let Some(isbn) = update.isbn {
            book.isbn = isbn;
        }
        if let Some(genre) = update.genre {
            book.genre = genre;
        }
        if let Some(rating) = update.rating {
            book.rating = rating;
        }
        Ok(&*book)
    }

    pub fn get(&self, id: BookId) -> LibraryResult<&Book> {
        self.books
            .get(&id)
            .ok_or_else(|| LibraryError::book_not_found(id))
    }

    /// Books whose title, author or genre contain `query`, ignoring case,
    /// ordered by title. A blank query matches nothing.
    pub fn find_books(&self, query: &str) -> Vec<&Book> {
        let Some(needle) = search::needle(query) else {
            return Vec::new();
        };

        let mut found: Vec<&Book> = self
            .books
            .values()
            .filter(|book| {
                search::contains(&book.title, &needle)
                    || search::contains(&book.author, &needle)
                    || search::contains(&book.genre, &needle)
            })
            .collect();
        found.sort_by(|a, b| by_title(a, b));
        found
    }

    /// Every book, ordered by title. Clone the iterator to walk it again.
    pub fn list_books(&self) -> impl Iterator<Item = &Book> + Clone + '_ {
        let mut all: Vec<&Book> = self.books.values().collect();
        all.sort_by(|a, b| by_title(a, b));
        all.into_iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn available_count(&self) -> usize {
        self.books.values().filter(|book| book.available).count()
    }

    pub(crate) fn mark_borrowed(
        &mut self,
        id: BookId,
        user: UserId,
        at: DateTime<Utc>,
    ) -> LibraryResult<()> {
        let book = self.get_mut(id)?;
        if book.is_on_loan() {
            return Err(ConflictReason::AlreadyBorrowed.into());
        }
        book.available = false;
        book.borrowed_by = Some(user);
        book.borrowed_at = Some(at);
        Ok(())
    }

    pub(crate) fn mark_returned(&mut self, id: BookId) -> LibraryResult<()> {
        let book = self.get_mut(id)?;
        if book.available {
            return Err(ConflictReason::NotBorrowed.into());
        }
        book.available = true;
        book.borrowed_by = None;
        book.borrowed_at = None;
        Ok(())
    }

    fn get_mut(&mut self, id: BookId) -> LibraryResult<&mut Book> {
        self.books
            .get_mut(&id)
            .ok_or_else(|| LibraryError::book_not_found(id))
    }
}

fn by_title(a: &Book, b: &Book) -> std::cmp::Ordering {
    a.title.cmp(&b.title).then(a.id.cmp(&b.id))
}
