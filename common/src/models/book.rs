use chrono::{DateTime, Utc};

use super::id::{BookId, UserId};

/// Rating a book starts with until someone changes it.
pub const DEFAULT_RATING: f32 = 4.2;

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub isbn: String,
    pub genre: String,
    /// `false` exactly while an open borrowing exists for this book.
    pub available: bool,
    pub borrowed_by: Option<UserId>,
    pub borrowed_at: Option<DateTime<Utc>>,
    pub rating: f32,
}

impl Book {
    pub fn from_new(id: BookId, new: NewBook) -> Self {
        Self {
            id,
            title: new.title,
            author: new.author,
            year: new.year,
            isbn: new.isbn,
            genre: new.genre,
            available: true,
            borrowed_by: None,
            borrowed_at: None,
            rating: DEFAULT_RATING,
        }
    }

    pub fn is_on_loan(&self) -> bool {
        !self.available
    }
}

/// Everything needed to catalogue a book.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub isbn: String,
    pub genre: String,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        isbn: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            isbn: isbn.into(),
            genre: genre.into(),
        }
    }
}

/// Partial update. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub isbn: Option<String>,
    pub genre: Option<String>,
    pub rating: Option<f32>,
}

impl BookUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
