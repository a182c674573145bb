use chrono::{DateTime, Utc};

use super::id::{BookId, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: UserId,
    pub name: String,
    pub surname: String,
    pub birth_year: i32,
    pub phone: String,
    pub email: String,
    pub active: bool,
    pub borrow_limit: usize,
    /// Books currently held, in the order they were borrowed. No duplicates.
    pub borrowed: Vec<BookId>,
    pub registered_at: DateTime<Utc>,
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }

    pub fn holds(&self, book: BookId) -> bool {
        self.borrowed.contains(&book)
    }

    pub fn has_capacity(&self) -> bool {
        self.borrowed.len() < self.borrow_limit
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMember {
    pub name: String,
    pub surname: String,
    pub birth_year: i32,
    pub phone: String,
    pub email: String,
}

impl NewMember {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        birth_year: i32,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            birth_year,
            phone: phone.into(),
            email: email.into(),
        }
    }
}

/// Partial update. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberUpdate {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub birth_year: Option<i32>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub active: Option<bool>,
    pub borrow_limit: Option<usize>,
}

impl MemberUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
