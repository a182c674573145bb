use std::fmt;

use thiserror::Error;

use crate::models::id::{BookId, UserId};

/// The kind of entity an identifier refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Book,
    User,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Book => write!(f, "book"),
            Self::User => write!(f, "user"),
        }
    }
}

/// A state precondition that did not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConflictReason {
    #[error("already borrowed")]
    AlreadyBorrowed,
    #[error("not borrowed")]
    NotBorrowed,
    #[error("inactive")]
    InactiveMember,
    #[error("book is on loan")]
    BookOnLoan,
    #[error("user still holds books")]
    MemberHasLoans,
    #[error("no identifiers left")]
    IdsExhausted,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LibraryError {
    /// A required field was missing or malformed.
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: u32 },
    #[error("{0}")]
    Conflict(ConflictReason),
    #[error("user {user} reached the borrow limit of {limit}")]
    LimitExceeded { user: UserId, limit: usize },
}

impl LibraryError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn book_not_found(id: BookId) -> Self {
        Self::NotFound {
            kind: EntityKind::Book,
            id: id.get(),
        }
    }

    pub fn user_not_found(id: UserId) -> Self {
        Self::NotFound {
            kind: EntityKind::User,
            id: id.get(),
        }
    }
}

impl From<ConflictReason> for LibraryError {
    fn from(reason: ConflictReason) -> Self {
        Self::Conflict(reason)
    }
}

pub type LibraryResult<T> = Result<T, LibraryError>;
