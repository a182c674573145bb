use chrono::{DateTime, Utc};

use super::id::{BookId, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct Borrowing {
    pub book_id: BookId,
    pub user_id: UserId,
    pub borrowed_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
    /// `None` while the book is still out.
    pub returned_at: Option<DateTime<Utc>>,
}

impl Borrowing {
    pub fn is_open(&self) -> bool {
        self.returned_at.is_none()
    }

    /// Whole days past `due_at`, zero before that.
    pub fn overdue_days(&self, at: DateTime<Utc>) -> u32 {
        whole_days_late(self.due_at, at)
    }

    /// Open and at least one whole day past due, the same rule the fine uses.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.is_open() && self.overdue_days(now) > 0
    }
}

/// Whole days elapsed between `due_at` and `at`, never negative.
pub fn whole_days_late(due_at: DateTime<Utc>, at: DateTime<Utc>) -> u32 {
    let late = (at - due_at).num_days();
    u32::try_from(late.max(0)).unwrap_or(u32::MAX)
}

/// Charge raised when a book is returned after its loan period.
#[derive(Debug, Clone, PartialEq)]
pub struct Fine {
    pub book_id: BookId,
    pub user_id: UserId,
    pub overdue_days: u32,
    pub amount: f64,
    pub issued_at: DateTime<Utc>,
}
