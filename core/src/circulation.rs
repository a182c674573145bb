//! Lending workflow.
//!
//! Circulation owns the borrowing ledger and the fine ledger. It never touches
//! books or members directly: every change goes through the mutation
//! operations of [`Catalog`] and [`Membership`], and only after every
//! precondition has been checked, so a rejected call leaves all three
//! components exactly as they were.

use chrono::{DateTime, Duration, Utc};
use libra_common::config::Config;
use libra_common::error::{ConflictReason, LibraryError, LibraryResult};
use libra_common::models::id::{BookId, UserId};
use libra_common::models::loan::{whole_days_late, Borrowing, Fine};

use crate::catalog::Catalog;
use crate::membership::Membership;
use crate::statistics::Statistics;

/// Outcome of a successful return.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnReceipt {
    /// The borrowing, now closed.
    pub borrowing: Borrowing,
    /// Present only when the book came back late.
    pub fine: Option<Fine>,
}

impl ReturnReceipt {
    pub fn fine_amount(&self) -> f64 {
        self.fine.as_ref().map_or(0.0, |fine| fine.amount)
    }
}

#[derive(Debug)]
pub struct Circulation {
    borrowings: Vec<Borrowing>,
    fines: Vec<Fine>,
    loan_period_days: u32,
    fine_per_day: f64,
}

impl Circulation {
    pub fn new(config: &Config) -> Self {
        Self {
            borrowings: Vec::new(),
            fines: Vec::new(),
            loan_period_days: config.loan_period_days,
            fine_per_day: config.fine_per_day,
        }
    }

    /// Lends `book_id` to `user_id`.
    ///
    /// Gates, in order:
    /// 1. the book exists
    /// 2. the book is available
    /// 3. the user exists and is active
    /// 4. the user is below their borrow limit
    pub fn borrow(
        &mut self,
        catalog: &mut Catalog,
        membership: &mut Membership,
        book_id: BookId,
        user_id: UserId,
        now: DateTime<Utc>,
    ) -> LibraryResult<&Borrowing> {
        let book = catalog.get(book_id)?;
        if book.is_on_loan() {
            return Err(ConflictReason::AlreadyBorrowed.into());
        }

        let member = membership.get(user_id)?;
        if !member.active {
            return Err(ConflictReason::InactiveMember.into());
        }
        if !member.has_capacity() {
            return Err(LibraryError::LimitExceeded {
                user: user_id,
                limit: member.borrow_limit,
            });
        }

        catalog.mark_borrowed(book_id, user_id, now)?;
        if let Err(err) = membership.attach_book(user_id, book_id) {
            catalog.mark_returned(book_id)?;
            return Err(err);
        }

        self.borrowings.push(Borrowing {
            book_id,
            user_id,
            borrowed_at: now,
            due_at: now + self.loan_period(),
            returned_at: None,
        });
        let index = self.borrowings.len() - 1;
        Ok(&self.borrowings[index])
    }

    /// Takes `book_id` back, charging a fine when it is overdue.
    pub fn return_book(
        &mut self,
        catalog: &mut Catalog,
        membership: &mut Membership,
        book_id: BookId,
        now: DateTime<Utc>,
    ) -> LibraryResult<ReturnReceipt> {
        let book = catalog.get(book_id)?;
        if book.available {
            return Err(ConflictReason::NotBorrowed.into());
        }
        // Earliest open record first: the ledger is append-only.
        let Some(index) = self
            .borrowings
            .iter()
            .position(|loan| loan.book_id == book_id && loan.is_open())
        else {
            return Err(ConflictReason::NotBorrowed.into());
        };

        let borrower = book.borrowed_by.unwrap_or(self.borrowings[index].user_id);
        let overdue_days = self.borrowings[index].overdue_days(now);
        let fine = (overdue_days > 0).then(|| Fine {
            book_id,
            user_id: borrower,
            overdue_days,
            amount: f64::from(overdue_days) * self.fine_per_day,
            issued_at: now,
        });

        catalog.mark_returned(book_id)?;
        if membership.get(borrower).is_ok() {
            membership.detach_book(borrower, book_id)?;
        }

        let borrowing = &mut self.borrowings[index];
        borrowing.returned_at = Some(now);
        let borrowing = borrowing.clone();

        if let Some(fine) = &fine {
            self.fines.push(fine.clone());
        }

        Ok(ReturnReceipt { borrowing, fine })
    }

    /// Whole days past the loan period, never negative.
    pub fn overdue_days(&self, borrowed_at: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
        whole_days_late(borrowed_at + self.loan_period(), now)
    }

    pub fn statistics(&self, catalog: &Catalog, membership: &Membership) -> Statistics {
        Statistics::derive(
            catalog.len(),
            catalog.available_count(),
            membership.len(),
            self.open_loans().count(),
            self.total_fines(),
        )
    }

    /// Every borrowing ever made, oldest first.
    pub fn borrowings(&self) -> &[Borrowing] {
        &self.borrowings
    }

    pub fn open_loans(&self) -> impl Iterator<Item = &Borrowing> + '_ {
        self.borrowings.iter().filter(|loan| loan.is_open())
    }

    pub fn loans_of(&self, user_id: UserId) -> impl Iterator<Item = &Borrowing> + '_ {
        self.borrowings
            .iter()
            .filter(move |loan| loan.user_id == user_id)
    }

    pub fn overdue_loans(&self, now: DateTime<Utc>) -> impl Iterator<Item = &Borrowing> + '_ {
        self.borrowings
            .iter()
            .filter(move |loan| loan.is_overdue(now))
    }

    pub fn fines(&self) -> &[Fine] {
        &self.fines
    }

    pub fn total_fines(&self) -> f64 {
        self.fines.iter().map(|fine| fine.amount).sum()
    }

    fn loan_period(&self) -> Duration {
        Duration::days(i64::from(self.loan_period_days))
    }
}

impl Default for Circulation {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
