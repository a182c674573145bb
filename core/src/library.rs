//! # Library Facade
//!
//! The one type a driver needs. It owns the three components, the
//! configuration and the clock, and exposes the full call surface:
//!
//! * books: [`Library::add_book`], [`Library::remove_book`],
//!   [`Library::update_book`], [`Library::find_books`], [`Library::list_books`]
//! * members: [`Library::add_user`], [`Library::remove_user`],
//!   [`Library::update_user`], [`Library::find_users`], [`Library::list_users`]
//! * lending: [`Library::borrow`], [`Library::return_book`],
//!   [`Library::statistics`] and the loan queries
//!
//! Every mutating method takes `&mut self`, so a caller sharing one library
//! across threads has to put the whole aggregate behind a single lock.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use libra_common::clock::{Clock, SystemClock};
use libra_common::config::Config;
use libra_common::error::LibraryResult;
use libra_common::models::book::{Book, BookUpdate, NewBook};
use libra_common::models::id::{BookId, UserId};
use libra_common::models::loan::{Borrowing, Fine};
use libra_common::models::member::{Member, MemberUpdate, NewMember};

use crate::catalog::Catalog;
use crate::circulation::{Circulation, ReturnReceipt};
use crate::membership::Membership;
use crate::statistics::Statistics;

pub struct Library {
    catalog: Catalog,
    membership: Membership,
    circulation: Circulation,
    clock: Arc<dyn Clock>,
    config: Config,
}

impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library")
            .field("catalog", &self.catalog)
            .field("membership", &self.membership)
            .field("circulation", &self.circulation)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Library {
    /// A library that reads time from the system clock.
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            catalog: Catalog::new(),
            membership: Membership::new(config.default_borrow_limit),
            circulation: Circulation::new(&config),
            clock,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    // Catalog

    pub fn add_book(&mut self, new: NewBook) -> LibraryResult<BookId> {
        self.catalog.add_book(new)
    }

    pub fn remove_book(&mut self, id: BookId) -> LibraryResult<Book> {
        self.catalog.remove_book(id)
    }

    pub fn update_book(&mut self, id: BookId, update: BookUpdate) -> LibraryResult<&Book> {
        self.catalog.update_book(id, update)
    }

    pub fn book(&self, id: BookId) -> LibraryResult<&Book> {
        self.catalog.get(id)
    }

    pub fn find_books(&self, query: &str) -> Vec<&Book> {
        self.catalog.find_books(query)
    }

    pub fn list_books(&self) -> impl Iterator<Item = &Book> + Clone + '_ {
        self.catalog.list_books()
    }

    // Membership

    pub fn add_user(&mut self, new: NewMember) -> LibraryResult<UserId> {
        let now = self.clock.now();
        self.membership.add_user(new, now)
    }

    pub fn remove_user(&mut self, id: UserId) -> LibraryResult<Member> {
        self.membership.remove_user(id)
    }

    pub fn update_user(&mut self, id: UserId, update: MemberUpdate) -> LibraryResult<&Member> {
        self.membership.update_user(id, update)
    }

    pub fn user(&self, id: UserId) -> LibraryResult<&Member> {
        self.membership.get(id)
    }

    pub fn find_users(&self, query: &str) -> Vec<&Member> {
        self.membership.find_users(query)
    }

    pub fn list_users(&self) -> impl Iterator<Item = &Member> + Clone + '_ {
        self.membership.list_users()
    }

    // Circulation

    pub fn borrow(&mut self, book_id: BookId, user_id: UserId) -> LibraryResult<&Borrowing> {
        let now = self.clock.now();
        self.circulation.borrow(
            &mut self.catalog,
            &mut self.membership,
            book_id,
            user_id,
            now,
        )
    }

    pub fn return_book(&mut self, book_id: BookId) -> LibraryResult<ReturnReceipt> {
        let now = self.clock.now();
        self.circulation
            .return_book(&mut self.catalog, &mut self.membership, book_id, now)
    }

    pub fn statistics(&self) -> Statistics {
        self.circulation.statistics(&self.catalog, &self.membership)
    }

    /// Every borrowing ever recorded, oldest first.
    pub fn borrowings(&self) -> &[Borrowing] {
        self.circulation.borrowings()
    }

    pub fn open_loans(&self) -> impl Iterator<Item = &Borrowing> + '_ {
        self.circulation.open_loans()
    }

    pub fn loans_of(&self, user_id: UserId) -> impl Iterator<Item = &Borrowing> + '_ {
        self.circulation.loans_of(user_id)
    }

    /// Open loans past their due date at the clock's current time.
    pub fn overdue_loans(&self) -> impl Iterator<Item = &Borrowing> + '_ {
        self.circulation.overdue_loans(self.clock.now())
    }

    pub fn fines(&self) -> &[Fine] {
        self.circulation.fines()
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use libra_common::clock::ManualClock;

    fn library_at_new_year() -> (Library, Arc<ManualClock>) {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap();
        let clock = Arc::new(ManualClock::new(start));
        let library = Library::with_clock(Config::default(), clock.clone());
        (library, clock)
    }

    #[test]
    fn test_registration_time_comes_from_the_clock() {
        let (mut library, clock) = library_at_new_year();
        let id = library
            .add_user(NewMember::new("Jane", "Doe", 1990, "555", "j@x.com"))
            .unwrap();
        assert_eq!(library.user(id).unwrap().registered_at, clock.now());
    }

    #[test]
    fn test_fine_uses_elapsed_clock_time() {
        let (mut library, clock) = library_at_new_year();
        let book = library
            .add_book(NewBook::new("Dune", "Herbert", 1965, "ISBN1", "scifi"))
            .unwrap();
        let user = library
            .add_user(NewMember::new("Jane", "Doe", 1990, "555", "j@x.com"))
            .unwrap();

        library.borrow(book, user).unwrap();
        clock.advance_days(9);
        assert_eq!(library.overdue_loans().count(), 1);

        let receipt = library.return_book(book).unwrap();
        assert_eq!(receipt.fine_amount(), 1.0);
        assert_eq!(library.fines().len(), 1);
        assert_eq!(library.overdue_loans().count(), 0);
    }

    #[test]
    fn test_configured_policy_reaches_the_components() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap();
        let clock = Arc::new(ManualClock::new(start));
        let config = Config {
            fine_per_day: 2.0,
            loan_period_days: 14,
            default_borrow_limit: 1,
            ..Config::default()
        };
        let mut library = Library::with_clock(config, clock.clone());

        let book = library
            .add_book(NewBook::new("Dune", "Herbert", 1965, "ISBN1", "scifi"))
            .unwrap();
        let user = library
            .add_user(NewMember::new("Jane", "Doe", 1990, "555", "j@x.com"))
            .unwrap();
        assert_eq!(library.user(user).unwrap().borrow_limit, 1);

        let due = library.borrow(book, user).unwrap().due_at;
        assert_eq!(due, start + chrono::Duration::days(14));

        clock.advance_days(16);
        assert_eq!(library.return_book(book).unwrap().fine_amount(), 4.0);
    }
}
