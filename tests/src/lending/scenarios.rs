use chrono::Duration;
use libra_common::error::{ConflictReason, LibraryError};
use libra_common::models::book::NewBook;
use libra_common::models::id::{BookId, UserId};
use libra_core::LoadStatus;

use super::{dune, jane, library};

#[test]
fn dune_is_lent_to_jane_and_returned_late() -> anyhow::Result<()> {
    let (mut library, clock) = library();

    let book = library.add_book(dune())?;
    let user = library.add_user(jane())?;
    assert_eq!(book, BookId::new(1));
    assert_eq!(user, UserId::new(1));

    library.borrow(book, user)?;
    assert!(!library.book(book)?.available);
    assert_eq!(library.user(user)?.borrowed, vec![book]);

    clock.advance_days(10);
    let receipt = library.return_book(book)?;
    assert_eq!(receipt.fine_amount(), 1.5);
    assert_eq!(receipt.fine.map(|fine| fine.overdue_days), Some(3));

    assert!(library.book(book)?.available);
    assert!(library.user(user)?.borrowed.is_empty());
    assert_eq!(library.statistics().total_fines, 1.5);
    Ok(())
}

#[test]
fn prompt_return_clears_the_loan_without_a_fine() -> anyhow::Result<()> {
    let (mut library, _) = library();
    let book = library.add_book(dune())?;
    let user = library.add_user(jane())?;

    library.borrow(book, user)?;
    let receipt = library.return_book(book)?;

    assert!(receipt.fine.is_none());
    assert!(receipt.borrowing.returned_at.is_some());
    assert!(library.book(book)?.available);
    assert!(library.user(user)?.borrowed.is_empty());
    assert!(library.fines().is_empty());
    Ok(())
}

#[test]
fn overdue_listing_and_fine_agree_late_on_the_due_day() -> anyhow::Result<()> {
    let (mut library, clock) = library();
    let book = library.add_book(dune())?;
    let user = library.add_user(jane())?;

    library.borrow(book, user)?;
    clock.advance(Duration::days(7) + Duration::hours(20));
    assert_eq!(library.overdue_loans().count(), 0);
    assert_eq!(library.return_book(book)?.fine_amount(), 0.0);

    library.borrow(book, user)?;
    clock.advance(Duration::days(8));
    assert_eq!(library.overdue_loans().count(), 1);
    assert_eq!(library.return_book(book)?.fine_amount(), 0.5);
    Ok(())
}

#[test]
fn search_finds_the_book_by_lowercase_title() -> anyhow::Result<()> {
    let (mut library, _) = library();
    library.add_book(dune())?;
    library.add_book(NewBook::new("Emma", "Jane Austen", 1815, "978-0141439587", "Classic"))?;

    let found = library.find_books("dune");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, BookId::new(1));

    assert!(library.find_books("   ").is_empty());
    assert_eq!(library.find_books("AUSTEN").len(), 1);
    Ok(())
}

#[test]
fn double_borrow_conflicts_without_touching_state() -> anyhow::Result<()> {
    let (mut library, _) = library();
    let book = library.add_book(dune())?;
    let first = library.add_user(jane())?;
    let second = library.add_user(jane())?;

    library.borrow(book, first)?;
    let err = library.borrow(book, second).unwrap_err();
    assert_eq!(err, LibraryError::Conflict(ConflictReason::AlreadyBorrowed));

    assert_eq!(library.book(book)?.borrowed_by, Some(first));
    assert!(library.user(second)?.borrowed.is_empty());
    assert_eq!(library.open_loans().count(), 1);
    Ok(())
}

#[test]
fn borrowing_past_the_limit_fails() -> anyhow::Result<()> {
    let (mut library, _) = library();
    let user = library.add_user(jane())?;
    let limit = library.user(user)?.borrow_limit;

    let mut books = Vec::new();
    for n in 0..=limit {
        books.push(library.add_book(NewBook::new(
            format!("Volume {n}"),
            "Anon",
            2000,
            format!("ISBN-{n}"),
            "Reference",
        ))?);
    }

    for book in &books[..limit] {
        library.borrow(*book, user)?;
    }
    let err = library.borrow(books[limit], user).unwrap_err();
    assert!(matches!(err, LibraryError::LimitExceeded { limit: l, .. } if l == limit));
    assert!(library.book(books[limit])?.available);
    Ok(())
}

#[test]
fn returning_an_available_book_charges_nothing() -> anyhow::Result<()> {
    let (mut library, clock) = library();
    let book = library.add_book(dune())?;

    clock.advance_days(30);
    let err = library.return_book(book).unwrap_err();
    assert_eq!(err, LibraryError::Conflict(ConflictReason::NotBorrowed));
    assert!(library.fines().is_empty());
    Ok(())
}

#[test]
fn inactive_members_cannot_borrow() -> anyhow::Result<()> {
    use libra_common::models::member::MemberUpdate;

    let (mut library, _) = library();
    let book = library.add_book(dune())?;
    let user = library.add_user(jane())?;
    library.update_user(
        user,
        MemberUpdate {
            active: Some(false),
            ..MemberUpdate::default()
        },
    )?;

    let err = library.borrow(book, user).unwrap_err();
    assert_eq!(err, LibraryError::Conflict(ConflictReason::InactiveMember));
    assert!(library.book(book)?.available);
    Ok(())
}

#[test]
fn statistics_follow_the_lending_load() -> anyhow::Result<()> {
    let (mut library, _) = library();
    assert_eq!(library.statistics().status, LoadStatus::Empty);

    let user = library.add_user(jane())?;
    let mut books = Vec::new();
    for n in 0..5 {
        books.push(library.add_book(NewBook::new(
            format!("Book {n}"),
            "Anon",
            2001,
            format!("ISBN-{n}"),
            "Misc",
        ))?);
    }

    for book in &books[..3] {
        library.borrow(*book, user)?;
    }
    let stats = library.statistics();
    assert_eq!(stats.borrowed_books, 3);
    assert_eq!(stats.borrow_rate, 60.0);
    assert_eq!(stats.status, LoadStatus::Medium);
    assert_eq!(stats.active_borrowings, 3);
    assert_eq!(stats.total_users, 1);
    Ok(())
}
