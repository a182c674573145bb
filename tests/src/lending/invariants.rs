use libra_common::error::{ConflictReason, LibraryError};
use libra_common::models::book::NewBook;
use libra_common::models::member::NewMember;
use libra_core::Library;

use super::{dune, jane, library};

/// A book is unavailable exactly when one open borrowing names it, and that
/// borrowing's member lists the book.
fn assert_consistent(library: &Library) {
    for book in library.list_books() {
        let open: Vec<_> = library
            .open_loans()
            .filter(|loan| loan.book_id == book.id)
            .collect();
        assert_eq!(book.available, open.is_empty(), "book {}", book.id);
        assert!(open.len() <= 1, "book {} lent twice", book.id);

        if let Some(loan) = open.first() {
            assert_eq!(book.borrowed_by, Some(loan.user_id));
            let holder = library.user(loan.user_id).unwrap();
            assert!(holder.borrowed.contains(&book.id));
        } else {
            assert_eq!(book.borrowed_by, None);
            assert_eq!(book.borrowed_at, None);
        }
    }

    for member in library.list_users() {
        assert!(member.borrowed.len() <= member.borrow_limit);
        for held in &member.borrowed {
            assert_eq!(library.book(*held).unwrap().borrowed_by, Some(member.id));
        }
    }
}

#[test]
fn availability_matches_open_borrowings_through_a_busy_day() -> anyhow::Result<()> {
    let (mut library, clock) = library();

    let books = [
        library.add_book(dune())?,
        library.add_book(NewBook::new("Emma", "Jane Austen", 1815, "A1", "Classic"))?,
        library.add_book(NewBook::new("Ulysses", "James Joyce", 1922, "J1", "Modernist"))?,
    ];
    let users = [
        library.add_user(jane())?,
        library.add_user(NewMember::new("John", "Roe", 1985, "555-0102", "john@example.com"))?,
    ];
    assert_consistent(&library);

    library.borrow(books[0], users[0])?;
    library.borrow(books[1], users[1])?;
    assert_consistent(&library);

    assert!(library.borrow(books[0], users[1]).is_err());
    assert_consistent(&library);

    clock.advance_days(3);
    library.return_book(books[0])?;
    library.borrow(books[0], users[1])?;
    library.borrow(books[2], users[0])?;
    assert_consistent(&library);

    clock.advance_days(5);
    assert_eq!(library.overdue_loans().count(), 1);
    library.return_book(books[1])?;
    assert_consistent(&library);
    assert_eq!(library.fines().len(), 1);
    Ok(())
}

#[test]
fn removals_refuse_to_break_open_loans() -> anyhow::Result<()> {
    let (mut library, _) = library();
    let book = library.add_book(dune())?;
    let user = library.add_user(jane())?;
    library.borrow(book, user)?;

    assert_eq!(
        library.remove_book(book).unwrap_err(),
        LibraryError::Conflict(ConflictReason::BookOnLoan)
    );
    assert_eq!(
        library.remove_user(user).unwrap_err(),
        LibraryError::Conflict(ConflictReason::MemberHasLoans)
    );
    assert_consistent(&library);

    library.return_book(book)?;
    library.remove_book(book)?;
    library.remove_user(user)?;
    assert_eq!(library.list_books().count(), 0);
    assert_eq!(library.list_users().count(), 0);
    Ok(())
}
