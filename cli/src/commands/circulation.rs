use colored::*;
use libra_common::config::Config;
use libra_common::error::LibraryResult;
use libra_common::models::id::{BookId, UserId};
use libra_common::models::loan::Borrowing;
use libra_core::Library;
use tracing::{info, warn};

use crate::mprint;
use crate::terminal::{colors, format, print};

pub fn borrow(book: BookId, user: UserId, library: &mut Library) -> LibraryResult<()> {
    let due = library.borrow(book, user)?.due_at;
    let title = library.book(book)?.title.clone();
    info!(
        "\"{}\" lent to user {user}, due {}",
        title,
        format::date(&due).bold()
    );
    Ok(())
}

pub fn return_book(book: BookId, library: &mut Library) -> LibraryResult<()> {
    let receipt = library.return_book(book)?;
    match &receipt.fine {
        Some(fine) => warn!(
            "Book {book} returned {} day(s) late, fine {} charged to user {}",
            fine.overdue_days,
            format::money(fine.amount),
            fine.user_id
        ),
        None => info!("Book {book} returned on time"),
    }
    Ok(())
}

pub fn loans(library: &Library, cfg: &Config, all: bool, overdue: bool, user: Option<UserId>) {
    let now = library.now();
    let mut selected: Vec<&Borrowing> = match (all, overdue) {
        (true, _) => library.borrowings().iter().collect(),
        (false, true) => library.overdue_loans().collect(),
        (false, false) => library.open_loans().collect(),
    };
    if let Some(user) = user {
        selected.retain(|loan| loan.user_id == user);
    }

    let title = match (all, overdue) {
        (true, _) => "all borrowings",
        (false, true) => "overdue loans",
        (false, false) => "open loans",
    };
    print::header(title, cfg.quiet);
    print_loans(&selected, library, cfg);

    if overdue && !selected.is_empty() && cfg.quiet == 0 {
        mprint!();
        print::centerln(
            &format!("{} overdue as of {}", selected.len(), format::date(&now))
                .color(colors::OVERDUE)
                .to_string(),
        );
    }
}

pub fn print_loans(loans: &[&Borrowing], library: &Library, cfg: &Config) {
    if loans.is_empty() {
        print::no_results("loans");
        return;
    }

    let now = library.now();
    for (idx, loan) in loans.iter().enumerate() {
        let title: String = library
            .book(loan.book_id)
            .map(|book| book.title.clone())
            .unwrap_or_else(|_| String::from("<removed>"));

        match cfg.quiet {
            0 => {
                print::tree_head(loan.book_id, &title);
                print::as_tree_one_level(format::loan_to_details(loan, now));
                if idx + 1 != loans.len() {
                    mprint!();
                }
            }
            _ => print::print_status(format!(
                "[{}] {} -> user {} due {}",
                loan.book_id,
                title,
                loan.user_id,
                format::date(&loan.due_at)
            )),
        }
    }
}

pub fn fines(library: &Library, cfg: &Config) {
    let fines = library.fines();
    print::header("fines", cfg.quiet);

    if fines.is_empty() {
        print::no_results("fines");
        return;
    }

    for (idx, fine) in fines.iter().enumerate() {
        match cfg.quiet {
            0 => {
                print::tree_head(fine.book_id, &format!("book {}", fine.book_id));
                print::as_tree_one_level(format::fine_to_details(fine));
                if idx + 1 != fines.len() {
                    mprint!();
                }
            }
            _ => print::print_status(format!(
                "book {} user {} {} day(s) {}",
                fine.book_id,
                fine.user_id,
                fine.overdue_days,
                format::money(fine.amount)
            )),
        }
    }

    let total: f64 = fines.iter().map(|fine| fine.amount).sum();
    mprint!();
    print::aligned_line("Total", 5, format::money(total));
}
