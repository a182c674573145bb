use chrono::{DateTime, Utc};
use colored::*;
use libra_common::models::book::Book;
use libra_common::models::loan::{Borrowing, Fine};
use libra_common::models::member::Member;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn date(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

pub fn money(amount: f64) -> ColoredString {
    format!("{amount:.2}").color(colors::MONEY)
}

pub fn availability(book: &Book) -> ColoredString {
    match book.borrowed_by {
        None => "available".color(colors::AVAILABLE),
        Some(user) => format!("on loan to user {user}").color(colors::ON_LOAN),
    }
}

pub fn book_to_details(book: &Book) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        ("Author".to_string(), book.author.normal()),
        ("Year".to_string(), book.year.to_string().normal()),
        ("ISBN".to_string(), book.isbn.normal()),
        ("Genre".to_string(), book.genre.normal()),
        ("Rating".to_string(), format!("{:.1}", book.rating).normal()),
        ("Status".to_string(), availability(book)),
    ];

    if let Some(since) = &book.borrowed_at {
        details.push(("Since".to_string(), date(since).normal()));
    }

    details
}

pub fn member_to_details(member: &Member) -> Vec<Detail> {
    let status: ColoredString = if member.active {
        "active".color(colors::AVAILABLE)
    } else {
        "inactive".color(colors::OVERDUE)
    };

    let held: String = if member.borrowed.is_empty() {
        String::from("none")
    } else {
        member
            .borrowed
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<String>>()
            .join(", ")
    };

    vec![
        ("Born".to_string(), member.birth_year.to_string().normal()),
        ("Phone".to_string(), member.phone.normal()),
        ("Email".to_string(), member.email.normal()),
        ("Status".to_string(), status),
        (
            "Books".to_string(),
            format!("{}/{} [{}]", member.borrowed.len(), member.borrow_limit, held).normal(),
        ),
        ("Joined".to_string(), date(&member.registered_at).normal()),
    ]
}

pub fn loan_to_details(loan: &Borrowing, now: DateTime<Utc>) -> Vec<Detail> {
    let due: ColoredString = if loan.is_overdue(now) {
        format!("{} (overdue)", date(&loan.due_at)).color(colors::OVERDUE)
    } else {
        date(&loan.due_at).normal()
    };

    let returned: ColoredString = match &loan.returned_at {
        Some(at) => date(at).color(colors::AVAILABLE),
        None => "outstanding".color(colors::ON_LOAN),
    };

    vec![
        ("User".to_string(), loan.user_id.to_string().normal()),
        ("Borrowed".to_string(), date(&loan.borrowed_at).normal()),
        ("Due".to_string(), due),
        ("Returned".to_string(), returned),
    ]
}

pub fn fine_to_details(fine: &Fine) -> Vec<Detail> {
    vec![
        ("User".to_string(), fine.user_id.to_string().normal()),
        ("Days late".to_string(), fine.overdue_days.to_string().normal()),
        ("Amount".to_string(), money(fine.amount)),
        ("Issued".to_string(), date(&fine.issued_at).normal()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use libra_common::models::book::NewBook;
    use libra_common::models::id::{BookId, UserId};

    #[test]
    fn test_date_and_money_formatting() {
        let at = Utc.with_ymd_and_hms(2024, 2, 29, 8, 5, 0).unwrap();
        assert_eq!(date(&at), "2024-02-29 08:05");
        assert!(money(1.5).to_string().contains("1.50"));
    }

    #[test]
    fn test_book_details_show_loan_only_when_borrowed() {
        let mut book = Book::from_new(
            BookId::new(1),
            NewBook::new("Dune", "Herbert", 1965, "ISBN1", "scifi"),
        );
        assert_eq!(book_to_details(&book).len(), 6);

        book.available = false;
        book.borrowed_by = Some(UserId::new(2));
        book.borrowed_at = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let details = book_to_details(&book);
        assert_eq!(details.len(), 7);
        assert_eq!(details[6].0, "Since");
    }
}
