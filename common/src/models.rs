//! # Domain Models
//!
//! The entities the library keeps track of.
//!
//! ## Entities
//! * [`book::Book`]: A catalogued title and its loan state.
//! * [`member::Member`]: A registered reader and the books they hold.
//! * [`loan::Borrowing`]: One lending of one book to one member.
//! * [`loan::Fine`]: The charge raised when a book comes back late.
//!
//! ## Value Objects
//! * [`id::BookId`] / [`id::UserId`]: Identifiers handed out in ascending order.
//! * [`book::NewBook`] / [`book::BookUpdate`]: Creation and partial-update payloads.
//! * [`member::NewMember`] / [`member::MemberUpdate`]: Same for members.

pub mod book;
pub mod id;
pub mod loan;
pub mod member;
