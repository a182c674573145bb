//! # Libra Core
//!
//! In-memory library management: the book catalog, the member register and
//! the lending workflow that ties them together.
//!
//! ## Components
//! * **[`catalog`]**: Owns the books.
//! * **[`membership`]**: Owns the members.
//! * **[`circulation`]**: Owns borrowings and fines. Lends and takes back books
//!   by calling the mutation operations of the two components above.
//! * **[`statistics`]**: The read-only snapshot derived from all three.
//! * **[`library`]**: The facade a driver talks to.
//!
//! Nothing in this crate prints or logs. Every operation returns a value or a
//! [`LibraryError`](libra_common::error::LibraryError) and leaves presentation
//! to the caller.

pub mod catalog;
pub mod circulation;
pub mod library;
pub mod membership;
pub mod statistics;

mod search;
mod validate;

pub use catalog::Catalog;
pub use circulation::{Circulation, ReturnReceipt};
pub use library::Library;
pub use membership::Membership;
pub use statistics::{LoadStatus, Statistics};
