//! # Libra Common
//!
//! Types shared by every crate in the workspace.
//!
//! * **[`models`]**: Books, members, borrowings and fines.
//! * **[`error`]**: The typed error returned by every core operation.
//! * **[`config`]**: Lending policy and presentation switches.
//! * **[`clock`]**: The time source the core reads "now" from.

pub mod clock;
pub mod config;
pub mod error;
pub mod models;
