mod invariants;
mod scenarios;

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use libra_common::clock::ManualClock;
use libra_common::config::Config;
use libra_common::models::book::NewBook;
use libra_common::models::member::NewMember;
use libra_core::Library;

pub(crate) fn library() -> (Library, Arc<ManualClock>) {
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let clock = Arc::new(ManualClock::new(start));
    (Library::with_clock(Config::default(), clock.clone()), clock)
}

pub(crate) fn dune() -> NewBook {
    NewBook::new("Dune", "Frank Herbert", 1965, "978-0441013593", "Science Fiction")
}

pub(crate) fn jane() -> NewMember {
    NewMember::new("Jane", "Doe", 1990, "555-0101", "jane@example.com")
}
