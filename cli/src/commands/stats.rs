use colored::*;
use libra_common::config::Config;
use libra_core::{Library, LoadStatus};

use crate::terminal::{colors, format, print};

const KEY_WIDTH: usize = 17;

fn status_color(status: LoadStatus) -> ColoredString {
    let text = status.to_string();
    match status {
        LoadStatus::Empty => text.color(colors::SEPARATOR),
        LoadStatus::Low => text.color(colors::AVAILABLE),
        LoadStatus::Medium => text.color(colors::ON_LOAN),
        LoadStatus::High => text.color(colors::OVERDUE),
    }
}

pub fn stats(library: &Library, cfg: &Config) {
    let stats = library.statistics();

    print::header("statistics", cfg.quiet);
    print::aligned_line("Books", KEY_WIDTH, stats.total_books.to_string());
    print::aligned_line("Available", KEY_WIDTH, stats.available_books.to_string());
    print::aligned_line("Borrowed", KEY_WIDTH, stats.borrowed_books.to_string());
    print::aligned_line("Borrow rate", KEY_WIDTH, format!("{:.2}%", stats.borrow_rate));
    print::aligned_line("Status", KEY_WIDTH, status_color(stats.status));
    print::aligned_line("Members", KEY_WIDTH, stats.total_users.to_string());
    print::aligned_line("Active borrowings", KEY_WIDTH, stats.active_borrowings.to_string());
    print::aligned_line("Fines collected", KEY_WIDTH, format::money(stats.total_fines));

    if cfg.quiet == 0 {
        print::fat_separator();
        print::centerln(&stats.recommendation.bold().to_string());
    }
}
