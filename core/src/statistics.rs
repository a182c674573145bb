use std::fmt;

/// Borrow rate, in percent, above which the library counts as highly loaded.
pub const HIGH_LOAD_PERCENT: f64 = 80.0;
/// Borrow rate, in percent, above which the library counts as moderately loaded.
pub const MEDIUM_LOAD_PERCENT: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Empty,
    Low,
    Medium,
    High,
}

impl LoadStatus {
    pub fn classify(total_books: usize, borrow_rate: f64) -> Self {
        if total_books == 0 {
            Self::Empty
        } else if borrow_rate > HIGH_LOAD_PERCENT {
            Self::High
        } else if borrow_rate > MEDIUM_LOAD_PERCENT {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            Self::Empty => "Add some books!",
            Self::High => "Buy more copies",
            Self::Medium => "Everything is fine",
            Self::Low => "Run a marketing campaign",
        }
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Low => write!(f, "low load"),
            Self::Medium => write!(f, "medium load"),
            Self::High => write!(f, "high load"),
        }
    }
}

/// Point-in-time summary of the library.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub total_books: usize,
    pub available_books: usize,
    pub borrowed_books: usize,
    /// Share of books out on loan, in percent.
    pub borrow_rate: f64,
    pub status: LoadStatus,
    pub recommendation: &'static str,
    pub total_fines: f64,
    pub total_users: usize,
    pub active_borrowings: usize,
}

impl Statistics {
    /// Derives the snapshot step by step, each figure from the ones before it.
    pub fn derive(
        total_books: usize,
        available_books: usize,
        total_users: usize,
        active_borrowings: usize,
        total_fines: f64,
    ) -> Self {
        let borrowed_books = total_books.saturating_sub(available_books);
        let borrow_rate = borrow_rate(borrowed_books, total_books);
        let status = LoadStatus::classify(total_books, borrow_rate);
        let recommendation = status.recommendation();

        Self {
            total_books,
            available_books,
            borrowed_books,
            borrow_rate,
            status,
            recommendation,
            total_fines,
            total_users,
            active_borrowings,
        }
    }
}

fn borrow_rate(borrowed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    borrowed as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_library() {
        let stats = Statistics::derive(0, 0, 3, 0, 0.0);
        assert_eq!(stats.borrowed_books, 0);
        assert_eq!(stats.borrow_rate, 0.0);
        assert_eq!(stats.status, LoadStatus::Empty);
        assert_eq!(stats.recommendation, "Add some books!");
        assert_eq!(stats.total_users, 3);
    }

    #[test]
    fn test_rate_and_status_follow_counts() {
        let stats = Statistics::derive(4, 1, 1, 3, 2.5);
        assert_eq!(stats.borrowed_books, 3);
        assert_eq!(stats.borrow_rate, 75.0);
        assert_eq!(stats.status, LoadStatus::Medium);
        assert_eq!(stats.recommendation, "Everything is fine");
        assert_eq!(stats.total_fines, 2.5);
        assert_eq!(stats.active_borrowings, 3);
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        assert_eq!(LoadStatus::classify(10, 80.0), LoadStatus::Medium);
        assert_eq!(LoadStatus::classify(10, 80.1), LoadStatus::High);
        assert_eq!(LoadStatus::classify(10, 50.0), LoadStatus::Low);
        assert_eq!(LoadStatus::classify(10, 0.0), LoadStatus::Low);
        assert_eq!(LoadStatus::classify(0, 100.0), LoadStatus::Empty);
    }

    #[test]
    fn test_display_and_recommendations() {
        assert_eq!(LoadStatus::High.to_string(), "high load");
        assert_eq!(LoadStatus::High.recommendation(), "Buy more copies");
        assert_eq!(LoadStatus::Low.recommendation(), "Run a marketing campaign");
    }
}
