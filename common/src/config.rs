/// Runtime configuration, built once by the driver and handed to the core.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Amount charged for every whole day a book is kept past its due date.
    pub fine_per_day: f64,
    /// Length of a loan in days. The due date is borrow date plus this.
    pub loan_period_days: u32,
    /// Borrow limit given to newly registered members.
    pub default_borrow_limit: usize,
    /// Quiet level. Headers and the banner are skipped above zero.
    pub quiet: u8,
    /// Skip the start-up banner.
    pub no_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fine_per_day: 0.5,
            loan_period_days: 7,
            default_borrow_limit: 7,
            quiet: 0,
            no_banner: false,
        }
    }
}
