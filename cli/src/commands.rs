pub mod book;
pub mod circulation;
pub mod member;
pub mod stats;

use clap::{ArgAction, Parser, Subcommand};
use libra_common::config::Config;
use libra_common::error::LibraryResult;
use libra_common::models::id::{BookId, UserId};
use libra_core::Library;

#[derive(Parser)]
#[command(name = "libra")]
#[command(about = "An in-memory library manager.", version)]
pub struct CommandLine {
    /// Fine charged per whole day a book is late
    #[arg(long, default_value_t = 0.5)]
    pub fine_per_day: f64,
    /// Loan period in days
    #[arg(long, default_value_t = 7)]
    pub loan_days: u32,
    /// Borrow limit for new members
    #[arg(long, default_value_t = 7)]
    pub borrow_limit: usize,
    /// Less output; repeat for even less
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
    /// Skip the start-up banner
    #[arg(long)]
    pub no_banner: bool,
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
    /// Show debug events
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            fine_per_day: self.fine_per_day,
            loan_period_days: self.loan_days,
            default_borrow_limit: self.borrow_limit,
            quiet: self.quiet,
            no_banner: self.no_banner,
        }
    }
}

/// One line typed into the shell.
#[derive(Parser)]
#[command(name = "libra", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the book catalog
    #[command(alias = "b", subcommand)]
    Book(BookAction),
    /// Manage members
    #[command(alias = "m", alias = "user", subcommand)]
    Member(MemberAction),
    /// Lend a book to a member
    Borrow { book: BookId, user: UserId },
    /// Take a book back, charging a fine if it is late
    Return { book: BookId },
    /// List borrowings (open ones unless --all)
    Loans {
        /// Include returned borrowings
        #[arg(long)]
        all: bool,
        /// Only loans past their due date
        #[arg(long, conflicts_with = "all")]
        overdue: bool,
        /// Only loans of this member
        #[arg(long)]
        user: Option<UserId>,
    },
    /// List issued fines
    Fines,
    /// Show library statistics
    #[command(alias = "stat")]
    Stats,
    /// Leave the shell
    #[command(alias = "quit", alias = "q")]
    Exit,
}

#[derive(Subcommand)]
pub enum BookAction {
    /// Add a book to the catalog
    Add {
        title: String,
        author: String,
        year: i32,
        isbn: String,
        genre: String,
    },
    /// Remove a book from the catalog
    #[command(alias = "rm")]
    Remove { id: BookId },
    /// Change some fields of a book
    Update {
        id: BookId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        isbn: Option<String>,
        #[arg(long)]
        genre: Option<String>,
        #[arg(long)]
        rating: Option<f32>,
    },
    /// Search title, author and genre
    Find {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// List every book by title
    #[command(alias = "ls")]
    List,
    /// Show one book
    Show { id: BookId },
}

#[derive(Subcommand)]
pub enum MemberAction {
    /// Register a member
    Add {
        name: String,
        surname: String,
        birth_year: i32,
        phone: String,
        email: String,
    },
    /// Remove a member
    #[command(alias = "rm")]
    Remove { id: UserId },
    /// Change some fields of a member
    Update {
        id: UserId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        surname: Option<String>,
        #[arg(long)]
        birth_year: Option<i32>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// true or false
        #[arg(long, action = ArgAction::Set)]
        active: Option<bool>,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Search by name and surname
    Find {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// List every member by id
    #[command(alias = "ls")]
    List,
    /// Show one member and their borrowing history
    Show { id: UserId },
}

/// What the shell should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub fn dispatch(command: Commands, library: &mut Library, cfg: &Config) -> LibraryResult<Flow> {
    match command {
        Commands::Book(action) => book::run(action, library, cfg)?,
        Commands::Member(action) => member::run(action, library, cfg)?,
        Commands::Borrow { book, user } => circulation::borrow(book, user, library)?,
        Commands::Return { book } => circulation::return_book(book, library)?,
        Commands::Loans { all, overdue, user } => {
            circulation::loans(library, cfg, all, overdue, user)
        }
        Commands::Fines => circulation::fines(library, cfg),
        Commands::Stats => stats::stats(library, cfg),
        Commands::Exit => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}
