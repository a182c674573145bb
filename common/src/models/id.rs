use std::fmt;
use std::str::FromStr;

use crate::error::{ConflictReason, LibraryResult};

macro_rules! entity_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u32);

        impl $name {
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<u32>()
                    .map(Self)
                    .map_err(|_| format!("invalid {} id: {s}", $label))
            }
        }
    };
}

entity_id!(BookId, "book");
entity_id!(UserId, "user");

/// Hands out identifiers in ascending order, starting at 1.
///
/// Never rewinds, so an id freed by a removal is not handed out again.
#[derive(Debug, Default)]
pub struct IdSequence {
    last: u32,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails once `u32::MAX` has been handed out.
    pub fn next_raw(&mut self) -> LibraryResult<u32> {
        self.last = self
            .last
            .checked_add(1)
            .ok_or(ConflictReason::IdsExhausted)?;
        Ok(self.last)
    }
}
