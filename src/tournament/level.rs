use crate::Chips;
use crate::MINUTE;
use crate::Seconds;

/// One row of a blind structure. `index` counts from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    index: usize,
    small: Chips,
    big: Chips,
    ante: Chips,
    minutes: u64,
}

impl Level {
    pub fn new(index: usize, small: Chips, big: Chips, ante: Chips, minutes: u64) -> Self {
        Self {
            index,
            small,
            big,
            ante,
            minutes,
        }
    }
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn small(&self) -> Chips {
        self.small
    }
    pub fn big(&self) -> Chips {
        self.big
    }
    /// Big-blind ante, paid by the big blind alone.
    pub fn ante(&self) -> Chips {
        self.ante
    }
    pub fn minutes(&self) -> u64 {
        self.minutes
    }
    pub fn seconds(&self) -> Seconds {
        self.minutes * MINUTE
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Level {:<3} SB {:<5} BB {:<5} ante {:<5} {}min",
            self.index, self.small, self.big, self.ante, self.minutes
        )
    }
}
