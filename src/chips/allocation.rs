use super::*;
use crate::Chips;
use crate::Count;
use std::collections::BTreeMap;

/// Chips handed to each player at the start of a cash game, keyed by
/// denomination in ascending order. Only denominations actually handed
/// out are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Allocation(BTreeMap<Denomination, Count>);

impl Allocation {
    /// Count out a stack `depth` big blinds deep for these stakes.
    pub fn new(stakes: Stakes, depth: Chips) -> Self {
        let window = Window::from(stakes.small());
        let value = stakes.stack(depth);
        let allocation = Self::from(
            Rack::new(window, value)
                .seed()
                .sweep()
                .fold()
                .consolidate(),
        );
        log::debug!(
            "allocated {} at {} x {}bb over {}: {}",
            value,
            stakes,
            depth,
            window,
            allocation
        );
        allocation
    }
    pub fn get(&self, denomination: &Denomination) -> Count {
        self.0.get(denomination).copied().unwrap_or(0)
    }
    pub fn iter(&self) -> impl Iterator<Item = (Denomination, Count)> + '_ {
        self.0.iter().map(|(d, n)| (*d, *n))
    }
    pub fn denominations(&self) -> impl Iterator<Item = Denomination> + '_ {
        self.0.keys().copied()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Total face value of one player's chips.
    pub fn value(&self) -> Chips {
        self.iter().map(|(d, n)| d.value() * n).sum()
    }
    /// Total number of chips one player receives.
    pub fn chips(&self) -> Count {
        self.0.values().sum()
    }
}

/// Validate raw blinds and depth, then count out the stack.
pub fn allocate(small: i64, big: i64, depth: i64) -> Result<Allocation, AllocationError> {
    positive("small blind", small)?;
    positive("big blind", big)?;
    let depth = positive("stack depth", depth)?;
    let stakes = Stakes::new(small, big)?;
    Ok(Allocation::new(stakes, depth))
}

impl From<Rack> for Allocation {
    fn from(rack: Rack) -> Self {
        rack.counts().filter(|(_, n)| *n > 0).collect()
    }
}

impl FromIterator<(Denomination, Count)> for Allocation {
    fn from_iter<I: IntoIterator<Item = (Denomination, Count)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Allocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.iter()
                .map(|(d, n)| format!("{}x{}", n, d))
                .collect::<Vec<String>>()
                .join(" ")
        )
    }
}
