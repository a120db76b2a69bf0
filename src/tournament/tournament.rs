use super::*;
use crate::Chips;

/// A configured tournament: its structure, the settings it was built
/// from, and how many players are still in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tournament {
    structure: Structure,
    format: Format,
    variant: Variant,
    entries: usize,
    remaining: usize,
}

impl Tournament {
    pub fn new(structure: Structure, format: Format, variant: Variant, entries: usize) -> Self {
        let entries = entries.max(1);
        Self {
            structure,
            format,
            variant,
            entries,
            remaining: entries,
        }
    }
    pub fn structure(&self) -> &Structure {
        &self.structure
    }
    pub fn stack(&self) -> Chips {
        self.structure.stack()
    }
    pub fn speed(&self) -> Speed {
        self.structure.speed()
    }
    pub fn format(&self) -> Format {
        self.format
    }
    pub fn variant(&self) -> Variant {
        self.variant
    }
    pub fn entries(&self) -> usize {
        self.entries
    }
    pub fn remaining(&self) -> usize {
        self.remaining
    }
    /// Re-entries and late registration raise the entry count; players
    /// still in can never outnumber it.
    pub fn set_entries(&mut self, entries: usize) {
        self.entries = entries.max(1);
        self.remaining = self.remaining.min(self.entries);
    }
    pub fn set_remaining(&mut self, remaining: usize) {
        self.remaining = remaining.clamp(1, self.entries);
    }
    /// Chips in play divided among the players still in.
    pub fn average(&self) -> Chips {
        match self.remaining {
            0 => 0,
            n => self.entries as Chips * self.stack() / n as Chips,
        }
    }
    /// Chips in play across all entries.
    pub fn chips(&self) -> Chips {
        self.entries as Chips * self.stack()
    }
}

impl std::fmt::Display for Tournament {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} stack | {} | {} | {}/{} left | avg {}",
            self.variant,
            self.stack(),
            self.speed(),
            self.format,
            self.remaining,
            self.entries,
            self.average()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tournament {
        let structure = Structure::new(1000, Speed::Normal).unwrap();
        Tournament::new(structure, Format::Freezeout, Variant::Holdem, 10)
    }

    #[test]
    fn average_grows_as_players_bust() {
        let mut tournament = sample();
        assert_eq!(tournament.average(), 1000);
        tournament.set_remaining(4);
        assert_eq!(tournament.average(), 2500);
        tournament.set_remaining(3);
        assert_eq!(tournament.average(), 3333);
    }

    #[test]
    fn remaining_bounded_by_entries() {
        let mut tournament = sample();
        tournament.set_remaining(15);
        assert_eq!(tournament.remaining(), 10);
        tournament.set_remaining(0);
        assert_eq!(tournament.remaining(), 1);
        tournament.set_remaining(8);
        tournament.set_entries(6);
        assert_eq!(tournament.remaining(), 6);
        tournament.set_entries(12);
        assert_eq!(tournament.remaining(), 6);
        assert_eq!(tournament.chips(), 12000);
    }
}
