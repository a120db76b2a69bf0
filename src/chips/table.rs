use super::*;
use crate::Count;
use crate::PLAYERS;

/// Chips needed for a whole table of a given size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    players: usize,
    counts: Vec<(Denomination, Count)>,
}

impl Row {
    pub fn new(allocation: &Allocation, players: usize) -> Self {
        Self {
            players,
            counts: allocation
                .iter()
                .map(|(d, n)| (d, n * players as Count))
                .collect(),
        }
    }
    pub fn players(&self) -> usize {
        self.players
    }
    pub fn get(&self, denomination: &Denomination) -> Count {
        self.counts
            .iter()
            .find(|(d, _)| d == denomination)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
    pub fn iter(&self) -> impl Iterator<Item = (Denomination, Count)> + '_ {
        self.counts.iter().copied()
    }
    pub fn total(&self) -> Count {
        self.counts.iter().map(|(_, n)| n).sum()
    }
}

/// One [`Row`] per table size from heads-up to nine-handed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    denominations: Vec<Denomination>,
    rows: Vec<Row>,
}

impl Table {
    pub fn denominations(&self) -> &[Denomination] {
        &self.denominations
    }
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
    pub fn row(&self, players: usize) -> Option<&Row> {
        self.rows.iter().find(|r| r.players() == players)
    }
}

impl From<&Allocation> for Table {
    fn from(allocation: &Allocation) -> Self {
        Self {
            denominations: allocation.denominations().collect(),
            rows: PLAYERS.map(|n| Row::new(allocation, n)).collect(),
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<8}", "players")?;
        for d in self.denominations() {
            write!(f, "{:>8}", d.to_string())?;
        }
        writeln!(f, "{:>8}", "total")?;
        for row in self.rows() {
            write!(f, "{:<8}", row.players())?;
            for d in self.denominations() {
                write!(f, "{:>8}", row.get(d))?;
            }
            writeln!(f, "{:>8}", row.total())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Allocation {
        [(1, 20), (5, 10)]
            .into_iter()
            .map(|(d, n)| (Denomination::from(d), n))
            .collect()
    }

    #[test]
    fn five_handed_row() {
        let table = Table::from(&sample());
        let row = table.row(5).unwrap();
        assert_eq!(row.get(&Denomination::from(1)), 100);
        assert_eq!(row.get(&Denomination::from(5)), 50);
        assert_eq!(row.total(), 150);
    }

    #[test]
    fn rows_cover_heads_up_to_nine_handed() {
        let table = Table::from(&sample());
        let players = table.rows().iter().map(Row::players).collect::<Vec<_>>();
        assert_eq!(players, (2..=9).collect::<Vec<_>>());
        assert!(table.row(1).is_none());
        assert!(table.row(10).is_none());
    }

    #[test]
    fn columns_match_allocation() {
        let table = Table::from(&sample());
        assert_eq!(
            table.denominations(),
            &[Denomination::from(1), Denomination::from(5)]
        );
        assert_eq!(table.row(9).unwrap().get(&Denomination::from(25)), 0);
    }

    #[test]
    fn rows_scale_linearly() {
        let allocation = sample();
        let table = Table::from(&allocation);
        for row in table.rows() {
            assert_eq!(row.total(), allocation.chips() * row.players() as u64);
        }
    }
}
