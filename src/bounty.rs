//! Mystery bounty draws.
//!
//! The pool is a multiset of prize amounts. Each knockout draws one prize
//! uniformly from what is left, so a pool of three 100s and one 1000 gives
//! the first knockout a one-in-four shot at the 1000.
use crate::Chips;
use rand::Rng;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bounties(Vec<Chips>);

impl Bounties {
    pub fn new() -> Self {
        Self::default()
    }
    /// Put `quantity` prizes of `amount` into the pool.
    pub fn add(&mut self, amount: Chips, quantity: usize) {
        self.0.extend(std::iter::repeat_n(amount, quantity));
        log::debug!("added {} bounties of {}", quantity, amount);
    }
    /// Remove one prize at random. Every prize left in the pool is equally
    /// likely, so larger quantities of an amount are proportionally likelier.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<Chips> {
        if self.0.is_empty() {
            return None;
        }
        let i = rng.random_range(0..self.0.len());
        let prize = self.0.swap_remove(i);
        log::info!("drew bounty {} ({} left)", prize, self.0.len());
        Some(prize)
    }
    pub fn clear(&mut self) {
        self.0.clear();
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Prize value still in the pool.
    pub fn total(&self) -> Chips {
        self.0.iter().sum()
    }
    /// Prizes left, tallied by amount.
    pub fn remaining(&self) -> BTreeMap<Chips, usize> {
        self.0.iter().fold(BTreeMap::new(), |mut tally, amount| {
            *tally.entry(*amount).or_insert(0) += 1;
            tally
        })
    }
}

impl FromIterator<(Chips, usize)> for Bounties {
    fn from_iter<I: IntoIterator<Item = (Chips, usize)>>(iter: I) -> Self {
        let mut bounties = Self::new();
        for (amount, quantity) in iter {
            bounties.add(amount, quantity);
        }
        bounties
    }
}

impl std::fmt::Display for Bounties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.remaining()
                .iter()
                .map(|(amount, n)| format!("{}x{}", n, amount))
                .collect::<Vec<String>>()
                .join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn pool() -> Bounties {
        [(100, 3), (500, 2), (1000, 1)].into_iter().collect()
    }

    #[test]
    fn pool_tallies() {
        let pool = pool();
        assert_eq!(pool.len(), 6);
        assert_eq!(pool.total(), 2300);
        assert_eq!(
            pool.remaining().into_iter().collect::<Vec<_>>(),
            vec![(100, 3), (500, 2), (1000, 1)]
        );
        assert_eq!(pool.to_string(), "3x100 2x500 1x1000");
    }

    #[test]
    fn draws_without_replacement() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let mut pool = pool();
        let mut drawn = (0..6)
            .map(|_| pool.draw(rng).unwrap())
            .collect::<Vec<Chips>>();
        drawn.sort();
        assert_eq!(drawn, vec![100, 100, 100, 500, 500, 1000]);
        assert!(pool.is_empty());
        assert_eq!(pool.draw(rng), None);
    }

    #[test]
    fn each_draw_shrinks_pool() {
        let ref mut rng = SmallRng::seed_from_u64(11);
        let mut pool = pool();
        let prize = pool.draw(rng).unwrap();
        assert_eq!(pool.len(), 5);
        assert_eq!(pool.total(), 2300 - prize);
    }

    #[test]
    fn draws_are_uniform_over_prizes() {
        let ref mut rng = SmallRng::seed_from_u64(42);
        let trials = 4000;
        let jackpots = (0..trials)
            .filter(|_| {
                let mut pool = [(100, 3), (1000, 1)].into_iter().collect::<Bounties>();
                pool.draw(rng) == Some(1000)
            })
            .count();
        assert!((800..1200).contains(&jackpots), "{} jackpots", jackpots);
    }

    #[test]
    fn empty_pool_draws_nothing() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(Bounties::new().draw(rng), None);
    }
}
