use super::*;
use crate::CEILING;
use crate::Chips;
use crate::Count;
use crate::WINDOW;

/// One player's chips while they are being counted out.
///
/// Each stage consumes and returns the rack so the pipeline reads top to
/// bottom: `Rack::new(window, value).seed().sweep().fold().consolidate()`.
/// `remaining` is stack value not yet represented by any chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rack {
    window: Window,
    counts: [Count; WINDOW],
    remaining: Chips,
}

impl Rack {
    pub fn new(window: Window, value: Chips) -> Self {
        Self {
            window,
            counts: [0; WINDOW],
            remaining: value,
        }
    }

    /// Hand out comfortable counts of the small chips first, smallest up.
    pub fn seed(mut self) -> Self {
        for (i, denomination) in self.window.iter().enumerate() {
            if let Some(target) = denomination.target() {
                let count = target.min(self.remaining / denomination.value());
                self.counts[i] = count;
                self.remaining -= count * denomination.value();
            }
        }
        self
    }

    /// Cover whatever seeding left with the largest chips possible.
    pub fn sweep(mut self) -> Self {
        for (i, denomination) in self.window.iter().enumerate().rev() {
            self.counts[i] += self.remaining / denomination.value();
            self.remaining %= denomination.value();
        }
        self
    }

    /// Leftover value below the smallest chip is added to that chip's
    /// count one-for-one, not converted by face value. When the smallest
    /// chip is worth more than 1 this overshoots the stack value.
    pub fn fold(mut self) -> Self {
        self.counts[0] += self.remaining;
        self.remaining = 0;
        self
    }

    /// Single pass from the smallest chip up: anything above the ceiling
    /// is exchanged into the next chip, and change that does not make a
    /// whole next chip goes back onto the current one. The next chip is
    /// not re-checked, and the largest chip is never capped.
    pub fn consolidate(mut self) -> Self {
        for i in 0..WINDOW - 1 {
            if self.counts[i] > CEILING {
                let this = self.window.at(i).value();
                let next = self.window.at(i + 1).value();
                let excess = (self.counts[i] - CEILING) * this;
                self.counts[i] = CEILING;
                self.counts[i + 1] += excess / next;
                self.counts[i] += (excess % next) / this;
                log::debug!(
                    "consolidated {} over ceiling into {}",
                    self.window.at(i),
                    self.window.at(i + 1)
                );
            }
        }
        self
    }

    pub fn window(&self) -> Window {
        self.window
    }
    pub fn remaining(&self) -> Chips {
        self.remaining
    }
    pub fn counts(&self) -> impl Iterator<Item = (Denomination, Count)> + '_ {
        self.window.iter().zip(self.counts.iter().copied())
    }
    /// Face value of every chip in the rack.
    pub fn value(&self) -> Chips {
        self.counts().map(|(d, n)| d.value() * n).sum()
    }
}
