use super::*;
use crate::Chips;
use crate::DENOMINATIONS;
use crate::WINDOW;

/// The four consecutive denominations handed out for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window([Denomination; WINDOW]);

impl Window {
    /// Lowest chip a small blind of this size is paid with by convention.
    pub fn base(small: Chips) -> Denomination {
        match small {
            s if s >= 25 => Denomination::from(25),
            s if s >= 5 => Denomination::from(5),
            _ => Denomination::from(1),
        }
    }
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Denomination> + ExactSizeIterator + '_ {
        self.0.iter().copied()
    }
    pub fn at(&self, index: usize) -> Denomination {
        self.0[index]
    }
    pub fn smallest(&self) -> Denomination {
        self.0[0]
    }
    pub fn largest(&self) -> Denomination {
        self.0[WINDOW - 1]
    }
    pub fn contains(&self, denomination: &Denomination) -> bool {
        self.0.contains(denomination)
    }
}

/// Window for a given small blind. Starts at the base chip and slides left
/// when fewer than four denominations remain above it.
impl From<Chips> for Window {
    fn from(small: Chips) -> Self {
        let base = Self::base(small).value();
        let start = DENOMINATIONS
            .iter()
            .position(|face| *face == base)
            .unwrap_or(0)
            .min(DENOMINATIONS.len() - WINDOW);
        Self(std::array::from_fn(|i| {
            Denomination::from(DENOMINATIONS[start + i])
        }))
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.iter()
                .map(|d| d.to_string())
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faces(window: Window) -> Vec<Chips> {
        window.iter().map(|d| d.value()).collect()
    }

    #[test]
    fn base_follows_small_blind() {
        assert_eq!(Window::base(1).value(), 1);
        assert_eq!(Window::base(4).value(), 1);
        assert_eq!(Window::base(5).value(), 5);
        assert_eq!(Window::base(24).value(), 5);
        assert_eq!(Window::base(25).value(), 25);
        assert_eq!(Window::base(5000).value(), 25);
    }

    #[test]
    fn window_starts_at_base() {
        assert_eq!(faces(Window::from(1)), vec![1, 5, 10, 25]);
        assert_eq!(faces(Window::from(5)), vec![5, 10, 25, 100]);
        assert_eq!(faces(Window::from(25)), vec![25, 100, 500, 1000]);
    }

    #[test]
    fn window_slides_to_last_four() {
        assert_eq!(faces(Window::from(100)), vec![25, 100, 500, 1000]);
        assert_eq!(faces(Window::from(1000)), vec![25, 100, 500, 1000]);
    }

    #[test]
    fn window_is_consecutive_in_house_set() {
        for small in [1, 3, 5, 12, 25, 60, 100, 2500] {
            let window = Window::from(small);
            let start = DENOMINATIONS
                .iter()
                .position(|face| *face == window.smallest().value())
                .unwrap();
            assert_eq!(faces(window), DENOMINATIONS[start..start + WINDOW].to_vec());
        }
    }
}
