use crate::Chips;
use crate::Count;
use crate::DENOMINATIONS;
use crate::TARGETS;
use serde::Deserialize;
use serde::Serialize;

/// Face value of one chip.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Denomination(Chips);

impl Denomination {
    /// Every denomination in the house chip set, ascending.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        DENOMINATIONS.into_iter().map(Self)
    }
    pub fn value(&self) -> Chips {
        self.0
    }
    /// How many of this chip a player comfortably starts with, if it is
    /// handed out before residual value is swept up.
    pub fn target(&self) -> Option<Count> {
        TARGETS
            .iter()
            .find(|(face, _)| *face == self.0)
            .map(|(_, count)| *count)
    }
}

impl From<Chips> for Denomination {
    fn from(value: Chips) -> Self {
        Self(value)
    }
}
impl From<Denomination> for Chips {
    fn from(denomination: Denomination) -> Self {
        denomination.0
    }
}

impl std::fmt::Display for Denomination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn house_set_is_ascending() {
        let all = Denomination::all().collect::<Vec<_>>();
        assert_eq!(all.len(), 7);
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn only_small_chips_have_targets() {
        assert_eq!(Denomination::from(1).target(), Some(20));
        assert_eq!(Denomination::from(5).target(), Some(15));
        assert_eq!(Denomination::from(10).target(), Some(10));
        assert_eq!(Denomination::from(25).target(), Some(6));
        assert_eq!(Denomination::from(100).target(), None);
        assert_eq!(Denomination::from(1000).target(), None);
    }

    #[test]
    fn display_as_dollars() {
        assert_eq!(Denomination::from(25).to_string(), "$25");
    }
}
