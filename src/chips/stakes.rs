use super::*;
use crate::Chips;

/// Validated blinds for a cash game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stakes {
    small: Chips,
    big: Chips,
}

impl Stakes {
    pub fn new(small: i64, big: i64) -> Result<Self, AllocationError> {
        positive("small blind", small)?;
        positive("big blind", big)?;
        match big > small {
            true => Ok(Self {
                small: small as Chips,
                big: big as Chips,
            }),
            false => Err(AllocationError::InvalidBlindOrdering { small, big }),
        }
    }
    pub fn small(&self) -> Chips {
        self.small
    }
    pub fn big(&self) -> Chips {
        self.big
    }
    /// Value of a stack `depth` big blinds deep.
    pub fn stack(&self, depth: Chips) -> Chips {
        depth.saturating_mul(self.big)
    }
}

impl TryFrom<(i64, i64)> for Stakes {
    type Error = AllocationError;
    fn try_from((small, big): (i64, i64)) -> Result<Self, Self::Error> {
        Self::new(small, big)
    }
}

impl std::fmt::Display for Stakes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.small, self.big)
    }
}

pub(crate) fn positive(field: &'static str, value: i64) -> Result<Chips, AllocationError> {
    match value > 0 {
        true => Ok(value as Chips),
        false => Err(AllocationError::NonPositiveInput { field, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_value_in_big_blinds() {
        let stakes = Stakes::new(1, 2).unwrap();
        assert_eq!(stakes.stack(200), 400);
    }

    #[test]
    fn rejects_equal_and_inverted_blinds() {
        assert_eq!(
            Stakes::new(5, 5),
            Err(AllocationError::InvalidBlindOrdering { small: 5, big: 5 })
        );
        assert_eq!(
            Stakes::new(5, 2),
            Err(AllocationError::InvalidBlindOrdering { small: 5, big: 2 })
        );
    }

    #[test]
    fn rejects_non_positive_blinds() {
        assert!(matches!(
            Stakes::new(0, 2),
            Err(AllocationError::NonPositiveInput { field: "small blind", value: 0 })
        ));
        assert!(matches!(
            Stakes::try_from((1, -2)),
            Err(AllocationError::NonPositiveInput { field: "big blind", value: -2 })
        ));
    }
}
