use super::*;
use crate::ANTE_FROM_LEVEL;
use crate::BLINDS;
use crate::Chips;
use crate::MIN_STARTING_STACK;

/// Errors that can occur while generating a structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureError {
    ShallowStack(Chips),
}

impl std::fmt::Display for StructureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShallowStack(stack) => write!(
                f,
                "starting stack {} is below the minimum of {}",
                stack, MIN_STARTING_STACK
            ),
        }
    }
}

impl std::error::Error for StructureError {}

/// Blind levels for one tournament, walked from the standard progression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    stack: Chips,
    speed: Speed,
    levels: Vec<Level>,
}

impl Structure {
    pub fn new(stack: Chips, speed: Speed) -> Result<Self, StructureError> {
        if stack < MIN_STARTING_STACK {
            return Err(StructureError::ShallowStack(stack));
        }
        let levels = BLINDS
            .iter()
            .enumerate()
            .map(|(i, (small, big))| (i + 1, *small, *big))
            .map(|(index, small, big)| match index >= ANTE_FROM_LEVEL {
                true => Level::new(index, small, big, big, speed.minutes()),
                false => Level::new(index, small, big, 0, speed.minutes()),
            })
            .collect::<Vec<Level>>();
        log::info!(
            "generated {} levels of {} minutes for a {} stack",
            levels.len(),
            speed.minutes(),
            stack
        );
        Ok(Self {
            stack,
            speed,
            levels,
        })
    }
    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn speed(&self) -> Speed {
        self.speed
    }
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }
    pub fn level(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }
    pub fn len(&self) -> usize {
        self.levels.len()
    }
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
    /// Total scheduled playing time in minutes.
    pub fn minutes(&self) -> u64 {
        self.levels.iter().map(Level::minutes).sum()
    }
}

impl std::fmt::Display for Structure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for level in self.levels() {
            writeln!(f, "{}", level)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_standard_progression() {
        let structure = Structure::new(1000, Speed::Normal).unwrap();
        assert_eq!(structure.len(), BLINDS.len());
        let first = structure.level(0).unwrap();
        assert_eq!((first.index(), first.small(), first.big()), (1, 1, 2));
        let last = structure.levels().last().unwrap();
        assert_eq!((last.index(), last.small(), last.big()), (20, 250, 500));
    }

    #[test]
    fn big_blind_ante_from_second_level() {
        let structure = Structure::new(1000, Speed::Turbo).unwrap();
        assert_eq!(structure.level(0).unwrap().ante(), 0);
        assert!(structure.levels()[1..].iter().all(|l| l.ante() == l.big()));
    }

    #[test]
    fn level_length_follows_speed() {
        for speed in Speed::all() {
            let structure = Structure::new(5000, *speed).unwrap();
            assert!(structure.levels().iter().all(|l| l.minutes() == speed.minutes()));
            assert_eq!(structure.minutes(), speed.minutes() * 20);
        }
    }

    #[test]
    fn rejects_shallow_stack() {
        assert_eq!(
            Structure::new(99, Speed::Normal),
            Err(StructureError::ShallowStack(99))
        );
        assert!(Structure::new(100, Speed::Normal).is_ok());
    }
}
