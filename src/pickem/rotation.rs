use super::*;
use crate::DEFAULT_ORBIT;

/// Errors that can occur while building or steering a rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotationError {
    Empty,
    ZeroOrbit,
    Absent(Game),
}

impl std::fmt::Display for RotationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "rotation needs at least one game"),
            Self::ZeroOrbit => write!(f, "orbit must be at least one hand"),
            Self::Absent(game) => write!(f, "{} is not in the rotation", game),
        }
    }
}

impl std::error::Error for RotationError {}

/// Which game is being dealt, and how many hands of it so far.
/// Moves to the next game after `orbit` hands, wrapping around the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    games: Vec<Game>,
    index: usize,
    hands: usize,
    orbit: usize,
}

impl Rotation {
    pub fn new(games: Vec<Game>, orbit: usize) -> Result<Self, RotationError> {
        if games.is_empty() {
            return Err(RotationError::Empty);
        }
        if orbit == 0 {
            return Err(RotationError::ZeroOrbit);
        }
        Ok(Self {
            games,
            index: 0,
            hands: 0,
            orbit,
        })
    }
    pub fn games(&self) -> &[Game] {
        &self.games
    }
    pub fn current(&self) -> Game {
        self.games[self.index]
    }
    pub fn upcoming(&self) -> Game {
        self.games[self.after(self.index)]
    }
    /// Hands dealt of the current game.
    pub fn hands(&self) -> usize {
        self.hands
    }
    pub fn orbit(&self) -> usize {
        self.orbit
    }
    pub fn advance(&mut self) -> Game {
        self.index = self.after(self.index);
        self.hands = 0;
        self.current()
    }
    pub fn retreat(&mut self) -> Game {
        self.index = self.before(self.index);
        self.hands = 0;
        self.current()
    }
    pub fn select(&mut self, game: Game) -> Result<Game, RotationError> {
        let index = self
            .games
            .iter()
            .position(|g| *g == game)
            .ok_or(RotationError::Absent(game))?;
        self.index = index;
        self.hands = 0;
        Ok(game)
    }
    /// Count one hand. Returns the next game when this hand completes
    /// the orbit.
    pub fn deal(&mut self) -> Option<Game> {
        self.hands += 1;
        match self.hands >= self.orbit {
            true => Some(self.advance()).inspect(|g| log::info!("rotating to {}", g)),
            false => None,
        }
    }

    fn after(&self, index: usize) -> usize {
        (index + 1) % self.games.len()
    }
    fn before(&self, index: usize) -> usize {
        (index + self.games.len() - 1) % self.games.len()
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self {
            games: Game::all().to_vec(),
            index: 0,
            hands: 0,
            orbit: DEFAULT_ORBIT,
        }
    }
}
