//! Pick'em: the mixed-game rotation and the rules for each game in it.
mod game;
mod rotation;

pub use game::*;
pub use rotation::*;
