//! Cash-game chip sets.
//!
//! A game's blinds pick a [`Window`] of four consecutive denominations, a
//! [`Rack`] fills that window with chips worth one player's stack, and the
//! resulting [`Allocation`] is scaled across table sizes by [`Table`].
mod allocation;
mod denomination;
mod error;
mod rack;
mod stakes;
mod table;
mod window;

pub use allocation::*;
pub use denomination::*;
pub use error::*;
pub use rack::*;
pub use stakes::*;
pub use table::*;
pub use window::*;

#[cfg(test)]
mod tests;
