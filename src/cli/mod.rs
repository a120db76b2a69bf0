//! Interactive front desk for running the game night.
mod desk;
mod query;
mod render;

pub use desk::*;
pub use query::*;
