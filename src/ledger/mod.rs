//! Tournament results: buy-ins, payouts, and return on investment.
mod book;
mod error;
mod session;
mod summary;

pub use book::*;
pub use error::*;
pub use session::*;
pub use summary::*;
