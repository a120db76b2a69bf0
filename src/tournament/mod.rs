//! Tournament blind structures and the clock that runs them.
mod clock;
mod level;
mod settings;
mod structure;
mod tournament;

pub use clock::*;
pub use level::*;
pub use settings::*;
pub use structure::*;
pub use tournament::*;
