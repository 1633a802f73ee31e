pub mod base;
pub use base::*;

pub mod tally;
pub use tally::*;
