pub mod metropolis;
pub use metropolis::*;

pub mod model;
pub use model::*;
