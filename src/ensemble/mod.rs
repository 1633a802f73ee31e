pub mod ensemble;
pub use ensemble::*;

pub mod entry;
pub use entry::*;

pub mod join;
pub use join::*;

pub mod step;
pub use step::*;
