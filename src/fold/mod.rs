pub mod fold;
pub use fold::*;

pub mod pairs;
pub use pairs::*;

pub mod strand;
pub use strand::*;
