pub mod calculator;
pub use calculator::*;

pub mod showdown;
pub use showdown::*;

pub mod tally;
pub use tally::*;
