pub mod evaluation;
pub use evaluation::*;

pub mod evaluator;
pub use evaluator::*;

pub mod exhaustive;
pub use exhaustive::*;

pub mod optimized;
pub use optimized::*;

pub mod ranking;
pub use ranking::*;

pub mod strength;
pub use strength::*;

pub mod winners;
pub use winners::*;
