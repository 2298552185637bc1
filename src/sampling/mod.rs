pub mod combinations;
pub use combinations::*;

pub mod sampler;
pub use sampler::*;

pub mod subsets;
pub use subsets::*;
