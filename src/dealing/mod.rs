pub mod dealer;
pub use dealer::*;

pub mod game;
pub use game::*;

pub mod spread;
pub use spread::*;

pub mod variant;
pub use variant::*;
