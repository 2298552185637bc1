pub mod board;
pub use board::*;

pub mod card;
pub use card::*;

pub mod deck;
pub use deck::*;

pub mod hand;
pub use hand::*;

pub mod hole;
pub use hole::*;

pub mod organizer;
pub use organizer::*;

pub mod rank;
pub use rank::*;

pub mod set;
pub use set::*;

pub mod street;
pub use street::*;

pub mod suit;
pub use suit::*;
