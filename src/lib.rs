//! Poker hand evaluation and Monte Carlo equity.
//!
//! Given each player's hole cards and a partially known board, this crate
//! determines how often each player's best five-card hand wins or splits the
//! pot, either exactly at showdown or by sampling the unseen runouts.
//!
//! ## Cards
//!
//! - [`Card`](cards::Card): a single card encoded in one byte (jokers included)
//! - [`Deck`](cards::Deck): an ordered, mutable sequence of remaining cards
//! - [`Hand`](cards::Hand): an ordered collection with a pluggable [`Organizer`](cards::Organizer)
//! - [`CardSet`](cards::CardSet): an unordered 64-bit card set
//!
//! ## Evaluation
//!
//! - [`Evaluator`](evaluation::Evaluator): best five of seven, via [`Strategy`](evaluation::Strategy)
//! - [`Strength`](evaluation::Strength): rank class plus tie-break vector, totally ordered
//! - [`find_winners`](evaluation::find_winners): indices sharing the best strength
//!
//! ## Equity
//!
//! [`Calculator`](equity::Calculator) samples distinct runouts with the
//! [`Sampler`](sampling::Sampler), scores every player per runout, and
//! normalizes win and tie credit into probabilities summing to one.
//!
//! ## Dealing
//!
//! [`Game`](dealing::Game) deals a hand of Texas, short-deck or Omaha
//! hold'em to the river, burning into a muck that is never evaluated.
pub mod cards;
pub mod dealing;
pub mod equity;
pub mod error;
pub mod evaluation;
pub mod sampling;

pub use error::Error;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Win, split and tie shares of the pot.
pub type Probability = f64;

// ============================================================================
// TABLE GEOMETRY
// ============================================================================
/// Community cards on a complete board.
pub const N_BOARD: usize = 5;
/// Hole cards per player in Texas and short-deck hold'em.
pub const N_HOLE: usize = 2;
/// Hole cards per player in Omaha.
pub const N_OMAHA: usize = 4;
/// Cards in an evaluated hand.
pub const N_FIVE: usize = 5;

// ============================================================================
// MONTE CARLO SIMULATION
// Trial counts are capped by the size of the remaining runout space.
// ============================================================================
/// Requested trials when the caller does not specify any.
pub const DEFAULT_TRIALS: usize = 10_000;
/// Runout count at which automatic execution switches to the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 1024;
/// Consecutive duplicate candidates tolerated before rejection sampling gives up.
/// Only reachable when replicated decks make fewer distinct hands than C(n, k).
pub const MAX_REJECTIONS: usize = 1 << 16;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
}
