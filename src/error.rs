use crate::cards::Card;

/// Failures surfaced by parsing, dealing and equity calculation.
///
/// Evaluating a malformed hand is not an error: the evaluator reports
/// [`Ranking::Invalid`](crate::evaluation::Ranking::Invalid) instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid rank: {0}")]
    InvalidRank(String),

    #[error("invalid suit: {0}")]
    InvalidSuit(String),

    #[error("invalid card: {0}")]
    InvalidCard(String),

    #[error("hole cards must number 2 or 4, got {0}")]
    InvalidHole(usize),

    #[error("invalid game type '{0}'. Must be one of: texas, omaha, short")]
    InvalidVariant(String),

    #[error("invalid strategy '{0}'. Must be one of: exhaustive, optimized")]
    InvalidStrategy(String),

    #[error("card {0} appears more than once")]
    DuplicateCard(Card),

    #[error("joker {0} cannot take part in a showdown")]
    JokerInPlay(Card),

    #[error("cannot add {added} cards: would exceed maximum of 5 community cards (current: {current})")]
    BoardOverflow { added: usize, current: usize },

    #[error("showdown requires exactly 5 community cards, got {0}")]
    IncompleteBoard(usize),

    #[error("no cards left to burn")]
    NothingToBurn,

    #[error("cannot deal from empty deck")]
    EmptyDeck,

    #[error("not enough cards in deck")]
    NotEnoughCards,

    #[error("number of cards must be positive")]
    NonPositiveCount,

    #[error("at least one player is required")]
    NoPlayers,

    #[error("at least one trial is required")]
    NoTrials,
}
