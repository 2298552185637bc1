/// A poker hand's class.
///
/// Ordered weakest to strongest; `Invalid` marks a hand that could not be
/// evaluated and loses to every real hand.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ranking {
    #[default]
    Invalid,
    HighCard,      // 5 values
    OnePair,       // pair + 3 kickers
    TwoPair,       // high pair, low pair, kicker
    ThreeOAK,      // trips + 2 kickers
    Straight,      // high card
    Flush,         // 5 values
    FullHouse,     // trips, pair
    FourOAK,       // quads, kicker
    StraightFlush, // high card
    RoyalFlush,    // A K Q J T
}

impl Ranking {
    pub const fn all() -> [Self; 10] {
        [
            Ranking::HighCard,
            Ranking::OnePair,
            Ranking::TwoPair,
            Ranking::ThreeOAK,
            Ranking::Straight,
            Ranking::Flush,
            Ranking::FullHouse,
            Ranking::FourOAK,
            Ranking::StraightFlush,
            Ranking::RoyalFlush,
        ]
    }
    /// Length of the tie-break vector for this class.
    pub const fn n_values(&self) -> usize {
        match self {
            Ranking::Invalid => 0,
            Ranking::Straight | Ranking::StraightFlush => 1,
            Ranking::FullHouse | Ranking::FourOAK => 2,
            Ranking::TwoPair | Ranking::ThreeOAK => 3,
            Ranking::OnePair => 4,
            Ranking::HighCard | Ranking::Flush | Ranking::RoyalFlush => 5,
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Ranking::Invalid => "Invalid Hand",
                Ranking::HighCard => "High Card",
                Ranking::OnePair => "One Pair",
                Ranking::TwoPair => "Two Pair",
                Ranking::ThreeOAK => "Three of a Kind",
                Ranking::Straight => "Straight",
                Ranking::Flush => "Flush",
                Ranking::FullHouse => "Full House",
                Ranking::FourOAK => "Four of a Kind",
                Ranking::StraightFlush => "Straight Flush",
                Ranking::RoyalFlush => "Royal Flush",
            }
        )
    }
}
