use super::evaluation::Evaluation;
use super::evaluator::Evaluator;
use super::ranking::Ranking;
use super::strength::Strength;
use crate::N_FIVE;
use crate::cards::Card;
use crate::cards::CardSet;
use crate::cards::Rank;
use crate::cards::Suit;

const WHEEL: u16 = 0b_1000000001111;

/// Single-pass bitmask evaluation of all seven cards at once.
#[derive(Debug, Default, Clone, Copy)]
pub struct Optimized;

impl Evaluator for Optimized {
    fn evaluate(&self, hole: &[Card], board: &[Card]) -> Evaluation {
        match Evaluation::seven(hole, board) {
            Some(seven) => Bitwise::from(CardSet::from(&seven[..])).find_best(),
            None => Evaluation::invalid(),
        }
    }
}

/// A lazy search for a hand's strength.
///
/// Using the compact CardSet, classes are tested from strongest to weakest
/// and the first hit short-circuits the rest. Straight flushes are looked
/// for inside a single suit's own ranks, never across the whole set.
struct Bitwise(CardSet);

impl From<CardSet> for Bitwise {
    fn from(set: CardSet) -> Self {
        Self(set)
    }
}

impl Bitwise {
    fn find_best(&self) -> Evaluation {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .unwrap_or_else(|| self.find_1_oak())
    }

    fn find_1_oak(&self) -> Evaluation {
        self.made(Ranking::HighCard, &[], 5)
    }
    fn find_2_oak(&self) -> Option<Evaluation> {
        self.find_rank_of_n_oak(2, &[])
            .map(|pair| self.made(Ranking::OnePair, &[(pair, 2)], 3))
    }
    fn find_3_oak(&self) -> Option<Evaluation> {
        self.find_rank_of_n_oak(3, &[])
            .map(|trip| self.made(Ranking::ThreeOAK, &[(trip, 3)], 2))
    }
    fn find_4_oak(&self) -> Option<Evaluation> {
        self.find_rank_of_n_oak(4, &[])
            .map(|quad| self.made(Ranking::FourOAK, &[(quad, 4)], 1))
    }
    fn find_2_oak_2_oak(&self) -> Option<Evaluation> {
        self.find_rank_of_n_oak(2, &[]).and_then(|hi| {
            self.find_rank_of_n_oak(2, &[hi])
                .map(|lo| self.made(Ranking::TwoPair, &[(hi, 2), (lo, 2)], 1))
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Evaluation> {
        self.find_rank_of_n_oak(3, &[]).and_then(|trip| {
            // a second set of trips fills the pair slot
            self.find_rank_of_n_oak(2, &[trip])
                .map(|pair| self.made(Ranking::FullHouse, &[(trip, 3), (pair, 2)], 0))
        })
    }
    fn find_flush(&self) -> Option<Evaluation> {
        self.find_suit_of_flush().map(|suit| {
            let cards = self.0.of(suit).descending().take(N_FIVE).collect::<Vec<_>>();
            let values = cards.iter().map(Card::rank).collect();
            Evaluation::from((Strength::from((Ranking::Flush, values)), cards))
        })
    }
    fn find_straight(&self) -> Option<Evaluation> {
        self.find_rank_of_straight(self.0).map(|high| {
            let cards = Self::run(self.0, high);
            Evaluation::from((Strength::from((Ranking::Straight, vec![high])), cards))
        })
    }
    fn find_straight_flush(&self) -> Option<Evaluation> {
        self.find_suit_of_flush().and_then(|suit| {
            let suited = self.0.of(suit);
            self.find_rank_of_straight(suited).map(|high| {
                let cards = Self::run(suited, high);
                let strength = match high {
                    Rank::Ace => Strength::from((
                        Ranking::RoyalFlush,
                        cards.iter().map(Card::rank).collect(),
                    )),
                    _ => Strength::from((Ranking::StraightFlush, vec![high])),
                };
                Evaluation::from((strength, cards))
            })
        })
    }

    /// The given groups of same-rank cards, topped up with the highest
    /// cards of other ranks.
    fn made(&self, ranking: Ranking, groups: &[(Rank, usize)], kickers: usize) -> Evaluation {
        let skip = groups.iter().map(|(rank, _)| *rank).collect::<Vec<Rank>>();
        let kicks = self
            .0
            .descending()
            .filter(|card| !skip.contains(&card.rank()))
            .take(kickers)
            .collect::<Vec<Card>>();
        let cards = groups
            .iter()
            .flat_map(|(rank, n)| self.0.ranked(*rank).descending().take(*n))
            .chain(kicks.iter().copied())
            .collect::<Vec<Card>>();
        let values = skip
            .into_iter()
            .chain(kicks.iter().map(Card::rank))
            .collect::<Vec<Rank>>();
        Evaluation::from((Strength::from((ranking, values)), cards))
    }

    /// Five cards of consecutive ranks ending at `high`, ace low for the wheel.
    fn run(set: CardSet, high: Rank) -> Vec<Card> {
        (0..N_FIVE as u8)
            .map(|i| match u8::from(high).checked_sub(i) {
                Some(rank) => Rank::from(rank),
                None => Rank::Ace,
            })
            .filter_map(|rank| set.ranked(rank).descending().next())
            .collect()
    }

    fn find_rank_of_straight(&self, set: CardSet) -> Option<Rank> {
        let wheel = WHEEL;
        let ranks = u16::from(set);
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if wheel == (wheel & ranks) {
            Some(Rank::Five)
        } else {
            None
        }
    }
    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|suit| self.0.of(*suit).size() >= N_FIVE)
    }
    fn find_rank_of_n_oak(&self, n: usize, skip: &[Rank]) -> Option<Rank> {
        Rank::all()
            .into_iter()
            .rev()
            .filter(|rank| !skip.contains(rank))
            .find(|rank| self.0.ranked(*rank).size() >= n)
    }
}
