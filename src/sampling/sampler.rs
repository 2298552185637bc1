use super::combinations::combinations;
use super::subsets::Subsets;
use crate::MAX_REJECTIONS;
use crate::cards::Deck;
use crate::cards::Descending;
use crate::cards::Hand;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Draws distinct unordered hands from a deck.
///
/// Distinctness is by canonical key, so two hands holding the same cards in
/// a different order count once. The deck is reordered but never shrunk.
pub struct Sampler<'a, R: Rng + ?Sized> {
    deck: &'a mut Deck,
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> Sampler<'a, R> {
    pub fn new(deck: &'a mut Deck, rng: &'a mut R) -> Self {
        Self { deck, rng }
    }

    /// Between 0 and min(limit, C(n, k)) distinct k-card hands.
    ///
    /// Empty if `k` or `limit` is zero or `k` exceeds the deck.
    pub fn draw(&mut self, k: usize, limit: usize) -> Vec<Hand> {
        let n = self.deck.len();
        if k == 0 || limit == 0 || k > n {
            log::debug!("{:<32}{:<32}", "empty draw", format!("{} of {}", k, n));
            return Vec::new();
        }
        let space = combinations(n, k);
        if n < 64 && limit as u64 >= space {
            self.enumerate(k)
        } else {
            self.reject(k, limit.min(usize::try_from(space).unwrap_or(usize::MAX)))
        }
    }

    /// Every distinct hand, in random order. Rejection sampling run to
    /// exhaustion converges to this same set.
    fn enumerate(&mut self, k: usize) -> Vec<Hand> {
        let ref mut seen = HashSet::new();
        let cards = self.deck.cards();
        let mut hands = Subsets::new(cards.len(), k)
            .map(|mask| Hand::<Descending>::from(Subsets::select(mask, cards)))
            .filter(|hand| seen.insert(hand.key()))
            .collect::<Vec<Hand>>();
        hands.shuffle(&mut *self.rng);
        log::debug!("{:<32}{:<32}", "enumerated hands", hands.len());
        hands
    }

    /// Reshuffle, take the top k, keep the candidate if its key is new.
    fn reject(&mut self, k: usize, target: usize) -> Vec<Hand> {
        let mut seen = HashSet::with_capacity(target);
        let mut hands = Vec::with_capacity(target);
        let mut misses = 0;
        while hands.len() < target {
            let (top, _) = self.deck.cards_mut().partial_shuffle(&mut *self.rng, k);
            let hand = Hand::<Descending>::from(top.to_vec());
            if seen.insert(hand.key()) {
                hands.push(hand);
                misses = 0;
            } else if misses < MAX_REJECTIONS {
                misses += 1;
            } else {
                log::warn!(
                    "{:<32}{:<32}",
                    "rejection sampling stalled",
                    format!("{} of {}", hands.len(), target)
                );
                break;
            }
        }
        log::debug!("{:<32}{:<32}", "sampled hands", hands.len());
        hands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn distinct(hands: &[Hand]) -> bool {
        let keys = hands.iter().map(Hand::key).collect::<HashSet<_>>();
        keys.len() == hands.len()
    }

    #[test]
    fn invalid_requests_are_empty() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let ref mut deck = Deck::new();
        assert!(Sampler::new(deck, rng).draw(0, 10).is_empty());
        assert!(Sampler::new(deck, rng).draw(2, 0).is_empty());
        assert!(Sampler::new(deck, rng).draw(53, 10).is_empty());
    }

    #[test]
    fn limited_draw_is_distinct() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let ref mut deck = Deck::new();
        let hands = Sampler::new(deck, rng).draw(5, 1_000);
        assert_eq!(hands.len(), 1_000);
        assert!(hands.iter().all(|h| h.count() == 5));
        assert!(distinct(&hands));
        assert_eq!(deck.len(), 52);
    }

    #[test]
    fn exhausts_small_space() {
        let ref mut rng = SmallRng::seed_from_u64(2);
        let ref mut deck = Deck::new().excluding(&Card::parse("As Ks 2h 3h").unwrap());
        let hands = Sampler::new(deck, rng).draw(2, 10_000);
        assert_eq!(hands.len(), 1_128);
        assert!(distinct(&hands));
    }

    #[test]
    fn near_exhaustive_rejection() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let ref mut deck = Deck::from(Card::parse("2c 3c 4c 5c 6c 7c 8c 9c").unwrap());
        let hands = Sampler::new(deck, rng).draw(3, 55);
        assert_eq!(hands.len(), 55);
        assert!(distinct(&hands));
    }

    #[test]
    fn replicated_deck_dedups_by_key() {
        let ref mut rng = SmallRng::seed_from_u64(4);
        let ref mut deck = Deck::from(Card::parse("As Ks").unwrap()).times(2);
        let hands = Sampler::new(deck, rng).draw(2, 100);
        // {AA, AK, KK} out of C(4, 2) = 6 positional pairs
        assert_eq!(hands.len(), 3);
        assert!(distinct(&hands));
    }

    #[test]
    fn replicated_deck_rejection_terminates() {
        let ref mut rng = SmallRng::seed_from_u64(5);
        let ref mut deck = Deck::new().times(2);
        let hands = Sampler::new(deck, rng).draw(1, 104);
        assert_eq!(hands.len(), 52);
    }
}
