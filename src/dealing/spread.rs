use super::dealer::Dealer;
use super::dealer::Standard;
use crate::Error;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use rand::Rng;

/// A plain deal of one or more packs, with no board.
///
/// Kept cards come off the top first and go to nobody. When no per-player
/// count is set, the rest of the deck is split evenly and any remainder
/// stays in the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spread {
    pub players: usize,
    pub decks: usize,
    pub jokers: bool,
    pub keep: usize,
    pub cards: Option<usize>,
}

impl Default for Spread {
    fn default() -> Self {
        Self {
            players: 2,
            decks: 1,
            jokers: true,
            keep: 0,
            cards: None,
        }
    }
}

/// The outcome of a [`Spread`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub kept: Vec<Card>,
    pub hands: Vec<Hand>,
    pub deck: Deck,
}

impl Spread {
    /// Every card in play before the shuffle.
    pub fn deck(&self) -> Deck {
        let pack = match self.jokers {
            true => Deck::with_jokers(),
            false => Deck::new(),
        };
        pack.times(self.decks.max(1))
    }
    /// Cards each player receives.
    pub fn per_player(&self) -> usize {
        self.cards.unwrap_or_else(|| {
            self.deck().len().saturating_sub(self.keep) / self.players.max(1)
        })
    }

    pub fn deal<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Deal, Error> {
        if self.players == 0 {
            return Err(Error::NoPlayers);
        }
        let mut deck = self.deck();
        let n = self.per_player();
        let needed = n
            .checked_mul(self.players)
            .and_then(|dealt| dealt.checked_add(self.keep));
        if needed.is_none_or(|needed| needed > deck.len()) {
            return Err(Error::NotEnoughCards);
        }
        deck.shuffle(rng);
        let kept = deck.take(self.keep)?;
        let hands = Standard.deal(&mut deck, n, self.players)?;
        log::debug!("{:<32}{:<32}", "spread", format!("{} x {}", self.players, n));
        Ok(Deal { kept, hands, deck })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(11)
    }

    #[test]
    fn whole_pack_split_evenly() {
        let deal = Spread::default().deal(&mut rng()).unwrap();
        assert_eq!(deal.hands.len(), 2);
        assert!(deal.hands.iter().all(|h| h.count() == 27));
        assert!(deal.deck.is_empty());
        let jokers = deal
            .hands
            .iter()
            .flat_map(|h| h.cards())
            .filter(|c| c.is_joker())
            .count();
        assert_eq!(jokers, 2);
    }

    #[test]
    fn two_packs_with_kept_cards() {
        let spread = Spread {
            players: 4,
            decks: 2,
            keep: 8,
            ..Spread::default()
        };
        assert_eq!(spread.deck().len(), 108);
        assert_eq!(spread.per_player(), 25);
        let deal = spread.deal(&mut rng()).unwrap();
        assert_eq!(deal.kept.len(), 8);
        assert!(deal.hands.iter().all(|h| h.count() == 25));
        assert_eq!(deal.deck.len(), 0);
    }

    #[test]
    fn fixed_count_leaves_the_rest() {
        let spread = Spread {
            players: 3,
            jokers: false,
            cards: Some(5),
            ..Spread::default()
        };
        let deal = spread.deal(&mut rng()).unwrap();
        assert!(deal.hands.iter().all(|h| h.count() == 5));
        assert_eq!(deal.deck.len(), 37);
        assert!(deal.hands.iter().flat_map(|h| h.cards()).all(|c| !c.is_joker()));
    }

    #[test]
    fn too_many_cards_asked_for() {
        let spread = Spread {
            players: 4,
            cards: Some(13),
            keep: 3,
            ..Spread::default()
        };
        assert_eq!(spread.deal(&mut rng()), Err(Error::NotEnoughCards));
        let spread = Spread {
            players: 0,
            ..Spread::default()
        };
        assert_eq!(spread.deal(&mut rng()), Err(Error::NoPlayers));
    }
}
