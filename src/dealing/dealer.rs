use crate::Error;
use crate::cards::Deck;
use crate::cards::Hand;

/// Hands out cards from the top of a deck.
pub trait Dealer {
    /// Deals `n` cards to each of `hands` hands, consuming them from the deck.
    fn deal(&self, deck: &mut Deck, n: usize, hands: usize) -> Result<Vec<Hand>, Error>;
}

/// One card at a time around the table, the way a house dealer pitches.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Standard;

impl Dealer for Standard {
    fn deal(&self, deck: &mut Deck, n: usize, hands: usize) -> Result<Vec<Hand>, Error> {
        if deck.is_empty() {
            return Err(Error::EmptyDeck);
        }
        if n == 0 {
            return Err(Error::NonPositiveCount);
        }
        if n.checked_mul(hands).is_none_or(|total| total > deck.len()) {
            return Err(Error::NotEnoughCards);
        }
        let mut dealt: Vec<Hand> = vec![Hand::new(); hands];
        for (i, card) in deck.take(n * hands)?.into_iter().enumerate() {
            dealt[i % hands].add(card);
        }
        Ok(dealt)
    }
}
