use super::card::Card;
use super::organizer::Descending;
use super::organizer::Organizer;
use crate::Error;
use std::marker::PhantomData;

/// An ordered collection of cards.
///
/// Unlike [`CardSet`](super::set::CardSet), a Hand keeps insertion order and
/// tolerates repeats, which replicated decks produce. Its [`Organizer`]
/// decides the canonical order used by [`Hand::key`] and by display.
#[derive(Debug)]
pub struct Hand<O = Descending> {
    cards: Vec<Card>,
    order: PhantomData<O>,
}

impl<O: Organizer> Hand<O> {
    pub fn new() -> Self {
        Self::from(Vec::new())
    }
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }
    /// Removes the card at `index`, or None if out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }
    pub fn count(&self) -> usize {
        self.cards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    pub fn clear(&mut self) {
        self.cards.clear();
    }
    pub fn sort(&mut self) {
        O::sort(&mut self.cards);
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    /// Canonical key: the cards in organizer order. Two hands share a key
    /// exactly when they hold the same cards with the same multiplicities.
    pub fn key(&self) -> Vec<Card> {
        let mut cards = self.cards.clone();
        O::sort(&mut cards);
        cards
    }
    /// The same cards under another ordering policy.
    pub fn organize<P: Organizer>(self) -> Hand<P> {
        Hand::from(self.cards)
    }
}

impl<O: Organizer> Default for Hand<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> Clone for Hand<O> {
    fn clone(&self) -> Self {
        Self {
            cards: self.cards.clone(),
            order: PhantomData,
        }
    }
}

impl<O> PartialEq for Hand<O> {
    fn eq(&self, other: &Self) -> bool {
        self.cards == other.cards
    }
}
impl<O> Eq for Hand<O> {}

/// Vec<Card> isomorphism (order preserved)
impl<O> From<Vec<Card>> for Hand<O> {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards,
            order: PhantomData,
        }
    }
}
impl<O> From<Hand<O>> for Vec<Card> {
    fn from(hand: Hand<O>) -> Self {
        hand.cards
    }
}

/// str isomorphism
/// this follows from Vec<Card> isomorphism
impl<O> TryFrom<&str> for Hand<O> {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Card::parse(s).map(Self::from)
    }
}

/// comma-joined in organizer order, e.g. "A♠,K♥,Q♦"
impl<O: Organizer> std::fmt::Display for Hand<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self
            .key()
            .iter()
            .map(Card::to_string)
            .collect::<Vec<_>>();
        write!(f, "{}", cards.join(","))
    }
}
