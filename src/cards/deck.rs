use super::card::Card;
use super::hand::Hand;
use super::rank::Rank;
use super::set::CardSet;
use super::suit::Suit;
use crate::Error;
use crate::sampling::Sampler;
use rand::Rng;
use rand::seq::SliceRandom;

/// An ordered, mutable sequence of the cards still in play.
///
/// Cards are dealt and burned from the top (index 0). Replicated decks from
/// [`Deck::times`] hold each physical card once per pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck, ♠ ♥ ♦ ♣ each running A, 2, ..., K.
    pub fn new() -> Self {
        Self(
            [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club]
                .into_iter()
                .flat_map(|suit| Self::faces().map(move |rank| (rank, suit)))
                .filter_map(|pair| Card::try_from(pair).ok())
                .collect(),
        )
    }
    /// The 52 standard cards followed by the red and white jokers.
    pub fn with_jokers() -> Self {
        let mut deck = Self::new();
        deck.0.push(Card::RED_JOKER);
        deck.0.push(Card::WHITE_JOKER);
        deck
    }
    /// The 36-card short deck: sixes and up.
    pub fn short() -> Self {
        Self(
            Self::new()
                .0
                .into_iter()
                .filter(|card| card.rank() >= Rank::Six)
                .collect(),
        )
    }
    /// Removes every copy of the masked cards.
    pub fn excluding(self, masks: &[Card]) -> Self {
        let masks = CardSet::from(masks);
        Self(self.0.into_iter().filter(|c| !masks.contains(c)).collect())
    }
    /// `n` packs back to back. Zero packs is an empty deck.
    pub fn times(&self, n: usize) -> Self {
        Self(self.0.repeat(n))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.0
    }

    /// Uniform Fisher–Yates shuffle.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }
    /// Removes the top card.
    pub fn draw(&mut self) -> Result<Card, Error> {
        if self.0.is_empty() {
            Err(Error::EmptyDeck)
        } else {
            Ok(self.0.remove(0))
        }
    }
    /// Removes the top `n` cards, or nothing if fewer remain.
    pub fn take(&mut self, n: usize) -> Result<Vec<Card>, Error> {
        if n > self.0.len() {
            Err(Error::NotEnoughCards)
        } else {
            Ok(self.0.drain(..n).collect())
        }
    }

    /// C(len, k): how many distinct k-card hands this deck could produce.
    pub fn combinations(&self, k: usize) -> u64 {
        crate::sampling::combinations(self.len(), k)
    }
    /// Up to `limit` distinct k-card hands. Reorders the deck.
    pub fn sample<R: Rng + ?Sized>(&mut self, k: usize, limit: usize, rng: &mut R) -> Vec<Hand> {
        Sampler::new(self, rng).draw(k, limit)
    }

    fn faces() -> impl Iterator<Item = Rank> {
        std::iter::once(Rank::Ace).chain(Rank::all().into_iter().take(12))
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}
impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
