use super::card::Card;
use std::cmp::Ordering;

/// An ordering policy for the cards of a [`Hand`](super::hand::Hand).
///
/// The policy drives both display and the canonical key used to recognise
/// two hands holding the same cards in a different order.
pub trait Organizer {
    fn order(a: &Card, b: &Card) -> Ordering;
    fn sort(cards: &mut [Card]) {
        cards.sort_by(Self::order);
    }
}

/// Jokers first (red before white), then rank descending, then ♠ ♥ ♦ ♣.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Descending;

impl Descending {
    fn weight(card: &Card) -> u8 {
        match *card {
            Card::RED_JOKER => u8::MAX,
            Card::WHITE_JOKER => u8::MAX - 1,
            card => u8::from(card),
        }
    }
}

impl Organizer for Descending {
    fn order(a: &Card, b: &Card) -> Ordering {
        Self::weight(b).cmp(&Self::weight(a))
    }
}
