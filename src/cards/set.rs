use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;

/// CardSet represents an unordered set of Cards as a single u64, one bit per
/// card, so membership, union and per-suit views never allocate. The 54 LSBs
/// cover the standard deck and both jokers.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CardSet(u64);

impl CardSet {
    pub fn empty() -> Self {
        Self(0)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    /// Adds a card, returning false if it was already present.
    pub fn insert(&mut self, card: Card) -> bool {
        let fresh = !self.contains(&card);
        self.0 |= u64::from(card);
        fresh
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0 | other.0)
    }
    /// The standard cards of one suit.
    pub fn of(&self, suit: Suit) -> Self {
        Self(self.0 & u64::from(suit))
    }
    /// The cards of one rank, in any suit.
    pub fn ranked(&self, rank: Rank) -> Self {
        Self(self.0 & u64::from(rank))
    }
    /// Cards from highest to lowest.
    pub fn descending(self) -> impl Iterator<Item = Card> {
        (0..54u8)
            .rev()
            .filter_map(|n| Card::try_from(n).ok())
            .filter(move |card| self.contains(card))
    }

    const fn mask() -> u64 {
        0x003F_FFFF_FFFF_FFFF
    }
}

/// we can empty a set from low to high
/// by removing the lowest card until the set is empty
impl Iterator for CardSet {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_empty() {
            None
        } else {
            let card = Card::try_from(self.0.trailing_zeros() as u8).ok()?;
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
impl From<u64> for CardSet {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<CardSet> for u64 {
    fn from(set: CardSet) -> Self {
        set.0
    }
}

/// &[Card] injection
/// we SUM/OR the cards to get the bitstring. repeats collapse
impl From<&[Card]> for CardSet {
    fn from(cards: &[Card]) -> Self {
        Self(cards.iter().map(|c| u64::from(*c)).fold(0u64, |a, b| a | b))
    }
}

/// one-way conversion to u16 Rank masks
/// a rank is present if any suit of its nibble is. jokers are ignored
impl From<CardSet> for u16 {
    fn from(set: CardSet) -> Self {
        Rank::all()
            .into_iter()
            .filter(|rank| set.0 & u64::from(*rank) != 0)
            .fold(0u16, |ranks, rank| ranks | u16::from(rank))
    }
}

impl std::fmt::Display for CardSet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in *self {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
