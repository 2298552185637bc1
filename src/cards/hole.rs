use super::card::Card;
use super::set::CardSet;
use crate::Error;
use crate::N_HOLE;
use crate::N_OMAHA;

/// A player's private cards: two in Texas and short-deck, four in Omaha.
/// Immutable once built, and never holding the same card twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hole(Vec<Card>);

impl Hole {
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// (Card, Card) pair, refusing a repeated card
impl TryFrom<(Card, Card)> for Hole {
    type Error = Error;
    fn try_from((a, b): (Card, Card)) -> Result<Self, Self::Error> {
        Self::try_from(vec![a, b])
    }
}

impl TryFrom<Vec<Card>> for Hole {
    type Error = Error;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        match cards.len() {
            N_HOLE | N_OMAHA => {
                let mut seen = CardSet::empty();
                match cards.iter().find(|c| !seen.insert(**c)) {
                    Some(card) => Err(Error::DuplicateCard(*card)),
                    None => Ok(Self(cards)),
                }
            }
            n => Err(Error::InvalidHole(n)),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Hole {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?)
    }
}

impl From<Hole> for Vec<Card> {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.0.iter().map(Card::to_string).collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}
