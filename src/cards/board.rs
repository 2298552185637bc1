use super::card::Card;
use super::street::Street;
use crate::Error;
use crate::N_BOARD;

/// The shared community cards. Grows monotonically up to five cards.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board(Vec<Card>);

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }
    /// Keeps at most the first five cards, warning about the rest.
    pub fn truncated(mut cards: Vec<Card>) -> Self {
        if cards.len() > N_BOARD {
            log::warn!(
                "{:<32}{:<32}",
                "truncating community cards",
                format!("{} -> {}", cards.len(), N_BOARD)
            );
            cards.truncate(N_BOARD);
        }
        Self(cards)
    }
    /// Appends cards, failing without change if the board would overflow.
    pub fn add(&mut self, cards: &[Card]) -> Result<(), Error> {
        if self.0.len() + cards.len() > N_BOARD {
            Err(Error::BoardOverflow {
                added: cards.len(),
                current: self.0.len(),
            })
        } else {
            self.0.extend_from_slice(cards);
            Ok(())
        }
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Cards still to come before showdown.
    pub fn unknown(&self) -> usize {
        N_BOARD - self.0.len()
    }
    pub fn street(&self) -> Option<Street> {
        Street::try_from(self.0.len()).ok()
    }
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl TryFrom<&str> for Board {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut board = Self::empty();
        board.add(&Card::parse(s)?)?;
        Ok(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.0.iter().map(Card::to_string).collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}
