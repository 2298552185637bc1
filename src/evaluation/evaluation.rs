use super::ranking::Ranking;
use super::strength::Strength;
use crate::N_BOARD;
use crate::N_FIVE;
use crate::N_HOLE;
use crate::cards::Card;
use crate::cards::CardSet;

/// The evaluator's verdict: a strength plus the five cards that make it.
///
/// `best` is None exactly when the ranking is [`Ranking::Invalid`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    strength: Strength,
    best: Option<[Card; N_FIVE]>,
}

impl Evaluation {
    pub fn invalid() -> Self {
        Self::default()
    }
    pub fn strength(&self) -> &Strength {
        &self.strength
    }
    pub fn ranking(&self) -> Ranking {
        self.strength.ranking()
    }
    pub fn best(&self) -> Option<&[Card; N_FIVE]> {
        self.best.as_ref()
    }
    pub fn is_valid(&self) -> bool {
        self.best.is_some()
    }

    /// Two hole cards and five board cards, all standard and all distinct.
    pub(crate) fn seven(hole: &[Card], board: &[Card]) -> Option<[Card; N_HOLE + N_BOARD]> {
        if hole.len() != N_HOLE || board.len() != N_BOARD {
            return None;
        }
        let mut seen = CardSet::empty();
        let seven = hole.iter().chain(board.iter()).copied().collect::<Vec<Card>>();
        if seven.iter().any(|card| card.is_joker() || !seen.insert(*card)) {
            return None;
        }
        seven.try_into().ok()
    }
}

/// a strength and the cards behind it. anything but five cards is invalid
impl From<(Strength, Vec<Card>)> for Evaluation {
    fn from((strength, cards): (Strength, Vec<Card>)) -> Self {
        match <[Card; N_FIVE]>::try_from(cards) {
            Ok(best) => Self {
                strength,
                best: Some(best),
            },
            Err(_) => Self::invalid(),
        }
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.strength)?;
        if let Some(best) = self.best.as_ref() {
            let cards = best.iter().map(Card::to_string).collect::<Vec<_>>();
            write!(f, "[{}]", cards.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        Card::parse(s).unwrap()
    }

    #[test]
    fn seven_accepts_texas_showdown() {
        let seven = Evaluation::seven(&cards("As Ks"), &cards("2c 3d 4h 5s 6c"));
        assert!(seven.is_some());
    }

    #[test]
    fn seven_rejects_malformed_input() {
        let board = cards("2c 3d 4h 5s 6c");
        assert!(Evaluation::seven(&cards("As"), &board).is_none());
        assert!(Evaluation::seven(&cards("As Ks Qs Js"), &board).is_none());
        assert!(Evaluation::seven(&cards("As Ks"), &board[..4]).is_none());
        assert!(Evaluation::seven(&cards("As 2c"), &board).is_none());
        assert!(Evaluation::seven(&cards("As JokerRed"), &board).is_none());
    }
}
