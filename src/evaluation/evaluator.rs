use super::evaluation::Evaluation;
use super::exhaustive::Exhaustive;
use super::optimized::Optimized;
use crate::Error;
use crate::cards::Card;

/// Picks the best five-card hand from two hole cards and five board cards.
///
/// Any other shape, a joker, or a repeated card yields
/// [`Evaluation::invalid`] rather than an error. Implementations must agree
/// with each other on every valid input.
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, hole: &[Card], board: &[Card]) -> Evaluation;
}

/// The built-in evaluators, chosen at construction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Scores all 21 five-card subsets independently.
    Exhaustive,
    /// One bitmask pass over all seven cards.
    #[default]
    Optimized,
}

impl Evaluator for Strategy {
    fn evaluate(&self, hole: &[Card], board: &[Card]) -> Evaluation {
        match self {
            Strategy::Exhaustive => Exhaustive.evaluate(hole, board),
            Strategy::Optimized => Optimized.evaluate(hole, board),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exhaustive" => Ok(Strategy::Exhaustive),
            "optimized" => Ok(Strategy::Optimized),
            _ => Err(Error::InvalidStrategy(s.to_string())),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Strategy::Exhaustive => write!(f, "exhaustive"),
            Strategy::Optimized => write!(f, "optimized"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("Exhaustive".parse::<Strategy>(), Ok(Strategy::Exhaustive));
        assert_eq!("optimized".parse::<Strategy>(), Ok(Strategy::Optimized));
        assert!("fast".parse::<Strategy>().is_err());
    }
}
