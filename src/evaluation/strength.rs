use super::ranking::Ranking;
use crate::cards::Rank;

/// A hand's strength.
///
/// Ordered by class first, then by the tie-break vector element by element.
/// Vectors of one class always share a length, so the derived lexicographic
/// order never has to compare a prefix against a longer vector.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Strength {
    ranking: Ranking,
    values: Vec<Rank>,
}

impl Strength {
    pub fn invalid() -> Self {
        Self::default()
    }
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
    pub fn values(&self) -> &[Rank] {
        &self.values
    }
    /// Tie-break vector as face values, e.g. `[14, 13, 11]`.
    pub fn faces(&self) -> Vec<u8> {
        self.values.iter().map(Rank::value).collect()
    }
}

impl From<(Ranking, Vec<Rank>)> for Strength {
    fn from((ranking, values): (Ranking, Vec<Rank>)) -> Self {
        debug_assert!(values.len() == ranking.n_values());
        Self { ranking, values }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<16}", self.ranking.to_string())?;
        for rank in self.values.iter() {
            write!(f, "{} ", rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strength(ranking: Ranking, values: &[u8]) -> Strength {
        let values = values.iter().filter_map(|v| Rank::from_value(*v)).collect();
        Strength::from((ranking, values))
    }

    #[test]
    fn class_dominates_values() {
        let pair = strength(Ranking::OnePair, &[14, 13, 12, 11]);
        let trips = strength(Ranking::ThreeOAK, &[2, 4, 3]);
        assert!(trips > pair);
    }

    #[test]
    fn values_break_ties() {
        let a = strength(Ranking::TwoPair, &[14, 13, 11]);
        let b = strength(Ranking::TwoPair, &[14, 13, 10]);
        let c = strength(Ranking::TwoPair, &[14, 12, 13]);
        assert!(a > b);
        assert!(b > c);
        assert_eq!(a.clone(), strength(Ranking::TwoPair, &[14, 13, 11]));
        assert_eq!(a.faces(), vec![14, 13, 11]);
    }

    #[test]
    fn invalid_loses() {
        assert!(Strength::invalid() < strength(Ranking::HighCard, &[7, 5, 4, 3, 2]));
    }
}
