use crate::evaluation::Evaluation;

/// A complete board, scored directly without sampling.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Showdown {
    evaluations: Vec<Evaluation>,
    winners: Vec<usize>,
}

impl Showdown {
    /// Per-player strength and best five, in seat order.
    pub fn evaluations(&self) -> &[Evaluation] {
        &self.evaluations
    }
    pub fn winners(&self) -> &[usize] {
        &self.winners
    }
}

impl From<(Vec<Evaluation>, Vec<usize>)> for Showdown {
    fn from((evaluations, winners): (Vec<Evaluation>, Vec<usize>)) -> Self {
        Self {
            evaluations,
            winners,
        }
    }
}

impl std::fmt::Display for Showdown {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, eval) in self.evaluations.iter().enumerate() {
            let mark = if self.winners.contains(&i) { "*" } else { " " };
            writeln!(f, "{} P{:<3}{}", mark, i + 1, eval)?;
        }
        Ok(())
    }
}
