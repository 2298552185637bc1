use crate::Probability;

/// Win and tie credit accumulated over a batch of runouts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
    wins: Vec<Probability>,
    ties: Probability,
    runs: usize,
}

impl Tally {
    pub fn new(players: usize) -> Self {
        Self {
            wins: vec![0.; players],
            ties: 0.,
            runs: 0,
        }
    }
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Credits one runout.
    ///
    /// A lone winner takes the whole credit; a split among some of the
    /// players shares it evenly; a split among all players is a tie.
    pub fn record(&mut self, winners: &[usize]) {
        self.runs += 1;
        match winners.len() {
            0 => {}
            1 => self.wins[winners[0]] += 1.,
            n if n == self.wins.len() => self.ties += 1.,
            n => winners
                .iter()
                .for_each(|w| self.wins[*w] += 1. / n as Probability),
        }
    }

    pub fn merge(&mut self, other: &Self) {
        debug_assert!(self.wins.len() == other.wins.len());
        self.wins
            .iter_mut()
            .zip(other.wins.iter())
            .for_each(|(a, b)| *a += b);
        self.ties += other.ties;
        self.runs += other.runs;
    }

    /// `players + 1` shares, the last being the all-way tie.
    pub fn probabilities(&self) -> Vec<Probability> {
        let runs = self.runs.max(1) as Probability;
        self.wins
            .iter()
            .chain(std::iter::once(&self.ties))
            .map(|credit| credit / runs)
            .collect()
    }
}
