use super::showdown::Showdown;
use super::tally::Tally;
use crate::Error;
use crate::N_BOARD;
use crate::N_HOLE;
use crate::PARALLEL_THRESHOLD;
use crate::Probability;
use crate::cards::Board;
use crate::cards::Card;
use crate::cards::CardSet;
use crate::cards::Deck;
use crate::cards::Hole;
use crate::evaluation::Evaluator;
use crate::evaluation::Strategy;
use crate::evaluation::Strength;
use crate::evaluation::find_winners;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;
use std::sync::Mutex;
use std::sync::PoisonError;

/// How runouts are spread over threads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Execution {
    /// One thread, in order.
    Sequential,
    /// One contiguous chunk per rayon worker.
    Parallel,
    /// Parallel once there are at least [`PARALLEL_THRESHOLD`] runouts.
    #[default]
    Auto,
}

/// Monte Carlo equity over the unseen community cards.
///
/// Each call builds a deck without the known cards, draws distinct runouts
/// for the missing board, scores every player on each, and normalizes the
/// credit into `players + 1` probabilities: one per player, then the
/// all-way tie.
#[derive(Debug, Clone)]
pub struct Calculator<E = Strategy> {
    holes: Vec<Hole>,
    trials: usize,
    evaluator: E,
    board: Board,
    execution: Execution,
}

impl<E: Evaluator> Calculator<E> {
    /// More than five community cards are cut down to the first five.
    pub fn new(holes: Vec<Hole>, trials: usize, evaluator: E, board: Vec<Card>) -> Self {
        Self {
            holes,
            trials,
            evaluator,
            board: Board::truncated(board),
            execution: Execution::default(),
        }
    }
    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    /// Grows the known board, failing unchanged past five cards.
    pub fn append(&mut self, cards: &[Card]) -> Result<(), Error> {
        self.board.add(cards)
    }

    /// Every card not held by a player or already on the board.
    pub fn deck(&self) -> Deck {
        Deck::new().excluding(&self.known())
    }
    /// Trials after capping by the remaining runout space. A complete board
    /// needs exactly one.
    pub fn required(&self) -> usize {
        match self.board.unknown() {
            0 => 1,
            unknown => {
                let space = self.deck().combinations(unknown);
                self.trials.min(usize::try_from(space).unwrap_or(usize::MAX))
            }
        }
    }

    /// Win probabilities seeded from fresh entropy.
    pub fn probabilities(&self) -> Result<Vec<Probability>, Error> {
        let ref mut rng = SmallRng::from_rng(&mut rand::rng());
        self.probabilities_with(rng)
    }
    /// Win probabilities drawn from the given source.
    pub fn probabilities_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<Probability>, Error> {
        self.validate()?;
        let runouts = self.runouts(rng);
        let tally = match self.execution {
            Execution::Sequential => self.sequential(&runouts),
            Execution::Parallel => self.parallel(&runouts),
            Execution::Auto if runouts.len() >= PARALLEL_THRESHOLD => self.parallel(&runouts),
            Execution::Auto => self.sequential(&runouts),
        };
        Ok(tally.probabilities())
    }

    /// Scores a complete board directly.
    pub fn showdown(&self) -> Result<Showdown, Error> {
        if self.board.len() != N_BOARD {
            return Err(Error::IncompleteBoard(self.board.len()));
        }
        self.validate()?;
        let evaluations = self
            .holes
            .iter()
            .map(|hole| self.evaluator.evaluate(hole.cards(), self.board.cards()))
            .collect::<Vec<_>>();
        let strengths = evaluations
            .iter()
            .map(|eval| eval.strength().clone())
            .collect::<Vec<_>>();
        let winners = find_winners(&strengths);
        Ok(Showdown::from((evaluations, winners)))
    }

    fn known(&self) -> Vec<Card> {
        self.holes
            .iter()
            .flat_map(|hole| hole.cards().iter().copied())
            .chain(self.board.cards().iter().copied())
            .collect()
    }

    fn validate(&self) -> Result<(), Error> {
        if self.holes.is_empty() {
            return Err(Error::NoPlayers);
        }
        if let Some(hole) = self.holes.iter().find(|h| h.len() != N_HOLE) {
            return Err(Error::InvalidHole(hole.len()));
        }
        let mut seen = CardSet::empty();
        for card in self.known() {
            if card.is_joker() {
                return Err(Error::JokerInPlay(card));
            }
            if !seen.insert(card) {
                return Err(Error::DuplicateCard(card));
            }
        }
        let unknown = self.board.unknown();
        if unknown > 0 && self.trials == 0 {
            return Err(Error::NoTrials);
        }
        if unknown > self.deck().len() {
            return Err(Error::NotEnoughCards);
        }
        Ok(())
    }

    /// Distinct sets of missing community cards, materialized up front so
    /// workers never touch the deck.
    fn runouts<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Vec<Card>> {
        match self.board.unknown() {
            0 => vec![Vec::new()],
            unknown => {
                let trials = self.required();
                log::debug!("{:<32}{:<32}", "sampling runouts", trials);
                self.deck()
                    .sample(unknown, trials, rng)
                    .into_iter()
                    .map(Vec::from)
                    .collect()
            }
        }
    }

    fn strengths(&self, runout: &[Card]) -> Vec<Strength> {
        let board = self
            .board
            .cards()
            .iter()
            .chain(runout.iter())
            .copied()
            .collect::<Vec<Card>>();
        self.holes
            .iter()
            .map(|hole| self.evaluator.evaluate(hole.cards(), &board))
            .map(|eval| eval.strength().clone())
            .collect()
    }

    fn sequential(&self, runouts: &[Vec<Card>]) -> Tally {
        let mut tally = Tally::new(self.holes.len());
        for runout in runouts {
            tally.record(&find_winners(&self.strengths(runout)));
        }
        tally
    }

    fn parallel(&self, runouts: &[Vec<Card>]) -> Tally {
        let chunk = runouts
            .len()
            .div_ceil(rayon::current_num_threads())
            .max(1);
        log::debug!("{:<32}{:<32}", "parallel chunk size", chunk);
        let total = Mutex::new(Tally::new(self.holes.len()));
        runouts.par_chunks(chunk).for_each(|runouts| {
            let partial = self.sequential(runouts);
            total
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .merge(&partial);
        });
        total.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
