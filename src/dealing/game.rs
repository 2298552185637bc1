use super::dealer::Dealer;
use super::dealer::Standard;
use super::variant::Variant;
use crate::Error;
use crate::cards::Board;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::cards::Street;
use rand::Rng;

/// One hand of hold'em from shuffle to river.
///
/// Tracks the deck, each seat's hole cards, the board, and the muck of burned
/// cards. The muck is never part of any evaluation.
#[derive(Debug, Clone)]
pub struct Game<D = Standard> {
    variant: Variant,
    dealer: D,
    deck: Deck,
    players: Vec<Hand>,
    board: Board,
    muck: Vec<Card>,
}

impl<D: Dealer + Default> Game<D> {
    pub fn new(variant: Variant, players: usize) -> Self {
        Self {
            variant,
            dealer: D::default(),
            deck: variant.deck(),
            players: vec![Hand::new(); players],
            board: Board::empty(),
            muck: Vec::new(),
        }
    }
}

impl<D: Dealer> Game<D> {
    pub fn variant(&self) -> Variant {
        self.variant
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn players(&self) -> &[Hand] {
        &self.players
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    /// Burned cards, in burn order.
    pub fn muck(&self) -> &[Card] {
        &self.muck
    }
    pub fn street(&self) -> Option<Street> {
        self.board.street()
    }
    /// Every seat's hole cards, ready for equity calculation.
    pub fn holes(&self) -> Result<Vec<Hole>, Error> {
        self.players
            .iter()
            .map(|hand| Hole::try_from(hand.cards().to_vec()))
            .collect()
    }

    /// Restores a full deck, shuffles, clears the table and deals hole cards.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), Error> {
        self.deck = self.variant.deck();
        self.deck.shuffle(rng);
        self.board.clear();
        self.muck.clear();
        let seats = self.players.len();
        self.players = self.dealer.deal(&mut self.deck, self.variant.n_hole(), seats)?;
        log::debug!("{:<32}{:<32}", "dealt hole cards", seats);
        Ok(())
    }
    /// Moves the top card to the muck.
    pub fn burn(&mut self) -> Result<(), Error> {
        let card = self.deck.draw().map_err(|_| Error::NothingToBurn)?;
        self.muck.push(card);
        Ok(())
    }
    /// Burns one card, then deals `n` to the board.
    pub fn deal_community(&mut self, n: usize) -> Result<(), Error> {
        if self.board.len() + n > crate::N_BOARD {
            return Err(Error::BoardOverflow {
                added: n,
                current: self.board.len(),
            });
        }
        self.burn()?;
        let dealt = self.dealer.deal(&mut self.deck, n, 1)?;
        for hand in dealt {
            self.board.add(hand.cards())?;
        }
        log::debug!("{:<32}{:<32}", "dealt community cards", self.board);
        Ok(())
    }
    pub fn deal_flop(&mut self) -> Result<(), Error> {
        self.deal_community(Street::Flop.n_revealed())
    }
    pub fn deal_turn_or_river(&mut self) -> Result<(), Error> {
        self.deal_community(Street::Turn.n_revealed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardSet;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn started(variant: Variant, players: usize) -> Game {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let mut game = Game::new(variant, players);
        game.start(rng).unwrap();
        game
    }

    #[test]
    fn texas_to_the_river() {
        let mut game = started(Variant::Texas, 6);
        assert!(game.players().iter().all(|p| p.count() == 2));
        assert_eq!(game.deck().len(), 40);
        assert_eq!(game.street(), Some(Street::Pref));

        game.deal_flop().unwrap();
        assert_eq!(game.board().len(), 3);
        assert_eq!(game.muck().len(), 1);
        assert_eq!(game.deck().len(), 36);
        assert_eq!(game.street(), Some(Street::Flop));

        game.deal_turn_or_river().unwrap();
        game.deal_turn_or_river().unwrap();
        assert_eq!(game.board().len(), 5);
        assert_eq!(game.muck().len(), 3);
        assert_eq!(game.deck().len(), 32);
        assert_eq!(game.street(), Some(Street::Rive));
    }

    #[test]
    fn full_board_refuses_before_burning() {
        let mut game = started(Variant::Texas, 2);
        game.deal_community(5).unwrap();
        let before = game.deck().len();
        assert_eq!(
            game.deal_turn_or_river(),
            Err(Error::BoardOverflow { added: 1, current: 5 })
        );
        assert_eq!(game.deck().len(), before);
        assert_eq!(game.muck().len(), 1);
    }

    #[test]
    fn every_card_accounted_for() {
        let mut game = started(Variant::Texas, 4);
        game.deal_flop().unwrap();
        game.deal_turn_or_river().unwrap();
        let mut cards = game
            .players()
            .iter()
            .flat_map(|p| p.cards().iter().copied())
            .collect::<Vec<Card>>();
        cards.extend_from_slice(game.board().cards());
        cards.extend_from_slice(game.muck());
        cards.extend_from_slice(game.deck().cards());
        assert_eq!(cards.len(), 52);
        assert_eq!(CardSet::from(cards.as_slice()).size(), 52);
    }

    #[test]
    fn omaha_deals_four() {
        let game = started(Variant::Omaha, 3);
        assert!(game.players().iter().all(|p| p.count() == 4));
        assert_eq!(game.holes().unwrap().len(), 3);
    }

    #[test]
    fn short_deck_runs_dry() {
        let mut game = started(Variant::Short, 18);
        assert!(game.deck().is_empty());
        assert!(
            game.players()
                .iter()
                .flat_map(|p| p.cards())
                .all(|c| c.rank() >= crate::cards::Rank::Six)
        );
        assert_eq!(game.deal_flop(), Err(Error::NothingToBurn));
        assert_eq!(Error::NothingToBurn.to_string(), "no cards left to burn");
    }

    #[test]
    fn too_many_seats() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut game = Game::<Standard>::new(Variant::Texas, 27);
        assert_eq!(game.start(rng), Err(Error::NotEnoughCards));
    }

    #[test]
    fn restart_resets_the_table() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let mut game = started(Variant::Texas, 2);
        game.deal_flop().unwrap();
        game.start(rng).unwrap();
        assert!(game.board().is_empty());
        assert!(game.muck().is_empty());
        assert_eq!(game.deck().len(), 48);
    }

    #[test]
    fn holes_before_the_deal() {
        let game = Game::<Standard>::new(Variant::Texas, 2);
        assert_eq!(game.holes(), Err(Error::InvalidHole(0)));
    }
}
