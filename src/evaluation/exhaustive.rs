use super::evaluation::Evaluation;
use super::evaluator::Evaluator;
use super::ranking::Ranking;
use super::strength::Strength;
use crate::N_FIVE;
use crate::cards::Card;
use crate::cards::Descending;
use crate::cards::Organizer;
use crate::cards::Rank;
use crate::sampling::Subsets;

/// Brute force over all C(7, 5) = 21 five-card subsets.
///
/// Every subset is scored on its own from face-value and suit counts, and
/// the first strictly strongest subset wins. Slow, but shares no code with
/// [`Optimized`](super::optimized::Optimized), which is what makes the two
/// worth cross-checking.
#[derive(Debug, Default, Clone, Copy)]
pub struct Exhaustive;

impl Evaluator for Exhaustive {
    fn evaluate(&self, hole: &[Card], board: &[Card]) -> Evaluation {
        let Some(mut seven) = Evaluation::seven(hole, board) else {
            return Evaluation::invalid();
        };
        Descending::sort(&mut seven);
        Subsets::new(seven.len(), N_FIVE)
            .map(|mask| Subsets::select(mask, &seven))
            .map(|five| (Self::score(&five), five))
            .fold(None, |best: Option<(Strength, Vec<Card>)>, (strength, five)| {
                match best {
                    Some((champion, cards)) if champion >= strength => Some((champion, cards)),
                    _ => Some((strength, five)),
                }
            })
            .map(Evaluation::from)
            .unwrap_or_default()
    }
}

impl Exhaustive {
    /// Strength of exactly five standard cards.
    pub fn score(five: &[Card]) -> Strength {
        let mut counts = [0u8; 15];
        let mut suits = [0u8; 4];
        let mut faces = 0u16;
        for card in five {
            let value = card.rank().value() as usize;
            counts[value] += 1;
            suits[u8::from(card.suit()) as usize % 4] += 1;
            faces |= 1 << value;
        }
        // ace plays low too
        if faces & (1 << 14) != 0 {
            faces |= 1 << 1;
        }
        let flush = suits.iter().any(|n| *n as usize == N_FIVE);
        let straight = (1..=10u8)
            .rev()
            .find(|lo| (faces >> lo) & 0b11111 == 0b11111)
            .map(|lo| lo + 4);
        let mut groups = (2..=14u8)
            .rev()
            .filter(|v| counts[*v as usize] > 0)
            .map(|v| (counts[v as usize], v))
            .collect::<Vec<(u8, u8)>>();
        groups.sort_by(|a, b| b.0.cmp(&a.0));
        let pattern = groups.iter().map(|(n, _)| *n).collect::<Vec<u8>>();
        let ranking = match (straight, flush, pattern.as_slice()) {
            (Some(14), true, _) => Ranking::RoyalFlush,
            (Some(_), true, _) => Ranking::StraightFlush,
            (_, _, [4, 1]) => Ranking::FourOAK,
            (_, _, [3, 2]) => Ranking::FullHouse,
            (None, true, _) => Ranking::Flush,
            (Some(_), false, _) => Ranking::Straight,
            (_, _, [3, 1, 1]) => Ranking::ThreeOAK,
            (_, _, [2, 2, 1]) => Ranking::TwoPair,
            (_, _, [2, 1, 1, 1]) => Ranking::OnePair,
            _ => Ranking::HighCard,
        };
        let values = match ranking {
            Ranking::Straight | Ranking::StraightFlush => straight
                .and_then(Rank::from_value)
                .into_iter()
                .collect(),
            _ => groups
                .iter()
                .filter_map(|(_, v)| Rank::from_value(*v))
                .collect(),
        };
        Strength::from((ranking, values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(s: &str) -> (Ranking, Vec<u8>) {
        let strength = Exhaustive::score(&Card::parse(s).unwrap());
        (strength.ranking(), strength.faces())
    }

    #[test]
    fn five_card_classes() {
        assert_eq!(score("As Ks Qs Js Ts"), (Ranking::RoyalFlush, vec![14, 13, 12, 11, 10]));
        assert_eq!(score("9h Kh Qh Jh Th"), (Ranking::StraightFlush, vec![13]));
        assert_eq!(score("As Ah Ad Ac Ks"), (Ranking::FourOAK, vec![14, 13]));
        assert_eq!(score("3s 3h 9d 9c 9s"), (Ranking::FullHouse, vec![9, 3]));
        assert_eq!(score("2d 9d 4d Jd Kd"), (Ranking::Flush, vec![13, 11, 9, 4, 2]));
        assert_eq!(score("6s 7h 8d 9c Ts"), (Ranking::Straight, vec![10]));
        assert_eq!(score("Qs Qh Qd 2c 7s"), (Ranking::ThreeOAK, vec![12, 7, 2]));
        assert_eq!(score("5s 5h Kd Kc 2s"), (Ranking::TwoPair, vec![13, 5, 2]));
        assert_eq!(score("Ts Th 2d 9c 8s"), (Ranking::OnePair, vec![10, 9, 8, 2]));
        assert_eq!(score("As Jh 9d 4c 2s"), (Ranking::HighCard, vec![14, 11, 9, 4, 2]));
    }

    #[test]
    fn wheels() {
        assert_eq!(score("As 2h 3d 4c 5s"), (Ranking::Straight, vec![5]));
        assert_eq!(score("Ah 2h 3h 4h 5h"), (Ranking::StraightFlush, vec![5]));
    }

    #[test]
    fn no_wraparound() {
        assert_eq!(score("Qs Kh Ad 2c 3s").0, Ranking::HighCard);
    }

    #[test]
    fn best_of_seven() {
        let hole = Card::parse("Ah Kh").unwrap();
        let board = Card::parse("Qh Jh Th 2c 2d").unwrap();
        let eval = Exhaustive.evaluate(&hole, &board);
        assert_eq!(eval.ranking(), Ranking::RoyalFlush);
        assert_eq!(
            eval.best().map(|b| b.to_vec()),
            Some(Card::parse("Ah Kh Qh Jh Th").unwrap())
        );
    }

    #[test]
    fn invalid_shapes() {
        let board = Card::parse("Qh Jh Th 2c 2d").unwrap();
        let eval = Exhaustive.evaluate(&Card::parse("Ah").unwrap(), &board);
        assert_eq!(eval.ranking(), Ranking::Invalid);
        assert!(eval.best().is_none());
    }
}
