use super::rank::Rank;
use super::suit::Suit;
use crate::Error;

/// A playing card encoded as a single byte.
///
/// The 52 standard cards map to `0..52` as `rank * 4 + suit`, so cards sort
/// first by rank and then by suit. The two jokers take `52` (red) and
/// `53` (white), above every standard card.
///
/// # Parsing
///
/// Cards parse from a rank token followed by a suit token, e.g. `"As"`,
/// `"10♥"`, `"Td"`, or a joker as `"JokerRed"`. Use [`Card::parse`] for lists.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card(u8);

impl Card {
    pub const RED_JOKER: Self = Self(52);
    pub const WHITE_JOKER: Self = Self(53);

    pub fn rank(&self) -> Rank {
        match self.0 {
            52 | 53 => Rank::Joker,
            n => Rank::from(n / 4),
        }
    }
    pub fn suit(&self) -> Suit {
        match self.0 {
            52 => Suit::Red,
            53 => Suit::White,
            n => Suit::from(n % 4),
        }
    }
    pub fn is_joker(&self) -> bool {
        self.0 >= 52
    }

    /// Parses whitespace- or comma-separated card tokens.
    pub fn parse(s: &str) -> Result<Vec<Self>, Error> {
        s.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(Self::try_from)
            .collect()
    }
}

/// (Rank, Suit) isomorphism
/// jokers pair only with joker suits, and standard ranks only with standard suits
impl TryFrom<(Rank, Suit)> for Card {
    type Error = Error;
    fn try_from((rank, suit): (Rank, Suit)) -> Result<Self, Self::Error> {
        match (rank, suit) {
            (Rank::Joker, Suit::Red) => Ok(Self::RED_JOKER),
            (Rank::Joker, Suit::White) => Ok(Self::WHITE_JOKER),
            (r, s) if !r.is_joker() && !s.is_joker() => Ok(Self(u8::from(r) * 4 + u8::from(s))),
            (r, s) => Err(Error::InvalidCard(format!("{}{}", r, s))),
        }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-53
/// 10♠
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl TryFrom<u8> for Card {
    type Error = Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0..=53 => Ok(Self(n)),
            n => Err(Error::InvalidCard(n.to_string())),
        }
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// 10♠
/// xxxxxxxxxx 000000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism
/// the suit is the last character, or the trailing colour of a joker
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let joker = s
            .get(..5)
            .filter(|head| head.eq_ignore_ascii_case("joker"))
            .is_some();
        let (rank, suit) = if joker {
            s.split_at(5)
        } else {
            match s.char_indices().last() {
                Some((i, _)) if i > 0 => s.split_at(i),
                _ => return Err(Error::InvalidCard(s.to_string())),
            }
        };
        let rank = Rank::try_from(rank)?;
        let suit = Suit::try_from(suit)?;
        Self::try_from((rank, suit))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}
