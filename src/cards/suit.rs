use crate::Error;

/// A card's suit. `Red` and `White` only ever mark the two jokers.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
    Red = 4,
    White = 5,
}

impl Suit {
    pub const fn all() -> [Self; 4] {
        [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade]
    }
    pub const fn is_joker(&self) -> bool {
        matches!(self, Suit::Red | Suit::White)
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Club,
            1 => Suit::Diamond,
            2 => Suit::Heart,
            3 => Suit::Spade,
            4 => Suit::Red,
            5 => Suit::White,
            _ => panic!("Invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 injection
/// every standard card of this suit in a CardSet. joker suits own no ranks
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        match s {
            Suit::Red | Suit::White => 0,
            s => 0x1111111111111 << u8::from(s),
        }
    }
}

/// str isomorphism
/// letters in either case, the card symbols, or a joker colour
impl TryFrom<&str> for Suit {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "c" | "C" | "♣" => Ok(Suit::Club),
            "d" | "D" | "♦" => Ok(Suit::Diamond),
            "h" | "H" | "♥" => Ok(Suit::Heart),
            "s" | "S" | "♠" => Ok(Suit::Spade),
            x if x.eq_ignore_ascii_case("red") => Ok(Suit::Red),
            x if x.eq_ignore_ascii_case("white") => Ok(Suit::White),
            _ => Err(Error::InvalidSuit(s.to_string())),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Club => "♣",
                Suit::Diamond => "♦",
                Suit::Heart => "♥",
                Suit::Spade => "♠",
                Suit::Red => "Red",
                Suit::White => "White",
            }
        )
    }
}
