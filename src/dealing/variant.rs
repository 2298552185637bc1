use crate::Error;
use crate::N_HOLE;
use crate::N_OMAHA;
use crate::cards::Deck;

/// Hold'em flavors, differing in deck and hole card count.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    #[default]
    Texas,
    /// Deuces through fives removed.
    Short,
    Omaha,
}

impl Variant {
    pub const fn all() -> &'static [Self] {
        &[Self::Texas, Self::Omaha, Self::Short]
    }
    /// A fresh, unshuffled deck for this variant.
    pub fn deck(&self) -> Deck {
        match self {
            Self::Texas | Self::Omaha => Deck::new(),
            Self::Short => Deck::short(),
        }
    }
    pub const fn n_hole(&self) -> usize {
        match self {
            Self::Texas | Self::Short => N_HOLE,
            Self::Omaha => N_OMAHA,
        }
    }
}

impl std::str::FromStr for Variant {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "texas" => Ok(Self::Texas),
            "short" => Ok(Self::Short),
            "omaha" => Ok(Self::Omaha),
            _ => Err(Error::InvalidVariant(s.to_string())),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Texas => write!(f, "texas"),
            Self::Short => write!(f, "short"),
            Self::Omaha => write!(f, "omaha"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for variant in Variant::all() {
            assert_eq!(variant.to_string().parse::<Variant>(), Ok(*variant));
        }
        assert_eq!("OMAHA".parse::<Variant>(), Ok(Variant::Omaha));
    }

    #[test]
    fn unknown_name() {
        let err = "stud".parse::<Variant>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid game type 'stud'. Must be one of: texas, omaha, short"
        );
    }

    #[test]
    fn decks_and_holes() {
        assert_eq!(Variant::Texas.deck().len(), 52);
        assert_eq!(Variant::Omaha.deck().len(), 52);
        assert_eq!(Variant::Short.deck().len(), 36);
        assert_eq!(Variant::Texas.n_hole(), 2);
        assert_eq!(Variant::Short.n_hole(), 2);
        assert_eq!(Variant::Omaha.n_hole(), 4);
    }
}
