use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::PokerError;

/// Card rank, 0 = deuce .. 12 = ace
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    pub const TWO: Rank = Rank(0);
    pub const THREE: Rank = Rank(1);
    pub const FOUR: Rank = Rank(2);
    pub const FIVE: Rank = Rank(3);
    pub const SIX: Rank = Rank(4);
    pub const SEVEN: Rank = Rank(5);
    pub const EIGHT: Rank = Rank(6);
    pub const NINE: Rank = Rank(7);
    pub const TEN: Rank = Rank(8);
    pub const JACK: Rank = Rank(9);
    pub const QUEEN: Rank = Rank(10);
    pub const KING: Rank = Rank(11);
    pub const ACE: Rank = Rank(12);

    /// Create a rank from its code, wrapping into [0, 13)
    pub const fn new(code: u8) -> Rank {
        Rank(code % RANK_COUNT)
    }

    pub const fn code(self) -> u8 {
        self.0
    }

    /// Single bit for this rank inside a 13 bit rank mask
    pub const fn bit(self) -> u16 {
        1u16 << self.0
    }

    pub fn from_char(c: char) -> Option<Rank> {
        let c = c.to_ascii_uppercase();
        RANK_TO_CHAR
            .iter()
            .position(|&r| r == c)
            .map(|i| Rank(i as u8))
    }

    pub fn to_char(self) -> char {
        RANK_TO_CHAR[usize::from(self.0)]
    }

    /// All ranks from deuce to ace
    pub fn all() -> impl Iterator<Item = Rank> {
        (0..RANK_COUNT).map(Rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Card suit, clubs < diamonds < hearts < spades
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Suit(u8);

impl Suit {
    pub const CLUBS: Suit = Suit(0);
    pub const DIAMONDS: Suit = Suit(1);
    pub const HEARTS: Suit = Suit(2);
    pub const SPADES: Suit = Suit(3);

    pub const fn new(code: u8) -> Suit {
        Suit(code % SUIT_COUNT)
    }

    pub const fn code(self) -> u8 {
        self.0
    }

    pub fn from_char(c: char) -> Option<Suit> {
        let c = c.to_ascii_lowercase();
        SUIT_TO_CHAR
            .iter()
            .position(|&s| s == c)
            .map(|i| Suit(i as u8))
    }

    pub fn to_char(self) -> char {
        SUIT_TO_CHAR[usize::from(self.0)]
    }

    pub fn all() -> impl Iterator<Item = Suit> {
        (0..SUIT_COUNT).map(Suit)
    }

    /// Render this suit in the requested style
    pub fn to_string_with(self, style: SuitDisplay) -> String {
        match style {
            SuitDisplay::Ascii => self.to_char().to_string(),
            SuitDisplay::Unicode => ['♣', '♦', '♥', '♠'][usize::from(self.0)].to_string(),
            SuitDisplay::Html => ["&clubs;", "&diams;", "&hearts;", "&spades;"][usize::from(self.0)]
                .to_string(),
            SuitDisplay::Ansi => {
                // four color deck
                let color = ["32", "34", "31", "30"][usize::from(self.0)];
                format!("\x1b[{}m{}\x1b[0m", color, self.to_char())
            }
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// How suits are written when cards are turned into text
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuitDisplay {
    /// `c d h s`
    Ascii,
    /// suit symbols
    Unicode,
    /// html entities
    Html,
    /// ascii letters wrapped in terminal color codes
    Ansi,
}

impl Default for SuitDisplay {
    fn default() -> Self {
        SuitDisplay::Ascii
    }
}

/// A single card
///
/// The code is `rank + 13 * suit`, cards order by rank first then suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card(rank.0 + RANK_COUNT * suit.0)
    }

    /// Create a card from its code in [0, 52)
    pub fn from_code(code: u8) -> Option<Card> {
        if code < CARD_COUNT {
            Some(Card(code))
        } else {
            None
        }
    }

    pub const fn code(self) -> u8 {
        self.0
    }

    pub const fn rank(self) -> Rank {
        Rank(self.0 % RANK_COUNT)
    }

    pub const fn suit(self) -> Suit {
        Suit(self.0 / RANK_COUNT)
    }

    pub fn to_string_with(self, style: SuitDisplay) -> String {
        format!("{}{}", self.rank(), self.suit().to_string_with(style))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.rank(), self.suit()).cmp(&(other.rank(), other.suit()))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(c), None) => match (Rank::from_char(r), Suit::from_char(c)) {
                (Some(rank), Some(suit)) => Ok(Card::new(rank, suit)),
                _ => Err(PokerError::InvalidCard(s.to_string())),
            },
            _ => Err(PokerError::InvalidCard(s.to_string())),
        }
    }
}
