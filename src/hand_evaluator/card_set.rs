use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Add, AddAssign, BitOr, BitOrAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit, SuitDisplay};
use crate::constants::*;
use crate::equity_calculator::Combinations;
use crate::error::PokerError;

/// Set of distinct cards stored as a 64 bit mask
///
/// Bits 0-12: clubs
/// Bits 16-28: diamonds
/// Bits 32-44: hearts
/// Bits 48-60: spades
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardSet {
    mask: u64,
}

lazy_static! {
    /// Table of singleton card sets indexed by card code
    pub static ref CARDS: [CardSet; 52] = init_card_constants();
}

/// How `CardSet::enumerate` collapses equivalent sets
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CardProjection {
    /// every distinct set
    None,
    /// one representative per suit permutation
    SuitCanonical,
    /// suits dropped, only rank counts kept
    RankOnly,
}

#[inline]
fn card_bit(card: Card) -> u64 {
    let c = card.code();
    1u64 << (u64::from(c / RANK_COUNT) * u64::from(SUIT_STRIDE) + u64::from(c % RANK_COUNT))
}

impl CardSet {
    /// Construct the empty set
    pub const fn empty() -> CardSet {
        CardSet { mask: 0 }
    }

    /// Construct the full 52 card deck
    pub fn full() -> CardSet {
        let per_suit = u64::from(RANK_MASK);
        CardSet {
            mask: per_suit
                | per_suit << SUIT_STRIDE
                | per_suit << (2 * SUIT_STRIDE)
                | per_suit << (3 * SUIT_STRIDE),
        }
    }

    /// Construct from a raw mask, bits outside the 52 card positions are dropped
    pub fn from_mask(mask: u64) -> CardSet {
        CardSet {
            mask: mask & CardSet::full().mask,
        }
    }

    pub fn from_card(card: Card) -> CardSet {
        CardSet {
            mask: card_bit(card),
        }
    }

    /// Construct from text, any parse failure gives the empty set
    ///
    /// # Example
    ///
    /// ```
    /// use poker_enum::hand_evaluator::CardSet;
    /// assert_eq!(CardSet::from_string("AsKs").size(), 2);
    /// assert!(CardSet::from_string("2h2h").is_empty());
    /// ```
    pub fn from_string(text: &str) -> CardSet {
        text.parse().unwrap_or_default()
    }

    pub const fn mask(self) -> u64 {
        self.mask
    }

    /// Number of cards in the set
    pub fn size(self) -> usize {
        self.mask.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.mask == 0
    }

    pub fn clear(&mut self) {
        self.mask = 0;
    }

    /// Replace the contents with the full deck
    pub fn fill(&mut self) {
        *self = CardSet::full();
    }

    /// Insert a card, inserting twice is a no-op
    pub fn insert(&mut self, card: Card) {
        self.mask |= card_bit(card);
    }

    pub fn insert_set(&mut self, other: CardSet) {
        self.mask |= other.mask;
    }

    pub fn remove_set(&mut self, other: CardSet) {
        self.mask &= !other.mask;
    }

    pub fn union(self, other: CardSet) -> CardSet {
        CardSet {
            mask: self.mask | other.mask,
        }
    }

    pub fn difference(self, other: CardSet) -> CardSet {
        CardSet {
            mask: self.mask & !other.mask,
        }
    }

    pub fn intersects(self, other: CardSet) -> bool {
        self.mask & other.mask != 0
    }

    pub fn disjoint(self, other: CardSet) -> bool {
        !self.intersects(other)
    }

    pub fn contains(self, card: Card) -> bool {
        self.mask & card_bit(card) != 0
    }

    /// True when every card of `other` is in this set
    pub fn contains_set(self, other: CardSet) -> bool {
        self.mask & other.mask == other.mask
    }

    pub fn contains_rank(self, rank: Rank) -> bool {
        self.rank_mask() & rank.bit() != 0
    }

    /// 13 bit mask of the cards of one suit
    #[inline]
    pub fn suit_mask(self, suit: Suit) -> u16 {
        ((self.mask >> (u64::from(suit.code()) * u64::from(SUIT_STRIDE))) as u16) & RANK_MASK
    }

    /// 13 bit mask of the ranks present in any suit
    #[inline]
    pub fn rank_mask(self) -> u16 {
        let m = self.mask;
        ((m | m >> 16 | m >> 32 | m >> 48) as u16) & RANK_MASK
    }

    pub fn count_rank(self, rank: Rank) -> usize {
        Suit::all()
            .filter(|&s| self.suit_mask(s) & rank.bit() != 0)
            .count()
    }

    pub fn count_suit(self, suit: Suit) -> usize {
        self.suit_mask(suit).count_ones() as usize
    }

    /// Cards in ascending order
    pub fn cards(self) -> Vec<Card> {
        let mut cards: Vec<Card> = self.card_sets().iter().filter_map(|s| s.first_card()).collect();
        cards.sort();
        cards
    }

    /// Split into singleton sets, lowest bit first
    pub fn card_sets(self) -> Vec<CardSet> {
        let mut out = Vec::with_capacity(self.size());
        let mut m = self.mask;
        while m != 0 {
            let low = m & m.wrapping_neg();
            out.push(CardSet { mask: low });
            m ^= low;
        }
        out
    }

    fn first_card(self) -> Option<Card> {
        if self.mask == 0 {
            return None;
        }
        let bit = self.mask.trailing_zeros() as u8;
        let (suit, rank) = (bit / SUIT_STRIDE, bit % SUIT_STRIDE);
        Card::from_code(rank + RANK_COUNT * suit)
    }

    /// Relabel suits so the largest suit mask sits in clubs, the next in diamonds, ...
    ///
    /// Two sets that differ only by a suit permutation canonize to the same set.
    pub fn canonize(self) -> CardSet {
        let mut suits: Vec<u16> = Suit::all().map(|s| self.suit_mask(s)).collect();
        suits.sort_unstable_by(|a, b| b.cmp(a));
        let mut mask = 0u64;
        for (i, s) in suits.iter().enumerate() {
            mask |= u64::from(*s) << (i as u64 * u64::from(SUIT_STRIDE));
        }
        CardSet { mask }
    }

    /// Drop suit information, a rank seen k times fills the first k suits
    pub fn canonize_ranks(self) -> CardSet {
        let mut out = CardSet::empty();
        for rank in Rank::all() {
            for s in 0..self.count_rank(rank) {
                out.insert(Card::new(rank, Suit::new(s as u8)));
            }
        }
        out
    }

    /// Add each card of `other` in the first suit of its rank not yet present
    pub fn insert_ranks(&mut self, other: CardSet) {
        for card in other.card_sets().into_iter().filter_map(|c| c.first_card()) {
            let rank = card.rank();
            if let Some(suit) = Suit::all().find(|&s| !self.contains(Card::new(rank, s))) {
                self.insert(Card::new(rank, suit));
            }
        }
    }

    /// Every distinct `n` card set under a projection, sorted
    pub fn enumerate(n: usize, projection: CardProjection) -> Vec<CardSet> {
        let deck = CardSet::full().card_sets();
        let mut seen = BTreeSet::new();
        let mut combos = Combinations::new(deck.len(), n);
        loop {
            let mut set = CardSet::empty();
            for &i in combos.indices() {
                set += deck[i];
            }
            let set = match projection {
                CardProjection::None => set,
                CardProjection::SuitCanonical => set.canonize(),
                CardProjection::RankOnly => set.canonize_ranks(),
            };
            seen.insert(set);
            if !combos.next() {
                break;
            }
        }
        seen.into_iter().collect()
    }

    /// Write cards high to low in the requested suit style
    pub fn to_string_with(self, style: SuitDisplay) -> String {
        self.cards()
            .iter()
            .rev()
            .map(|c| c.to_string_with(style))
            .collect()
    }
}

impl Add for CardSet {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        self.union(other)
    }
}

impl AddAssign for CardSet {
    fn add_assign(&mut self, rhs: CardSet) {
        self.mask |= rhs.mask;
    }
}

impl BitOr for CardSet {
    type Output = Self;

    fn bitor(self, other: Self) -> Self::Output {
        self.union(other)
    }
}

impl BitOrAssign for CardSet {
    fn bitor_assign(&mut self, rhs: CardSet) {
        self.mask |= rhs.mask;
    }
}

impl From<Card> for CardSet {
    fn from(card: Card) -> Self {
        CardSet::from_card(card)
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with(SuitDisplay::Ascii))
    }
}

impl FromStr for CardSet {
    type Err = PokerError;

    /// Parse concatenated two character card codes, e.g. `AsKd7c`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() % 2 != 0 {
            return Err(PokerError::InvalidCard(s.to_string()));
        }
        let mut set = CardSet::empty();
        for pair in chars.chunks(2) {
            let card = match (Rank::from_char(pair[0]), Suit::from_char(pair[1])) {
                (Some(rank), Some(suit)) => Card::new(rank, suit),
                _ => return Err(PokerError::InvalidCard(s.to_string())),
            };
            if set.contains(card) {
                return Err(PokerError::DuplicateCard(s.to_string()));
            }
            set.insert(card);
        }
        Ok(set)
    }
}

fn init_card_constants() -> [CardSet; 52] {
    let mut cards = [CardSet::empty(); 52];
    for c in 0..CARD_COUNT {
        if let Some(card) = Card::from_code(c) {
            cards[usize::from(c)] = CardSet::from_card(card);
        }
    }
    cards
}
