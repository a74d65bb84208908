use std::fmt;

use serde::{Deserialize, Serialize};

use super::card::Rank;
use crate::constants::RANK_COUNT;

/// Bits 0-12 of the code hold the kicker rank mask
pub const KICKER_MASK: u32 = 0x1fff;
/// Set when ranks are stored with the ace below the deuce
pub const ACE_LOW_BIT: u32 = 0x2000;
pub const MINOR_SHIFT: u32 = 16;
pub const MAJOR_SHIFT: u32 = 20;
pub const VSHIFT: u32 = 24;
/// Marks a lowball code stored inverted
pub const LOWBALL_BIT: u32 = 0x1000_0000;
const RAW_MASK: u32 = 0x0fff_ffff;
const MINOR_MASK: u32 = 0xf << MINOR_SHIFT;
const MAJOR_MASK: u32 = 0xf << MAJOR_SHIFT;

/// Hand categories, weakest first
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum HandCategory {
    NoPair = 0,
    OnePair = 1,
    ThreeFlush = 2,
    ThreeStraight = 3,
    TwoPair = 4,
    ThreeOfAKind = 5,
    ThreeStraightFlush = 6,
    Straight = 7,
    Flush = 8,
    FullHouse = 9,
    FourOfAKind = 10,
    StraightFlush = 11,
    /// badugi hands, four cards down to one
    Badugi = 12,
    ThreeCardBadugi = 13,
    TwoCardBadugi = 14,
    OneCardBadugi = 15,
}

impl HandCategory {
    fn from_code(code: u32) -> HandCategory {
        use HandCategory::*;
        match code & 0xf {
            0 => NoPair,
            1 => OnePair,
            2 => ThreeFlush,
            3 => ThreeStraight,
            4 => TwoPair,
            5 => ThreeOfAKind,
            6 => ThreeStraightFlush,
            7 => Straight,
            8 => Flush,
            9 => FullHouse,
            10 => FourOfAKind,
            11 => StraightFlush,
            12 => Badugi,
            13 => ThreeCardBadugi,
            14 => TwoCardBadugi,
            _ => OneCardBadugi,
        }
    }

    fn label(self) -> &'static str {
        use HandCategory::*;
        match self {
            NoPair => "high card:",
            OnePair => "one pair:",
            ThreeFlush => "three flush:",
            ThreeStraight => "three str8:",
            TwoPair => "two pair:",
            ThreeOfAKind => "trips:",
            ThreeStraightFlush => "3 str8 flush:",
            Straight => "straight:",
            Flush => "flush:",
            FullHouse => "full house:",
            FourOfAKind => "quads:",
            StraightFlush => "str8 flush:",
            Badugi => "badugi:",
            ThreeCardBadugi => "three card:",
            TwoCardBadugi => "two card:",
            OneCardBadugi => "one card:",
        }
    }

    /// Categories whose major slot holds a rank that moves with the ace
    ///
    /// The three card straights are included so their ace high and ace low forms
    /// name the same top card.
    fn uses_major(self) -> bool {
        use HandCategory::*;
        matches!(
            self,
            OnePair
                | ThreeStraight
                | TwoPair
                | ThreeOfAKind
                | ThreeStraightFlush
                | Straight
                | FullHouse
                | FourOfAKind
                | StraightFlush
        )
    }

    fn uses_minor(self) -> bool {
        matches!(self, HandCategory::TwoPair | HandCategory::FullHouse)
    }
}

/// Packed hand strength
///
/// Layout: `[lowball:1][category:4][major:4][minor:4][..][ace low:1][kickers:13]`.
/// Comparing two codes as integers compares the hands, for low games the code is
/// stored inverted so that a larger code is still the better hand and zero means
/// no qualifying hand.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PokerEvaluation(u32);

impl PokerEvaluation {
    pub const fn new(code: u32) -> PokerEvaluation {
        PokerEvaluation(code)
    }

    /// Build a code from its parts
    pub fn from_parts(category: HandCategory, major: u8, minor: u8, kickers: u16) -> PokerEvaluation {
        PokerEvaluation(
            (category as u32) << VSHIFT
                | u32::from(major & 0xf) << MAJOR_SHIFT
                | u32::from(minor & 0xf) << MINOR_SHIFT
                | u32::from(kickers) & KICKER_MASK,
        )
    }

    pub const fn code(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Category of the hand, lowball codes are read through their raw form
    pub fn category(self) -> HandCategory {
        let raw = if self.is_flipped() {
            !self.0 & RAW_MASK
        } else {
            self.0
        };
        HandCategory::from_code(raw >> VSHIFT)
    }

    /// Rank code stored in the major slot (ace low space when `ace_plays_low`)
    pub fn major_code(self) -> u8 {
        ((self.0 >> MAJOR_SHIFT) & 0xf) as u8
    }

    pub fn minor_code(self) -> u8 {
        ((self.0 >> MINOR_SHIFT) & 0xf) as u8
    }

    /// Major rank in normal rank order
    pub fn major_rank(self) -> Rank {
        self.display_rank(self.major_code())
    }

    pub fn minor_rank(self) -> Rank {
        self.display_rank(self.minor_code())
    }

    pub fn kicker_bits(self) -> u16 {
        (self.0 & KICKER_MASK) as u16
    }

    pub fn set_kicker_bits(&mut self, kickers: u16) {
        self.0 = (self.0 & !KICKER_MASK) | (u32::from(kickers) & KICKER_MASK);
    }

    pub fn set_major_code(&mut self, r: u8) {
        self.0 = (self.0 & !MAJOR_MASK) | u32::from(r & 0xf) << MAJOR_SHIFT;
    }

    pub fn set_minor_code(&mut self, r: u8) {
        self.0 = (self.0 & !MINOR_MASK) | u32::from(r & 0xf) << MINOR_SHIFT;
    }

    pub fn ace_plays_low(self) -> bool {
        self.0 & ACE_LOW_BIT != 0
    }

    pub fn is_flipped(self) -> bool {
        self.0 & LOWBALL_BIT != 0
    }

    /// Convert between a raw code and its inverted lowball form
    pub fn flip(&mut self) {
        if self.0 == 0 {
            return;
        }
        self.0 = if self.is_flipped() {
            !self.0 & RAW_MASK
        } else {
            LOWBALL_BIT | (!self.0 & RAW_MASK)
        };
    }

    pub fn flipped(mut self) -> PokerEvaluation {
        self.flip();
        self
    }

    /// Re-rank with the ace below the deuce
    ///
    /// Kickers rotate up one bit with the ace wrapping to bit 0, rank slots move to
    /// the ace low numbering where 0 is the ace.
    pub fn play_ace_low(&mut self) {
        if self.ace_plays_low() {
            return;
        }
        let k = self.kicker_bits();
        let rotated = ((k << 1) | (k >> 12)) & KICKER_MASK as u16;
        self.set_kicker_bits(rotated);
        self.0 |= ACE_LOW_BIT;
        let category = self.category();
        if category.uses_minor() {
            self.set_minor_code((self.minor_code() + 1) % RANK_COUNT);
        }
        if category.uses_major() {
            self.set_major_code((self.major_code() + 1) % RANK_COUNT);
        }
    }

    /// Inverse of `play_ace_low`
    pub fn play_ace_high(&mut self) {
        if !self.ace_plays_low() {
            return;
        }
        self.0 &= !ACE_LOW_BIT;
        let k = self.kicker_bits();
        let rotated = ((k >> 1) | ((k & 1) << 12)) & KICKER_MASK as u16;
        self.set_kicker_bits(rotated);
        let category = self.category();
        if category.uses_minor() {
            self.set_minor_code((self.minor_code() + RANK_COUNT - 1) % RANK_COUNT);
        }
        if category.uses_major() {
            self.set_major_code((self.major_code() + RANK_COUNT - 1) % RANK_COUNT);
        }
    }

    /// Turn a five high straight (flush) into the ace high no pair (flush) it is in 2-7
    pub fn fix_wheel_2to7(&mut self, rank_mask: u16) {
        let five_high = self.major_code() == Rank::FIVE.code();
        match self.category() {
            HandCategory::Straight if five_high => {
                *self = PokerEvaluation::from_parts(HandCategory::NoPair, 0, 0, rank_mask)
            }
            HandCategory::StraightFlush if five_high => {
                *self = PokerEvaluation::from_parts(HandCategory::Flush, 0, 0, rank_mask)
            }
            _ => {}
        }
    }

    /// Code with only the kickers that matter when naming the hand
    pub fn reduced_code(self) -> u32 {
        if self.is_flipped() {
            return self.flipped().reduced_code_2to7();
        }
        if self.0 == 0 {
            return 0;
        }
        match self.category() {
            HandCategory::NoPair
            | HandCategory::OnePair
            | HandCategory::ThreeFlush
            | HandCategory::Flush => {
                let mut e = self;
                e.set_kicker_bits(top_bits(self.kicker_bits(), 2));
                e.code()
            }
            HandCategory::FullHouse | HandCategory::ThreeOfAKind | HandCategory::FourOfAKind => {
                self.showdown_code()
            }
            _ => self.0,
        }
    }

    /// Reduced code of an unflipped deuce to seven low, returned flipped
    pub fn reduced_code_2to7(self) -> u32 {
        if self.0 == 0 {
            return 0;
        }
        use HandCategory::*;
        let kickers = self.kicker_bits();
        let major = self.major_code();
        let minor = self.minor_code();
        let e = match self.category() {
            NoPair => {
                let top = 15 - kickers.leading_zeros() as u8;
                // rough lows are named by three cards
                let keep = if top < Rank::QUEEN.code() { 3 } else { 2 };
                let mut e = self;
                e.set_kicker_bits(top_bits(kickers, keep));
                e
            }
            Flush => {
                let mut e = self;
                e.set_kicker_bits(top_bits(kickers, 1));
                e
            }
            // trips read as the two pair made of the set and its two kickers
            ThreeOfAKind => {
                let mut ranks = bottom_ranks(kickers, 2);
                ranks.push(major);
                two_pair_shape(ranks)
            }
            OnePair => {
                let mut ranks = bottom_ranks(kickers, 3);
                ranks.push(major);
                ranks.sort_unstable();
                if ranks.len() == 4 {
                    ranks.pop();
                }
                let top = ranks.pop().unwrap_or(0);
                PokerEvaluation::from_parts(OnePair, top, 0, rank_bits(&ranks))
            }
            TwoPair => {
                let mut ranks = bottom_ranks(kickers, 1);
                ranks.push(minor);
                ranks.push(major);
                two_pair_shape(ranks)
            }
            FullHouse => PokerEvaluation::from_parts(FullHouse, major.max(minor), major.min(minor), 0),
            FourOfAKind => {
                PokerEvaluation::from_parts(FourOfAKind, major, 0, rank_bits(&bottom_ranks(kickers, 1)))
            }
            _ => self,
        };
        e.flipped().code()
    }

    /// Drop kickers that never decide a single deck showdown
    pub fn showdown_code(self) -> u32 {
        if self.0 == 0 {
            return 0;
        }
        match self.category() {
            HandCategory::FullHouse | HandCategory::ThreeOfAKind | HandCategory::FourOfAKind => {
                let mut e = self;
                // deuces full keeps a minor so it does not print as deuces full of deuces
                let minor = if self.category() == HandCategory::FullHouse
                    && self.major_code() == Rank::TWO.code()
                    && !self.ace_plays_low()
                {
                    1
                } else {
                    0
                };
                e.set_minor_code(minor);
                e.set_kicker_bits(0);
                e.code()
            }
            _ => self.0,
        }
    }

    /// Label and ranks of the reduced code
    pub fn to_canonical_string(self) -> String {
        let reduced = PokerEvaluation(self.reduced_code());
        if reduced.is_flipped() {
            reduced.flipped().describe()
        } else {
            reduced.describe()
        }
    }

    /// 32 binary digits grouped by byte, high bit first
    pub fn to_bit_string(self) -> String {
        let mut out = String::with_capacity(36);
        for i in (0..32).rev() {
            out.push(if self.0 & (1 << i) != 0 { '1' } else { '0' });
            if i % 8 == 0 && i > 0 {
                out.push(' ');
            }
        }
        out
    }

    fn display_rank(self, code: u8) -> Rank {
        if self.ace_plays_low() {
            Rank::new((code + RANK_COUNT - 1) % RANK_COUNT)
        } else {
            Rank::new(code)
        }
    }

    fn kicker_string(self, kickers: u16) -> String {
        (0..RANK_COUNT)
            .rev()
            .filter(|&i| kickers & (1 << i) != 0)
            .map(|i| self.display_rank(i).to_char())
            .collect()
    }

    fn describe(self) -> String {
        use HandCategory::*;
        let category = self.category();
        let top = self.display_rank(self.major_code()).to_string();
        let bot = self.display_rank(self.minor_code()).to_string();
        let kick = self.kicker_string(self.kicker_bits());
        let ranks = match category {
            NoPair | ThreeFlush | Flush => kick,
            Badugi | ThreeCardBadugi | TwoCardBadugi | OneCardBadugi => kick,
            OnePair | ThreeOfAKind => top + &kick,
            ThreeStraight | Straight | StraightFlush | ThreeStraightFlush => top,
            TwoPair => top + &bot + &kick,
            FullHouse => top + &bot,
            FourOfAKind => top + &kick,
        };
        format!("{:<14} {:<5}", category.label(), ranks)
    }
}

/// Positions of the `n` lowest set bits, lowest first
fn bottom_ranks(mut mask: u16, n: usize) -> Vec<u8> {
    let mut ranks = Vec::with_capacity(n + 1);
    while mask != 0 && ranks.len() < n {
        ranks.push(mask.trailing_zeros() as u8);
        mask &= mask - 1;
    }
    ranks
}

fn rank_bits(ranks: &[u8]) -> u16 {
    ranks.iter().fold(0, |acc, &r| acc | 1 << r)
}

/// Sorted ranks as a two pair code, the lowest left as kickers
fn two_pair_shape(mut ranks: Vec<u8>) -> PokerEvaluation {
    ranks.sort_unstable();
    let major = ranks.pop().unwrap_or(0);
    let minor = ranks.pop().unwrap_or(0);
    PokerEvaluation::from_parts(HandCategory::TwoPair, major, minor, rank_bits(&ranks))
}

/// Keep the `n` highest set bits
pub fn top_bits(mut mask: u16, n: usize) -> u16 {
    while mask.count_ones() as usize > n {
        mask &= mask - 1;
    }
    mask
}

impl fmt::Display for PokerEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return Ok(());
        }
        if self.is_flipped() {
            write!(f, "{}", self.flipped().describe())
        } else {
            write!(f, "{}", self.describe())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand_evaluator::CardSet;

    fn high(s: &str) -> PokerEvaluation {
        CardSet::from_string(s).evaluate_high()
    }

    #[test]
    fn test_layout() {
        let e = PokerEvaluation::from_parts(HandCategory::TwoPair, 11, 5, 0b100_0000_0000);
        assert_eq!(e.category(), HandCategory::TwoPair);
        assert_eq!(e.major_rank(), Rank::KING);
        assert_eq!(e.minor_rank(), Rank::SEVEN);
        assert_eq!(e.kicker_bits(), 0b100_0000_0000);
        assert_eq!(e.to_string(), "two pair:      K7Q  ");
    }

    #[test]
    fn test_display() {
        assert_eq!(high("AsKsQsJsTs").to_string(), "str8 flush:    A    ");
        assert_eq!(high("AsAd7c7h2c").to_string(), "two pair:      A72  ");
        assert_eq!(high("9s9d9c5h5c").to_string(), "full house:    95   ");
        assert_eq!(high("Ks9d7c5h2c").to_string(), "high card:     K9752");
        assert_eq!(PokerEvaluation::default().to_string(), "");
    }

    #[test]
    fn test_ace_low_round_trip() {
        let hands = [
            "AsKsQsJsTs", "5s4s3s2sAs", "AsAdAcAh2c", "2s2d2c3h3c", "AsAd7c7h2c", "Ks9d7c5h2c",
            "AsKd7c5h2c", "5c4d3h2sAs", "AhAcKd7s2c", "3s3d3c9h2c", "7s5s4s3s2s",
        ];
        for h in hands.iter() {
            let e = high(h);
            let mut low = e;
            low.play_ace_low();
            assert!(low.ace_plays_low());
            low.play_ace_low();
            let mut back = low;
            back.play_ace_high();
            assert_eq!(back, e, "{}", h);
            // named ranks survive the transform
            if e.category().uses_major() {
                assert_eq!(low.major_rank(), e.major_rank(), "{}", h);
            }
            assert_eq!(low.category(), e.category(), "{}", h);
        }
    }

    #[test]
    fn test_ace_low_kickers() {
        let mut e = high("AsKd7c5h2c");
        e.play_ace_low();
        // ace sits at bit 0, king at bit 12
        assert_eq!(e.kicker_bits() & 1, 1);
        assert_ne!(e.kicker_bits() & (1 << 12), 0);
    }

    #[test]
    fn test_flip_orders_lows() {
        let a = PokerEvaluation::from_parts(HandCategory::NoPair, 0, 0, 0b1111);
        let b = PokerEvaluation::from_parts(HandCategory::NoPair, 0, 0, 0b10111);
        assert!(a < b);
        assert!(a.flipped() > b.flipped());
        assert!(a.flipped().is_flipped());
        assert_eq!(a.flipped().flipped(), a);
        assert_eq!(PokerEvaluation::default().flipped(), PokerEvaluation::default());
    }

    #[test]
    fn test_fix_wheel() {
        let cards = CardSet::from_string("5s4d3c2hAc");
        let mut e = cards.evaluate_high();
        assert_eq!(e.category(), HandCategory::Straight);
        e.fix_wheel_2to7(cards.rank_mask());
        assert_eq!(e.category(), HandCategory::NoPair);
        assert_eq!(e.kicker_bits(), cards.rank_mask());
        let cards = CardSet::from_string("5s4s3s2sAs");
        let mut e = cards.evaluate_high();
        e.fix_wheel_2to7(cards.rank_mask());
        assert_eq!(e.category(), HandCategory::Flush);
    }

    #[test]
    fn test_reduced_and_showdown() {
        let e = high("AsKd7c5h2c");
        assert_eq!(PokerEvaluation::new(e.reduced_code()).kicker_bits(), 0b1_1000_0000_0000);
        assert_eq!(e.to_canonical_string(), "high card:     AK   ");
        let trips = high("9s9d9cKh2c");
        let sd = PokerEvaluation::new(trips.showdown_code());
        assert_eq!(sd.kicker_bits(), 0);
        assert_eq!(sd.category(), HandCategory::ThreeOfAKind);
        assert_eq!(sd.major_rank(), Rank::NINE);
        let deuces = high("2s2d2c3h3c");
        assert_eq!(PokerEvaluation::new(deuces.showdown_code()).minor_code(), 1);
        let straight = high("9s8d7c6h5c");
        assert_eq!(straight.reduced_code(), straight.code());
    }

    #[test]
    fn test_reduced_code_2to7() {
        let rough = PokerEvaluation::from_parts(HandCategory::NoPair, 0, 0, 0b10_0000_1111);
        let reduced = PokerEvaluation::new(rough.reduced_code_2to7());
        assert!(reduced.is_flipped());
        assert_eq!(reduced.flipped().kicker_bits(), 0b10_0000_1100);
        assert_eq!(PokerEvaluation::new(rough.flipped().reduced_code()), reduced);
    }

    fn low_2to7_reduced(s: &str) -> PokerEvaluation {
        let e = CardSet::from_string(s).evaluate_low_2to7();
        let reduced = PokerEvaluation::new(e.reduced_code());
        assert!(reduced.is_flipped(), "{}", s);
        reduced.flipped()
    }

    #[test]
    fn test_reduced_code_2to7_paired() {
        let trips = low_2to7_reduced("7s7d7c4h2c");
        assert_eq!(trips.category(), HandCategory::TwoPair);
        assert_eq!(trips.major_rank(), Rank::SEVEN);
        assert_eq!(trips.minor_rank(), Rank::FOUR);
        assert_eq!(trips.kicker_bits(), Rank::TWO.bit());

        let pair = low_2to7_reduced("8s8d5c3h2c");
        assert_eq!(pair.category(), HandCategory::OnePair);
        assert_eq!(pair.major_rank(), Rank::FIVE);
        assert_eq!(pair.kicker_bits(), Rank::THREE.bit() | Rank::TWO.bit());

        let two_pair = low_2to7_reduced("9s9d6c6hKc");
        assert_eq!(two_pair.category(), HandCategory::TwoPair);
        assert_eq!(two_pair.major_rank(), Rank::KING);
        assert_eq!(two_pair.minor_rank(), Rank::NINE);
        assert_eq!(two_pair.kicker_bits(), Rank::SIX.bit());

        let boat = low_2to7_reduced("4s4d4c9h9c");
        assert_eq!(boat.category(), HandCategory::FullHouse);
        assert_eq!(boat.major_rank(), Rank::NINE);
        assert_eq!(boat.minor_rank(), Rank::FOUR);
        assert_eq!(boat.kicker_bits(), 0);

        let quads = low_2to7_reduced("3s3d3c3hKc");
        assert_eq!(quads.category(), HandCategory::FourOfAKind);
        assert_eq!(quads.major_rank(), Rank::THREE);
        assert_eq!(quads.kicker_bits(), Rank::KING.bit());

        let flush = low_2to7_reduced("9c7c5c3c2c");
        assert_eq!(flush.category(), HandCategory::Flush);
        assert_eq!(flush.kicker_bits(), Rank::NINE.bit());
    }

    #[test]
    fn test_category_of_lowball_codes() {
        let low = CardSet::from_string("7c5d4h3s2c").evaluate_low_2to7();
        assert!(low.is_flipped());
        assert_eq!(low.category(), HandCategory::NoPair);
        let pair = CardSet::from_string("AcAd3h2s4c").evaluate_low_a5();
        assert_eq!(pair.category(), HandCategory::OnePair);
        assert_eq!(pair.category(), pair.flipped().category());
    }

    #[test]
    fn test_bit_string() {
        let e = PokerEvaluation::new(0x0100_0003);
        assert_eq!(
            e.to_bit_string(),
            "00000001 00000000 00000000 00000011"
        );
    }
}
