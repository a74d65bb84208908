//! Category evaluators over a `CardSet`
//!
//! High evaluations work on 13 bit rank masks split by multiplicity. Low evaluations
//! are built on the raw scale where smaller is better and then flipped so that every
//! evaluation compares larger-is-better.

use super::card::{Rank, Suit};
use super::card_set::CardSet;
use super::evaluation::{top_bits, HandCategory, PokerEvaluation, ACE_LOW_BIT, VSHIFT};
use crate::equity_calculator::Combinations;

/// Ranks A, 2, 3, 4, 5
const WHEEL: u32 = 0b1_0000_0000_1111;
/// Ranks A, 2, 3
const THREE_WHEEL: u32 = 0b1_0000_0000_0011;

lazy_static! {
    /// Top rank of the best straight in a rank mask, -1 when there is none
    static ref STRAIGHT_TOP: Vec<i8> = (0..0x2000u32).map(compute_straight).collect();
}

fn compute_straight(v: u32) -> i8 {
    let runs = v & v << 1 & v << 2 & v << 3 & v << 4;
    if runs != 0 {
        (31 - runs.leading_zeros()) as i8
    } else if v & WHEEL == WHEEL {
        Rank::FIVE.code() as i8
    } else {
        -1
    }
}

#[inline]
fn straight_top(mask: u16) -> Option<u8> {
    let top = STRAIGHT_TOP[usize::from(mask)];
    if top < 0 {
        None
    } else {
        Some(top as u8)
    }
}

#[inline]
fn top_rank(mask: u16) -> u8 {
    (15 - mask.leading_zeros()) as u8
}

#[inline]
fn bottom_rank(mask: u16) -> u8 {
    mask.trailing_zeros() as u8
}

/// Keep the `n` lowest set bits
fn bottom_bits(mask: u16, n: usize) -> u16 {
    let mut out = 0;
    let mut m = mask;
    for _ in 0..n {
        if m == 0 {
            break;
        }
        let low = m & m.wrapping_neg();
        out |= low;
        m ^= low;
    }
    out
}

/// Move the ace from bit 12 to bit 0
#[inline]
fn to_ace_low(mask: u16) -> u16 {
    ((mask << 1) | (mask >> 12)) & 0x1fff
}

/// Ranks split by how many suits hold them
#[derive(Debug, Clone, Copy)]
struct RankCounts {
    all: u16,
    pairs: u16,
    trips: u16,
    quads: u16,
}

impl RankCounts {
    fn new(cards: CardSet) -> RankCounts {
        let c = cards.suit_mask(Suit::CLUBS);
        let d = cards.suit_mask(Suit::DIAMONDS);
        let h = cards.suit_mask(Suit::HEARTS);
        let s = cards.suit_mask(Suit::SPADES);
        let quads = c & d & h & s;
        let three_plus = (c & d & h) | (c & d & s) | (c & h & s) | (d & h & s);
        let two_plus = (c & d) | (c & h) | (c & s) | (d & h) | (d & s) | (h & s);
        RankCounts {
            all: c | d | h | s,
            pairs: two_plus & !three_plus,
            trips: three_plus & !quads,
            quads,
        }
    }

    fn ace_low(self) -> RankCounts {
        RankCounts {
            all: to_ace_low(self.all),
            pairs: to_ace_low(self.pairs),
            trips: to_ace_low(self.trips),
            quads: to_ace_low(self.quads),
        }
    }

    /// Ranks held at least twice
    fn paired(self) -> u16 {
        self.pairs | self.trips | self.quads
    }
}

/// Best high hand from rank multiplicities, straights optional
fn high_from_counts(rc: RankCounts, straights: bool) -> PokerEvaluation {
    use HandCategory::*;
    if rc.quads != 0 {
        let q = top_rank(rc.quads);
        let kick = top_bits(rc.all & !(1 << q), 1);
        return PokerEvaluation::from_parts(FourOfAKind, q, 0, kick);
    }
    if rc.trips != 0 {
        let t = top_rank(rc.trips);
        let rest = (rc.trips & !(1 << t)) | rc.pairs;
        if rest != 0 {
            return PokerEvaluation::from_parts(FullHouse, t, top_rank(rest), 0);
        }
    }
    if straights {
        if let Some(top) = straight_top(rc.all) {
            return PokerEvaluation::from_parts(Straight, top, 0, 0);
        }
    }
    if rc.trips != 0 {
        let t = top_rank(rc.trips);
        return PokerEvaluation::from_parts(ThreeOfAKind, t, 0, top_bits(rc.all & !(1 << t), 2));
    }
    if rc.pairs.count_ones() >= 2 {
        let both = top_bits(rc.pairs, 2);
        let major = top_rank(both);
        let minor = bottom_rank(both);
        return PokerEvaluation::from_parts(TwoPair, major, minor, top_bits(rc.all & !both, 1));
    }
    if rc.pairs != 0 {
        let p = top_rank(rc.pairs);
        return PokerEvaluation::from_parts(OnePair, p, 0, top_bits(rc.all & !(1 << p), 3));
    }
    PokerEvaluation::from_parts(NoPair, 0, 0, top_bits(rc.all, 5))
}

/// Raw ace to five low in ace low rank space, the smaller code is the better low
fn raw_low_a5(rc: RankCounts, size: usize) -> PokerEvaluation {
    use HandCategory::*;
    let distinct = rc.all.count_ones() as usize;
    let low = |cat, major: u8, minor: u8, kick: u16| {
        PokerEvaluation::new(PokerEvaluation::from_parts(cat, major, minor, kick).code() | ACE_LOW_BIT)
    };
    if distinct >= 5 {
        return low(NoPair, 0, 0, bottom_bits(rc.all, 5));
    }
    if size < 5 {
        // nothing to choose, describe the cards as they are
        let e = high_from_counts(rc, false);
        return PokerEvaluation::new(e.code() | ACE_LOW_BIT);
    }
    let paired = rc.paired();
    let tripled = rc.trips | rc.quads;
    match distinct {
        4 => {
            let p = bottom_rank(paired);
            low(OnePair, p, 0, rc.all & !(1 << p))
        }
        3 if paired.count_ones() >= 2 => {
            let both = bottom_bits(paired, 2);
            low(TwoPair, top_rank(both), bottom_rank(both), rc.all & !both)
        }
        3 => {
            let t = bottom_rank(tripled);
            low(ThreeOfAKind, t, 0, rc.all & !(1 << t))
        }
        _ => {
            let a = bottom_rank(rc.all);
            let b = top_rank(rc.all);
            let has = |mask: u16, r: u8| mask & (1 << r) != 0;
            if has(tripled, a) && has(paired, b) {
                low(FullHouse, a, b, 0)
            } else if has(tripled, b) && has(paired, a) {
                low(FullHouse, b, a, 0)
            } else {
                let q = bottom_rank(rc.quads);
                low(FourOfAKind, q, 0, rc.all & !(1 << q))
            }
        }
    }
}

impl CardSet {
    /// Best straight flush or flush, the empty evaluation when there is neither
    pub fn evaluate_high_flush(self) -> PokerEvaluation {
        let mut best = PokerEvaluation::default();
        for suit in Suit::all() {
            let m = self.suit_mask(suit);
            if m.count_ones() < 5 {
                continue;
            }
            let e = match straight_top(m) {
                Some(top) => PokerEvaluation::from_parts(HandCategory::StraightFlush, top, 0, 0),
                None => PokerEvaluation::from_parts(HandCategory::Flush, 0, 0, top_bits(m, 5)),
            };
            best = best.max(e);
        }
        best
    }

    /// Best five card high hand
    ///
    /// # Example
    ///
    /// ```
    /// use poker_enum::hand_evaluator::{CardSet, HandCategory};
    /// let e = CardSet::from_string("AsAdKcKh7s2c3d").evaluate_high();
    /// assert_eq!(e.category(), HandCategory::TwoPair);
    /// ```
    pub fn evaluate_high(self) -> PokerEvaluation {
        let flush = self.evaluate_high_flush();
        if flush.category() == HandCategory::StraightFlush {
            return flush;
        }
        flush.max(high_from_counts(RankCounts::new(self), true))
    }

    /// High hand from ranks alone, any number of cards
    pub fn evaluate_high_ranks(self) -> PokerEvaluation {
        high_from_counts(RankCounts::new(self), true)
    }

    /// Ace to five low, straights and flushes do not count
    pub fn evaluate_low_a5(self) -> PokerEvaluation {
        raw_low_a5(RankCounts::new(self).ace_low(), self.size()).flipped()
    }

    /// Ace to five low that only qualifies with five distinct ranks eight or lower
    pub fn evaluate_8_low_a5(self) -> PokerEvaluation {
        let eight_or_lower = to_ace_low(self.rank_mask()) & 0xff;
        if eight_or_lower.count_ones() < 5 {
            return PokerEvaluation::default();
        }
        let kick = bottom_bits(eight_or_lower, 5);
        PokerEvaluation::new(
            PokerEvaluation::from_parts(HandCategory::NoPair, 0, 0, kick).code() | ACE_LOW_BIT,
        )
        .flipped()
    }

    /// Deuce to seven low, the ace is high and straights and flushes count against
    pub fn evaluate_low_2to7(self) -> PokerEvaluation {
        self.low_2to7_with(|cards| cards.evaluate_high())
    }

    /// Deuce to seven low ignoring suits
    pub fn evaluate_ranks_low_2to7(self) -> PokerEvaluation {
        self.low_2to7_with(|cards| cards.evaluate_high_ranks())
    }

    /// Deuce to seven value of the best flush alone, empty when there is no flush
    pub fn evaluate_suits_low_2to7(self) -> PokerEvaluation {
        let mut best: Option<PokerEvaluation> = None;
        for suit in Suit::all() {
            let suited: Vec<CardSet> = self
                .card_sets()
                .into_iter()
                .filter(|c| c.count_suit(suit) == 1)
                .collect();
            if suited.len() < 5 {
                continue;
            }
            let mut combos = Combinations::new(suited.len(), 5);
            loop {
                let hand = combos
                    .indices()
                    .iter()
                    .fold(CardSet::empty(), |acc, &i| acc | suited[i]);
                let mut e = hand.evaluate_high_flush();
                e.fix_wheel_2to7(hand.rank_mask());
                best = Some(best.map_or(e, |b| b.min(e)));
                if !combos.next() {
                    break;
                }
            }
        }
        best.unwrap_or_default().flipped()
    }

    fn low_2to7_with<F>(self, high: F) -> PokerEvaluation
    where
        F: Fn(CardSet) -> PokerEvaluation,
    {
        let raw = |cards: CardSet| {
            let mut e = high(cards);
            e.fix_wheel_2to7(cards.rank_mask());
            e
        };
        if self.size() <= 5 {
            return raw(self).flipped();
        }
        let cards = self.card_sets();
        let mut combos = Combinations::new(cards.len(), 5);
        let mut best: Option<PokerEvaluation> = None;
        loop {
            let hand = combos
                .indices()
                .iter()
                .fold(CardSet::empty(), |acc, &i| acc | cards[i]);
            let e = raw(hand);
            best = Some(best.map_or(e, |b| b.min(e)));
            if !combos.next() {
                break;
            }
        }
        best.unwrap_or_default().flipped()
    }

    /// Badugi, the largest subset with distinct ranks and suits, then the lowest ranks
    pub fn evaluate_badugi(self) -> PokerEvaluation {
        let cards = self.card_sets();
        if cards.is_empty() {
            return PokerEvaluation::default();
        }
        let mut best: Option<u32> = None;
        for subset in 1u32..(1 << cards.len()) {
            let hand = (0..cards.len())
                .filter(|&i| subset & (1 << i) != 0)
                .fold(CardSet::empty(), |acc, i| acc | cards[i]);
            let n = hand.size();
            if hand.rank_mask().count_ones() as usize != n {
                continue;
            }
            if Suit::all().any(|s| hand.count_suit(s) > 1) {
                continue;
            }
            let kind = HandCategory::Badugi as u32 + (4 - n.min(4)) as u32;
            let raw = kind << VSHIFT | ACE_LOW_BIT | u32::from(to_ace_low(hand.rank_mask()));
            best = Some(best.map_or(raw, |b| b.min(raw)));
        }
        best.map(|raw| PokerEvaluation::new(raw).flipped())
            .unwrap_or_default()
    }

    /// Three card poker, best three cards
    pub fn evaluate_3cp(self) -> PokerEvaluation {
        if self.size() <= 3 {
            return three_card(self);
        }
        let cards = self.card_sets();
        let mut combos = Combinations::new(cards.len(), 3);
        let mut best = PokerEvaluation::default();
        loop {
            let hand = combos
                .indices()
                .iter()
                .fold(CardSet::empty(), |acc, &i| acc | cards[i]);
            best = best.max(three_card(hand));
            if !combos.next() {
                break;
            }
        }
        best
    }
}

fn three_card(cards: CardSet) -> PokerEvaluation {
    use HandCategory::*;
    let rc = RankCounts::new(cards);
    let v = u32::from(rc.all);
    let straight = if cards.size() < 3 || rc.all.count_ones() < 3 {
        None
    } else if v & v << 1 & v << 2 != 0 {
        Some(top_rank(rc.all))
    } else if v & THREE_WHEEL == THREE_WHEEL {
        Some(Rank::THREE.code())
    } else {
        None
    };
    let flush = cards.size() == 3 && Suit::all().any(|s| cards.count_suit(s) == 3);
    match straight {
        Some(top) if flush => return PokerEvaluation::from_parts(ThreeStraightFlush, top, 0, 0),
        _ => {}
    }
    if rc.trips != 0 || rc.quads != 0 {
        return PokerEvaluation::from_parts(ThreeOfAKind, top_rank(rc.trips | rc.quads), 0, 0);
    }
    if let Some(top) = straight {
        return PokerEvaluation::from_parts(ThreeStraight, top, 0, 0);
    }
    if flush {
        return PokerEvaluation::from_parts(ThreeFlush, 0, 0, rc.all);
    }
    if rc.pairs != 0 {
        let p = top_rank(rc.pairs);
        return PokerEvaluation::from_parts(OnePair, p, 0, rc.all & !(1 << p));
    }
    PokerEvaluation::from_parts(NoPair, 0, 0, rc.all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand_evaluator::Card;

    fn set(s: &str) -> CardSet {
        CardSet::from_string(s)
    }

    /// Independent classifier over sorted rank counts
    fn reference_category(cards: CardSet) -> HandCategory {
        let mut counts = [0usize; 13];
        for c in cards.cards() {
            counts[usize::from(c.rank().code())] += 1;
        }
        let mut shape: Vec<usize> = counts.iter().cloned().filter(|&c| c > 0).collect();
        shape.sort_unstable_by(|a, b| b.cmp(a));
        let flush = Suit::all().any(|s| cards.count_suit(s) == 5);
        let ranks: Vec<usize> = (0..13).filter(|&r| counts[r] > 0).collect();
        let straight = ranks.len() == 5
            && (ranks[4] - ranks[0] == 4 || ranks == vec![0, 1, 2, 3, 12]);
        match (straight, flush, shape.as_slice()) {
            (true, true, _) => HandCategory::StraightFlush,
            (_, _, [4, 1]) => HandCategory::FourOfAKind,
            (_, _, [3, 2]) => HandCategory::FullHouse,
            (_, true, _) => HandCategory::Flush,
            (true, _, _) => HandCategory::Straight,
            (_, _, [3, 1, 1]) => HandCategory::ThreeOfAKind,
            (_, _, [2, 2, 1]) => HandCategory::TwoPair,
            (_, _, [2, 1, 1, 1]) => HandCategory::OnePair,
            _ => HandCategory::NoPair,
        }
    }

    /// Category strength then ranks by multiplicity, compared lexicographically
    fn reference_key(cards: CardSet) -> (usize, Vec<u8>) {
        let order = [
            HandCategory::NoPair,
            HandCategory::OnePair,
            HandCategory::TwoPair,
            HandCategory::ThreeOfAKind,
            HandCategory::Straight,
            HandCategory::Flush,
            HandCategory::FullHouse,
            HandCategory::FourOfAKind,
            HandCategory::StraightFlush,
        ];
        let category = reference_category(cards);
        let strength = order.iter().position(|&c| c == category).unwrap();
        let mut counts = [0u8; 13];
        for c in cards.cards() {
            counts[usize::from(c.rank().code())] += 1;
        }
        let ranks = match category {
            HandCategory::Straight | HandCategory::StraightFlush => {
                // the wheel is five high
                if counts[12] == 1 && counts[3] == 1 && counts[4] == 0 {
                    vec![3]
                } else {
                    vec![(0..13u8).rev().find(|&r| counts[usize::from(r)] > 0).unwrap()]
                }
            }
            _ => {
                let mut groups: Vec<(u8, u8)> = (0..13u8)
                    .filter(|&r| counts[usize::from(r)] > 0)
                    .map(|r| (counts[usize::from(r)], r))
                    .collect();
                groups.sort_unstable_by(|a, b| b.cmp(a));
                groups.into_iter().map(|(_, r)| r).collect()
            }
        };
        (strength, ranks)
    }

    #[test]
    fn test_all_five_card_hands() {
        let deck = CardSet::full().card_sets();
        let mut combos = Combinations::new(52, 5);
        let mut counts = std::collections::HashMap::new();
        let mut keys = std::collections::HashMap::new();
        loop {
            let hand = combos
                .indices()
                .iter()
                .fold(CardSet::empty(), |acc, &i| acc | deck[i]);
            let e = hand.evaluate_high();
            assert_eq!(e.category(), reference_category(hand), "{}", hand);
            *counts.entry(e.category()).or_insert(0u32) += 1;

            let key = reference_key(hand);
            let seen = keys.entry(e.code()).or_insert_with(|| key.clone());
            assert_eq!(*seen, key, "{}", hand);

            let mut moved = e;
            moved.play_ace_low();
            assert_eq!(moved.category(), e.category(), "{}", hand);
            if e.category() != HandCategory::NoPair && e.category() != HandCategory::Flush {
                assert_eq!(moved.major_rank(), e.major_rank(), "{}", hand);
            }
            moved.play_ace_high();
            assert_eq!(moved, e, "{}", hand);
            if !combos.next() {
                break;
            }
        }
        // distinct codes are exactly the distinct hand values, in strength order
        assert_eq!(keys.len(), 7462);
        let mut by_code: Vec<_> = keys.into_iter().collect();
        by_code.sort_unstable_by_key(|(code, _)| *code);
        for w in by_code.windows(2) {
            assert!(w[0].1 < w[1].1, "{:?} {:?}", w[0], w[1]);
        }
        assert_eq!(counts[&HandCategory::StraightFlush], 40);
        assert_eq!(counts[&HandCategory::FourOfAKind], 624);
        assert_eq!(counts[&HandCategory::FullHouse], 3744);
        assert_eq!(counts[&HandCategory::Flush], 5108);
        assert_eq!(counts[&HandCategory::Straight], 10200);
        assert_eq!(counts[&HandCategory::ThreeOfAKind], 54912);
        assert_eq!(counts[&HandCategory::TwoPair], 123_552);
        assert_eq!(counts[&HandCategory::OnePair], 1_098_240);
        assert_eq!(counts[&HandCategory::NoPair], 1_302_540);
    }

    #[test]
    fn test_high_ordering() {
        let ordered = [
            "7c5d4h3s2c",
            "AcKdQhJs9c",
            "2c2d3h4s5c",
            "AcAdKhQsJc",
            "2c2d3h3s4c",
            "AcAdKhKsQc",
            "2c2d2h3s4c",
            "AcAdAhKsQc",
            "5c4d3h2sAc",
            "6c5d4h3s2c",
            "AcKdQhJsTc",
            "7c5c4c3c2c",
            "AcKcQcJc9c",
            "2c2d2h3s3c",
            "AcAdAhKsKc",
            "2c2d2h2s3c",
            "AcAdAhAsKc",
            "5c4c3c2cAc",
            "AcKcQcJcTc",
        ];
        for w in ordered.windows(2) {
            assert!(set(w[0]).evaluate_high() < set(w[1]).evaluate_high(), "{} {}", w[0], w[1]);
        }
    }

    #[test]
    fn test_seven_cards() {
        // flush over straight
        let e = set("9c8c7d6c5h2cKc").evaluate_high();
        assert_eq!(e.category(), HandCategory::Flush);
        // two trips make a full house with the lower trips as the pair
        let e = set("9c9d9h5c5h5s2c").evaluate_high();
        assert_eq!(e.category(), HandCategory::FullHouse);
        assert_eq!(e.major_rank(), Rank::NINE);
        assert_eq!(e.minor_rank(), Rank::FIVE);
        // three pairs keep the best two and the best kicker
        let e = set("KcKd9h9s4c4dAh").evaluate_high();
        assert_eq!(e.to_string(), "two pair:      K9A  ");
        // quads with trips on the side
        let e = set("7c7d7h7sKcKdKh").evaluate_high();
        assert_eq!(e.to_string(), "quads:         7K   ");
        assert_eq!(set("2c3c4c5c7c8d").evaluate_high_flush().category(), HandCategory::Flush);
        assert!(set("2c3c4c5d7c8d").evaluate_high_flush().is_empty());
    }

    #[test]
    fn test_rank_only_is_size_tolerant() {
        assert_eq!(set("AcAd").evaluate_high_ranks().category(), HandCategory::OnePair);
        assert_eq!(set("Kh").evaluate_high_ranks().to_string(), "high card:     K    ");
        assert_eq!(
            set("9c8c7c6c5c").evaluate_high_ranks().category(),
            HandCategory::Straight
        );
    }

    #[test]
    fn test_low_a5() {
        let wheel = set("5c4d3h2sAc").evaluate_low_a5();
        let six = set("6c4d3h2sAc").evaluate_low_a5();
        let pair = set("AcAd3h2s4c").evaluate_low_a5();
        assert!(wheel > six);
        assert!(six > pair);
        assert!(wheel.is_flipped());
        assert_eq!(wheel.to_string(), "high card:     5432A");
        // razz picks the best five of seven
        let razz = set("KcKdQh2s3c4d5h").evaluate_low_a5();
        assert_eq!(razz.flipped().category(), HandCategory::NoPair);
        assert_eq!(razz.to_string(), "high card:     Q5432");
        let paired = set("2c2d3h3s4c4dAh").evaluate_low_a5();
        assert_eq!(paired.to_string(), "one pair:      243A ");
    }

    #[test]
    fn test_low_a5_forced_pairs() {
        // two pair beats trips as a low
        let e = set("2c2d2h3s3c4d4h").evaluate_low_a5().flipped();
        assert_eq!(e.category(), HandCategory::TwoPair);
        assert_eq!(e.major_rank(), Rank::THREE);
        assert_eq!(e.minor_rank(), Rank::TWO);
        let e = set("2c2d2h3sKc").evaluate_low_a5().flipped();
        assert_eq!(e.category(), HandCategory::ThreeOfAKind);
        let e = set("2c2d2h3s3c3d4h").evaluate_low_a5().flipped();
        assert_eq!(e.category(), HandCategory::TwoPair);
        let e = set("2c2d2h3s3cKd").evaluate_low_a5().flipped();
        assert_eq!(e.category(), HandCategory::TwoPair);
        let e = set("2c2d2h3s3c").evaluate_low_a5().flipped();
        assert_eq!(e.category(), HandCategory::FullHouse);
        assert_eq!(e.major_rank(), Rank::TWO);
        let e = set("2c2d2h2s3c").evaluate_low_a5().flipped();
        assert_eq!(e.category(), HandCategory::FourOfAKind);
    }

    #[test]
    fn test_eight_low() {
        let e = set("8c7d3h2sAcKdKh").evaluate_8_low_a5();
        assert!(!e.is_empty());
        assert_eq!(e.to_string(), "high card:     8732A");
        assert!(set("9c7d3h2sAcKdKh").evaluate_8_low_a5().is_empty());
        assert!(set("8c8d3h2sAcKdKh").evaluate_8_low_a5().is_empty());
        assert!(set("5c4d3h2sAc").evaluate_8_low_a5() > set("6c4d3h2sAc").evaluate_8_low_a5());
    }

    #[test]
    fn test_low_2to7() {
        let nuts = set("7c5d4h3s2c").evaluate_low_2to7();
        let wheel = set("5c4d3h2sAc").evaluate_low_2to7();
        let eight = set("8c5d4h3s2c").evaluate_low_2to7();
        let straight = set("6c5d4h3s2c").evaluate_low_2to7();
        let flush = set("7c5c4c3c2c").evaluate_low_2to7();
        assert!(nuts > eight);
        assert!(eight > wheel);
        assert!(wheel > straight);
        assert!(nuts > flush);
        // suits ignored
        assert!(set("7c5c4c3c2c").evaluate_ranks_low_2to7() == nuts);
        // best five of six
        assert_eq!(set("7c5d4h3s2cKd").evaluate_low_2to7(), nuts);
    }

    #[test]
    fn test_suits_low_2to7() {
        let flush = set("7c5c4c3c2c");
        assert_eq!(flush.evaluate_suits_low_2to7(), flush.evaluate_low_2to7());
        assert!(set("7c5d4h3s2c").evaluate_suits_low_2to7().is_empty());
        // the lowest five of six suited cards
        assert_eq!(
            set("8c7c5c4c3c2c").evaluate_suits_low_2to7(),
            set("7c5c4c3c2c").evaluate_low_2to7()
        );
        let sf = set("6c5c4c3c2c8d").evaluate_suits_low_2to7();
        assert_eq!(sf.category(), HandCategory::StraightFlush);
        assert!(flush.evaluate_suits_low_2to7() > sf);
        // a suited wheel is an ace high flush
        let wheel = set("5s4s3s2sAs").evaluate_suits_low_2to7();
        assert_eq!(wheel.category(), HandCategory::Flush);
    }

    #[test]
    fn test_badugi() {
        let four = set("Ac2d3h4s").evaluate_badugi();
        let four_worse = set("Ac2d3h5s").evaluate_badugi();
        let three = set("Ac2c3h4s").evaluate_badugi();
        let two = set("AcAd2c2d").evaluate_badugi();
        assert!(four > four_worse);
        assert!(four_worse > three);
        assert!(three > two);
        assert_eq!(four.to_string(), "badugi:        432A ");
        assert_eq!(three.flipped().category(), HandCategory::ThreeCardBadugi);
        assert_eq!(two.to_string(), "two card:      2A   ");
        assert_eq!(
            set("KcKdKhKs").evaluate_badugi().flipped().category(),
            HandCategory::OneCardBadugi
        );
    }

    #[test]
    fn test_three_card() {
        let sf = set("QhJhTh").evaluate_3cp();
        let trips = set("2c2d2h").evaluate_3cp();
        let straight = set("Ac2d3h").evaluate_3cp();
        let flush = set("Ac9c2c").evaluate_3cp();
        let pair = set("AcAdKh").evaluate_3cp();
        let high = set("AcKdJh").evaluate_3cp();
        assert!(sf > trips);
        assert!(trips > straight);
        assert_eq!(straight.major_rank(), Rank::THREE);
        assert!(straight > flush);
        assert!(flush > pair);
        assert!(pair > high);
        assert_eq!(set("AcAdKhKs2c").evaluate_3cp(), pair.max(set("AcAdKs").evaluate_3cp()));
        assert_eq!(
            set("4s").union(CardSet::from_card(Card::new(Rank::FIVE, Suit::SPADES)))
                .evaluate_3cp()
                .category(),
            HandCategory::NoPair
        );
    }
}
