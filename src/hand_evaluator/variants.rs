use super::card_set::CardSet;
use super::evaluation::PokerEvaluation;
use super::evaluator::{PokerHandEvaluation, PokerHandEvaluator};
use crate::constants::*;
use crate::error::{PokerError, Result};

fn check_sizes(hand: CardSet, board: CardSet, hand_max: usize, board_max: usize) -> Result<()> {
    if hand.size() > hand_max {
        return Err(PokerError::InvalidHandSize {
            size: hand.size(),
            min: 0,
            max: hand_max,
        });
    }
    if board.size() > board_max {
        return Err(PokerError::InvalidBoardSize {
            size: board.size(),
            min: 0,
            max: board_max,
        });
    }
    Ok(())
}

/// Rank only meld of hole cards and board, shared ranks stack into new suits
fn rank_meld(hand: CardSet, board: CardSet) -> CardSet {
    let mut ranks = CardSet::empty();
    ranks.insert_ranks(hand);
    ranks.insert_ranks(board);
    ranks
}

/// Texas hold'em, best five of two hole cards and up to five board cards
#[derive(Debug, Clone, Default)]
pub struct HoldemHandEvaluator;

impl HoldemHandEvaluator {
    pub fn new() -> Self {
        HoldemHandEvaluator
    }
}

impl PokerHandEvaluator for HoldemHandEvaluator {
    fn evaluate_hand(&self, hand: CardSet, board: CardSet) -> Result<PokerHandEvaluation> {
        check_sizes(hand, board, HOLDEM_HAND_SIZE, BOARD_SIZE)?;
        Ok(PokerHandEvaluation::new((hand | board).evaluate_high()))
    }

    fn hand_size(&self) -> usize {
        HOLDEM_HAND_SIZE
    }

    fn board_size(&self) -> usize {
        BOARD_SIZE
    }

    fn evaluate_ranks(&self, hand: CardSet, board: CardSet) -> Result<PokerEvaluation> {
        Ok(rank_meld(hand, board).evaluate_high_ranks())
    }

    fn evaluate_suits(&self, hand: CardSet, board: CardSet) -> Result<PokerEvaluation> {
        Ok((hand | board).evaluate_high_flush())
    }
}

/// Seven card stud high
#[derive(Debug, Clone, Default)]
pub struct StudHandEvaluator;

impl StudHandEvaluator {
    pub fn new() -> Self {
        StudHandEvaluator
    }
}

impl PokerHandEvaluator for StudHandEvaluator {
    fn evaluate_hand(&self, hand: CardSet, board: CardSet) -> Result<PokerHandEvaluation> {
        check_sizes(hand | board, CardSet::empty(), STUD_HAND_SIZE, 0)?;
        Ok(PokerHandEvaluation::new((hand | board).evaluate_high()))
    }

    fn hand_size(&self) -> usize {
        STUD_HAND_SIZE
    }

    fn board_size(&self) -> usize {
        0
    }

    fn evaluate_ranks(&self, hand: CardSet, board: CardSet) -> Result<PokerEvaluation> {
        Ok(rank_meld(hand, board).evaluate_high_ranks())
    }

    fn evaluate_suits(&self, hand: CardSet, board: CardSet) -> Result<PokerEvaluation> {
        Ok((hand | board).evaluate_high_flush())
    }
}

/// Seven card stud high low, eight or better
#[derive(Debug, Clone, Default)]
pub struct StudEightHandEvaluator;

impl StudEightHandEvaluator {
    pub fn new() -> Self {
        StudEightHandEvaluator
    }
}

impl PokerHandEvaluator for StudEightHandEvaluator {
    fn evaluate_hand(&self, hand: CardSet, board: CardSet) -> Result<PokerHandEvaluation> {
        let cards = hand | board;
        check_sizes(cards, CardSet::empty(), STUD_HAND_SIZE, 0)?;
        Ok(PokerHandEvaluation::with_low(
            cards.evaluate_high(),
            cards.evaluate_8_low_a5(),
        ))
    }

    fn hand_size(&self) -> usize {
        STUD_HAND_SIZE
    }

    fn board_size(&self) -> usize {
        0
    }

    fn evaluation_size(&self) -> usize {
        2
    }
}

/// Razz, ace to five low over seven cards
#[derive(Debug, Clone, Default)]
pub struct RazzHandEvaluator;

impl RazzHandEvaluator {
    pub fn new() -> Self {
        RazzHandEvaluator
    }
}

impl PokerHandEvaluator for RazzHandEvaluator {
    fn evaluate_hand(&self, hand: CardSet, board: CardSet) -> Result<PokerHandEvaluation> {
        let cards = hand | board;
        check_sizes(cards, CardSet::empty(), STUD_HAND_SIZE, 0)?;
        Ok(PokerHandEvaluation::new(cards.evaluate_low_a5()))
    }

    fn hand_size(&self) -> usize {
        STUD_HAND_SIZE
    }

    fn board_size(&self) -> usize {
        0
    }

    fn uses_suits(&self) -> bool {
        false
    }
}

/// Draw poker for high
#[derive(Debug, Clone)]
pub struct DrawHighHandEvaluator {
    hand_size: usize,
    num_draws: usize,
}

impl Default for DrawHighHandEvaluator {
    fn default() -> Self {
        DrawHighHandEvaluator::new()
    }
}

impl DrawHighHandEvaluator {
    pub fn new() -> Self {
        DrawHighHandEvaluator {
            hand_size: DRAW_HAND_SIZE,
            num_draws: 1,
        }
    }

    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    pub fn with_draws(mut self, num_draws: usize) -> Self {
        self.num_draws = num_draws;
        self
    }
}

impl PokerHandEvaluator for DrawHighHandEvaluator {
    fn evaluate_hand(&self, hand: CardSet, board: CardSet) -> Result<PokerHandEvaluation> {
        let cards = hand | board;
        check_sizes(cards, CardSet::empty(), self.hand_size, 0)?;
        Ok(PokerHandEvaluation::new(cards.evaluate_high()))
    }

    fn hand_size(&self) -> usize {
        self.hand_size
    }

    fn board_size(&self) -> usize {
        0
    }

    fn num_draws(&self) -> usize {
        self.num_draws
    }

    fn evaluate_ranks(&self, hand: CardSet, board: CardSet) -> Result<PokerEvaluation> {
        Ok(rank_meld(hand, board).evaluate_high_ranks())
    }

    fn evaluate_suits(&self, hand: CardSet, board: CardSet) -> Result<PokerEvaluation> {
        Ok((hand | board).evaluate_high_flush())
    }
}

/// Deuce to seven lowball
#[derive(Debug, Clone)]
pub struct DeuceToSevenHandEvaluator {
    use_suits: bool,
    num_draws: usize,
}

impl Default for DeuceToSevenHandEvaluator {
    fn default() -> Self {
        DeuceToSevenHandEvaluator::new()
    }
}

impl DeuceToSevenHandEvaluator {
    pub fn new() -> Self {
        DeuceToSevenHandEvaluator {
            use_suits: true,
            num_draws: 3,
        }
    }

    /// Ignore flushes when `use_suits` is false
    pub fn with_suits(mut self, use_suits: bool) -> Self {
        self.use_suits = use_suits;
        self
    }

    pub fn with_draws(mut self, num_draws: usize) -> Self {
        self.num_draws = num_draws;
        self
    }
}

impl PokerHandEvaluator for DeuceToSevenHandEvaluator {
    fn evaluate_hand(&self, hand: CardSet, board: CardSet) -> Result<PokerHandEvaluation> {
        let cards = hand | board;
        check_sizes(cards, CardSet::empty(), DRAW_HAND_SIZE, 0)?;
        let eval = if self.use_suits {
            cards.evaluate_low_2to7()
        } else {
            cards.evaluate_ranks_low_2to7()
        };
        Ok(PokerHandEvaluation::new(eval))
    }

    fn hand_size(&self) -> usize {
        DRAW_HAND_SIZE
    }

    fn board_size(&self) -> usize {
        0
    }

    fn uses_suits(&self) -> bool {
        self.use_suits
    }

    fn num_draws(&self) -> usize {
        self.num_draws
    }

    fn evaluate_ranks(&self, hand: CardSet, board: CardSet) -> Result<PokerEvaluation> {
        Ok((hand | board).evaluate_ranks_low_2to7())
    }

    fn evaluate_suits(&self, hand: CardSet, board: CardSet) -> Result<PokerEvaluation> {
        Ok((hand | board).evaluate_suits_low_2to7())
    }
}

/// Badugi
#[derive(Debug, Clone)]
pub struct BadugiHandEvaluator {
    num_draws: usize,
}

impl Default for BadugiHandEvaluator {
    fn default() -> Self {
        BadugiHandEvaluator::new()
    }
}

impl BadugiHandEvaluator {
    pub fn new() -> Self {
        BadugiHandEvaluator { num_draws: 3 }
    }

    pub fn with_draws(mut self, num_draws: usize) -> Self {
        self.num_draws = num_draws;
        self
    }
}

impl PokerHandEvaluator for BadugiHandEvaluator {
    fn evaluate_hand(&self, hand: CardSet, board: CardSet) -> Result<PokerHandEvaluation> {
        let cards = hand | board;
        check_sizes(cards, CardSet::empty(), BADUGI_HAND_SIZE, 0)?;
        Ok(PokerHandEvaluation::new(cards.evaluate_badugi()))
    }

    fn hand_size(&self) -> usize {
        BADUGI_HAND_SIZE
    }

    fn board_size(&self) -> usize {
        0
    }

    fn num_draws(&self) -> usize {
        self.num_draws
    }

    fn evaluate_ranks(&self, _hand: CardSet, _board: CardSet) -> Result<PokerEvaluation> {
        Err(PokerError::Unsupported("rank only evaluation of badugi"))
    }

    fn evaluate_suits(&self, _hand: CardSet, _board: CardSet) -> Result<PokerEvaluation> {
        Err(PokerError::Unsupported("suit only evaluation of badugi"))
    }
}

/// The six ways to pick two of four hole cards
const HOLE_PAIRS: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

/// Board triples, the first covers a flop, the first 4 a turn, all 10 a river
const BOARD_TRIPLES: [(usize, usize, usize); 10] = [
    (0, 1, 2),
    (0, 1, 3),
    (0, 2, 3),
    (1, 2, 3),
    (0, 1, 4),
    (0, 2, 4),
    (0, 3, 4),
    (1, 2, 4),
    (1, 3, 4),
    (2, 3, 4),
];

/// Split a set into singletons without allocating
fn singles(set: CardSet, out: &mut [CardSet]) -> usize {
    let mut m = set.mask();
    let mut n = 0;
    while m != 0 && n < out.len() {
        let low = m & m.wrapping_neg();
        out[n] = CardSet::from_mask(low);
        m ^= low;
        n += 1;
    }
    n
}

/// Apply `visit` to every pair of hole cards with every board triple
fn for_each_omaha_hand<F>(hand: CardSet, board: CardSet, mut visit: F) -> Result<()>
where
    F: FnMut(CardSet, CardSet),
{
    let (nh, nb) = (hand.size(), board.size());
    if nh < 2 || nh > OMAHA_HAND_SIZE {
        return Err(PokerError::InvalidHandSize {
            size: nh,
            min: 2,
            max: OMAHA_HAND_SIZE,
        });
    }
    if nb < 3 || nb > BOARD_SIZE {
        return Err(PokerError::InvalidBoardSize {
            size: nb,
            min: 3,
            max: BOARD_SIZE,
        });
    }
    let mut hole = [CardSet::empty(); OMAHA_HAND_SIZE];
    let mut common = [CardSet::empty(); BOARD_SIZE];
    singles(hand, &mut hole);
    singles(board, &mut common);

    let mut pairs = [CardSet::empty(); 6];
    let mut n_pairs = 0;
    for &(a, b) in HOLE_PAIRS.iter().filter(|&&(_, b)| b < nh) {
        pairs[n_pairs] = hole[a] | hole[b];
        n_pairs += 1;
    }
    let n_triples = match nb {
        3 => 1,
        4 => 4,
        _ => 10,
    };
    for &(a, b, c) in &BOARD_TRIPLES[..n_triples] {
        let triple = common[a] | common[b] | common[c];
        for pair in &pairs[..n_pairs] {
            visit(*pair, triple);
        }
    }
    Ok(())
}

/// Omaha high, exactly two hole cards and three board cards
#[derive(Debug, Clone, Default)]
pub struct OmahaHighHandEvaluator;

impl OmahaHighHandEvaluator {
    pub fn new() -> Self {
        OmahaHighHandEvaluator
    }
}

impl PokerHandEvaluator for OmahaHighHandEvaluator {
    fn evaluate_hand(&self, hand: CardSet, board: CardSet) -> Result<PokerHandEvaluation> {
        let mut high = PokerEvaluation::default();
        for_each_omaha_hand(hand, board, |pair, triple| {
            high = high.max((pair | triple).evaluate_high());
        })?;
        Ok(PokerHandEvaluation::new(high))
    }

    fn hand_size(&self) -> usize {
        OMAHA_HAND_SIZE
    }

    fn board_size(&self) -> usize {
        BOARD_SIZE
    }

    fn evaluate_ranks(&self, hand: CardSet, board: CardSet) -> Result<PokerEvaluation> {
        omaha_ranks(hand, board)
    }

    fn evaluate_suits(&self, hand: CardSet, board: CardSet) -> Result<PokerEvaluation> {
        omaha_suits(hand, board)
    }
}

fn omaha_ranks(hand: CardSet, board: CardSet) -> Result<PokerEvaluation> {
    let mut best = PokerEvaluation::default();
    for_each_omaha_hand(hand, board, |pair, triple| {
        best = best.max(rank_meld(pair, triple).evaluate_high_ranks());
    })?;
    Ok(best)
}

fn omaha_suits(hand: CardSet, board: CardSet) -> Result<PokerEvaluation> {
    let mut best = PokerEvaluation::default();
    for_each_omaha_hand(hand, board, |pair, triple| {
        best = best.max((pair | triple).evaluate_high_flush());
    })?;
    Ok(best)
}

/// Omaha high low, eight or better, both halves use two hole and three board cards
#[derive(Debug, Clone, Default)]
pub struct OmahaEightHandEvaluator;

impl OmahaEightHandEvaluator {
    pub fn new() -> Self {
        OmahaEightHandEvaluator
    }
}

impl PokerHandEvaluator for OmahaEightHandEvaluator {
    fn evaluate_hand(&self, hand: CardSet, board: CardSet) -> Result<PokerHandEvaluation> {
        let mut high = PokerEvaluation::default();
        let mut low = PokerEvaluation::default();
        for_each_omaha_hand(hand, board, |pair, triple| {
            let cards = pair | triple;
            high = high.max(cards.evaluate_high());
            low = low.max(cards.evaluate_8_low_a5());
        })?;
        Ok(PokerHandEvaluation::with_low(high, low))
    }

    fn hand_size(&self) -> usize {
        OMAHA_HAND_SIZE
    }

    fn board_size(&self) -> usize {
        BOARD_SIZE
    }

    fn evaluation_size(&self) -> usize {
        2
    }

    fn evaluate_ranks(&self, hand: CardSet, board: CardSet) -> Result<PokerEvaluation> {
        omaha_ranks(hand, board)
    }

    fn evaluate_suits(&self, hand: CardSet, board: CardSet) -> Result<PokerEvaluation> {
        omaha_suits(hand, board)
    }
}
