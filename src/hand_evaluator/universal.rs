//! Rule driven evaluator
//!
//! Any game that picks a fixed number of hole cards, fills the rest of the
//! hand from the board and scores the result with one or two of the `CardSet`
//! rules can be built from `UniversalHandEvaluator`. It is slower than the
//! dedicated variants and serves as the reference for them.

use super::card_set::CardSet;
use super::evaluation::PokerEvaluation;
use super::evaluator::{PokerHandEvaluation, PokerHandEvaluator};
use crate::equity_calculator::{choose, Combinations};
use crate::error::{PokerError, Result};

/// A `CardSet` scoring rule such as `CardSet::evaluate_high`
pub type EvalRule = fn(CardSet) -> PokerEvaluation;

#[derive(Clone)]
pub struct UniversalHandEvaluator {
    hero_min: usize,
    hero_max: usize,
    board_min: usize,
    board_max: usize,
    hero_use: usize,
    primary: EvalRule,
    secondary: Option<EvalRule>,
    num_draws: usize,
}

impl std::fmt::Debug for UniversalHandEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UniversalHandEvaluator")
            .field("hero_min", &self.hero_min)
            .field("hero_max", &self.hero_max)
            .field("board_min", &self.board_min)
            .field("board_max", &self.board_max)
            .field("hero_use", &self.hero_use)
            .field("sides", &self.evaluation_size())
            .field("num_draws", &self.num_draws)
            .finish()
    }
}

/// Every `k` card subset of `cards`, or the whole set when `k` is 0 or too large
fn subsets(cards: CardSet, k: usize) -> Vec<CardSet> {
    let n = cards.size();
    if k == 0 || k > n {
        return vec![cards];
    }
    let singles = cards.card_sets();
    let mut combos = Combinations::new(n, k);
    let mut out = Vec::with_capacity(choose(n, k) as usize);
    loop {
        out.push(
            combos
                .indices()
                .iter()
                .fold(CardSet::empty(), |acc, &i| acc | singles[i]),
        );
        if !combos.next() {
            break;
        }
    }
    out
}

impl UniversalHandEvaluator {
    /// # Arguments
    ///
    /// * `hero_min`, `hero_max` - allowed hole card counts
    /// * `board_min`, `board_max` - allowed board sizes, an empty board is always allowed
    /// * `hero_use` - hole cards every hand must use, 0 for any
    /// * `primary` - rule for the first pot half
    /// * `secondary` - rule for the second pot half in split games
    pub fn new(
        hero_min: usize,
        hero_max: usize,
        board_min: usize,
        board_max: usize,
        hero_use: usize,
        primary: EvalRule,
        secondary: Option<EvalRule>,
    ) -> Self {
        UniversalHandEvaluator {
            hero_min,
            hero_max,
            board_min,
            board_max,
            hero_use,
            primary,
            secondary,
            num_draws: 0,
        }
    }

    pub fn with_draws(mut self, num_draws: usize) -> Self {
        self.num_draws = num_draws;
        self
    }

    fn check(&self, hand: CardSet, board: CardSet) -> Result<()> {
        let hs = hand.size();
        if hs < self.hero_min || hs > self.hero_max {
            return Err(PokerError::InvalidHandSize {
                size: hs,
                min: self.hero_min,
                max: self.hero_max,
            });
        }
        let bs = board.size();
        if (bs < self.board_min && bs > 0) || bs > self.board_max {
            return Err(PokerError::InvalidBoardSize {
                size: bs,
                min: self.board_min,
                max: self.board_max,
            });
        }
        Ok(())
    }
}

impl PokerHandEvaluator for UniversalHandEvaluator {
    fn evaluate_hand(&self, hand: CardSet, board: CardSet) -> Result<PokerHandEvaluation> {
        self.check(hand, board)?;
        let hero = subsets(hand, self.hero_use);
        let common = subsets(board, self.board_max.saturating_sub(self.hero_use));

        let mut high = PokerEvaluation::default();
        let mut low = PokerEvaluation::default();
        for h in hero.iter() {
            for b in common.iter() {
                let cards = *h | *b;
                high = high.max((self.primary)(cards));
                if let Some(rule) = self.secondary {
                    low = low.max(rule(cards));
                }
            }
        }
        Ok(PokerHandEvaluation::with_low(high, low))
    }

    fn hand_size(&self) -> usize {
        self.hero_max
    }

    fn board_size(&self) -> usize {
        self.board_max
    }

    fn evaluation_size(&self) -> usize {
        if self.secondary.is_some() {
            2
        } else {
            1
        }
    }

    fn num_draws(&self) -> usize {
        self.num_draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand_evaluator::{
        HoldemHandEvaluator, OmahaEightHandEvaluator, OmahaHighHandEvaluator,
    };

    fn set(s: &str) -> CardSet {
        CardSet::from_string(s)
    }

    fn omaha8() -> UniversalHandEvaluator {
        UniversalHandEvaluator::new(
            4,
            4,
            3,
            5,
            2,
            CardSet::evaluate_high,
            Some(CardSet::evaluate_8_low_a5),
        )
    }

    #[test]
    fn test_subsets() {
        assert_eq!(subsets(set("AsKsQsJs"), 2).len(), 6);
        assert_eq!(subsets(set("AsKsQsJsTs"), 3).len(), 10);
        assert_eq!(subsets(set("AsKs"), 0), vec![set("AsKs")]);
        assert_eq!(subsets(set("AsKs"), 3), vec![set("AsKs")]);
        assert_eq!(subsets(CardSet::empty(), 3), vec![CardSet::empty()]);
    }

    #[test]
    fn test_matches_holdem() {
        let universal =
            UniversalHandEvaluator::new(2, 2, 3, 5, 0, CardSet::evaluate_high, None);
        let holdem = HoldemHandEvaluator::new();
        let cases = [
            ("AsAh", "Ad7c2s9h3d"),
            ("KsQs", "JsTs2c"),
            ("7h2c", "AsKdQc4h"),
        ];
        for &(h, b) in cases.iter() {
            assert_eq!(
                universal.evaluate_hand(set(h), set(b)).unwrap(),
                holdem.evaluate_hand(set(h), set(b)).unwrap(),
                "{} {}",
                h,
                b
            );
        }
    }

    #[test]
    fn test_matches_omaha() {
        let high = UniversalHandEvaluator::new(4, 4, 3, 5, 2, CardSet::evaluate_high, None);
        let cases = [
            ("AsKsQsJs", "2s7d8c9hTd"),
            ("2c3d4h5s", "KcKdKhKsAc"),
            ("As2s3sKd", "4c5d9hTcJd"),
            ("As2sKsKd", "4c5d8hTc"),
        ];
        for &(h, b) in cases.iter() {
            assert_eq!(
                high.evaluate_hand(set(h), set(b)).unwrap(),
                OmahaHighHandEvaluator::new()
                    .evaluate_hand(set(h), set(b))
                    .unwrap()
            );
            assert_eq!(
                omaha8().evaluate_hand(set(h), set(b)).unwrap(),
                OmahaEightHandEvaluator::new()
                    .evaluate_hand(set(h), set(b))
                    .unwrap()
            );
        }
    }

    #[test]
    fn test_size_checks() {
        let e = omaha8();
        assert_eq!(e.evaluation_size(), 2);
        assert_eq!(
            e.evaluate_hand(set("AsKs"), set("2c3c4c")).unwrap_err(),
            PokerError::InvalidHandSize {
                size: 2,
                min: 4,
                max: 4
            }
        );
        assert_eq!(
            e.evaluate_hand(set("AsKsQsJs"), set("2c3c")).unwrap_err(),
            PokerError::InvalidBoardSize {
                size: 2,
                min: 3,
                max: 5
            }
        );
        // no board yet is fine
        assert!(e.evaluate_hand(set("AsKsQsJs"), CardSet::empty()).is_ok());
    }

    #[test]
    fn test_stud_high_low_without_qualifier() {
        let e = UniversalHandEvaluator::new(
            1,
            7,
            0,
            0,
            0,
            CardSet::evaluate_high,
            Some(CardSet::evaluate_low_a5),
        )
        .with_draws(0);
        let eval = e.evaluate_hand(set("KsKdQc9h"), CardSet::empty()).unwrap();
        assert!(!eval.low().is_empty());
        assert_eq!(e.num_draws(), 0);
    }
}
