use std::fmt;

use serde::{Deserialize, Serialize};

use super::card_set::CardSet;
use super::evaluation::PokerEvaluation;
use super::universal::UniversalHandEvaluator;
use super::variants::*;
use crate::constants::{DRAW_HAND_SIZE, STUD_HAND_SIZE, THREE_CARD_HAND_SIZE};
use crate::equity_calculator::EquityResult;
use crate::error::{PokerError, Result};

/// High and optional low evaluation of one hand
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PokerHandEvaluation {
    high: PokerEvaluation,
    low: PokerEvaluation,
}

impl PokerHandEvaluation {
    pub fn new(high: PokerEvaluation) -> Self {
        PokerHandEvaluation {
            high,
            low: PokerEvaluation::default(),
        }
    }

    pub fn with_low(high: PokerEvaluation, low: PokerEvaluation) -> Self {
        PokerHandEvaluation { high, low }
    }

    pub fn high(&self) -> PokerEvaluation {
        self.high
    }

    /// Empty when the game has no low or the hand does not qualify
    pub fn low(&self) -> PokerEvaluation {
        self.low
    }

    /// Side 0 is the high half of the pot, side 1 the low half
    pub fn eval(&self, side: usize) -> PokerEvaluation {
        if side == 0 {
            self.high
        } else {
            self.low
        }
    }
}

impl fmt::Display for PokerHandEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.high)?;
        if !self.low.is_empty() {
            write!(f, " / {}", self.low)?;
        }
        Ok(())
    }
}

/// Game specific hand evaluation
///
/// Implementations are immutable once built and are shared read-only by every
/// worker of an enumeration.
pub trait PokerHandEvaluator: Send + Sync + fmt::Debug {
    /// Evaluate the best hand formed from hole cards and board
    fn evaluate_hand(&self, hand: CardSet, board: CardSet) -> Result<PokerHandEvaluation>;

    /// Cards a seat holds once fully dealt
    fn hand_size(&self) -> usize;

    /// Cards on a complete board, 0 for games without one
    fn board_size(&self) -> usize;

    /// 1 for high only games, 2 for high low split games
    fn evaluation_size(&self) -> usize {
        1
    }

    fn uses_suits(&self) -> bool {
        true
    }

    fn num_draws(&self) -> usize {
        0
    }

    /// Evaluation that only looks at ranks
    fn evaluate_ranks(&self, hand: CardSet, board: CardSet) -> Result<PokerEvaluation> {
        Ok(self.evaluate_hand(hand, board)?.high())
    }

    /// Evaluation of the suited part of the hand
    fn evaluate_suits(&self, hand: CardSet, board: CardSet) -> Result<PokerEvaluation> {
        Ok(self.evaluate_hand(hand, board)?.high())
    }

    /// Score one deal
    ///
    /// Every seat in `results` is evaluated into `evals`, then `weight` is split evenly
    /// between the pot halves in play and within each half evenly between the seats
    /// holding the best evaluation. The low half is in play only when some seat
    /// qualifies for it. Shares are added to `results`, never reset.
    fn evaluate_showdown(
        &self,
        hands: &[CardSet],
        board: CardSet,
        evals: &mut [PokerHandEvaluation],
        results: &mut [EquityResult],
        weight: f64,
    ) -> Result<()> {
        let n = results.len();
        debug_assert!(hands.len() >= n && evals.len() >= n);
        for i in 0..n {
            evals[i] = self.evaluate_hand(hands[i], board)?;
        }
        let evals = &evals[..n];
        let low_active = self.evaluation_size() > 1 && evals.iter().any(|e| !e.low().is_empty());
        let sides = if low_active { 2 } else { 1 };
        let share = weight / sides as f64;
        for side in 0..sides {
            let best = evals.iter().map(|e| e.eval(side)).max().unwrap_or_default();
            let winners = evals.iter().filter(|e| e.eval(side) == best).count();
            for (result, e) in results.iter_mut().zip(evals.iter()) {
                if e.eval(side) != best {
                    continue;
                }
                if winners == 1 {
                    result.win_shares += share;
                } else {
                    result.tie_shares += share / winners as f64;
                }
            }
        }
        Ok(())
    }
}

/// Build the evaluator for a game identifier
///
/// The first character picks the game:
///
/// | id | game |
/// |----|------|
/// | `h` `H` | hold'em |
/// | `O` | omaha high |
/// | `o` | omaha high low eight or better |
/// | `s` | seven card stud |
/// | `e` | seven card stud high low eight or better |
/// | `q` | seven card stud high low without qualifier |
/// | `r` | razz |
/// | `d` `D` | five card draw high |
/// | `t` | deuce to seven triple draw |
/// | `k` | deuce to seven single draw |
/// | `l` | ace to five single draw |
/// | `T` | ace to five triple draw |
/// | `b` | badugi |
/// | `3` | three card poker |
/// | `plh` `plo` | pot limit hold'em or omaha |
///
/// # Example
///
/// ```
/// use poker_enum::hand_evaluator::{make_evaluator, CardSet};
/// let holdem = make_evaluator("h").unwrap();
/// let eval = holdem
///     .evaluate_hand(CardSet::from_string("AsAh"), CardSet::from_string("Ad7c2s9h3d"))
///     .unwrap();
/// assert_eq!(eval.high().to_string(), "trips:         A97  ");
/// ```
pub fn make_evaluator(id: &str) -> Result<Box<dyn PokerHandEvaluator>> {
    let chars: Vec<char> = id.chars().collect();
    let first = match chars.first() {
        Some(&c) => c,
        None => return Err(PokerError::UnknownGame(id.to_string())),
    };
    let evaluator: Box<dyn PokerHandEvaluator> = match first {
        'h' | 'H' => Box::new(HoldemHandEvaluator::new()),
        'O' => Box::new(OmahaHighHandEvaluator::new()),
        'o' => Box::new(OmahaEightHandEvaluator::new()),
        's' => Box::new(StudHandEvaluator::new()),
        'e' => Box::new(StudEightHandEvaluator::new()),
        'r' => Box::new(RazzHandEvaluator::new()),
        'd' | 'D' => Box::new(DrawHighHandEvaluator::new()),
        't' => Box::new(DeuceToSevenHandEvaluator::new()),
        'b' => Box::new(BadugiHandEvaluator::new()),
        'k' => Box::new(
            UniversalHandEvaluator::new(1, DRAW_HAND_SIZE, 0, 0, 0, CardSet::evaluate_low_2to7, None)
                .with_draws(1),
        ),
        'l' => Box::new(
            UniversalHandEvaluator::new(1, DRAW_HAND_SIZE, 0, 0, 0, CardSet::evaluate_low_a5, None)
                .with_draws(1),
        ),
        'T' => Box::new(
            UniversalHandEvaluator::new(1, DRAW_HAND_SIZE, 0, 0, 0, CardSet::evaluate_low_a5, None)
                .with_draws(3),
        ),
        '3' => Box::new(UniversalHandEvaluator::new(
            1,
            THREE_CARD_HAND_SIZE,
            0,
            0,
            0,
            CardSet::evaluate_3cp,
            None,
        )),
        'q' => Box::new(UniversalHandEvaluator::new(
            1,
            STUD_HAND_SIZE,
            0,
            0,
            0,
            CardSet::evaluate_high,
            Some(CardSet::evaluate_low_a5),
        )),
        'p' | 'P' => {
            // plh / plo, also accepted without the 'l'
            let game = if chars.len() >= 3 { chars[2] } else { *chars.get(1).unwrap_or(&' ') };
            match game {
                'h' | 'H' => Box::new(HoldemHandEvaluator::new()),
                'o' | 'O' => Box::new(OmahaHighHandEvaluator::new()),
                _ => return Err(PokerError::NoPotLimitGame(id.to_string())),
            }
        }
        _ => return Err(PokerError::UnknownGame(id.to_string())),
    };
    Ok(evaluator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(s: &str) -> CardSet {
        CardSet::from_string(s)
    }

    #[test]
    fn test_make_evaluator() {
        let cases: &[(&str, usize, usize, usize)] = &[
            ("h", 2, 5, 1),
            ("H", 2, 5, 1),
            ("O", 4, 5, 1),
            ("o", 4, 5, 2),
            ("s", 7, 0, 1),
            ("e", 7, 0, 2),
            ("q", 7, 0, 2),
            ("r", 7, 0, 1),
            ("d", 5, 0, 1),
            ("t", 5, 0, 1),
            ("k", 5, 0, 1),
            ("l", 5, 0, 1),
            ("T", 5, 0, 1),
            ("b", 4, 0, 1),
            ("3", 3, 0, 1),
            ("plh", 2, 5, 1),
            ("PLO", 4, 5, 1),
            ("po", 4, 5, 1),
        ];
        for &(id, hand, board, sides) in cases {
            let e = make_evaluator(id).unwrap();
            assert_eq!(e.hand_size(), hand, "{}", id);
            assert_eq!(e.board_size(), board, "{}", id);
            assert_eq!(e.evaluation_size(), sides, "{}", id);
        }
    }

    #[test]
    fn test_unknown_games() {
        assert_eq!(
            make_evaluator("x").unwrap_err(),
            PokerError::UnknownGame("x".to_string())
        );
        assert_eq!(
            make_evaluator("").unwrap_err(),
            PokerError::UnknownGame("".to_string())
        );
        assert_eq!(
            make_evaluator("plz").unwrap_err(),
            PokerError::NoPotLimitGame("plz".to_string())
        );
    }

    #[test]
    fn test_showdown_single_winner() {
        let e = make_evaluator("h").unwrap();
        let hands = [set("AsAh"), set("KsKh")];
        let mut evals = [PokerHandEvaluation::default(); 2];
        let mut results = [EquityResult::default(); 2];
        e.evaluate_showdown(&hands, set("2c7d9hTc3s"), &mut evals, &mut results, 2.0)
            .unwrap();
        assert_eq!(results[0].win_shares, 2.0);
        assert_eq!(results[1].total(), 0.0);
        // accumulates rather than overwriting
        e.evaluate_showdown(&hands, set("KcKd9hTc3s"), &mut evals, &mut results, 1.0)
            .unwrap();
        assert_eq!(results[0].win_shares, 2.0);
        assert_eq!(results[1].win_shares, 1.0);
    }

    #[test]
    fn test_showdown_tie() {
        let e = make_evaluator("h").unwrap();
        let hands = [set("2s3h"), set("2d3c"), set("4d5c")];
        let mut evals = [PokerHandEvaluation::default(); 3];
        let mut results = [EquityResult::default(); 3];
        e.evaluate_showdown(&hands, set("AsKsQsJsTs"), &mut evals, &mut results, 1.0)
            .unwrap();
        for r in results.iter() {
            assert!((r.tie_shares - 1.0 / 3.0).abs() < 1e-12);
            assert_eq!(r.win_shares, 0.0);
        }
    }

    #[test]
    fn test_showdown_split_pot() {
        let e = make_evaluator("o").unwrap();
        let board = set("2c3d8hKsQc");
        // nut low against a set of kings
        let hands = [set("As4h9c9d"), set("KdKh7s6s")];
        let mut evals = [PokerHandEvaluation::default(); 2];
        let mut results = [EquityResult::default(); 2];
        e.evaluate_showdown(&hands, board, &mut evals, &mut results, 1.0)
            .unwrap();
        // low to the first seat, high to the kings
        assert_eq!(results[0].win_shares, 0.5);
        assert_eq!(results[1].win_shares, 0.5);
        // no qualifying low, the high hand scoops
        let board = set("Tc9hJhKsQc");
        let mut results = [EquityResult::default(); 2];
        e.evaluate_showdown(&hands, board, &mut evals, &mut results, 1.0)
            .unwrap();
        assert_eq!(results[0].total() + results[1].total(), 1.0);
    }

    #[test]
    fn test_showdown_conserves_weight() {
        let e = make_evaluator("o").unwrap();
        let board = set("2c3d5hKsQc");
        let hands = [set("As4h9c9d"), set("Ah4d7s6s"), set("KdKhTcJs")];
        let mut evals = [PokerHandEvaluation::default(); 3];
        let mut results = [EquityResult::default(); 3];
        e.evaluate_showdown(&hands, board, &mut evals, &mut results, 3.0)
            .unwrap();
        let total: f64 = results.iter().map(EquityResult::total).sum();
        assert!((total - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_display() {
        let high = set("AsAdKcKh7s").evaluate_high();
        let low = set("5c4d3h2sAc").evaluate_low_a5();
        assert_eq!(PokerHandEvaluation::new(high).to_string(), high.to_string());
        assert_eq!(
            PokerHandEvaluation::with_low(high, low).to_string(),
            format!("{} / {}", high, low)
        );
    }
}
