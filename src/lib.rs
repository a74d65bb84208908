/// # Poker Enum
/// Exact poker hand evaluation and showdown equity by enumeration
///
/// Currently supports
///  - hold'em, omaha, stud, razz, draw, lowball, badugi and three card poker evaluation
///  - exhaustive range vs range equity for any of these games
///
/// ## Equity Calculator
///
/// ```
/// use poker_enum::equity_calculator::{normalize, ShowdownEnumerator};
/// use poker_enum::hand_evaluator::{make_evaluator, CardSet};
/// use poker_enum::hand_range::CardDistribution;
/// let dists = CardDistribution::from_strings(&["AsAh", "KsKh,QsQh"]).unwrap();
/// let board = CardSet::from_string("2c7d9hTc");
/// let evaluator = make_evaluator("h").unwrap();
/// let results = ShowdownEnumerator::new()
///     .threads(2)
///     .calculate_equity(&dists, board, evaluator.as_ref())
///     .unwrap();
/// let equities = normalize(&results);
/// ```
///
/// ## Hand Evaluator
///
/// ```
/// use poker_enum::hand_evaluator::{CardSet, HandCategory};
/// let hand = CardSet::from_string("AsAdKcKh7s");
/// let score = hand.evaluate_high();
/// assert_eq!(score.category(), HandCategory::TwoPair);
/// ```

#[macro_use]
extern crate lazy_static;

pub mod constants;
pub mod error;
pub mod hand_evaluator;
pub mod hand_range;

pub mod equity_calculator;

pub use error::{PokerError, Result};
