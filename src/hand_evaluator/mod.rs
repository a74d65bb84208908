mod card;
mod card_set;
mod evaluation;
mod evaluator;
mod rules;
mod universal;
mod variants;

pub use card::{Card, Rank, Suit, SuitDisplay};
pub use card_set::{CardProjection, CardSet, CARDS};
pub use evaluation::{top_bits, HandCategory, PokerEvaluation};
pub use evaluator::{make_evaluator, PokerHandEvaluation, PokerHandEvaluator};
pub use universal::{EvalRule, UniversalHandEvaluator};
pub use variants::{
    BadugiHandEvaluator, DeuceToSevenHandEvaluator, DrawHighHandEvaluator, HoldemHandEvaluator,
    OmahaEightHandEvaluator, OmahaHighHandEvaluator, RazzHandEvaluator, StudEightHandEvaluator,
    StudHandEvaluator,
};
