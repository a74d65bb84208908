use thiserror::Error;

/// Errors raised while parsing cards, building evaluators or enumerating showdowns
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PokerError {
    #[error("invalid card text: {0:?}")]
    InvalidCard(String),
    #[error("duplicate card in {0:?}")]
    DuplicateCard(String),
    #[error("invalid weight in {0:?}")]
    InvalidWeight(String),
    #[error("empty hand")]
    EmptyHand,
    #[error("no evaluator for poker type {0:?}")]
    UnknownGame(String),
    #[error("no compatible pot limit game available for {0:?}")]
    NoPotLimitGame(String),
    #[error("hand size {size} outside [{min}, {max}]")]
    InvalidHandSize { size: usize, min: usize, max: usize },
    #[error("board size {size} outside [{min}, {max}]")]
    InvalidBoardSize { size: usize, min: usize, max: usize },
    #[error("seat {0} has no candidate hands")]
    EmptyDistribution(usize),
    #[error("need {needed} cards but only {available} remain")]
    TooManyCards { needed: usize, available: usize },
    #[error("too few players")]
    TooFewPlayers,
    #[error("operation not supported: {0}")]
    Unsupported(&'static str),
    #[error("enumeration worker panicked")]
    WorkerPanicked,
}

pub type Result<T> = std::result::Result<T, PokerError>;
