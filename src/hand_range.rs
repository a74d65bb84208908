/*
 * Weighted hand distributions parsed from text
 *
 * A distribution is an ordered list of candidate hands, each with a weight.
 * The empty hand stands for a seat whose cards are all dealt at random.
 */

use std::collections::HashMap;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::equity_calculator::{choose, Combinations};
use crate::error::{PokerError, Result};
use crate::hand_evaluator::{CardSet, SuitDisplay};

/// Candidate hands for one seat with their weights
#[derive(Debug, Clone, PartialEq)]
pub struct CardDistribution {
    /// candidates in insertion order
    hands: Vec<CardSet>,
    weights: HashMap<CardSet, f64>,
}

impl Default for CardDistribution {
    /// A single empty hand, the random distribution
    fn default() -> Self {
        CardDistribution::from_set(CardSet::empty())
    }
}

impl CardDistribution {
    pub fn new() -> Self {
        CardDistribution::default()
    }

    /// Distribution holding exactly one hand
    pub fn from_set(hand: CardSet) -> Self {
        let mut weights = HashMap::new();
        weights.insert(hand, 1.0);
        CardDistribution {
            hands: vec![hand],
            weights,
        }
    }

    /// Parse one distribution per string
    ///
    /// # Example
    ///
    /// ```
    /// use poker_enum::hand_range::CardDistribution;
    /// let dists = CardDistribution::from_strings(&["AsAh", "KsKh,QsQh=0.5"]).unwrap();
    /// assert_eq!(dists[1].len(), 2);
    /// ```
    pub fn from_strings(texts: &[&str]) -> Result<Vec<Self>> {
        texts.iter().map(|t| t.parse()).collect()
    }

    pub fn clear(&mut self) {
        self.hands.clear();
        self.weights.clear();
    }

    /// Replace the contents with a parsed distribution
    ///
    /// The grammar is `hand(=weight)?(,hand(=weight)?)*` where a hand is a run of two
    /// character card codes, or `.` (also `random`) for a random hand. The distribution
    /// is left empty when the text does not parse.
    pub fn parse(&mut self, text: &str) -> Result<()> {
        self.clear();
        let parsed = self.parse_hands(text.trim());
        if parsed.is_err() {
            self.clear();
        }
        parsed
    }

    fn parse_hands(&mut self, text: &str) -> Result<()> {
        if text == "." || text.eq_ignore_ascii_case("random") {
            self.add(CardSet::empty(), 1.0);
            return Ok(());
        }
        for item in text.split(',') {
            let item = item.trim();
            let (hand_text, weight) = match item.rfind('=') {
                Some(pos) => (&item[..pos], parse_weight(&item[pos + 1..])?),
                None => (item, 1.0),
            };
            let hand: CardSet = hand_text.trim().parse()?;
            if hand.is_empty() {
                return Err(PokerError::EmptyHand);
            }
            self.add(hand, weight);
        }
        Ok(())
    }

    fn add(&mut self, hand: CardSet, weight: f64) {
        if self.weights.insert(hand, weight).is_none() {
            self.hands.push(hand);
        }
    }

    /// Every `n` card hand from a full deck, equally weighted
    pub fn fill(&mut self, n: usize) {
        self.fill_from(CardSet::full(), n);
    }

    /// Every `n` card subset of `pool`, equally weighted
    ///
    /// Leaves the distribution empty when `n` exceeds the pool.
    pub fn fill_from(&mut self, pool: CardSet, n: usize) {
        self.clear();
        let cards = pool.card_sets();
        if n > cards.len() {
            return;
        }
        self.hands.reserve(choose(cards.len(), n) as usize);
        let mut combos = Combinations::new(cards.len(), n);
        loop {
            let hand = combos
                .indices()
                .iter()
                .fold(CardSet::empty(), |acc, &i| acc | cards[i]);
            self.add(hand, 1.0);
            if !combos.next() {
                break;
            }
        }
    }

    /// Zero the weight of every hand that shares a card with `dead`
    pub fn remove_cards(&mut self, dead: CardSet) {
        for hand in self.hands.iter().filter(|h| h.intersects(dead)) {
            self.weights.insert(*hand, 0.0);
        }
    }

    /// Sum of all weights
    pub fn weight(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Weight of `hand`, 0 when it is not a candidate
    pub fn weight_of(&self, hand: CardSet) -> f64 {
        self.weights.get(&hand).copied().unwrap_or(0.0)
    }

    /// Set the weight of `hand`, adding it as a candidate if needed
    pub fn set_weight(&mut self, hand: CardSet, weight: f64) {
        self.add(hand, weight);
    }

    pub fn len(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<CardSet> {
        self.hands.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CardSet, f64)> + '_ {
        self.hands.iter().map(move |&h| (h, self.weight_of(h)))
    }

    /// Candidates without weights, joined by commas, `.` for the random hand
    pub fn hands_string_with(&self, style: SuitDisplay) -> String {
        self.hands
            .iter()
            .map(|h| {
                if h.is_empty() {
                    ".".to_string()
                } else {
                    h.to_string_with(style)
                }
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn parse_weight(text: &str) -> Result<f64> {
    match text.trim().parse::<f64>() {
        Ok(w) if w.is_finite() && w >= 0.0 => Ok(w),
        _ => Err(PokerError::InvalidWeight(text.to_string())),
    }
}

impl Index<usize> for CardDistribution {
    type Output = CardSet;

    fn index(&self, index: usize) -> &CardSet {
        &self.hands[index]
    }
}

impl FromStr for CardDistribution {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self> {
        let mut dist = CardDistribution::new();
        dist.parse(s)?;
        Ok(dist)
    }
}

impl fmt::Display for CardDistribution {
    /// Candidates as `hand=weight` joined by commas
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (hand, weight)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}={:.3}", hand, weight)?;
        }
        Ok(())
    }
}
