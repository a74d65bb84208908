use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::CARD_COUNT;
use crate::error::PokerError;
use crate::hand_evaluator::{CardSet, CARDS};

const DECK_SIZE: usize = CARD_COUNT as usize;

/// The 52 singleton cards with a live prefix `[0, current)` and a dead tail
#[derive(Debug, Clone)]
pub struct SimpleDeck {
    cards: [CardSet; DECK_SIZE],
    current: usize,
}

impl Default for SimpleDeck {
    fn default() -> Self {
        SimpleDeck::new()
    }
}

impl SimpleDeck {
    pub fn new() -> SimpleDeck {
        SimpleDeck {
            cards: *CARDS,
            current: DECK_SIZE,
        }
    }

    /// Make every card live again, in the original order
    pub fn reset(&mut self) {
        self.cards = *CARDS;
        self.current = DECK_SIZE;
    }

    /// Number of live cards
    pub fn size(&self) -> usize {
        self.current
    }

    /// Union of the dead tail
    pub fn dead(&self) -> CardSet {
        self.cards[self.current..]
            .iter()
            .fold(CardSet::empty(), |acc, &c| acc | c)
    }

    /// Move `cards` to the dead tail, keeping the relative order of live and dead cards
    pub fn remove(&mut self, cards: CardSet) {
        let dead = cards | self.dead();
        let mut sorted = [CardSet::empty(); DECK_SIZE];
        let mut live = 0;
        let mut tail = DECK_SIZE - dead.size();
        self.current = tail;
        for &c in self.cards.iter() {
            if dead.contains_set(c) {
                sorted[tail] = c;
                tail += 1;
            } else {
                sorted[live] = c;
                live += 1;
            }
        }
        self.cards = sorted;
    }

    /// Take the top `n` live cards
    pub fn deal(&mut self, n: usize) -> Result<CardSet, PokerError> {
        if n > self.current {
            return Err(PokerError::TooManyCards {
                needed: n,
                available: self.current,
            });
        }
        let start = self.current - n;
        let hand = self.cards[start..self.current]
            .iter()
            .fold(CardSet::empty(), |acc, &c| acc | c);
        self.current = start;
        Ok(hand)
    }

    /// Union of the live cards whose positions are set in `mask`
    #[inline]
    pub fn peek(&self, mask: u64) -> CardSet {
        let mut hand = CardSet::empty();
        let mut low = mask as u32;
        let mut high = (mask >> 32) as u32;
        while low != 0 {
            hand |= self.cards[low.trailing_zeros() as usize];
            low &= low - 1;
        }
        while high != 0 {
            hand |= self.cards[32 + high.trailing_zeros() as usize];
            high &= high - 1;
        }
        hand
    }

    /// Shuffle the live cards
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards[..self.current].shuffle(rng);
    }
}

impl fmt::Display for SimpleDeck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.cards[..self.current] {
            write!(f, "{}", c)?;
        }
        write!(f, "/")?;
        for c in &self.cards[self.current..] {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
