use std::sync::Mutex;

use log::{debug, trace};

use super::deck::SimpleDeck;
use super::odometer::Odometer;
use super::partition::PartitionEnumerator;
use super::results::EquityResult;
use crate::error::{PokerError, Result};
use crate::hand_evaluator::{CardSet, PokerHandEvaluation, PokerHandEvaluator};
use crate::hand_range::CardDistribution;

const MIN_PLAYERS: usize = 2;
const DEFAULT_BATCH_SIZE: u64 = 64;

/// Exhaustive showdown equity
///
/// Every combination of one candidate hand per seat is completed in every way the
/// remaining deck allows and scored by the evaluator.
///
/// # Example
///
/// ```
/// use poker_enum::equity_calculator::ShowdownEnumerator;
/// use poker_enum::hand_evaluator::{make_evaluator, CardSet};
/// use poker_enum::hand_range::CardDistribution;
///
/// let dists = CardDistribution::from_strings(&["AsAh", "KsKh"]).unwrap();
/// let board = CardSet::from_string("2c7d9hTc");
/// let evaluator = make_evaluator("h").unwrap();
/// let results = ShowdownEnumerator::new()
///     .calculate_equity(&dists, board, evaluator.as_ref())
///     .unwrap();
/// assert_eq!(results[0].win_shares, 42.0);
/// ```
#[derive(Debug, Clone)]
pub struct ShowdownEnumerator {
    dead_cards: CardSet,
    threads: usize,
    batch_size: u64,
}

impl Default for ShowdownEnumerator {
    fn default() -> Self {
        ShowdownEnumerator::new()
    }
}

impl ShowdownEnumerator {
    pub fn new() -> Self {
        ShowdownEnumerator {
            dead_cards: CardSet::empty(),
            threads: 1,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Cards known to be out of play
    pub fn dead_cards(mut self, dead: CardSet) -> Self {
        self.dead_cards = dead;
        self
    }

    /// Worker threads, 0 and 1 both run on the calling thread
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Candidate combinations each worker reserves at a time
    pub fn batch_size(mut self, batch_size: u64) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Pot shares of every seat summed over all deals
    ///
    /// Each deal counts with the product of the chosen candidates' weights, so the
    /// shares of all seats add up to the total enumerated weight. Combinations where
    /// candidates, board or dead cards overlap are skipped.
    ///
    /// # Arguments
    ///
    /// * `dists` one distribution per seat, in seat order
    /// * `board` known board cards, completed to the game's board size
    /// * `evaluator` the game
    pub fn calculate_equity(
        &self,
        dists: &[CardDistribution],
        board: CardSet,
        evaluator: &dyn PokerHandEvaluator,
    ) -> Result<Vec<EquityResult>> {
        if dists.len() < MIN_PLAYERS {
            return Err(PokerError::TooFewPlayers);
        }
        let hand_size = evaluator.hand_size();
        let board_size = evaluator.board_size();
        for (seat, dist) in dists.iter().enumerate() {
            if dist.is_empty() {
                return Err(PokerError::EmptyDistribution(seat));
            }
            if let Some((hand, _)) = dist.iter().find(|(h, _)| h.size() > hand_size) {
                return Err(PokerError::InvalidHandSize {
                    size: hand.size(),
                    min: 0,
                    max: hand_size,
                });
            }
        }
        if board.size() > board_size {
            return Err(PokerError::InvalidBoardSize {
                size: board.size(),
                min: 0,
                max: board_size,
            });
        }

        let pruned: Vec<CardDistribution>;
        let dists = if self.dead_cards.is_empty() {
            dists
        } else {
            pruned = dists
                .iter()
                .map(|d| {
                    let mut d = d.clone();
                    d.remove_cards(self.dead_cards);
                    d
                })
                .collect();
            &pruned[..]
        };
        if board.intersects(self.dead_cards) {
            debug!("board {} conflicts with dead cards {}", board, self.dead_cards);
            return Ok(vec![EquityResult::default(); dists.len()]);
        }

        let job = Enumeration {
            dists,
            board,
            dead: self.dead_cards,
            evaluator,
            radices: dists.iter().map(CardDistribution::len).collect(),
        };
        let positions = Odometer::new(job.radices.clone()).size();
        debug!(
            "{} seats, board [{}], {} candidate combinations on {} threads",
            dists.len(),
            board,
            positions,
            self.threads.max(1)
        );
        let tally = if self.threads <= 1 {
            job.run_all()?
        } else {
            self.run_parallel(&job, positions)?
        };
        debug!(
            "visited {} combinations, skipped {}, scored {} deals",
            positions, tally.skipped, tally.deals
        );
        Ok(tally.results)
    }

    fn run_parallel(&self, job: &Enumeration<'_>, positions: u64) -> Result<Tally> {
        let cursor = Cursor {
            position: Mutex::new(0),
            end: positions,
            batch_size: self.batch_size,
        };
        let cursor = &cursor;
        let partials = crossbeam::scope(|scope| {
            let handles: Vec<_> = (0..self.threads)
                .map(|_| scope.spawn(move |_| job.run_batches(cursor)))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().map_err(|_| PokerError::WorkerPanicked)?)
                .collect::<Result<Vec<_>>>()
        })
        .map_err(|_| PokerError::WorkerPanicked)??;

        let mut tally = Tally::new(job.dists.len());
        for partial in partials {
            tally.merge(partial);
        }
        Ok(tally)
    }
}

/// Accumulated shares of one worker
struct Tally {
    results: Vec<EquityResult>,
    skipped: u64,
    deals: u64,
}

impl Tally {
    fn new(seats: usize) -> Tally {
        Tally {
            results: vec![EquityResult::default(); seats],
            skipped: 0,
            deals: 0,
        }
    }

    fn merge(&mut self, other: Tally) {
        for (total, r) in self.results.iter_mut().zip(other.results) {
            *total += r;
        }
        self.skipped += other.skipped;
        self.deals += other.deals;
    }
}

/// Shared position of the outer enumeration
struct Cursor {
    position: Mutex<u64>,
    end: u64,
    batch_size: u64,
}

impl Cursor {
    fn reserve_batch(&self) -> Result<(u64, u64)> {
        let mut position = self
            .position
            .lock()
            .map_err(|_| PokerError::WorkerPanicked)?;
        let start = *position;
        let end = std::cmp::min(self.end, start + self.batch_size);
        *position = end;
        Ok((start, end))
    }
}

/// One equity calculation, read-only and shared by all workers
struct Enumeration<'a> {
    dists: &'a [CardDistribution],
    board: CardSet,
    dead: CardSet,
    evaluator: &'a dyn PokerHandEvaluator,
    radices: Vec<usize>,
}

/// Buffers reused across candidate combinations
struct Scratch {
    deck: SimpleDeck,
    fixed: Vec<CardSet>,
    hands: Vec<CardSet>,
    parts: Vec<usize>,
    evals: Vec<PokerHandEvaluation>,
    tally: Tally,
}

impl<'a> Enumeration<'a> {
    fn has_board(&self) -> bool {
        self.evaluator.board_size() > 0
    }

    fn scratch(&self) -> Scratch {
        let seats = self.dists.len();
        let slots = seats + usize::from(self.has_board());
        Scratch {
            deck: SimpleDeck::new(),
            fixed: vec![CardSet::empty(); slots],
            hands: vec![CardSet::empty(); slots],
            parts: vec![0; slots],
            evals: vec![PokerHandEvaluation::default(); seats],
            tally: Tally::new(seats),
        }
    }

    fn run_all(&self) -> Result<Tally> {
        let mut scratch = self.scratch();
        let mut odometer = Odometer::new(self.radices.clone());
        loop {
            self.visit(odometer.digits(), &mut scratch)?;
            if !odometer.next() {
                break;
            }
        }
        Ok(scratch.tally)
    }

    fn run_batches(&self, cursor: &Cursor) -> Result<Tally> {
        let mut scratch = self.scratch();
        loop {
            let (start, end) = cursor.reserve_batch()?;
            if start >= end {
                break;
            }
            trace!("batch [{}, {})", start, end);
            let mut odometer = Odometer::at(self.radices.clone(), start);
            for _ in start..end {
                self.visit(odometer.digits(), &mut scratch)?;
                odometer.next();
            }
        }
        Ok(scratch.tally)
    }

    /// Score every completion of one choice of candidate per seat
    fn visit(&self, digits: &[usize], scratch: &mut Scratch) -> Result<()> {
        let seats = self.dists.len();
        let hand_size = self.evaluator.hand_size();
        let mut used = self.board | self.dead;
        let mut weight = 1.0;
        for (seat, &d) in digits.iter().enumerate() {
            let hand = self.dists[seat][d];
            if hand.intersects(used) {
                trace!("skipping {:?}, seat {} overlaps", digits, seat);
                scratch.tally.skipped += 1;
                return Ok(());
            }
            used |= hand;
            weight *= self.dists[seat].weight_of(hand);
            scratch.fixed[seat] = hand;
            scratch.parts[seat] = hand_size - hand.size();
        }
        if weight == 0.0 {
            trace!("skipping {:?}, zero weight", digits);
            scratch.tally.skipped += 1;
            return Ok(());
        }
        if self.has_board() {
            scratch.fixed[seats] = self.board;
            scratch.parts[seats] = self.evaluator.board_size() - self.board.size();
        }

        scratch.deck.reset();
        scratch.deck.remove(used);
        let mut pe = PartitionEnumerator::new(scratch.deck.size(), &scratch.parts)?;
        loop {
            for (slot, hand) in scratch.hands.iter_mut().enumerate() {
                *hand = scratch.fixed[slot] | scratch.deck.peek(pe.partition_mask(slot));
            }
            let board = if self.has_board() {
                scratch.hands[seats]
            } else {
                self.board
            };
            self.evaluator.evaluate_showdown(
                &scratch.hands,
                board,
                &mut scratch.evals,
                &mut scratch.tally.results,
                weight,
            )?;
            scratch.tally.deals += 1;
            if !pe.next() {
                break;
            }
        }
        Ok(())
    }
}
