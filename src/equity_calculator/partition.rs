use std::fmt;

use super::combinations::Combinations;
use crate::error::PokerError;

/// Enumerates every split of `0..set_size` into disjoint ordered blocks of fixed sizes
///
/// Block `i` draws a combination from what blocks `0..i` left behind. Each block keeps a
/// mask of its picks as indices into the full set, rebuilt only when that block moves.
#[derive(Debug, Clone)]
pub struct PartitionEnumerator {
    set_size: usize,
    parts: Vec<usize>,
    combos: Vec<Combinations>,
    /// residual indices each block draws from
    subsets: Vec<Vec<usize>>,
    masks: Vec<u64>,
}

impl PartitionEnumerator {
    pub fn new(set_size: usize, parts: &[usize]) -> Result<PartitionEnumerator, PokerError> {
        let needed: usize = parts.iter().sum();
        if needed > set_size || set_size > 64 {
            return Err(PokerError::TooManyCards {
                needed,
                available: set_size.min(64),
            });
        }
        let mut remaining = set_size;
        let mut combos = Vec::with_capacity(parts.len());
        let mut subsets = Vec::with_capacity(parts.len());
        for &p in parts {
            combos.push(Combinations::new(remaining, p));
            subsets.push(Vec::with_capacity(remaining));
            remaining -= p;
        }
        let mut pe = PartitionEnumerator {
            set_size,
            parts: parts.to_vec(),
            combos,
            subsets,
            masks: vec![0; parts.len()],
        };
        if !pe.subsets.is_empty() {
            pe.subsets[0].extend(0..set_size);
        }
        pe.setup(0);
        Ok(pe)
    }

    pub fn num_partitions(&self) -> usize {
        self.parts.len()
    }

    pub fn set_size(&self) -> usize {
        self.set_size
    }

    /// Index mask of every block
    pub fn masks(&self) -> &[u64] {
        &self.masks
    }

    pub fn partition_mask(&self, i: usize) -> u64 {
        self.masks[i]
    }

    /// Advance the last block, backing up to earlier blocks as later ones run out
    pub fn next(&mut self) -> bool {
        let mut n = self.parts.len();
        while n > 0 {
            n -= 1;
            if self.combos[n].next() {
                self.make_mask(n);
                self.setup(n + 1);
                return true;
            }
        }
        false
    }

    /// Rebuild residuals, cursors and masks of blocks `from..`
    fn setup(&mut self, from: usize) {
        for i in from..self.parts.len() {
            if i > 0 {
                let (done, rest) = self.subsets.split_at_mut(i);
                residual(&done[i - 1], self.combos[i - 1].indices(), &mut rest[0]);
            }
            self.combos[i].reset();
            self.make_mask(i);
        }
    }

    #[inline]
    fn make_mask(&mut self, i: usize) {
        let subset = &self.subsets[i];
        self.masks[i] = self.combos[i]
            .indices()
            .iter()
            .fold(0u64, |m, &j| m | 1u64 << subset[j]);
    }
}

/// `out = from` minus the elements at `picked` positions (ascending)
fn residual(from: &[usize], picked: &[usize], out: &mut Vec<usize>) {
    out.clear();
    let mut p = picked.iter().peekable();
    for (pos, &v) in from.iter().enumerate() {
        if p.peek() == Some(&&pos) {
            p.next();
        } else {
            out.push(v);
        }
    }
}

impl fmt::Display for PartitionEnumerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let blocks: Vec<String> = self
            .masks
            .iter()
            .map(|&m| {
                let idx: Vec<String> = (0..64)
                    .filter(|b| m & (1u64 << b) != 0)
                    .map(|b| b.to_string())
                    .collect();
                format!("[{}]", idx.join(" "))
            })
            .collect();
        write!(f, "{}", blocks.join(" "))
    }
}
