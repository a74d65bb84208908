/// Walks the k element subsets of `0..n` in lexicographic order
///
/// The subset of size 0 is visited exactly once.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    k: usize,
    comb: Vec<usize>,
    did_null: bool,
}

impl Combinations {
    /// Start at the first subset `[0, 1, .., k - 1]`
    ///
    /// `k` must not exceed `n`.
    pub fn new(n: usize, k: usize) -> Combinations {
        debug_assert!(k <= n, "cannot choose {} of {}", k, n);
        Combinations {
            n,
            k,
            comb: (0..k).collect(),
            did_null: true,
        }
    }

    pub fn reset(&mut self) {
        for (i, c) in self.comb.iter_mut().enumerate() {
            *c = i;
        }
        self.did_null = true;
    }

    /// Indices of the current subset, ascending
    pub fn indices(&self) -> &[usize] {
        &self.comb
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Advance to the next subset, false once exhausted
    pub fn next(&mut self) -> bool {
        if self.k == 0 {
            self.did_null = !self.did_null;
            return self.did_null;
        }
        let mut i = self.k;
        while i > 0 {
            i -= 1;
            if self.comb[i] < self.n - self.k + i {
                self.comb[i] += 1;
                for j in i + 1..self.k {
                    self.comb[j] = self.comb[j - 1] + 1;
                }
                return true;
            }
        }
        false
    }

    /// Bit mask of the current indices, valid for n <= 64
    pub fn mask(&self) -> u64 {
        self.comb.iter().fold(0u64, |m, &i| m | 1u64 << i)
    }
}

/// Binomial coefficient
pub fn choose(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut r = 1u64;
    for i in 0..k {
        r = r * (n - i) as u64 / (i + 1) as u64;
    }
    r
}
