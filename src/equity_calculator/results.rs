use std::fmt;
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// Shares of the pot won by one seat, summed over every enumerated deal
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EquityResult {
    pub win_shares: f64,
    pub tie_shares: f64,
    /// reserved for the first moment of the equity distribution
    pub equity: f64,
    /// reserved for the second moment of the equity distribution
    pub equity2: f64,
}

impl EquityResult {
    /// Total pot share, wins plus split pots
    pub fn total(&self) -> f64 {
        self.win_shares + self.tie_shares
    }
}

impl AddAssign for EquityResult {
    fn add_assign(&mut self, rhs: EquityResult) {
        self.win_shares += rhs.win_shares;
        self.tie_shares += rhs.tie_shares;
        self.equity += rhs.equity;
        self.equity2 += rhs.equity2;
    }
}

impl fmt::Display for EquityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.win_shares, self.tie_shares, self.equity, self.equity2
        )
    }
}

/// Each seat's fraction of the total pot shares
pub fn normalize(results: &[EquityResult]) -> Vec<f64> {
    let total: f64 = results.iter().map(EquityResult::total).sum();
    results
        .iter()
        .map(|r| if total > 0.0 { r.total() / total } else { 0.0 })
        .collect()
}
