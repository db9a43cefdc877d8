//! Minimum-move reduction of an integer to a terminal state.
//!
//! A value is terminal when it is `<= 1` or a multiple of 7. Every other value
//! may be decremented, halved (when even) or divided by three (when divisible
//! by three). The minimum move count is computed three ways which must always
//! agree:
//!
//! - [`min_ops_naive`]: plain recursion, used as the reference
//! - [`min_ops_memo`]: top-down recursion with a per-call [`Memo`]
//! - [`min_ops_table`]: bottom-up tabulation over `0..=n`
//!
//! [`optimal_path`] reuses the tabulation and records the winning move at each
//! index so the sequence of moves can be replayed from `n` downward.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Returns true if `n` needs no further moves
pub fn is_terminal(n: u64) -> bool {
    n <= 1 || n % 7 == 0
}

/// A single reduction move
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Move {
    #[serde(rename = "-1")]
    Decrement,
    #[serde(rename = "/2")]
    Halve,
    #[serde(rename = "/3")]
    Third,
}

impl Move {
    /// All moves in tie-break order: on equal cost the earlier move wins.
    pub const ALL: [Move; 3] = [Move::Decrement, Move::Halve, Move::Third];

    /// Short label used on the command line
    pub fn label(self) -> &'static str {
        match self {
            Move::Decrement => "-1",
            Move::Halve => "/2",
            Move::Third => "/3",
        }
    }

    /// Apply the move to `n`, or `None` if it is not allowed there
    pub fn apply(self, n: u64) -> Option<u64> {
        match self {
            Move::Decrement => n.checked_sub(1),
            Move::Halve => (n % 2 == 0).then_some(n / 2),
            Move::Third => (n % 3 == 0).then_some(n / 3),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Evaluation strategy for the move count
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Naive,
    Memoized,
    Tabulated,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Naive, Strategy::Memoized, Strategy::Tabulated];
}

/// Compute the minimum move count for `n` with the given strategy
pub fn solve(strategy: Strategy, n: u64) -> u64 {
    match strategy {
        Strategy::Naive => min_ops_naive(n),
        Strategy::Memoized => min_ops_memo(n),
        Strategy::Tabulated => min_ops_table(n),
    }
}

/// Minimum move count for `n`; the tabulated strategy.
pub fn min_ops(n: u64) -> u64 {
    min_ops_table(n)
}

/// Largest input accepted by [`non_negative`]
///
/// The tabulation allocates `n + 1` entries per table and the naive recursion
/// is unbounded, so larger inputs are refused up front.
pub const MAX_N: u64 = 10_000_000;

/// Reject negative or oversized input before it reaches the solvers
pub fn non_negative(n: i64) -> Result<u64> {
    let n = u64::try_from(n).map_err(|_| {
        Error::InvalidInput(format!("expected a non-negative integer, got {}", n))
    })?;

    if n > MAX_N {
        return Err(Error::InvalidInput(format!(
            "{} is larger than the supported maximum of {}",
            n, MAX_N
        )));
    }

    Ok(n)
}

/// Unmemoized recursion. Exponential in the worst case.
pub fn min_ops_naive(n: u64) -> u64 {
    if is_terminal(n) {
        return 0;
    }

    let best = Move::ALL
        .iter()
        .filter_map(|m| m.apply(n))
        .map(min_ops_naive)
        .min()
        .unwrap_or(0);

    1 + best
}

/// Cache for top-down recursion
///
/// A fresh `Memo` is built for every [`min_ops_memo`] call. Callers that want
/// to answer several queries from one cache can hold a `Memo` themselves.
#[derive(Debug, Default)]
pub struct Memo {
    cache: HashMap<u64, u64>,
}

impl Memo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum move count for `n`, filling the cache as it goes
    pub fn min_ops(&mut self, n: u64) -> u64 {
        if let Some(&cached) = self.cache.get(&n) {
            return cached;
        }

        let result = if is_terminal(n) {
            0
        } else {
            let mut best = u64::MAX;
            for target in Move::ALL.iter().filter_map(|m| m.apply(n)) {
                best = best.min(self.min_ops(target));
            }
            1 + best
        };

        self.cache.insert(n, result);
        result
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

/// Memoized recursion with a cache local to this call
pub fn min_ops_memo(n: u64) -> u64 {
    Memo::new().min_ops(n)
}

/// Bottom-up DP table: cost and winning move per index
struct Table {
    dp: Vec<u64>,
    prev: Vec<Option<Move>>,
}

impl Table {
    fn build(n: u64) -> Self {
        let len = n as usize + 1;
        let mut dp = vec![0u64; len];
        let mut prev: Vec<Option<Move>> = vec![None; len];

        for i in 2..=n {
            if is_terminal(i) {
                continue;
            }

            let mut best: Option<(u64, Move)> = None;
            for m in Move::ALL {
                let Some(target) = m.apply(i) else { continue };
                let cost = dp[target as usize] + 1;
                if best.map_or(true, |(c, _)| cost < c) {
                    best = Some((cost, m));
                }
            }

            if let Some((cost, m)) = best {
                dp[i as usize] = cost;
                prev[i as usize] = Some(m);
            }
        }

        tracing::debug!("Filled reduction table with {} entries", len);
        Self { dp, prev }
    }
}

/// Bottom-up tabulation filling `dp[0..=n]` in increasing order
pub fn min_ops_table(n: u64) -> u64 {
    Table::build(n).dp[n as usize]
}

/// Moves of one optimal reduction, in the order taken from `n` downward
///
/// Empty when `n` is already terminal.
pub fn optimal_path(n: u64) -> Vec<Move> {
    let table = Table::build(n);
    let mut path = Vec::new();
    let mut current = n;

    while let Some(m) = table.prev[current as usize] {
        match m.apply(current) {
            Some(next) => {
                path.push(m);
                current = next;
            }
            None => break,
        }
    }

    path
}

/// Apply `moves` to `n` in order, returning the final value
///
/// Returns `None` if a move is not allowed at the value it is applied to.
pub fn replay(n: u64, moves: &[Move]) -> Option<u64> {
    moves.iter().try_fold(n, |value, m| m.apply(value))
}

/// Result of running every strategy on one input
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reduction {
    pub n: u64,
    pub naive: u64,
    pub memoized: u64,
    pub tabulated: u64,
    pub path: Vec<Move>,
}

impl Reduction {
    /// Path labels joined with single spaces
    pub fn path_labels(&self) -> String {
        self.path
            .iter()
            .map(|m| m.label())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Run all three strategies and the path reconstruction for `n`
pub fn reduce(n: u64) -> Reduction {
    let reduction = Reduction {
        n,
        naive: solve(Strategy::Naive, n),
        memoized: solve(Strategy::Memoized, n),
        tabulated: solve(Strategy::Tabulated, n),
        path: optimal_path(n),
    };

    if reduction.naive != reduction.memoized || reduction.memoized != reduction.tabulated {
        tracing::warn!(
            "Strategies disagree for n={}: naive={} memoized={} tabulated={}",
            n,
            reduction.naive,
            reduction.memoized,
            reduction.tabulated
        );
    }

    reduction
}
