//! Per-segment decoding DP.
//!
//! Counts grow exponentially with segment length and multiply across
//! segments, so they are kept as [`BigUint`] and serialized as decimal strings.

use super::table::{SymbolTable, TableMode};
use super::trie::Trie;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

/// Decoding count for one whitespace-free segment
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SegmentCount {
    pub segment: String,
    #[serde(with = "decimal")]
    pub count: BigUint,
}

/// Decoding count for a whole message
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Decoding {
    pub mode: TableMode,
    /// Product of the segment counts; 1 for a message with no segments
    #[serde(with = "decimal")]
    pub total: BigUint,
    pub segments: Vec<SegmentCount>,
}

/// A symbol table paired with the trie built from its codes
#[derive(Clone, Debug)]
pub struct Decoder {
    table: SymbolTable,
    trie: Trie,
}

impl Decoder {
    /// Decoder over the built-in table for `mode`
    pub fn new(mode: TableMode) -> Self {
        Self::from_table(SymbolTable::for_mode(mode))
    }

    pub fn from_table(table: SymbolTable) -> Self {
        let trie: Trie = table.codes().into_iter().collect();
        tracing::debug!(
            "Built trie with {} codes for {} symbols ({})",
            trie.len(),
            table.len(),
            table.mode()
        );
        Self { table, trie }
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Number of ways `segment` splits into codes of the table
    ///
    /// `dp[j]` holds the number of decodings of the first `j` characters.
    /// A character no code can start from leaves the rest of the table at 0.
    pub fn count_segment(&self, segment: &str) -> BigUint {
        let chars: Vec<char> = segment.chars().collect();
        let n = chars.len();
        let mut dp = vec![BigUint::zero(); n + 1];
        dp[0] = BigUint::one();

        for i in 0..n {
            if dp[i].is_zero() {
                continue;
            }
            let ways = dp[i].clone();

            for len in self.trie.prefix_matches(&chars[i..]) {
                dp[i + len] += &ways;
            }
        }

        std::mem::take(&mut dp[n])
    }

    /// Count decodings of every segment and multiply them together
    pub fn count(&self, message: &str) -> Decoding {
        let mut total = BigUint::one();
        let mut segments = Vec::new();

        for segment in message.split_whitespace() {
            let count = self.count_segment(segment);
            tracing::debug!("segment='{}' -> {} ways", segment, count);

            total *= &count;
            segments.push(SegmentCount {
                segment: segment.to_string(),
                count,
            });
        }

        Decoding {
            mode: self.table.mode(),
            total,
            segments,
        }
    }
}

/// Count decodings of `message` under the built-in table for `mode`
pub fn count_decodings(message: &str, mode: TableMode) -> Decoding {
    Decoder::new(mode).count(message)
}

/// Serde adapter writing a `BigUint` as a decimal string
mod decimal {
    use num_bigint::BigUint;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}
