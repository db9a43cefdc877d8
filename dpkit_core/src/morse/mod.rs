//! Counting the decodings of a Morse message.
//!
//! Whitespace in the message marks a mandatory break between segments; inside
//! a segment the letter boundaries are unknown. Each segment is counted with a
//! forward DP over a [`Trie`] of the active [`SymbolTable`] and the total is
//! the product of the segment counts.

pub mod decoder;
pub mod table;
pub mod trie;

pub use decoder::{count_decodings, Decoder, Decoding, SegmentCount};
pub use table::{SymbolTable, TableMode};
pub use trie::Trie;
