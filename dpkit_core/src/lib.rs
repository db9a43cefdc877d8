#![forbid(unsafe_code)]

//! Core algorithms for the dpkit tools.
//!
//! This crate provides:
//! - Integer reduction solver (minimum moves to 1 or a multiple of 7)
//! - Morse decoding counter (symbol tables, trie, per-segment DP)
//! - Configuration, logging and error plumbing shared by the binaries

pub mod error;
pub mod config;
pub mod logging;
pub mod reduce;
pub mod morse;

// Re-export commonly used types
pub use error::{Error, Result};
pub use config::Config;
pub use reduce::{min_ops, optimal_path, reduce, Move, Reduction, Strategy};
pub use morse::{count_decodings, Decoder, Decoding, SegmentCount, SymbolTable, TableMode};
