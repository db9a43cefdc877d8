//! International Morse symbol tables.
//!
//! Four fixed configurations are available, selected by [`TableMode`]. Each
//! built-in table is built once and cached.

use crate::{Error, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Code points
// ============================================================================

const LETTERS: [(&str, &str); 26] = [
    ("A", ".-"),
    ("B", "-..."),
    ("C", "-.-."),
    ("D", "-.."),
    ("E", "."),
    ("F", "..-."),
    ("G", "--."),
    ("H", "...."),
    ("I", ".."),
    ("J", ".---"),
    ("K", "-.-"),
    ("L", ".-.."),
    ("M", "--"),
    ("N", "-."),
    ("O", "---"),
    ("P", ".--."),
    ("Q", "--.-"),
    ("R", ".-."),
    ("S", "..."),
    ("T", "-"),
    ("U", "..-"),
    ("V", "...-"),
    ("W", ".--"),
    ("X", "-..-"),
    ("Y", "-.--"),
    ("Z", "--.."),
];

const DIGITS: [(&str, &str); 10] = [
    ("0", "-----"),
    ("1", ".----"),
    ("2", "..---"),
    ("3", "...--"),
    ("4", "....-"),
    ("5", "....."),
    ("6", "-...."),
    ("7", "--..."),
    ("8", "---.."),
    ("9", "----."),
];

const CEDILLA: (&str, &str) = ("Ç", "-.-..");

/// Accented letters and the `CH` composite. Several share a code.
const ACCENTED: [(&str, &str); 12] = [
    CEDILLA,
    ("Ä", ".-.-"),
    ("Æ", ".-.-"),
    ("Ą", ".-.-"),
    ("Á", ".--.-"),
    ("Å", ".--.-"),
    ("É", "..-.."),
    ("È", ".-..-"),
    ("Ñ", "--.--"),
    ("Ö", "---."),
    ("Ü", "..--"),
    ("CH", "----"),
];

// ============================================================================
// Table mode
// ============================================================================

/// Which symbols the table contains
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableMode {
    /// A-Z only
    Basic,
    /// A-Z plus Ç
    #[default]
    BasicPlusCedilla,
    /// A-Z plus 0-9
    BasicPlusDigits,
    /// A-Z, 0-9, accented letters and CH
    Full,
}

impl TableMode {
    pub const ALL: [TableMode; 4] = [
        TableMode::Basic,
        TableMode::BasicPlusCedilla,
        TableMode::BasicPlusDigits,
        TableMode::Full,
    ];

    /// Canonical upper-case name, as accepted by `--mode`
    pub fn name(self) -> &'static str {
        match self {
            TableMode::Basic => "BASIC",
            TableMode::BasicPlusCedilla => "BASIC_PLUS_CEDILLA",
            TableMode::BasicPlusDigits => "BASIC_PLUS_DIGITS",
            TableMode::Full => "FULL",
        }
    }
}

impl fmt::Display for TableMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TableMode {
    type Err = Error;

    /// Case-insensitive; the short `AZ*` spellings are accepted as aliases.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "BASIC" | "AZ" => Ok(TableMode::Basic),
            "BASIC_PLUS_CEDILLA" | "AZ_CEDILLA" => Ok(TableMode::BasicPlusCedilla),
            "BASIC_PLUS_DIGITS" | "AZ_DIGITS" => Ok(TableMode::BasicPlusDigits),
            "FULL" => Ok(TableMode::Full),
            _ => Err(Error::Config(format!("unknown table mode: {}", s))),
        }
    }
}

// ============================================================================
// Symbol table
// ============================================================================

static BASIC: Lazy<SymbolTable> = Lazy::new(|| SymbolTable::build(TableMode::Basic));
static BASIC_PLUS_CEDILLA: Lazy<SymbolTable> =
    Lazy::new(|| SymbolTable::build(TableMode::BasicPlusCedilla));
static BASIC_PLUS_DIGITS: Lazy<SymbolTable> =
    Lazy::new(|| SymbolTable::build(TableMode::BasicPlusDigits));
static FULL: Lazy<SymbolTable> = Lazy::new(|| SymbolTable::build(TableMode::Full));

/// Mapping from output symbol to its Morse code
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolTable {
    mode: TableMode,
    entries: BTreeMap<String, String>,
}

impl SymbolTable {
    /// Get a reference to the cached built-in table for `mode`
    pub fn builtin(mode: TableMode) -> &'static SymbolTable {
        match mode {
            TableMode::Basic => &*BASIC,
            TableMode::BasicPlusCedilla => &*BASIC_PLUS_CEDILLA,
            TableMode::BasicPlusDigits => &*BASIC_PLUS_DIGITS,
            TableMode::Full => &*FULL,
        }
    }

    /// Owned copy of the built-in table for `mode`
    pub fn for_mode(mode: TableMode) -> SymbolTable {
        Self::builtin(mode).clone()
    }

    fn build(mode: TableMode) -> SymbolTable {
        let mut entries: BTreeMap<String, String> = LETTERS
            .iter()
            .map(|&(symbol, code)| (symbol.to_string(), code.to_string()))
            .collect();

        let extra: Vec<(&str, &str)> = match mode {
            TableMode::Basic => Vec::new(),
            TableMode::BasicPlusCedilla => vec![CEDILLA],
            TableMode::BasicPlusDigits => DIGITS.to_vec(),
            TableMode::Full => DIGITS.iter().chain(ACCENTED.iter()).copied().collect(),
        };
        for (symbol, code) in extra {
            entries.insert(symbol.to_string(), code.to_string());
        }

        tracing::debug!("Built {} table with {} symbols", mode, entries.len());
        SymbolTable { mode, entries }
    }

    pub fn mode(&self) -> TableMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Code for `symbol`, if the table has it
    pub fn code(&self, symbol: &str) -> Option<&str> {
        self.entries.get(symbol).map(String::as_str)
    }

    /// `(symbol, code)` pairs ordered by symbol
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(s, c)| (s.as_str(), c.as_str()))
    }

    /// Distinct codes; symbols that share a code appear once
    pub fn codes(&self) -> BTreeSet<&str> {
        self.entries.values().map(String::as_str).collect()
    }

    /// Every symbol whose code is exactly `code`
    pub fn decode_symbol(&self, code: &str) -> Vec<&str> {
        self.iter()
            .filter(|&(_, c)| c == code)
            .map(|(s, _)| s)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(SymbolTable::builtin(TableMode::Basic).len(), 26);
        assert_eq!(SymbolTable::builtin(TableMode::BasicPlusCedilla).len(), 27);
        assert_eq!(SymbolTable::builtin(TableMode::BasicPlusDigits).len(), 36);
        assert_eq!(SymbolTable::builtin(TableMode::Full).len(), 48);
    }

    #[test]
    fn test_full_table_collapses_shared_codes() {
        let table = SymbolTable::builtin(TableMode::Full);
        // Ä, Æ, Ą share one code and Á, Å share another
        assert_eq!(table.codes().len(), 45);
        assert_eq!(table.decode_symbol(".-.-"), vec!["Ä", "Æ", "Ą"]);
        assert_eq!(table.code("CH"), Some("----"));
    }

    #[test]
    fn test_cedilla_only_in_cedilla_and_full() {
        assert_eq!(SymbolTable::builtin(TableMode::Basic).code("Ç"), None);
        assert_eq!(
            SymbolTable::builtin(TableMode::BasicPlusCedilla).code("Ç"),
            Some("-.-..")
        );
        assert_eq!(SymbolTable::builtin(TableMode::BasicPlusDigits).code("Ç"), None);
        assert_eq!(SymbolTable::builtin(TableMode::Full).code("Ç"), Some("-.-.."));
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("FULL".parse::<TableMode>().unwrap(), TableMode::Full);
        assert_eq!("full".parse::<TableMode>().unwrap(), TableMode::Full);
        assert_eq!(" basic ".parse::<TableMode>().unwrap(), TableMode::Basic);
        assert_eq!("AZ_DIGITS".parse::<TableMode>().unwrap(), TableMode::BasicPlusDigits);
        assert_eq!("az_cedilla".parse::<TableMode>().unwrap(), TableMode::BasicPlusCedilla);

        for mode in TableMode::ALL {
            assert_eq!(mode.name().parse::<TableMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_unknown_mode_names_the_input() {
        let err = "CYRILLIC".parse::<TableMode>().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("CYRILLIC"));
    }

    #[test]
    fn test_for_mode_matches_builtin() {
        let owned = SymbolTable::for_mode(TableMode::BasicPlusDigits);
        assert_eq!(&owned, SymbolTable::builtin(TableMode::BasicPlusDigits));
        assert_eq!(owned.mode(), TableMode::BasicPlusDigits);
    }
}
