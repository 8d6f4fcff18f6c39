//! Program listing loader.
//!
//! A program listing is ASCII text holding one 32-bit hexadecimal word
//! per whitespace-separated token, with an optional `0x` prefix. Labels,
//! comments, and mnemonics belong to the assembler, not to this loader.

use std::fs;
use std::process;
use thiserror::Error;

/// Listing parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    /// A token was not a valid 32-bit hexadecimal word.
    #[error("malformed hex word '{0}'")]
    MalformedWord(String),
}

/// Parses a hex program listing into instruction words.
pub fn parse_hex_words(text: &str) -> Result<Vec<u32>, ListingError> {
    text.split_whitespace()
        .map(|token| {
            let digits = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token);
            u32::from_str_radix(digits, 16)
                .map_err(|_| ListingError::MalformedWord(token.to_string()))
        })
        .collect()
}

/// Loads a hex program listing from disk.
///
/// Exits the process on I/O or parse failure; intended for the CLI only.
pub fn load_hex_program(path: &str) -> Vec<u32> {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Could not read file '{}': {}", path, e);
        process::exit(1);
    });
    parse_hex_words(&text).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Could not parse '{}': {}", path, e);
        process::exit(1);
    })
}
