use itertools::Itertools;

use crate::error::HuffError;
use crate::{FrequencyTable, ALPHABET_SIZE};

/// Serializes the non-zero counts as space separated "<symbol> <count>"
/// pairs in ascending symbol order, with no trailing separator.
/// Example: {97:3, 98:4, 99:2} becomes "97 3 98 4 99 2".
pub fn make_header(freqs: &FrequencyTable) -> String {
    freqs
        .iter()
        .enumerate()
        .filter(|(_, &count)| count > 0)
        .map(|(symbol, count)| format!("{} {}", symbol, count))
        .join(" ")
}

/// Rebuilds the frequency table from a header line. Rejects headers
/// whose tokens are not alternating symbol/count integer pairs.
pub fn parse_header(line: &str) -> Result<FrequencyTable, HuffError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() % 2 != 0 {
        return Err(HuffError::MalformedHeader(format!(
            "expected symbol/count pairs, got {} tokens",
            tokens.len()
        )));
    }

    let mut freqs = [0; ALPHABET_SIZE];
    for (symbol, count) in tokens.into_iter().tuples() {
        let symbol: u8 = symbol.parse().map_err(|_| {
            HuffError::MalformedHeader(format!("invalid symbol \"{}\"", symbol))
        })?;
        let count: usize = count.parse().map_err(|_| {
            HuffError::MalformedHeader(format!("invalid count \"{}\"", count))
        })?;
        freqs[symbol as usize] = count;
    }
    Ok(freqs)
}
