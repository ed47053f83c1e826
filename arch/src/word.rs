use std::num::ParseIntError;

/// Number of characters in a textual machine word.
pub const WORD_BITS: usize = 16;

/// Render a word as 16 `0`/`1` characters, most significant bit first.
pub fn to_binary16(word: u16) -> String {
    format!("{:016b}", word)
}

/// Parse a string of `0`/`1` characters back into a word.
pub fn from_binary(bin: &str) -> Result<u16, ParseIntError> {
    u16::from_str_radix(bin, 2)
}
