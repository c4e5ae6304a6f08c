use super::{map_letters, Result};
use crate::CipherError;

const NAME: &str = "Vigenère Cipher";

/// Turns a keyword into its per-letter shifts. Case is ignored.
pub(super) fn parse_keyword(keyword: &str) -> Result<Vec<u8>> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(CipherError::invalid_key(NAME, "keyword must not be empty"));
    }
    if let Some(bad) = keyword.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(CipherError::invalid_key(
            NAME,
            format!("keyword must contain letters only, found `{bad}`"),
        ));
    }
    Ok(keyword
        .bytes()
        .map(|b| b.to_ascii_uppercase() - b'A')
        .collect())
}

// The key only advances on letters, so punctuation does not consume key material.
pub(super) fn encode(text: &str, shifts: &[u8]) -> String {
    let mut key = shifts.iter().cycle();
    map_letters(text, |c| c + key.next().copied().unwrap_or(0))
}

pub(super) fn decode(text: &str, shifts: &[u8]) -> String {
    let mut key = shifts.iter().cycle();
    map_letters(text, |c| c + 26 - key.next().copied().unwrap_or(0))
}
