use itertools::Itertools;

use super::Result;
use crate::CipherError;

const NAME: &str = "Binary Encoding";

pub(super) fn encode(text: &str) -> String {
    text.bytes().map(|b| format!("{b:08b}")).join(" ")
}

/// Expects whitespace-separated groups of exactly eight binary digits.
pub(super) fn decode(text: &str) -> Result<String> {
    let bytes = text
        .split_whitespace()
        .map(|group| {
            if group.len() != 8 || !group.bytes().all(|b| b == b'0' || b == b'1') {
                return Err(CipherError::format(
                    NAME,
                    format!("`{group}` is not an 8-bit binary group"),
                ));
            }
            Ok(group.bytes().fold(0u8, |acc, b| (acc << 1) | (b - b'0')))
        })
        .collect::<Result<Vec<u8>>>()?;

    String::from_utf8(bytes)
        .map_err(|_| CipherError::format(NAME, "decoded bytes are not valid UTF-8"))
}
