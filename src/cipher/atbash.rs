use super::map_letters;

/// Mirrors each letter across the alphabet; encoding and decoding are the same.
pub(super) fn apply(text: &str) -> String {
    map_letters(text, |c| 25 - c)
}
