//! Secret word sources.

use std::collections::{HashMap, HashSet};

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

/// Supplies candidate words by length. Words are uppercase `A`–`Z` only.
pub trait Dictionary {
    fn words_of_length(&self, len: usize) -> &[String];
}

/// In-memory dictionary grouped by word length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordBank {
    by_length: HashMap<usize, Vec<String>>,
    seen: HashSet<String>,
}

impl WordBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uppercases each word and keeps only those made entirely of letters.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut bank = Self::new();
        for word in words {
            bank.insert(word.as_ref());
        }
        bank
    }

    /// Returns `false` when the word was rejected or already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let normalized = word.trim().to_ascii_uppercase();
        if normalized.is_empty() || !normalized.bytes().all(|b| b.is_ascii_uppercase()) {
            return false;
        }
        if !self.seen.insert(normalized.clone()) {
            return false;
        }
        self.by_length
            .entry(normalized.len())
            .or_default()
            .push(normalized);
        true
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Dictionary for WordBank {
    fn words_of_length(&self, len: usize) -> &[String] {
        self.by_length.get(&len).map(Vec::as_slice).unwrap_or_default()
    }
}

const FALLBACK_FIVE: &[&str] = &[
    "APPLE", "BRAVO", "DELTA", "FROST", "GAMMA", "HONEY", "IRONY", "JAZZY", "KNIFE", "ORBIT",
    "LEMON", "MANGO", "NINJA", "OPERA", "PIXEL", "QUEST", "RIVER", "SOLAR", "SWEET", "TABLE",
    "TIDES", "UNITY", "VIVID", "WISER", "XENON", "YIELD", "ZESTY",
];

const FALLBACK_SIX: &[&str] = &[
    "ORCHID", "FATHER", "PLANET", "SILVER", "RHYTHM", "FLOWER", "CIRCLE", "MYSTIC", "SPRING",
    "CRIMES",
];

const FALLBACK_SEVEN: &[&str] = &[
    "LIBERTY", "VOYAGER", "MYSTERY", "CRYSTAL", "HELIXES", "WEATHER", "JOURNEY",
];

/// Built-in words for the common lengths, or the five-letter list otherwise.
pub fn fallback_words(len: usize) -> &'static [&'static str] {
    match len {
        6 => FALLBACK_SIX,
        7 => FALLBACK_SEVEN,
        _ => FALLBACK_FIVE,
    }
}

/// Draws a word of exactly `len` letters, uniformly, from `dictionary`.
///
/// Falls back to the built-in lists when the dictionary has nothing of that
/// length, in which case the word may be five letters long.
pub fn pick_word<D, R>(dictionary: &D, len: usize, rng: &mut R) -> String
where
    D: Dictionary + ?Sized,
    R: Rng + ?Sized,
{
    if let Some(word) = dictionary.words_of_length(len).choose(rng) {
        debug!("Picked a {len}-letter word from the dictionary");
        return word.clone();
    }

    let fallback = fallback_words(len);
    if fallback[0].len() != len {
        warn!("No {len}-letter words available, using a five-letter word");
    }
    fallback
        .choose(rng)
        .map(|word| word.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bank_normalizes_and_filters() {
        let bank = WordBank::from_words(["apple", " Mango ", "don't", "e-mail", "", "APPLE", "caf\u{e9}"]);
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.words_of_length(5), ["APPLE", "MANGO"]);
        assert!(bank.words_of_length(6).is_empty());
    }

    #[test]
    fn test_large_bank_dedupes() {
        let words: Vec<String> = (0..40_000u32)
            .map(|n| {
                (0..8)
                    .map(|i| char::from(b'A' + ((n >> (2 * i)) % 26) as u8))
                    .collect()
            })
            .collect();
        let mut bank = WordBank::from_words(&words);
        assert_eq!(bank.len(), bank.words_of_length(8).len());
        assert!(!bank.insert(&words[123].to_lowercase()));
        assert!(bank.insert("ZZZZZZZZZ"));
        assert_eq!(bank.words_of_length(9), ["ZZZZZZZZZ"]);
    }

    #[test]
    fn test_pick_from_dictionary() {
        let bank = WordBank::from_words(["planet", "silver", "lemon"]);
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let word = pick_word(&bank, 6, &mut rng);
            assert!(word == "PLANET" || word == "SILVER", "{word}");
        }
    }

    #[test]
    fn test_fallback_lists() {
        let empty = WordBank::new();
        let mut rng = StdRng::seed_from_u64(1);
        for len in [5, 6, 7] {
            let word = pick_word(&empty, len, &mut rng);
            assert_eq!(word.len(), len);
            assert!(fallback_words(len).contains(&word.as_str()));
        }
        assert_eq!(pick_word(&empty, 12, &mut rng).len(), 5);
    }

    #[test]
    fn test_fallback_words_are_clean() {
        for len in [5, 6, 7] {
            assert!(fallback_words(len)
                .iter()
                .all(|w| w.len() == len && w.bytes().all(|b| b.is_ascii_uppercase())));
        }
    }
}
