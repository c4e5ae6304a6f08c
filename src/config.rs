//! Puzzle presets and per-game configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cipher::{Cipher, CipherId, Key};
use crate::placement::PlacementPolicy;
use crate::GameError;

pub const OVERVIEW: &str = "Solve the jumbled cipher hidden in the Minesweeper board.";

pub const MAX_GUESSES: u32 = 5;

/// Short rule cards shown next to the board, as `(title, text)`.
pub const INFO_CARDS: [(&str, &str); 3] = [
    (
        "How to win",
        "Reveal non-mine tiles, decode the cipher letters, then submit the final word without triggering a mine.",
    ),
    (
        "How to lose",
        "Hit a mine or use up five incorrect final-word guesses and the board will explode.",
    ),
    (
        "How to play",
        "Click safe tiles to glimpse cipher letters. Use the hints to crack the transformed word, then submit your guess.",
    ),
];

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Published board shape and word length of a difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DifficultyPreset {
    pub name: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub word_length: usize,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn preset(self) -> DifficultyPreset {
        match self {
            Difficulty::Easy => DifficultyPreset {
                name: "Easy",
                rows: 6,
                cols: 15,
                word_length: 5,
            },
            Difficulty::Medium => DifficultyPreset {
                name: "Medium",
                rows: 10,
                cols: 25,
                word_length: 6,
            },
            Difficulty::Hard => DifficultyPreset {
                name: "Hard",
                rows: 14,
                cols: 35,
                word_length: 7,
            },
        }
    }

    /// Only the hardest tier lines the secret up on the middle row.
    pub fn placement(self) -> PlacementPolicy {
        match self {
            Difficulty::Hard => PlacementPolicy::AlignedRow,
            Difficulty::Easy | Difficulty::Medium => PlacementPolicy::Scatter,
        }
    }

    pub fn from_name(name: &str) -> Result<Self, GameError> {
        Self::ALL
            .into_iter()
            .find(|d| d.preset().name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| GameError::UnknownDifficulty(name.to_string()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.preset().name)
    }
}

/// A catalog cipher usable in the puzzle, with the fixed key it is played with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PuzzleCipher {
    pub id: CipherId,
    pub key: Option<&'static str>,
    pub example: &'static str,
}

impl PuzzleCipher {
    pub fn name(&self) -> &'static str {
        self.id.display_name()
    }

    pub fn cipher(&self) -> Result<Cipher, GameError> {
        let key = self.key.map(Key::from);
        Ok(Cipher::new(self.id, key.as_ref())?)
    }
}

pub const PUZZLE_CIPHERS: [PuzzleCipher; 6] = [
    PuzzleCipher {
        id: CipherId::Affine,
        key: Some("5,8"),
        example: "Affine uses coefficients a=5, b=8. Message HELLO becomes RCLLA; decoding applies a⁻¹=21 and subtracts b to recover HELLO.",
    },
    PuzzleCipher {
        id: CipherId::Atbash,
        key: None,
        example: "Atbash mirrors A↔Z, B↔Y etc. Example: HELLO → SVOOL by swapping each letter across the alphabet.",
    },
    PuzzleCipher {
        id: CipherId::Caesar,
        key: Some("3"),
        example: "Caesar shifts by +3. HELLO becomes KHOOR; decoding shifts letters by -3 to get the original word.",
    },
    PuzzleCipher {
        id: CipherId::RailFence,
        key: Some("3"),
        example: "Rail Fence with depth 3 writes HELLO as HOELL when read row-wise; decoding re-interleaves the rows to reconstruct HELLO.",
    },
    PuzzleCipher {
        id: CipherId::Rot13,
        key: None,
        example: "ROT13 rotates each letter by 13 places. HELLO → URYYB; applying ROT13 again returns the original.",
    },
    PuzzleCipher {
        id: CipherId::Vigenere,
        key: Some("MINE"),
        example: "Vigenère with key MINE shifts letters by key letters. Using key MINE, HELLO → TMYPA; decode by reversing each shift with the key.",
    },
];

pub fn puzzle_cipher(id: CipherId) -> Result<&'static PuzzleCipher, GameError> {
    PUZZLE_CIPHERS
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| GameError::UnknownPuzzleCipher(id.to_string()))
}

/// Settings a game is started with; kept across resets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    pub difficulty: Difficulty,
    pub cipher: CipherId,
    pub max_guesses: u32,
    pub mine_probability: f64,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            cipher: CipherId::Caesar,
            max_guesses: MAX_GUESSES,
            mine_probability: Board::DEFAULT_MINE_PROBABILITY,
        }
    }
}

impl PuzzleConfig {
    pub fn new(difficulty: Difficulty, cipher: CipherId) -> Self {
        Self {
            difficulty,
            cipher,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_guesses == 0 {
            return Err(GameError::InvalidGuessLimit);
        }
        puzzle_cipher(self.cipher)?;
        Ok(())
    }
}
