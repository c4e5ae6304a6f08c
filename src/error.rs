use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Unsupported cipher `{0}`")]
    UnsupportedCipher(String),
    #[error("Invalid {cipher} key: {reason}")]
    InvalidKey {
        cipher: &'static str,
        reason: String,
    },
    #[error("Invalid {cipher} input: {reason}")]
    Format {
        cipher: &'static str,
        reason: String,
    },
}

impl CipherError {
    pub(crate) fn invalid_key(cipher: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            cipher,
            reason: reason.into(),
        }
    }

    pub(crate) fn format(cipher: &'static str, reason: impl Into<String>) -> Self {
        Self::Format {
            cipher,
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell index {index} is out of bounds for a board of {cells} cells")]
    OutOfBounds { index: usize, cells: usize },
    #[error("Board shape {rows}x{cols} does not match {actual} cells")]
    InvalidBoardShape {
        rows: usize,
        cols: usize,
        actual: usize,
    },
    #[error("Unknown difficulty `{0}`")]
    UnknownDifficulty(String),
    #[error("Cipher `{0}` cannot be used in the puzzle")]
    UnknownPuzzleCipher(String),
    #[error("Guess limit must be at least 1")]
    InvalidGuessLimit,
    #[error(transparent)]
    Cipher(#[from] CipherError),
}
