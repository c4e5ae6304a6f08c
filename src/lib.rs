pub mod board;
pub mod cipher;
pub mod config;
pub mod error;
pub mod game;
pub mod placement;
pub mod position;
pub mod session;
pub mod words;

pub use board::{Board, BoardCell, CellKind, CipherSlot};
pub use cipher::{decode, encode, Cipher, CipherId, CipherSpec, Key, KeyKind, CATALOG};
pub use config::{Difficulty, DifficultyPreset, PuzzleCipher, PuzzleConfig, PUZZLE_CIPHERS};
pub use error::{CipherError, GameError};
pub use game::Game;
pub use placement::{place_secret, PlacementPolicy};
pub use position::Position;
pub use session::{GuessOutcome, MarkOutcome, PuzzleSession, RevealOutcome, SessionState};
pub use words::{pick_word, Dictionary, WordBank};
