use crate::board::Board;
use crate::cipher::Cipher;
use crate::config::{puzzle_cipher, PuzzleConfig};
use crate::placement::place_secret;
use crate::session::{GuessOutcome, MarkOutcome, PuzzleSession, RevealOutcome};
use crate::words::{pick_word, Dictionary};
use crate::GameError;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Owns the configuration, word source and randomness, and deals fresh
/// sessions from them.
pub struct Game<D, R = StdRng> {
    config: PuzzleConfig,
    cipher: Cipher,
    dictionary: D,
    rng: R,
    session: PuzzleSession,
}

impl<D: Dictionary> Game<D, StdRng> {
    pub fn from_entropy(config: PuzzleConfig, dictionary: D) -> Result<Self, GameError> {
        Self::new(config, dictionary, StdRng::from_entropy())
    }

    pub fn with_seed(config: PuzzleConfig, dictionary: D, seed: u64) -> Result<Self, GameError> {
        Self::new(config, dictionary, StdRng::seed_from_u64(seed))
    }
}

impl<D: Dictionary, R: Rng> Game<D, R> {
    pub fn new(config: PuzzleConfig, dictionary: D, mut rng: R) -> Result<Self, GameError> {
        config.validate()?;
        let cipher = puzzle_cipher(config.cipher)?.cipher()?;
        let session = deal(&config, &cipher, &dictionary, &mut rng);
        Ok(Self {
            config,
            cipher,
            dictionary,
            rng,
            session,
        })
    }

    /// Replaces the current session with a new board and word.
    pub fn reset(&mut self) {
        self.session = deal(&self.config, &self.cipher, &self.dictionary, &mut self.rng);
    }

    /// Switches difficulty or cipher and starts over.
    pub fn reconfigure(&mut self, config: PuzzleConfig) -> Result<(), GameError> {
        config.validate()?;
        self.cipher = puzzle_cipher(config.cipher)?.cipher()?;
        self.config = config;
        self.reset();
        Ok(())
    }

    pub fn reveal(&mut self, index: usize) -> Result<RevealOutcome, GameError> {
        self.session.reveal(index)
    }

    pub fn toggle_flag(&mut self, index: usize) -> Result<MarkOutcome, GameError> {
        self.session.toggle_flag(index)
    }

    pub fn submit_guess(&mut self, guess: &str) -> GuessOutcome {
        self.session.submit_guess(guess)
    }

    pub fn session(&self) -> &PuzzleSession {
        &self.session
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    pub fn cipher(&self) -> &Cipher {
        &self.cipher
    }

    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }
}

fn deal<D, R>(config: &PuzzleConfig, cipher: &Cipher, dictionary: &D, rng: &mut R) -> PuzzleSession
where
    D: Dictionary + ?Sized,
    R: Rng + ?Sized,
{
    let preset = config.difficulty.preset();
    let board = Board::generate(preset.rows, preset.cols, config.mine_probability, rng);
    let word = pick_word(dictionary, preset.word_length, rng);
    let cipher_word = cipher.encode(&word);
    let board = place_secret(
        &board,
        &word,
        &cipher_word,
        config.difficulty.placement(),
        rng,
    );
    debug!(
        "New {} game with {}, {} letters",
        preset.name,
        cipher.id().display_name(),
        word.len()
    );
    PuzzleSession::new(board, &word, &cipher_word, config.max_guesses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::CipherId;
    use crate::config::Difficulty;
    use crate::session::SessionState;
    use crate::words::WordBank;

    #[test]
    fn test_new_game_uses_dictionary_and_cipher() {
        let bank = WordBank::from_words(["planet", "silver"]);
        let config = PuzzleConfig::new(Difficulty::Medium, CipherId::Atbash);
        let game = Game::with_seed(config, bank, 17).unwrap();

        let session = game.session();
        assert!(["PLANET", "SILVER"].contains(&session.secret_word()));
        assert_eq!(
            session.cipher_word(),
            Cipher::Atbash.encode(session.secret_word())
        );
        assert_eq!(session.board().dimensions(), (10, 25));
        assert_eq!(session.remaining_guesses(), 5);
        assert_eq!(session.state(), SessionState::Playing);
    }

    #[test]
    fn test_reset_starts_a_fresh_session() {
        let mut game =
            Game::with_seed(PuzzleConfig::default(), WordBank::new(), 3).unwrap();
        let word = game.session().secret_word().to_string();
        game.submit_guess("WRONG");
        game.submit_guess(&word);
        assert_eq!(game.session().state(), SessionState::Won);

        game.reset();
        assert_eq!(game.session().state(), SessionState::Playing);
        assert_eq!(game.session().remaining_guesses(), 5);
        assert_eq!(game.session().guess_log().count(), 0);
        assert!(game.session().revealed_cells().is_empty());
    }

    #[test]
    fn test_reconfigure() {
        let mut game =
            Game::with_seed(PuzzleConfig::default(), WordBank::new(), 8).unwrap();
        game.reconfigure(PuzzleConfig::new(Difficulty::Easy, CipherId::Rot13))
            .unwrap();
        assert_eq!(game.session().board().dimensions(), (6, 15));
        assert_eq!(game.session().secret_word().len(), 5);
        assert_eq!(game.cipher(), &Cipher::Rot13);

        let err = game.reconfigure(PuzzleConfig::new(Difficulty::Easy, CipherId::Hex));
        assert!(matches!(err, Err(GameError::UnknownPuzzleCipher(_))));
        // A rejected configuration leaves the game as it was
        assert_eq!(game.config().cipher, CipherId::Rot13);
    }

    #[test]
    fn test_rejects_zero_guesses() {
        let config = PuzzleConfig {
            max_guesses: 0,
            ..PuzzleConfig::default()
        };
        assert!(matches!(
            Game::with_seed(config, WordBank::new(), 1),
            Err(GameError::InvalidGuessLimit)
        ));
    }
}
