use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use minecipher::{
    cipher, CipherId, Difficulty, Game, GuessOutcome, Key, Position, PuzzleConfig, RevealOutcome,
    SessionState, WordBank, CATALOG, PUZZLE_CIPHERS,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Classical ciphers and a minesweeper word puzzle built on them
#[derive(Parser)]
#[command(name = "minecipher", version, about, long_about = None)]
struct Cli {
    /// Enable debug messages
    #[arg(short, long, global = true, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available ciphers
    Ciphers {
        /// Print the catalog as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Encode text with a cipher
    Encode {
        /// Cipher id, e.g. caesar or rail_fence
        cipher: String,
        /// Text to encode
        text: String,
        /// Key for ciphers that need one
        #[arg(short, long, allow_hyphen_values = true)]
        key: Option<String>,
    },

    /// Decode text with a cipher
    Decode {
        /// Cipher id, e.g. caesar or rail_fence
        cipher: String,
        /// Text to decode
        text: String,
        /// Key for ciphers that need one
        #[arg(short, long, allow_hyphen_values = true)]
        key: Option<String>,
    },

    /// Play the word puzzle in the terminal
    Play {
        #[arg(value_enum, short = 'f', long, default_value_t = Difficulty::Medium)]
        difficulty: Difficulty,

        /// Puzzle cipher id
        #[arg(short, long, default_value = "caesar")]
        cipher: String,

        /// Number of final-word guesses
        #[arg(short, long, default_value_t = minecipher::config::MAX_GUESSES)]
        guesses: u32,

        /// Seed for a reproducible board
        #[arg(short, long)]
        seed: Option<u64>,

        /// Word list with one word per line
        #[arg(short, long)]
        words: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    match cli.command {
        Commands::Ciphers { json } => list_ciphers(json),
        Commands::Encode { cipher, text, key } => {
            let key = key.map(Key::from);
            println!("{}", cipher::encode(&cipher, &text, key.as_ref())?);
            Ok(())
        }
        Commands::Decode { cipher, text, key } => {
            let key = key.map(Key::from);
            println!("{}", cipher::decode(&cipher, &text, key.as_ref())?);
            Ok(())
        }
        Commands::Play {
            difficulty,
            cipher,
            guesses,
            seed,
            words,
        } => {
            let config = PuzzleConfig {
                difficulty,
                cipher: cipher.parse()?,
                max_guesses: guesses,
                ..PuzzleConfig::default()
            };
            let bank = match words {
                Some(path) => load_words(&path)?,
                None => WordBank::new(),
            };
            let game = match seed {
                Some(seed) => Game::with_seed(config, bank, seed)?,
                None => Game::from_entropy(config, bank)?,
            };
            run_game(game)
        }
    }
}

fn list_ciphers(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&CATALOG)?);
        return Ok(());
    }

    for spec in &CATALOG {
        let key = spec.key_label.unwrap_or("no key");
        println!("{:<12} {:<22} {:<16} {}", spec.id, spec.display_name, key, spec.example);
    }
    println!();
    println!(
        "Puzzle ciphers: {}",
        PUZZLE_CIPHERS
            .iter()
            .map(|c| c.id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(())
}

fn load_words(path: &PathBuf) -> Result<WordBank> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Cannot open word list {}", path.display()))?;
    let mut bank = WordBank::new();
    for line in io::BufReader::new(file).lines() {
        bank.insert(&line?);
    }
    log::info!("Loaded {} words from {}", bank.len(), path.display());
    Ok(bank)
}

enum Command {
    Reveal(Position),
    Flag(Position),
    Guess(String),
    New,
    Quit,
}

fn run_game(mut game: Game<WordBank>) -> Result<()> {
    let cipher_id: CipherId = game.config().cipher;
    println!("{}", minecipher::config::OVERVIEW);
    for (title, text) in minecipher::config::INFO_CARDS {
        println!("  {title}: {text}");
    }
    println!("Cipher: {}", cipher_id.display_name());
    if let Ok(entry) = minecipher::config::puzzle_cipher(cipher_id) {
        println!("  {}", entry.example);
    }

    loop {
        println!("{}", game.session());
        let guesses: Vec<&str> = game.session().guess_log().collect();
        if !guesses.is_empty() {
            println!("Recent guesses: {}", guesses.join(", "));
        }
        println!("{}", game.session().status());

        if game.session().state() != SessionState::Playing {
            match game.session().state() {
                SessionState::Won => println!("Congratulations! You won!"),
                SessionState::Lost => println!("Game Over!"),
                SessionState::Playing => {}
            }
            print!("Play again? [y/N]: ");
            io::stdout().flush()?;
            let mut answer = String::new();
            io::stdin().read_line(&mut answer)?;
            if !answer.trim().eq_ignore_ascii_case("y") {
                break;
            }
            game.reset();
            continue;
        }

        let Some(command) = get_user_input()? else {
            continue;
        };
        let (rows, cols) = game.session().board().dimensions();
        match command {
            Command::Reveal(pos) | Command::Flag(pos) if pos.row >= rows || pos.col >= cols => {
                println!("Position out of bounds");
            }
            Command::Reveal(pos) => match game.reveal(pos.to_index(cols)) {
                Ok(RevealOutcome::NoChange) => println!("Nothing to reveal there"),
                Ok(_) => {}
                Err(e) => println!("Error: {e}"),
            },
            Command::Flag(pos) => {
                if let Err(e) = game.toggle_flag(pos.to_index(cols)) {
                    println!("Error: {e}");
                }
            }
            Command::Guess(word) => {
                if game.submit_guess(&word) == GuessOutcome::Ignored {
                    println!("Enter a word to guess");
                }
            }
            Command::New => game.reset(),
            Command::Quit => break,
        }
    }

    println!("Thanks for playing!");
    Ok(())
}

fn get_user_input() -> Result<Option<Command>> {
    print!("Enter command (r ROW COL | f ROW COL | g WORD | n | q): ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(Some(Command::Quit));
    }
    let mut parts = input.split_whitespace();

    let command = match parts.next() {
        Some(action @ ("r" | "f")) => {
            let reveal = action == "r";
            let row = parts.next().and_then(|p| p.parse().ok());
            let col = parts.next().and_then(|p| p.parse().ok());
            match (row, col) {
                (Some(row), Some(col)) if reveal => Command::Reveal(Position::new(row, col)),
                (Some(row), Some(col)) => Command::Flag(Position::new(row, col)),
                _ => {
                    println!("Expected a row and a column");
                    return Ok(None);
                }
            }
        }
        Some("g") => Command::Guess(parts.collect::<Vec<_>>().join(" ")),
        Some("n") => Command::New,
        Some("q") => Command::Quit,
        _ => {
            println!("Invalid command. Use 'r' to reveal, 'f' to flag, 'g' to guess");
            return Ok(None);
        }
    };

    Ok(Some(command))
}
