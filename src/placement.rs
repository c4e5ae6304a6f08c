use crate::board::{Board, CipherSlot};
use log::{debug, warn};
use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How the letters of the secret word are spread over safe cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementPolicy {
    /// Random safe cells, in random order.
    #[default]
    Scatter,
    /// A run of adjacent safe cells on the middle row, read left to right.
    /// Falls back to [`PlacementPolicy::Scatter`] when the row has no such run.
    AlignedRow,
}

/// Returns a copy of `board` with one cipher slot per placed letter.
///
/// Letter `j` of `cipher_word` (and of `plaintext`) goes to the `j`-th chosen
/// cell. When the board has fewer safe cells than letters, the tail of the
/// word is left without a cell.
pub fn place_secret<R: Rng + ?Sized>(
    board: &Board,
    plaintext: &str,
    cipher_word: &str,
    policy: PlacementPolicy,
    rng: &mut R,
) -> Board {
    let letters: Vec<(char, char)> = cipher_word.chars().zip(plaintext.chars()).collect();
    let safe = board.safe_indices();

    if letters.len() > safe.len() {
        warn!(
            "Word has {} letters but the board only has {} safe cells, {} letters left unplaced",
            letters.len(),
            safe.len(),
            letters.len() - safe.len()
        );
    }

    let selected = match policy {
        PlacementPolicy::Scatter => scatter(safe, letters.len(), rng),
        PlacementPolicy::AlignedRow => aligned_row(board, letters.len()).unwrap_or_else(|| {
            debug!("No run of {} safe cells on the middle row, scattering", letters.len());
            scatter(safe, letters.len(), rng)
        }),
    };
    debug!("Placing {} letters at {:?}", selected.len(), selected);

    board.with_slots(selected.into_iter().zip(letters).enumerate().map(
        |(word_position, (index, (letter, plaintext_letter)))| {
            (
                index,
                CipherSlot {
                    letter,
                    plaintext_letter,
                    word_position,
                },
            )
        },
    ))
}

fn scatter<R: Rng + ?Sized>(safe: &[usize], letters: usize, rng: &mut R) -> Vec<usize> {
    let amount = letters.min(safe.len());
    index::sample(rng, safe.len(), amount)
        .into_iter()
        .map(|i| safe[i])
        .collect()
}

/// Leftmost run of `len` consecutive safe cells on row `rows / 2`.
fn aligned_row(board: &Board, len: usize) -> Option<Vec<usize>> {
    let (rows, cols) = board.dimensions();
    if rows == 0 || len == 0 || len > cols {
        return None;
    }
    let start = (rows / 2) * cols;
    let row = &board.cells()[start..start + cols];

    row.windows(len)
        .find(|window| window.iter().all(|cell| !cell.is_mine()))
        .map(|window| window.iter().map(|cell| cell.index).collect())
}
