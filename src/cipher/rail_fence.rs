use super::Result;
use crate::CipherError;

const NAME: &str = "Rail Fence Cipher";

pub(super) fn validate_rails(rails: i64) -> Result<usize> {
    if rails < 1 {
        return Err(CipherError::invalid_key(
            NAME,
            format!("rail count must be at least 1, got {rails}"),
        ));
    }
    usize::try_from(rails)
        .map_err(|_| CipherError::invalid_key(NAME, format!("rail count {rails} is too large")))
}

/// Rail visited by each of the first `len` characters, bouncing between the
/// top and bottom rail.
fn zigzag(len: usize, rails: usize) -> Vec<usize> {
    let mut pattern = Vec::with_capacity(len);
    let mut rail = 0usize;
    let mut descending = true;

    for _ in 0..len {
        pattern.push(rail);
        if descending {
            rail += 1;
        } else {
            rail -= 1;
        }
        if rail == rails - 1 || rail == 0 {
            descending = !descending;
        }
    }
    pattern
}

pub(super) fn encode(text: &str, rails: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    // Rails past the text length are never visited
    let rails = rails.min(chars.len());
    if rails <= 1 {
        return text.to_string();
    }
    let pattern = zigzag(chars.len(), rails);

    (0..rails)
        .flat_map(|row| {
            pattern
                .iter()
                .zip(&chars)
                .filter(move |&(&r, _)| r == row)
                .map(|(_, &c)| c)
        })
        .collect()
}

// Replays the encode-time zigzag over the ciphertext length; only valid
// because both directions keep the text length unchanged.
pub(super) fn decode(text: &str, rails: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let rails = rails.min(chars.len());
    if rails <= 1 {
        return text.to_string();
    }
    let pattern = zigzag(chars.len(), rails);

    // Slice the ciphertext into consecutive runs, one per rail
    let mut fence: Vec<&[char]> = Vec::with_capacity(rails);
    let mut start = 0;
    for row in 0..rails {
        let len = pattern.iter().filter(|&&r| r == row).count();
        fence.push(&chars[start..start + len]);
        start += len;
    }

    let mut cursors = vec![0usize; rails];
    pattern
        .iter()
        .map(|&row| {
            let c = fence[row][cursors[row]];
            cursors[row] += 1;
            c
        })
        .collect()
}
